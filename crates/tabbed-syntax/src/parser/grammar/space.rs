//! Whitespace-width matching.
//!
//! Container prefixes are measured in columns, not characters: a tab counts
//! up to the next tab stop. Consumed whitespace is grouped into one
//! composite token so the tree shows a single `TABBED_INDENT` (or
//! `LINE_PREFIX`, …) per line instead of one token per column.

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Consumes spaces and tabs as one `kind` token, stopping before the run
/// would exceed `max` columns. Returns the consumed width.
///
/// Spare columns left by a previous indent are claimed first. `None` means
/// no limit. A tab that would cross the limit is not consumed; the run stops
/// in front of it.
pub(crate) fn whitespace(p: &mut Parser<'_, '_>, kind: SyntaxKind, max: Option<usize>) -> usize {
    let mut width = p.take_spare_columns(max.unwrap_or(usize::MAX));
    let mut column = p.column();
    let mut n = 0;

    while p.nth(n).is_space() {
        let w = p.nth_width(n, column);
        if max.is_some_and(|max| width + w > max) {
            break;
        }
        width += w;
        column += w;
        n += 1;
    }

    p.bump_n(n, kind);
    width
}

/// Consumes exactly `width` columns of indentation as one `kind` token.
///
/// Succeeds when at least `width` columns of indentation are present. A
/// tab crossing `width` is consumed whole and its columns past `width` are
/// left as spare columns. On a shorter run nothing stays consumed.
pub(crate) fn exactly(p: &mut Parser<'_, '_>, kind: SyntaxKind, width: usize) -> bool {
    p.attempt(|p| {
        let mut consumed = p.take_spare_columns(width);
        let mut column = p.column();
        let mut n = 0;

        while consumed < width && p.nth(n).is_space() {
            let w = p.nth_width(n, column);
            consumed += w;
            column += w;
            n += 1;
        }
        if consumed < width {
            return None;
        }

        if n > 0 {
            p.bump_n(n, kind);
            p.set_spare_columns(consumed - width);
        }
        Some(())
    })
    .is_some()
}
