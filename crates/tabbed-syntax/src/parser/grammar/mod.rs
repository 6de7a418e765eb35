//! # Grammar Rules
//!
//! This module contains the grammar rules that drive parsing. Each function
//! takes a `&mut Parser` and uses its methods to:
//!
//! 1. Inspect the current token (`p.current()`, `p.at()`, `p.nth()`)
//! 2. Consume tokens (`p.bump()`, `p.bump_n()`, `p.eat()`)
//! 3. Build tree structure (`p.start()` → marker → `complete()`/`abandon()`)
//! 4. Try and rewind (`p.attempt()`, `p.check()`)
//!
//! ## Module Structure
//!
//! - [`document`] - The per-line loop driving open containers
//! - [`tabbed`] - The tabbed section container
//! - [`flow`] - Leaf blocks between containers (paragraphs, indented code)
//! - [`space`] - Column-aware whitespace consumption
//!
//! ## Failing Without Errors
//!
//! There are no syntax errors in this grammar. A line that is not a tabbed
//! header is simply not one: the recognizer rewinds and the line becomes
//! flow content. The resulting tree always preserves all input bytes.

mod document;
mod flow;
mod space;
mod tabbed;

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

use document::Document;

/// Parse the root document.
///
/// This is the entry point for parsing. It creates a ROOT node containing
/// all top-level blocks in the document.
pub fn root(p: &mut Parser<'_, '_>) {
    let m = p.start();

    let mut document = Document::default();
    while !p.at_end() {
        document.line(p);
    }
    document.finish(p);

    m.complete(p, SyntaxKind::ROOT);
}
