//! # Lexer - Tokenizing Tabbed Markdown Source
//!
//! The first parsing stage breaks the source into tokens with the [Logos]
//! lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! **Every byte in the input appears in exactly one token.** Nothing is
//! skipped, so the tree built from these tokens prints back the original
//! text:
//!
//! ```
//! use tabbed_syntax::lexer::lex;
//!
//! let input = "=== \"C++\"\n    body\n";
//! let tokens = lex(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Token Granularity
//!
//! The tabbed header is validated one character at a time and body
//! indentation is measured in columns, so the characters that matter get a
//! token each:
//!
//! - `=` → `EQ` (the `===` marker)
//! - `+`, `!` → `PLUS`, `BANG` (header flags)
//! - `"` → `QUOTE` (title delimiters)
//! - one space → `SPACE`, one tab → `TAB`
//!
//! Whitespace is deliberately **not** grouped into runs: the indentation
//! matcher must be able to stop after exactly N columns of a longer run.
//! The parser regroups consumed whitespace into composite tokens later.
//!
//! Everything else becomes `TEXT`, grouped into runs.

use logos::Logos;

use crate::syntax_kind::SyntaxKind;

/// Token kinds produced by the Logos lexer.
///
/// Each variant maps to a `SyntaxKind` token. `#[logos(skip r"")]` skips
/// nothing; all input is handled explicitly.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"")]
pub enum TokenKind {
    /// A single space
    #[token(" ")]
    Space,

    /// A single horizontal tab
    #[token("\t")]
    Tab,

    /// Line ending (LF or CRLF)
    #[regex(r"\r?\n")]
    Newline,

    /// `=` of the tab marker
    #[token("=")]
    Eq,

    /// `+` flag
    #[token("+")]
    Plus,

    /// `!` flag
    #[token("!")]
    Bang,

    /// `"` around the title
    #[token("\"")]
    Quote,

    /// Plain text - anything not matched by other rules
    #[regex(r#"[^ \t\r\n=+!"]+"#)]
    Text,
}

impl TokenKind {
    /// Convert to SyntaxKind.
    pub fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Space => SyntaxKind::SPACE,
            TokenKind::Tab => SyntaxKind::TAB,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::Eq => SyntaxKind::EQ,
            TokenKind::Plus => SyntaxKind::PLUS,
            TokenKind::Bang => SyntaxKind::BANG,
            TokenKind::Quote => SyntaxKind::QUOTE,
            TokenKind::Text => SyntaxKind::TEXT,
        }
    }
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    lex_with_spans(input)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Lex and return tokens along with their byte spans.
pub fn lex_with_spans(input: &str) -> Vec<(Token<'_>, std::ops::Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        let kind = match result {
            Ok(token_kind) => token_kind.to_syntax_kind(),
            // A lone `\r` is the only input no rule accepts
            Err(()) => SyntaxKind::TEXT,
        };
        tokens.push((Token { kind, text }, span));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn token(kind: SyntaxKind, text: &str) -> Token<'_> {
        Token { kind, text }
    }

    #[test]
    fn lex_empty_input() {
        assert_eq!(lex(""), vec![]);
    }

    #[test]
    fn lex_plain_text() {
        assert_eq!(lex("hello"), vec![token(SyntaxKind::TEXT, "hello")]);
    }

    #[test]
    fn lex_whitespace_is_one_token_per_character() {
        assert_eq!(
            lex("  \t"),
            vec![
                token(SyntaxKind::SPACE, " "),
                token(SyntaxKind::SPACE, " "),
                token(SyntaxKind::TAB, "\t"),
            ]
        );
    }

    #[test]
    fn lex_newline_crlf() {
        assert_eq!(lex("\r\n"), vec![token(SyntaxKind::NEWLINE, "\r\n")]);
    }

    #[test]
    fn lex_lone_carriage_return_is_text() {
        assert_eq!(lex("\r"), vec![token(SyntaxKind::TEXT, "\r")]);
    }

    #[test]
    fn lex_header_line() {
        assert_eq!(
            lex("===+! \"C++\"\n"),
            vec![
                token(SyntaxKind::EQ, "="),
                token(SyntaxKind::EQ, "="),
                token(SyntaxKind::EQ, "="),
                token(SyntaxKind::PLUS, "+"),
                token(SyntaxKind::BANG, "!"),
                token(SyntaxKind::SPACE, " "),
                token(SyntaxKind::QUOTE, "\""),
                token(SyntaxKind::TEXT, "C"),
                token(SyntaxKind::PLUS, "+"),
                token(SyntaxKind::PLUS, "+"),
                token(SyntaxKind::QUOTE, "\""),
                token(SyntaxKind::NEWLINE, "\n"),
            ]
        );
    }

    #[test]
    fn lex_non_ascii_text() {
        assert_eq!(lex("héllo"), vec![token(SyntaxKind::TEXT, "héllo")]);
    }

    #[test]
    fn all_bytes_preserved() {
        let input = "=== \"Tab 1\"\n    Markdown **content**.\n\n===! \"Tab 2\"\r\n\tMore!\n";
        let reconstructed: String = lex(input).iter().map(|t| t.text).collect();
        assert_eq!(input, reconstructed);
    }

    #[test]
    fn spans_are_correct() {
        let input = "=== \"a b\"\n  x";
        for (token, span) in lex_with_spans(input) {
            assert_eq!(token.text, &input[span]);
        }
    }
}
