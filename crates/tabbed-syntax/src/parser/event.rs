//! # Parser Events
//!
//! Events are the intermediate representation between parsing and tree
//! building. The parser emits a **flat sequence** of events describing the
//! tree, and the [`Sink`](super::sink::Sink) turns them into a Rowan tree.
//!
//! ```text
//! Start(TABBED)
//!   Token(EQ) Token(EQ) Token(EQ)
//!   Token(WHITESPACE)
//!   Token(QUOTE)
//!   Start(TABBED_TITLE)
//!     Token(TEXT)
//!   Finish
//!   Token(QUOTE)
//!   Token(NEWLINE)
//!   Token(TABBED_INDENT)   ← 4 raw SPACE tokens grouped into one
//!   Start(PARAGRAPH) ... Finish
//! Finish
//! ```
//!
//! A flat list is also what makes backtracking cheap: rewinding a failed
//! attempt is a truncation back to a recorded length.

use crate::syntax_kind::SyntaxKind;

/// An event emitted by the parser during tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Begin a new composite node.
    Start { kind: SyntaxKind },

    /// Add a token to the current node.
    ///
    /// `n_raw_tokens` says how many lexer tokens this event consumes.
    /// Usually 1; indentation groups one raw token per column.
    Token { kind: SyntaxKind, n_raw_tokens: u32 },

    /// Finish the current node.
    Finish,

    /// A placeholder that will be replaced.
    ///
    /// `parser.start()` pushes one; `marker.complete()` turns it into a
    /// `Start`. Abandoned placeholders are ignored by the Sink.
    Placeholder,
}

impl Event {
    /// Create a start event.
    pub fn start(kind: SyntaxKind) -> Self {
        Event::Start { kind }
    }

    /// Create a token event for a single raw token.
    pub fn token(kind: SyntaxKind) -> Self {
        Event::Token {
            kind,
            n_raw_tokens: 1,
        }
    }
}
