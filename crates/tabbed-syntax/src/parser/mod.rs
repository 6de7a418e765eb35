//! # Parser - Event-Based Tree Construction
//!
//! This module transforms the token stream into a syntax tree using the
//! **event-based** architecture from rust-analyzer.
//!
//! Grammar functions never build the tree directly. They emit a flat list of
//! [`Event`]s through the [`Parser`], and the [`Sink`] builds the Rowan tree
//! once parsing is over.
//!
//! ## The Marker System
//!
//! `parser.start()` returns a [`Marker`] that **must** be either completed
//! (`marker.complete(parser, KIND)`) or abandoned (`marker.abandon(parser)`).
//! Dropping it without doing either panics. A marker may live across many
//! lines: an open tabbed block keeps its marker on the container stack until
//! the block is exited.
//!
//! ## Transactions
//!
//! Recognizers in this crate are allowed to fail halfway through a line. To
//! make that safe the parser can snapshot itself:
//!
//! - [`Parser::checkpoint`] / [`Parser::restore`] record and rewind the token
//!   position and the event list together;
//! - [`Parser::attempt`] runs a sub-recognizer and rewinds only on failure;
//! - [`Parser::check`] runs a sub-recognizer and always rewinds (lookahead).
//!
//! Because events are flat, rewinding is a truncation: nothing a failed
//! attempt emitted survives into the tree.
//!
//! ```
//! use tabbed_syntax::parse;
//!
//! let tree = parse("=== \"Tab\"\n    body\n");
//! assert_eq!(tree.text().to_string(), "=== \"Tab\"\n    body\n");
//! ```

pub mod event;
pub mod sink;

mod grammar;

use crate::lexer::{Token, lex};
use crate::options::ParseOptions;
use crate::syntax_kind::{SyntaxKind, SyntaxNode};
use event::Event;
use sink::Sink;

/// The parser state machine.
///
/// Holds the token stream, current position, accumulated events and the
/// per-parse configuration. Grammar functions receive `&mut Parser` and use
/// its methods to:
///
/// - Inspect tokens: `current()`, `nth()`, `at()`, `at_end()`, `column()`
/// - Consume tokens: `bump()`, `bump_n()`, `eat()`
/// - Build structure: `start()` → `Marker` → `complete()`/`abandon()`
/// - Backtrack: `checkpoint()`/`restore()`, `attempt()`, `check()`
pub struct Parser<'t, 'input> {
    tokens: &'t [Token<'input>],
    pos: usize,
    events: Vec<Event>,
    options: &'t ParseOptions,
    interrupt: bool,
    /// Columns of the last consumed tab not yet claimed by any prefix.
    spare_columns: usize,
}

/// A recorded parser position, see [`Parser::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pos: usize,
    events: usize,
    spare_columns: usize,
}

impl<'t, 'input> Parser<'t, 'input> {
    /// Create a new parser from a slice of tokens.
    pub fn new(tokens: &'t [Token<'input>], options: &'t ParseOptions) -> Self {
        Self {
            tokens,
            pos: 0,
            events: Vec::new(),
            options,
            interrupt: false,
            spare_columns: 0,
        }
    }

    /// Parse the tokens and return a syntax tree.
    pub fn parse(mut self) -> SyntaxNode {
        grammar::root(&mut self);
        let sink = Sink::new(self.tokens, self.events);
        sink.finish()
    }

    /// The options this parser was built with.
    pub fn options(&self) -> &'t ParseOptions {
        self.options
    }

    /// Start a new node and return a marker.
    pub fn start(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(Event::Placeholder);
        Marker {
            pos,
            completed: false,
        }
    }

    /// Current token kind, or EOF if past end.
    pub fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    /// Look ahead n tokens.
    pub fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    /// Check if at end of input.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Check if current token is of given kind.
    pub fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    /// Check if the current token ends the line (line ending or EOF).
    pub fn at_line_end(&self) -> bool {
        self.at(SyntaxKind::NEWLINE) || self.at_end()
    }

    /// Non-consuming check that the rest of the current line is blank.
    pub fn at_blank_line(&self) -> bool {
        let mut n = 0;
        while self.nth(n).is_space() {
            n += 1;
        }
        matches!(self.nth(n), SyntaxKind::NEWLINE | SyntaxKind::EOF)
    }

    /// Consume the current token if it matches.
    pub fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume the current token unconditionally.
    pub fn bump(&mut self) {
        if !self.at_end() {
            let kind = self.current();
            self.events.push(Event::token(kind));
            self.pos += 1;
            self.spare_columns = 0;
        }
    }

    /// Consume n tokens as a single composite token.
    pub fn bump_n(&mut self, n: usize, kind: SyntaxKind) {
        if n > 0 && self.pos + n <= self.tokens.len() {
            self.events.push(Event::Token {
                kind,
                n_raw_tokens: n as u32,
            });
            self.pos += n;
            self.spare_columns = 0;
        }
    }

    /// Consume the rest of the line, including its line ending.
    pub fn bump_line(&mut self) {
        while !self.at_line_end() {
            self.bump();
        }
        self.eat(SyntaxKind::NEWLINE);
    }

    /// Visual column of the current position within its line.
    pub fn column(&self) -> usize {
        let line_start = self.tokens[..self.pos]
            .iter()
            .rposition(|t| t.kind == SyntaxKind::NEWLINE)
            .map_or(0, |i| i + 1);
        self.tokens[line_start..self.pos]
            .iter()
            .fold(0, |column, token| column + self.width(token, column))
    }

    /// Columns the token `n` ahead occupies when it starts at `column`.
    pub fn nth_width(&self, n: usize, column: usize) -> usize {
        self.tokens
            .get(self.pos + n)
            .map_or(0, |token| self.width(token, column))
    }

    /// Columns of whitespace from the current position, without consuming.
    /// Spare columns of a partly claimed tab count as whitespace.
    pub fn indent_width(&self) -> usize {
        let start = self.column();
        let mut column = start;
        let mut n = 0;
        while self.nth(n).is_space() {
            column += self.nth_width(n, column);
            n += 1;
        }
        column - start + self.spare_columns
    }

    /// Columns of the previous tab that an indent did not need.
    ///
    /// An indent may end inside a tab. The tab is consumed whole and the
    /// columns past the indent stay available to the next prefix as if they
    /// were spaces. Consuming any token drops them.
    pub fn spare_columns(&self) -> usize {
        self.spare_columns
    }

    /// Claims up to `max` spare columns, returning how many were claimed.
    pub fn take_spare_columns(&mut self, max: usize) -> usize {
        let taken = self.spare_columns.min(max);
        self.spare_columns -= taken;
        taken
    }

    pub fn set_spare_columns(&mut self, columns: usize) {
        self.spare_columns = columns;
    }

    fn width(&self, token: &Token<'_>, column: usize) -> usize {
        match token.kind {
            SyntaxKind::TAB => {
                let tab = self.options.tab_stop();
                tab - column % tab
            }
            SyntaxKind::NEWLINE => 0,
            _ => token.text.chars().count(),
        }
    }

    /// Whether the construct being recognized would interrupt open flow.
    pub fn interrupt(&self) -> bool {
        self.interrupt
    }

    pub fn set_interrupt(&mut self, interrupt: bool) {
        self.interrupt = interrupt;
    }

    /// Record the current position, event count and spare columns.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            events: self.events.len(),
            spare_columns: self.spare_columns,
        }
    }

    /// Rewind to `checkpoint`, discarding every event emitted since.
    ///
    /// Markers started after the checkpoint must already be abandoned.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        debug_assert!(checkpoint.events <= self.events.len());
        self.pos = checkpoint.pos;
        self.events.truncate(checkpoint.events);
        self.spare_columns = checkpoint.spare_columns;
    }

    /// Run `f`, keeping its effects only if it returns `Some`.
    pub fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let checkpoint = self.checkpoint();
        let result = f(self);
        if result.is_none() {
            self.restore(checkpoint);
        }
        result
    }

    /// Run `f` as pure lookahead: its effects are always discarded.
    pub fn check<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let checkpoint = self.checkpoint();
        let result = f(self);
        self.restore(checkpoint);
        result
    }
}

/// A marker for a node being constructed.
///
/// `parser.start()` pushes a `Placeholder` event and hands out a `Marker`
/// pointing at it. The marker must be either:
///
/// - **Completed** via `marker.complete(parser, KIND)`, which turns the
///   placeholder into a `Start` event and pushes a `Finish` event
/// - **Abandoned** via `marker.abandon(parser)`, which removes the
///   placeholder (only if nothing was pushed after it)
///
/// Dropping a marker without doing either **panics**. This catches wiring
/// bugs at runtime instead of producing corrupt trees.
#[must_use = "Markers must be completed or abandoned, dropping them is a bug"]
#[derive(Debug)]
pub struct Marker {
    /// Position in the events vector where our Placeholder lives
    pos: usize,
    /// Tracks whether complete() or abandon() was called
    completed: bool,
}

impl Marker {
    /// Complete this marker, creating a node of the given kind.
    pub fn complete(mut self, p: &mut Parser<'_, '_>, kind: SyntaxKind) {
        self.completed = true;
        let event_at_pos = &mut p.events[self.pos];
        assert!(matches!(event_at_pos, Event::Placeholder));
        *event_at_pos = Event::start(kind);
        p.events.push(Event::Finish);
    }

    /// Abandon this marker without creating a node.
    ///
    /// Only removes the placeholder if it's the last event. Otherwise the
    /// placeholder stays behind, inert, and the Sink ignores it.
    pub fn abandon(mut self, p: &mut Parser<'_, '_>) {
        self.completed = true;
        if self.pos + 1 == p.events.len() {
            match p.events.pop() {
                Some(Event::Placeholder) => {}
                _ => unreachable!(),
            }
        }
    }
}

impl Drop for Marker {
    fn drop(&mut self) {
        if !self.completed && !std::thread::panicking() {
            panic!("Marker must be either completed or abandoned");
        }
    }
}

/// Parse source into a syntax tree with default options.
pub fn parse(source: &str) -> SyntaxNode {
    parse_with_options(source, &ParseOptions::default())
}

/// Parse source into a syntax tree.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> SyntaxNode {
    let tokens = lex(source);
    let parser = Parser::new(&tokens, options);
    parser.parse()
}
