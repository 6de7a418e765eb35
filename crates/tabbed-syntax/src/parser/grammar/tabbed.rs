//! Tabbed sections.
//!
//! ```markdown
//! === "C++"
//!     Body of the first tab, indented one tab stop past the header.
//!
//! ===! "Rust"
//!     Body of the second tab.
//! ```
//!
//! A tabbed block is a container. Its header line is recognized once by
//! [`open`]; every following line is offered to [`continuation`] until that
//! reports a break, and [`exit`] then closes the block's node.
//!
//! The header line is scanned by an explicit state machine: [`transition`]
//! maps a state and the current token to a [`Step`], and [`header`] applies
//! the steps to the parser. A failed header leaves nothing behind: callers
//! run it inside [`Parser::attempt`] or [`Parser::check`].

use log::{debug, trace};

use crate::flags::Flags;
use crate::parser::{Marker, Parser};
use crate::syntax_kind::SyntaxKind;

use super::space;

/// Number of `=` in a tab marker.
const MARKER_LEN: u8 = 3;

/// State owned by one open tabbed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ContainerState {
    /// Columns a body line must be indented by, relative to the position
    /// the enclosing containers leave the line at.
    required_indent: usize,
    /// Set for the duration of one continuation step when the block breaks;
    /// the host closes open flow content in response.
    close_flow: bool,
}

impl ContainerState {
    fn new(required_indent: usize) -> Self {
        Self {
            required_indent,
            close_flow: false,
        }
    }

    pub(crate) fn required_indent(&self) -> usize {
        self.required_indent
    }

    /// Takes the pending close-flow signal, clearing it.
    pub(crate) fn take_close_flow(&mut self) -> bool {
        std::mem::take(&mut self.close_flow)
    }
}

/// An open tabbed block: the marker of its node and its state.
#[derive(Debug)]
pub(crate) struct OpenTabbed {
    marker: Marker,
    state: ContainerState,
}

impl OpenTabbed {
    pub(crate) fn state(&self) -> ContainerState {
        self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut ContainerState {
        &mut self.state
    }
}

/// Outcome of offering a line to an open block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Continuation {
    /// The line belongs to the block; its indentation has been consumed.
    Continue,
    /// The block ends before this line. `sibling` is set when the line is
    /// itself a tabbed header at the block's own level.
    Break { sibling: bool },
}

/// States of the header line scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeaderState {
    /// Before the first `=`.
    Start,
    /// Inside the marker, holding the number of `=` seen.
    Equals(u8),
    /// Inside the flags.
    Flags(Flags),
    /// After the whitespace that separates marker and title.
    Gap,
    /// Between the quotes.
    Title,
    /// After the closing quote.
    Trailing,
}

/// What to do with the current token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Apply the effect and continue in the given state.
    Next(HeaderState, Effect),
    /// The current token is the line ending of a valid header.
    Done,
    /// Not a tabbed header.
    Nok,
}

/// Parser effect of a [`Step::Next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Effect {
    /// Consume the token.
    Consume,
    /// Open the flag node and consume the token into it.
    EnterFlag,
    /// Close the flag node, then consume the whitespace run.
    ExitFlag,
    /// Consume the whitespace run.
    Gap,
    /// Consume the opening quote, then open the title node.
    EnterTitle,
    /// Close the title node, then consume the closing quote.
    ExitTitle,
}

fn flag_char(kind: SyntaxKind) -> Option<char> {
    match kind {
        SyntaxKind::PLUS => Some('+'),
        SyntaxKind::BANG => Some('!'),
        _ => None,
    }
}

/// Transition function of the header scanner.
pub(crate) fn transition(state: HeaderState, kind: SyntaxKind) -> Step {
    match state {
        HeaderState::Start if kind == SyntaxKind::EQ => {
            Step::Next(HeaderState::Equals(1), Effect::Consume)
        }
        HeaderState::Start => Step::Nok,

        // A fourth `=` means this is not a tab marker.
        HeaderState::Equals(n) if kind == SyntaxKind::EQ && n < MARKER_LEN => {
            Step::Next(HeaderState::Equals(n + 1), Effect::Consume)
        }
        HeaderState::Equals(MARKER_LEN) if kind.is_space() => {
            Step::Next(HeaderState::Gap, Effect::Gap)
        }
        HeaderState::Equals(MARKER_LEN) => match flag_char(kind).and_then(Flags::first) {
            Some(flags) => Step::Next(HeaderState::Flags(flags), Effect::EnterFlag),
            None => Step::Nok,
        },
        HeaderState::Equals(_) => Step::Nok,

        HeaderState::Flags(_) if kind.is_space() => {
            Step::Next(HeaderState::Gap, Effect::ExitFlag)
        }
        HeaderState::Flags(flags) => match flag_char(kind).and_then(|c| flags.then(c)) {
            Some(flags) => Step::Next(HeaderState::Flags(flags), Effect::Consume),
            None => Step::Nok,
        },

        HeaderState::Gap if kind == SyntaxKind::QUOTE => {
            Step::Next(HeaderState::Title, Effect::EnterTitle)
        }
        HeaderState::Gap if kind.is_space() => Step::Next(HeaderState::Gap, Effect::Gap),
        HeaderState::Gap => Step::Nok,

        // The first closing quote ends the title, whatever follows it.
        HeaderState::Title if kind == SyntaxKind::QUOTE => {
            Step::Next(HeaderState::Trailing, Effect::ExitTitle)
        }
        HeaderState::Title if matches!(kind, SyntaxKind::NEWLINE | SyntaxKind::EOF) => Step::Nok,
        HeaderState::Title => Step::Next(HeaderState::Title, Effect::Consume),

        HeaderState::Trailing if kind.is_space() => {
            Step::Next(HeaderState::Trailing, Effect::Consume)
        }
        HeaderState::Trailing if kind == SyntaxKind::NEWLINE => Step::Done,
        // Includes EOF: a header must end a line, not the input.
        HeaderState::Trailing => Step::Nok,
    }
}

/// Scans a header line, stopping in front of its line ending.
///
/// Emits the marker tokens, the flag node and the title node. Returns false
/// on any invalid input; the caller must then rewind.
fn header(p: &mut Parser<'_, '_>) -> bool {
    let mut state = HeaderState::Start;
    let mut flag: Option<Marker> = None;
    let mut title: Option<Marker> = None;

    let matched = loop {
        let kind = p.current();
        match transition(state, kind) {
            Step::Next(next, effect) => {
                match effect {
                    Effect::Consume => p.bump(),
                    Effect::EnterFlag => {
                        flag = Some(p.start());
                        p.bump();
                    }
                    Effect::ExitFlag => {
                        if let Some(m) = flag.take() {
                            m.complete(p, SyntaxKind::TABBED_FLAG);
                        }
                        space::whitespace(p, SyntaxKind::WHITESPACE, None);
                    }
                    Effect::Gap => {
                        space::whitespace(p, SyntaxKind::WHITESPACE, None);
                    }
                    Effect::EnterTitle => {
                        p.bump();
                        title = Some(p.start());
                    }
                    Effect::ExitTitle => {
                        if let Some(m) = title.take() {
                            m.complete(p, SyntaxKind::TABBED_TITLE);
                        }
                        p.bump();
                    }
                }
                state = next;
            }
            Step::Done => break true,
            Step::Nok => {
                if state != HeaderState::Start {
                    trace!("not a tabbed header: {kind:?} in {state:?}");
                }
                break false;
            }
        }
    };

    for m in [title, flag].into_iter().flatten() {
        m.abandon(p);
    }
    matched
}

/// Leading whitespace a header may sit behind.
fn line_prefix(p: &mut Parser<'_, '_>) -> usize {
    let limit = p.options().line_prefix_limit();
    space::whitespace(p, SyntaxKind::LINE_PREFIX, limit)
}

/// Non-consuming check for a tabbed header at the current position.
pub(crate) fn at_start(p: &mut Parser<'_, '_>) -> bool {
    p.check(|p| {
        line_prefix(p);
        let marker = p.start();
        let matched = header(p);
        marker.abandon(p);
        matched
    })
}

/// Opens a tabbed block if the rest of the line is a header.
///
/// The body must be indented one tab stop past the header's own prefix.
pub(crate) fn open(p: &mut Parser<'_, '_>) -> Option<OpenTabbed> {
    p.attempt(|p| {
        let prefix = line_prefix(p);
        let marker = p.start();
        if !header(p) {
            marker.abandon(p);
            return None;
        }
        let state = ContainerState::new(prefix + p.options().tab_stop());
        debug!(
            "tabbed block opened, body indent {}",
            state.required_indent()
        );
        Some(OpenTabbed { marker, state })
    })
}

/// Decides whether the line at the current position still belongs to the
/// block owning `state`.
///
/// Blank lines always continue the block. Other lines continue only when
/// indented by the full required width, which is then consumed as the
/// line's `TABBED_INDENT`.
pub(crate) fn continuation(p: &mut Parser<'_, '_>, state: &mut ContainerState) -> Continuation {
    state.close_flow = false;

    if p.at_blank_line() {
        space::whitespace(
            p,
            SyntaxKind::TABBED_INDENT,
            Some(state.required_indent + 1),
        );
        return Continuation::Continue;
    }

    let indented = p.current().is_space() || p.spare_columns() > 0;
    if indented
        && space::exactly(p, SyntaxKind::TABBED_INDENT, state.required_indent)
    {
        return Continuation::Continue;
    }

    state.close_flow = true;
    // The flow this block held is being closed, nothing is interrupted.
    p.set_interrupt(false);
    Continuation::Break {
        sibling: at_start(p),
    }
}

/// Closes the node of a block that [`continuation`] broke, or that is still
/// open at the end of input.
pub(crate) fn exit(p: &mut Parser<'_, '_>, open: OpenTabbed) {
    debug!(
        "tabbed block closed, body indent {}",
        open.state.required_indent()
    );
    open.marker.complete(p, SyntaxKind::TABBED);
}
