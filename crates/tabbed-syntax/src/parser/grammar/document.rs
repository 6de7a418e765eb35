//! The document loop.
//!
//! Each physical line is first offered to the open containers, outermost
//! first. The first one that breaks is exited together with everything
//! nested in it. After that new containers may start, and whatever is left
//! of the line goes to [`Flow`].

use log::debug;

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

use super::flow::Flow;
use super::tabbed::{self, Continuation, OpenTabbed};

#[derive(Debug, Default)]
pub(super) struct Document {
    /// Open containers, outermost first.
    containers: Vec<OpenTabbed>,
    flow: Flow,
}

/// The first container a line does not continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineBreak {
    /// Index of the container, which is also how many continue.
    index: usize,
    sibling: bool,
    close_flow: bool,
}

impl Document {
    pub(super) fn line(&mut self, p: &mut Parser<'_, '_>) {
        p.set_interrupt(self.flow.in_paragraph());

        // Blank lines end every leaf, close it before any indent is consumed.
        if p.at_blank_line() {
            self.flow.close(p);
        }

        // Nodes of broken containers end with the previous line, so they
        // are closed before any indent of this line is emitted.
        let broken = self.find_break(p);
        if let Some(broken) = broken {
            if broken.close_flow {
                self.flow.close(p);
            }
            self.exit_containers(p, broken.index);
        }
        self.continue_containers(p);

        let mut opened = false;
        if let Some(broken) = broken
            && broken.sibling
            && let Some(open) = tabbed::open(p)
        {
            debug!("tabbed block followed by a sibling");
            self.containers.push(open);
            opened = true;
        }

        if !opened && tabbed::at_start(p) {
            self.flow.close(p);
            if let Some(open) = tabbed::open(p) {
                self.containers.push(open);
                opened = true;
            }
        }

        if opened {
            // A header always stops in front of its line ending.
            p.eat(SyntaxKind::NEWLINE);
        } else {
            self.flow.line(p);
        }
    }

    /// Runs every continuation as lookahead and reports the first break.
    fn find_break(&self, p: &mut Parser<'_, '_>) -> Option<LineBreak> {
        let mut states: Vec<_> = self.containers.iter().map(OpenTabbed::state).collect();
        p.check(|p| {
            states.iter_mut().enumerate().find_map(|(index, state)| {
                match tabbed::continuation(p, state) {
                    Continuation::Continue => None,
                    Continuation::Break { sibling } => Some(LineBreak {
                        index,
                        sibling,
                        close_flow: state.take_close_flow(),
                    }),
                }
            })
        })
    }

    /// Consumes the indentation of every open container. All of them are
    /// known to continue.
    fn continue_containers(&mut self, p: &mut Parser<'_, '_>) {
        for open in &mut self.containers {
            let outcome = tabbed::continuation(p, open.state_mut());
            debug_assert_eq!(outcome, Continuation::Continue);
        }
    }

    /// Exits containers until only `keep` remain, innermost first.
    fn exit_containers(&mut self, p: &mut Parser<'_, '_>, keep: usize) {
        debug_assert!(self.flow.is_closed());
        while self.containers.len() > keep {
            if let Some(open) = self.containers.pop() {
                tabbed::exit(p, open);
            }
        }
    }

    /// Closes everything still open at the end of input.
    pub(super) fn finish(mut self, p: &mut Parser<'_, '_>) {
        self.flow.close(p);
        self.exit_containers(p, 0);
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;
    use crate::syntax_kind::{SyntaxKind, SyntaxNode};
    use pretty_assertions::assert_eq;
    use rowan::{TextRange, TextSize};

    /// Node kinds, indented by depth.
    fn outline(tree: &SyntaxNode) -> Vec<String> {
        tree.descendants()
            .skip(1)
            .filter(|n| matches!(n.kind(), SyntaxKind::TABBED | SyntaxKind::PARAGRAPH | SyntaxKind::CODE_INDENTED))
            .map(|n| {
                let depth = n.ancestors().skip(1).filter(|a| a.kind() != SyntaxKind::ROOT).count();
                format!("{}{:?}", "  ".repeat(depth), n.kind())
            })
            .collect()
    }

    fn nodes(tree: &SyntaxNode, kind: SyntaxKind) -> Vec<SyntaxNode> {
        tree.descendants().filter(|n| n.kind() == kind).collect()
    }

    #[test]
    fn sibling_closes_the_previous_block() {
        let tree = parse("=== \"A\"\n    a\n=== \"B\"\n    b\n");
        assert_eq!(
            outline(&tree),
            vec!["TABBED", "  PARAGRAPH", "TABBED", "  PARAGRAPH"]
        );
    }

    #[test]
    fn nested_block_breaks_with_its_parent() {
        let tree = parse("=== \"A\"\n    === \"B\"\n        b\nafter\n");
        assert_eq!(
            outline(&tree),
            vec!["TABBED", "  TABBED", "    PARAGRAPH", "PARAGRAPH"]
        );
    }

    #[test]
    fn nested_block_breaks_alone() {
        let tree = parse("=== \"A\"\n    === \"B\"\n        b\n    a\n");
        assert_eq!(
            outline(&tree),
            vec!["TABBED", "  TABBED", "    PARAGRAPH", "  PARAGRAPH"]
        );
    }

    #[test]
    fn broken_nested_block_ends_before_the_next_indent() {
        let tree = parse("=== \"A\"\n    === \"B\"\n        b\n    a\n");
        let tabbed = nodes(&tree, SyntaxKind::TABBED);
        let paragraphs = nodes(&tree, SyntaxKind::PARAGRAPH);

        assert_eq!(tabbed[1].text().to_string(), "=== \"B\"\n        b\n");
        assert_eq!(tabbed[1].text_range(), TextRange::new(12.into(), 30.into()));
        assert_eq!(paragraphs[0].text().to_string(), "b\n");
        assert_eq!(paragraphs[0].text_range(), TextRange::new(28.into(), 30.into()));
        // The indent of the line that broke B belongs to A.
        assert_eq!(tabbed[0].text_range(), TextRange::new(0.into(), 36.into()));
        assert_eq!(paragraphs[1].text().to_string(), "a\n");
    }

    #[test]
    fn nested_sibling_starts_after_the_shared_indent() {
        let tree = parse("=== \"A\"\n    === \"B\"\n        b\n    === \"C\"\n        c\n");
        let tabbed = nodes(&tree, SyntaxKind::TABBED);
        let paragraphs = nodes(&tree, SyntaxKind::PARAGRAPH);

        assert_eq!(tabbed[1].text().to_string(), "=== \"B\"\n        b\n");
        assert_eq!(paragraphs[0].text().to_string(), "b\n");
        assert_eq!(tabbed[2].text().to_string(), "=== \"C\"\n        c\n");
        assert_eq!(tabbed[2].text_range().start(), TextSize::from(34));
    }

    #[test]
    fn nested_sibling_stays_inside_the_parent() {
        let tree = parse("=== \"A\"\n    === \"B\"\n        b\n    === \"C\"\n        c\n");
        assert_eq!(
            outline(&tree),
            vec![
                "TABBED",
                "  TABBED",
                "    PARAGRAPH",
                "  TABBED",
                "    PARAGRAPH"
            ]
        );
    }

    #[test]
    fn header_interrupts_a_paragraph() {
        let tree = parse("text\n=== \"A\"\n    a\n");
        assert_eq!(outline(&tree), vec!["PARAGRAPH", "TABBED", "  PARAGRAPH"]);
    }

    #[test]
    fn block_open_at_end_of_input_is_closed() {
        let input = "=== \"A\"\n    a";
        let tree = parse(input);
        assert_eq!(outline(&tree), vec!["TABBED", "  PARAGRAPH"]);
        assert_eq!(tree.text().to_string(), input);
    }

    #[test]
    fn header_without_body_is_an_empty_block() {
        let tree = parse("=== \"A\"\n");
        assert_eq!(outline(&tree), vec!["TABBED"]);
    }
}
