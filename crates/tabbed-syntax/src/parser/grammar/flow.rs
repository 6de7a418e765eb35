//! Flow content: the leaf blocks containers hold.
//!
//! Only what a tabbed body needs to be useful is recognized here: blank
//! lines, paragraphs and indented code. A leaf may span several lines, so
//! its marker stays open in [`Flow`] until something closes it.

use crate::options::Construct;
use crate::parser::{Marker, Parser};
use crate::syntax_kind::SyntaxKind;

use super::space;

#[derive(Debug)]
enum Leaf {
    Paragraph(Marker),
    Code(Marker),
}

/// The leaf block currently open, if any.
#[derive(Debug, Default)]
pub(super) struct Flow {
    leaf: Option<Leaf>,
}

impl Flow {
    pub(super) fn in_paragraph(&self) -> bool {
        matches!(self.leaf, Some(Leaf::Paragraph(_)))
    }

    pub(super) fn is_closed(&self) -> bool {
        self.leaf.is_none()
    }

    /// Parses the rest of the line, after every container prefix.
    pub(super) fn line(&mut self, p: &mut Parser<'_, '_>) {
        if p.at_blank_line() {
            self.close(p);
            space::whitespace(p, SyntaxKind::WHITESPACE, None);
            p.eat(SyntaxKind::NEWLINE);
            return;
        }

        let tab_stop = p.options().tab_stop();
        let code = !p.options().is_disabled(Construct::CodeIndented)
            && !p.interrupt()
            && p.indent_width() >= tab_stop;

        let continues = match self.leaf {
            Some(Leaf::Paragraph(_)) => true,
            Some(Leaf::Code(_)) => code,
            None => false,
        };
        if !continues {
            self.close(p);
            let m = p.start();
            self.leaf = Some(if code { Leaf::Code(m) } else { Leaf::Paragraph(m) });
        }

        // Code keeps indentation past the first tab stop.
        let limit = matches!(self.leaf, Some(Leaf::Code(_))).then_some(tab_stop);
        space::whitespace(p, SyntaxKind::LINE_PREFIX, limit);
        p.bump_line();
    }

    /// Completes the open leaf.
    pub(super) fn close(&mut self, p: &mut Parser<'_, '_>) {
        match self.leaf.take() {
            Some(Leaf::Paragraph(m)) => m.complete(p, SyntaxKind::PARAGRAPH),
            Some(Leaf::Code(m)) => m.complete(p, SyntaxKind::CODE_INDENTED),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::options::{Construct, ParseOptions};
    use crate::parser::{parse, parse_with_options};
    use crate::syntax_kind::{SyntaxKind, SyntaxNode};
    use pretty_assertions::assert_eq;

    fn kinds(tree: &SyntaxNode) -> Vec<SyntaxKind> {
        tree.children().map(|n| n.kind()).collect()
    }

    #[test]
    fn consecutive_lines_form_one_paragraph() {
        let tree = parse("one\n  two\nthree\n");
        assert_eq!(kinds(&tree), vec![SyntaxKind::PARAGRAPH]);
    }

    #[test]
    fn blank_line_separates_paragraphs() {
        let tree = parse("one\n \t\ntwo\n");
        assert_eq!(kinds(&tree), vec![SyntaxKind::PARAGRAPH, SyntaxKind::PARAGRAPH]);
    }

    #[test]
    fn indented_line_after_paragraph_continues_it() {
        let tree = parse("one\n    two\n");
        assert_eq!(kinds(&tree), vec![SyntaxKind::PARAGRAPH]);
    }

    #[test]
    fn indented_code_then_paragraph() {
        let tree = parse("    code\n\tmore\ntext\n");
        assert_eq!(
            kinds(&tree),
            vec![SyntaxKind::CODE_INDENTED, SyntaxKind::PARAGRAPH]
        );
    }

    #[test]
    fn code_keeps_extra_indentation() {
        let tree = parse("      code\n");
        let prefix = tree
            .descendants_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::LINE_PREFIX)
            .unwrap();
        assert_eq!(prefix.text(), "    ");
    }

    #[test]
    fn disabled_indented_code_reads_as_paragraph() {
        let options = ParseOptions::default().with_disabled(Construct::CodeIndented);
        let tree = parse_with_options("    code\n", &options);
        assert_eq!(kinds(&tree), vec![SyntaxKind::PARAGRAPH]);
    }
}
