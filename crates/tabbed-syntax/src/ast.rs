//! Typed views over the syntax tree.
//!
//! Each wrapper holds a [`SyntaxNode`] of one kind and reads its parts on
//! demand. Nothing is copied out of the tree at construction.

use crate::flags::Flags;
use crate::options::ParseOptions;
use crate::syntax_kind::{SyntaxKind, SyntaxNode};

/// The whole parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    syntax: SyntaxNode,
}

impl Document {
    pub fn cast(syntax: SyntaxNode) -> Option<Self> {
        (syntax.kind() == SyntaxKind::ROOT).then_some(Self { syntax })
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }

    /// Every tabbed block in document order, nested blocks included.
    pub fn tabbed_blocks(&self) -> impl Iterator<Item = TabbedBlock> + '_ {
        self.syntax.descendants().filter_map(TabbedBlock::cast)
    }
}

/// One tabbed section: header line plus indented body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabbedBlock {
    syntax: SyntaxNode,
}

impl TabbedBlock {
    pub fn cast(syntax: SyntaxNode) -> Option<Self> {
        (syntax.kind() == SyntaxKind::TABBED).then_some(Self { syntax })
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }

    /// The text between the title quotes.
    pub fn title(&self) -> String {
        self.child(SyntaxKind::TABBED_TITLE)
            .map(|title| title.text().to_string())
            .unwrap_or_default()
    }

    /// The header flags, if any were written.
    pub fn flags(&self) -> Option<Flags> {
        self.child(SyntaxKind::TABBED_FLAG)?
            .text()
            .to_string()
            .parse()
            .ok()
    }

    /// Paragraphs, indented code and nested tabbed blocks of the body.
    pub fn blocks(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.syntax.children().filter(|node| {
            matches!(
                node.kind(),
                SyntaxKind::PARAGRAPH | SyntaxKind::CODE_INDENTED | SyntaxKind::TABBED
            )
        })
    }

    /// Source text of the body with the block's indentation removed, for
    /// the default options.
    pub fn body(&self) -> String {
        self.body_with(&ParseOptions::default())
    }

    /// Source text of the body with the block's indentation removed.
    ///
    /// The body starts one tab stop past the header's first `=`. Each line
    /// drops the `TABBED_INDENT` tokens in front of that column. When a tab
    /// crosses it, the columns past it come out as spaces. Indentation owned
    /// by blocks nested in the body is kept.
    pub fn body_with(&self, options: &ParseOptions) -> String {
        let tab = options.tab_stop();
        let content_column = self.header_column(tab) + tab;

        let mut body = String::new();
        let mut past_header = false;
        let mut column = 0;
        let mut at_line_start = true;
        let mut overshoot = 0;

        for token in self
            .syntax
            .descendants_with_tokens()
            .filter_map(|element| element.into_token())
        {
            if !past_header {
                // The first line ending belonging to this node ends the header.
                if token.kind() == SyntaxKind::NEWLINE
                    && token.parent().as_ref() == Some(&self.syntax)
                {
                    past_header = true;
                }
                continue;
            }

            let start = column;
            column = advance(column, token.text(), tab);

            if at_line_start
                && token.kind() == SyntaxKind::TABBED_INDENT
                && start < content_column
            {
                overshoot = column.saturating_sub(content_column);
                continue;
            }

            match token.kind() {
                SyntaxKind::NEWLINE => {
                    at_line_start = true;
                    column = 0;
                    overshoot = 0;
                }
                // Blank line whitespace is kept as written.
                SyntaxKind::WHITESPACE => at_line_start = false,
                _ => {
                    at_line_start = false;
                    body.extend(std::iter::repeat_n(' ', overshoot));
                    overshoot = 0;
                }
            }
            body.push_str(token.text());
        }
        body
    }

    /// Column of the header's first `=` within its line.
    fn header_column(&self, tab: usize) -> usize {
        let mut before = Vec::new();
        let mut token = self.syntax.first_token().and_then(|t| t.prev_token());
        while let Some(current) = token {
            if current.kind() == SyntaxKind::NEWLINE {
                break;
            }
            token = current.prev_token();
            before.push(current);
        }
        before
            .iter()
            .rev()
            .fold(0, |column, token| advance(column, token.text(), tab))
    }

    fn child(&self, kind: SyntaxKind) -> Option<SyntaxNode> {
        self.syntax.children().find(|node| node.kind() == kind)
    }
}

/// Column reached after `text` when it starts at `column`.
fn advance(column: usize, text: &str, tab: usize) -> usize {
    text.chars().fold(column, |column, c| match c {
        '\t' => column + tab - column % tab,
        '\n' | '\r' => column,
        _ => column + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn blocks(input: &str) -> Vec<TabbedBlock> {
        Document::cast(parse(input))
            .map(|doc| doc.tabbed_blocks().collect())
            .unwrap_or_default()
    }

    #[test]
    fn cast_checks_the_kind() {
        let tree = parse("text\n");
        assert!(TabbedBlock::cast(tree.clone()).is_none());
        assert!(Document::cast(tree).is_some());
    }

    #[test]
    fn title_and_flags() {
        let blocks = blocks("===+! \"C++ = fun!\"\n    x\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].title(), "C++ = fun!");
        assert_eq!(blocks[0].flags(), Some(Flags::PlusBang));
    }

    #[test]
    fn empty_title_without_flags() {
        let blocks = blocks("=== \"\"\n");
        assert_eq!(blocks[0].title(), "");
        assert_eq!(blocks[0].flags(), None);
    }

    #[test]
    fn body_strips_the_required_indent() {
        let blocks = blocks("  === \"A\"\n      one\n        two\n\n      three\n");
        assert_eq!(blocks[0].body(), "one\n  two\n\nthree\n");
    }

    #[test]
    fn nested_body_keeps_inner_indentation() {
        let blocks = blocks("=== \"A\"\n    === \"B\"\n        b\n    a\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].body(), "=== \"B\"\n    b\na\n");
        assert_eq!(blocks[1].title(), "B");
        assert_eq!(blocks[1].body(), "b\n");
    }

    #[test]
    fn tab_crossing_the_body_column_leaves_spaces() {
        let blocks = blocks("  === \"A\"\n\t\tbody\n    \tmore\n");
        assert_eq!(blocks[0].body(), "  body\n  more\n");
    }

    #[test]
    fn body_with_uses_the_tab_size() {
        let options = ParseOptions {
            tab_size: 2,
            ..ParseOptions::default()
        };
        let tree = crate::parser::parse_with_options("  === \"A\"\n\t\t\tx\n", &options);
        let block = tree.descendants().find_map(TabbedBlock::cast).unwrap();
        assert_eq!(block.body_with(&options), "\tx\n");
        assert_eq!(block.body(), "  \tx\n");
    }

    #[test]
    fn blocks_lists_body_content() {
        let blocks = blocks("=== \"A\"\n    para\n\n        code\n");
        let kinds: Vec<_> = blocks[0].blocks().map(|n| n.kind()).collect();
        assert_eq!(kinds, vec![SyntaxKind::PARAGRAPH, SyntaxKind::CODE_INDENTED]);
    }
}
