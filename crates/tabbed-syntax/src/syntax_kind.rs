//! SyntaxKind enum for all tokens and nodes in the tabbed markdown CST.
//!
//! Following the rust-analyzer model, all tokens and nodes share a single enum.
//! Every byte in the source must appear as a token in the tree.

/// All syntax kinds for the tabbed markdown CST.
///
/// This enum represents both tokens (lexer output and parser-grouped
/// composites) and nodes (parser output). The `repr(u16)` ensures efficient
/// storage in rowan's green tree.
///
/// We use SCREAMING_CASE following the rust-analyzer convention for SyntaxKind.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // === Raw tokens (lexer output) ===
    /// A single space
    SPACE,
    /// A single tab
    TAB,
    /// Line ending
    NEWLINE,
    /// Plain text content
    TEXT,
    /// `=` of the tab marker
    EQ,
    /// `+` flag character
    PLUS,
    /// `!` flag character
    BANG,
    /// `"` title delimiter
    QUOTE,

    // === Composite tokens (several raw tokens grouped by the parser) ===
    /// Whitespace run with no structural meaning
    WHITESPACE,
    /// Leading whitespace of a line that no container claimed
    LINE_PREFIX,
    /// Leading whitespace claimed by an open tabbed block
    TABBED_INDENT,
    /// End of file marker
    EOF,

    // === Composite Nodes (parser output) ===
    /// Root document node
    ROOT,
    /// A whole tabbed section: header line plus indented body
    TABBED,
    /// Raw flag characters of a header (`+`, `!`, `+!`, `!+`)
    TABBED_FLAG,
    /// Title text, strictly between the quotes
    TABBED_TITLE,
    /// Paragraph block
    PARAGRAPH,
    /// Indented code block
    CODE_INDENTED,
}

impl SyntaxKind {
    /// Returns true if this kind represents a token (lexer output).
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::EOF as u16)
    }

    /// Returns true if this kind represents a composite node.
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Returns true if this kind is trivia (whitespace/newlines).
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::SPACE
                | Self::TAB
                | Self::NEWLINE
                | Self::WHITESPACE
                | Self::LINE_PREFIX
                | Self::TABBED_INDENT
        )
    }

    /// Returns true for a single space or tab.
    pub fn is_space(self) -> bool {
        matches!(self, Self::SPACE | Self::TAB)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language definition for rowan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TabbedLang {}

impl rowan::Language for TabbedLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::CODE_INDENTED as u16);
        // SAFETY: We check bounds above and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type alias for our syntax nodes.
pub type SyntaxNode = rowan::SyntaxNode<TabbedLang>;
/// Type alias for our syntax tokens.
pub type SyntaxToken = rowan::SyntaxToken<TabbedLang>;
/// Type alias for syntax elements (node or token).
pub type SyntaxElement = rowan::SyntaxElement<TabbedLang>;

#[cfg(test)]
mod tests {
    use super::*;
    use rowan::Language;

    #[test]
    fn token_kinds_are_tokens() {
        assert!(SyntaxKind::SPACE.is_token());
        assert!(SyntaxKind::TABBED_INDENT.is_token());
        assert!(SyntaxKind::EOF.is_token());
    }

    #[test]
    fn node_kinds_are_nodes() {
        assert!(SyntaxKind::ROOT.is_node());
        assert!(SyntaxKind::TABBED.is_node());
        assert!(SyntaxKind::TABBED_TITLE.is_node());
    }

    #[test]
    fn trivia_detection() {
        assert!(SyntaxKind::TAB.is_trivia());
        assert!(SyntaxKind::TABBED_INDENT.is_trivia());
        assert!(!SyntaxKind::QUOTE.is_trivia());
    }

    #[test]
    fn rowan_conversion_roundtrip() {
        for kind in [SyntaxKind::SPACE, SyntaxKind::TABBED, SyntaxKind::CODE_INDENTED] {
            let raw: rowan::SyntaxKind = kind.into();
            assert_eq!(TabbedLang::kind_from_raw(raw), kind);
        }
    }
}
