//! # tabbed-syntax
//!
//! Tabbed sections for Markdown, parsed into a lossless syntax tree using
//! [Rowan] + [Logos] and following the [rust-analyzer] architecture model.
//!
//! [Rowan]: https://docs.rs/rowan
//! [Logos]: https://docs.rs/logos
//! [rust-analyzer]: https://rust-analyzer.github.io/book/contributing/syntax.html
//!
//! ## The Syntax
//!
//! ```markdown
//! === "Linux"
//!     Install with the package manager.
//!
//! ===+ "macOS"
//!     Install with Homebrew.
//! ```
//!
//! A header line is `===`, optional flags (`+`, `!`, `+!` or `!+`), at
//! least one space and a quoted title. The body is every following line
//! indented one tab stop past the header; blank lines never end it. A
//! header at the block's own level ends it and opens a sibling.
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Events → Sink → Rowan Tree → HTML
//!               (Logos)          (Grammar)        (GreenNodeBuilder)   (html)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! Every character becomes part of some token; the ones the header grammar
//! looks at get a token each.
//!
//! ```text
//! "=== \"A\"\n" → [EQ, EQ, EQ, SPACE, QUOTE, TEXT("A"), QUOTE, NEWLINE]
//! ```
//!
//! ### 2. Parser ([`parser`] module)
//!
//! The parser consumes tokens and emits **events**. Recognizers run inside
//! transactions, so a line that turns out not to be a header leaves no
//! trace and is parsed as ordinary content.
//!
//! ### 3. Sink ([`parser::sink`] module)
//!
//! The sink replays events into a `GreenNodeBuilder`. Whitespace the parser
//! grouped (a body line's indentation, say) becomes one token.
//!
//! ## Module Structure
//!
//! ```text
//! tabbed-syntax/
//! ├── lib.rs           # This file - public API and tree snapshot tests
//! ├── syntax_kind.rs   # SyntaxKind enum (tokens + nodes) and Rowan integration
//! ├── lexer.rs         # Logos-based tokenizer
//! ├── options.rs       # ParseOptions: tab size, disabled constructs
//! ├── flags.rs         # Header flags
//! ├── ast.rs           # Typed views: Document, TabbedBlock
//! ├── html.rs          # HTML renderer
//! └── parser/
//!     ├── mod.rs       # Parser struct, Marker system, transactions
//!     ├── event.rs     # Event enum (Start, Token, Finish, Placeholder)
//!     ├── sink.rs      # Converts events to Rowan GreenNode
//!     └── grammar/
//!         ├── mod.rs      # Root document parsing
//!         ├── document.rs # Per-line container loop
//!         ├── tabbed.rs   # Header and continuation scanners
//!         ├── flow.rs     # Paragraphs and indented code
//!         └── space.rs    # Column-aware whitespace matching
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tabbed_syntax::{parse, Document, SyntaxKind};
//!
//! let tree = parse("=== \"Tab\"\n    body\n");
//!
//! // The tree preserves all text
//! assert_eq!(tree.text().to_string(), "=== \"Tab\"\n    body\n");
//!
//! // Navigate the tree structure
//! assert_eq!(tree.kind(), SyntaxKind::ROOT);
//! let document = Document::cast(tree).unwrap();
//! let tab = document.tabbed_blocks().next().unwrap();
//! assert_eq!(tab.title(), "Tab");
//! assert_eq!(tab.body(), "body\n");
//! ```

pub mod ast;
pub mod flags;
pub mod html;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod syntax_kind;

pub use ast::{Document, TabbedBlock};
pub use flags::Flags;
pub use options::{Construct, ParseOptions};
pub use parser::{parse, parse_with_options};
pub use syntax_kind::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, TabbedLang};

/// Parses `source` and renders it to HTML.
pub fn to_html(source: &str, options: &ParseOptions) -> String {
    html::render(&parse_with_options(source, options))
}
