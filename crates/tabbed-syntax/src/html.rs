//! HTML rendering.
//!
//! Tabbed blocks become `<tabbed>` elements with a `<tabbed-title>` child,
//! paragraphs become `<p>` and indented code `<pre><code>`. Flags,
//! indentation and blank lines have no output of their own.
//!
//! ```
//! use tabbed_syntax::{ParseOptions, to_html};
//!
//! let html = to_html("=== \"A\"\n    hello\n", &ParseOptions::default());
//! assert_eq!(html, "<tabbed><tabbed-title>A</tabbed-title>\n<p>hello</p>\n</tabbed>\n");
//! ```

use html_escape::encode_text;

use crate::syntax_kind::{SyntaxKind, SyntaxNode};

/// Renders a parsed document.
pub fn render(root: &SyntaxNode) -> String {
    let mut writer = HtmlWriter::default();
    writer.node(root);
    writer.finish()
}

/// Output with a stack of capture buffers.
///
/// [`HtmlWriter::buffer`] redirects writes into a fresh buffer until
/// [`HtmlWriter::resume`] hands its content back.
#[derive(Debug, Default)]
struct HtmlWriter {
    out: String,
    buffers: Vec<String>,
}

impl HtmlWriter {
    fn current(&mut self) -> &mut String {
        self.buffers.last_mut().unwrap_or(&mut self.out)
    }

    fn raw(&mut self, html: &str) {
        self.current().push_str(html);
    }

    fn text(&mut self, text: &str) {
        let encoded = encode_text(text);
        self.raw(&encoded);
    }

    fn buffer(&mut self) {
        self.buffers.push(String::new());
    }

    fn resume(&mut self) -> String {
        self.buffers.pop().unwrap_or_default()
    }

    /// Starts a new line unless already at the start of one.
    fn line_ending_if_needed(&mut self) {
        let current = self.current();
        if !current.is_empty() && !current.ends_with('\n') {
            current.push('\n');
        }
    }

    fn node(&mut self, node: &SyntaxNode) {
        match node.kind() {
            SyntaxKind::ROOT => self.children(node),
            SyntaxKind::TABBED => {
                self.line_ending_if_needed();
                self.raw("<tabbed>");
                self.children(node);
                self.line_ending_if_needed();
                self.raw("</tabbed>");
            }
            SyntaxKind::TABBED_TITLE => {
                self.buffer();
                self.text(&node.text().to_string());
                let title = self.resume();
                self.raw("<tabbed-title>");
                self.raw(&title);
                self.raw("</tabbed-title>");
            }
            SyntaxKind::PARAGRAPH => {
                self.line_ending_if_needed();
                self.raw("<p>");
                self.text(&paragraph_text(node));
                self.raw("</p>");
            }
            SyntaxKind::CODE_INDENTED => {
                self.line_ending_if_needed();
                self.raw("<pre><code>");
                self.text(&code_text(node));
                self.raw("</code></pre>");
            }
            _ => {}
        }
    }

    fn children(&mut self, node: &SyntaxNode) {
        for child in node.children() {
            self.node(&child);
        }
    }

    fn finish(mut self) -> String {
        self.line_ending_if_needed();
        self.out
    }
}

/// Content of a leaf: every token except indentation, line endings as `\n`.
fn content(node: &SyntaxNode) -> String {
    node.descendants_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| {
            !matches!(
                token.kind(),
                SyntaxKind::TABBED_INDENT | SyntaxKind::LINE_PREFIX
            )
        })
        .map(|token| match token.kind() {
            SyntaxKind::NEWLINE => "\n".to_string(),
            _ => token.text().to_string(),
        })
        .collect()
}

fn paragraph_text(node: &SyntaxNode) -> String {
    content(node)
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

fn code_text(node: &SyntaxNode) -> String {
    let mut text = content(node);
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
