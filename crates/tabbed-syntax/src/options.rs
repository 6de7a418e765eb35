//! Parse options handed to the parser at construction.

use serde::{Deserialize, Serialize};

/// A host construct that can be switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Construct {
    /// Indented code blocks. While enabled they compete with container
    /// headers for leading whitespace.
    CodeIndented,
}

/// Options that shape recognition.
///
/// ```
/// use tabbed_syntax::{Construct, ParseOptions};
///
/// let options = ParseOptions::default();
/// assert_eq!(options.tab_size, 4);
/// assert_eq!(options.line_prefix_limit(), Some(3));
///
/// let options = ParseOptions::default().with_disabled(Construct::CodeIndented);
/// assert_eq!(options.line_prefix_limit(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Columns of a tab stop. A tabbed body is indented one tab stop deeper
    /// than its header.
    pub tab_size: usize,
    /// Constructs that are not recognized at all.
    pub disable: Vec<Construct>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            disable: Vec::new(),
        }
    }
}

impl ParseOptions {
    /// Returns a copy with `construct` added to the disabled set.
    #[must_use]
    pub fn with_disabled(mut self, construct: Construct) -> Self {
        if !self.is_disabled(construct) {
            self.disable.push(construct);
        }
        self
    }

    pub fn is_disabled(&self, construct: Construct) -> bool {
        self.disable.contains(&construct)
    }

    /// Tab stop width, never zero.
    pub fn tab_stop(&self) -> usize {
        self.tab_size.max(1)
    }

    /// Most columns of leading whitespace a container header may sit behind.
    ///
    /// One full tab stop of indentation belongs to indented code, so while
    /// that construct is enabled a header must start before it. With
    /// indented code disabled any indentation is allowed (`None`).
    pub fn line_prefix_limit(&self) -> Option<usize> {
        if self.is_disabled(Construct::CodeIndented) {
            None
        } else {
            Some(self.tab_stop() - 1)
        }
    }
}
