//! Rendering configuration and the [`Render`] trait

/// Spaces added per nesting level
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Longest concatenated content an `Auto` container keeps on one line
pub const DEFAULT_COMPACT_THRESHOLD: usize = 60;

/// Configuration options for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Number of spaces for indentation
    pub indent_width: usize,
    /// Inclusive length limit for compact container content
    pub compact_threshold: usize,
    /// Whether a rendered node ends with a line break
    pub trailing_newline: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            compact_threshold: DEFAULT_COMPACT_THRESHOLD,
            trailing_newline: true,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    #[must_use]
    pub const fn with_compact_threshold(mut self, threshold: usize) -> Self {
        self.compact_threshold = threshold;
        self
    }

    #[must_use]
    pub const fn with_trailing_newline(mut self, enabled: bool) -> Self {
        self.trailing_newline = enabled;
        self
    }

    /// One indentation unit
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_width)
    }

    pub(crate) fn terminate(&self, output: &mut String) {
        if self.trailing_newline {
            output.push('\n');
        }
    }
}

/// How a container lays out its content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// Compact when the content is short and single-line, expanded otherwise.
    #[default]
    Auto,
    /// Always on one line, child lines joined without separators.
    Compact,
    /// Always one content line per line, indented one level.
    Expanded,
}

/// Anything that renders to markup text
///
/// Rendering never mutates the tree, so repeated calls on an unchanged node
/// return identical output.
pub trait Render {
    fn render_with(&self, config: &RenderConfig) -> String;

    fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }

    /// Rendered output split into lines without terminators
    fn lines(&self, config: &RenderConfig) -> Vec<String> {
        self.render_with(config)
            .lines()
            .map(str::to_string)
            .collect()
    }
}
