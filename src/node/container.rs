//! Elements that wrap ordered content between an opening and closing tag

use std::fmt;

use tracing::trace;

use super::{Content, ContentInput, Element, LeafNode};
use crate::attributes::AttributeInput;
use crate::error::Result;
use crate::render::{Layout, Render, RenderConfig};

/// An element with content, rendered as `<tag>...</tag>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerNode {
    head: LeafNode,
    content: Vec<Content>,
    layout: Layout,
}

impl ContainerNode {
    /// Create an empty container; fails when `tag` is empty or contains whitespace
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        Ok(Self {
            head: LeafNode::new(tag)?,
            content: Vec::new(),
            layout: Layout::default(),
        })
    }

    pub fn with_attributes(
        tag: impl Into<String>,
        attributes: impl Into<AttributeInput>,
    ) -> Result<Self> {
        Ok(Self {
            head: LeafNode::with_attributes(tag, attributes)?,
            content: Vec::new(),
            layout: Layout::default(),
        })
    }

    pub fn with_content(tag: impl Into<String>, content: impl Into<ContentInput>) -> Result<Self> {
        let mut node = Self::new(tag)?;
        node.append_content(content);
        Ok(node)
    }

    /// Create a container from all three construction inputs
    pub fn build(
        tag: impl Into<String>,
        attributes: impl Into<AttributeInput>,
        content: impl Into<ContentInput>,
    ) -> Result<Self> {
        let mut node = Self::with_attributes(tag, attributes)?;
        node.append_content(content);
        Ok(node)
    }

    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub const fn layout(&self) -> Layout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: Layout) -> &mut Self {
        self.layout = layout;
        self
    }

    pub fn content(&self) -> &[Content] {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Append one item or a (possibly nested) sequence of items
    pub fn append_content(&mut self, addition: impl Into<ContentInput>) -> &mut Self {
        let addition: ContentInput = addition.into();
        addition.flatten_into(&mut self.content);
        self
    }

    /// Drop the current content, then append `replacement`
    pub fn replace_content(&mut self, replacement: impl Into<ContentInput>) -> &mut Self {
        self.content.clear();
        self.append_content(replacement)
    }

    pub fn clear_content(&mut self) -> &mut Self {
        self.content.clear();
        self
    }

    pub fn closing_tag(&self) -> String {
        format!("</{}>", self.head.tag)
    }

    /// Append this container to `parent` and hand the parent back
    pub fn attach_to(self, mut parent: Self) -> Self {
        parent.append_content(self);
        parent
    }

    pub fn render_content(&self) -> String {
        self.render_content_with(&RenderConfig::default())
    }

    /// Render only what goes between the tags
    ///
    /// Compact output is the items' text run together. Expanded output is a
    /// line break followed by every line of every item, each indented one
    /// level and terminated by a line break.
    pub fn render_content_with(&self, config: &RenderConfig) -> String {
        let rendered: Vec<String> = self
            .content
            .iter()
            .map(|item| item.render_with(config))
            .collect();

        let compact = match self.layout {
            Layout::Compact => true,
            Layout::Expanded => false,
            Layout::Auto => fits_on_one_line(&rendered, config.compact_threshold),
        };
        trace!(
            tag = %self.head.tag,
            layout = ?self.layout,
            compact,
            items = rendered.len(),
            "resolved container layout"
        );

        if compact {
            rendered.iter().flat_map(|text| text.lines()).collect()
        } else {
            let indent = config.indent();
            let mut output = String::from("\n");
            for line in rendered.iter().flat_map(|text| text.lines()) {
                if !line.is_empty() {
                    output.push_str(&indent);
                    output.push_str(line);
                }
                output.push('\n');
            }
            output
        }
    }
}

/// Short, single-line content stays inline
fn fits_on_one_line(rendered: &[String], threshold: usize) -> bool {
    if rendered.iter().any(|text| text.contains('\n')) {
        return false;
    }
    let length: usize = rendered.iter().map(|text| text.chars().count()).sum();
    length <= threshold
}

impl Element for ContainerNode {
    fn head(&self) -> &LeafNode {
        &self.head
    }

    fn head_mut(&mut self) -> &mut LeafNode {
        &mut self.head
    }
}

impl Render for ContainerNode {
    fn render_with(&self, config: &RenderConfig) -> String {
        let mut output = self.opening_tag();
        output.push_str(&self.render_content_with(config));
        output.push_str(&self.closing_tag());
        config.terminate(&mut output);
        output
    }
}

impl fmt::Display for ContainerNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
