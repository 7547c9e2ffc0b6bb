//! Self-closing elements such as `<hr>` or `<img src="...">`

use std::fmt;

use super::{validate_tag, ContainerNode, Element};
use crate::attributes::{AttributeInput, AttributeSet};
use crate::error::Result;
use crate::render::{Render, RenderConfig};

/// A self-closing element: tag name plus attributes, no content
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafNode {
    pub(crate) tag: String,
    pub(crate) attributes: AttributeSet,
}

impl LeafNode {
    /// Create an element; fails when `tag` is empty or contains whitespace
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        Ok(Self {
            tag: validate_tag(tag.into())?,
            attributes: AttributeSet::new(),
        })
    }

    /// Create an element with initial attributes
    pub fn with_attributes(
        tag: impl Into<String>,
        attributes: impl Into<AttributeInput>,
    ) -> Result<Self> {
        let mut node = Self::new(tag)?;
        node.attributes.add(attributes)?;
        Ok(node)
    }

    /// Append this element to `parent` and hand the parent back
    pub fn attach_to(self, mut parent: ContainerNode) -> ContainerNode {
        parent.append_content(self);
        parent
    }
}

impl Element for LeafNode {
    fn head(&self) -> &Self {
        self
    }

    fn head_mut(&mut self) -> &mut Self {
        self
    }
}

impl Render for LeafNode {
    fn render_with(&self, config: &RenderConfig) -> String {
        let mut output = self.opening_tag();
        config.terminate(&mut output);
        output
    }
}

impl fmt::Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_basic_element() -> Result<()> {
        assert_eq!(LeafNode::new("hr")?.render(), "<hr>\n");
        Ok(())
    }

    #[test]
    fn test_empty_tag_is_rejected() {
        let err = LeafNode::new("").err();
        assert_eq!(err.map(|e| e.kind().clone()), Some(ErrorKind::EmptyTag));
    }

    #[test]
    fn test_opening_tag_with_attributes() -> Result<()> {
        let img = LeafNode::with_attributes("img", [("src", "angry-baby.jpg"), ("class", "stumpy")])?;
        assert_eq!(img.opening_tag(), r#"<img src="angry-baby.jpg" class="stumpy">"#);
        Ok(())
    }

    #[test]
    fn test_without_trailing_newline() -> Result<()> {
        let config = RenderConfig::default().with_trailing_newline(false);
        assert_eq!(LeafNode::new("br")?.render_with(&config), "<br>");
        Ok(())
    }

    #[test]
    fn test_set_tag_revalidates() -> Result<()> {
        let mut node = LeafNode::new("hr")?;
        assert!(node.set_tag("").is_err());
        assert_eq!(node.tag(), "hr");
        node.set_tag("br")?;
        assert_eq!(node.render(), "<br>\n");
        Ok(())
    }
}
