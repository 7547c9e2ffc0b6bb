//! Element tree nodes

pub mod container;
pub mod content;
pub mod fragment;
pub mod leaf;

use std::fmt;

use tracing::debug;

pub use container::ContainerNode;
pub use content::{Content, ContentInput};
pub use fragment::Fragment;
pub use leaf::LeafNode;

use crate::attributes::{AttributeInput, AttributeSet, NameList};
use crate::error::{Error, ErrorKind, Result};
use crate::render::{Render, RenderConfig};

/// Any node of the tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Leaf(LeafNode),
    Container(ContainerNode),
    Fragment(Fragment),
}

impl Node {
    /// Tag name, if the node has one
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => Some(leaf.tag()),
            Self::Container(container) => Some(container.tag()),
            Self::Fragment(_) => None,
        }
    }

    /// Append this node to `parent` and hand the parent back
    pub fn attach_to(self, mut parent: ContainerNode) -> ContainerNode {
        parent.append_content(self);
        parent
    }
}

impl Render for Node {
    fn render_with(&self, config: &RenderConfig) -> String {
        match self {
            Self::Leaf(leaf) => leaf.render_with(config),
            Self::Container(container) => container.render_with(config),
            Self::Fragment(fragment) => fragment.render_with(config),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<LeafNode> for Node {
    fn from(node: LeafNode) -> Self {
        Self::Leaf(node)
    }
}

impl From<ContainerNode> for Node {
    fn from(node: ContainerNode) -> Self {
        Self::Container(node)
    }
}

impl From<Fragment> for Node {
    fn from(node: Fragment) -> Self {
        Self::Fragment(node)
    }
}

/// Shared behaviour of tagged nodes: a tag name plus an owned attribute set
pub trait Element {
    fn head(&self) -> &LeafNode;

    fn head_mut(&mut self) -> &mut LeafNode;

    fn tag(&self) -> &str {
        &self.head().tag
    }

    /// Change the tag name, re-validating it
    fn set_tag(&mut self, tag: impl Into<String>) -> Result<()>
    where
        Self: Sized,
    {
        let tag = validate_tag(tag.into())?;
        self.head_mut().tag = tag;
        Ok(())
    }

    fn attributes(&self) -> &AttributeSet {
        &self.head().attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeSet {
        &mut self.head_mut().attributes
    }

    fn add_attributes(&mut self, input: impl Into<AttributeInput>) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.attributes_mut().add(input)?;
        Ok(self)
    }

    fn replace_attributes(&mut self, input: impl Into<AttributeInput>) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.attributes_mut().replace(input)?;
        Ok(self)
    }

    fn delete_attributes(&mut self, names: impl Into<NameList>) -> &mut Self
    where
        Self: Sized,
    {
        self.attributes_mut().delete(names);
        self
    }

    /// Drop every attribute, then add `input`
    ///
    /// The input is parsed first; on failure the old attributes remain.
    fn reset_attributes(&mut self, input: impl Into<AttributeInput>) -> Result<&mut Self>
    where
        Self: Sized,
    {
        let fresh = AttributeSet::parse(input)?;
        *self.attributes_mut() = fresh;
        Ok(self)
    }

    /// `<tag>` or `<tag name="value">`
    fn opening_tag(&self) -> String {
        let head = self.head();
        if head.attributes.is_empty() {
            format!("<{}>", head.tag)
        } else {
            format!("<{} {}>", head.tag, head.attributes)
        }
    }
}

/// Reject empty tag names and names containing whitespace
pub(crate) fn validate_tag(tag: String) -> Result<String> {
    if tag.is_empty() {
        debug!("rejected empty tag name");
        return Err(Error::new(ErrorKind::EmptyTag));
    }
    if tag.chars().any(char::is_whitespace) {
        debug!(tag = %tag, "rejected tag name");
        return Err(Error::new(ErrorKind::InvalidTag { tag }));
    }
    Ok(tag)
}
