//! Container content items

use std::fmt;

use super::{ContainerNode, Fragment, LeafNode, Node};
use crate::render::{Render, RenderConfig};

/// A single content item: text or a nested node
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Node(Node),
}

impl Content {
    /// Text item from anything displayable
    pub fn text(value: impl fmt::Display) -> Self {
        Self::Text(value.to_string())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Node(_) => None,
        }
    }

    pub const fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Text(_) => None,
            Self::Node(node) => Some(node),
        }
    }
}

impl Render for Content {
    fn render_with(&self, config: &RenderConfig) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Node(node) => node.render_with(config),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<LeafNode> for Content {
    fn from(node: LeafNode) -> Self {
        Self::Node(node.into())
    }
}

impl From<ContainerNode> for Content {
    fn from(node: ContainerNode) -> Self {
        Self::Node(node.into())
    }
}

impl From<Fragment> for Content {
    fn from(node: Fragment) -> Self {
        Self::Node(node.into())
    }
}

/// One item or an arbitrarily nested sequence of items
///
/// Appending flattens every level, so container content never holds a
/// sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentInput {
    Item(Content),
    Seq(Vec<ContentInput>),
}

impl ContentInput {
    /// Depth-first flatten into `out`, preserving order
    pub(crate) fn flatten_into(self, out: &mut Vec<Content>) {
        match self {
            Self::Item(item) => out.push(item),
            Self::Seq(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }

    pub fn flatten(self) -> Vec<Content> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }
}

impl Default for ContentInput {
    fn default() -> Self {
        Self::Seq(Vec::new())
    }
}

impl From<Content> for ContentInput {
    fn from(item: Content) -> Self {
        Self::Item(item)
    }
}

impl From<&str> for ContentInput {
    fn from(text: &str) -> Self {
        Self::Item(text.into())
    }
}

impl From<String> for ContentInput {
    fn from(text: String) -> Self {
        Self::Item(text.into())
    }
}

impl From<Node> for ContentInput {
    fn from(node: Node) -> Self {
        Self::Item(node.into())
    }
}

impl From<LeafNode> for ContentInput {
    fn from(node: LeafNode) -> Self {
        Self::Item(node.into())
    }
}

impl From<ContainerNode> for ContentInput {
    fn from(node: ContainerNode) -> Self {
        Self::Item(node.into())
    }
}

impl From<Fragment> for ContentInput {
    fn from(node: Fragment) -> Self {
        Self::Item(node.into())
    }
}

impl<T: Into<Self>> From<Vec<T>> for ContentInput {
    fn from(items: Vec<T>) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for ContentInput {
    fn from(items: [T; N]) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for ContentInput {
    fn from(item: Option<T>) -> Self {
        item.map(Into::into).unwrap_or_default()
    }
}
