//! tagtree - build HTML element trees in memory and render them as
//! indented, human-readable markup
//!
//! # Quick Start
//!
//! ```
//! use tagtree::{ContainerNode, Element, LeafNode, Render};
//! # fn main() -> Result<(), tagtree::Error> {
//! let mut div = ContainerNode::with_attributes("div", r#"class="card""#)?;
//! div.add_attributes([("class", "wide")])?;
//! div.append_content(vec![
//!     tagtree::Content::from(ContainerNode::with_content("h1", "Title")?),
//!     tagtree::Content::from(LeafNode::new("hr")?),
//!     tagtree::Content::from("body text"),
//! ]);
//!
//! let page = div.attach_to(ContainerNode::new("main")?);
//! assert_eq!(
//!     page.render(),
//!     "<main>\n  <div class=\"card wide\">\n    <h1>Title</h1>\n    <hr>\n    body text\n  </div>\n</main>\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Rendering performs no escaping; text and attribute values are written
//! exactly as given.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorCategory, ErrorKind, Pos, Result};

pub mod attributes;
pub use attributes::{AttrValue, AttributeInput, AttributeSet, NameList};

pub mod render;
pub use render::{Layout, Render, RenderConfig, DEFAULT_COMPACT_THRESHOLD, DEFAULT_INDENT_WIDTH};

pub mod node;
pub use node::{ContainerNode, Content, ContentInput, Element, Fragment, LeafNode, Node};

/// Render any node with the default configuration
pub fn render(node: &impl Render) -> String {
    node.render()
}

/// Render any node with a custom configuration
pub fn render_with_config(node: &impl Render, config: &RenderConfig) -> String {
    node.render_with(config)
}
