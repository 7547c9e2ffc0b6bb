//! Tagless grouping of nodes

use std::fmt;

use super::{Content, ContainerNode, ContentInput};
use crate::render::{Render, RenderConfig};

/// Ordered content rendered back to back, with no tags of its own
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    content: Vec<Content>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<ContentInput>) -> Self {
        let mut fragment = Self::new();
        fragment.append_content(content);
        fragment
    }

    pub fn content(&self) -> &[Content] {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn append_content(&mut self, addition: impl Into<ContentInput>) -> &mut Self {
        let addition: ContentInput = addition.into();
        addition.flatten_into(&mut self.content);
        self
    }

    pub fn replace_content(&mut self, replacement: impl Into<ContentInput>) -> &mut Self {
        self.content.clear();
        self.append_content(replacement)
    }

    pub fn clear_content(&mut self) -> &mut Self {
        self.content.clear();
        self
    }

    /// Append this fragment to `parent` and hand the parent back
    pub fn attach_to(self, mut parent: ContainerNode) -> ContainerNode {
        parent.append_content(self);
        parent
    }
}

impl Render for Fragment {
    fn render_with(&self, config: &RenderConfig) -> String {
        let mut output = String::new();
        for item in &self.content {
            let text = item.render_with(config);
            let terminated = text.ends_with('\n');
            output.push_str(&text);
            if !terminated {
                config.terminate(&mut output);
            }
        }
        output
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
