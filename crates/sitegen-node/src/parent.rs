//! Parent nodes: a tag wrapping the rendered markup of its children.
//!
//! Children render depth-first, left to right, and are concatenated with no
//! separator. Any child error aborts the whole render.

use crate::attributes::{serialize_attributes, write_close_tag, write_open_tag, Attributes};
use crate::{Node, Render, RenderError};

/// A container node with no text of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParentNode {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    tag: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    children: Option<Vec<Node>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    attributes: Option<Attributes>,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: None,
        }
    }

    pub fn from_parts(
        tag: Option<String>,
        children: Option<Vec<Node>>,
        attributes: Option<Attributes>,
    ) -> Self {
        Self {
            tag,
            children,
            attributes,
        }
    }

    pub fn with_attributes(mut self, attributes: impl Into<Attributes>) -> Self {
        self.attributes = Some(attributes.into());
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn children(&self) -> Option<&[Node]> {
        self.children.as_deref()
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    pub fn serialize_attributes(&self) -> String {
        serialize_attributes(self.attributes.as_ref())
    }

    pub(crate) fn write_to(&self, out: &mut String) -> Result<(), RenderError> {
        // An empty container is invalid, not `<tag></tag>`.
        let children = match self.children.as_deref() {
            Some(children) if !children.is_empty() => children,
            _ => {
                tracing::debug!(tag = ?self.tag, "parent node has no children");
                return Err(RenderError::MissingChildren);
            }
        };

        let tag = match self.tag.as_deref() {
            Some(tag) if !tag.is_empty() => tag,
            _ => {
                tracing::debug!(children = children.len(), "parent node has no tag");
                return Err(RenderError::MissingTag);
            }
        };

        write_open_tag(tag, self.attributes.as_ref(), out);
        for child in children {
            child.write_to(out)?;
        }
        write_close_tag(tag, out);

        tracing::trace!(tag, children = children.len(), "rendered parent node");
        Ok(())
    }
}

impl Render for ParentNode {
    fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_to(&mut out)?;
        Ok(out)
    }
}
