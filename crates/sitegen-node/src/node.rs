//! The bare node and the closed set of renderable child nodes.

use crate::attributes::{serialize_attributes, Attributes};
use crate::{LeafNode, ParentNode, Render, RenderError};

/// A node with every field optional.
///
/// Holds shared state and attribute serialization but has no markup form of
/// its own: [`Render::render`] always fails with [`RenderError::NotImplemented`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HtmlNode {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    tag: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    value: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    children: Option<Vec<Node>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    attributes: Option<Attributes>,
}

impl HtmlNode {
    pub fn new(
        tag: Option<String>,
        value: Option<String>,
        children: Option<Vec<Node>>,
        attributes: Option<Attributes>,
    ) -> Self {
        Self {
            tag,
            value,
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

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
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
}

impl Render for HtmlNode {
    fn render(&self) -> Result<String, RenderError> {
        tracing::debug!(tag = ?self.tag, "render called on a bare node");
        Err(RenderError::NotImplemented)
    }
}

/// A node that can appear in a parent's children.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Node {
    /// Text content, optionally wrapped in one tag.
    Leaf(LeafNode),
    /// A tag wrapping other nodes.
    Parent(ParentNode),
}

impl Node {
    /// Append this node's markup to `out`.
    pub(crate) fn write_to(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            Node::Leaf(leaf) => leaf.write_to(out),
            Node::Parent(parent) => parent.write_to(out),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag(),
            Node::Parent(parent) => parent.tag(),
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Node::Leaf(leaf) => leaf.attributes(),
            Node::Parent(parent) => parent.attributes(),
        }
    }
}

impl Render for Node {
    fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_to(&mut out)?;
        Ok(out)
    }
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<ParentNode> for Node {
    fn from(parent: ParentNode) -> Self {
        Node::Parent(parent)
    }
}
