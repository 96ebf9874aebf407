//! Sitegen Node
//!
//! A small HTML node tree that renders itself to markup strings.
//! Leaves wrap a text value in at most one tag; parents wrap the
//! concatenated markup of their children.
//!
//! ```text
//! ParentNode("div") ─┬─ LeafNode("b", "Bold")   → <div><b>Bold</b>plain</div>
//!                    └─ LeafNode(None, "plain")
//! ```
//!
//! # Example
//!
//! ```
//! use sitegen_node::{LeafNode, ParentNode, Render};
//!
//! let node = ParentNode::new("div", vec![LeafNode::new("p", "hello").into()])
//!     .with_attributes([("class", "note")]);
//! assert_eq!(node.render().unwrap(), "<div class=\"note\"><p>hello</p></div>");
//! ```

pub mod attributes;
pub mod leaf;
pub mod node;
pub mod parent;

pub use attributes::Attributes;
pub use leaf::LeafNode;
pub use node::{HtmlNode, Node};
pub use parent::ParentNode;

/// Structural error raised while rendering a node tree.
///
/// Errors are raised at the node that violates its invariant and propagate
/// unchanged through every ancestor; no partial markup is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A bare [`HtmlNode`] has no rendering of its own.
    #[error("render is not implemented for a bare node")]
    NotImplemented,
    /// A leaf node was rendered without a value.
    #[error("leaf node has no value")]
    MissingValue,
    /// A parent node was rendered with absent or empty children.
    #[error("parent node has no children")]
    MissingChildren,
    /// A parent node was rendered without a tag.
    #[error("parent node has no tag")]
    MissingTag,
}

/// Anything that renders to a markup string.
pub trait Render {
    fn render(&self) -> Result<String, RenderError>;
}
