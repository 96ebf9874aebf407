//! Leaf nodes: a text value wrapped in at most one tag.

use crate::attributes::{serialize_attributes, write_close_tag, write_open_tag, Attributes};
use crate::{Render, RenderError};

/// A node holding literal text.
///
/// With a tag it renders as `<tag attrs>value</tag>`; without one (or with an
/// empty tag) the value is emitted unchanged and attributes are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeafNode {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    tag: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    value: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    attributes: Option<Attributes>,
}

impl LeafNode {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: None,
        }
    }

    /// A tagless leaf that renders as its raw value.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attributes: None,
        }
    }

    pub fn from_parts(
        tag: Option<String>,
        value: Option<String>,
        attributes: Option<Attributes>,
    ) -> Self {
        Self {
            tag,
            value,
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

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    pub fn serialize_attributes(&self) -> String {
        serialize_attributes(self.attributes.as_ref())
    }

    pub(crate) fn write_to(&self, out: &mut String) -> Result<(), RenderError> {
        let Some(value) = self.value.as_deref() else {
            tracing::debug!(tag = ?self.tag, "leaf node has no value");
            return Err(RenderError::MissingValue);
        };

        match self.tag.as_deref() {
            None | Some("") => out.push_str(value),
            Some(tag) => {
                write_open_tag(tag, self.attributes.as_ref(), out);
                out.push_str(value);
                write_close_tag(tag, out);
            }
        }
        Ok(())
    }
}

impl Render for LeafNode {
    fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_to(&mut out)?;
        Ok(out)
    }
}
