//! Ordered attribute map and its markup serialization.
//!
//! Attributes render in insertion order as ` name="value"`. Values are
//! inserted verbatim; nothing is escaped.

/// Attribute name/value pairs in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute. An existing name keeps its position and gets the
    /// new value, which returns the old one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for Attributes {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

/// Serialize optional attributes into opening-tag markup.
///
/// Absent or empty attributes produce `""`; otherwise each attribute becomes
/// ` name="value"` with a single leading space.
pub fn serialize_attributes(attributes: Option<&Attributes>) -> String {
    let mut out = String::new();
    write_attributes(attributes, &mut out);
    out
}

pub(crate) fn write_attributes(attributes: Option<&Attributes>, out: &mut String) {
    let Some(attributes) = attributes else {
        return;
    };
    for (name, value) in attributes.iter() {
        out.push_str(&format!(" {name}=\"{value}\""));
    }
}

/// Write `<tag attrs>`.
pub(crate) fn write_open_tag(tag: &str, attributes: Option<&Attributes>, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    write_attributes(attributes, out);
    out.push('>');
}

/// Write `</tag>`.
pub(crate) fn write_close_tag(tag: &str, out: &mut String) {
    out.push_str(&format!("</{tag}>"));
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Attributes;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Attributes {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (name, value) in self.iter() {
                map.serialize_entry(name, value)?;
            }
            map.end()
        }
    }

    struct AttributesVisitor;

    impl<'de> Visitor<'de> for AttributesVisitor {
        type Value = Attributes;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of attribute names to string values")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Attributes, A::Error> {
            let mut attributes = Attributes::new();
            while let Some((name, value)) = access.next_entry::<String, String>()? {
                attributes.insert(name, value);
            }
            Ok(attributes)
        }
    }

    impl<'de> Deserialize<'de> for Attributes {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(AttributesVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Serialization
    // =========================================================================

    #[test]
    fn test_absent_attributes() {
        assert_eq!(serialize_attributes(None), "");
    }

    #[test]
    fn test_empty_attributes() {
        assert_eq!(serialize_attributes(Some(&Attributes::new())), "");
    }

    #[test]
    fn test_single_attribute() {
        let attrs = Attributes::from([("href", "https://boot.dev")]);
        assert_eq!(serialize_attributes(Some(&attrs)), " href=\"https://boot.dev\"");
    }

    #[test]
    fn test_multiple_attributes_keep_insertion_order() {
        let attrs = Attributes::from([("href", "https://boot.dev"), ("target", "_blank")]);
        assert_eq!(
            serialize_attributes(Some(&attrs)),
            " href=\"https://boot.dev\" target=\"_blank\""
        );

        let reversed = Attributes::from([("target", "_blank"), ("href", "https://boot.dev")]);
        assert_eq!(
            serialize_attributes(Some(&reversed)),
            " target=\"_blank\" href=\"https://boot.dev\""
        );
    }

    #[test]
    fn test_values_are_not_escaped() {
        let attrs = Attributes::from([("title", "a < b & \"c\"")]);
        assert_eq!(serialize_attributes(Some(&attrs)), " title=\"a < b & \"c\"\"");
    }

    // =========================================================================
    // Map behavior
    // =========================================================================

    #[test]
    fn test_insert_existing_name_keeps_position() {
        let mut attrs = Attributes::from([("id", "a"), ("class", "x")]);
        assert_eq!(attrs.insert("id", "b"), Some("a".to_string()));
        assert_eq!(attrs.len(), 2);
        assert_eq!(serialize_attributes(Some(&attrs)), " id=\"b\" class=\"x\"");
    }

    #[test]
    fn test_from_iterator_collapses_duplicates() {
        let attrs: Attributes = vec![("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
        assert_eq!(attrs.get("a"), Some("3"));
        assert_eq!(attrs.get("b"), Some("2"));
        assert_eq!(attrs.get("c"), None);
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_open_and_close_tags() {
        let attrs = Attributes::from([("class", "bold")]);
        let mut out = String::new();
        write_open_tag("div", Some(&attrs), &mut out);
        write_close_tag("div", &mut out);
        assert_eq!(out, "<div class=\"bold\"></div>");
    }
}
