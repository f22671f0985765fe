//! Tolerant JSON decoding.
//!
//! Responses from the schedule and metadata services are loosely shaped:
//! fields come and go, numbers arrive as strings or the other way round, and
//! scraped boilerplate shows up where real values should be. Decoding is
//! done in two steps:
//!
//! 1. The JSON is turned into a [`TaggedNode`] tree. Every node carries a
//!    tag: object members are tagged with their key, array items with the
//!    name of the field that holds the array, and items of an anonymous
//!    (top-level) array with [`ELEMENT_TAG`].
//! 2. A [`FromTagged`] implementation picks the fields it knows out of the
//!    tree. Unknown fields are ignored, missing ones default to empty, and
//!    every string leaf goes through the denylist on the way out.

use serde_json::Value;
use tvguide_core::denylist;

use crate::error::ScrapeError;

/// Tag given to array items that have no field name of their own.
pub const ELEMENT_TAG: &str = "element";

#[derive(Debug, Clone, PartialEq)]
pub struct TaggedNode {
    pub tag: String,
    pub content: NodeContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    /// `null`
    Empty,
    /// Any scalar, rendered as text
    Text(String),
    /// Object members
    Fields(Vec<TaggedNode>),
    /// Array items, in order
    Items(Vec<TaggedNode>),
}

/// Decode a typed record out of a tagged tree.
pub trait FromTagged: Sized {
    fn from_tagged(node: &TaggedNode) -> Self;
}

impl TaggedNode {
    /// Parse a JSON body into an anonymous root node.
    pub fn from_slice(body: &[u8]) -> Result<Self, ScrapeError> {
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self::from_json("", &value))
    }

    /// Build the tree for `value`, tagging the root with `tag`.
    pub fn from_json(tag: &str, value: &Value) -> Self {
        let content = match value {
            Value::Null => NodeContent::Empty,
            Value::Bool(b) => NodeContent::Text(b.to_string()),
            Value::Number(n) => NodeContent::Text(n.to_string()),
            Value::String(s) => NodeContent::Text(s.clone()),
            Value::Array(items) => {
                let item_tag = if tag.is_empty() { ELEMENT_TAG } else { tag };
                NodeContent::Items(
                    items
                        .iter()
                        .map(|item| Self::from_json(item_tag, item))
                        .collect(),
                )
            }
            Value::Object(members) => NodeContent::Fields(
                members
                    .iter()
                    .map(|(key, member)| {
                        let key = if key.is_empty() { ELEMENT_TAG } else { key };
                        Self::from_json(key, member)
                    })
                    .collect(),
            ),
        };
        Self {
            tag: tag.to_string(),
            content,
        }
    }

    /// First member with the given tag. Only objects have members.
    pub fn child(&self, tag: &str) -> Option<&TaggedNode> {
        match &self.content {
            NodeContent::Fields(fields) => fields.iter().find(|f| f.tag == tag),
            _ => None,
        }
    }

    /// Array items, or an empty slice for anything that isn't an array.
    pub fn items(&self) -> &[TaggedNode] {
        match &self.content {
            NodeContent::Items(items) => items,
            _ => &[],
        }
    }

    /// Scalar text after the denylist. Blank, denylisted and non-scalar
    /// nodes have no text.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            NodeContent::Text(s) => denylist::scrub(s),
            _ => None,
        }
    }

    /// String leaves of a list field. A lone scalar counts as a one-item list.
    pub fn texts(&self) -> Vec<String> {
        match &self.content {
            NodeContent::Items(items) => items
                .iter()
                .filter_map(|item| item.text())
                .map(str::to_string)
                .collect(),
            NodeContent::Text(_) => self.text().map(str::to_string).into_iter().collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self.content, NodeContent::Fields(_))
    }

    /// Text of member `tag`, owned.
    pub fn field_text(&self, tag: &str) -> Option<String> {
        self.child(tag)?.text().map(|s| s.trim().to_string())
    }

    /// String list of member `tag`.
    pub fn field_texts(&self, tag: &str) -> Vec<String> {
        self.child(tag).map(TaggedNode::texts).unwrap_or_default()
    }

    /// Member `tag` read as an unsigned integer. `"3"`, `3` and `3.0` all work.
    pub fn field_u32(&self, tag: &str) -> Option<u32> {
        let text = self.field_text(tag)?;
        text.parse::<u32>().ok().or_else(|| {
            text.parse::<f64>()
                .ok()
                .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= f64::from(u32::MAX))
                .map(|v| v as u32)
        })
    }

    /// Member `tag` read as a float.
    pub fn field_f64(&self, tag: &str) -> Option<f64> {
        self.field_text(tag)?
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }

    /// Decode member `tag` as a nested record, if it is an object.
    pub fn field_record<T: FromTagged>(&self, tag: &str) -> Option<T> {
        self.child(tag)
            .filter(|node| node.is_object())
            .map(T::from_tagged)
    }
}

/// Decode a single record from a response that is either an object or an
/// array wrapping exactly one object. Longer arrays are a shape error.
pub fn decode_single<T: FromTagged>(root: &TaggedNode) -> Result<T, ScrapeError> {
    match &root.content {
        NodeContent::Fields(_) => Ok(T::from_tagged(root)),
        NodeContent::Items(items) => match items.as_slice() {
            [only] if only.is_object() => Ok(T::from_tagged(only)),
            [] => Err(ScrapeError::shape("empty array where one record was expected")),
            [_] => Err(ScrapeError::shape("array item is not an object")),
            _ => Err(ScrapeError::shape(format!(
                "expected one record, got an array of {}",
                items.len()
            ))),
        },
        _ => Err(ScrapeError::shape("expected an object")),
    }
}

/// Decode every object item of a top-level array. Non-object items are skipped.
pub fn decode_list<T: FromTagged>(root: &TaggedNode) -> Result<Vec<T>, ScrapeError> {
    match &root.content {
        NodeContent::Items(items) => Ok(items
            .iter()
            .filter(|item| {
                let keep = item.is_object();
                if !keep {
                    log::debug!("Skipping non-object <{}> in list", item.tag);
                }
                keep
            })
            .map(T::from_tagged)
            .collect()),
        _ => Err(ScrapeError::shape("expected an array")),
    }
}

#[cfg(test)]
#[path = "tests/bridge_tests.rs"]
mod tests;
