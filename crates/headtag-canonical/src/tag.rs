use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Attribute value after normalization: text or a number, nothing else.
///
/// `Text("")` is a present-but-valueless boolean attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// String attribute value.
    Text(String),
    /// Numeric attribute value, kept as a number.
    Number(Number),
}

impl PropValue {
    /// Returns the value as JSON.
    pub fn to_value(&self) -> Value {
        match self {
            PropValue::Text(s) => Value::String(s.clone()),
            PropValue::Number(n) => Value::Number(n.clone()),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Number(value.into())
    }
}

/// Ordered attribute bag of a canonical tag.
pub type Props = IndexMap<String, PropValue>;

/// Renderer-ready representation of one head element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalTag {
    /// Element name (`meta`, `title`, ...).
    pub tag: String,
    /// DOM attributes, excluding structural fields.
    #[serde(default)]
    pub props: Props,
    /// Inner text or HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<String>,
    /// Stable identifier; `<name|property>:<index>` for fanned-out tags.
    ///
    /// An input-supplied `key` is kept here when there is no fan-out; a
    /// fan-out replaces it with the indexed key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Promoted structural fields, serialized beside `tag` and `props`.
    #[serde(flatten)]
    pub config: IndexMap<String, Value>,
}

impl CanonicalTag {
    /// Creates a tag with no props, children or structural fields.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            props: Props::new(),
            children: None,
            key: None,
            config: IndexMap::new(),
        }
    }

    /// Returns a prop by name.
    pub fn prop(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    /// Returns the props as a JSON object, e.g. to feed back into the normalizer.
    pub fn props_value(&self) -> Value {
        Value::Object(
            self.props
                .iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }
}

/// Normalizer output: one tag, or the tags a content array fanned out into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Normalized {
    /// The common case.
    Single(CanonicalTag),
    /// One tag per element of an array-valued `content`.
    Many(Vec<CanonicalTag>),
}

impl Normalized {
    /// Flattens the output into a list, one element for `Single`.
    pub fn into_vec(self) -> Vec<CanonicalTag> {
        match self {
            Normalized::Single(tag) => vec![tag],
            Normalized::Many(tags) => tags,
        }
    }

    /// Number of tags produced.
    pub fn len(&self) -> usize {
        match self {
            Normalized::Single(_) => 1,
            Normalized::Many(tags) => tags.len(),
        }
    }

    /// True only for an empty fan-out.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the single tag, if this is not a fan-out.
    pub fn as_single(&self) -> Option<&CanonicalTag> {
        match self {
            Normalized::Single(tag) => Some(tag),
            Normalized::Many(_) => None,
        }
    }
}
