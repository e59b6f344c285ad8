use headtag_schema::SchemaCatalog;
use serde_json::{Map, Value};
use std::sync::OnceLock;

use crate::coerce::{self, BooleanForm};
use crate::hygiene::{
    HygieneReport, HygieneStatus, CONTENT_ALIAS_COLLISION, EMPTY_CONTENT_FAN_OUT, MALFORMED_INPUT,
    NULL_ATTRIBUTE, UNKNOWN_TAG,
};
use crate::tag::{CanonicalTag, Normalized, PropValue, Props};

const CLASS: &str = "class";
const CONTENT: &str = "content";
const KEY: &str = "key";

/// Result of normalization.
#[derive(Debug, Clone)]
pub struct NormalizationResult {
    /// The normalized tag(s).
    pub output: Normalized,
    /// Hygiene report describing what was coerced or discarded.
    pub report: HygieneReport,
}

/// Normalizer that turns raw head inputs into canonical tags.
///
/// Stateless apart from the catalog it reads; one instance can serve any
/// number of threads.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    catalog: SchemaCatalog,
}

/// Normalizes one input with the built-in catalog.
pub fn normalize_tag(tag_name: &str, input: &Value) -> Normalized {
    static DEFAULT: OnceLock<Normalizer> = OnceLock::new();
    DEFAULT
        .get_or_init(Normalizer::default)
        .normalize(tag_name, input)
}

impl Normalizer {
    /// Creates a normalizer reading the provided catalog.
    pub fn new(catalog: SchemaCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog in use.
    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    /// Produces the canonical tag(s) for `input`.
    pub fn normalize(&self, tag_name: &str, input: &Value) -> Normalized {
        self.normalize_with_report(tag_name, input).output
    }

    /// Produces the canonical tag(s) + hygiene report.
    ///
    /// Never fails: a non-object input for an attribute tag is treated as an
    /// empty attribute bag and flagged in the report.
    pub fn normalize_with_report(&self, tag_name: &str, input: &Value) -> NormalizationResult {
        tracing::trace!(tag = tag_name, "normalizing tag");
        let mut report = HygieneReport::new();

        if !self.catalog.is_known_tag(tag_name) {
            report.warn(UNKNOWN_TAG, HygieneStatus::Ok);
        }

        let output = if self.catalog.is_text_tag(tag_name) {
            let mut tag = CanonicalTag::new(tag_name);
            tag.children = Some(coerce::to_text(input));
            Normalized::Single(tag)
        } else {
            let empty = Map::new();
            let bag = match input {
                Value::Object(map) => map,
                other => {
                    tracing::debug!(
                        tag = tag_name,
                        kind = coerce::kind_name(other),
                        "attribute bag is not an object"
                    );
                    report.warn(MALFORMED_INPUT, HygieneStatus::Lossy);
                    &empty
                }
            };
            self.normalize_bag(tag_name, bag, &mut report)
        };

        NormalizationResult { output, report }
    }

    fn normalize_bag(
        &self,
        tag_name: &str,
        input: &Map<String, Value>,
        report: &mut HygieneReport,
    ) -> Normalized {
        let bag = boolean_attributes(input, report);

        let mut tag = CanonicalTag::new(tag_name);
        tag.children = self.children(tag_name, &bag, report);

        let mut props = Props::new();
        let mut fan_out: Option<&Vec<Value>> = None;

        for (key, value) in &bag {
            if self.catalog.is_content_alias(key) {
                continue;
            }
            if self.catalog.is_promoted(tag_name, key) {
                promote(&mut tag, key, value);
                report.count("promoted_fields", 1);
                continue;
            }

            match (key.as_str(), value) {
                (_, Value::Null) => {
                    report.warn(NULL_ATTRIBUTE, HygieneStatus::Lossy);
                }
                (CLASS, Value::Object(_) | Value::Array(_)) => {
                    props.insert(key.clone(), PropValue::Text(class_list(value)));
                }
                (CONTENT, Value::Array(items)) => {
                    // Placeholder keeps `content` at its input position in every copy.
                    props.insert(key.clone(), PropValue::Text(String::new()));
                    fan_out = Some(items);
                }
                _ => {
                    if let Some(prop) = coerce::to_prop_value(value) {
                        props.insert(key.clone(), prop);
                    }
                }
            }
        }

        tag.props = props;

        let Some(items) = fan_out else {
            return Normalized::Single(tag);
        };

        if items.is_empty() {
            report.warn(EMPTY_CONTENT_FAN_OUT, HygieneStatus::Lossy);
        }
        let prefix = key_prefix(&tag.props);
        tracing::debug!(
            tag = tag_name,
            count = items.len(),
            prefix = %prefix,
            "fanning out content"
        );

        let tags = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let mut copy = tag.clone();
                match fan_out_value(item) {
                    Some(value) => {
                        copy.props.insert(CONTENT.to_string(), value);
                    }
                    None => {
                        copy.props.shift_remove(CONTENT);
                    }
                }
                copy.key = Some(format!("{}:{}", prefix, index));
                copy
            })
            .collect::<Vec<_>>();
        report.count("fanned_out_tags", tags.len() as u64);

        Normalized::Many(tags)
    }

    /// First content alias in scan order supplies the children.
    fn children(
        &self,
        tag_name: &str,
        bag: &Map<String, Value>,
        report: &mut HygieneReport,
    ) -> Option<String> {
        let mut present = self
            .catalog
            .content_aliases
            .iter()
            .filter(|alias| bag.contains_key(alias.as_str()));
        let winner = present.next()?;
        let rest = present.count();
        if rest > 0 {
            tracing::debug!(
                tag = tag_name,
                alias = %winner,
                ignored = rest,
                "content alias collision"
            );
            report.warn(CONTENT_ALIAS_COLLISION, HygieneStatus::Ambiguous);
        }
        match &bag[winner.as_str()] {
            Value::Null => None,
            value => Some(coerce::to_text(value)),
        }
    }
}

/// Copy of the input with `"true"` values blanked and `"false"` values
/// dropped. Runs before alias, promotion, class and content handling.
fn boolean_attributes(
    input: &Map<String, Value>,
    report: &mut HygieneReport,
) -> Map<String, Value> {
    let mut bag = Map::new();
    for (key, value) in input {
        match coerce::boolean_form(value) {
            BooleanForm::Present => {
                bag.insert(key.clone(), Value::String(String::new()));
                report.count("boolean_true_attributes", 1);
            }
            BooleanForm::Absent => {
                report.count("boolean_false_attributes", 1);
            }
            BooleanForm::Other => {
                bag.insert(key.clone(), value.clone());
            }
        }
    }
    bag
}

fn promote(tag: &mut CanonicalTag, key: &str, value: &Value) {
    if key == KEY {
        tag.key = match value {
            Value::Null => None,
            other => Some(coerce::to_text(other)),
        };
    } else {
        tag.config.insert(key.to_string(), value.clone());
    }
}

/// Object maps keep truthy keys in insertion order; arrays keep every entry.
fn class_list(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .iter()
            .filter(|(_, enabled)| coerce::is_truthy(enabled))
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce::to_text(other),
            })
            .collect::<Vec<_>>()
            .join(" "),
        other => coerce::to_text(other),
    }
}

fn fan_out_value(item: &Value) -> Option<PropValue> {
    match coerce::boolean_form(item) {
        BooleanForm::Present => Some(PropValue::Text(String::new())),
        BooleanForm::Absent => None,
        BooleanForm::Other => coerce::to_prop_value(item),
    }
}

/// `name`, else `property`, else empty.
fn key_prefix(props: &Props) -> String {
    ["name", "property"]
        .iter()
        .filter_map(|attr| props.get(*attr))
        .map(|value| match value {
            PropValue::Text(s) => s.clone(),
            PropValue::Number(n) => n.to_string(),
        })
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}
