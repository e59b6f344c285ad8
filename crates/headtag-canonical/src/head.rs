//! Flattens a whole head object into an ordered list of canonical tags.
//!
//! Entries are visited in [`HEAD_ENTRIES`] order, not in the order the input
//! object lists them, so two head objects with the same content flatten to the
//! same tag list.

use headtag_schema::{HeadEntry, HeadEntryKind, HEAD_ENTRIES, TITLE_TEMPLATE_KEY};
use serde::Serialize;
use serde_json::Value;

use crate::hygiene::{HygieneReport, HygieneStatus, UNKNOWN_HEAD_KEY};
use crate::tag::CanonicalTag;
use crate::Normalizer;

const TITLE_PLACEHOLDER: &str = "%s";

/// Error returned when a head object cannot be flattened.
#[derive(thiserror::Error, Debug)]
pub enum HeadError {
    /// The head value was not a JSON object.
    #[error("head must be an object, found {0}")]
    NotAnObject(&'static str),
}

/// Flattened head: tags in emission order plus the merged hygiene report.
#[derive(Debug, Clone, Serialize)]
pub struct HeadResult {
    /// Canonical tags, fan-outs spliced in place.
    pub tags: Vec<CanonicalTag>,
    /// Reports of every normalization call, merged.
    pub report: HygieneReport,
}

impl Normalizer {
    /// Normalizes every entry of a head object.
    pub fn normalize_head(&self, head: &Value) -> Result<HeadResult, HeadError> {
        let Value::Object(map) = head else {
            return Err(HeadError::NotAnObject(crate::coerce::kind_name(head)));
        };

        let mut tags = Vec::new();
        let mut report = HygieneReport::new();

        for key in map.keys() {
            if key != TITLE_TEMPLATE_KEY && HeadEntry::find(key).is_none() {
                tracing::debug!(key = %key, "skipping unknown head key");
                report.warn(UNKNOWN_HEAD_KEY, HygieneStatus::Ok);
            }
        }

        for entry in HEAD_ENTRIES {
            let Some(value) = map.get(entry.key) else {
                continue;
            };
            if value.is_null() {
                continue;
            }

            let inputs: Vec<Value> = match entry.kind {
                HeadEntryKind::Text => {
                    vec![apply_title_template(value, map.get(TITLE_TEMPLATE_KEY))]
                }
                HeadEntryKind::Single => vec![value.clone()],
                HeadEntryKind::List => match value {
                    Value::Array(items) => items.clone(),
                    single => vec![single.clone()],
                },
            };

            for input in &inputs {
                let result = self.normalize_with_report(entry.tag, input);
                tags.extend(result.output.into_vec());
                report.merge(result.report);
            }
        }

        tracing::debug!(count = tags.len(), "flattened head");
        Ok(HeadResult { tags, report })
    }
}

fn apply_title_template(title: &Value, template: Option<&Value>) -> Value {
    match template {
        Some(Value::String(template)) if template.contains(TITLE_PLACEHOLDER) => Value::String(
            template.replace(TITLE_PLACEHOLDER, &crate::coerce::to_text(title)),
        ),
        _ => title.clone(),
    }
}
