use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input for a non-text tag was not an object; treated as empty.
pub const MALFORMED_INPUT: &str = "MalformedInput";
/// More than one content alias was present; the first in scan order won.
pub const CONTENT_ALIAS_COLLISION: &str = "ContentAliasCollision";
/// The tag name is not in the catalog's known tags.
pub const UNKNOWN_TAG: &str = "UnknownTag";
/// `content` was an empty array, so no tags were produced.
pub const EMPTY_CONTENT_FAN_OUT: &str = "EmptyContentFanOut";
/// A head object key that produces no tags.
pub const UNKNOWN_HEAD_KEY: &str = "UnknownHeadKey";
/// An attribute was `null` and has been dropped.
pub const NULL_ATTRIBUTE: &str = "NullAttribute";

/// Hygiene status for a normalization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HygieneStatus {
    /// The input normalized without issues.
    Ok,
    /// The input was ambiguous (e.g., several content aliases at once).
    Ambiguous,
    /// Part of the input was discarded; warnings should be inspected.
    Lossy,
}

/// Stable warning code emitted by normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HygieneWarning(String);

impl HygieneWarning {
    /// Creates a warning from a literal code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The warning code.
    pub fn code(&self) -> &str {
        &self.0
    }
}

/// Hygiene report produced alongside normalized tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HygieneReport {
    /// Overall hygiene status.
    pub status: HygieneStatus,
    /// Stable warning codes.
    pub warnings: Vec<HygieneWarning>,
    /// Counters such as promoted fields or fanned-out tags.
    pub metrics: BTreeMap<String, u64>,
}

impl HygieneReport {
    /// A clean report.
    pub fn new() -> Self {
        Self {
            status: HygieneStatus::Ok,
            warnings: vec![],
            metrics: BTreeMap::new(),
        }
    }

    /// Records a warning, raising the status to at least `status`.
    pub fn warn(&mut self, code: &str, status: HygieneStatus) {
        self.warnings.push(HygieneWarning::new(code));
        self.status = self.status.max(status);
    }

    /// Increments a metric counter.
    pub fn count(&mut self, metric: &str, by: u64) {
        if by == 0 {
            return;
        }
        *self.metrics.entry(metric.to_string()).or_insert(0) += by;
    }

    /// True if a warning with this code was recorded.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code() == code)
    }

    /// Folds another report into this one; the worse status wins.
    pub fn merge(&mut self, other: HygieneReport) {
        self.status = self.status.max(other.status);
        self.warnings.extend(other.warnings);
        for (metric, value) in other.metrics {
            self.count(&metric, value);
        }
    }
}

impl Default for HygieneReport {
    fn default() -> Self {
        Self::new()
    }
}
