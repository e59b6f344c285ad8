//! Canonical tag normalization for document head metadata.
//!
//! Loosely-shaped head configuration (`{ name: "description", content: ... }`,
//! `{ class: { dark: true } }`, `{ innerHTML: "..." }`) is turned into flat
//! [`CanonicalTag`] records: element name, attribute props holding only strings
//! and numbers, optional children, and the structural fields the
//! [`SchemaCatalog`] promotes off the attribute bag.
//!
#![deny(missing_docs)]

/// Value coercion shared by the normalization steps.
pub mod coerce;
/// Canonical bytes and digests over tag lists.
pub mod fingerprint;
/// Whole-head flattening into an ordered tag list.
pub mod head;
/// Hygiene report types emitted during normalization.
pub mod hygiene;
/// The tag normalizer.
pub mod normalizer;
/// Canonical tag model.
pub mod tag;
/// Validation helpers used by canonical types.
pub mod validation;

pub use fingerprint::{canonical_bytes, fingerprint, Digest, DigestAlg, FingerprintError};
pub use head::{HeadError, HeadResult};
pub use headtag_schema::SchemaCatalog;
pub use hygiene::{HygieneReport, HygieneStatus, HygieneWarning};
pub use normalizer::{normalize_tag, NormalizationResult, Normalizer};
pub use tag::{CanonicalTag, Normalized, PropValue, Props};
pub use validation::ValidationError;
