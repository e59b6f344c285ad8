//! Static schema catalog for document head tags.
//!
//! This crate holds the read-only data the normalizer consults: which tags
//! carry plain text, which input keys alias inner content, and which keys are
//! structural fields that get hoisted off the attribute bag. It performs no
//! transformation itself.

#![deny(missing_docs)]

pub mod catalog;
pub mod head;

pub use catalog::{CatalogError, SchemaCatalog, ANY_TAG};
pub use head::{HeadEntry, HeadEntryKind, HEAD_ENTRIES, TITLE_TEMPLATE_KEY};
