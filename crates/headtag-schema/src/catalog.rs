//! Promoted keys, content aliases and known tag names.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Family name whose promoted keys apply to every tag.
pub const ANY_TAG: &str = "*";

/// Error returned when a catalog file cannot be loaded.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The catalog JSON did not match the expected shape.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only lookup tables consulted during normalization.
///
/// Every field defaults to empty when deserializing so a catalog file only
/// needs to name what it adds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaCatalog {
    /// Tags whose whole input is plain text content (`title`).
    #[serde(default)]
    pub text_tags: BTreeSet<String>,
    /// Keys meaning "inner content", in scan order. First present wins.
    #[serde(default)]
    pub content_aliases: Vec<String>,
    /// Tag family to structural keys hoisted onto the tag record.
    #[serde(default)]
    pub promoted: BTreeMap<String, BTreeSet<String>>,
    /// Tag names the catalog knows about.
    #[serde(default)]
    pub known_tags: BTreeSet<String>,
}

impl SchemaCatalog {
    /// An empty catalog: no text tags, aliases or promoted keys.
    pub fn empty() -> Self {
        Self {
            text_tags: BTreeSet::new(),
            content_aliases: Vec::new(),
            promoted: BTreeMap::new(),
            known_tags: BTreeSet::new(),
        }
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Self {
        let set = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>();

        let mut promoted = BTreeMap::new();
        promoted.insert(
            ANY_TAG.to_string(),
            set(&["key", "tagDuplicateStrategy", "tagPosition", "tagPriority"]),
        );
        for family in ["noscript", "script", "style"] {
            promoted.insert(family.to_string(), set(&["body"]));
        }

        Self {
            text_tags: set(&["title"]),
            content_aliases: vec![
                "children".to_string(),
                "innerHtml".to_string(),
                "innerHTML".to_string(),
            ],
            promoted,
            known_tags: set(&[
                "base",
                "bodyAttrs",
                "htmlAttrs",
                "link",
                "meta",
                "noscript",
                "script",
                "style",
                "title",
            ]),
        }
    }

    /// Parses a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a catalog file and layers it over the built-in catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let overlay = Self::from_json_str(&text)?;
        let mut catalog = Self::builtin();
        catalog.extend(overlay);
        Ok(catalog)
    }

    /// Adds every entry of `other` to this catalog.
    ///
    /// Content aliases already present keep their position; new ones are
    /// appended to the end of the scan order.
    pub fn extend(&mut self, other: SchemaCatalog) {
        self.text_tags.extend(other.text_tags);
        self.known_tags.extend(other.known_tags);
        for alias in other.content_aliases {
            if !self.content_aliases.contains(&alias) {
                self.content_aliases.push(alias);
            }
        }
        for (family, keys) in other.promoted {
            self.promoted.entry(family).or_default().extend(keys);
        }
    }

    /// Whether `tag` takes its whole input as text content.
    pub fn is_text_tag(&self, tag: &str) -> bool {
        self.text_tags.contains(tag)
    }

    /// Whether `key` is a promoted structural field for `tag`.
    pub fn is_promoted(&self, tag: &str, key: &str) -> bool {
        [ANY_TAG, tag].iter().any(|family| {
            self.promoted
                .get(*family)
                .is_some_and(|keys| keys.contains(key))
        })
    }

    /// Whether `key` is one of the content aliases.
    pub fn is_content_alias(&self, key: &str) -> bool {
        self.content_aliases.iter().any(|alias| alias == key)
    }

    /// Whether the catalog knows `tag`. An empty known-tag set knows everything.
    pub fn is_known_tag(&self, tag: &str) -> bool {
        self.known_tags.is_empty() || self.known_tags.contains(tag)
    }
}

impl Default for SchemaCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
