//! Top-level entries of a head object and the tags they produce.

/// Key holding the title template (`%s - My Site`). It produces no tag itself.
pub const TITLE_TEMPLATE_KEY: &str = "titleTemplate";

/// How a head entry's value is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadEntryKind {
    /// Plain text content (`title`).
    Text,
    /// A single attribute object (`base`, `htmlAttrs`, `bodyAttrs`).
    Single,
    /// A list of attribute objects (`meta`, `link`, ...).
    List,
}

/// One recognised key of a head object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadEntry {
    /// Key in the head object.
    pub key: &'static str,
    /// Tag name handed to the normalizer.
    pub tag: &'static str,
    /// Value shape.
    pub kind: HeadEntryKind,
}

const fn entry(key: &'static str, kind: HeadEntryKind) -> HeadEntry {
    HeadEntry { key, tag: key, kind }
}

/// Head entries in the order their tags are emitted.
pub const HEAD_ENTRIES: &[HeadEntry] = &[
    entry("title", HeadEntryKind::Text),
    entry("base", HeadEntryKind::Single),
    entry("link", HeadEntryKind::List),
    entry("meta", HeadEntryKind::List),
    entry("style", HeadEntryKind::List),
    entry("script", HeadEntryKind::List),
    entry("noscript", HeadEntryKind::List),
    entry("htmlAttrs", HeadEntryKind::Single),
    entry("bodyAttrs", HeadEntryKind::Single),
];

impl HeadEntry {
    /// Looks up the entry for a head key.
    pub fn find(key: &str) -> Option<&'static HeadEntry> {
        HEAD_ENTRIES.iter().find(|entry| entry.key == key)
    }
}
