//! Output formatting utilities.

use headtag_canonical::{CanonicalTag, PropValue};

/// Formats a tag as a simple table row.
pub fn format_table_row(tag: &CanonicalTag) -> String {
    let props = tag
        .props
        .iter()
        .map(|(name, value)| match value {
            PropValue::Text(s) if s.is_empty() => name.clone(),
            PropValue::Text(s) => format!("{}={:?}", name, s),
            PropValue::Number(n) => format!("{}={}", name, n),
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{:<12} {:<24} {:<40} {}",
        tag.tag,
        truncate(tag.key.as_deref().unwrap_or("-"), 24),
        truncate(&props, 40),
        tag.children.as_deref().map(|c| truncate(c, 40)).unwrap_or_default()
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!(
        "{:<12} {:<24} {:<40} {}",
        "TAG", "KEY", "PROPS", "CHILDREN"
    );
    println!("{}", "-".repeat(100));
}

/// Prints tags as a table.
pub fn print_table(tags: &[CanonicalTag]) {
    print_table_header();
    for tag in tags {
        println!("{}", format_table_row(tag));
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
