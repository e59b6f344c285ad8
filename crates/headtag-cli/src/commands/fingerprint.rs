//! Fingerprint command implementation.

use crate::input;
use headtag_canonical::{fingerprint, CanonicalTag};
use serde_json::Value;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let value = input::read_json(input)?;

    // Accept the `head` command's output object as well as a bare tag array.
    let tags_value = match value {
        Value::Object(mut map) if map.contains_key("tags") => {
            map.remove("tags").unwrap_or_default()
        }
        other => other,
    };
    let tags: Vec<CanonicalTag> = serde_json::from_value(tags_value)
        .map_err(|e| format!("Input is not a list of canonical tags: {}", e))?;

    let digest = fingerprint(&tags).map_err(|e| format!("Fingerprint failed: {}", e))?;
    println!("{}", digest);
    Ok(())
}
