//! Head command implementation.

use crate::{input, output};
use headtag_canonical::{fingerprint, Normalizer, SchemaCatalog};
use serde_json::json;

pub fn run(
    catalog: SchemaCatalog,
    input: Option<String>,
    with_fingerprint: bool,
    table: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = input::read_json(input)?;
    let normalizer = Normalizer::new(catalog);

    let result = normalizer
        .normalize_head(&value)
        .map_err(|e| format!("Head normalization failed: {}", e))?;
    tracing::info!(
        tags = result.tags.len(),
        status = ?result.report.status,
        "normalized head"
    );

    if table {
        output::print_table(&result.tags);
        return Ok(());
    }

    let mut output = json!({ "tags": result.tags, "report": result.report });
    if with_fingerprint {
        let digest = fingerprint(&result.tags)
            .map_err(|e| format!("Fingerprint failed: {}", e))?;
        output["fingerprint"] = serde_json::to_value(&digest)?;
    }
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
