//! Normalize command implementation.

use crate::{input, output};
use headtag_canonical::{Normalizer, SchemaCatalog};
use serde_json::json;

pub fn run(
    catalog: SchemaCatalog,
    tag: String,
    input: Option<String>,
    report: bool,
    table: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = input::read_json(input)?;
    let normalizer = Normalizer::new(catalog);

    let result = normalizer.normalize_with_report(&tag, &value);
    for warning in &result.report.warnings {
        tracing::warn!(tag = %tag, code = warning.code(), "hygiene warning");
    }
    let tags = result.output.into_vec();

    if table {
        output::print_table(&tags);
    } else if report {
        let output = json!({ "tags": tags, "report": result.report });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&tags)?);
    }

    Ok(())
}
