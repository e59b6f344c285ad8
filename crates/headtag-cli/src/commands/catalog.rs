//! Catalog command implementation.

use headtag_canonical::SchemaCatalog;

pub fn run(catalog: SchemaCatalog) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}
