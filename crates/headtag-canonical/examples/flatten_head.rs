use headtag_canonical::{fingerprint, Normalizer};
use serde_json::json;

fn main() {
    let normalizer = Normalizer::default();
    let head = json!({
        "title": "Home",
        "titleTemplate": "%s | Example",
        "meta": [
            { "name": "description", "content": "An example page" },
            { "property": "og:locale:alternate", "content": ["fr_FR", "de_DE"] }
        ],
        "htmlAttrs": { "lang": "en", "class": { "dark": true, "rtl": false } },
        "script": [
            { "src": "/app.js", "defer": true, "async": false, "tagPosition": "bodyClose" }
        ]
    });

    let flattened = match normalizer.normalize_head(&head) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("normalization failed: {}", err);
            std::process::exit(1);
        }
    };

    for tag in &flattened.tags {
        println!("{}", serde_json::to_string(tag).unwrap_or_default());
    }
    match fingerprint(&flattened.tags) {
        Ok(digest) => println!("{}", digest),
        Err(err) => {
            eprintln!("fingerprint failed: {}", err);
            std::process::exit(1);
        }
    }
}
