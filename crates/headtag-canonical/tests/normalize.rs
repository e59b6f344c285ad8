use headtag_canonical::hygiene::{
    CONTENT_ALIAS_COLLISION, EMPTY_CONTENT_FAN_OUT, MALFORMED_INPUT, NULL_ATTRIBUTE, UNKNOWN_TAG,
};
use headtag_canonical::{
    normalize_tag, CanonicalTag, HygieneStatus, Normalized, Normalizer, PropValue, SchemaCatalog,
};
use serde_json::json;

fn single(output: Normalized) -> CanonicalTag {
    match output {
        Normalized::Single(tag) => tag,
        Normalized::Many(tags) => panic!("expected a single tag, got {}", tags.len()),
    }
}

fn text(value: &str) -> PropValue {
    PropValue::Text(value.to_string())
}

#[test]
fn true_attributes_become_valueless() {
    let tag = single(normalize_tag(
        "script",
        &json!({ "src": "/a.js", "async": true, "defer": "true" }),
    ));

    assert_eq!(tag.prop("async"), Some(&text("")));
    assert_eq!(tag.prop("defer"), Some(&text("")));
    assert_eq!(tag.prop("src"), Some(&text("/a.js")));
}

#[test]
fn false_attributes_are_removed() {
    let tag = single(normalize_tag(
        "link",
        &json!({ "rel": "preload", "crossorigin": false, "disabled": "false" }),
    ));

    assert!(tag.prop("crossorigin").is_none());
    assert!(tag.prop("disabled").is_none());
    assert_eq!(tag.props.len(), 1);
}

#[test]
fn title_input_becomes_children() {
    for (input, expected) in [
        (json!("Home"), "Home"),
        (json!(42), "42"),
        (json!(true), "true"),
        (json!(null), "null"),
    ] {
        let tag = single(normalize_tag("title", &input));
        assert_eq!(tag.tag, "title");
        assert_eq!(tag.children.as_deref(), Some(expected));
        assert!(tag.props.is_empty());
    }
}

#[test]
fn title_object_input_builds_no_props() {
    let tag = single(normalize_tag("title", &json!({ "lang": "en" })));
    assert!(tag.props.is_empty());
    assert!(tag.children.is_some());
}

#[test]
fn object_class_keeps_truthy_keys_in_order() {
    let tag = single(normalize_tag(
        "htmlAttrs",
        &json!({ "class": { "a": 1, "b": true, "c": false } }),
    ));
    assert_eq!(tag.prop("class"), Some(&text("a b")));
}

#[test]
fn array_class_is_joined() {
    let tag = single(normalize_tag("bodyAttrs", &json!({ "class": ["a", "b"] })));
    assert_eq!(tag.prop("class"), Some(&text("a b")));
}

#[test]
fn string_class_passes_through() {
    let tag = single(normalize_tag("bodyAttrs", &json!({ "class": "x  y" })));
    assert_eq!(tag.prop("class"), Some(&text("x  y")));
}

#[test]
fn content_array_fans_out() {
    let output = normalize_tag("meta", &json!({ "name": "foo", "content": [1, 2] }));
    let tags = match output {
        Normalized::Many(tags) => tags,
        Normalized::Single(_) => panic!("expected fan-out"),
    };

    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].prop("content"), Some(&PropValue::from(1i64)));
    assert_eq!(tags[1].prop("content"), Some(&PropValue::from(2i64)));
    assert_eq!(tags[0].key.as_deref(), Some("foo:0"));
    assert_eq!(tags[1].key.as_deref(), Some("foo:1"));
    for tag in &tags {
        assert_eq!(tag.tag, "meta");
        assert_eq!(tag.prop("name"), Some(&text("foo")));
        assert_eq!(tag.props.len(), 2);
    }
}

#[test]
fn fan_out_key_falls_back_to_property_then_empty() {
    let tags = normalize_tag(
        "meta",
        &json!({ "property": "og:locale:alternate", "content": ["fr_FR"] }),
    )
    .into_vec();
    assert_eq!(tags[0].key.as_deref(), Some("og:locale:alternate:0"));

    let tags = normalize_tag("meta", &json!({ "content": ["a", "b"] })).into_vec();
    assert_eq!(tags[1].key.as_deref(), Some(":1"));
}

#[test]
fn fan_out_keeps_content_position() {
    let tags = normalize_tag(
        "meta",
        &json!({ "content": ["a", "b"], "name": "keywords" }),
    )
    .into_vec();
    let keys: Vec<&str> = tags[0].props.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["content", "name"]);
}

#[test]
fn fan_out_copies_are_independent() {
    let mut tags = normalize_tag(
        "meta",
        &json!({ "name": "foo", "content": ["x", "y"], "tagPriority": 5 }),
    )
    .into_vec();
    tags[0].props.insert("name".into(), text("changed"));

    assert_eq!(tags[1].prop("name"), Some(&text("foo")));
    assert_eq!(tags[1].config.get("tagPriority"), Some(&json!(5)));
}

#[test]
fn fan_out_elements_follow_boolean_rules() {
    let tags = normalize_tag("meta", &json!({ "name": "flag", "content": [true, false] })).into_vec();
    assert_eq!(tags[0].prop("content"), Some(&text("")));
    assert!(tags[1].prop("content").is_none());
}

#[test]
fn empty_content_array_produces_no_tags() {
    let result = Normalizer::default().normalize_with_report("meta", &json!({ "content": [] }));
    assert!(result.output.is_empty());
    assert!(result.report.has_warning(EMPTY_CONTENT_FAN_OUT));
}

#[test]
fn scalar_content_does_not_fan_out() {
    let tag = single(normalize_tag("meta", &json!({ "name": "a", "content": "b" })));
    assert_eq!(tag.prop("content"), Some(&text("b")));
    assert!(tag.key.is_none());
}

#[test]
fn content_alias_moves_to_children() {
    let tag = single(normalize_tag(
        "script",
        &json!({ "type": "module", "innerHTML": "console.log(1)" }),
    ));
    assert_eq!(tag.children.as_deref(), Some("console.log(1)"));
    assert!(tag.prop("innerHTML").is_none());
    assert_eq!(tag.props.len(), 1);
}

#[test]
fn first_alias_in_scan_order_wins() {
    let result = Normalizer::default().normalize_with_report(
        "style",
        &json!({ "innerHTML": "b{}", "innerHtml": "i{}", "children": "c{}" }),
    );
    let tag = single(result.output);

    assert_eq!(tag.children.as_deref(), Some("c{}"));
    assert!(tag.props.is_empty());
    assert_eq!(result.report.status, HygieneStatus::Ambiguous);
    assert!(result.report.has_warning(CONTENT_ALIAS_COLLISION));
}

#[test]
fn promoted_fields_leave_props() {
    let tag = single(normalize_tag(
        "script",
        &json!({
            "src": "/a.js",
            "key": "analytics",
            "tagPriority": 10,
            "tagPosition": "bodyClose",
            "body": true
        }),
    ));

    assert_eq!(tag.key.as_deref(), Some("analytics"));
    assert_eq!(tag.config.get("tagPriority"), Some(&json!(10)));
    assert_eq!(tag.config.get("tagPosition"), Some(&json!("bodyClose")));
    assert_eq!(tag.config.get("body"), Some(&json!("")));
    let keys: Vec<&str> = tag.props.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["src"]);
}

#[test]
fn boolean_values_are_normalized_before_aliases() {
    let tag = single(normalize_tag(
        "script",
        &json!({ "innerHTML": false, "src": "/a.js" }),
    ));
    assert_eq!(tag.children, None);
    assert!(tag.prop("innerHTML").is_none());

    let tag = single(normalize_tag("style", &json!({ "children": true })));
    assert_eq!(tag.children.as_deref(), Some(""));
}

#[test]
fn boolean_values_are_normalized_before_promotion() {
    let tag = single(normalize_tag(
        "script",
        &json!({ "body": true, "tagPriority": false, "src": "/a.js" }),
    ));
    assert_eq!(tag.config.get("body"), Some(&json!("")));
    assert!(tag.config.get("tagPriority").is_none());
    assert_eq!(tag.props.len(), 1);
}

#[test]
fn single_true_content_array_does_not_fan_out() {
    let output = normalize_tag("meta", &json!({ "name": "x", "content": [true] }));
    let tag = single(output);
    assert_eq!(tag.prop("content"), Some(&text("")));
    assert!(tag.key.is_none());

    let tag = single(normalize_tag("meta", &json!({ "name": "x", "content": ["false"] })));
    assert!(tag.prop("content").is_none());
}

#[test]
fn large_whole_float_title_keeps_its_digits() {
    let tag = single(normalize_tag("title", &json!(1e20)));
    assert_eq!(tag.children.as_deref(), Some("100000000000000000000"));
}

#[test]
fn promotion_is_scoped_to_family() {
    let tag = single(normalize_tag("meta", &json!({ "body": "x" })));
    assert_eq!(tag.prop("body"), Some(&text("x")));
    assert!(tag.config.is_empty());
}

#[test]
fn fan_out_key_overrides_promoted_key() {
    let tags = normalize_tag("meta", &json!({ "key": "k", "name": "n", "content": ["a"] })).into_vec();
    assert_eq!(tags[0].key.as_deref(), Some("n:0"));
}

#[test]
fn numbers_are_not_stringified() {
    let tag = single(normalize_tag("link", &json!({ "rel": "icon", "sizes": 32, "x": 1.5 })));
    assert_eq!(tag.prop("sizes"), Some(&PropValue::from(32i64)));
    assert!(matches!(tag.prop("x"), Some(PropValue::Number(_))));
}

#[test]
fn null_attributes_are_dropped() {
    let result = Normalizer::default().normalize_with_report("meta", &json!({ "name": null }));
    assert!(single(result.output).props.is_empty());
    assert!(result.report.has_warning(NULL_ATTRIBUTE));
}

#[test]
fn non_object_input_is_an_empty_bag() {
    for input in [json!("oops"), json!(3), json!(null), json!(["a"])] {
        let result = Normalizer::default().normalize_with_report("meta", &input);
        let tag = single(result.output);
        assert_eq!(tag.tag, "meta");
        assert!(tag.props.is_empty());
        assert_eq!(result.report.status, HygieneStatus::Lossy);
        assert!(result.report.has_warning(MALFORMED_INPUT));
    }
}

#[test]
fn unknown_tags_pass_through() {
    let result =
        Normalizer::default().normalize_with_report("my-widget", &json!({ "hidden": true }));
    let tag = single(result.output);
    assert_eq!(tag.tag, "my-widget");
    assert_eq!(tag.prop("hidden"), Some(&text("")));
    assert!(result.report.has_warning(UNKNOWN_TAG));
    assert_eq!(result.report.status, HygieneStatus::Ok);
}

#[test]
fn canonical_bags_are_a_fixed_point() {
    let input = json!({
        "name": "viewport",
        "content": "width=device-width",
        "class": "a b",
        "data-x": 3,
        "async": ""
    });
    let first = single(normalize_tag("meta", &input));
    let second = single(normalize_tag("meta", &first.props_value()));

    assert_eq!(first, second);
    assert_eq!(first.props_value(), input);
}

#[test]
fn input_is_not_mutated() {
    let input = json!({
        "name": "foo",
        "content": [1, 2],
        "class": { "a": true },
        "innerHTML": "x",
        "tagPriority": 1,
        "defer": false
    });
    let snapshot = input.clone();

    let _ = normalize_tag("meta", &input);
    assert_eq!(input, snapshot);
}

#[test]
fn custom_catalog_controls_text_tags_and_aliases() {
    let mut catalog = SchemaCatalog::empty();
    catalog.text_tags.insert("caption".into());
    catalog.content_aliases.push("textContent".into());
    let normalizer = Normalizer::new(catalog);

    let caption = single(normalizer.normalize("caption", &json!("hello")));
    assert_eq!(caption.children.as_deref(), Some("hello"));

    let title = single(normalizer.normalize("title", &json!({ "textContent": "t", "key": 1 })));
    assert_eq!(title.children.as_deref(), Some("t"));
    assert_eq!(title.prop("key"), Some(&PropValue::from(1i64)));
}

#[test]
fn report_counts_boolean_and_promoted_fields() {
    let result = Normalizer::default().normalize_with_report(
        "script",
        &json!({ "async": true, "nomodule": false, "tagPriority": "low" }),
    );
    let metrics = &result.report.metrics;
    assert_eq!(metrics.get("boolean_true_attributes"), Some(&1));
    assert_eq!(metrics.get("boolean_false_attributes"), Some(&1));
    assert_eq!(metrics.get("promoted_fields"), Some(&1));
}

#[test]
fn normalizer_is_shareable_across_threads() {
    let normalizer = std::sync::Arc::new(Normalizer::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let normalizer = normalizer.clone();
            std::thread::spawn(move || {
                normalizer
                    .normalize("meta", &json!({ "name": format!("n{}", i), "content": ["a", "b"] }))
                    .len()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}

#[test]
fn single_output_flattens_to_one_element() {
    let output = normalize_tag("base", &json!({ "href": "/" }));
    assert!(output.as_single().is_some());
    let tags = output.into_vec();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].props_value(), json!({ "href": "/" }));
}
