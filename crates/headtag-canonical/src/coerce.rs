use serde_json::{Number, Value};

use crate::tag::PropValue;

/// Outcome of boolean normalization for one attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum BooleanForm {
    /// String form is `"true"`: becomes a valueless attribute.
    Present,
    /// String form is `"false"`: the attribute is removed.
    Absent,
    /// Anything else passes through.
    Other,
}

/// String form of a value as it would appear in markup.
///
/// Integral floats print without a fraction, arrays join their elements with
/// `,` (null elements are empty) and objects fall back to compact JSON.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Number(n) => number_text(n),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f == 0.0 {
                return "0".to_string();
            }
            if f.fract() == 0.0 && f.abs() < 1e21 {
                return format!("{:.0}", f);
            }
        }
    }
    n.to_string()
}

/// Truthiness used for object-valued `class` maps.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Classifies a value by its string form, so `["true"]` counts as `"true"`.
pub fn boolean_form(value: &Value) -> BooleanForm {
    let text = match value {
        Value::Bool(true) => return BooleanForm::Present,
        Value::Bool(false) => return BooleanForm::Absent,
        Value::String(s) => return classify(s),
        Value::Null | Value::Number(_) | Value::Object(_) => return BooleanForm::Other,
        Value::Array(_) => to_text(value),
    };
    classify(&text)
}

fn classify(text: &str) -> BooleanForm {
    match text {
        "true" => BooleanForm::Present,
        "false" => BooleanForm::Absent,
        _ => BooleanForm::Other,
    }
}

/// Converts a bag value into a prop value. `None` for `null`.
pub fn to_prop_value(value: &Value) -> Option<PropValue> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(PropValue::Text(s.clone())),
        Value::Number(n) => Some(PropValue::Number(n.clone())),
        other => Some(PropValue::Text(to_text(other))),
    }
}

/// Short name of a JSON value's type, for messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_form_matches_markup_expectations() {
        assert_eq!(to_text(&json!("hi")), "hi");
        assert_eq!(to_text(&json!(42)), "42");
        assert_eq!(to_text(&json!(2.0)), "2");
        assert_eq!(to_text(&json!(2.5)), "2.5");
        assert_eq!(to_text(&json!(-0.0)), "0");
        assert_eq!(to_text(&json!(true)), "true");
        assert_eq!(to_text(&json!(null)), "null");
        assert_eq!(to_text(&json!(["a", null, 1])), "a,,1");
        assert_eq!(to_text(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn whole_floats_beyond_i64_keep_their_digits() {
        assert_eq!(to_text(&json!(1e20)), "100000000000000000000");
        assert_eq!(to_text(&json!(-1e19)), "-10000000000000000000");
        assert_eq!(to_text(&json!(1e21)), "1e21");
    }

    #[test]
    fn truthiness() {
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([])));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
    }

    #[test]
    fn boolean_form_covers_string_spellings() {
        assert_eq!(boolean_form(&json!(true)), BooleanForm::Present);
        assert_eq!(boolean_form(&json!("true")), BooleanForm::Present);
        assert_eq!(boolean_form(&json!(false)), BooleanForm::Absent);
        assert_eq!(boolean_form(&json!("false")), BooleanForm::Absent);
        assert_eq!(boolean_form(&json!("TRUE")), BooleanForm::Other);
        assert_eq!(boolean_form(&json!(["true"])), BooleanForm::Present);
        assert_eq!(boolean_form(&json!([false])), BooleanForm::Absent);
        assert_eq!(boolean_form(&json!([true, false])), BooleanForm::Other);
    }
}
