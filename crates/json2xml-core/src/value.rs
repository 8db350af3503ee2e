//! Value view — classifies an input value into one of the JSON kinds the
//! encoder dispatches on.
//!
//! The encoder never matches on `serde_json::Value` directly. It asks the
//! value for its [`ValueKind`] through the [`TypedValue`] trait, which keeps
//! the dispatch table in one place and lets value trees with extra kinds
//! (dates, binary blobs, ...) report them as [`ValueKind::Other`].

use serde_json::Value;

/// Object members in document order.
pub type Members<'a, V> = Box<dyn Iterator<Item = (&'a str, &'a V)> + 'a>;

/// Array elements in order.
pub type Items<'a, V> = Box<dyn Iterator<Item = &'a V> + 'a>;

/// The kind of a value, borrowed from the value itself.
pub enum ValueKind<'a, V> {
    Null,
    Bool(bool),
    /// A number already rendered to its decimal text form.
    Number(String),
    String(&'a str),
    Object(Members<'a, V>),
    Array(Items<'a, V>),
    /// A kind outside the JSON data model, rendered to text.
    Other(String),
}

/// A value tree the encoder can walk.
pub trait TypedValue: Sized {
    fn kind(&self) -> ValueKind<'_, Self>;
}

impl TypedValue for Value {
    fn kind(&self) -> ValueKind<'_, Self> {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(b) => ValueKind::Bool(*b),
            Value::Number(n) => ValueKind::Number(format_number(n)),
            Value::String(s) => ValueKind::String(s),
            Value::Object(map) => {
                ValueKind::Object(Box::new(map.iter().map(|(k, v)| (k.as_str(), v))))
            }
            Value::Array(items) => ValueKind::Array(Box::new(items.iter())),
        }
    }
}

/// Render a JSON number as element text.
///
/// Integers print as plain decimal. Floats use the shortest representation
/// that parses back to the same `f64`, and integral floats keep their
/// fractional part (`1.0` stays `1.0`), so an integer literal and a float
/// literal never collapse to the same text.
pub fn format_number(n: &serde_json::Number) -> String {
    n.to_string()
}

/// JSON type name of a value, as used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Object(_) => "object",
        Value::Array(_) => "array",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_print_plain() {
        assert_eq!(format_number(json!(42).as_number().unwrap()), "42");
        assert_eq!(format_number(json!(-7).as_number().unwrap()), "-7");
        assert_eq!(
            format_number(json!(u64::MAX).as_number().unwrap()),
            "18446744073709551615"
        );
    }

    #[test]
    fn integral_floats_keep_fraction() {
        let n: Value = serde_json::from_str("1.0").unwrap();
        assert_eq!(format_number(n.as_number().unwrap()), "1.0");
        let n: Value = serde_json::from_str("2.5").unwrap();
        assert_eq!(format_number(n.as_number().unwrap()), "2.5");
    }

    #[test]
    fn objects_keep_document_order() {
        let value: Value = serde_json::from_str(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        let ValueKind::Object(members) = value.kind() else {
            panic!("expected object kind");
        };
        let keys: Vec<&str> = members.map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn json_values_never_classify_as_other() {
        for value in [
            json!(null),
            json!(true),
            json!(1),
            json!("s"),
            json!({}),
            json!([]),
        ] {
            assert!(!matches!(value.kind(), ValueKind::Other(_)));
        }
    }

    #[test]
    fn type_names() {
        assert_eq!(json_type_name(&json!([1])), "array");
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!({"a": 1})), "object");
    }
}
