//! Typed-XML Encoder — converts JSON values into [`XmlNode`] trees.
//!
//! Every element is named after the JSON type of the value it represents:
//!
//! | JSON value | element | content |
//! |---|---|---|
//! | `null` | `<null/>` | none |
//! | `true`/`false` | `<boolean>` | `true` / `false` |
//! | number | `<number>` | decimal text |
//! | string | `<string>` | the string |
//! | object | `<object>` | one child per member, carrying `name="key"` |
//! | array | `<array>` | one child per element, no `name` |
//!
//! Object members become *named* children; array elements become *unnamed*
//! children. Both go through the same recursive dispatch, which only differs
//! in whether a `name` is attached.
//!
//! # Example
//! ```
//! use json2xml_core::convert;
//! let xml = convert(r#"{"a":1,"list":[true,null]}"#).unwrap();
//! assert_eq!(
//!     xml,
//!     "<object>\n  <number name=\"a\">1</number>\n  <array name=\"list\">\n    <boolean>true</boolean>\n    <null/>\n  </array>\n</object>\n"
//! );
//! ```

use crate::error::{Json2XmlError, Result};
use crate::serializer::{serialize_with, SerializeOptions};
use crate::types::{Tag, XmlNode};
use crate::value::{json_type_name, TypedValue, ValueKind};
use serde_json::{Map, Value};

/// Convert a JSON string into pretty-printed typed XML (two-space indent,
/// no declaration).
///
/// Returns an error if the input is not valid JSON, its root is not an object,
/// or a key or string holds a character XML cannot represent.
pub fn convert(json: &str) -> Result<String> {
    convert_with(json, &SerializeOptions::default())
}

/// Convert a JSON string into typed XML using the given output options.
pub fn convert_with(json: &str, options: &SerializeOptions) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    let root = encode_document(&value)?;
    serialize_with(&root, options)
}

/// Encode a parsed document. The root must be an object; its members are
/// wrapped in a synthetic `<object>` element.
pub fn encode_document(value: &Value) -> Result<XmlNode> {
    match value {
        Value::Object(map) => Ok(encode_root(map)),
        other => Err(Json2XmlError::InvalidRootKind {
            found: json_type_name(other),
        }),
    }
}

/// Wrap an object's members under a synthetic `<object>` root. The root has
/// no `name`; each member becomes a named child in document order.
pub fn encode_root(document: &Map<String, Value>) -> XmlNode {
    let children = document
        .iter()
        .map(|(key, value)| encode_named(key, value))
        .collect();
    XmlNode::branch(Tag::Object, None, children)
}

/// Encode a value as an unnamed element (array-element context).
pub fn encode<V: TypedValue>(value: &V) -> XmlNode {
    element(value, None)
}

/// Encode a value as a named element (object-member context).
pub fn encode_named<V: TypedValue>(name: &str, value: &V) -> XmlNode {
    element(value, Some(name))
}

/// Shared type dispatch for both contexts.
fn element<V: TypedValue>(value: &V, name: Option<&str>) -> XmlNode {
    match value.kind() {
        ValueKind::Null => XmlNode::leaf(Tag::Null, name, None),
        ValueKind::Bool(b) => XmlNode::leaf(Tag::Boolean, name, Some(bool_text(b).to_owned())),
        ValueKind::Number(text) => XmlNode::leaf(Tag::Number, name, Some(text)),
        ValueKind::String(s) => XmlNode::leaf(Tag::String, name, Some(s.to_owned())),
        ValueKind::Object(members) => {
            let children = members.map(|(key, child)| element(child, Some(key))).collect();
            XmlNode::branch(Tag::Object, name, children)
        }
        ValueKind::Array(items) => {
            let children = items.map(|child| element(child, None)).collect();
            XmlNode::branch(Tag::Array, name, children)
        }
        // Unknown kinds degrade to their text form.
        ValueKind::Other(text) => XmlNode::leaf(Tag::String, name, Some(text)),
    }
}

fn bool_text(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}
