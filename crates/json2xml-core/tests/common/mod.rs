//! Test-only XML reader: parses typed XML back into an `XmlNode` tree and
//! rebuilds the JSON value it describes.
#![allow(dead_code)]

use json2xml_core::{Tag, XmlNode};
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

/// Parse serialized typed XML into a node tree.
///
/// Whitespace between elements is dropped; text inside a non-container leaf
/// is kept verbatim, so an empty `<string/>` reads back as `Some("")`.
pub fn parse_xml(xml: &str) -> XmlNode {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<(XmlNode, String)> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event().expect("output must be well-formed XML") {
            Event::Start(e) => stack.push((open(&e), String::new())),
            Event::Empty(e) => {
                let node = finish(open(&e), String::new());
                attach(&mut stack, &mut root, node);
            }
            Event::Text(t) => {
                if let Some((_, text)) = stack.last_mut() {
                    let raw = String::from_utf8_lossy(&t).into_owned();
                    text.push_str(&unescape(&raw).expect("valid escapes"));
                }
            }
            Event::GeneralRef(r) => {
                if let Some((_, text)) = stack.last_mut() {
                    let entity = format!("&{};", String::from_utf8_lossy(&r));
                    text.push_str(&unescape(&entity).expect("known entity"));
                }
            }
            Event::End(_) => {
                let (node, text) = stack.pop().expect("balanced tags");
                attach(&mut stack, &mut root, finish(node, text));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    assert!(stack.is_empty(), "unclosed elements");
    root.expect("document must have a root element")
}

fn open(e: &BytesStart) -> XmlNode {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let tag = Tag::from_name(&name).unwrap_or_else(|| panic!("unexpected element <{name}>"));
    let mut attr_name = None;
    for attr in e.attributes() {
        let attr = attr.expect("well-formed attribute");
        assert_eq!(attr.key.as_ref(), b"name", "only `name` attributes are emitted");
        let raw = String::from_utf8_lossy(&attr.value).into_owned();
        attr_name = Some(unescape(&raw).expect("valid escapes").into_owned());
    }
    XmlNode {
        tag,
        name: attr_name,
        text: None,
        children: Vec::new(),
    }
}

fn finish(mut node: XmlNode, text: String) -> XmlNode {
    if !node.tag.is_container() && node.tag != Tag::Null {
        node.text = Some(text);
    }
    node
}

fn attach(stack: &mut [(XmlNode, String)], root: &mut Option<XmlNode>, node: XmlNode) {
    match stack.last_mut() {
        Some((parent, _)) => parent.children.push(node),
        None => {
            assert!(root.is_none(), "multiple root elements");
            *root = Some(node);
        }
    }
}

/// Rebuild the JSON value a typed-XML node describes.
pub fn to_json(node: &XmlNode) -> Value {
    let text = node.text.as_deref().unwrap_or_default();
    match node.tag {
        Tag::Null => Value::Null,
        Tag::Boolean => Value::Bool(text == "true"),
        Tag::Number => serde_json::from_str(text).expect("number text must parse"),
        Tag::String => Value::String(text.to_string()),
        Tag::Array => Value::Array(node.children.iter().map(to_json).collect()),
        Tag::Object => {
            let mut map = Map::new();
            for child in &node.children {
                let key = child.name.clone().expect("object members are named");
                map.insert(key, to_json(child));
            }
            Value::Object(map)
        }
    }
}

/// Split a line into its count of leading `indent` units and the remainder.
fn strip_indent<'a>(line: &'a str, indent: &str) -> (usize, &'a str) {
    let mut rest = line;
    let mut level = 0;
    while let Some(stripped) = rest.strip_prefix(indent) {
        rest = stripped;
        level += 1;
    }
    (level, rest)
}

/// Depth of each line's leading indent, in units of `indent`.
pub fn indent_levels(xml: &str, indent: &str) -> Vec<usize> {
    xml.lines().map(|line| strip_indent(line, indent).0).collect()
}

/// Nesting depth each line should be indented to, derived from the tags.
/// Lines are classified after removing their `indent` prefix, so indents
/// that are not whitespace work too.
pub fn expected_levels(xml: &str, indent: &str) -> Vec<usize> {
    let mut depth = 0usize;
    let mut levels = Vec::new();
    for line in xml.lines() {
        let (_, line) = strip_indent(line, indent);
        if line.starts_with("</") {
            depth -= 1;
            levels.push(depth);
        } else {
            levels.push(depth);
            let opens_only = !line.ends_with("/>") && !line.contains("</");
            if opens_only {
                depth += 1;
            }
        }
    }
    levels
}
