//! Typed-XML node model.
//!
//! An [`XmlNode`] is the in-memory form of one element of the output document.
//! It is built by the [`encoder`](crate::encoder) and consumed by the
//! [`serializer`](crate::serializer); nothing else mutates it.

use std::fmt;

/// Element name of a typed-XML node. There is exactly one tag per JSON type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Null,
    Boolean,
    Number,
    String,
    Object,
    Array,
}

impl Tag {
    /// All tags, in the order they appear in the type-dispatch table.
    pub const ALL: [Tag; 6] = [
        Tag::Null,
        Tag::Boolean,
        Tag::Number,
        Tag::String,
        Tag::Object,
        Tag::Array,
    ];

    /// The XML element name for this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Null => "null",
            Tag::Boolean => "boolean",
            Tag::Number => "number",
            Tag::String => "string",
            Tag::Object => "object",
            Tag::Array => "array",
        }
    }

    /// Look up a tag by element name. Returns `None` for names outside the
    /// typed-XML vocabulary.
    pub fn from_name(name: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.as_str() == name)
    }

    /// Container tags hold child elements; all others hold at most text.
    pub fn is_container(self) -> bool {
        matches!(self, Tag::Object | Tag::Array)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of a typed-XML document.
///
/// `name` is the only attribute the model carries. It is set for object
/// members and absent for array elements and for the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    pub tag: Tag,
    pub name: Option<String>,
    pub text: Option<String>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// A childless node, optionally carrying text.
    pub fn leaf(tag: Tag, name: Option<&str>, text: Option<String>) -> Self {
        Self {
            tag,
            name: name.map(str::to_owned),
            text,
            children: Vec::new(),
        }
    }

    /// A container node with the given children.
    pub fn branch(tag: Tag, name: Option<&str>, children: Vec<XmlNode>) -> Self {
        Self {
            tag,
            name: name.map(str::to_owned),
            text: None,
            children,
        }
    }

    /// Attributes as `(key, value)` pairs, in output order.
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        self.name
            .as_deref()
            .map(|name| ("name", name))
            .into_iter()
            .collect()
    }

    /// True when the element serializes as a self-closing tag: no children
    /// and no (or empty) text.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.as_deref().is_none_or(str::is_empty)
    }

    /// Total number of elements in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(XmlNode::node_count).sum::<usize>()
    }
}
