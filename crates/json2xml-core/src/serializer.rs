//! Typed-XML serializer — writes an [`XmlNode`] tree as XML text.
//!
//! Pretty output puts one element per line. Each nesting level adds one copy
//! of the indent string, and the document ends with a newline:
//!
//! ```text
//! <object>
//!   <array name="list">
//!     <number>1</number>
//!     <null/>
//!   </array>
//! </object>
//! ```
//!
//! Elements without children and without text are written self-closing.
//! Markup characters are escaped by `quick-xml`. Carriage returns, and in
//! attribute values also tabs and newlines, are written as character
//! references so that XML end-of-line and attribute-value normalization
//! cannot alter them on re-parse.
//!
//! Characters outside the XML 1.0 `Char` production are rejected with
//! [`Json2XmlError::InvalidXmlChar`] before anything is written.

use crate::error::{Json2XmlError, Result};
use crate::types::XmlNode;
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::Writer;
use std::borrow::Cow;
use std::io::{self, Write};

/// Output options for [`serialize_with`] and [`write_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// String repeated once per nesting level. Ignored when `pretty` is off.
    pub indent: String,
    /// Prefix the document with `<?xml version="1.0" encoding="UTF-8"?>`.
    pub declaration: bool,
    /// One element per line with indentation. When off, the document is
    /// written on a single line with no whitespace between elements.
    pub pretty: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            declaration: false,
            pretty: true,
        }
    }
}

impl SerializeOptions {
    /// Pretty output indented with `width` spaces per level.
    pub fn spaces(width: usize) -> Self {
        Self {
            indent: " ".repeat(width),
            ..Self::default()
        }
    }

    /// Pretty output indented with one tab per level.
    pub fn tabs() -> Self {
        Self {
            indent: "\t".to_string(),
            ..Self::default()
        }
    }

    /// Single-line output.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }
}

/// Pretty-print a node tree with the given indent string and no declaration.
pub fn serialize(node: &XmlNode, indent: &str) -> Result<String> {
    serialize_with(
        node,
        &SerializeOptions {
            indent: indent.to_string(),
            ..SerializeOptions::default()
        },
    )
}

/// Serialize a node tree to a string.
pub fn serialize_with(node: &XmlNode, options: &SerializeOptions) -> Result<String> {
    let mut buf = Vec::new();
    write_to(&mut buf, node, options)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Serialize a node tree into any byte sink.
///
/// The tree and indent are checked first, so an invalid value leaves the
/// sink untouched.
pub fn write_to<W: Write>(sink: W, node: &XmlNode, options: &SerializeOptions) -> Result<()> {
    if options.pretty {
        check_chars(&options.indent, "indent")?;
    }
    check_tree(node)?;

    let mut out = XmlOut {
        writer: Writer::new(sink),
        options,
    };
    if options.declaration {
        out.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        out.newline()?;
    }
    out.element(node, 0)?;
    out.writer.into_inner().flush()?;
    Ok(())
}

struct XmlOut<'o, W: Write> {
    writer: Writer<W>,
    options: &'o SerializeOptions,
}

impl<W: Write> XmlOut<'_, W> {
    fn element(&mut self, node: &XmlNode, depth: usize) -> Result<()> {
        self.indent(depth)?;

        let tag = node.tag.as_str();
        let mut start = BytesStart::new(tag);
        for (key, value) in node.attributes() {
            start.push_attribute(Attribute {
                key: QName(key.as_bytes()),
                value: Cow::Owned(escape_attribute(value).into_bytes()),
            });
        }

        if node.is_empty() {
            self.writer.write_event(Event::Empty(start))?;
        } else if node.children.is_empty() {
            // Leaf with text: open, text, close on one line.
            self.writer.write_event(Event::Start(start))?;
            if let Some(text) = node.text.as_deref() {
                let escaped = escape_text(text);
                self.writer
                    .write_event(Event::Text(BytesText::from_escaped(escaped.as_ref())))?;
            }
            self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        } else {
            self.writer.write_event(Event::Start(start))?;
            self.newline()?;
            for child in &node.children {
                self.element(child, depth + 1)?;
            }
            self.indent(depth)?;
            self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }

        self.newline()
    }

    fn indent(&mut self, depth: usize) -> Result<()> {
        if self.options.pretty && depth > 0 && !self.options.indent.is_empty() {
            let pad = self.options.indent.repeat(depth);
            self.writer.write_event(Event::Text(BytesText::new(&pad)))?;
        }
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        if self.options.pretty {
            self.writer.write_event(Event::Text(BytesText::new("\n")))?;
        }
        Ok(())
    }
}

/// XML 1.0 `Char`: tab, LF, CR, and everything from U+0020 except the
/// surrogates (never a `char`) and U+FFFE/U+FFFF.
fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

fn check_chars(value: &str, context: &'static str) -> Result<()> {
    match value.chars().find(|&ch| !is_xml_char(ch)) {
        Some(ch) => Err(Json2XmlError::InvalidXmlChar { ch, context }),
        None => Ok(()),
    }
}

fn check_tree(node: &XmlNode) -> Result<()> {
    if let Some(name) = node.name.as_deref() {
        check_chars(name, "name attribute")?;
    }
    if let Some(text) = node.text.as_deref() {
        check_chars(text, "text")?;
    }
    node.children.iter().try_for_each(check_tree)
}

fn escape_text(text: &str) -> Cow<'_, str> {
    let escaped = escape(text);
    if escaped.contains('\r') {
        Cow::Owned(escaped.replace('\r', "&#13;"))
    } else {
        escaped
    }
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in escape(value).chars() {
        match ch {
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(ch),
        }
    }
    out
}
