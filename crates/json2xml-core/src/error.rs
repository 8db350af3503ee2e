//! Error types for JSON → typed-XML conversion.

use thiserror::Error;

/// Errors that can occur while converting a JSON document to typed XML.
#[derive(Error, Debug)]
pub enum Json2XmlError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The document root is not a JSON object. Only objects can be wrapped
    /// in the synthetic `<object>` root element.
    #[error("JSON root must be an object, found {found}")]
    InvalidRootKind { found: &'static str },

    /// A value contains a character XML 1.0 cannot represent, not even as a
    /// character reference (C0 controls other than tab/LF/CR, U+FFFE, U+FFFF).
    #[error("{context} contains {ch:?}, which is not allowed in XML 1.0")]
    InvalidXmlChar { ch: char, context: &'static str },

    /// The output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout json2xml-core.
pub type Result<T> = std::result::Result<T, Json2XmlError>;
