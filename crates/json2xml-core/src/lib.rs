//! # json2xml-core
//!
//! Converts JSON documents into **typed XML**: every element is named after
//! the JSON type of its value (`null`, `boolean`, `number`, `string`,
//! `object`, `array`), object keys are kept in a `name` attribute, and array
//! elements carry no name.
//!
//! ## Quick start
//!
//! ```rust
//! use json2xml_core::convert;
//!
//! let xml = convert(r#"{"a":1,"b":"x"}"#).unwrap();
//! assert_eq!(
//!     xml,
//!     "<object>\n  <number name=\"a\">1</number>\n  <string name=\"b\">x</string>\n</object>\n"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`encoder`] — JSON value → [`XmlNode`] tree (`encode`, `encode_root`, `convert`)
//! - [`serializer`] — [`XmlNode`] tree → XML text (`serialize`, `SerializeOptions`)
//! - [`types`] — the `XmlNode` / `Tag` model
//! - [`value`] — `TypedValue` view the encoder dispatches on
//! - [`error`] — error types for parse/encode failures

pub mod encoder;
pub mod error;
pub mod serializer;
pub mod types;
pub mod value;

pub use encoder::{convert, convert_with, encode, encode_document, encode_named, encode_root};
pub use error::{Json2XmlError, Result};
pub use serializer::{serialize, serialize_with, write_to, SerializeOptions};
pub use types::{Tag, XmlNode};
pub use value::{TypedValue, ValueKind};
