//! WASM bindings for json2xml-core.
//!
//! Exposes `convert` and `convertWith` as `#[wasm_bindgen]` functions that can
//! be called from JavaScript/TypeScript. Built with `wasm-bindgen-cli`:
//!
//! ```sh
//! cargo build -p json2xml-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/json2xml-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/json2xml_wasm.wasm
//! ```

use json2xml_core::SerializeOptions;
use wasm_bindgen::prelude::*;

/// Convert a JSON document into typed XML with a two-space indent.
///
/// Throws a JS error if the input is not valid JSON or its root is not an object.
#[wasm_bindgen]
pub fn convert(json: &str) -> std::result::Result<String, JsValue> {
    json2xml_core::convert(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert with explicit formatting: `indent` is repeated once per nesting
/// level, `declaration` prepends `<?xml ...?>`, and `pretty = false` gives a
/// single-line document.
#[wasm_bindgen(js_name = convertWith)]
pub fn convert_with(
    json: &str,
    indent: &str,
    declaration: bool,
    pretty: bool,
) -> std::result::Result<String, JsValue> {
    let options = SerializeOptions {
        indent: indent.to_string(),
        declaration,
        pretty,
    };
    json2xml_core::convert_with(json, &options).map_err(|e| JsValue::from_str(&e.to_string()))
}
