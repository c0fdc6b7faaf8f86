pub mod config;
pub mod edges;
pub mod error;
pub mod evaluate;
pub mod formula;
pub mod printer;
pub mod render;

use wasm_bindgen::prelude::*;

pub use error::Error;
pub use printer::Derivation;

/// The standard derivation document, for embedding in a page.
#[wasm_bindgen]
pub fn derivation_latex() -> Result<String, JsValue> {
    Derivation::standard()
        .and_then(|derivation| derivation.document())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
