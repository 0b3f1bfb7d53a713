//! WASM bindings for ascii-tree.
//!
//! Exposes `render` and `renderWithGap` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::{KeyTree, RenderConfig, TreePrinter};

/// Draw the search tree of whitespace-separated `keys` with default settings.
#[wasm_bindgen]
pub fn render(keys: &str) -> Result<String, JsError> {
    KeyTree::parse(keys)
        .render(&TreePrinter::new())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Draw the search tree of `keys` with `gap` blank columns between siblings.
#[wasm_bindgen(js_name = "renderWithGap")]
pub fn render_with_gap(keys: &str, gap: usize) -> Result<String, JsError> {
    let printer = TreePrinter::with_config(RenderConfig::new().with_gap(gap));
    KeyTree::parse(keys)
        .render(&printer)
        .map_err(|e| JsError::new(&e.to_string()))
}
