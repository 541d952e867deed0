//! WASM-compatible wrapper for deck rendering.
//!
//! This crate exposes the deck compiler to JavaScript for use in
//! Cloudflare Workers.

use deck_core::{DeckDescription, DeckRenderer, Theme};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of rendering a deck.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResult {
    /// The standalone HTML document.
    pub html: String,
    /// Number of slides in the document.
    pub slide_count: usize,
    /// Validation warning, if the deck looked incomplete.
    pub warning: Option<String>,
}

/// Render a deck description object.
///
/// # Arguments
/// * `deck` - The deck description (`companyName`, `accentColor`, `slides`, ...)
/// * `theme` - Optional built-in theme name (default: `classic`)
///
/// # Returns
/// A JavaScript object with the render result, or throws on error.
#[wasm_bindgen]
pub fn render_deck(deck: JsValue, theme: Option<String>) -> Result<JsValue, JsValue> {
    let deck: DeckDescription = serde_wasm_bindgen::from_value(deck)
        .map_err(|e| JsValue::from_str(&format!("Invalid deck description: {}", e)))?;

    let result = render_deck_impl(&deck, theme.as_deref()).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Render a deck description given as JSON text. Returns the HTML document.
#[wasm_bindgen]
pub fn render_deck_json(json: &str, theme: Option<String>) -> Result<String, JsValue> {
    render_deck_json_impl(json, theme.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Names of the built-in themes.
#[wasm_bindgen]
pub fn builtin_themes() -> js_sys::Array {
    Theme::builtin_names()
        .iter()
        .map(|name| JsValue::from_str(name))
        .collect()
}

fn renderer_for(theme: Option<&str>) -> Result<DeckRenderer, String> {
    let theme = match theme {
        Some(name) if !name.is_empty() => Theme::builtin(name).map_err(|e| e.to_string())?,
        _ => Theme::default(),
    };
    Ok(DeckRenderer::new(theme))
}

fn render_deck_impl(deck: &DeckDescription, theme: Option<&str>) -> Result<RenderResult, String> {
    let renderer = renderer_for(theme)?;
    let document = renderer.render(deck);

    Ok(RenderResult {
        slide_count: document.slide_count(),
        html: document.into_string(),
        warning: deck.validate().err().map(|e| e.to_string()),
    })
}

fn render_deck_json_impl(json: &str, theme: Option<&str>) -> Result<String, String> {
    let deck = DeckDescription::from_json(json).map_err(|e| e.to_string())?;
    render_deck_impl(&deck, theme).map(|result| result.html)
}
