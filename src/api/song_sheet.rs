//! Song sheet operations for the WASM API
//!
//! Thin `wasm-bindgen` wrappers over the transposition core. Plain
//! strings cross the boundary as strings; structured results go through
//! `serde-wasm-bindgen`.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{serialize, settings_from_js};
use crate::models::{self, DEFAULT_COLUMN_SEPARATOR};
use crate::parse::split_regions;
use crate::renderers::TwoColumnLayout;
use crate::transposition;
use crate::{wasm_info, wasm_log, wasm_warn};

/// Transpose a song sheet and format it as `"<left> || <right>"`
#[wasm_bindgen(js_name = formatAndTransposeSongSheet)]
pub fn format_and_transpose_song_sheet(text: &str, steps: i32) -> String {
    wasm_info!("formatAndTransposeSongSheet called: {} bytes, steps={}", text.len(), steps);
    let formatted = transposition::format_and_transpose(text, steps);
    wasm_log!("  formatted output: {} bytes", formatted.len());
    formatted
}

/// Same as `formatAndTransposeSongSheet`, with a settings object
///
/// # Parameters
/// * `settings` - `{ order_marker, column_separator, whitespace, transpose_order_section }`,
///   any field may be omitted; `undefined`/`null` uses the defaults
#[wasm_bindgen(js_name = formatAndTransposeSongSheetWithSettings)]
pub fn format_and_transpose_song_sheet_with_settings(
    text: &str,
    steps: i32,
    settings: JsValue,
) -> Result<String, JsValue> {
    wasm_info!(
        "formatAndTransposeSongSheetWithSettings called: {} bytes, steps={}",
        text.len(),
        steps
    );

    let settings = settings_from_js(settings)?;
    wasm_log!(
        "  marker={:?}, whitespace={:?}, transpose_order_section={}",
        settings.order_marker,
        settings.whitespace,
        settings.transpose_order_section
    );

    Ok(transposition::format_and_transpose_with(text, steps, &settings))
}

#[wasm_bindgen(js_name = transposeText)]
pub fn transpose_text(text: &str, steps: i32) -> String {
    transposition::transpose_text(text, steps)
}

#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord(chord: &str, steps: i32) -> String {
    models::transpose_chord(chord, steps)
}

#[wasm_bindgen(js_name = isChord)]
pub fn is_chord(word: &str) -> bool {
    models::is_chord(word)
}

/// Split a song sheet into `{ before_order, order_section, after_order }` line arrays
#[wasm_bindgen(js_name = splitSongSheet)]
pub fn split_song_sheet(text: &str) -> Result<JsValue, JsValue> {
    let regions = split_regions(text);
    wasm_log!(
        "splitSongSheet: {}/{}/{} lines",
        regions.before_order.len(),
        regions.order_section.len(),
        regions.after_order.len()
    );
    serialize(&regions, "Failed to serialize song sheet regions")
}

/// Split formatted output into `{ left, right }` for two-pane display
///
/// Output without a separator is shown entirely in the left pane.
#[wasm_bindgen(js_name = splitColumns)]
pub fn split_columns(formatted: &str) -> Result<JsValue, JsValue> {
    let layout = TwoColumnLayout::parse(formatted, DEFAULT_COLUMN_SEPARATOR).unwrap_or_else(|| {
        wasm_warn!("splitColumns: no column separator found");
        TwoColumnLayout {
            left: formatted.to_string(),
            right: String::new(),
        }
    });
    serialize(&layout, "Failed to serialize column layout")
}
