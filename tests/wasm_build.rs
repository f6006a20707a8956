//! WASM build test
//!
//! This module tests that the WASM API can be called from a browser
//! and round-trips values through serde-wasm-bindgen.

#![cfg(target_arch = "wasm32")]

use songsheet_wasm::api::*;
use songsheet_wasm::{SongSheetRegions, TransposeSettings, TwoColumnLayout};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_format_and_transpose() {
    let out = format_and_transpose_song_sheet("C G Am F\n[Order]\nVerse Chorus\n[Bridge]\nD A", 2);
    assert_eq!(out, "D A Bm G || [Order]\nVerse Chorus\n\n[Bridge]\nE B");
}

#[wasm_bindgen_test]
fn test_default_settings_from_undefined() {
    let out = format_and_transpose_song_sheet_with_settings("C", 1, JsValue::UNDEFINED).unwrap();
    assert_eq!(out, "C# || ");
}

#[wasm_bindgen_test]
fn test_invalid_settings_rejected() {
    let settings = TransposeSettings {
        column_separator: String::new(),
        ..Default::default()
    };
    let settings = serde_wasm_bindgen::to_value(&settings).unwrap();
    assert!(format_and_transpose_song_sheet_with_settings("C", 1, settings).is_err());
}

#[wasm_bindgen_test]
fn test_chord_helpers() {
    assert!(is_chord("Am7/G"));
    assert!(!is_chord("Hello"));
    assert_eq!(transpose_chord("Bb/D", 1), "B/D#");
    assert_eq!(transpose_text("C  G", 2), "D  A");
}

#[wasm_bindgen_test]
fn test_split_song_sheet() {
    let value = split_song_sheet("C\n[Order]\nV\n[End]").unwrap();
    let regions: SongSheetRegions = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(regions.order_section, vec!["[Order]", "V"]);
    assert_eq!(regions.after_order, vec!["[End]"]);
}

#[wasm_bindgen_test]
fn test_split_columns() {
    let value = split_columns("D A || [Order]").unwrap();
    let layout: TwoColumnLayout = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(layout.left, "D A");
    assert_eq!(layout.right, "[Order]");
}
