//! Song Sheet WASM Module
//!
//! Chord transposition and two-column layout for plain-text song sheets.
//! A sheet is split around its `[Order]` marker, every chord token is
//! shifted by a signed number of semitones, and the result is rendered as
//! `"<left column> || <right column>"`.
//!
//! ```
//! use songsheet_wasm::format_and_transpose;
//!
//! let out = format_and_transpose("C G Am F\n[Order]\nVerse Chorus\n[Bridge]\nD A", 2);
//! assert_eq!(out, "D A Bm G || [Order]\nVerse Chorus\n\n[Bridge]\nE B");
//! ```

pub mod models;
pub mod parse;
pub mod renderers;
pub mod transposition;
pub mod api;

// Re-export commonly used types
pub use models::{
    is_chord, transpose_chord, transpose_note, ChordToken, PitchClass, Region, SettingsError,
    SongSheetRegions, TransposeSettings, WhitespaceMode,
};
pub use parse::split_regions;
pub use renderers::TwoColumnLayout;
pub use transposition::{format_and_transpose, format_and_transpose_with, transpose_text};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A logger may already be installed by the host page
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Song sheet WASM module initialized");
}
