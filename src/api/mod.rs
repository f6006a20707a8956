//! Song Sheet WASM API
//!
//! This module provides the JavaScript-facing API for song sheet
//! transposition.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `song_sheet`: Formatting, transposition and splitting operations

pub mod helpers;
pub mod song_sheet;

pub use song_sheet::{
    format_and_transpose_song_sheet, format_and_transpose_song_sheet_with_settings, is_chord,
    split_columns, split_song_sheet, transpose_chord, transpose_text,
};
