//! Data model for song sheet transposition
//!
//! All types are plain values that live for one formatting call.

pub mod chord;
pub mod pitch;
pub mod region;
pub mod settings;

// Re-export commonly used types
pub use chord::{is_chord, transpose_chord, ChordToken};
pub use pitch::{transpose_note, PitchClass, FLAT_NAMES, SHARP_NAMES};
pub use region::{Region, SongSheetRegions};
pub use settings::{
    SettingsError, TransposeSettings, WhitespaceMode, DEFAULT_COLUMN_SEPARATOR, DEFAULT_ORDER_MARKER,
};
