//! Pitch classes and root-note spelling tables
//!
//! A root note is one of the twelve chromatic pitch classes, spelled with
//! a letter A-G and an optional `#` or `b`. Transposed roots are always
//! rendered with the sharp spelling.
//!
//! Example:
//!   "C"  + 2  → "D"
//!   "Bb" + 1  → "B"
//!   "Bb" + 0  → "A#"   (flats re-spell as sharps)
//!   "C"  - 1  → "B"

/// Sharp spelling, index = pitch class (0=C ... 11=B)
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spelling, index = pitch class (0=C ... 11=B)
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Chromatic pitch class (0-11)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Create a pitch class, wrapping any value into 0-11
    pub fn new(value: i32) -> Self {
        PitchClass(value.rem_euclid(12) as u8)
    }

    /// Look up a root note name, sharp table first, then flat table
    ///
    /// Returns None for anything that is not one of the 12 sharp or
    /// 12 flat spellings (e.g. "Cb", "E#", "H").
    pub fn from_name(name: &str) -> Option<PitchClass> {
        SHARP_NAMES
            .iter()
            .position(|&n| n == name)
            .or_else(|| FLAT_NAMES.iter().position(|&n| n == name))
            .map(|index| PitchClass(index as u8))
    }

    /// Shift by a signed number of semitones with wraparound in both directions
    pub fn transpose(self, steps: i32) -> PitchClass {
        PitchClass::new(self.0 as i32 + steps.rem_euclid(12))
    }

    /// Sharp spelling of this pitch class
    pub fn sharp_name(self) -> &'static str {
        SHARP_NAMES[self.0 as usize]
    }
}

/// Transpose a bare root note name
///
/// Unknown names come back unchanged.
pub fn transpose_note(note: &str, steps: i32) -> String {
    match PitchClass::from_name(note) {
        Some(pitch) => pitch.transpose(steps).sharp_name().to_string(),
        None => note.to_string(),
    }
}
