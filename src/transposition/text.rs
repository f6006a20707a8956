/// Line-by-line chord transposition of a text block
///
/// Every space-delimited word that is a chord gets transposed, every other
/// word is copied as-is. Lines are trimmed at both ends.
///
/// Example (+2):
///   "C   G  Am"          → "D   A  Bm"
///   "Amazing grace"      → "Amazing grace"
///   "  Em7/B  "          → "F#m7/C#"

use crate::models::{is_chord, transpose_chord, WhitespaceMode};

/// Transpose every chord in a block of text, keeping interior spacing
pub fn transpose_text(text: &str, steps: i32) -> String {
    transpose_text_with(text, steps, WhitespaceMode::Preserve)
}

pub fn transpose_text_with(text: &str, steps: i32, whitespace: WhitespaceMode) -> String {
    text.split('\n')
        .map(|line| transpose_line(line, steps, whitespace))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Transpose the chords of a single line
pub fn transpose_line(line: &str, steps: i32, whitespace: WhitespaceMode) -> String {
    let words: Vec<String> = match whitespace {
        // Empty pieces between consecutive spaces are kept, so the rejoin
        // restores the original run lengths.
        WhitespaceMode::Preserve => line.split(' ').map(|word| transpose_word(word, steps)).collect(),
        WhitespaceMode::Collapse => line
            .split_whitespace()
            .map(|word| transpose_word(word, steps))
            .collect(),
    };

    words.join(" ").trim().to_string()
}

/// Transpose a word if it is a chord
///
/// The word is trimmed before classification; non-chords are returned
/// untrimmed.
pub fn transpose_word(word: &str, steps: i32) -> String {
    let trimmed = word.trim();
    if is_chord(trimmed) {
        transpose_chord(trimmed, steps)
    } else {
        word.to_string()
    }
}
