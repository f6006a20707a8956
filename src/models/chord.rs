//! Chord tokens
//!
//! A chord token is a single space-delimited word that fully matches the
//! chord grammar: a root letter A-G, an optional accidental, any number of
//! quality/extension groups from a closed set, and an optional slash bass
//! note. Anything else (lyrics, section headings, punctuation) is not a
//! chord and is never rewritten.

use once_cell::sync::Lazy;
use regex::Regex;

use super::pitch::transpose_note;

/// Whole-token chord grammar (anchored at both ends)
static CHORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-G](#|b)?",
        r"(m|min|maj|dim|aug|sus|add|2|4|6|7|9|11|13|6/9|7-5|7-9|7#5|7#9|7\+5|7\+9",
        r"|b5|#5|#9|7b5|7b9|7sus2|7sus4|add2|add4|add9|aug|dim|dim7|m/maj7",
        r"|m6|m7|m7b5|m9|m11|m13|M7|M9|M11|M13|mb5|m|sus|sus2|sus4)*",
        r"(/[A-G](#|b)?)?$",
    ))
    .expect("chord grammar is a valid regex")
});

/// Root note at the start of a chord (anchored prefix)
static ROOT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-G](#|b)?").expect("root pattern is a valid regex"));

/// Check whether a word is a chord
pub fn is_chord(word: &str) -> bool {
    CHORD_PATTERN.is_match(word)
}

/// A chord split into the pieces that transposition touches
///
/// `root` and `bass` are rewritten, `suffix` is reproduced verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    pub root: String,
    pub suffix: String,
    pub bass: Option<String>,
}

impl ChordToken {
    /// Parse a word into a chord token
    ///
    /// Returns None when the word is not a chord, and also for chords
    /// whose slash split does not give exactly two pieces (e.g.
    /// `Cm/maj7/E`); those are left untouched by transposition.
    pub fn parse(word: &str) -> Option<ChordToken> {
        if !is_chord(word) {
            return None;
        }

        if word.contains('/') {
            let parts: Vec<&str> = word.split('/').filter(|p| !p.is_empty()).collect();
            let [main, bass] = parts.as_slice() else {
                return None;
            };
            let (root, suffix) = split_root(main)?;
            return Some(ChordToken {
                root: root.to_string(),
                suffix: suffix.to_string(),
                bass: Some(bass.to_string()),
            });
        }

        let (root, suffix) = split_root(word)?;
        Some(ChordToken {
            root: root.to_string(),
            suffix: suffix.to_string(),
            bass: None,
        })
    }

    /// Shift the root and bass note by `steps` semitones
    pub fn transposed(&self, steps: i32) -> ChordToken {
        ChordToken {
            root: transpose_note(&self.root, steps),
            suffix: self.suffix.clone(),
            bass: self.bass.as_deref().map(|bass| transpose_note(bass, steps)),
        }
    }
}

impl std::fmt::Display for ChordToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)?;
        if let Some(bass) = &self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

/// Split off the leading root note; the rest is an opaque suffix
fn split_root(chord: &str) -> Option<(&str, &str)> {
    let m = ROOT_PATTERN.find(chord)?;
    Some(chord.split_at(m.end()))
}

/// Transpose a single chord word
///
/// Words that are not transposable chords come back unchanged.
pub fn transpose_chord(chord: &str, steps: i32) -> String {
    match ChordToken::parse(chord) {
        Some(token) => token.transposed(steps).to_string(),
        None => chord.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_chords_match() {
        for chord in ["C", "C#", "Db", "Am", "Am7", "Cmaj7", "Gsus4", "D/F#", "Bb/D", "E7#9", "F6/9", "Cm/maj7", "Fadd9", "G7sus4"] {
            assert!(is_chord(chord), "{} should be a chord", chord);
        }
    }

    #[test]
    fn test_non_chords_rejected() {
        for word in ["Hello", "the", "Verse", "1.", "[Order]", "", "H", "c", "Am,", "(C)", "Cx", "Amaj7a", "C/H"] {
            assert!(!is_chord(word), "{} should not be a chord", word);
        }
    }

    #[test]
    fn test_repeated_quality_groups() {
        assert!(is_chord("Cmaj7sus4"));
        assert!(is_chord("Am7add9"));
        assert!(is_chord("Gsus2sus4"));
    }

    #[test]
    fn test_parse_parts() {
        let token = ChordToken::parse("Am7/G").unwrap();
        assert_eq!(token.root, "A");
        assert_eq!(token.suffix, "m7");
        assert_eq!(token.bass.as_deref(), Some("G"));

        let token = ChordToken::parse("F#m").unwrap();
        assert_eq!(token.root, "F#");
        assert_eq!(token.suffix, "m");
        assert_eq!(token.bass, None);
    }

    #[test]
    fn test_transpose_simple() {
        assert_eq!(transpose_chord("C", 2), "D");
        assert_eq!(transpose_chord("Am", 2), "Bm");
        assert_eq!(transpose_chord("F#m7", 1), "Gm7");
        assert_eq!(transpose_chord("Ebmaj7", 2), "Fmaj7");
    }

    #[test]
    fn test_transpose_slash_chord() {
        assert_eq!(transpose_chord("Bb/D", 1), "B/D#");
        assert_eq!(transpose_chord("D/F#", -2), "C/E");
    }

    #[test]
    fn test_six_nine_keeps_extension() {
        // "9" is not a note, so it survives as the "bass" piece
        assert_eq!(transpose_chord("C6/9", 2), "D6/9");
    }

    #[test]
    fn test_three_way_slash_unchanged() {
        assert!(is_chord("Cm/maj7/E"));
        assert_eq!(ChordToken::parse("Cm/maj7/E"), None);
        assert_eq!(transpose_chord("Cm/maj7/E", 5), "Cm/maj7/E");
    }

    #[test]
    fn test_unknown_root_spelling_unchanged() {
        // Cb is not in either table; the b5-looking suffix stays put
        assert_eq!(transpose_chord("Cb5", 3), "Cb5");
    }

    #[test]
    fn test_non_chord_unchanged() {
        assert_eq!(transpose_chord("Hello", 4), "Hello");
        assert_eq!(transpose_chord("Verse", -3), "Verse");
    }
}
