//! Song sheet formatting entry points
//!
//! Pipeline: normalize → split into regions → transpose each region →
//! lay the regions out as two columns.

use crate::models::{Region, SongSheetRegions, TransposeSettings};
use crate::parse::split_regions_with_marker;
use crate::renderers::columns::TwoColumnLayout;

use super::text::transpose_text_with;

/// Transpose a song sheet by `steps` semitones and format it as two columns
///
/// The result always contains the ` || ` separator: the left column is
/// everything before `[Order]`, the right column is the order section
/// followed by the rest of the sheet.
pub fn format_and_transpose(text: &str, steps: i32) -> String {
    format_and_transpose_with(text, steps, &TransposeSettings::default())
}

pub fn format_and_transpose_with(text: &str, steps: i32, settings: &TransposeSettings) -> String {
    transpose_song_sheet(text, steps, settings).render(&settings.column_separator)
}

/// Same pipeline as [`format_and_transpose_with`], stopping before rendering
pub fn transpose_song_sheet(text: &str, steps: i32, settings: &TransposeSettings) -> TwoColumnLayout {
    let regions = split_regions_with_marker(text, &settings.order_marker);
    let transposed = transpose_regions(&regions, steps, settings);

    log::debug!(
        "Transposed song sheet by {} semitones ({} lines)",
        steps,
        regions.line_count()
    );

    TwoColumnLayout::from_blocks(
        &transposed.block(Region::BeforeOrder),
        &transposed.block(Region::OrderSection),
        &transposed.block(Region::AfterOrder),
    )
}

/// Transpose the chords of every region
pub fn transpose_regions(
    regions: &SongSheetRegions,
    steps: i32,
    settings: &TransposeSettings,
) -> SongSheetRegions {
    let mut transposed = SongSheetRegions::new();

    for region in Region::ALL {
        if regions.lines(region).is_empty() {
            continue;
        }

        let block = regions.block(region);
        let block = if region == Region::OrderSection && !settings.transpose_order_section {
            block
        } else {
            transpose_text_with(&block, steps, settings.whitespace)
        };

        for line in block.split('\n') {
            transposed.push(region, line);
        }
    }

    transposed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WhitespaceMode;

    const SHEET: &str = "C G Am F\n[Order]\nVerse Chorus\n[Bridge]\nD A";

    #[test]
    fn test_order_and_bridge_scenario() {
        assert_eq!(
            format_and_transpose(SHEET, 2),
            "D A Bm G || [Order]\nVerse Chorus\n\n[Bridge]\nE B"
        );
    }

    #[test]
    fn test_order_section_chords_transposed() {
        let out = format_and_transpose("C\n[Order]\nIntro G\n[Verse]\nAm", 2);
        assert_eq!(out, "D || [Order]\nIntro A\n\n[Verse]\nBm");
    }

    #[test]
    fn test_order_section_verbatim_when_disabled() {
        let settings = TransposeSettings {
            transpose_order_section: false,
            ..Default::default()
        };
        let out = format_and_transpose_with("C\n[Order]\n  Intro   G\n[Verse]\nAm", 2, &settings);
        assert_eq!(out, "D || [Order]\n  Intro   G\n\n[Verse]\nBm");
    }

    #[test]
    fn test_region_line_counts_survive() {
        let regions = split_regions_with_marker(SHEET, "[Order]");
        let transposed = transpose_regions(&regions, 7, &TransposeSettings::default());
        assert_eq!(transposed.before_order.len(), 1);
        assert_eq!(transposed.order_section.len(), 2);
        assert_eq!(transposed.after_order.len(), 2);
        assert_eq!(transposed.after_order[1], "A E");
    }

    #[test]
    fn test_collapse_mode_applies_to_all_regions() {
        let settings = TransposeSettings {
            whitespace: WhitespaceMode::Collapse,
            ..Default::default()
        };
        let out = format_and_transpose_with("C   G\n[Order]\nV1   V2\n[End]\nF   C", 0, &settings);
        assert_eq!(out, "C G || [Order]\nV1 V2\n\n[End]\nF C");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format_and_transpose("", 4), " || ");
    }
}
