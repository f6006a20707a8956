//! Song sheet document parsing
//!
//! Normalizes raw text (line endings, byte-order mark, outer whitespace)
//! and walks its lines to split them into regions around the order marker.

use crate::models::{Region, SongSheetRegions, DEFAULT_ORDER_MARKER};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Normalize line endings to `\n`, drop byte-order marks and trim the document
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace(BYTE_ORDER_MARK, "")
        .trim()
        .to_string()
}

/// Lines of a normalized document, empty lines included
///
/// An empty document has no lines.
pub fn lines(normalized: &str) -> Vec<&str> {
    if normalized.is_empty() {
        return Vec::new();
    }
    normalized.split('\n').collect()
}

fn is_heading(trimmed: &str) -> bool {
    trimmed.starts_with('[') && trimmed.ends_with(']')
}

/// Split a song sheet into regions using the default `[Order]` marker
pub fn split_regions(text: &str) -> SongSheetRegions {
    split_regions_with_marker(text, DEFAULT_ORDER_MARKER)
}

/// Split a song sheet into regions
///
/// The marker line opens the order section (and is kept in it); the next
/// bracketed heading closes it and starts the after-order region. Seeing
/// the marker again re-opens the order section.
pub fn split_regions_with_marker(text: &str, order_marker: &str) -> SongSheetRegions {
    let normalized = normalize(text);
    let mut regions = SongSheetRegions::new();
    let mut mode = Region::BeforeOrder;

    for line in lines(&normalized) {
        let trimmed = line.trim();

        if trimmed == order_marker {
            mode = Region::OrderSection;
            regions.push(Region::OrderSection, line);
            continue;
        }

        if mode == Region::OrderSection && is_heading(trimmed) {
            mode = Region::AfterOrder;
        }

        regions.push(mode, line);
    }

    log::debug!(
        "Split song sheet: {} before order, {} in order section, {} after order",
        regions.before_order.len(),
        regions.order_section.len(),
        regions.after_order.len()
    );
    log::trace!("Before order:\n{}", regions.block(Region::BeforeOrder));
    log::trace!("Order section:\n{}", regions.block(Region::OrderSection));
    log::trace!("After order:\n{}", regions.block(Region::AfterOrder));

    regions
}
