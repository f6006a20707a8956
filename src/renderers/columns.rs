//! Two-column song sheet layout
//!
//! The formatted song sheet is a single string with the left and right
//! columns separated by ` || `. The left column holds the chord chart
//! before the order section; the right column holds the order section and
//! whatever follows it, separated by a blank line.

use serde::{Deserialize, Serialize};

use crate::models::DEFAULT_COLUMN_SEPARATOR;

const SECTION_GAP: &str = "\n\n";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoColumnLayout {
    pub left: String,
    pub right: String,
}

impl TwoColumnLayout {
    /// Build the layout from the (already transposed) region blocks
    ///
    /// Blocks that are blank are left out of the right column.
    pub fn from_blocks(before_order: &str, order_section: &str, after_order: &str) -> Self {
        let right = [order_section, after_order]
            .into_iter()
            .filter(|block| !block.trim().is_empty())
            .collect::<Vec<_>>()
            .join(SECTION_GAP);

        Self {
            left: before_order.trim().to_string(),
            right,
        }
    }

    /// Join the columns with the separator, which is always emitted
    pub fn render(&self, separator: &str) -> String {
        format!("{}{}{}", self.left, separator, self.right)
    }

    /// Split formatted output back into its columns at the first separator
    ///
    /// Only unambiguous when the left column does not end in `|`: a
    /// trailing `||` bar line overlaps the default separator.
    pub fn parse(formatted: &str, separator: &str) -> Option<Self> {
        let (left, right) = formatted.split_once(separator)?;
        Some(Self {
            left: left.to_string(),
            right: right.to_string(),
        })
    }
}

impl std::fmt::Display for TwoColumnLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(DEFAULT_COLUMN_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_blocks_present() {
        let layout = TwoColumnLayout::from_blocks("\nD A\n", "[Order]\nV", "[Bridge]\nE");
        assert_eq!(layout.left, "D A");
        assert_eq!(layout.right, "[Order]\nV\n\n[Bridge]\nE");
        assert_eq!(layout.to_string(), "D A || [Order]\nV\n\n[Bridge]\nE");
    }

    #[test]
    fn test_blank_blocks_omitted() {
        let layout = TwoColumnLayout::from_blocks("C", "[Order]\nV", "");
        assert_eq!(layout.right, "[Order]\nV");

        let layout = TwoColumnLayout::from_blocks("C", "  \n ", "[Tag]");
        assert_eq!(layout.right, "[Tag]");
    }

    #[test]
    fn test_separator_always_present() {
        assert_eq!(TwoColumnLayout::from_blocks("", "", "").render(" || "), " || ");
        assert_eq!(TwoColumnLayout::from_blocks("C", "", "").render(" || "), "C || ");
    }

    #[test]
    fn test_parse_splits_on_first_separator() {
        let layout = TwoColumnLayout::parse("C G || [Order]\nV", " || ").unwrap();
        assert_eq!(layout.left, "C G");
        assert_eq!(layout.right, "[Order]\nV");

        assert_eq!(TwoColumnLayout::parse("no separator", " || "), None);
    }
}
