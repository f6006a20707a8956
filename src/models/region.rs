//! Song sheet regions
//!
//! A song sheet is partitioned around its `[Order]` marker into the part
//! before the marker, the order section itself, and everything after the
//! next bracketed heading.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    BeforeOrder,
    OrderSection,
    AfterOrder,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::BeforeOrder, Region::OrderSection, Region::AfterOrder];
}

/// The three regions of a split song sheet, lines kept in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongSheetRegions {
    pub before_order: Vec<String>,
    pub order_section: Vec<String>,
    pub after_order: Vec<String>,
}

impl SongSheetRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self, region: Region) -> &[String] {
        match region {
            Region::BeforeOrder => &self.before_order,
            Region::OrderSection => &self.order_section,
            Region::AfterOrder => &self.after_order,
        }
    }

    pub fn push(&mut self, region: Region, line: impl Into<String>) {
        let target = match region {
            Region::BeforeOrder => &mut self.before_order,
            Region::OrderSection => &mut self.order_section,
            Region::AfterOrder => &mut self.after_order,
        };
        target.push(line.into());
    }

    /// Lines of one region joined with `\n`
    pub fn block(&self, region: Region) -> String {
        self.lines(region).join("\n")
    }

    /// All lines, region by region
    ///
    /// Equals the normalized document for sheets with at most one
    /// `[Order]` marker.
    pub fn reconstruct(&self) -> Vec<String> {
        Region::ALL
            .iter()
            .flat_map(|&region| self.lines(region).iter().cloned())
            .collect()
    }

    pub fn line_count(&self) -> usize {
        self.before_order.len() + self.order_section.len() + self.after_order.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_block() {
        let mut regions = SongSheetRegions::new();
        regions.push(Region::BeforeOrder, "C G");
        regions.push(Region::BeforeOrder, "");
        regions.push(Region::OrderSection, "[Order]");

        assert_eq!(regions.block(Region::BeforeOrder), "C G\n");
        assert_eq!(regions.block(Region::OrderSection), "[Order]");
        assert_eq!(regions.block(Region::AfterOrder), "");
        assert_eq!(regions.line_count(), 3);
    }

    #[test]
    fn test_reconstruct_in_region_order() {
        let mut regions = SongSheetRegions::new();
        regions.push(Region::AfterOrder, "c");
        regions.push(Region::BeforeOrder, "a");
        regions.push(Region::OrderSection, "b");

        assert_eq!(regions.reconstruct(), vec!["a", "b", "c"]);
    }
}
