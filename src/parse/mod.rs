//! Parsing module for song sheets
//!
//! This module turns raw song sheet text into normalized lines and
//! splits them into regions around the order marker.

pub mod document;

// Re-export commonly used functions
pub use document::{lines, normalize, split_regions, split_regions_with_marker};
