//! Renderers module for formatted song sheets
//!
//! This module contains the layout logic that turns transposed song
//! sheet regions into the two-column text consumed by the UI.

pub mod columns;

// Re-export commonly used types
pub use columns::TwoColumnLayout;
