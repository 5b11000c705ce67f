//! Color primitives for Bookworm
//!
//! Colors travel to the frontend as hex strings, so the UI layer never
//! needs to know how the host blends or draws them.

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGBA hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

// =============================================================================
// System Colors
// =============================================================================

/// Platform system colors the widgets fall back to
pub mod system {
    /// Neutral gray
    pub const GRAY: &str = "#8E8E93";

    /// Yellow
    pub const YELLOW: &str = "#FFCC00";
}
