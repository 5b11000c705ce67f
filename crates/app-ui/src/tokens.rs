//! Design tokens for Bookworm

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
pub mod spacing {
    /// 10px - Default gap between rating row elements
    pub const SPACE_RATING: f32 = 10.0;
}
