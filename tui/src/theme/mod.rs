//! Theme and Colors
//!
//! Tubesmith's palette: a deep navy canvas with an indigo accent and a
//! green call-to-action, plus the three score bands.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Primary accent - indigo
pub const INDIGO_ACCENT: Color = Color::Rgb(129, 140, 248);

/// Call-to-action green
pub const GREEN_CTA: Color = Color::Rgb(34, 197, 94);

/// Muted body text - gray blue
pub const GRAY_BLUE: Color = Color::Rgb(148, 163, 184);

/// Bright foreground
pub const OFF_WHITE: Color = Color::Rgb(241, 245, 249);

/// Dim/system text
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Error red
pub const ERROR_RED: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Score Bands
// ============================================================================

/// Top band (score >= 75)
pub const SCORE_HIGH: Color = Color::Rgb(34, 197, 94);

/// Middle band (40 <= score < 75)
pub const SCORE_MEDIUM: Color = Color::Rgb(250, 204, 21);

/// Bottom band (score < 40)
pub const SCORE_LOW: Color = Color::Rgb(239, 68, 68);
