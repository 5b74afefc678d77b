//! Widgets
//!
//! Custom ratatui widgets for the results view.

pub mod result_panel;
pub mod score_gauge;

pub use result_panel::ResultCard;
pub use score_gauge::{ScoreBand, ScoreGauge};
