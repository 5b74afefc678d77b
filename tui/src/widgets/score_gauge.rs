//! Score Gauge Widget
//!
//! Renders the 0-100 SEO score as a proportional bar with three-tier color
//! banding. Band selection is a pure function of the score so the
//! thresholds are testable without a terminal.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::theme::{OFF_WHITE, SCORE_HIGH, SCORE_LOW, SCORE_MEDIUM};

/// Three-tier color banding for a score
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    /// score >= 75
    High,
    /// 40 <= score < 75
    Medium,
    /// score < 40
    Low,
}

impl ScoreBand {
    /// Band for a score in 0-100
    pub fn for_score(score: u8) -> Self {
        if score >= 75 {
            ScoreBand::High
        } else if score >= 40 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    /// Color for this band
    pub fn color(self) -> Color {
        match self {
            ScoreBand::High => SCORE_HIGH,
            ScoreBand::Medium => SCORE_MEDIUM,
            ScoreBand::Low => SCORE_LOW,
        }
    }
}

/// Proportional score bar with a numeric readout
pub struct ScoreGauge {
    score: u8,
}

impl ScoreGauge {
    /// Create a gauge for a score in 0-100
    pub fn new(score: u8) -> Self {
        Self {
            score: score.min(100),
        }
    }

    /// Bar string for the given width
    fn bar(&self, width: usize) -> String {
        let filled = (usize::from(self.score) * width) / 100;
        let empty = width.saturating_sub(filled);
        format!("{}{}", "█".repeat(filled), "░".repeat(empty))
    }
}

impl Widget for ScoreGauge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let band = ScoreBand::for_score(self.score);
        let label = format!("Overall SEO Score: {}/100", self.score);
        buf.set_string(area.x, area.y, &label, Style::default().fg(OFF_WHITE));

        if area.height > 1 {
            let bar = self.bar(area.width as usize);
            buf.set_string(
                area.x,
                area.y + 1,
                &bar,
                Style::default().fg(band.color()),
            );
        }
    }
}
