//! Result Card Widget
//!
//! A bordered, titled card for one result field. Cards mark the selected
//! item with an accent border and show a transient "copied" confirmation in
//! the title row.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Widget};
use textwrap::wrap;

use crate::theme::{GRAY_BLUE, GREEN_CTA, INDIGO_ACCENT};

/// A bordered card with a title and wrapped body text
pub struct ResultCard<'a> {
    title: &'a str,
    body: &'a str,
    selected: bool,
    copied: bool,
}

impl<'a> ResultCard<'a> {
    /// Create a card
    pub fn new(title: &'a str, body: &'a str) -> Self {
        Self {
            title,
            body,
            selected: false,
            copied: false,
        }
    }

    /// Highlight this card as the current selection
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the copy confirmation in the title row
    pub fn copied(mut self, copied: bool) -> Self {
        self.copied = copied;
        self
    }
}

impl Widget for ResultCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            Style::default().fg(INDIGO_ACCENT)
        } else {
            Style::default().fg(GRAY_BLUE)
        };

        let title = if self.copied {
            format!(" {} ✓ copied ", self.title)
        } else {
            format!(" {} ", self.title)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title)
            .title_style(if self.copied {
                Style::default().fg(GREEN_CTA)
            } else {
                Style::default().fg(INDIGO_ACCENT)
            });

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Wrap each logical line to the inner width and clip to height
        let wrapped: Vec<String> = self
            .body
            .lines()
            .flat_map(|line| {
                if line.is_empty() {
                    vec![String::new()]
                } else {
                    wrap(line, inner.width as usize)
                        .into_iter()
                        .map(|cow| cow.to_string())
                        .collect()
                }
            })
            .collect();

        for (i, line) in wrapped.iter().take(inner.height as usize).enumerate() {
            buf.set_string(
                inner.x,
                inner.y + i as u16,
                line,
                Style::default().fg(GRAY_BLUE),
            );
        }
    }
}
