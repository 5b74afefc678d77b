//! Main Application
//!
//! The App manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, resize)
//! - StudioClient for orchestration
//! - DisplayState for rendering
//!
//! The App converts terminal events to SurfaceEvents, polls the embedded
//! Studio, applies StudioMessages to the DisplayState, and renders from it.
//! Results navigation is modal: Tab switches between the topic input and
//! the results list, where items can be copied and thumbnails saved.

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{Frame, Terminal};

use tubesmith_core::{download_filename, StudioConfig, StudioPhase, VideoContent};

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::display::{CopyTarget, DisplayState};
use crate::studio_client::StudioClient;
use crate::theme::{
    DIM_GRAY, ERROR_RED, GRAY_BLUE, GREEN_CTA, INDIGO_ACCENT, OFF_WHITE,
};
use crate::widgets::{ResultCard, ScoreGauge};

/// Frame tick interval (~20 FPS)
const TICK: Duration = Duration::from_millis(50);

/// Which pane receives keystrokes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Focus {
    /// Typing into the topic input
    Input,
    /// Navigating the results list
    Results,
}

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// Client for the embedded Studio
    studio: StudioClient,
    /// Display state derived from StudioMessages
    display: DisplayState,
    /// Topic input buffer
    input_buffer: String,
    /// Current keyboard focus
    focus: Focus,
    /// Selected index into the copy-target list
    selected: usize,
    /// System clipboard, opened lazily on first copy
    clipboard: Option<Box<dyn ClipboardSink>>,
}

impl App {
    /// Create a new App with the given configuration
    pub fn new(config: StudioConfig) -> Self {
        Self {
            running: true,
            studio: StudioClient::new(config),
            display: DisplayState::new(),
            input_buffer: String::new(),
            focus: Focus::Input,
            selected: 0,
            clipboard: None,
        }
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        terminal.draw(|frame| self.render_frame(frame))?;

        while self.running {
            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            // Only handle Press events (not Release or Repeat)
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key).await;
                            }
                            Event::Resize(..) => {}
                            _ => {}
                        }
                    }
                }

                _ = tokio::time::sleep(TICK) => {
                    self.tick().await;
                }
            }

            terminal.draw(|frame| self.render_frame(frame))?;
        }

        Ok(())
    }

    /// One frame of background work
    async fn tick(&mut self) {
        self.studio.poll().await;
        for message in self.studio.recv_all() {
            self.display.apply(message);
        }
        self.display.prune_copied(Instant::now());
        if self.display.phase == StudioPhase::Loading {
            self.display.tick_spinner();
        }

        // Keep the selection in bounds when a new result arrives
        if let Some(content) = &self.display.content {
            let count = CopyTarget::list(content).len();
            if self.selected >= count {
                self.selected = 0;
            }
        } else {
            self.selected = 0;
            self.focus = Focus::Input;
        }
    }

    /// Handle a key press
    async fn handle_key(&mut self, key: KeyEvent) {
        // Global shortcuts
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit().await;
            return;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key).await,
            Focus::Results => self.handle_results_key(key).await,
        }
    }

    /// Keys while the topic input has focus
    async fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.display.validation = None;
                self.studio.submit_topic(self.input_buffer.clone()).await;
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Tab => {
                if self.display.content.is_some() {
                    self.focus = Focus::Results;
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    /// Keys while the results list has focus
    async fn handle_results_key(&mut self, key: KeyEvent) {
        let Some(content) = self.display.content.clone() else {
            self.focus = Focus::Input;
            return;
        };
        let targets = CopyTarget::list(&content);

        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected + 1 < targets.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('c') => {
                if let Some(target) = targets.get(self.selected).copied() {
                    self.copy_target(target, &content);
                }
            }
            KeyCode::Char(d @ '1'..='3') => {
                let index = (d as usize) - ('1' as usize);
                self.save_thumbnail(index);
            }
            KeyCode::Tab | KeyCode::Esc | KeyCode::Char('i') => {
                self.focus = Focus::Input;
            }
            KeyCode::Char('q') => {
                self.quit().await;
            }
            _ => {}
        }
    }

    /// Copy one result item to the clipboard
    fn copy_target(&mut self, target: CopyTarget, content: &VideoContent) {
        if self.clipboard.is_none() {
            match SystemClipboard::new() {
                Ok(clipboard) => self.clipboard = Some(Box::new(clipboard)),
                Err(e) => {
                    tracing::warn!("clipboard unavailable: {e:#}");
                    self.display.notice = Some("Clipboard unavailable".to_string());
                    return;
                }
            }
        }

        let text = target.text(content);
        if let Some(clipboard) = self.clipboard.as_mut() {
            match clipboard.set_text(&text) {
                Ok(()) => self.display.mark_copied(target, Instant::now()),
                Err(e) => {
                    tracing::warn!("copy failed: {e:#}");
                    self.display.notice = Some("Copy failed".to_string());
                }
            }
        }
    }

    /// Save thumbnail `index` (0-2) next to the working directory
    fn save_thumbnail(&mut self, index: usize) {
        let Some(thumbnails) = &self.display.thumbnails else {
            return;
        };
        let Some(thumbnail) = thumbnails.get(index) else {
            return;
        };
        let Some(topic) = self.studio.topic() else {
            return;
        };

        match write_thumbnail(Path::new("."), topic.as_str(), index, &thumbnail.png) {
            Ok(filename) => {
                self.display.notice = Some(format!("Saved {filename}"));
                self.display.saved.insert(index, filename);
            }
            Err(e) => {
                tracing::warn!("thumbnail save failed: {e:#}");
                self.display.notice = Some("Save failed".to_string());
            }
        }
    }

    /// Quit the app
    async fn quit(&mut self) {
        self.studio.request_quit().await;
        self.running = false;
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn render_frame(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);
        self.render_input(frame, chunks[1]);
        self.render_body(frame, chunks[2]);
        self.render_status(frame, chunks[3]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new("Tubesmith — YouTube SEO Content Generator")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(INDIGO_ACCENT)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(header, area);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focus == Focus::Input {
            Style::default().fg(INDIGO_ACCENT)
        } else {
            Style::default().fg(GRAY_BLUE)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Topic ");

        if let Some(validation) = &self.display.validation {
            block = block.title_bottom(
                Line::from(format!(" {validation} ")).style(Style::default().fg(ERROR_RED)),
            );
        }

        let mut text = self.input_buffer.clone();
        if self.focus == Focus::Input {
            text.push('█');
        }
        if self.input_buffer.is_empty() && self.focus != Focus::Input {
            text = "e.g. 'How to bake a sourdough bread'".to_string();
        }

        let input = Paragraph::new(text)
            .style(Style::default().fg(OFF_WHITE))
            .block(block);
        frame.render_widget(input, area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        match self.display.phase {
            StudioPhase::Idle => {
                let hint = Paragraph::new(
                    "Enter your video topic and let AI craft the perfect titles, description, \
                     tags, and three unique thumbnails.",
                )
                .alignment(Alignment::Center)
                .style(Style::default().fg(GRAY_BLUE));
                frame.render_widget(hint, centered_line(area));
            }
            StudioPhase::Loading => {
                let spinner = Paragraph::new(format!(
                    "{} Generating content, please wait...",
                    self.display.spinner()
                ))
                .alignment(Alignment::Center)
                .style(Style::default().fg(INDIGO_ACCENT));
                frame.render_widget(spinner, centered_line(area));
            }
            StudioPhase::Interstitial => {
                let banner = Paragraph::new("✨ Polishing your results ✨")
                    .alignment(Alignment::Center)
                    .style(
                        Style::default()
                            .fg(INDIGO_ACCENT)
                            .add_modifier(Modifier::BOLD),
                    );
                frame.render_widget(banner, centered_line(area));
            }
            StudioPhase::Failed => {
                let message = self
                    .display
                    .error
                    .as_deref()
                    .unwrap_or("An unknown error occurred.");
                let error = Paragraph::new(message)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(ERROR_RED));
                frame.render_widget(error, centered_line(area));
            }
            StudioPhase::Displaying => self.render_results(frame, area),
        }
    }

    #[allow(clippy::too_many_lines)]
    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let (Some(content), Some(thumbnails)) =
            (&self.display.content, &self.display.thumbnails)
        else {
            return;
        };
        let now = Instant::now();
        let title_count = content.titles.len();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(title_count as u16 + 2),
                Constraint::Length(4),
                Constraint::Length(6),
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Min(0),
            ])
            .split(area);

        // Score row: justification beside the gauge
        let score_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(32)])
            .split(chunks[0]);
        frame.render_widget(
            ResultCard::new("Score Justification", &content.score_justification),
            score_row[0],
        );
        let gauge_area = Rect {
            x: score_row[1].x + 1,
            y: score_row[1].y + 1,
            width: score_row[1].width.saturating_sub(2),
            height: score_row[1].height.saturating_sub(1),
        };
        frame.render_widget(ScoreGauge::new(content.seo_score), gauge_area);

        // Title options, one selectable row each
        let mut title_lines = Vec::with_capacity(title_count);
        for (i, title) in content.titles.iter().enumerate() {
            let target = CopyTarget::Title(i);
            let is_selected = self.focus == Focus::Results && self.selected_target() == Some(target);
            let marker = if is_selected { "▶ " } else { "  " };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(INDIGO_ACCENT)),
                Span::styled(
                    format!("{}. {title}", i + 1),
                    if is_selected {
                        Style::default().fg(OFF_WHITE)
                    } else {
                        Style::default().fg(GRAY_BLUE)
                    },
                ),
            ];
            if self.display.is_copied(target, now) {
                spans.push(Span::styled("  ✓ copied", Style::default().fg(GREEN_CTA)));
            }
            title_lines.push(Line::from(spans));
        }
        let titles = Paragraph::new(title_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GRAY_BLUE))
                .title(" Generated Title Options ")
                .title_style(Style::default().fg(INDIGO_ACCENT)),
        );
        frame.render_widget(titles, chunks[1]);

        // Remaining copyable cards
        let cards = [
            (
                "Keyword Analysis",
                CopyTarget::KeywordAnalysis,
                content.keyword_analysis.as_str(),
                chunks[2],
            ),
            (
                "Generated Description",
                CopyTarget::Description,
                content.description.as_str(),
                chunks[3],
            ),
        ];
        for (title, target, body, chunk) in cards {
            frame.render_widget(
                ResultCard::new(title, body)
                    .selected(
                        self.focus == Focus::Results && self.selected_target() == Some(target),
                    )
                    .copied(self.display.is_copied(target, now)),
                chunk,
            );
        }

        let tags_text = content.tags.join(", ");
        frame.render_widget(
            ResultCard::new("Generated Tags", &tags_text)
                .selected(
                    self.focus == Focus::Results
                        && self.selected_target() == Some(CopyTarget::Tags),
                )
                .copied(self.display.is_copied(CopyTarget::Tags, now)),
            chunks[4],
        );

        // Thumbnail panel with save shortcuts
        let mut thumb_lines = Vec::with_capacity(3);
        for (i, thumbnail) in thumbnails.iter().enumerate() {
            let size_kb = thumbnail.png.len() as f64 / 1024.0;
            let mut spans = vec![Span::styled(
                format!(
                    "{}. {:<10} {size_kb:>8.1} KB   press {} to save",
                    i + 1,
                    thumbnail.style.label(),
                    i + 1
                ),
                Style::default().fg(GRAY_BLUE),
            )];
            if let Some(filename) = self.display.saved.get(&i) {
                spans.push(Span::styled(
                    format!("   ✓ {filename}"),
                    Style::default().fg(GREEN_CTA),
                ));
            }
            thumb_lines.push(Line::from(spans));
        }
        let thumbs = Paragraph::new(thumb_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GRAY_BLUE))
                .title(" AI-Generated Thumbnails ")
                .title_style(Style::default().fg(INDIGO_ACCENT)),
        );
        frame.render_widget(thumbs, chunks[5]);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let keys = match self.focus {
            Focus::Input => "Enter generate · Tab results · Ctrl+C quit",
            Focus::Results => "↑/↓ select · Enter/c copy · 1-3 save thumbnail · Tab input · q quit",
        };
        let mut spans = vec![Span::styled(keys, Style::default().fg(DIM_GRAY))];
        if let Some(notice) = &self.display.notice {
            spans.push(Span::styled(
                format!("   {notice}"),
                Style::default().fg(GREEN_CTA),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// The copy target currently selected, if results are present
    fn selected_target(&self) -> Option<CopyTarget> {
        let content = self.display.content.as_ref()?;
        CopyTarget::list(content).get(self.selected).copied()
    }
}

/// Vertically center a single content line within `area`
fn centered_line(area: Rect) -> Rect {
    let y = area.y + area.height / 3;
    Rect {
        x: area.x,
        y,
        width: area.width,
        height: 1.min(area.height),
    }
}

/// Write one thumbnail PNG into `dir`, returning the filename used
fn write_thumbnail(
    dir: &Path,
    topic: &str,
    index: usize,
    png: &[u8],
) -> anyhow::Result<String> {
    let filename = download_filename(topic, index);
    std::fs::write(dir.join(&filename), png)?;
    Ok(filename)
}
