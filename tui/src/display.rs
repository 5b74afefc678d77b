//! Display State
//!
//! Render model derived from `StudioMessage`s. The App applies every
//! message it drains to this state and renders from it; nothing here talks
//! to the Studio or the provider.
//!
//! Copy confirmation flashes live here as per-item timestamps. Each flash
//! reverts independently once its 2-second window passes; expiry is checked
//! against a caller-supplied instant so the behavior is a pure function of
//! time.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tubesmith_core::{StudioMessage, StudioPhase, ThumbnailSet, VideoContent};

/// How long a copy confirmation stays visible
pub const COPY_FLASH: Duration = Duration::from_millis(2000);

/// A copyable item in the results view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    /// One of the generated titles
    Title(usize),
    /// The description block
    Description,
    /// The tag list (joined with commas)
    Tags,
    /// The keyword analysis block
    KeywordAnalysis,
}

impl CopyTarget {
    /// All targets for the given content, in display order
    pub fn list(content: &VideoContent) -> Vec<CopyTarget> {
        let mut targets: Vec<CopyTarget> = (0..content.titles.len()).map(CopyTarget::Title).collect();
        targets.push(CopyTarget::KeywordAnalysis);
        targets.push(CopyTarget::Description);
        targets.push(CopyTarget::Tags);
        targets
    }

    /// The clipboard text for this target
    pub fn text(self, content: &VideoContent) -> String {
        match self {
            CopyTarget::Title(i) => content.titles.get(i).cloned().unwrap_or_default(),
            CopyTarget::Description => content.description.clone(),
            CopyTarget::Tags => content.tags.join(", "),
            CopyTarget::KeywordAnalysis => content.keyword_analysis.clone(),
        }
    }
}

/// State the TUI renders from
pub struct DisplayState {
    /// Current Studio phase
    pub phase: StudioPhase,
    /// Generated content, when Displaying
    pub content: Option<VideoContent>,
    /// Generated thumbnails, when Displaying
    pub thumbnails: Option<ThumbnailSet>,
    /// Inline validation message for the input field
    pub validation: Option<String>,
    /// Error message from a failed batch
    pub error: Option<String>,
    /// One-line status notice (e.g. a saved thumbnail path)
    pub notice: Option<String>,
    /// Filenames already saved this cycle, by thumbnail index
    pub saved: HashMap<usize, String>,
    /// Active copy confirmation flashes
    copied: HashMap<CopyTarget, Instant>,
    /// Frame counter for the loading spinner
    spinner_frame: usize,
}

impl DisplayState {
    /// Create an empty display state
    pub fn new() -> Self {
        Self {
            phase: StudioPhase::Idle,
            content: None,
            thumbnails: None,
            validation: None,
            error: None,
            notice: None,
            saved: HashMap::new(),
            copied: HashMap::new(),
            spinner_frame: 0,
        }
    }

    /// Apply one message from the Studio
    pub fn apply(&mut self, message: StudioMessage) {
        match message {
            StudioMessage::PhaseChanged(phase) => {
                if phase == StudioPhase::Loading {
                    // New cycle: everything from the previous one goes
                    self.content = None;
                    self.thumbnails = None;
                    self.error = None;
                    self.validation = None;
                    self.notice = None;
                    self.saved.clear();
                    self.copied.clear();
                }
                self.phase = phase;
            }
            StudioMessage::ValidationFailed { message } => {
                self.validation = Some(message);
            }
            StudioMessage::ResultsReady {
                content,
                thumbnails,
            } => {
                self.content = Some(content);
                self.thumbnails = Some(thumbnails);
            }
            StudioMessage::GenerationFailed { message } => {
                self.error = Some(message);
            }
        }
    }

    /// Record a copy confirmation for `target` at `now`
    pub fn mark_copied(&mut self, target: CopyTarget, now: Instant) {
        self.copied.insert(target, now);
    }

    /// Whether `target`'s confirmation flash is still visible at `now`
    pub fn is_copied(&self, target: CopyTarget, now: Instant) -> bool {
        self.copied
            .get(&target)
            .is_some_and(|at| now.duration_since(*at) < COPY_FLASH)
    }

    /// Drop expired confirmation flashes
    pub fn prune_copied(&mut self, now: Instant) {
        self.copied
            .retain(|_, at| now.duration_since(*at) < COPY_FLASH);
    }

    /// Advance the loading spinner one frame
    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Current spinner glyph
    pub fn spinner(&self) -> char {
        const FRAMES: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];
        FRAMES[self.spinner_frame % FRAMES.len()]
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_content() -> VideoContent {
        VideoContent {
            titles: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            description: "desc #x".to_string(),
            tags: vec!["t1".to_string(), "t2".to_string()],
            seo_score: 70,
            score_justification: "fine".to_string(),
            keyword_analysis: "ok".to_string(),
        }
    }

    #[test]
    fn copy_flash_reverts_after_exactly_two_seconds() {
        let mut state = DisplayState::new();
        let t0 = Instant::now();

        state.mark_copied(CopyTarget::Description, t0);
        assert!(state.is_copied(CopyTarget::Description, t0));
        assert!(state.is_copied(
            CopyTarget::Description,
            t0 + Duration::from_millis(1999)
        ));
        assert!(!state.is_copied(
            CopyTarget::Description,
            t0 + Duration::from_millis(2000)
        ));
    }

    #[test]
    fn copy_flashes_are_independent_per_item() {
        let mut state = DisplayState::new();
        let t0 = Instant::now();

        state.mark_copied(CopyTarget::Title(0), t0);
        state.mark_copied(CopyTarget::Title(1), t0 + Duration::from_millis(1500));

        let t = t0 + Duration::from_millis(2100);
        assert!(!state.is_copied(CopyTarget::Title(0), t));
        assert!(state.is_copied(CopyTarget::Title(1), t));

        state.prune_copied(t);
        assert!(state.is_copied(CopyTarget::Title(1), t));
        assert!(!state.is_copied(CopyTarget::Title(0), t));
    }

    #[test]
    fn loading_clears_previous_cycle() {
        let mut state = DisplayState::new();
        state.apply(StudioMessage::GenerationFailed {
            message: "nope".to_string(),
        });
        state.apply(StudioMessage::PhaseChanged(StudioPhase::Failed));
        assert_eq!(state.error.as_deref(), Some("nope"));

        state.saved.insert(0, "thumbnail-x-1.png".to_string());
        state.mark_copied(CopyTarget::Tags, Instant::now());

        state.apply(StudioMessage::PhaseChanged(StudioPhase::Loading));
        assert_eq!(state.phase, StudioPhase::Loading);
        assert!(state.error.is_none());
        assert!(state.content.is_none());
        assert!(state.thumbnails.is_none());
        assert!(state.saved.is_empty());
        assert!(!state.is_copied(CopyTarget::Tags, Instant::now()));
    }

    #[test]
    fn copy_targets_follow_display_order() {
        let content = sample_content();
        let targets = CopyTarget::list(&content);
        assert_eq!(
            targets,
            vec![
                CopyTarget::Title(0),
                CopyTarget::Title(1),
                CopyTarget::Title(2),
                CopyTarget::KeywordAnalysis,
                CopyTarget::Description,
                CopyTarget::Tags,
            ]
        );
        assert_eq!(CopyTarget::Tags.text(&content), "t1, t2");
        assert_eq!(CopyTarget::Title(1).text(&content), "b");
    }
}
