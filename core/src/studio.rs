//! Studio - The Orchestration Core
//!
//! The Studio owns topic intake, the generation fan-out, and the linear UI
//! state machine (Idle → Loading → Interstitial → Displaying / Failed).
//!
//! # Design Philosophy
//!
//! The Studio is UI-agnostic. It doesn't know or care whether it's talking
//! to a TUI, a web surface, or a test harness. It communicates through:
//! - `StudioMessage`: updates sent TO the UI surface
//! - `SurfaceEvent`: events received FROM the UI surface
//!
//! # Concurrency
//!
//! A submission spawns one task that runs the four provider calls (one text,
//! three images) under `try_join!`. The first failure short-circuits the
//! join and drops the sibling futures, so a completed thumbnail is never
//! shown when another request fails. The joined outcome comes back over a
//! oneshot channel that [`Studio::poll_generation`] drains on the surface's
//! event loop; the Studio itself never blocks.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;

use crate::config::StudioConfig;
use crate::content::{Thumbnail, ThumbnailSet, Topic, VideoContent};
use crate::error::GenerationError;
use crate::events::SurfaceEvent;
use crate::messages::{StudioMessage, StudioPhase};
use crate::prompts::ThumbnailStyle;
use crate::provider::{ImageGenerator, TextGenerator};

/// Outcome of one generation batch
type BatchOutcome = Result<(VideoContent, ThumbnailSet), GenerationError>;

/// The Studio - headless orchestration core
pub struct Studio<T, I> {
    /// Configuration
    config: StudioConfig,
    /// Text-generation provider
    text: Arc<T>,
    /// Image-generation provider
    images: Arc<I>,
    /// Current phase of the state machine
    phase: StudioPhase,
    /// Topic of the current/last batch
    topic: Option<Topic>,
    /// Result of the last successful batch
    content: Option<VideoContent>,
    /// Thumbnails of the last successful batch
    thumbnails: Option<ThumbnailSet>,
    /// Error message of the last failed batch
    error: Option<String>,
    /// Outcome channel for the in-flight batch
    pending: Option<oneshot::Receiver<BatchOutcome>>,
    /// When the interstitial pause ends
    interstitial_until: Option<Instant>,
    /// Channel to send messages to the UI surface
    tx: mpsc::Sender<StudioMessage>,
}

impl<T, I> Studio<T, I>
where
    T: TextGenerator + 'static,
    I: ImageGenerator + 'static,
{
    /// Create a new Studio with the given providers
    pub fn new(text: T, images: I, config: StudioConfig, tx: mpsc::Sender<StudioMessage>) -> Self {
        Self {
            config,
            text: Arc::new(text),
            images: Arc::new(images),
            phase: StudioPhase::Idle,
            topic: None,
            content: None,
            thumbnails: None,
            error: None,
            pending: None,
            interstitial_until: None,
            tx,
        }
    }

    /// Get the current phase
    pub fn phase(&self) -> StudioPhase {
        self.phase
    }

    /// Topic of the current/last batch
    pub fn topic(&self) -> Option<&Topic> {
        self.topic.as_ref()
    }

    /// Content of the last successful batch, if any
    pub fn content(&self) -> Option<&VideoContent> {
        self.content.as_ref()
    }

    /// Thumbnails of the last successful batch, if any
    pub fn thumbnails(&self) -> Option<&ThumbnailSet> {
        self.thumbnails.as_ref()
    }

    /// Error message of the last failed batch, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Handle an event from a UI surface
    pub async fn handle_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::TopicSubmitted { topic } => self.submit(&topic).await,
            SurfaceEvent::QuitRequested => {
                tracing::debug!("quit requested");
            }
        }
    }

    /// Poll the in-flight batch and the interstitial timer
    ///
    /// Must be called regularly from the surface's event loop. Returns true
    /// while there is outstanding work (a batch in flight or an interstitial
    /// pending).
    pub async fn poll_generation(&mut self) -> bool {
        if self.phase == StudioPhase::Interstitial {
            if let Some(deadline) = self.interstitial_until {
                if Instant::now() >= deadline {
                    self.interstitial_until = None;
                    self.set_phase(StudioPhase::Displaying).await;
                    return false;
                }
            }
            return true;
        }

        let Some(rx) = self.pending.as_mut() else {
            return false;
        };

        match rx.try_recv() {
            Ok(Ok((content, thumbnails))) => {
                self.pending = None;
                self.content = Some(content.clone());
                self.thumbnails = Some(thumbnails.clone());
                self.send(StudioMessage::ResultsReady {
                    content,
                    thumbnails,
                })
                .await;
                self.interstitial_until = Some(Instant::now() + self.config.interstitial);
                self.set_phase(StudioPhase::Interstitial).await;
                true
            }
            Ok(Err(err)) => {
                self.pending = None;
                self.fail(err.to_string()).await;
                false
            }
            Err(oneshot::error::TryRecvError::Empty) => true,
            Err(oneshot::error::TryRecvError::Closed) => {
                // Batch task died without reporting; treat as a failure
                self.pending = None;
                self.fail("An unknown error occurred.".to_string()).await;
                false
            }
        }
    }

    /// Validate a submission and start the generation batch
    async fn submit(&mut self, raw: &str) {
        // No cancellation once a batch is in flight; ignore re-submissions
        // until it settles.
        if matches!(self.phase, StudioPhase::Loading | StudioPhase::Interstitial) {
            tracing::debug!("submission ignored: batch in flight");
            return;
        }

        let topic = match Topic::parse(raw) {
            Ok(topic) => topic,
            Err(err) => {
                self.send(StudioMessage::ValidationFailed {
                    message: err.to_string(),
                })
                .await;
                return;
            }
        };

        // A new cycle clears everything from the previous one
        self.content = None;
        self.thumbnails = None;
        self.error = None;
        self.topic = Some(topic.clone());

        self.set_phase(StudioPhase::Loading).await;

        let (tx, rx) = oneshot::channel();
        let text = Arc::clone(&self.text);
        let images = Arc::clone(&self.images);
        tokio::spawn(async move {
            let outcome = run_batch(&*text, &*images, &topic).await;
            let _ = tx.send(outcome);
        });
        self.pending = Some(rx);
    }

    /// Transition to Failed with a user-facing message
    async fn fail(&mut self, message: String) {
        tracing::warn!(%message, "generation batch failed");
        self.error = Some(message.clone());
        self.send(StudioMessage::GenerationFailed { message }).await;
        self.set_phase(StudioPhase::Failed).await;
    }

    /// Set phase and notify the surface
    async fn set_phase(&mut self, phase: StudioPhase) {
        if self.phase != phase {
            tracing::debug!(?phase, "phase transition");
            self.phase = phase;
            self.send(StudioMessage::PhaseChanged(phase)).await;
        }
    }

    /// Send a message to the surface, ignoring a disconnected receiver
    async fn send(&self, message: StudioMessage) {
        let _ = self.tx.send(message).await;
    }
}

/// Run the four-call fan-out for one topic
///
/// All-or-nothing join: the first error aborts the batch and the remaining
/// futures are dropped. On success the thumbnails come back in fixed style
/// order regardless of completion order.
async fn run_batch<T, I>(text: &T, images: &I, topic: &Topic) -> BatchOutcome
where
    T: TextGenerator,
    I: ImageGenerator,
{
    let (content, clickbait, cinematic, graphic) = tokio::try_join!(
        async {
            text.generate_content(topic)
                .await
                .map_err(GenerationError::Text)
        },
        thumbnail_call(images, ThumbnailStyle::Clickbait, topic),
        thumbnail_call(images, ThumbnailStyle::Cinematic, topic),
        thumbnail_call(images, ThumbnailStyle::Graphic, topic),
    )?;

    Ok((content, ThumbnailSet::new(clickbait, cinematic, graphic)))
}

/// One thumbnail request for a fixed style
async fn thumbnail_call<I: ImageGenerator>(
    images: &I,
    style: ThumbnailStyle,
    topic: &Topic,
) -> Result<Thumbnail, GenerationError> {
    let prompt = style.prompt(topic.as_str());
    let png = images
        .generate_thumbnail(&prompt)
        .await
        .map_err(GenerationError::Thumbnail)?;
    Ok(Thumbnail::new(style, png))
}
