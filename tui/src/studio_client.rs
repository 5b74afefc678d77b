//! Studio Client
//!
//! Thin wrapper around the Studio for TUI integration. The client embeds
//! the Studio directly (no network) and provides a convenient interface for
//! sending events and receiving messages.
//!
//! The TUI is a "thin client" - it doesn't contain any business logic. All
//! orchestration happens in the Studio. The TUI's job is:
//! 1. Convert terminal events to SurfaceEvents
//! 2. Send SurfaceEvents to the Studio
//! 3. Receive StudioMessages
//! 4. Render display state based on messages

use tokio::sync::mpsc;

use tubesmith_core::{
    GeminiProvider, Studio, StudioConfig, StudioMessage, StudioPhase, SurfaceEvent, Topic,
};

/// Client for communicating with the embedded Studio
pub struct StudioClient {
    /// The embedded Studio instance
    studio: Studio<GeminiProvider, GeminiProvider>,
    /// Receiver for messages from the Studio
    rx: mpsc::Receiver<StudioMessage>,
}

impl StudioClient {
    /// Create a new StudioClient with an embedded Studio
    pub fn new(config: StudioConfig) -> Self {
        // Channel for Studio -> TUI messages
        let (tx, rx) = mpsc::channel(64);

        // One Gemini client serves both capabilities
        let provider = GeminiProvider::from_config(&config);
        let studio = Studio::new(provider.clone(), provider, config, tx);

        Self { studio, rx }
    }

    /// Submit a topic to the Studio
    pub async fn submit_topic(&mut self, topic: String) {
        self.studio
            .handle_event(SurfaceEvent::TopicSubmitted { topic })
            .await;
    }

    /// Notify the Studio that the user wants to quit
    pub async fn request_quit(&mut self) {
        self.studio.handle_event(SurfaceEvent::QuitRequested).await;
    }

    /// Poll the in-flight batch (must be called regularly)
    pub async fn poll(&mut self) -> bool {
        self.studio.poll_generation().await
    }

    /// Receive all pending messages from the Studio (non-blocking)
    pub fn recv_all(&mut self) -> Vec<StudioMessage> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.rx.try_recv() {
            messages.push(msg);
        }
        messages
    }

    /// Get the current Studio phase
    pub fn phase(&self) -> StudioPhase {
        self.studio.phase()
    }

    /// Topic of the current/last batch
    pub fn topic(&self) -> Option<&Topic> {
        self.studio.topic()
    }
}
