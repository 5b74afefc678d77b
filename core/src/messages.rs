//! Studio Messages
//!
//! Messages sent from the Studio to UI surfaces. Together with
//! [`SurfaceEvent`](crate::events::SurfaceEvent) these form the complete
//! protocol between orchestration and presentation.

use crate::content::{ThumbnailSet, VideoContent};

/// The Studio's linear UI state machine
///
/// Exactly one phase is active at a time, owned exclusively by the Studio.
/// Surfaces receive transitions via [`StudioMessage::PhaseChanged`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StudioPhase {
    /// Waiting for input
    #[default]
    Idle,
    /// The four-call generation batch is in flight
    Loading,
    /// Cosmetic pause after a successful batch; no work happens here
    Interstitial,
    /// Results are held and presented until the next submission
    Displaying,
    /// The batch failed; the error is presented until the next submission
    Failed,
}

/// Messages from the Studio to a UI surface
#[derive(Clone, Debug)]
pub enum StudioMessage {
    /// The state machine moved to a new phase
    PhaseChanged(StudioPhase),

    /// A submission was rejected before any provider contact
    ValidationFailed {
        /// Inline message for the user
        message: String,
    },

    /// The full batch completed; all six fields and all three thumbnails
    ResultsReady {
        /// Generated text content
        content: VideoContent,
        /// Generated thumbnails, in fixed style order
        thumbnails: ThumbnailSet,
    },

    /// The batch failed; partial successes were discarded
    GenerationFailed {
        /// Human-readable message for the user
        message: String,
    },
}
