//! Surface Events
//!
//! Events sent from UI surfaces to the Studio. Surfaces are "dumb"
//! renderers: they report what the user did and let the Studio decide how
//! to respond.

/// Events from a UI surface to the Studio
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The user submitted a topic (click or Enter)
    ///
    /// Raw, untrimmed input; validation belongs to the Studio.
    TopicSubmitted {
        /// Raw topic input
        topic: String,
    },

    /// The user asked to quit
    QuitRequested,
}
