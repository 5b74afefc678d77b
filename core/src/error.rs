//! Error Types
//!
//! Failure kinds for the generation pipeline. Provider-level errors describe
//! what went wrong on the wire; [`GenerationError`] wraps them with the
//! user-facing message the Studio surfaces, one per request kind.

use thiserror::Error;

/// Errors raised by a content provider call
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (connection, timeout, TLS, ...)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-success HTTP status
    #[error("provider returned {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// Response arrived but did not match the expected shape
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// Image endpoint returned zero images
    #[error("no image was generated")]
    NoImage,
}

/// A failed generation batch, carrying the message shown to the user
///
/// The fail-fast join maps whichever provider call failed first into one of
/// these; partial successes from sibling calls are discarded.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The text-generation call failed
    #[error("Failed to generate text content. Please try again.")]
    Text(#[source] ProviderError),

    /// A thumbnail-generation call failed
    #[error("Failed to generate thumbnail image. Please try again.")]
    Thumbnail(#[source] ProviderError),
}

/// A blank or whitespace-only topic submission
///
/// Surfaced inline before any provider contact.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("Please enter a video topic.")]
pub struct BlankTopic;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn user_facing_messages_are_stable() {
        let text = GenerationError::Text(ProviderError::MalformedResponse("x".into()));
        assert_eq!(
            text.to_string(),
            "Failed to generate text content. Please try again."
        );

        let thumb = GenerationError::Thumbnail(ProviderError::MalformedResponse("x".into()));
        assert_eq!(
            thumb.to_string(),
            "Failed to generate thumbnail image. Please try again."
        );

        assert_eq!(BlankTopic.to_string(), "Please enter a video topic.");
    }
}
