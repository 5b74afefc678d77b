//! Provider Capability Traits
//!
//! Trait definitions for the two generation capabilities the Studio needs.
//! They are deliberately narrow: one call, one best-effort attempt, typed
//! failure. No retry, caching, or rate limiting lives at this seam.
//!
//! Splitting text and image generation into separate traits lets tests fake
//! each capability independently, and keeps a provider swap (or a mixed
//! deployment, text from one vendor and images from another) a local change.

use async_trait::async_trait;

use crate::content::{Topic, VideoContent};
use crate::error::ProviderError;

/// Text-generation capability
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate the six-field content entity for a topic
    ///
    /// One outbound call. The implementation must enforce the
    /// required-fields contract: a response missing any field is
    /// [`ProviderError::MalformedResponse`], never a partial entity.
    ///
    /// # Errors
    ///
    /// Any [`ProviderError`]; the caller decides how to surface it.
    async fn generate_content(&self, topic: &Topic) -> Result<VideoContent, ProviderError>;
}

/// Image-generation capability
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate a single 16:9 PNG for an image prompt
    ///
    /// One outbound call. Zero returned images is
    /// [`ProviderError::NoImage`].
    ///
    /// # Errors
    ///
    /// Any [`ProviderError`]; the caller decides how to surface it.
    async fn generate_thumbnail(&self, prompt: &str) -> Result<Vec<u8>, ProviderError>;
}
