//! Content Generation Providers
//!
//! Provider abstraction for text and image generation. The Studio depends
//! only on the capability traits in [`traits`], so tests can substitute
//! deterministic fakes without network access; [`gemini`] is the production
//! implementation.

pub mod gemini;
pub mod traits;

pub use gemini::GeminiProvider;
pub use traits::{ImageGenerator, TextGenerator};
