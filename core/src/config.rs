//! Studio Configuration
//!
//! Environment-derived configuration for the Studio and provider client.
//!
//! The provider credential is read from the environment exactly once, at
//! startup, and handed to the provider at construction time. Nothing else in
//! the crate reads ambient process state, which keeps tests free to
//! substitute fakes without touching the environment.
//!
//! # Environment Variables
//!
//! - `GEMINI_API_KEY` (or legacy `API_KEY`): required provider credential
//! - `TUBESMITH_TEXT_MODEL`: text model override (default `gemini-2.5-flash`)
//! - `TUBESMITH_IMAGE_MODEL`: image model override
//!   (default `imagen-4.0-generate-001`)

use std::time::Duration;

use thiserror::Error;

/// Default text-generation model
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Default image-generation model
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

/// Cosmetic pause between a successful generation and the results display
pub const INTERSTITIAL_DURATION: Duration = Duration::from_millis(2500);

/// Errors that can occur when loading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No provider credential in the environment; the app cannot function
    #[error("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
}

/// Studio configuration
#[derive(Clone, Debug)]
pub struct StudioConfig {
    /// Provider API key
    pub api_key: String,
    /// Model used for text generation
    pub text_model: String,
    /// Model used for thumbnail generation
    pub image_model: String,
    /// Duration of the interstitial pause before results are shown
    pub interstitial: Duration,
}

impl StudioConfig {
    /// Create a configuration with the given credential and default models
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            interstitial: INTERSTITIAL_DURATION,
        }
    }

    /// Create configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when neither `GEMINI_API_KEY`
    /// nor `API_KEY` is set. This is a fatal startup condition.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup
    ///
    /// Exists so tests can exercise the resolution rules without mutating
    /// process-wide environment state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when the lookup yields no
    /// credential.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("API_KEY"))
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            text_model: lookup("TUBESMITH_TEXT_MODEL")
                .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            image_model: lookup("TUBESMITH_IMAGE_MODEL")
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            interstitial: INTERSTITIAL_DURATION,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn missing_key_is_fatal() {
        let lookup = lookup_from(&[]);
        assert_eq!(
            StudioConfig::from_lookup(&lookup).unwrap_err(),
            ConfigError::MissingApiKey
        );
    }

    #[test]
    fn empty_key_is_fatal() {
        let lookup = lookup_from(&[("GEMINI_API_KEY", "")]);
        assert_eq!(
            StudioConfig::from_lookup(&lookup).unwrap_err(),
            ConfigError::MissingApiKey
        );
    }

    #[test]
    fn legacy_api_key_accepted() {
        let lookup = lookup_from(&[("API_KEY", "k-legacy")]);
        let config = StudioConfig::from_lookup(&lookup).unwrap();
        assert_eq!(config.api_key, "k-legacy");
        assert_eq!(config.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
    }

    #[test]
    fn model_overrides_honored() {
        let lookup = lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("TUBESMITH_TEXT_MODEL", "gemini-2.5-pro"),
            ("TUBESMITH_IMAGE_MODEL", "imagen-next"),
        ]);
        let config = StudioConfig::from_lookup(&lookup).unwrap();
        assert_eq!(config.text_model, "gemini-2.5-pro");
        assert_eq!(config.image_model, "imagen-next");
        assert_eq!(config.interstitial, INTERSTITIAL_DURATION);
    }
}
