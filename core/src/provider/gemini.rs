//! Gemini Provider Implementation
//!
//! Client for the Google Generative Language REST API.
//!
//! # Endpoints
//!
//! - `models/{model}:generateContent` - structured-output text generation
//! - `models/{model}:predict` - Imagen image synthesis
//!
//! Text requests pin a response schema so the model answers with exactly the
//! six fields of [`VideoContent`]; the JSON payload arrives as the text part
//! of the first candidate. Image requests ask for a single 16:9 PNG, which
//! arrives base64-encoded in the first prediction.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::traits::{ImageGenerator, TextGenerator};
use crate::config::StudioConfig;
use crate::content::{Topic, VideoContent};
use crate::error::ProviderError;
use crate::prompts::text_prompt;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API client
#[derive(Clone)]
pub struct GeminiProvider {
    /// API key, passed explicitly at construction
    api_key: String,
    /// Text-generation model identifier
    text_model: String,
    /// Image-generation model identifier
    image_model: String,
    /// API base URL (overridable for tests)
    base_url: String,
    /// HTTP client
    http_client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new provider client
    pub fn new(
        api_key: impl Into<String>,
        text_model: impl Into<String>,
        image_model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            text_model: text_model.into(),
            image_model: image_model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Create from `StudioConfig`
    #[must_use]
    pub fn from_config(config: &StudioConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            config.text_model.clone(),
            config.image_model.clone(),
        )
    }

    /// Override the API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Get generateContent endpoint URL
    fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.text_model)
    }

    /// Get predict endpoint URL
    fn predict_url(&self) -> String {
        format!("{}/models/{}:predict", self.base_url, self.image_model)
    }

    /// Response schema for the structured-output text request
    fn response_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "OBJECT",
            "properties": {
                "titles": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "An array of 3 catchy, SEO-friendly titles for the YouTube video."
                },
                "description": {
                    "type": "STRING",
                    "description": "A detailed, SEO-friendly description including hashtags."
                },
                "tags": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "An array of 10-15 relevant SEO tags."
                },
                "seoScore": {
                    "type": "INTEGER",
                    "description": "An integer SEO score from 0 to 100."
                },
                "scoreJustification": {
                    "type": "STRING",
                    "description": "A brief justification for the SEO score."
                },
                "keywordAnalysis": {
                    "type": "STRING",
                    "description": "An analysis of the primary keywords."
                }
            },
            "required": [
                "titles",
                "description",
                "tags",
                "seoScore",
                "scoreJustification",
                "keywordAnalysis"
            ]
        })
    }

    /// Extract `VideoContent` from a generateContent response body
    fn parse_content_response(data: &serde_json::Value) -> Result<VideoContent, ProviderError> {
        let text = data
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| {
                ProviderError::MalformedResponse("no text candidate in response".to_string())
            })?;

        serde_json::from_str(text)
            .map_err(|e| ProviderError::MalformedResponse(format!("invalid content JSON: {e}")))
    }

    /// Extract PNG bytes from a predict response body
    fn parse_image_response(data: &serde_json::Value) -> Result<Vec<u8>, ProviderError> {
        let Some(prediction) = data
            .get("predictions")
            .and_then(|p| p.as_array())
            .and_then(|p| p.first())
        else {
            return Err(ProviderError::NoImage);
        };

        let encoded = prediction
            .get("bytesBase64Encoded")
            .and_then(|b| b.as_str())
            .ok_or(ProviderError::NoImage)?;

        BASE64
            .decode(encoded)
            .map_err(|e| ProviderError::MalformedResponse(format!("invalid image base64: {e}")))
    }

    /// Check HTTP status, mapping failures to `ProviderError::Api`
    async fn into_json(response: reqwest::Response) -> Result<serde_json::Value, ProviderError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate_content(&self, topic: &Topic) -> Result<VideoContent, ProviderError> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": text_prompt(topic.as_str()) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::response_schema(),
            },
        });

        tracing::debug!(model = %self.text_model, "sending text generation request");

        let response = self
            .http_client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let data = Self::into_json(response).await?;
        Self::parse_content_response(&data)
    }
}

#[async_trait]
impl ImageGenerator for GeminiProvider {
    async fn generate_thumbnail(&self, prompt: &str) -> Result<Vec<u8>, ProviderError> {
        let body = serde_json::json!({
            "instances": [{ "prompt": prompt }],
            "parameters": {
                "sampleCount": 1,
                "aspectRatio": "16:9",
                "outputMimeType": "image/png",
            },
        });

        tracing::debug!(model = %self.image_model, "sending image generation request");

        let response = self
            .http_client
            .post(self.predict_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let data = Self::into_json(response).await?;
        Self::parse_image_response(&data)
    }
}
