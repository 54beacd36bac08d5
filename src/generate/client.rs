//! HTTP client for the external image generation collaborator.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ApiConfig;
use crate::models::RoomDesign;

use super::error::GenerateError;
use super::prompt::build_prompt;

/// Anything that can turn a finished design into an image URL.
///
/// The production implementation calls the external provider; tests inject a
/// [`MockImageGenerator`] instead.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generates one image for the design, returning its URL.
    async fn generate(&self, design: &RoomDesign) -> Result<String, GenerateError>;
}

/// Image generation client backed by the OpenAI images API.
///
/// Sends exactly one request per call, asking for a single square 1024x1024
/// image, and consumes the first returned entry's URL. It never retries and
/// never panics past its boundary; every failure maps to a
/// [`GenerateError`].
pub struct RoomImageClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

/// Request body for the images endpoint.
#[derive(Debug, Serialize)]
struct ImagesRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
}

/// Successful response from the images endpoint.
#[derive(Debug, Deserialize)]
struct ImagesResponse {
    data: Vec<GeneratedImage>,
}

/// One generated image entry.
#[derive(Debug, Deserialize)]
struct GeneratedImage {
    url: Option<String>,
}

/// Error envelope the provider returns on failure.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

impl RoomImageClient {
    /// Creates a client from API configuration.
    ///
    /// A missing credential is not an error here; it surfaces as an
    /// authentication-class failure when a generation is attempted, so the
    /// rest of the application keeps working without a key.
    pub fn new(api: &ApiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: api.resolve_key(),
            base_url: api.base_url.trim_end_matches('/').to_string(),
            model: api.model.clone(),
        })
    }

    fn images_url(&self) -> String {
        format!("{}/v1/images/generations", self.base_url)
    }

    /// Maps a non-success HTTP status plus provider message to a typed error.
    fn classify_failure(status: StatusCode, message: String) -> GenerateError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                GenerateError::Unauthorized(message)
            }
            StatusCode::TOO_MANY_REQUESTS => GenerateError::RateLimited(message),
            StatusCode::BAD_REQUEST => GenerateError::PromptRejected(message),
            _ => GenerateError::Provider(message),
        }
    }
}

#[async_trait]
impl ImageGenerator for RoomImageClient {
    async fn generate(&self, design: &RoomDesign) -> Result<String, GenerateError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(GenerateError::MissingCredentials)?;

        let prompt = build_prompt(design);
        debug!(model = %self.model, "dispatching image generation request");

        let request = ImagesRequest {
            model: &self.model,
            prompt: &prompt,
            n: 1,
            size: "1024x1024",
        };

        let response = self
            .http
            .post(self.images_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerateError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ProviderErrorBody>()
                .await
                .map_or_else(|_| status.to_string(), |body| body.error.message);
            return Err(Self::classify_failure(status, message));
        }

        let body: ImagesResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::Provider(format!("malformed response: {e}")))?;

        body.data
            .into_iter()
            .next()
            .and_then(|image| image.url)
            .ok_or(GenerateError::EmptyResponse)
    }
}

/// Scripted generator for tests and offline development.
#[derive(Debug, Clone)]
pub struct MockImageGenerator {
    /// URL returned on success.
    pub image_url: String,
    /// Whether generation should succeed.
    pub should_succeed: bool,
    /// Error returned on failure; defaults to a provider error.
    pub error: Option<GenerateError>,
}

impl Default for MockImageGenerator {
    fn default() -> Self {
        Self {
            image_url: "https://images.example.com/generated-room.png".to_string(),
            should_succeed: true,
            error: None,
        }
    }
}

impl MockImageGenerator {
    /// A mock that always fails with the given error.
    #[must_use]
    pub fn failing(error: GenerateError) -> Self {
        Self {
            should_succeed: false,
            error: Some(error),
            ..Self::default()
        }
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate(&self, _design: &RoomDesign) -> Result<String, GenerateError> {
        if self.should_succeed {
            Ok(self.image_url.clone())
        } else {
            Err(self
                .error
                .clone()
                .unwrap_or_else(|| GenerateError::Provider("mock generation failed".to_string())))
        }
    }
}
