//! Typed failures from the image generation collaborator.

use thiserror::Error;

/// Failure surfaced by the image generation client.
///
/// Every transport, authentication, or provider-side failure maps to one of
/// these variants; nothing escapes the client boundary unhandled. All
/// variants are recoverable: the wizard stays interactive and the user can
/// retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// No API credential was configured.
    #[error("image API credential is missing; set OPENAI_API_KEY or configure api.openai_api_key")]
    MissingCredentials,
    /// The provider rejected the credential.
    #[error("image API rejected the credential: {0}")]
    Unauthorized(String),
    /// Rate limit or quota exhausted.
    #[error("image API rate limit or quota exceeded: {0}")]
    RateLimited(String),
    /// The provider rejected the prompt as malformed or disallowed.
    #[error("image API rejected the prompt: {0}")]
    PromptRejected(String),
    /// Any other provider-side failure.
    #[error("image provider error: {0}")]
    Provider(String),
    /// The request never completed (DNS, connect, timeout, ...).
    #[error("network error talking to image API: {0}")]
    Network(String),
    /// The provider answered successfully but returned no images.
    #[error("image API returned no images")]
    EmptyResponse,
}

impl GenerateError {
    /// Whether this failure is authentication-class (missing or rejected
    /// credential).
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::MissingCredentials | Self::Unauthorized(_))
    }
}
