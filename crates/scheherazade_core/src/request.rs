//! Request type for generation backend calls.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A text-generation request.
///
/// The only thing a driver ever sees: a prompt plus sampling options.
///
/// # Examples
///
/// ```
/// use scheherazade_core::GenerationRequest;
///
/// let request = GenerationRequest::builder()
///     .prompt("Write chapter 1".to_string())
///     .max_tokens(Some(2000))
///     .temperature(Some(0.8))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.max_tokens, Some(2000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Builder)]
pub struct GenerationRequest {
    /// The prompt text to send
    pub prompt: String,
    /// Maximum number of tokens to generate
    #[builder(default)]
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    #[builder(default)]
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    /// Create a request builder.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Plain request with no sampling overrides.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: None,
            temperature: None,
        }
    }
}
