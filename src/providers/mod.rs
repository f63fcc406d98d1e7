/*! 
 * Provider implementations for translation services.
 * 
 * This module contains the translation client used by the pipeline:
 * - Google: public `translate_a/single` endpoint
 * - Mock: deterministic in-process provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A single text translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// The text to translate
    pub text: String,
    /// Source language code
    pub source_language: String,
    /// Target language code
    pub target_language: String,
}

impl TranslationRequest {
    /// Create a new request
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

/// The provider's answer to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResponse {
    /// The translated text
    pub text: String,
}

/// Common trait for all translation providers
/// 
/// The pipeline treats a provider as an opaque, fallible `text -> text`
/// function. Implementations must not retry on their own; retrying and
/// backoff belong to the translation service.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Translate one text
    /// 
    /// # Arguments
    /// * `request` - The text together with source and target languages
    /// 
    /// # Returns
    /// * `Result<TranslationResponse, ProviderError>` - The translation or an error
    async fn complete(&self, request: TranslationRequest) -> Result<TranslationResponse, ProviderError>;

    /// Short provider name used in log messages
    fn name(&self) -> &str;
}

pub mod google;
pub mod mock;
