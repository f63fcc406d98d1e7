/*!
 * Mock provider implementation for testing.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockProvider::working()` - Always succeeds with translated text
 * - `MockProvider::intermittent(n)` - Fails every nth request
 * - `MockProvider::failing()` - Always fails with an error
 */

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::{Provider, TranslationRequest, TranslationResponse};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a translation
    Working,
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
    /// Always fails with an error
    Failing,
}

/// Mock provider for testing translation behavior
#[derive(Debug, Clone)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter for intermittent failures
    request_count: Arc<AtomicUsize>,
    /// Fixed translations by source text
    translations: Arc<HashMap<String, String>>,
    /// Simulated latency by source text
    delays: Arc<HashMap<String, u64>>,
    /// Every request received, in call order
    requests: Arc<Mutex<Vec<TranslationRequest>>>,
    /// Source texts in the order their calls completed
    completions: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            translations: Arc::new(HashMap::new()),
            delays: Arc::new(HashMap::new()),
            requests: Arc::new(Mutex::new(Vec::new())),
            completions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create an intermittently failing mock provider
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Return `translated` whenever `source` is requested
    pub fn with_translation(mut self, source: impl Into<String>, translated: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.translations).insert(source.into(), translated.into());
        self
    }

    /// Delay the answer for `source` by `delay_ms`
    pub fn with_delay(mut self, source: impl Into<String>, delay_ms: u64) -> Self {
        Arc::make_mut(&mut self.delays).insert(source.into(), delay_ms);
        self
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<TranslationRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Source texts in completion order
    pub fn completions(&self) -> Vec<String> {
        self.completions.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn translate(&self, request: &TranslationRequest) -> String {
        self.translations
            .get(&request.text)
            .cloned()
            .unwrap_or_else(|| format!("[{}] {}", request.target_language, request.text))
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, request: TranslationRequest) -> Result<TranslationResponse, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        if let Some(delay_ms) = self.delays.get(&request.text) {
            tokio::time::sleep(Duration::from_millis(*delay_ms)).await;
        }

        if let Ok(mut completions) = self.completions.lock() {
            completions.push(request.text.clone());
        }

        match self.behavior {
            MockBehavior::Working => Ok(TranslationResponse { text: self.translate(&request) }),

            MockBehavior::Intermittent { fail_every } => {
                if fail_every > 0 && count % fail_every == fail_every - 1 {
                    Err(ProviderError::ApiError {
                        status_code: 500,
                        message: format!("Simulated intermittent failure on request {}", count + 1),
                    })
                } else {
                    Ok(TranslationResponse { text: self.translate(&request) })
                }
            }

            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Simulated connection failure".to_string(),
            )),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
