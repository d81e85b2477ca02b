/*!
 * Mock backend implementation for testing.
 *
 * This module provides a mock backend that simulates different behaviors:
 * - `MockBackend::working()` - Always succeeds with a tagged translation
 * - `MockBackend::fixed(text)` - Always succeeds with the given text
 * - `MockBackend::failing()` - Always fails with an error
 * - `MockBackend::delayed(ms)` - Succeeds after a delay
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::app_config::TranslationService;
use crate::errors::ProviderError;
use crate::providers::TranslationBackend;

/// The arguments of a recorded translate call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRequest {
    /// The text to translate
    pub text: String,
    /// Source language code as handed to the backend
    pub source: String,
    /// Target language code as handed to the backend
    pub target: String,
}

/// Behavior mode for the mock backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockBehavior {
    /// Succeed with a "[source->target] text" tagged translation
    Working,
    /// Succeed with a fixed response regardless of input
    Fixed(String),
    /// Always fail with a request error
    Failing,
    /// Succeed like Working, after a delay
    Delayed {
        /// Delay before responding, in milliseconds
        delay_ms: u64,
    },
}

/// Mock backend for testing translation behavior
#[derive(Debug)]
pub struct MockBackend {
    /// Behavior mode
    behavior: MockBehavior,
    /// Service identity to report
    service: TranslationService,
    /// Number of translate calls made
    call_count: Arc<AtomicUsize>,
    /// Arguments of the most recent translate call
    last_request: Mutex<Option<MockRequest>>,
}

impl MockBackend {
    /// Create a new mock backend with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            service: TranslationService::Google,
            call_count: Arc::new(AtomicUsize::new(0)),
            last_request: Mutex::new(None),
        }
    }

    /// Create a working mock backend that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock backend that always returns the given text
    pub fn fixed(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fixed(text.into()))
    }

    /// Create a failing mock backend that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock backend that succeeds after a delay
    pub fn delayed(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Delayed { delay_ms })
    }

    /// Report a different service identity
    pub fn with_service(mut self, service: TranslationService) -> Self {
        self.service = service;
        self
    }

    /// Number of translate calls made so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Arguments of the most recent translate call
    pub fn last_request(&self) -> Option<MockRequest> {
        self.last_request.lock().clone()
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    fn service(&self) -> TranslationService {
        self.service
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock() = Some(MockRequest {
            text: text.to_string(),
            source: source.to_string(),
            target: target.to_string(),
        });

        match &self.behavior {
            MockBehavior::Working => Ok(format!("[{}->{}] {}", source, target, text)),
            MockBehavior::Fixed(response) => Ok(response.clone()),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "Mock backend failure".to_string(),
            )),
            MockBehavior::Delayed { delay_ms } => {
                tokio::time::sleep(Duration::from_millis(*delay_ms)).await;
                Ok(format!("[{}->{}] {}", source, target, text))
            }
        }
    }

    async fn check_availability(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Mock backend unavailable".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
