//! Integration tests for translator-pro-core
//!
//! These tests drive full translation cycles through `TranslationFlow`
//! with a mock backend:
//! - Input validation (no backend call for blank text)
//! - Language resolution and fallback
//! - Failure normalization
//! - Cache hits and cycle independence

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use translator_pro_core::{
    CacheConfig, Error, FlowState, Lang, Result, Translation, TranslationCache, TranslationFlow,
    Translator, TranslatorInfo, EMPTY_INPUT_WARNING, TRANSLATION_FAILED_MESSAGE,
};

// =============================================================================
// Mock Translator for Testing
// =============================================================================

/// A mock translator that records every call and answers from a fixed table.
#[derive(Default)]
struct MockTranslator {
    calls: Mutex<Vec<(String, String)>>,
    /// Simulate failure while true
    failing: AtomicBool,
}

impl MockTranslator {
    fn failing() -> Self {
        let mock = Self::default();
        mock.failing.store(true, Ordering::SeqCst);
        mock
    }

    fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    fn info(&self) -> TranslatorInfo {
        TranslatorInfo {
            name: "mock",
            supports_auto_detect: true,
        }
    }

    async fn translate(&self, text: &str, target: &Lang) -> Result<Translation> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), target.as_str().to_string()));

        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::TranslationRequest(
                "connection reset by peer (secret upstream detail)".to_string(),
            ));
        }

        let translated = match (text, target.as_str()) {
            ("Hello", "fr") => "Bonjour".to_string(),
            ("Hello", "de") => "Hallo".to_string(),
            (other, code) => format!("[{code}] {other}"),
        };
        Ok(Translation::new(translated, "en"))
    }
}

// =============================================================================
// Test Fixtures
// =============================================================================

fn flow_with(mock: &Arc<MockTranslator>, cache: TranslationCache) -> TranslationFlow {
    TranslationFlow::new(Arc::clone(mock) as Arc<dyn Translator>, cache)
}

fn uncached_flow(mock: &Arc<MockTranslator>) -> TranslationFlow {
    flow_with(mock, TranslationCache::disabled())
}

// =============================================================================
// Flow Tests
// =============================================================================

#[tokio::test]
async fn test_empty_input_warns_without_calling_backend() {
    let mock = Arc::new(MockTranslator::default());
    let flow = uncached_flow(&mock);

    for text in ["", "   "] {
        let state = flow.submit(text, "French").await;
        assert_eq!(state, FlowState::Warned { message: EMPTY_INPUT_WARNING });
    }

    assert!(mock.calls().is_empty(), "backend must not be called for blank input");
}

#[tokio::test]
async fn test_hello_to_french() {
    let mock = Arc::new(MockTranslator::default());
    let flow = uncached_flow(&mock);

    let state = flow.submit("Hello", "French").await;

    assert_eq!(mock.calls(), vec![("Hello".to_string(), "fr".to_string())]);
    let FlowState::Succeeded(translation) = state else {
        panic!("expected success, got {state:?}");
    };
    assert_eq!(translation.translated_text, "Bonjour");
    assert_eq!(translation.detected_source_display(), "EN");
}

#[tokio::test]
async fn test_unknown_language_name_uses_english() {
    let mock = Arc::new(MockTranslator::default());
    let flow = uncached_flow(&mock);

    let state = flow.submit("Hola", "Not-A-Real-Language").await;

    assert!(matches!(state, FlowState::Succeeded(_)));
    assert_eq!(mock.calls(), vec![("Hola".to_string(), "en".to_string())]);
}

#[tokio::test]
async fn test_backend_failure_gives_generic_message() {
    let mock = Arc::new(MockTranslator::failing());
    let flow = uncached_flow(&mock);

    let state = flow.submit("Hello", "French").await;

    assert_eq!(state, FlowState::Failed { message: TRANSLATION_FAILED_MESSAGE });
    assert!(!state.message().unwrap_or_default().contains("secret"));
}

#[tokio::test]
async fn test_failed_cycle_does_not_affect_next_cycle() {
    let mock = Arc::new(MockTranslator::failing());
    let flow = uncached_flow(&mock);

    let first = flow.submit("Hello", "French").await;
    assert!(matches!(first, FlowState::Failed { .. }));

    mock.set_failing(false);
    let second = flow.submit("Hello", "German").await;
    assert_eq!(second, FlowState::Succeeded(Translation::new("Hallo", "en")));
}

#[tokio::test]
async fn test_failures_are_not_cached() {
    let mock = Arc::new(MockTranslator::failing());
    let flow = flow_with(&mock, TranslationCache::new(&CacheConfig::default()));

    assert!(matches!(flow.submit("Hello", "French").await, FlowState::Failed { .. }));
    mock.set_failing(false);
    assert!(matches!(flow.submit("Hello", "French").await, FlowState::Succeeded(_)));
    assert_eq!(mock.calls().len(), 2);
}

// =============================================================================
// Cache Tests
// =============================================================================

#[tokio::test]
async fn test_repeat_translation_hits_cache() {
    let mock = Arc::new(MockTranslator::default());
    let flow = flow_with(&mock, TranslationCache::new(&CacheConfig::default()));

    let first = flow.submit("Hello", "French").await;
    let second = flow.submit("Hello", "French").await;

    assert_eq!(first, second);
    assert_eq!(mock.calls().len(), 1, "second cycle should be served from cache");

    flow.submit("Hello", "German").await;
    assert_eq!(mock.calls().len(), 2, "different target is a different key");
}

#[tokio::test]
async fn test_clear_cache_forces_new_call() {
    let mock = Arc::new(MockTranslator::default());
    let flow = flow_with(&mock, TranslationCache::new(&CacheConfig::default()));

    flow.submit("Hello", "French").await;
    flow.clear_cache();
    flow.submit("Hello", "French").await;

    assert_eq!(mock.calls().len(), 2);
}

#[tokio::test]
async fn test_text_is_sent_untrimmed() {
    let mock = Arc::new(MockTranslator::default());
    let flow = uncached_flow(&mock);

    flow.submit("  Hello\n", "French").await;
    assert_eq!(mock.calls()[0].0, "  Hello\n");
}
