use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Lang;
use crate::error::Result;

/// Information about a translator backend
#[derive(Debug, Clone)]
pub struct TranslatorInfo {
    /// Human-readable name
    pub name: &'static str,
    /// Whether this translator reports the detected source language
    pub supports_auto_detect: bool,
}

/// What a backend returns for one piece of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub translated_text: String,
    /// Source language code as reported by the backend (e.g. "en")
    pub detected_source_language_code: String,
}

impl Translation {
    pub fn new(translated_text: impl Into<String>, detected: impl Into<String>) -> Self {
        Self {
            translated_text: translated_text.into(),
            detected_source_language_code: detected.into(),
        }
    }

    /// Detected source code as shown to users ("EN", "ZH-CN").
    pub fn detected_source_display(&self) -> String {
        self.detected_source_language_code.to_uppercase()
    }
}

/// Trait for translation backends
#[async_trait]
pub trait Translator: Send + Sync {
    /// Get information about this translator
    fn info(&self) -> TranslatorInfo;

    /// Get the translator name (convenience method)
    fn name(&self) -> &'static str {
        self.info().name
    }

    /// Translate `text` into `target`, detecting the source language
    async fn translate(&self, text: &str, target: &Lang) -> Result<Translation>;
}
