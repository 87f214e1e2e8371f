mod google;
mod openai;
mod traits;

pub use google::{GoogleTranslator, DEFAULT_GOOGLE_API_BASE};
pub use openai::{OpenAiTranslator, DEFAULT_OPENAI_API_BASE};
pub use traits::{Translation, Translator, TranslatorInfo};

use crate::config::{Backend, TranslatorConfig};
use crate::error::{Error, Result};
use std::sync::Arc;
use std::time::Duration;

/// Create a translator from configuration
pub fn create_translator(config: &TranslatorConfig) -> Result<Arc<dyn Translator>> {
    let timeout = Duration::from_secs(config.timeout_secs);

    let translator: Arc<dyn Translator> = match config.backend {
        Backend::Google => Arc::new(GoogleTranslator::new(config.api_base.clone(), timeout)?),
        Backend::OpenAi => {
            let model = config
                .model
                .clone()
                .filter(|m| !m.trim().is_empty())
                .ok_or_else(|| Error::ConfigMissing("translator.model".to_string()))?;

            Arc::new(OpenAiTranslator::new(
                config
                    .api_base
                    .clone()
                    .unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string()),
                config.api_key.clone(),
                model,
                timeout,
            )?)
        }
    };

    Ok(translator)
}
