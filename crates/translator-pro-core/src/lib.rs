//! Translator Pro Core Library
//!
//! This library provides the core functionality behind the web and CLI front ends:
//! - Language directory (display name to API code, with an "en" fallback)
//! - The per-action translation flow and its state machine
//! - Translation via Google Translate or OpenAI-compatible APIs
//! - In-memory caching of translations
//! - Loading of the decorative page animation

pub mod animation;
pub mod cache;
pub mod config;
pub mod error;
pub mod flow;
pub mod languages;
pub mod translator;
pub mod util;

pub use animation::{fetch_animation, load_animation};
pub use cache::{CacheKey, TranslationCache};
pub use config::{AnimationConfig, AppConfig, Backend, CacheConfig, Lang, TranslatorConfig};
pub use error::{Error, Result};
pub use flow::{
    FlowEvent, FlowState, TranslationFlow, TranslationRequest, COPY_ACKNOWLEDGEMENT,
    EMPTY_INPUT_WARNING, TRANSLATION_FAILED_MESSAGE,
};
pub use languages::{
    LanguageDirectory, LanguageEntry, DEFAULT_DISPLAY_NAME, DEFAULT_LANGUAGE_CODE, LANGUAGES,
};
pub use translator::{create_translator, Translation, Translator, TranslatorInfo};
