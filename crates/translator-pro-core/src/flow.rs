//! Per-action translation flow.
//!
//! Each user action runs one independent cycle through [`FlowState`]:
//!
//! ```text
//! Idle --Trigger--> Validating --Validate--> Warned            (blank text)
//!                              --Validate--> Calling --Completed(Ok)--> Succeeded
//!                                                    --Completed(Err)-> Failed
//! ```
//!
//! Transitions live in [`FlowState::advance`], a pure function, so the
//! warning and failure policies can be tested without a backend. The
//! [`TranslationFlow`] driver performs the one side effect: the call to the
//! [`Translator`].

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::cache::{CacheKey, TranslationCache};
use crate::config::{AppConfig, Lang};
use crate::error::Result;
use crate::languages::LanguageDirectory;
use crate::translator::{create_translator, Translation, Translator};
use crate::util::is_blank;

/// Shown when the user translates blank text
pub const EMPTY_INPUT_WARNING: &str = "Please enter some text to translate.";

/// Shown for every collaborator failure, whatever the cause
pub const TRANSLATION_FAILED_MESSAGE: &str =
    "An error occurred during translation. Please try again.";

/// Acknowledgement for the copy action on a successful result
pub const COPY_ACKNOWLEDGEMENT: &str = "Translation copied to clipboard!";

/// What is sent to the translator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_text: String,
    pub target: Lang,
}

/// State of one translation cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    Validating {
        source_text: String,
        display_name: String,
    },
    Calling(TranslationRequest),
    Succeeded(Translation),
    Failed {
        message: &'static str,
    },
    Warned {
        message: &'static str,
    },
}

/// Inputs that move a cycle forward
#[derive(Debug)]
pub enum FlowEvent {
    /// The user pressed translate
    Trigger {
        source_text: String,
        display_name: String,
    },
    /// Check the text captured by `Trigger`
    Validate,
    /// The translator answered
    Completed(Result<Translation>),
}

impl FlowState {
    /// Apply `event`. Pairs with no transition leave the state unchanged.
    #[must_use]
    pub fn advance(self, event: FlowEvent, directory: &LanguageDirectory) -> Self {
        match (self, event) {
            (
                Self::Idle | Self::Succeeded(_) | Self::Failed { .. } | Self::Warned { .. },
                FlowEvent::Trigger {
                    source_text,
                    display_name,
                },
            ) => Self::Validating {
                source_text,
                display_name,
            },

            (
                Self::Validating {
                    source_text,
                    display_name,
                },
                FlowEvent::Validate,
            ) => {
                if is_blank(&source_text) {
                    Self::Warned {
                        message: EMPTY_INPUT_WARNING,
                    }
                } else {
                    let target = Lang::new(directory.resolve_code(&display_name));
                    Self::Calling(TranslationRequest {
                        source_text,
                        target,
                    })
                }
            }

            (Self::Calling(_), FlowEvent::Completed(Ok(translation))) => {
                Self::Succeeded(translation)
            }

            (Self::Calling(request), FlowEvent::Completed(Err(e))) => {
                warn!("Translation to {} failed: {}", request.target, e);
                Self::Failed {
                    message: TRANSLATION_FAILED_MESSAGE,
                }
            }

            (state, event) => {
                debug!("Ignoring {:?} in state {:?}", event, state);
                state
            }
        }
    }

    /// Whether this state ends a cycle
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Succeeded(_) | Self::Failed { .. } | Self::Warned { .. }
        )
    }

    /// User-facing message for Warned and Failed
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Failed { message } | Self::Warned { message } => Some(*message),
            _ => None,
        }
    }
}

/// Drives [`FlowState`] cycles against a translator backend.
pub struct TranslationFlow {
    translator: Arc<dyn Translator>,
    directory: &'static LanguageDirectory,
    cache: TranslationCache,
}

impl TranslationFlow {
    /// Create a flow with the backend and cache described by `config`
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let translator = create_translator(&config.translator)?;
        Ok(Self::new(translator, TranslationCache::new(&config.cache)))
    }

    pub fn new(translator: Arc<dyn Translator>, cache: TranslationCache) -> Self {
        Self::with_directory(translator, cache, LanguageDirectory::global())
    }

    pub const fn with_directory(
        translator: Arc<dyn Translator>,
        cache: TranslationCache,
        directory: &'static LanguageDirectory,
    ) -> Self {
        Self {
            translator,
            directory,
            cache,
        }
    }

    pub const fn directory(&self) -> &'static LanguageDirectory {
        self.directory
    }

    pub fn translator_name(&self) -> &'static str {
        self.translator.name()
    }

    /// Run one full cycle and return its terminal state.
    pub async fn submit(&self, source_text: &str, display_name: &str) -> FlowState {
        let state = FlowState::Idle
            .advance(
                FlowEvent::Trigger {
                    source_text: source_text.to_string(),
                    display_name: display_name.to_string(),
                },
                self.directory,
            )
            .advance(FlowEvent::Validate, self.directory);

        let FlowState::Calling(ref request) = state else {
            debug!("Translation not attempted: {:?}", state);
            return state;
        };

        let result = self.call(request).await;
        let state = state.advance(FlowEvent::Completed(result), self.directory);

        if let FlowState::Succeeded(ref t) = state {
            info!(
                "Translated {} chars ({} -> {})",
                source_text.chars().count(),
                t.detected_source_language_code,
                self.directory.resolve_code(display_name)
            );
        }

        state
    }

    async fn call(&self, request: &TranslationRequest) -> Result<Translation> {
        let key = CacheKey::new(&request.source_text, &request.target, self.translator.name());

        if let Some(cached) = self.cache.get(&key).await {
            debug!("Cache hit for {}", key);
            return Ok(cached);
        }

        let translation = self
            .translator
            .translate(&request.source_text, &request.target)
            .await?;

        self.cache.insert(&key, translation.clone()).await;
        Ok(translation)
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
