use thiserror::Error;

/// Unified error type for translator-pro-core
///
/// This enum encompasses all error cases that can occur in the library:
/// - Translation operations (API requests, responses, rate limiting)
/// - Animation asset fetching
/// - Configuration operations (loading, required fields)
///
/// None of these reach the end user verbatim: the translation flow collapses
/// every collaborator error into one fixed message.
#[derive(Error, Debug)]
pub enum Error {
    // ==========================================================================
    // Translation Errors
    // ==========================================================================
    /// Translation API request failed
    #[error("translation API request failed: {0}")]
    TranslationRequest(String),

    /// Invalid response from translation API
    #[error("invalid translation API response: {0}")]
    TranslationInvalidResponse(String),

    /// Rate limited by translation API
    #[error("translation rate limited{}", retry_after.map(|s| format!(", retry after {s} seconds")).unwrap_or_default())]
    TranslationRateLimited { retry_after: Option<u64> },

    /// Translation request timed out
    #[error("translation request timed out")]
    TranslationTimeout,

    /// Failed to build the HTTP client for a backend
    #[error("failed to create HTTP client: {0}")]
    HttpClient(String),

    // ==========================================================================
    // Animation Errors
    // ==========================================================================
    /// Animation asset could not be fetched or decoded
    #[error("failed to load animation asset: {0}")]
    AnimationFetch(String),

    // ==========================================================================
    // Configuration Errors
    // ==========================================================================
    /// Failed to load configuration file
    #[error("failed to load config: {0}")]
    ConfigLoad(String),

    /// Missing required configuration field
    #[error("missing required config field: {0}")]
    ConfigMissing(String),
}

impl Error {
    /// Map a reqwest transport error onto the translation variants.
    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::TranslationTimeout
        } else {
            Self::TranslationRequest(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
