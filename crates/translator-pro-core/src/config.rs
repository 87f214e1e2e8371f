use serde::{Deserialize, Serialize};

use crate::languages::DEFAULT_LANGUAGE_CODE;

/// API language code, as understood by the translation backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lang(pub String);

impl Lang {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Lang {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE_CODE)
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which translation service to call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Public Google Translate web endpoint (no key required)
    #[default]
    Google,
    /// Any OpenAI-compatible chat completion API
    #[serde(alias = "openai-compatible")]
    OpenAi,
}

impl Backend {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "google" => Some(Self::Google),
            "openai" | "openai-compatible" | "open-ai" => Some(Self::OpenAi),
            _ => None,
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Google => write!(f, "google"),
            Self::OpenAi => write!(f, "openai"),
        }
    }
}

/// Translator backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default)]
    pub backend: Backend,
    /// Base URL; backend-specific default when unset
    pub api_base: Option<String>,
    pub api_key: Option<String>,
    /// Model identifier (OpenAI-compatible backend only)
    pub model: Option<String>,
    /// HTTP timeout for one translation call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl TranslatorConfig {
    /// Create a config for an OpenAI-compatible API
    pub fn openai(
        api_base: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            backend: Backend::OpenAi,
            api_base: Some(api_base.into()),
            api_key,
            model: Some(model.into()),
            timeout_secs: default_timeout_secs(),
        }
    }
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Google,
            api_base: None,
            api_key: None,
            model: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enable the in-memory translation cache
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum cached translations
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,

    /// Entry TTL in seconds (0 = no expiry)
    #[serde(default)]
    pub ttl_seconds: u64,
}

const fn default_true() -> bool {
    true
}

const fn default_max_entries() -> u64 {
    1000
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: default_max_entries(),
            ttl_seconds: 0,
        }
    }
}

/// Default Lottie animation shown on the translate page
pub const DEFAULT_ANIMATION_URL: &str =
    "https://assets3.lottiefiles.com/packages/lf20_rycdh53q.json";

/// Decorative animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_animation_url")]
    pub url: String,
}

fn default_animation_url() -> String {
    DEFAULT_ANIMATION_URL.to_string()
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: default_animation_url(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display name preselected in the language picker; the directory
    /// default ("English") when unset
    #[serde(default)]
    pub default_language: Option<String>,

    /// Translator backend configuration
    #[serde(default)]
    pub translator: TranslatorConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl AppConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::error::Error> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            crate::error::Error::ConfigLoad(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, crate::error::Error> {
        toml::from_str(content).map_err(|e| {
            crate::error::Error::ConfigLoad(format!("Failed to parse config: {e}"))
        })
    }

    /// Load from default locations (~/.config/translator-pro/config.toml, ./config.toml)
    pub fn load() -> Self {
        // Try user config
        if let Some(config_dir) = crate::util::config_dir() {
            let user_config = config_dir.join("translator-pro").join("config.toml");
            if user_config.exists() {
                match Self::from_file(&user_config) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {}", user_config.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // Try local config
        let local_config = std::path::PathBuf::from("config.toml");
        if local_config.exists() {
            match Self::from_file(&local_config) {
                Ok(config) => {
                    tracing::debug!("Loaded config from ./config.toml");
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load ./config.toml: {}", e);
                }
            }
        }

        // Return defaults
        tracing::debug!("No config file found, using defaults");
        Self::default()
    }
}
