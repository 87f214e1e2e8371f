use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use translator_pro_core::{AppConfig, LanguageDirectory, TranslationFlow};

/// Session key under which [`UiSettings`] are stored
pub const SETTINGS_KEY: &str = "ui_settings";

/// Result text size chosen on the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    pub const fn value(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    /// CSS class applied to the result box
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Small => "font-small",
            Self::Medium => "font-medium",
            Self::Large => "font-large",
        }
    }
}

/// Per-browser UI settings, kept in the (in-memory) session only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiSettings {
    /// Re-translate shortly after the user stops typing
    pub auto_translate: bool,
    pub font_size: FontSize,
}

/// Global application state
pub struct AppState {
    pub flow: TranslationFlow,
    /// Lottie JSON loaded at startup, if any
    pub animation: Option<Value>,
    /// Language preselected on the translate page
    pub default_language: &'static str,
}

impl AppState {
    pub fn new(config: &AppConfig, animation: Option<Value>) -> Result<Self> {
        let flow = TranslationFlow::from_config(config)
            .map_err(|e| anyhow::anyhow!("Failed to create translator: {e}"))?;

        Ok(Self::with_flow(flow, animation, config.default_language.as_deref()))
    }

    /// Build state around an existing flow. `default_language` is ignored
    /// unless it names a language in the directory.
    pub fn with_flow(
        flow: TranslationFlow,
        animation: Option<Value>,
        default_language: Option<&str>,
    ) -> Self {
        let directory = flow.directory();
        let default_language = default_language
            .and_then(|wanted| directory.list_display_names().find(|name| *name == wanted))
            .unwrap_or_else(|| directory.default_display_name());

        Self {
            flow,
            animation,
            default_language,
        }
    }

    pub const fn directory(&self) -> &'static LanguageDirectory {
        self.flow.directory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_names() {
        for size in FontSize::ALL {
            assert_eq!(FontSize::from_name(size.value()), Some(size));
        }
        assert_eq!(FontSize::from_name("Huge"), None);
    }

    #[test]
    fn test_configured_default_language() {
        let config = AppConfig {
            default_language: Some("Spanish".to_string()),
            ..Default::default()
        };
        let state = AppState::new(&config, None).unwrap();
        assert_eq!(state.default_language, "Spanish");
    }

    #[test]
    fn test_unknown_default_language_falls_back_to_english() {
        let config = AppConfig {
            default_language: Some("Elvish".to_string()),
            ..Default::default()
        };
        let state = AppState::new(&config, None).unwrap();
        assert_eq!(state.default_language, "English");
    }
}
