//! Askama templates for full pages and HTMX responses.
//!
//! ## Template Structure
//!
//! - `base.html` - Layout: sidebar navigation, stats box, badges, footer
//! - `translate.html` / `about.html` / `settings.html` - The three pages
//! - `partials/` - Fragments swapped in by HTMX (translation result, toasts)

use askama::Template;
use askama_web::WebTemplate;
use translator_pro_core::{FlowState, LanguageDirectory};

use crate::state::{FontSize, UiSettings};

/// Which navigation entry is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Translate,
    About,
    Settings,
}

impl Page {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::About => "about",
            Self::Settings => "settings",
        }
    }
}

/// One option of the language picker
pub struct LanguageChoice {
    pub name: &'static str,
    pub selected: bool,
}

/// Every directory entry, with `selected_name` marked.
pub fn language_choices(
    directory: &LanguageDirectory,
    selected_name: &str,
) -> Vec<LanguageChoice> {
    directory
        .list_display_names()
        .map(|name| LanguageChoice {
            name,
            selected: name == selected_name,
        })
        .collect()
}

/// One option of the font size picker
pub struct FontSizeChoice {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

// =============================================================================
// Full Page Templates
// =============================================================================

/// Translate page: input, language picker, animation slot, result area.
#[derive(Template, WebTemplate)]
#[template(path = "translate.html")]
pub struct TranslatePageTemplate {
    pub active: &'static str,
    pub languages: Vec<LanguageChoice>,
    pub has_animation: bool,
    pub auto_translate: bool,
}

impl TranslatePageTemplate {
    pub fn new(
        directory: &LanguageDirectory,
        default_language: &str,
        has_animation: bool,
        settings: UiSettings,
    ) -> Self {
        Self {
            active: Page::Translate.name(),
            languages: language_choices(directory, default_language),
            has_animation,
            auto_translate: settings.auto_translate,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub active: &'static str,
    pub language_count: usize,
}

#[derive(Template, WebTemplate)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub active: &'static str,
    pub auto_translate: bool,
    pub font_sizes: Vec<FontSizeChoice>,
}

impl SettingsTemplate {
    pub fn new(settings: UiSettings) -> Self {
        Self {
            active: Page::Settings.name(),
            auto_translate: settings.auto_translate,
            font_sizes: FontSize::ALL
                .iter()
                .map(|&size| FontSizeChoice {
                    value: size.value(),
                    label: size.label(),
                    selected: size == settings.font_size,
                })
                .collect(),
        }
    }
}

// =============================================================================
// Fragment Templates (HTMX partial responses)
// =============================================================================

/// A successful translation, ready for display
pub struct TranslationView {
    pub text: String,
    /// Uppercased source code ("EN")
    pub detected_code: String,
    pub detected_name: Option<&'static str>,
}

/// Outcome of one translate action.
///
/// Exactly one of `translation`, `warning` and `error` is set.
#[derive(Template, WebTemplate)]
#[template(path = "partials/translate_result.html")]
pub struct TranslateResultTemplate {
    pub translation: Option<TranslationView>,
    pub warning: Option<&'static str>,
    pub error: Option<&'static str>,
    pub font_class: &'static str,
}

impl TranslateResultTemplate {
    /// Render a terminal flow state.
    pub fn from_state(state: FlowState, directory: &LanguageDirectory, font_size: FontSize) -> Self {
        let mut template = Self {
            translation: None,
            warning: None,
            error: None,
            font_class: font_size.css_class(),
        };

        match state {
            FlowState::Succeeded(t) => {
                template.translation = Some(TranslationView {
                    detected_code: t.detected_source_display(),
                    detected_name: directory.display_name_for_code(&t.detected_source_language_code),
                    text: t.translated_text,
                });
            }
            FlowState::Warned { message } => template.warning = Some(message),
            FlowState::Failed { message } => template.error = Some(message),
            FlowState::Idle | FlowState::Validating { .. } | FlowState::Calling(_) => {
                template.error = Some(translator_pro_core::TRANSLATION_FAILED_MESSAGE);
            }
        }

        template
    }
}

/// Toast fragment (copy acknowledgement, settings saved).
#[derive(Template, WebTemplate)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate {
    pub kind: &'static str,
    pub message: String,
}

impl ToastTemplate {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success",
            message: message.into(),
        }
    }
}
