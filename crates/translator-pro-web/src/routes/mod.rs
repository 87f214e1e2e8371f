//! HTTP route handlers for the translator web application.
//!
//! Page routes return full HTML; `/api/*` routes return HTML fragments for
//! HTMX, except `/api/animation` which returns JSON.
//! HTML routes use Askama templates from the `templates` module.

mod animation;
mod pages;
mod settings;
mod translate;

pub use animation::get_animation;
pub use pages::{about, health, index, settings_page, translate_page};
pub use settings::update_settings;
pub use translate::{copy_translation, translate};

use serde::Deserialize as SerdeDeserialize;

/// Form data for a translate action.
///
/// Missing fields count as empty: blank text warns, an unknown language
/// translates to English.
#[derive(SerdeDeserialize, Default)]
pub struct TranslateForm {
    #[serde(default)]
    pub source_text: String,
    #[serde(default)]
    pub target_language: String,
}

/// Settings update from form data.
///
/// Checkboxes are only sent when checked, so absence means off.
#[derive(SerdeDeserialize, Default)]
pub struct SettingsForm {
    pub auto_translate: Option<String>,
    pub font_size: Option<String>,
}
