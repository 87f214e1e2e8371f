//! Page routes - full HTML page renders.

use axum::extract::State;
use axum::response::Redirect;
use std::sync::Arc;
use tower_sessions::Session;

use super::settings::load_settings;
use crate::state::AppState;
use crate::templates::{AboutTemplate, Page, SettingsTemplate, TranslatePageTemplate};

/// The translate page is the landing page.
pub async fn index() -> Redirect {
    Redirect::to("/translate")
}

/// Translate page with the default language preselected.
pub async fn translate_page(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> TranslatePageTemplate {
    let settings = load_settings(&session).await;

    TranslatePageTemplate::new(
        state.directory(),
        state.default_language,
        state.animation.is_some(),
        settings,
    )
}

pub async fn about(State(state): State<Arc<AppState>>) -> AboutTemplate {
    AboutTemplate {
        active: Page::About.name(),
        language_count: state.directory().entries().len(),
    }
}

pub async fn settings_page(session: Session) -> SettingsTemplate {
    SettingsTemplate::new(load_settings(&session).await)
}

pub async fn health() -> &'static str {
    "ok"
}
