//! Translation routes - one flow cycle per request.

use axum::extract::{Form, State};
use std::sync::Arc;
use tower_sessions::Session;
use tracing::debug;
use translator_pro_core::COPY_ACKNOWLEDGEMENT;

use super::settings::load_settings;
use super::TranslateForm;
use crate::state::AppState;
use crate::templates::{ToastTemplate, TranslateResultTemplate};

/// Translate the submitted text - returns the result fragment.
///
/// HTMX: replaces `#result`. Warnings and failures are rendered into the
/// same fragment with a 200 status so HTMX swaps them in.
pub async fn translate(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<TranslateForm>,
) -> TranslateResultTemplate {
    let settings = load_settings(&session).await;

    debug!(
        "translate: {} chars to '{}'",
        form.source_text.chars().count(),
        form.target_language
    );

    let outcome = state
        .flow
        .submit(&form.source_text, &form.target_language)
        .await;

    TranslateResultTemplate::from_state(outcome, state.directory(), settings.font_size)
}

/// Acknowledge the copy button. The browser does the actual copy.
pub async fn copy_translation() -> ToastTemplate {
    ToastTemplate::success(COPY_ACKNOWLEDGEMENT)
}
