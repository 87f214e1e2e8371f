//! Settings routes - per-browser UI settings kept in the session.

use axum::extract::Form;
use tower_sessions::Session;
use tracing::{debug, warn};

use super::SettingsForm;
use crate::helpers::{ResultExt, RouteResult};
use crate::state::{FontSize, UiSettings, SETTINGS_KEY};
use crate::templates::ToastTemplate;

/// Read the visitor's settings, falling back to defaults.
pub(crate) async fn load_settings(session: &Session) -> UiSettings {
    match session.get::<UiSettings>(SETTINGS_KEY).await {
        Ok(settings) => settings.unwrap_or_default(),
        Err(e) => {
            warn!("Failed to read session settings: {}", e);
            UiSettings::default()
        }
    }
}

/// Save settings - returns a toast fragment.
///
/// HTMX: the settings form posts on every change and targets `#toast`.
pub async fn update_settings(
    session: Session,
    Form(update): Form<SettingsForm>,
) -> RouteResult<ToastTemplate> {
    let mut settings = load_settings(&session).await;

    settings.auto_translate = update.auto_translate.is_some();
    if let Some(ref size) = update.font_size
        && let Some(size) = FontSize::from_name(size)
    {
        settings.font_size = size;
    }

    debug!("Saving UI settings: {:?}", settings);

    session
        .insert(SETTINGS_KEY, settings)
        .await
        .or_internal_error()?;

    Ok(ToastTemplate::success("Settings saved"))
}
