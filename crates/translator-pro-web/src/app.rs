//! Router construction, shared by `main` and the route tests.

use axum::http::{header, HeaderValue};
use axum::{
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir,
    set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::routes;
use crate::state::AppState;

/// Resolve the static files directory.
///
/// Priority:
/// 1. Explicit path if provided
/// 2. ./static if it exists
/// 3. Crate's built-in static directory
pub fn resolve_static_dir(explicit_path: Option<&str>) -> PathBuf {
    if let Some(path) = explicit_path {
        return PathBuf::from(path);
    }

    let local_static = PathBuf::from("static");
    if local_static.is_dir() {
        return local_static;
    }

    // Fall back to compiled-in path (useful for cargo run)
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

pub fn build_router(state: Arc<AppState>, static_dir: PathBuf) -> Router {
    // Settings live only as long as the process; nothing is persisted.
    let sessions = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    Router::new()
        // Pages
        .route("/", get(routes::index))
        .route("/translate", get(routes::translate_page))
        .route("/about", get(routes::about))
        .route("/settings", get(routes::settings_page))
        .route("/health", get(routes::health))
        // API endpoints - HTML fragments (HTMX)
        .route("/api/translate", post(routes::translate))
        .route("/api/copy", post(routes::copy_translation))
        .route("/api/settings", post(routes::update_settings))
        // API endpoints - JSON
        .route("/api/animation", get(routes::get_animation))
        // Static files with Cache-Control: no-cache (cache but always revalidate via ETag)
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("no-cache"),
                ))
                .service(ServeDir::new(static_dir)),
        )
        // Middleware
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, max-age=0"),
        ))
        .layer(sessions)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Mutex;
    use tower::ServiceExt;
    use translator_pro_core::{
        Error, Lang, Result, Translation, TranslationCache, TranslationFlow, Translator,
        TranslatorInfo, COPY_ACKNOWLEDGEMENT, EMPTY_INPUT_WARNING, TRANSLATION_FAILED_MESSAGE,
    };

    /// Records calls; fails when the text is "fail".
    #[derive(Default)]
    struct MockTranslator {
        calls: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl Translator for MockTranslator {
        fn info(&self) -> TranslatorInfo {
            TranslatorInfo {
                name: "mock",
                supports_auto_detect: true,
            }
        }

        async fn translate(&self, text: &str, target: &Lang) -> Result<Translation> {
            self.calls
                .lock()
                .unwrap()
                .push((text.to_string(), target.to_string()));
            if text == "fail" {
                return Err(Error::TranslationTimeout);
            }
            Ok(Translation::new("Bonjour", "en"))
        }
    }

    fn app(mock: &Arc<MockTranslator>, animation: Option<serde_json::Value>) -> Router {
        let flow = TranslationFlow::new(
            Arc::clone(mock) as Arc<dyn Translator>,
            TranslationCache::disabled(),
        );
        let state = Arc::new(AppState::with_flow(flow, animation, None));
        build_router(state, resolve_static_dir(None))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_translate_success_fragment() {
        let mock = Arc::new(MockTranslator::default());
        let response = app(&mock, None)
            .oneshot(form_post("/api/translate", "source_text=Hello&target_language=French"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Bonjour"));
        assert!(html.contains("Detected source language: EN"));
        assert_eq!(
            *mock.calls.lock().unwrap(),
            vec![("Hello".to_string(), "fr".to_string())]
        );
    }

    #[tokio::test]
    async fn test_translate_empty_text_warns() {
        let mock = Arc::new(MockTranslator::default());
        let response = app(&mock, None)
            .oneshot(form_post("/api/translate", "source_text=&target_language=French"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains(EMPTY_INPUT_WARNING));
        assert!(mock.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_translate_missing_fields_warns() {
        let mock = Arc::new(MockTranslator::default());
        let response = app(&mock, None)
            .oneshot(form_post("/api/translate", ""))
            .await
            .unwrap();

        assert!(body_text(response).await.contains(EMPTY_INPUT_WARNING));
    }

    #[tokio::test]
    async fn test_translate_failure_is_generic() {
        let mock = Arc::new(MockTranslator::default());
        let response = app(&mock, None)
            .oneshot(form_post("/api/translate", "source_text=fail&target_language=German"))
            .await
            .unwrap();

        let html = body_text(response).await;
        assert!(html.contains(TRANSLATION_FAILED_MESSAGE));
        assert!(!html.contains("timed out"));
    }

    #[tokio::test]
    async fn test_translate_page_preselects_english() {
        let mock = Arc::new(MockTranslator::default());
        let response = app(&mock, None).oneshot(get_req("/translate")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"<option value="English" selected>"#));
        assert!(html.contains(r#"<option value="French">"#));
        assert!(!html.contains(r#"id="animation""#));
    }

    #[tokio::test]
    async fn test_index_redirects_to_translate() {
        let mock = Arc::new(MockTranslator::default());
        let response = app(&mock, None).oneshot(get_req("/")).await.unwrap();

        assert!(response.status().is_redirection());
        assert_eq!(response.headers()[header::LOCATION], "/translate");
    }

    #[tokio::test]
    async fn test_about_and_settings_pages_render() {
        let mock = Arc::new(MockTranslator::default());
        let router = app(&mock, None);

        let about = router.clone().oneshot(get_req("/about")).await.unwrap();
        assert_eq!(about.status(), StatusCode::OK);
        assert!(body_text(about).await.contains("About Language Translation Pro"));

        let settings = router.oneshot(get_req("/settings")).await.unwrap();
        assert_eq!(settings.status(), StatusCode::OK);
        let html = body_text(settings).await;
        assert!(html.contains("Enable auto-translation"));
        assert!(html.contains(r#"value="medium" checked"#));
    }

    #[tokio::test]
    async fn test_copy_acknowledgement() {
        let mock = Arc::new(MockTranslator::default());
        let response = app(&mock, None)
            .oneshot(form_post("/api/copy", ""))
            .await
            .unwrap();

        assert!(body_text(response).await.contains(COPY_ACKNOWLEDGEMENT));
    }

    #[tokio::test]
    async fn test_settings_update_acknowledged() {
        let mock = Arc::new(MockTranslator::default());
        let response = app(&mock, None)
            .oneshot(form_post("/api/settings", "auto_translate=on&font_size=large"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Settings saved"));
    }

    fn with_cookie(mut request: Request<Body>, cookie: &str) -> Request<Body> {
        request
            .headers_mut()
            .insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        request
    }

    #[tokio::test]
    async fn test_settings_follow_the_session() {
        let mock = Arc::new(MockTranslator::default());
        let router = app(&mock, None);

        // Defaults before anything is saved
        let page = router.clone().oneshot(get_req("/translate")).await.unwrap();
        assert!(!body_text(page).await.contains("keyup changed"));

        let saved = router
            .clone()
            .oneshot(form_post("/api/settings", "auto_translate=on&font_size=large"))
            .await
            .unwrap();
        let cookie = saved.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();
        assert!(cookie.starts_with("id="));

        let settings = router
            .clone()
            .oneshot(with_cookie(get_req("/settings"), &cookie))
            .await
            .unwrap();
        let html = body_text(settings).await;
        assert!(html.contains(r#"value="large" checked"#));
        assert!(html.contains(r#"name="auto_translate" checked"#));

        let page = router
            .clone()
            .oneshot(with_cookie(get_req("/translate"), &cookie))
            .await
            .unwrap();
        let html = body_text(page).await;
        assert!(html.contains("keyup changed"));
        // Typing replaces an in-flight request instead of racing it
        assert!(html.contains(r##"hx-sync="#translate-form:replace""##));

        let result = router
            .oneshot(with_cookie(
                form_post("/api/translate", "source_text=Hello&target_language=French"),
                &cookie,
            ))
            .await
            .unwrap();
        assert!(body_text(result).await.contains("font-large"));
    }

    #[tokio::test]
    async fn test_animation_route() {
        let mock = Arc::new(MockTranslator::default());

        let missing = app(&mock, None).oneshot(get_req("/api/animation")).await.unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let anim = serde_json::json!({"v": "5.7.4", "layers": []});
        let router = app(&mock, Some(anim.clone()));
        let page = router.clone().oneshot(get_req("/translate")).await.unwrap();
        assert!(body_text(page).await.contains(r#"id="animation""#));

        let found = router.oneshot(get_req("/api/animation")).await.unwrap();
        assert_eq!(found.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_text(found).await).unwrap();
        assert_eq!(body, anim);
    }

    #[tokio::test]
    async fn test_health() {
        let mock = Arc::new(MockTranslator::default());
        let response = app(&mock, None).oneshot(get_req("/health")).await.unwrap();
        assert_eq!(body_text(response).await, "ok");
    }
}
