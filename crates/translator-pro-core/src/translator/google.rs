use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::traits::{Translation, Translator, TranslatorInfo};
use crate::config::Lang;
use crate::error::{Error, Result};

/// Public Google Translate web endpoint
pub const DEFAULT_GOOGLE_API_BASE: &str = "https://translate.googleapis.com";

/// Translator backed by the keyless `client=gtx` Google Translate endpoint.
pub struct GoogleTranslator {
    client: Client,
    /// Base URL, overridable for proxies and tests
    pub api_base: String,
}

impl GoogleTranslator {
    pub fn new(api_base: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            api_base: api_base.unwrap_or_else(|| DEFAULT_GOOGLE_API_BASE.to_string()),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/translate_a/single", self.api_base.trim_end_matches('/'))
    }
}

/// Pull the translation out of a `translate_a/single` response.
///
/// The body is positional JSON: `[0]` holds one `[translated, original, ..]`
/// row per sentence and `[2]` the detected source language.
pub(crate) fn parse_response(body: &Value) -> Result<Translation> {
    let sentences = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::TranslationInvalidResponse("missing sentence list".to_string()))?;

    let translated: String = sentences
        .iter()
        .filter_map(|row| row.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(Error::TranslationInvalidResponse(
            "no translated segments".to_string(),
        ));
    }

    let detected = body
        .get(2)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            Error::TranslationInvalidResponse("missing detected source language".to_string())
        })?;

    Ok(Translation::new(translated, detected))
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn info(&self) -> TranslatorInfo {
        TranslatorInfo {
            name: "Google Translate",
            supports_auto_detect: true,
        }
    }

    async fn translate(&self, text: &str, target: &Lang) -> Result<Translation> {
        let url = self.endpoint();
        debug!("Google translate request to {} (target {})", url, target);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| Error::from_transport(&e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            warn!("Rate limited, retry after {:?}s", retry_after);
            return Err(Error::TranslationRateLimited { retry_after });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::TranslationRequest(format!("HTTP {status}: {body}")));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::TranslationInvalidResponse(e.to_string()))?;

        parse_response(&body)
    }
}
