use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::traits::{Translation, Translator, TranslatorInfo};
use crate::config::Lang;
use crate::error::{Error, Result};
use crate::languages::LanguageDirectory;
use crate::util::strip_wrapping;

/// Default base URL for a local OpenAI-compatible server
pub const DEFAULT_OPENAI_API_BASE: &str = "http://localhost:8080/v1";

/// OpenAI-compatible API translator
/// Works with: llama.cpp server, Ollama, DeepSeek, OpenAI, etc.
pub struct OpenAiTranslator {
    client: Client,
    /// Base URL for the API (e.g., "http://localhost:8080/v1")
    pub api_base: String,
    /// Optional API key for authentication
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Shape the model is asked to answer with
#[derive(Debug, Deserialize)]
struct ModelAnswer {
    translation: String,
    detected_source_language: String,
}

impl OpenAiTranslator {
    pub fn new(
        api_base: String,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            api_base,
            api_key,
            model,
        })
    }

    /// Create translation prompt
    fn create_prompt(text: &str, target: &Lang) -> String {
        let target_name = LanguageDirectory::global()
            .display_name_for_code(target.as_str())
            .unwrap_or("the language with code");
        format!(
            "Translate the following text into {} ({}). Detect the language of the text. \
             Reply with only a JSON object of the form \
             {{\"translation\": \"...\", \"detected_source_language\": \"<ISO 639-1 code>\"}}.\n\n\
             Text: \"{}\"",
            target_name, target, text
        )
    }

    async fn request(&self, text: &str, target: &Lang) -> Result<String> {
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: Self::create_prompt(text, target),
            }],
            temperature: Some(0.3), // Lower temperature for more consistent translations
        };

        debug!("Translation request to {} with model {}", url, self.model);

        let mut req = self.client.post(&url).json(&request);

        // Add API key if configured
        if let Some(ref key) = self.api_key {
            req = req.header("Authorization", format!("Bearer {key}"));
        }

        let response = req.send().await.map_err(|e| Error::from_transport(&e))?;

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

        let chat_response = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| Error::TranslationInvalidResponse(e.to_string()))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::TranslationInvalidResponse("No choices in response".to_string()))
    }
}

/// Decode the model's JSON answer.
fn parse_answer(content: &str) -> Result<Translation> {
    let answer: ModelAnswer = serde_json::from_str(strip_wrapping(content))
        .map_err(|e| Error::TranslationInvalidResponse(format!("model answer: {e}")))?;

    if answer.translation.trim().is_empty() {
        return Err(Error::TranslationInvalidResponse(
            "empty translation".to_string(),
        ));
    }

    Ok(Translation::new(
        answer.translation.trim(),
        answer.detected_source_language.trim().to_lowercase(),
    ))
}

#[async_trait]
impl Translator for OpenAiTranslator {
    fn info(&self) -> TranslatorInfo {
        TranslatorInfo {
            name: "OpenAI Compatible",
            supports_auto_detect: true,
        }
    }

    async fn translate(&self, text: &str, target: &Lang) -> Result<Translation> {
        let content = self.request(text, target).await?;
        parse_answer(&content)
    }
}
