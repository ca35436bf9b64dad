// Translator - gateway to the external text translation service

use super::error::{Result, SkillError};
use super::languages::Language;
use crate::config::TranslateConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Text sent when the user gave no word to translate
pub const PLACEHOLDER_TEXT: &str = "Hello World";

const TRANSLATE_TARGET: &str = "AWSShineFrontendService_20170701.TranslateText";
const TRANSLATE_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// One request to the translation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TranslateRequest {
    pub source_language_code: String,
    pub target_language_code: String,
    pub text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TranslateResponse {
    translated_text: String,
}

/// External service that turns a [`TranslateRequest`] into translated text
#[async_trait]
pub trait TranslationService: Send + Sync {
    async fn translate_text(&self, request: &TranslateRequest) -> Result<String>;
}

/// Translation service reached over HTTP with the TranslateText JSON protocol
pub struct HttpTranslationService {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTranslationService {
    /// Fails when no endpoint is configured
    pub fn new(config: &TranslateConfig) -> Result<Self> {
        let endpoint = config
            .endpoint
            .clone()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| SkillError::Gateway("translate.endpoint is not configured".to_string()))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        let client = builder
            .build()
            .map_err(|e| SkillError::Gateway(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TranslationService for HttpTranslationService {
    async fn translate_text(&self, request: &TranslateRequest) -> Result<String> {
        let body = serde_json::to_vec(request)
            .map_err(|e| SkillError::Gateway(format!("Failed to encode request: {}", e)))?;

        let mut http_request = self
            .client
            .post(&self.endpoint)
            .header("X-Amz-Target", TRANSLATE_TARGET)
            .header(reqwest::header::CONTENT_TYPE, TRANSLATE_CONTENT_TYPE)
            .body(body);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.bearer_auth(api_key);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| SkillError::Gateway(format!("Network error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(SkillError::Gateway(format!(
                "Translation request failed: {} {}",
                status, detail
            )));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| SkillError::Gateway(format!("Malformed translation response: {}", e)))?;

        Ok(parsed.translated_text)
    }
}

/// Resolves the target language and calls the translation service.
///
/// The source language is always English.
#[derive(Clone)]
pub struct Translator {
    service: Arc<dyn TranslationService>,
}

impl Translator {
    pub fn new(service: Arc<dyn TranslationService>) -> Self {
        Self { service }
    }

    /// Translate `text` into the language called `language_name`.
    ///
    /// An empty or missing `text` is replaced with [`PLACEHOLDER_TEXT`].
    /// Unknown language names fail before the service is contacted.
    pub async fn translate(&self, language_name: &str, text: Option<&str>) -> Result<String> {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => PLACEHOLDER_TEXT,
        };

        let language = Language::resolve(language_name)?;

        let request = TranslateRequest {
            source_language_code: Language::English.code().to_string(),
            target_language_code: language.code().to_string(),
            text: text.to_string(),
        };

        let translated = self.service.translate_text(&request).await?;
        tracing::info!(language = language.code(), "Translated text: {}", translated);

        Ok(translated)
    }
}
