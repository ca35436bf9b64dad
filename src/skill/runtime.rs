// Runtime - process entry point holding the lazily built dispatcher

use super::dispatcher::Dispatcher;
use super::envelope::{RequestEnvelope, ResponseEnvelope};
use super::error::{Result, SkillError};
use super::handlers::{APOLOGY_TEXT, ErrorHandler};
use super::translator::{HttpTranslationService, TranslationService, Translator};
use crate::config::SkillConfig;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::Instrument;

/// Per-invocation metadata supplied by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    pub request_id: String,
    pub function_name: Option<String>,
}

impl InvocationContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            function_name: None,
        }
    }

    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = Some(name.into());
        self
    }
}

/// Entry point for inbound events.
///
/// The dispatcher is built on the first event and reused for every later
/// event handled by the same runtime. Concurrent first events build it once.
pub struct SkillRuntime {
    service: Arc<dyn TranslationService>,
    dispatcher: OnceCell<Dispatcher>,
}

impl SkillRuntime {
    /// Runtime talking to the translation service described by `config`.
    ///
    /// Fails when the translation endpoint is missing, before any event is taken.
    pub fn new(config: &SkillConfig) -> Result<Self> {
        let service = HttpTranslationService::new(&config.translate)?;
        tracing::info!("Translation endpoint: {}", service.endpoint());
        Ok(Self::with_service(Arc::new(service)))
    }

    /// Runtime using an already constructed translation service
    pub fn with_service(service: Arc<dyn TranslationService>) -> Self {
        Self {
            service,
            dispatcher: OnceCell::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.dispatcher.initialized()
    }

    /// The shared dispatcher, building it on first use
    pub async fn dispatcher(&self) -> &Dispatcher {
        self.dispatcher
            .get_or_init(|| async {
                tracing::info!("Building dispatcher");
                Dispatcher::new(Translator::new(self.service.clone()))
            })
            .await
    }

    /// Handle one raw platform event and return the raw platform response
    pub async fn on_event(&self, raw: Value, context: &InvocationContext) -> Value {
        let span = tracing::info_span!(
            "invocation",
            request_id = %context.request_id,
            function = context.function_name.as_deref().unwrap_or("local")
        );

        async move {
            tracing::info!("REQUEST {}", raw);

            let envelope = match RequestEnvelope::from_value(raw) {
                Ok(envelope) => self.on_envelope(&envelope).await,
                Err(e) => {
                    let error = SkillError::InvalidEvent(e.to_string());
                    let response = ErrorHandler.handle(None, &error);
                    ResponseEnvelope::new(&response, Default::default())
                }
            };

            let response = envelope.to_value().unwrap_or_else(|e| {
                tracing::error!("Failed to encode response: {}", e);
                apology_value()
            });

            tracing::info!("RESPONSE {}", response);
            response
        }
        .instrument(span)
        .await
    }

    /// Typed form of [`SkillRuntime::on_event`]
    pub async fn on_envelope(&self, envelope: &RequestEnvelope) -> ResponseEnvelope {
        let event = envelope.to_event();

        let response = self.dispatcher().await.dispatch(&event).await;

        ResponseEnvelope::new(&response, envelope.session_attributes())
    }
}

fn apology_value() -> Value {
    let speech = json!({ "type": "SSML", "ssml": format!("<speak>{}</speak>", APOLOGY_TEXT) });
    json!({
        "version": "1.0",
        "sessionAttributes": {},
        "response": {
            "outputSpeech": speech.clone(),
            "reprompt": { "outputSpeech": speech },
            "shouldEndSession": false
        }
    })
}
