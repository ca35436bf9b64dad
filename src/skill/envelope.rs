// Envelope - the voice platform's JSON request and response contract
//
// Field names follow the platform byte-for-byte; unknown fields are ignored.

use super::dialog::DialogState;
use super::types::{Directive, Event, RequestType, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

pub const RESPONSE_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    pub request: Request,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub new: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_state: Option<DialogState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    /// Why the session ended, only on `SessionEndedRequest`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RequestError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestError {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: String,
}

impl RequestEnvelope {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Session attributes to echo back in the response
    pub fn session_attributes(&self) -> Map<String, Value> {
        self.session
            .as_ref()
            .and_then(|s| s.attributes.clone())
            .unwrap_or_default()
    }

    /// Flatten the envelope into the domain event the handlers see
    pub fn to_event(&self) -> Event {
        let request = &self.request;
        let mut event = Event::new(RequestType::from_wire(&request.kind));

        event.request_id = request.request_id.clone();
        event.timestamp = request.timestamp;
        event.locale = request.locale.clone();

        if event.request_type == RequestType::IntentRequest {
            event.dialog_state = request.dialog_state.unwrap_or_default();

            if let Some(intent) = &request.intent {
                event.intent_name = Some(intent.name.clone());
                // A slot without a value is the same as an absent slot
                event.slots = intent
                    .slots
                    .iter()
                    .filter_map(|(name, slot)| slot.value.clone().map(|v| (name.clone(), v)))
                    .collect();
            }
        }

        if event.request_type == RequestType::SessionEndedRequest {
            event.session_end_reason = request.reason.clone();
        }

        event
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: Map<String, Value>,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<WireCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directives: Option<Vec<WireDirective>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub ssml: String,
}

impl OutputSpeech {
    pub fn ssml(text: &str) -> Self {
        Self {
            kind: "SSML".to_string(),
            ssml: format!("<speak>{}</speak>", escape_ssml(text.trim())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WireCard {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WireDirective {
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&Directive> for WireDirective {
    fn from(directive: &Directive) -> Self {
        let kind = match directive {
            Directive::DialogDelegate => "Dialog.Delegate",
        };
        Self {
            kind: kind.to_string(),
        }
    }
}

impl From<&Response> for ResponseBody {
    fn from(response: &Response) -> Self {
        Self {
            output_speech: response.speech_text.as_deref().map(OutputSpeech::ssml),
            reprompt: response.reprompt_text.as_deref().map(|text| Reprompt {
                output_speech: OutputSpeech::ssml(text),
            }),
            card: response.card.as_ref().map(|card| WireCard {
                kind: "Simple".to_string(),
                title: card.title.clone(),
                content: card.content.clone(),
            }),
            should_end_session: response.should_end_session,
            directives: if response.directives.is_empty() {
                None
            } else {
                Some(response.directives.iter().map(WireDirective::from).collect())
            },
        }
    }
}

impl ResponseEnvelope {
    pub fn new(response: &Response, session_attributes: Map<String, Value>) -> Self {
        Self {
            version: RESPONSE_VERSION.to_string(),
            session_attributes,
            response: ResponseBody::from(response),
        }
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

fn escape_ssml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
