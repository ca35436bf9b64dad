// Core types for the skill - events in, responses out

use super::dialog::DialogState;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;

pub const TRANSLATE_INTENT: &str = "Translate";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";

pub const WORD_SLOT: &str = "word";
pub const LANGUAGE_SLOT: &str = "language";

/// Kind of request the platform delivered
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestType {
    LaunchRequest,
    IntentRequest,
    SessionEndedRequest,
    /// Any request type the skill has no handler for
    Unknown(String),
}

impl RequestType {
    pub fn from_wire(kind: &str) -> Self {
        match kind {
            "LaunchRequest" => RequestType::LaunchRequest,
            "IntentRequest" => RequestType::IntentRequest,
            "SessionEndedRequest" => RequestType::SessionEndedRequest,
            other => RequestType::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RequestType::LaunchRequest => "LaunchRequest",
            RequestType::IntentRequest => "IntentRequest",
            RequestType::SessionEndedRequest => "SessionEndedRequest",
            RequestType::Unknown(kind) => kind,
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single inbound request, already classified by the platform
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub request_type: RequestType,
    pub request_id: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub locale: Option<String>,
    pub intent_name: Option<String>,
    pub dialog_state: DialogState,
    pub slots: HashMap<String, String>,
    pub session_end_reason: Option<String>,
}

impl Event {
    pub fn new(request_type: RequestType) -> Self {
        Self {
            request_type,
            request_id: String::new(),
            timestamp: None,
            locale: None,
            intent_name: None,
            dialog_state: DialogState::NotStarted,
            slots: HashMap::new(),
            session_end_reason: None,
        }
    }

    pub fn launch() -> Self {
        Self::new(RequestType::LaunchRequest)
    }

    pub fn intent(name: impl Into<String>) -> Self {
        let mut event = Self::new(RequestType::IntentRequest);
        event.intent_name = Some(name.into());
        event
    }

    pub fn session_ended(reason: impl Into<String>) -> Self {
        let mut event = Self::new(RequestType::SessionEndedRequest);
        event.session_end_reason = Some(reason.into());
        event
    }

    pub fn with_dialog_state(mut self, state: DialogState) -> Self {
        self.dialog_state = state;
        self
    }

    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }

    /// True for an intent request carrying the given intent name
    pub fn is_intent(&self, name: &str) -> bool {
        self.request_type == RequestType::IntentRequest && self.intent_name.as_deref() == Some(name)
    }

    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(|s| s.as_str())
    }

    /// Short description used in logs and routing errors
    pub fn describe(&self) -> String {
        match &self.intent_name {
            Some(intent) => format!("{} ({})", self.request_type, intent),
            None => self.request_type.to_string(),
        }
    }
}

/// Visual card shown alongside speech on devices with a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub content: String,
}

/// Instructions for the platform beyond plain speech
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Let the platform keep eliciting slots for the current intent
    DialogDelegate,
}

/// Output of one handled turn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub speech_text: Option<String>,
    pub reprompt_text: Option<String>,
    pub card: Option<Card>,
    pub should_end_session: Option<bool>,
    pub directives: Vec<Directive>,
}

impl Response {
    /// Response with no speech, card or directives
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.speech_text = Some(text.into());
        self
    }

    /// Set a reprompt, which also keeps the session open
    pub fn reprompt(mut self, text: impl Into<String>) -> Self {
        self.reprompt_text = Some(text.into());
        self.should_end_session = Some(false);
        self
    }

    pub fn with_simple_card(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.card = Some(Card {
            title: title.into(),
            content: content.into(),
        });
        self
    }

    pub fn with_should_end_session(mut self, end: bool) -> Self {
        self.should_end_session = Some(end);
        self
    }

    pub fn add_delegate_directive(mut self) -> Self {
        self.directives.push(Directive::DialogDelegate);
        self
    }

    pub fn delegates_to_platform(&self) -> bool {
        self.directives.contains(&Directive::DialogDelegate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reprompt_keeps_session_open() {
        let response = Response::empty().speak("hi").reprompt("hi");
        assert_eq!(response.should_end_session, Some(false));

        let ended = Response::empty().reprompt("hi").with_should_end_session(true);
        assert_eq!(ended.should_end_session, Some(true));
    }

    #[test]
    fn test_empty_response_leaves_session_flag_unset() {
        let response = Response::empty();
        assert!(response.speech_text.is_none());
        assert!(response.should_end_session.is_none());
        assert!(!response.delegates_to_platform());
    }

    #[test]
    fn test_is_intent_requires_intent_request() {
        let event = Event::intent(TRANSLATE_INTENT);
        assert!(event.is_intent(TRANSLATE_INTENT));
        assert!(!event.is_intent(HELP_INTENT));

        let mut launch = Event::launch();
        launch.intent_name = Some(TRANSLATE_INTENT.to_string());
        assert!(!launch.is_intent(TRANSLATE_INTENT));
    }

    #[test]
    fn test_request_type_from_wire() {
        assert_eq!(RequestType::from_wire("LaunchRequest"), RequestType::LaunchRequest);
        assert_eq!(
            RequestType::from_wire("CanFulfillIntentRequest"),
            RequestType::Unknown("CanFulfillIntentRequest".to_string())
        );
    }
}
