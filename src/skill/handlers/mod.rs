// Intent handler implementations

mod cancel;
mod fallback;
mod help;
mod launch;
mod session_ended;
mod translate;

pub use cancel::CancelAndStopHandler;
pub use fallback::{APOLOGY_TEXT, ErrorHandler};
pub use help::HelpHandler;
pub use launch::LaunchHandler;
pub use session_ended::SessionEndedHandler;
pub use translate::{TranslateCompletedHandler, TranslateStartHandler};

use super::error::Result;
use super::translator::Translator;
use super::types::{Event, Response};
use async_trait::async_trait;
use std::sync::Arc;

/// A unit that can own one turn of the conversation
#[async_trait]
pub trait Handler: Send + Sync {
    /// Whether this handler owns the given event
    fn can_handle(&self, event: &Event) -> bool;

    /// Produce the response for an event this handler owns
    async fn handle(&self, event: &Event) -> Result<Response>;

    fn handler_type(&self) -> HandlerType;
}

/// The fixed set of request handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerType {
    Launch,
    TranslateStart,
    TranslateCompleted,
    Help,
    CancelAndStop,
    SessionEnded,
}

impl HandlerType {
    /// Evaluation order; the first handler that matches owns the turn
    pub const ORDER: [HandlerType; 6] = [
        HandlerType::Launch,
        HandlerType::TranslateStart,
        HandlerType::TranslateCompleted,
        HandlerType::Help,
        HandlerType::CancelAndStop,
        HandlerType::SessionEnded,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            HandlerType::Launch => "LaunchRequestHandler",
            HandlerType::TranslateStart => "TranslateStartHandler",
            HandlerType::TranslateCompleted => "TranslateCompletedHandler",
            HandlerType::Help => "HelpIntentHandler",
            HandlerType::CancelAndStop => "CancelAndStopIntentHandler",
            HandlerType::SessionEnded => "SessionEndedRequestHandler",
        }
    }
}

/// Ordered handler list, fixed at construction
pub struct HandlerRegistry {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerRegistry {
    pub fn new(translator: Translator) -> Self {
        let handlers: Vec<Arc<dyn Handler>> = vec![
            Arc::new(LaunchHandler),
            Arc::new(TranslateStartHandler),
            Arc::new(TranslateCompletedHandler::new(translator)),
            Arc::new(HelpHandler),
            Arc::new(CancelAndStopHandler),
            Arc::new(SessionEndedHandler),
        ];

        Self { handlers }
    }

    /// First handler whose predicate accepts the event
    pub fn select(&self, event: &Event) -> Option<Arc<dyn Handler>> {
        self.handlers.iter().find(|h| h.can_handle(event)).cloned()
    }

    /// Every handler whose predicate accepts the event, in order
    pub fn matching(&self, event: &Event) -> Vec<HandlerType> {
        self.handlers
            .iter()
            .filter(|h| h.can_handle(event))
            .map(|h| h.handler_type())
            .collect()
    }

    pub fn handler_types(&self) -> Vec<HandlerType> {
        self.handlers.iter().map(|h| h.handler_type()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::dialog::DialogState;
    use crate::skill::translator::stub::RecordingService;
    use crate::skill::types::*;

    fn registry() -> HandlerRegistry {
        HandlerRegistry::new(Translator::new(RecordingService::replying("ok")))
    }

    #[test]
    fn test_registry_order() {
        assert_eq!(registry().handler_types(), HandlerType::ORDER.to_vec());
    }

    #[test]
    fn test_predicates_are_mutually_exclusive() {
        let registry = registry();
        let events = vec![
            Event::launch(),
            Event::session_ended("USER_INITIATED"),
            Event::intent(HELP_INTENT),
            Event::intent(CANCEL_INTENT),
            Event::intent(STOP_INTENT),
            Event::intent(TRANSLATE_INTENT),
            Event::intent(TRANSLATE_INTENT).with_dialog_state(DialogState::Started),
            Event::intent(TRANSLATE_INTENT).with_dialog_state(DialogState::InProgress),
            Event::intent(TRANSLATE_INTENT).with_dialog_state(DialogState::Completed),
        ];

        for event in events {
            assert_eq!(registry.matching(&event).len(), 1, "{}", event.describe());
        }
    }

    #[test]
    fn test_unknown_events_match_nothing() {
        let registry = registry();
        assert!(registry.select(&Event::intent("AMAZON.FallbackIntent")).is_none());
        assert!(registry.select(&Event::new(RequestType::Unknown("Connections.Response".into()))).is_none());
    }

    #[test]
    fn test_select_by_dialog_state() {
        let registry = registry();
        let started = Event::intent(TRANSLATE_INTENT).with_dialog_state(DialogState::Started);
        let completed = Event::intent(TRANSLATE_INTENT).with_dialog_state(DialogState::Completed);

        assert_eq!(registry.select(&started).unwrap().handler_type(), HandlerType::TranslateStart);
        assert_eq!(registry.select(&completed).unwrap().handler_type(), HandlerType::TranslateCompleted);
    }
}
