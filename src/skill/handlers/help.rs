// Help Handler - explains what the skill can do

use super::{Handler, HandlerType};
use crate::skill::error::Result;
use crate::skill::types::{Event, HELP_INTENT, Response};
use async_trait::async_trait;

pub const HELP_TEXT: &str = "You can ask me to translate something!";

pub struct HelpHandler;

#[async_trait]
impl Handler for HelpHandler {
    fn can_handle(&self, event: &Event) -> bool {
        event.is_intent(HELP_INTENT)
    }

    async fn handle(&self, _event: &Event) -> Result<Response> {
        Ok(Response::empty()
            .speak(HELP_TEXT)
            .reprompt(HELP_TEXT)
            .with_simple_card(HELP_TEXT, HELP_TEXT))
    }

    fn handler_type(&self) -> HandlerType {
        HandlerType::Help
    }
}
