// Launch Handler - greets the user when the skill is opened

use super::{Handler, HandlerType};
use crate::skill::error::Result;
use crate::skill::types::{Event, RequestType, Response};
use async_trait::async_trait;

pub const WELCOME_TEXT: &str = "Welcome, this is an example skill! Start by saying translate";
pub const WELCOME_CARD_TITLE: &str = "Welcome";

pub struct LaunchHandler;

#[async_trait]
impl Handler for LaunchHandler {
    fn can_handle(&self, event: &Event) -> bool {
        event.request_type == RequestType::LaunchRequest
    }

    async fn handle(&self, _event: &Event) -> Result<Response> {
        Ok(Response::empty()
            .speak(WELCOME_TEXT)
            .reprompt(WELCOME_TEXT)
            .with_simple_card(WELCOME_CARD_TITLE, WELCOME_TEXT))
    }

    fn handler_type(&self) -> HandlerType {
        HandlerType::Launch
    }
}
