// Cancel/Stop Handler - says goodbye and closes the session

use super::{Handler, HandlerType};
use crate::skill::error::Result;
use crate::skill::types::{CANCEL_INTENT, Event, Response, STOP_INTENT};
use async_trait::async_trait;

pub const GOODBYE_TEXT: &str = "Goodbye, Serverless Guru!";

pub struct CancelAndStopHandler;

#[async_trait]
impl Handler for CancelAndStopHandler {
    fn can_handle(&self, event: &Event) -> bool {
        event.is_intent(CANCEL_INTENT) || event.is_intent(STOP_INTENT)
    }

    async fn handle(&self, _event: &Event) -> Result<Response> {
        Ok(Response::empty()
            .speak(GOODBYE_TEXT)
            .with_simple_card(GOODBYE_TEXT, GOODBYE_TEXT)
            .with_should_end_session(true))
    }

    fn handler_type(&self) -> HandlerType {
        HandlerType::CancelAndStop
    }
}
