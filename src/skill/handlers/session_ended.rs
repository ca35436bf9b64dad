// Session Ended Handler - records why the platform closed the session

use super::{Handler, HandlerType};
use crate::skill::error::Result;
use crate::skill::types::{Event, RequestType, Response};
use async_trait::async_trait;

pub struct SessionEndedHandler;

#[async_trait]
impl Handler for SessionEndedHandler {
    fn can_handle(&self, event: &Event) -> bool {
        event.request_type == RequestType::SessionEndedRequest
    }

    async fn handle(&self, event: &Event) -> Result<Response> {
        tracing::info!(
            "Session ended with reason: {}",
            event.session_end_reason.as_deref().unwrap_or("unknown")
        );

        Ok(Response::empty())
    }

    fn handler_type(&self) -> HandlerType {
        HandlerType::SessionEnded
    }
}
