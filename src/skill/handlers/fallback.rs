// Error Handler - turns any failure into a spoken apology

use crate::skill::error::SkillError;
use crate::skill::types::{Event, Response};

pub const APOLOGY_TEXT: &str = "Sorry, I don't understand your command. Please say it again.";

/// Last-resort handler; matches every failure and never fails itself
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn can_handle(&self, _event: Option<&Event>, _error: &SkillError) -> bool {
        true
    }

    pub fn handle(&self, event: Option<&Event>, error: &SkillError) -> Response {
        match event {
            Some(event) => tracing::warn!(
                request_id = %event.request_id,
                "Error handled for {}: {}",
                event.describe(),
                error
            ),
            None => tracing::warn!("Error handled: {}", error),
        }

        Response::empty().speak(APOLOGY_TEXT).reprompt(APOLOGY_TEXT)
    }
}
