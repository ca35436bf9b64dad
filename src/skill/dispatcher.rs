// Dispatcher - routes each event to the first handler that accepts it

use super::error::SkillError;
use super::handlers::{ErrorHandler, HandlerRegistry};
use super::translator::Translator;
use super::types::{Event, Response};

/// Stateless router over the fixed handler list.
///
/// Exactly one response comes out of every [`Dispatcher::dispatch`] call:
/// either the selected handler's, or the error handler's apology when no
/// handler matched or the selected one failed.
pub struct Dispatcher {
    registry: HandlerRegistry,
    error_handler: ErrorHandler,
}

impl Dispatcher {
    pub fn new(translator: Translator) -> Self {
        Self {
            registry: HandlerRegistry::new(translator),
            error_handler: ErrorHandler,
        }
    }

    pub async fn dispatch(&self, event: &Event) -> Response {
        let Some(handler) = self.registry.select(event) else {
            let error = SkillError::NoHandlerMatched(event.describe());
            return self.recover(Some(event), &error);
        };

        tracing::debug!(
            request_id = %event.request_id,
            "Routing {} to {}",
            event.describe(),
            handler.handler_type().as_str()
        );

        // Run on its own task so a panicking handler cannot take the process down
        let owned_event = event.clone();
        let task = tokio::spawn(async move { handler.handle(&owned_event).await });

        match task.await {
            Ok(Ok(response)) => response,
            Ok(Err(error)) => self.recover(Some(event), &error),
            Err(join_error) => {
                let error = SkillError::HandlerFailed(join_error.to_string());
                self.recover(Some(event), &error)
            }
        }
    }

    /// Convert a failure into the error handler's response
    pub fn recover(&self, event: Option<&Event>, error: &SkillError) -> Response {
        debug_assert!(self.error_handler.can_handle(event, error));
        self.error_handler.handle(event, error)
    }
}
