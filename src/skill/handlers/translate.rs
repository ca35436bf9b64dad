// Translate Handlers - slot elicitation, then translation once the dialog completes

use super::{Handler, HandlerType};
use crate::skill::error::{Result, SkillError};
use crate::skill::translator::Translator;
use crate::skill::types::{Event, LANGUAGE_SLOT, Response, TRANSLATE_INTENT, WORD_SLOT};
use async_trait::async_trait;

/// Hands the turn back to the platform until every slot is filled
pub struct TranslateStartHandler;

#[async_trait]
impl Handler for TranslateStartHandler {
    fn can_handle(&self, event: &Event) -> bool {
        event.is_intent(TRANSLATE_INTENT) && !event.dialog_state.is_completed()
    }

    async fn handle(&self, event: &Event) -> Result<Response> {
        tracing::debug!(dialog_state = ?event.dialog_state, "Delegating slot elicitation");
        Ok(Response::empty().add_delegate_directive())
    }

    fn handler_type(&self) -> HandlerType {
        HandlerType::TranslateStart
    }
}

/// Translates the collected word and speaks the result
pub struct TranslateCompletedHandler {
    translator: Translator,
}

impl TranslateCompletedHandler {
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }
}

#[async_trait]
impl Handler for TranslateCompletedHandler {
    fn can_handle(&self, event: &Event) -> bool {
        event.is_intent(TRANSLATE_INTENT) && event.dialog_state.is_completed()
    }

    async fn handle(&self, event: &Event) -> Result<Response> {
        let word = event.slot(WORD_SLOT);
        let language = event.slot(LANGUAGE_SLOT);
        tracing::debug!(?word, ?language, "Translate slots");

        let language = language.ok_or_else(|| SkillError::MissingSlot(LANGUAGE_SLOT.to_string()))?;

        // Failures propagate to the dispatcher's error handler
        let translated = self.translator.translate(language, word).await?;

        Ok(Response::empty().speak(&translated).reprompt(&translated))
    }

    fn handler_type(&self) -> HandlerType {
        HandlerType::TranslateCompleted
    }
}
