// Skill core - request dispatch and the Translate dialog

pub mod dialog;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod languages;
pub mod runtime;
pub mod translator;
pub mod types;

pub use dialog::DialogState;
pub use dispatcher::Dispatcher;
pub use error::{Result, SkillError};
pub use languages::Language;
pub use runtime::{InvocationContext, SkillRuntime};
pub use translator::{HttpTranslationService, TranslationService, Translator};
pub use types::*;
