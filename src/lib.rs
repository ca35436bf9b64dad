//! Voice-assistant skill backend
//!
//! Receives voice-platform request envelopes, routes each one to exactly one
//! intent handler, drives the Translate slot-filling dialog and speaks back
//! the translated text.

pub mod config;
pub mod skill;

pub use config::SkillConfig;
pub use skill::{Dispatcher, InvocationContext, SkillRuntime};
