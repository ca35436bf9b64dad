// Dialog state - platform-tracked progress of slot filling for one intent

use serde::{Deserialize, Serialize};

/// Progress of a multi-turn slot-filling dialog.
///
/// The platform owns every transition; the skill only observes the state it
/// is handed and acts once it sees `Completed`.
///
/// | from         | allowed next states               |
/// |--------------|-----------------------------------|
/// | `NotStarted` | `Started`, `Completed`            |
/// | `Started`    | `InProgress`, `Completed`         |
/// | `InProgress` | `InProgress`, `Completed`         |
/// | `Completed`  | (terminal for this intent)        |
///
/// `NotStarted` never appears on the wire: it is what an intent request
/// without a `dialogState` field maps to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DialogState {
    #[default]
    NotStarted,
    Started,
    InProgress,
    Completed,
}

impl DialogState {
    /// States the platform may move the dialog into from `self`
    pub fn next_states(&self) -> &'static [DialogState] {
        match self {
            DialogState::NotStarted => &[DialogState::Started, DialogState::Completed],
            DialogState::Started => &[DialogState::InProgress, DialogState::Completed],
            DialogState::InProgress => &[DialogState::InProgress, DialogState::Completed],
            DialogState::Completed => &[],
        }
    }

    pub fn can_transition_to(&self, next: DialogState) -> bool {
        self.next_states().contains(&next)
    }

    /// Whether every required slot has been collected
    pub fn is_completed(&self) -> bool {
        matches!(self, DialogState::Completed)
    }

    /// Wire form used by the platform, `None` for `NotStarted`
    pub fn as_wire(&self) -> Option<&'static str> {
        match self {
            DialogState::NotStarted => None,
            DialogState::Started => Some("STARTED"),
            DialogState::InProgress => Some("IN_PROGRESS"),
            DialogState::Completed => Some("COMPLETED"),
        }
    }
}
