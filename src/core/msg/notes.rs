use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotesMsg {
    /// Add the editor draft, stamped with the current local time
    Submit,
    /// Add `content` stamped with `at`
    Add { content: String, at: NaiveDateTime },
    EditSelected,
    DeleteSelected,
}
