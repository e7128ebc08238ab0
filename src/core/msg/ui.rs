use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// What a copy key puts on the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyTarget {
    ClaimNumber,
    OrderNumber,
}

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    ToggleFocus,
    SelectNext,
    SelectPrevious,
    ClearSelection,

    StartComposing,
    CancelComposing,
    ProcessTextAreaInput(KeyEvent),

    /// Keys typed so far towards a multi-key binding; empty once resolved
    PendingKeysChanged(Vec<KeyEvent>),

    Copy(CopyTarget),
}
