use serde::{Deserialize, Serialize};

use crate::domain::claim::ImageRef;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightboxMsg {
    Show(Vec<ImageRef>),
    /// Show every image of the selected inspection issue
    ShowSelectedIssue,
    Dismiss,
    ScrollUp,
    ScrollDown,
}
