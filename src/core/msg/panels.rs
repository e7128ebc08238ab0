use serde::{Deserialize, Serialize};

use crate::model::panels::PanelId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelsMsg {
    Open(PanelId),
    Close(PanelId),
    Toggle(PanelId),
    CloseTopmost,
}
