use serde::{Deserialize, Serialize};

pub mod lightbox;
pub mod notes;
pub mod panels;
pub mod system;
pub mod tabs;
pub mod ui;

use lightbox::LightboxMsg;
use notes::NotesMsg;
use panels::PanelsMsg;
use system::SystemMsg;
use tabs::TabsMsg;
use ui::UiMsg;

/// Domain messages representing what the reviewer asked for.
/// These are processed by the update function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    System(SystemMsg),
    Tabs(TabsMsg),
    Notes(NotesMsg),
    Panels(PanelsMsg),
    Lightbox(LightboxMsg),
    Ui(UiMsg),
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::panels::PanelId;

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_ne!(Msg::Tabs(TabsMsg::Next), Msg::Tabs(TabsMsg::Previous));
    }

    #[test]
    fn test_msg_serialization() -> Result<()> {
        let msg = Msg::Panels(PanelsMsg::Toggle(PanelId::LinkedClaims));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
