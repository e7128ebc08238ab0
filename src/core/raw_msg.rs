use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Raw messages from the terminal host.
/// These are translated into domain messages before they reach `update`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    Key(KeyEvent),

    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages while logging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).is_frequent());
    }
}
