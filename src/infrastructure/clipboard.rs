use std::sync::{Arc, Mutex};

use color_eyre::eyre::{eyre, Result};

/// Destination for copied values
pub trait Clipboard: Send {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Platform clipboard via `arboard`.
///
/// A new handle is opened for every copy; holding one for the lifetime of
/// the app keeps an X11 connection open for nothing.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// In-memory clipboard for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    history: Arc<Mutex<Vec<String>>>,
    failing: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every copy
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Every value copied so far, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|history| history.clone())
            .unwrap_or_default()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.failing {
            return Err(eyre!("clipboard unavailable"));
        }
        self.history
            .lock()
            .map_err(|_| eyre!("clipboard history poisoned"))?
            .push(text.to_string());
        Ok(())
    }
}
