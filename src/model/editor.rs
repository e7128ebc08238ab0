use crossterm::event::KeyEvent;
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

/// Pending note input
///
/// The draft survives `ComposingCanceled`; it is only discarded once the
/// note has been added.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ComposingStarted,
    ComposingCanceled,
    KeyEventReceived { event: KeyEvent },
    /// The draft was turned into a note
    Submitted,
}

#[derive(Debug, Clone, Default)]
pub struct Editor {
    is_active: bool,
    textarea: TextArea<'static>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Whether submitting now would add a note
    pub fn can_submit(&self) -> bool {
        self.is_active && !self.content().trim().is_empty()
    }

    fn clear_content(&mut self) {
        // Recreating the TextArea is the only way to also drop its undo history;
        // select_all() + delete_str() leaves an undo entry that restores an
        // invalid cursor.
        let block = self.textarea.block().cloned();
        self.textarea = TextArea::default();
        if let Some(block) = block {
            self.textarea.set_block(block);
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ComposingStarted => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .title("New note: Enter to add, Esc to close");
                self.textarea.set_block(block);
                self.is_active = true;
            }
            Message::ComposingCanceled => {
                self.is_active = false;
            }
            Message::KeyEventReceived { event } => {
                if self.is_active {
                    self.textarea.input(event);
                }
            }
            Message::Submitted => {
                self.clear_content();
                self.is_active = false;
            }
        }
    }
}
