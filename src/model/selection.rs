//! Cursor over a list whose length is owned elsewhere
//!
//! Used for the notes pane and the inspection issue list. The list length is
//! passed in with each message so the cursor never points past the end.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PreviousItemSelected { len: usize },
    NextItemSelected { len: usize },
    SelectionCleared,
    /// The list shrank; pull the cursor back inside it
    LengthChanged { len: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected_index: Option<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn is_selected(&self) -> bool {
        self.selected_index.is_some()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::PreviousItemSelected { len } => {
                if len > 0 {
                    self.selected_index =
                        Some(self.selected_index.map_or(0, |i| i.saturating_sub(1).min(len - 1)));
                }
            }
            Message::NextItemSelected { len } => match self.selected_index {
                Some(index) if index + 1 < len => {
                    self.selected_index = Some(index + 1);
                }
                None if len > 0 => {
                    self.selected_index = Some(0);
                }
                _ => {}
            },
            Message::SelectionCleared => {
                self.selected_index = None;
            }
            Message::LengthChanged { len } => {
                self.selected_index = match self.selected_index {
                    _ if len == 0 => None,
                    Some(index) if index >= len => Some(len - 1),
                    other => other,
                };
            }
        }
    }
}
