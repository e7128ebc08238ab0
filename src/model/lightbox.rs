//! Image lightbox model
//!
//! Holds the image group picked from an inspection issue and whether the
//! enlarged view is open. Dismissing keeps the last group around.

use crate::domain::claim::ImageRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A thumbnail was picked; carries every image of its group
    Shown(Vec<ImageRef>),
    Dismissed,
    ScrolledUp,
    ScrolledDown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    selected_group: Vec<ImageRef>,
    is_open: bool,
    scroll: usize,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn selected_group(&self) -> &[ImageRef] {
        &self.selected_group
    }

    /// Index of the first image shown in the list
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Shown(group) => {
                if group.is_empty() {
                    return;
                }
                self.selected_group = group;
                self.is_open = true;
                self.scroll = 0;
            }
            Message::Dismissed => {
                self.is_open = false;
            }
            Message::ScrolledUp => {
                if self.is_open {
                    self.scroll = self.scroll.saturating_sub(1);
                }
            }
            Message::ScrolledDown => {
                if self.is_open && self.scroll + 1 < self.selected_group.len() {
                    self.scroll += 1;
                }
            }
        }
    }
}
