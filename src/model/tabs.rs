//! Content tab model
//!
//! Tracks which of a fixed number of content blocks is active. Exactly one
//! index is active at any time; out-of-range selections are ignored.

use strum::{Display, EnumCount, EnumIter, FromRepr, IntoEnumIterator};

/// The content blocks the claim view declares, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, FromRepr)]
pub enum ContentTab {
    #[strum(to_string = "Inspection Details")]
    InspectionDetails,
    #[strum(to_string = "Ordered Actions")]
    OrderedActions,
    #[strum(to_string = "Product Details")]
    ProductDetails,
}

impl ContentTab {
    pub fn titles() -> Vec<String> {
        Self::iter().map(|tab| tab.to_string()).collect()
    }
}

/// Following Elm conventions, messages are named in past tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    TabSelected { index: usize },
    NextTabSelected,
    PreviousTabSelected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tabs {
    len: usize,
    active_index: usize,
}

impl Tabs {
    /// Create a tab set with `len` tabs, the first one active.
    ///
    /// A tab set always has at least one tab.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            active_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index == index
    }

    /// The active tab as a [`ContentTab`], when this tab set mirrors the claim view
    pub fn active_content(&self) -> Option<ContentTab> {
        ContentTab::from_repr(self.active_index)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::TabSelected { index } => {
                if index < self.len {
                    self.active_index = index;
                }
            }
            Message::NextTabSelected => {
                if self.active_index < self.len - 1 {
                    self.active_index += 1;
                }
            }
            Message::PreviousTabSelected => {
                self.active_index = self.active_index.saturating_sub(1);
            }
        }
    }
}

impl Default for Tabs {
    fn default() -> Self {
        Self::new(ContentTab::COUNT)
    }
}
