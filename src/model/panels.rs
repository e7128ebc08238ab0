//! Panel visibility model
//!
//! One open/closed flag per overlay surface. Panels are independent: opening
//! one never closes another, and any number can be open at once.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Overlay surfaces, in the order they are drawn
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum PanelId {
    Delivery,
    Inspection,
    Invoice,
    Product,
    #[strum(to_string = "Linked Claims")]
    LinkedClaims,
    #[strum(to_string = "Product Details")]
    ProductDetails,
}

/// How a panel is laid out on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Slides in from the right edge
    Drawer,
    /// Centered dialog
    Modal,
}

impl PanelId {
    pub fn kind(&self) -> PanelKind {
        match self {
            PanelId::Delivery | PanelId::Invoice | PanelId::LinkedClaims => PanelKind::Drawer,
            PanelId::Inspection | PanelId::Product | PanelId::ProductDetails => PanelKind::Modal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Opened(PanelId),
    Closed(PanelId),
    Toggled(PanelId),
    /// Close the open panel that is drawn on top
    TopmostClosed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panels {
    open: HashMap<PanelId, bool>,
}

impl Panels {
    pub fn new() -> Self {
        Self {
            open: PanelId::iter().map(|id| (id, false)).collect(),
        }
    }

    pub fn is_open(&self, id: PanelId) -> bool {
        self.open.get(&id).copied().unwrap_or(false)
    }

    /// Open panels in draw order
    pub fn open_panels(&self) -> Vec<PanelId> {
        PanelId::iter().filter(|id| self.is_open(*id)).collect()
    }

    pub fn any_open(&self) -> bool {
        self.open.values().any(|open| *open)
    }

    pub fn topmost(&self) -> Option<PanelId> {
        self.open_panels().last().copied()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Opened(id) => {
                self.open.insert(id, true);
            }
            Message::Closed(id) => {
                self.open.insert(id, false);
            }
            Message::Toggled(id) => {
                let open = self.is_open(id);
                self.open.insert(id, !open);
            }
            Message::TopmostClosed => {
                if let Some(id) = self.topmost() {
                    self.open.insert(id, false);
                }
            }
        }
    }
}

impl Default for Panels {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_all_closed_by_default() {
        let panels = Panels::new();
        assert!(PanelId::iter().all(|id| !panels.is_open(id)));
        assert!(!panels.any_open());
        assert_eq!(panels.topmost(), None);
    }

    #[rstest]
    fn test_open_then_close_restores_closed(
        #[values(
            PanelId::Delivery,
            PanelId::Inspection,
            PanelId::Invoice,
            PanelId::Product,
            PanelId::LinkedClaims,
            PanelId::ProductDetails
        )]
        id: PanelId,
    ) {
        let mut panels = Panels::new();
        panels.update(Message::Opened(id));
        assert!(panels.is_open(id));
        panels.update(Message::Closed(id));
        assert!(!panels.is_open(id));
    }

    #[test]
    fn test_panels_are_pairwise_independent() {
        for a in PanelId::iter() {
            for b in PanelId::iter().filter(|b| *b != a) {
                for b_open in [false, true] {
                    let mut panels = Panels::new();
                    if b_open {
                        panels.update(Message::Opened(b));
                    }

                    panels.update(Message::Opened(a));
                    assert_eq!(panels.is_open(b), b_open, "opening {a} changed {b}");

                    panels.update(Message::Closed(a));
                    assert_eq!(panels.is_open(b), b_open, "closing {a} changed {b}");
                }
            }
        }
    }

    #[test]
    fn test_multiple_panels_open_at_once() {
        let mut panels = Panels::new();
        panels.update(Message::Opened(PanelId::Invoice));
        panels.update(Message::Opened(PanelId::Delivery));
        panels.update(Message::Opened(PanelId::ProductDetails));

        assert_eq!(
            panels.open_panels(),
            vec![PanelId::Delivery, PanelId::Invoice, PanelId::ProductDetails]
        );
    }

    #[test]
    fn test_toggled() {
        let mut panels = Panels::new();
        panels.update(Message::Toggled(PanelId::Product));
        assert!(panels.is_open(PanelId::Product));
        panels.update(Message::Toggled(PanelId::Product));
        assert!(!panels.is_open(PanelId::Product));
    }

    #[test]
    fn test_topmost_closed_follows_draw_order() {
        let mut panels = Panels::new();
        panels.update(Message::Opened(PanelId::LinkedClaims));
        panels.update(Message::Opened(PanelId::Delivery));

        panels.update(Message::TopmostClosed);
        assert_eq!(panels.open_panels(), vec![PanelId::Delivery]);

        panels.update(Message::TopmostClosed);
        assert!(!panels.any_open());

        // Nothing left to close
        panels.update(Message::TopmostClosed);
        assert!(!panels.any_open());
    }

    #[test]
    fn test_opening_twice_is_idempotent() {
        let mut panels = Panels::new();
        panels.update(Message::Opened(PanelId::Inspection));
        panels.update(Message::Opened(PanelId::Inspection));
        assert_eq!(panels.open_panels(), vec![PanelId::Inspection]);
    }

    #[test]
    fn test_panel_kinds() {
        assert_eq!(PanelId::Delivery.kind(), PanelKind::Drawer);
        assert_eq!(PanelId::ProductDetails.kind(), PanelKind::Modal);
        assert_eq!(PanelId::LinkedClaims.to_string(), "Linked Claims");
    }
}
