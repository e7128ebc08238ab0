//! Panels and the image lightbox
//!
//! Open panels are drawn over the body in `PanelId` order, so the last one
//! drawn is the one Esc closes. The lightbox is drawn over everything.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    domain::claim::{Claim, Field},
    model::panels::{PanelId, PanelKind},
    presentation::widgets::{
        fields::FieldsWidget,
        image_list::ImageListWidget,
        overlay::{centered_rect, drawer_rect, frame_overlay},
    },
};

const DRAWER_WIDTH_PERCENT: u16 = 45;
const MODAL_WIDTH_PERCENT: u16 = 60;
const MODAL_HEIGHT_PERCENT: u16 = 60;
const LIGHTBOX_PERCENT: u16 = 80;

/// Fixed claim data shown by a panel
pub fn panel_fields(claim: &Claim, panel: PanelId) -> Vec<Field> {
    match panel {
        PanelId::Delivery => claim.delivery.clone(),
        PanelId::Invoice => claim.invoice.clone(),
        PanelId::Product => claim.product.clone(),
        PanelId::ProductDetails => claim.product_details.clone(),
        PanelId::Inspection => {
            let mut fields = claim.inspection.clone();
            fields.extend(
                claim
                    .inspection_issues
                    .iter()
                    .enumerate()
                    .map(|(i, issue)| Field::new(format!("Issue {}", i + 1), &issue.title)),
            );
            fields
        }
        PanelId::LinkedClaims => claim
            .linked_claims
            .iter()
            .map(|linked| {
                Field::new(
                    &linked.number,
                    format!("{} ({})", linked.reason, linked.status),
                )
            })
            .collect(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct OverlaysComponent;

impl OverlaysComponent {
    pub fn new() -> Self {
        Self
    }

    /// Open panels over `body`
    pub fn view_panels(&self, state: &AppState, frame: &mut Frame, body: Rect) {
        let styles = &state.config.config.styles;
        for panel in state.panels.open_panels() {
            let area = match panel.kind() {
                PanelKind::Drawer => drawer_rect(DRAWER_WIDTH_PERCENT, body),
                PanelKind::Modal => centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, body),
            };
            let inner = frame_overlay(
                &panel.to_string(),
                styles.style("panel_border"),
                area,
                frame.buffer_mut(),
            );
            let fields = panel_fields(&state.claim, panel);
            frame.render_widget(
                FieldsWidget::new(&fields).label_style(styles.style("header_label")),
                inner,
            );
        }
    }

    /// The lightbox over the whole screen, when open
    pub fn view_lightbox(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if !state.lightbox.is_open() {
            return;
        }
        let styles = &state.config.config.styles;
        let area = centered_rect(LIGHTBOX_PERCENT, LIGHTBOX_PERCENT, area);
        let title = format!("Photos ({})", state.lightbox.selected_group().len());
        let inner = frame_overlay(
            &title,
            styles.style("lightbox_border"),
            area,
            frame.buffer_mut(),
        );
        frame.render_widget(
            ImageListWidget::new(state.lightbox.selected_group(), state.lightbox.scroll())
                .caption_style(styles.style("header_value")),
            inner,
        );
    }
}
