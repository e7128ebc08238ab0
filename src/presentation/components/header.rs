//! Claim header
//!
//! One line of label/value blocks summarising the claim.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let label_style = styles.style("header_label");
        let value_style = styles.style("header_value");

        let mut spans = Vec::new();
        for (i, field) in state.claim.summary().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(format!("{} ", field.label), label_style));
            spans.push(Span::styled(field.value, value_style));
        }

        let header = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, area);
    }
}
