//! Content tabs
//!
//! The tab bar and the block of the active tab. Only the active block is
//! drawn; the other tabs are not rendered at all.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, Focus},
    domain::claim::Field,
    model::tabs::ContentTab,
    presentation::widgets::{fields::FieldsWidget, tab_bar::TabBarWidget},
};

#[derive(Debug, Clone, Default)]
pub struct ContentComponent;

impl ContentComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let mut block = Block::default().borders(Borders::ALL).title(" Claim ");
        if state.ui.focus == Focus::Content && !state.is_composing() {
            block = block.border_style(styles.style("pane_focused"));
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [tab_bar_area, _, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        frame.render_widget(
            TabBarWidget::new(&state.tabs, styles.style("tab_active")),
            tab_bar_area,
        );

        match state.tabs.active_content() {
            Some(ContentTab::InspectionDetails) => self.inspection(state, frame, body_area),
            Some(ContentTab::OrderedActions) => self.ordered_actions(state, frame, body_area),
            Some(ContentTab::ProductDetails) => self.product(state, frame, body_area),
            None => {}
        }
    }

    fn inspection(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let claim = &state.claim;
        let [fields_area, issues_area] = Layout::vertical([
            Constraint::Length(claim.inspection.len() as u16 + 1),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(
            FieldsWidget::new(&claim.inspection).label_style(styles.style("header_label")),
            fields_area,
        );

        let items: Vec<ListItem> = claim
            .inspection_issues
            .iter()
            .map(|issue| {
                let photos = match issue.images.len() {
                    1 => "1 photo".to_string(),
                    n => format!("{n} photos"),
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(issue.title.as_str(), Style::default().bold()),
                        Span::styled(format!("  ({photos})"), styles.style("note_timestamp")),
                    ]),
                    Line::from(format!("  {}", issue.description)),
                ])
            })
            .collect();
        let issues = List::new(items)
            .block(Block::default().title("Issues (Enter to view photos)"))
            .highlight_style(styles.style("issue_selected"));
        let mut list_state =
            ListState::default().with_selected(state.ui.issue_selection.selected_index());
        frame.render_stateful_widget(issues, issues_area, &mut list_state);
    }

    fn ordered_actions(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let rows = state.claim.ordered_actions.iter().map(|action| {
            Row::new(vec![
                action.action.as_str(),
                action.status.as_str(),
                action.requested_on.as_str(),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(55),
                Constraint::Percentage(20),
                Constraint::Percentage(25),
            ],
        )
        .header(Row::new(vec!["Action", "Status", "Requested"]).style(styles.style("header_label")));
        frame.render_widget(table, area);
    }

    fn product(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let fields: Vec<Field> = state
            .claim
            .product
            .iter()
            .chain(&state.claim.product_details)
            .cloned()
            .collect();
        frame.render_widget(
            FieldsWidget::new(&fields).label_style(styles.style("header_label")),
            area,
        );
    }
}
