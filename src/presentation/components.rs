//! Screen components
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod content;
pub mod header;
pub mod notes;
pub mod overlays;
pub mod status_bar;

pub use content::ContentComponent;
pub use header::HeaderComponent;
pub use notes::NotesComponent;
pub use overlays::OverlaysComponent;
pub use status_bar::StatusBarComponent;

/// Share of the body given to the content tabs
const CONTENT_PERCENT: u16 = 60;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub header: HeaderComponent,
    pub content: ContentComponent,
    pub notes: NotesComponent,
    pub overlays: OverlaysComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main rendering entry point
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(area);
        let [content_area, notes_area] = Layout::horizontal([
            Constraint::Percentage(CONTENT_PERCENT),
            Constraint::Percentage(100 - CONTENT_PERCENT),
        ])
        .areas(body_area);

        self.header.view(state, frame, header_area);
        self.content.view(state, frame, content_area);
        self.notes.view(state, frame, notes_area);
        self.status_bar.view(state, frame, status_area);

        self.overlays.view_panels(state, frame, body_area);
        self.overlays.view_lightbox(state, frame, area);
    }
}
