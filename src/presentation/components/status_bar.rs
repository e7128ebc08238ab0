//! Key hints and the status line

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{
        config::keybindings::{key_event_to_string, Action, KeyBindings},
        widgets::status_bar::StatusBarWidget,
    },
};

const NORMAL_HINTS: [(Action, &str); 9] = [
    (Action::Quit, "quit"),
    (Action::NextTab, "next tab"),
    (Action::ToggleFocus, "focus"),
    (Action::ShowImages, "photos"),
    (Action::NewNote, "note"),
    (Action::DeleteNote, "delete"),
    (Action::ToggleDelivery, "delivery"),
    (Action::CopyClaimNumber, "copy claim"),
    (Action::Back, "back"),
];

/// Shortest key sequence bound to `action`, as written in the config
pub fn key_for(bindings: &KeyBindings, action: Action) -> Option<String> {
    bindings
        .iter()
        .filter(|(_, bound)| **bound == action)
        .map(|(keys, _)| {
            keys.iter()
                .map(key_event_to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
}

/// Hints for what the keys do right now
pub fn hints(state: &AppState) -> String {
    if state.is_composing() {
        return "enter add · esc close".to_string();
    }
    if state.lightbox.is_open() {
        return "j/k scroll · esc close".to_string();
    }
    let bindings = &state.config.config.keybindings;
    NORMAL_HINTS
        .iter()
        .filter_map(|(action, label)| key_for(bindings, *action).map(|key| format!("{key} {label}")))
        .collect::<Vec<_>>()
        .join(" · ")
}

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let widget = StatusBarWidget::new(
            &state.status_bar,
            hints(state),
            state.config.config.styles.style("status_hint"),
        );
        frame.render_widget(widget, area);
    }
}
