use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::system::SystemMsg,
    },
    domain::claim::{Claim, InspectionIssue},
    infrastructure::config::Config,
    model::{
        editor::Editor,
        lightbox::Lightbox,
        notes::{Note, Notes},
        panels::Panels,
        selection::Selection,
        status_bar::StatusBar,
        tabs::{ContentTab, Tabs},
    },
};

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub claim: Claim,
    pub tabs: Tabs,
    pub notes: Notes,
    pub panels: Panels,
    pub lightbox: Lightbox,
    pub ui: UiState,
    pub status_bar: StatusBar,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    pub config: Config,
}

/// Pane that receives selection keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Focus {
    #[default]
    Content,
    Notes,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Content => Focus::Notes,
            Focus::Notes => Focus::Content,
        }
    }
}

/// UI-related state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    pub editor: Editor,
    pub note_selection: Selection,
    pub issue_selection: Selection,
    /// Prefix of a multi-key binding typed so far
    pub pending_keys: Vec<KeyEvent>,
}

impl UiState {
    pub fn is_composing(&self) -> bool {
        self.editor.is_active()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
}

impl SystemState {
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }
            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }
            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }
            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }
            // Status line messages are owned by the status bar
            SystemMsg::ShowError(_) | SystemMsg::ClearStatusMessage => vec![],
        }
    }
}

impl AppState {
    /// State for reviewing `claim`; its existing notes seed the notes store
    pub fn new(claim: Claim, config: Config) -> Self {
        let notes = Notes::with_seeded(&claim.notes);
        Self {
            claim,
            tabs: Tabs::default(),
            notes,
            panels: Panels::default(),
            lightbox: Lightbox::default(),
            ui: UiState::default(),
            status_bar: StatusBar::default(),
            system: SystemState::default(),
            config: ConfigState { config },
        }
    }

    pub fn new_with_config(config: Config) -> Self {
        Self::new(Claim::sample(), config)
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.ui
            .note_selection
            .selected_index()
            .and_then(|index| self.notes.get(index))
    }

    /// The highlighted issue, only while the inspection tab is showing
    pub fn selected_issue(&self) -> Option<&InspectionIssue> {
        if self.tabs.active_content() != Some(ContentTab::InspectionDetails) {
            return None;
        }
        self.ui
            .issue_selection
            .selected_index()
            .and_then(|index| self.claim.issue(index))
    }

    pub fn is_composing(&self) -> bool {
        self.ui.is_composing()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new_with_config(Config::default())
    }
}
