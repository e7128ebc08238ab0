use chrono::{Local, NaiveDateTime};

use crate::{
    core::{
        cmd::Cmd,
        msg::{
            lightbox::LightboxMsg,
            notes::NotesMsg,
            panels::PanelsMsg,
            system::SystemMsg,
            tabs::TabsMsg,
            ui::{CopyTarget, UiMsg},
            Msg,
        },
        state::{AppState, Focus},
    },
    model::{
        editor, lightbox,
        notes::{self, Change},
        panels, selection, status_bar,
        tabs::{self, ContentTab},
    },
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    let commands = update_state(msg, &mut state);
    (state, commands)
}

/// Same transition as `update`, applied to state the caller keeps owning
pub fn update_state(msg: Msg, state: &mut AppState) -> Vec<Cmd> {
    log::debug!("update: {msg:?}");

    match msg {
        Msg::System(system_msg) => update_system(system_msg, state),
        Msg::Tabs(tabs_msg) => update_tabs(tabs_msg, state),
        Msg::Notes(notes_msg) => update_notes(notes_msg, state),
        Msg::Panels(panels_msg) => update_panels(panels_msg, state),
        Msg::Lightbox(lightbox_msg) => update_lightbox(lightbox_msg, state),
        Msg::Ui(ui_msg) => update_ui(ui_msg, state),
    }
}

fn update_system(msg: SystemMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        SystemMsg::ShowError(error) => {
            log::error!("{error}");
            post_notice(state, "Error", error);
            vec![]
        }
        SystemMsg::ClearStatusMessage => {
            state.status_bar.update(status_bar::Message::NoticeCleared);
            vec![]
        }
        other => state.system.update(other),
    }
}

fn update_tabs(msg: TabsMsg, state: &mut AppState) -> Vec<Cmd> {
    let before = state.tabs.active_index();
    state.tabs.update(match msg {
        TabsMsg::Select(index) => tabs::Message::TabSelected { index },
        TabsMsg::Next => tabs::Message::NextTabSelected,
        TabsMsg::Previous => tabs::Message::PreviousTabSelected,
    });

    // The issue cursor belongs to the inspection tab
    if state.tabs.active_index() != before {
        state
            .ui
            .issue_selection
            .update(selection::Message::SelectionCleared);
    }
    vec![]
}

fn update_notes(msg: NotesMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        NotesMsg::Submit => {
            if !state.ui.is_composing() {
                return vec![];
            }
            let content = state.ui.editor.content();
            add_note(state, content, Local::now().naive_local());
        }
        NotesMsg::Add { content, at } => add_note(state, content, at),
        NotesMsg::EditSelected => match state.selected_note().map(|note| note.id()) {
            Some(id) => {
                if let Change::EditRequested(id) =
                    state.notes.update(notes::Message::NoteEditRequested { id })
                {
                    log::info!("Edit requested for {id}");
                    post_hint(state, "Editing notes is not supported");
                }
            }
            None => post_hint(state, "Select a note to edit"),
        },
        NotesMsg::DeleteSelected => match state.selected_note().map(|note| note.id()) {
            Some(id) => {
                if let Change::Deleted(note) = state.notes.update(notes::Message::NoteDeleted { id })
                {
                    log::info!("Deleted {}", note.id());
                    let len = state.notes.len();
                    state
                        .ui
                        .note_selection
                        .update(selection::Message::LengthChanged { len });
                    post_notice(state, "Note deleted", note.content().to_string());
                }
            }
            None => post_hint(state, "Select a note to delete"),
        },
    }
    vec![]
}

fn add_note(state: &mut AppState, content: String, at: NaiveDateTime) {
    match state.notes.update(notes::Message::NoteAdded { content, at }) {
        Change::Added(id) => {
            log::info!("Added {id}");
            let content = state
                .notes
                .find(id)
                .map(|note| note.content().to_string())
                .unwrap_or_default();
            if state.ui.is_composing() {
                state.ui.editor.update(editor::Message::Submitted);
            }
            post_notice(state, "Note added", content);
        }
        _ => post_hint(state, "Nothing to add: the note is empty"),
    }
}

fn update_panels(msg: PanelsMsg, state: &mut AppState) -> Vec<Cmd> {
    let target = match msg {
        PanelsMsg::Open(id) | PanelsMsg::Close(id) | PanelsMsg::Toggle(id) => Some(id),
        PanelsMsg::CloseTopmost => state.panels.topmost(),
    };
    state.panels.update(match msg {
        PanelsMsg::Open(id) => panels::Message::Opened(id),
        PanelsMsg::Close(id) => panels::Message::Closed(id),
        PanelsMsg::Toggle(id) => panels::Message::Toggled(id),
        PanelsMsg::CloseTopmost => panels::Message::TopmostClosed,
    });

    if let Some(id) = target {
        if state.panels.is_open(id) {
            log::info!("Opened {id} panel");
        } else {
            log::info!("Closed {id} panel");
        }
    }
    vec![]
}

fn update_lightbox(msg: LightboxMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        LightboxMsg::Show(group) => state.lightbox.update(lightbox::Message::Shown(group)),
        LightboxMsg::ShowSelectedIssue => match state.selected_issue() {
            Some(issue) => {
                let group = issue.images.clone();
                state.lightbox.update(lightbox::Message::Shown(group));
            }
            None => post_hint(state, "Select an inspection issue to view its photos"),
        },
        LightboxMsg::Dismiss => state.lightbox.update(lightbox::Message::Dismissed),
        LightboxMsg::ScrollUp => state.lightbox.update(lightbox::Message::ScrolledUp),
        LightboxMsg::ScrollDown => state.lightbox.update(lightbox::Message::ScrolledDown),
    }
    vec![]
}

fn update_ui(msg: UiMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        UiMsg::ToggleFocus => {
            state.ui.focus = state.ui.focus.toggled();
        }
        UiMsg::SelectNext => {
            if state.lightbox.is_open() {
                state.lightbox.update(lightbox::Message::ScrolledDown);
            } else if let Some((cursor, len)) = focused_list(state) {
                cursor.update(selection::Message::NextItemSelected { len });
            }
        }
        UiMsg::SelectPrevious => {
            if state.lightbox.is_open() {
                state.lightbox.update(lightbox::Message::ScrolledUp);
            } else if let Some((cursor, len)) = focused_list(state) {
                cursor.update(selection::Message::PreviousItemSelected { len });
            }
        }
        UiMsg::ClearSelection => {
            if let Some((cursor, _)) = focused_list(state) {
                cursor.update(selection::Message::SelectionCleared);
            }
            state.status_bar.update(status_bar::Message::NoticeCleared);
        }
        UiMsg::StartComposing => {
            state.ui.focus = Focus::Notes;
            state.ui.editor.update(editor::Message::ComposingStarted);
        }
        UiMsg::CancelComposing => {
            state.ui.editor.update(editor::Message::ComposingCanceled);
        }
        UiMsg::ProcessTextAreaInput(event) => {
            state
                .ui
                .editor
                .update(editor::Message::KeyEventReceived { event });
        }
        UiMsg::PendingKeysChanged(keys) => {
            state.ui.pending_keys = keys;
        }
        UiMsg::Copy(target) => {
            let value = match target {
                CopyTarget::ClaimNumber => state.claim.number.clone(),
                CopyTarget::OrderNumber => state.claim.order_number.clone(),
            };
            post_notice(state, "Copied", value.clone());
            return vec![Cmd::CopyToClipboard { value }];
        }
    }
    vec![]
}

/// Cursor of the focused pane and the length of the list it walks
fn focused_list(state: &mut AppState) -> Option<(&mut selection::Selection, usize)> {
    match state.ui.focus {
        Focus::Notes => Some((&mut state.ui.note_selection, state.notes.len())),
        Focus::Content => match state.tabs.active_content() {
            Some(ContentTab::InspectionDetails) => Some((
                &mut state.ui.issue_selection,
                state.claim.inspection_issues.len(),
            )),
            _ => None,
        },
    }
}

fn post_notice(state: &mut AppState, label: &str, message: String) {
    state.status_bar.update(status_bar::Message::NoticePosted {
        label: label.to_string(),
        message,
    });
}

fn post_hint(state: &mut AppState, message: &str) {
    state.status_bar.update(status_bar::Message::HintPosted {
        message: message.to_string(),
    });
}
