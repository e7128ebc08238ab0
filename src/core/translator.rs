use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            lightbox::LightboxMsg,
            notes::NotesMsg,
            panels::PanelsMsg,
            system::SystemMsg,
            tabs::TabsMsg,
            ui::{CopyTarget, UiMsg},
            Msg,
        },
        raw_msg::RawMsg,
        state::AppState,
    },
    model::panels::PanelId,
    presentation::config::keybindings::{Action, KeyBindings},
};

/// Translates raw terminal events into domain messages.
/// Pure: reads the state, never changes it.
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Global keys work in every mode
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    if state.is_composing() {
        translate_input_mode_keys(key)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// While composing, Enter submits, Esc closes and the rest edits the draft
fn translate_input_mode_keys(key: KeyEvent) -> Vec<Msg> {
    match key {
        KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            ..
        } => vec![Msg::Notes(NotesMsg::Submit)],

        KeyEvent {
            code: KeyCode::Esc, ..
        } => vec![Msg::Ui(UiMsg::CancelComposing)],

        _ => vec![Msg::Ui(UiMsg::ProcessTextAreaInput(key))],
    }
}

/// How far a key sequence gets through the keybindings
enum Resolution {
    Bound(Action),
    Prefix,
    Unbound,
}

fn resolve(sequence: &[KeyEvent], bindings: &KeyBindings) -> Resolution {
    if let Some(action) = bindings.get(sequence) {
        return Resolution::Bound(*action);
    }
    if bindings
        .keys()
        .any(|keys| keys.len() > sequence.len() && keys.starts_with(sequence))
    {
        Resolution::Prefix
    } else {
        Resolution::Unbound
    }
}

/// Keys accumulate while they spell the start of a binding. An exact match
/// wins over a longer binding sharing the prefix. A dead end retries the
/// last key on its own.
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let bindings = &state.config.config.keybindings;
    let pending = &state.ui.pending_keys;

    let mut sequence = pending.clone();
    sequence.push(key);
    let (next_pending, action) = match resolve(&sequence, bindings) {
        Resolution::Bound(action) => (vec![], Some(action)),
        Resolution::Prefix => (sequence, None),
        Resolution::Unbound if !pending.is_empty() => match resolve(&[key], bindings) {
            Resolution::Bound(action) => (vec![], Some(action)),
            Resolution::Prefix => (vec![key], None),
            Resolution::Unbound => (vec![], None),
        },
        Resolution::Unbound => (vec![], None),
    };

    let mut msgs = vec![];
    if next_pending != *pending {
        msgs.push(Msg::Ui(UiMsg::PendingKeysChanged(next_pending)));
    }
    if let Some(action) = action {
        msgs.extend(translate_action_to_msg(action, state));
    }
    msgs
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    // The lightbox covers everything; only scrolling and leaving it reach through
    if state.lightbox.is_open()
        && !matches!(
            action,
            Action::Quit
                | Action::Suspend
                | Action::SelectNext
                | Action::SelectPrevious
                | Action::Back
        )
    {
        return vec![];
    }

    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],

        Action::NextTab => vec![Msg::Tabs(TabsMsg::Next)],
        Action::PreviousTab => vec![Msg::Tabs(TabsMsg::Previous)],
        Action::SelectInspectionTab => vec![Msg::Tabs(TabsMsg::Select(0))],
        Action::SelectActionsTab => vec![Msg::Tabs(TabsMsg::Select(1))],
        Action::SelectProductTab => vec![Msg::Tabs(TabsMsg::Select(2))],

        Action::ToggleFocus => vec![Msg::Ui(UiMsg::ToggleFocus)],
        Action::SelectNext => vec![Msg::Ui(UiMsg::SelectNext)],
        Action::SelectPrevious => vec![Msg::Ui(UiMsg::SelectPrevious)],

        Action::ShowImages => vec![Msg::Lightbox(LightboxMsg::ShowSelectedIssue)],

        Action::NewNote => vec![Msg::Ui(UiMsg::StartComposing)],
        Action::EditNote => vec![Msg::Notes(NotesMsg::EditSelected)],
        Action::DeleteNote => vec![Msg::Notes(NotesMsg::DeleteSelected)],

        Action::ToggleDelivery => toggle(PanelId::Delivery),
        Action::ToggleInspection => toggle(PanelId::Inspection),
        Action::ToggleInvoice => toggle(PanelId::Invoice),
        Action::ToggleProduct => toggle(PanelId::Product),
        Action::ToggleLinkedClaims => toggle(PanelId::LinkedClaims),
        Action::ToggleProductDetails => toggle(PanelId::ProductDetails),

        Action::CopyClaimNumber => vec![Msg::Ui(UiMsg::Copy(CopyTarget::ClaimNumber))],
        Action::CopyOrderNumber => vec![Msg::Ui(UiMsg::Copy(CopyTarget::OrderNumber))],

        Action::Back => translate_back(state),
    }
}

fn toggle(panel: PanelId) -> Vec<Msg> {
    vec![Msg::Panels(PanelsMsg::Toggle(panel))]
}

/// Back peels off one layer: lightbox, then topmost panel, then selection
fn translate_back(state: &AppState) -> Vec<Msg> {
    if state.lightbox.is_open() {
        vec![Msg::Lightbox(LightboxMsg::Dismiss)]
    } else if state.panels.any_open() {
        vec![Msg::Panels(PanelsMsg::CloseTopmost)]
    } else {
        vec![Msg::Ui(UiMsg::ClearSelection)]
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        domain::claim::ImageRef,
        infrastructure::config::Config,
        model::{editor, lightbox, panels},
    };

    fn state() -> Result<AppState> {
        Ok(AppState::new_with_config(Config::defaults()?))
    }

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[rstest]
    #[case(KeyCode::Char('q'), Msg::System(SystemMsg::Quit))]
    #[case(KeyCode::Char('1'), Msg::Tabs(TabsMsg::Select(0)))]
    #[case(KeyCode::Char('3'), Msg::Tabs(TabsMsg::Select(2)))]
    #[case(KeyCode::Char(']'), Msg::Tabs(TabsMsg::Next))]
    #[case(KeyCode::Char('['), Msg::Tabs(TabsMsg::Previous))]
    #[case(KeyCode::Tab, Msg::Ui(UiMsg::ToggleFocus))]
    #[case(KeyCode::Char('j'), Msg::Ui(UiMsg::SelectNext))]
    #[case(KeyCode::Up, Msg::Ui(UiMsg::SelectPrevious))]
    #[case(KeyCode::Enter, Msg::Lightbox(LightboxMsg::ShowSelectedIssue))]
    #[case(KeyCode::Char('n'), Msg::Ui(UiMsg::StartComposing))]
    #[case(KeyCode::Char('e'), Msg::Notes(NotesMsg::EditSelected))]
    #[case(KeyCode::Char('x'), Msg::Notes(NotesMsg::DeleteSelected))]
    #[case(KeyCode::Char('d'), Msg::Panels(PanelsMsg::Toggle(PanelId::Delivery)))]
    #[case(KeyCode::Char('l'), Msg::Panels(PanelsMsg::Toggle(PanelId::LinkedClaims)))]
    #[case(KeyCode::Char('y'), Msg::Ui(UiMsg::Copy(CopyTarget::ClaimNumber)))]
    #[case(KeyCode::Esc, Msg::Ui(UiMsg::ClearSelection))]
    fn test_default_bindings(#[case] code: KeyCode, #[case] expected: Msg) -> Result<()> {
        assert_eq!(translate_raw_to_domain(key(code), &state()?), vec![expected]);
        Ok(())
    }

    #[test]
    fn test_shifted_bindings() -> Result<()> {
        let state = state()?;
        let shift = |c| RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT));

        assert_eq!(
            translate_raw_to_domain(shift('P'), &state),
            vec![Msg::Panels(PanelsMsg::Toggle(PanelId::ProductDetails))]
        );
        assert_eq!(
            translate_raw_to_domain(shift('Y'), &state),
            vec![Msg::Ui(UiMsg::Copy(CopyTarget::OrderNumber))]
        );
        Ok(())
    }

    #[test]
    fn test_ctrl_c_quits_while_composing() -> Result<()> {
        let mut state = state()?;
        state.ui.editor.update(editor::Message::ComposingStarted);

        let raw = RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            translate_raw_to_domain(raw, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
        Ok(())
    }

    #[test]
    fn test_composing_keys() -> Result<()> {
        let mut state = state()?;
        state.ui.editor.update(editor::Message::ComposingStarted);

        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Enter), &state),
            vec![Msg::Notes(NotesMsg::Submit)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Esc), &state),
            vec![Msg::Ui(UiMsg::CancelComposing)]
        );
        // `q` is text while composing
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(q), &state),
            vec![Msg::Ui(UiMsg::ProcessTextAreaInput(q))]
        );
        Ok(())
    }

    #[test]
    fn test_back_peels_layers() -> Result<()> {
        let mut state = state()?;
        state
            .panels
            .update(panels::Message::Opened(PanelId::Invoice));
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Esc), &state),
            vec![Msg::Panels(PanelsMsg::CloseTopmost)]
        );

        state.lightbox.update(lightbox::Message::Shown(vec![ImageRef::new(
            "photos/a.jpg",
            "a",
        )]));
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Esc), &state),
            vec![Msg::Lightbox(LightboxMsg::Dismiss)]
        );
        Ok(())
    }

    #[test]
    fn test_open_lightbox_blocks_other_actions() -> Result<()> {
        let mut state = state()?;
        state.lightbox.update(lightbox::Message::Shown(vec![ImageRef::new(
            "photos/a.jpg",
            "a",
        )]));

        assert!(translate_raw_to_domain(key(KeyCode::Char('d')), &state).is_empty());
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('j')), &state),
            vec![Msg::Ui(UiMsg::SelectNext)]
        );
        Ok(())
    }

    fn with_go_bindings() -> Result<AppState> {
        let mut state = state()?;
        let g = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE);
        let t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        let bindings = &mut state.config.config.keybindings;
        bindings.insert(vec![g, g], Action::SelectInspectionTab);
        bindings.insert(vec![g, t], Action::NextTab);
        Ok(state)
    }

    #[test]
    fn test_key_sequence_waits_then_fires() -> Result<()> {
        let mut state = with_go_bindings()?;
        let g = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE);

        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(g), &state),
            vec![Msg::Ui(UiMsg::PendingKeysChanged(vec![g]))]
        );

        state.ui.pending_keys = vec![g];
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('t')), &state),
            vec![
                Msg::Ui(UiMsg::PendingKeysChanged(vec![])),
                Msg::Tabs(TabsMsg::Next),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_broken_sequence_retries_last_key() -> Result<()> {
        let mut state = with_go_bindings()?;
        state.ui.pending_keys = vec![KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE)];

        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('q')), &state),
            vec![
                Msg::Ui(UiMsg::PendingKeysChanged(vec![])),
                Msg::System(SystemMsg::Quit),
            ]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::F(5)), &state),
            vec![Msg::Ui(UiMsg::PendingKeysChanged(vec![]))]
        );
        Ok(())
    }

    #[test]
    fn test_unbound_key_is_ignored() -> Result<()> {
        assert!(translate_raw_to_domain(key(KeyCode::F(5)), &state()?).is_empty());
        Ok(())
    }

    #[test]
    fn test_error_becomes_notice() -> Result<()> {
        assert_eq!(
            translate_raw_to_domain(RawMsg::Error("boom".to_string()), &state()?),
            vec![Msg::System(SystemMsg::ShowError("boom".to_string()))]
        );
        Ok(())
    }
}
