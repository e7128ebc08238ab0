mod common;

use std::collections::HashSet;

use chrono::NaiveDate;
use color_eyre::Result;
use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;

use claimdesk::{
    core::{
        msg::{notes::NotesMsg, ui::UiMsg, Msg},
        state::Focus,
    },
    model::notes::Note,
};
use common::{apply, code, run_events, screen_contains, state, typed};

fn contents(notes: &[Note]) -> Vec<&str> {
    notes.iter().map(Note::content).collect()
}

#[test]
fn test_seeded_note_then_add_and_delete_first() -> Result<()> {
    let at = NaiveDate::from_ymd_opt(2024, 3, 4)
        .and_then(|d| d.and_hms_opt(16, 20, 0))
        .expect("valid datetime");

    let state = state()?;
    assert_eq!(contents(state.notes.notes()), vec!["Test Notes"]);

    let state = apply(
        state,
        [Msg::Notes(NotesMsg::Add {
            content: "Follow up needed".to_string(),
            at,
        })],
    );
    assert_eq!(
        contents(state.notes.notes()),
        vec!["Test Notes", "Follow up needed"]
    );
    assert_eq!(state.notes.notes()[1].created_at(), "Mar 4, 4:20 PM");

    let first = state.notes.notes()[0].id();
    let state = apply(
        state,
        [
            Msg::Ui(UiMsg::ToggleFocus),
            Msg::Ui(UiMsg::SelectNext),
            Msg::Notes(NotesMsg::DeleteSelected),
        ],
    );
    assert_eq!(contents(state.notes.notes()), vec!["Follow up needed"]);
    assert!(state.notes.find(first).is_none());
    Ok(())
}

#[test]
fn test_ids_stay_unique_across_deletes() -> Result<()> {
    let at = NaiveDate::from_ymd_opt(2024, 3, 4)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid datetime");
    let add = |content: &str| {
        Msg::Notes(NotesMsg::Add {
            content: content.to_string(),
            at,
        })
    };

    let state = apply(state()?, [add("one"), add("two")]);
    let deleted = state.notes.notes()[2].id();
    let state = apply(
        state,
        [
            Msg::Ui(UiMsg::ToggleFocus),
            Msg::Ui(UiMsg::SelectNext),
            Msg::Ui(UiMsg::SelectNext),
            Msg::Ui(UiMsg::SelectNext),
            Msg::Notes(NotesMsg::DeleteSelected),
            add("three"),
        ],
    );

    assert_eq!(contents(state.notes.notes()), vec!["Test Notes", "one", "three"]);
    let ids: HashSet<_> = state.notes.notes().iter().map(Note::id).collect();
    assert!(!ids.contains(&deleted));
    assert_eq!(ids.len(), 3);
    Ok(())
}

#[test]
fn test_edit_changes_nothing() -> Result<()> {
    let before = state()?;
    let after = apply(
        before.clone(),
        [
            Msg::Ui(UiMsg::ToggleFocus),
            Msg::Ui(UiMsg::SelectNext),
            Msg::Notes(NotesMsg::EditSelected),
        ],
    );
    assert_eq!(after.notes, before.notes);
    Ok(())
}

#[tokio::test]
async fn test_compose_note_from_keyboard() -> Result<()> {
    let mut events = vec![common::key('n')];
    events.extend(typed("Called carrier"));
    events.push(code(KeyCode::Enter));

    let (runner, _) = run_events(events).await?;
    let state = runner.state();

    assert_eq!(
        contents(state.notes.notes()),
        vec!["Test Notes", "Called carrier"]
    );
    assert!(!state.is_composing());
    assert_eq!(state.ui.focus, Focus::Notes);
    assert!(screen_contains(&runner, "Called carrier"));
    assert!(screen_contains(&runner, "Notes (2)"));
    Ok(())
}

#[tokio::test]
async fn test_blank_submit_keeps_editor_open() -> Result<()> {
    let mut events = vec![common::key('n')];
    events.extend(typed("   "));
    events.push(code(KeyCode::Enter));

    let (runner, _) = run_events(events).await?;
    assert_eq!(runner.state().notes.len(), 1);
    assert!(runner.state().is_composing());
    Ok(())
}

#[tokio::test]
async fn test_cancel_composing_adds_nothing() -> Result<()> {
    let mut events = vec![common::key('n')];
    events.extend(typed("draft"));
    events.push(code(KeyCode::Esc));

    let (runner, _) = run_events(events).await?;
    assert_eq!(runner.state().notes.len(), 1);
    assert!(!runner.state().is_composing());
    Ok(())
}
