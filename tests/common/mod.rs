#![allow(dead_code)]

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use claimdesk::{
    core::state::AppState,
    infrastructure::{
        clipboard::MemoryClipboard,
        config::Config,
        tui::{test::TestTui, Event},
    },
    integration::app_runner::AppRunner,
    update, Msg,
};

pub const WIDTH: u16 = 120;
pub const HEIGHT: u16 = 40;

pub fn state() -> Result<AppState> {
    Ok(AppState::new_with_config(Config::defaults()?))
}

pub fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

pub fn code(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn typed(text: &str) -> Vec<Event> {
    text.chars().map(key).collect()
}

/// Run the whole loop over `events` on a headless terminal
pub async fn run_events(
    events: impl IntoIterator<Item = Event>,
) -> Result<(AppRunner<TestTui>, MemoryClipboard)> {
    let clipboard = MemoryClipboard::new();
    let tui = TestTui::with_events(WIDTH, HEIGHT, events)?;
    let mut runner = AppRunner::new(state()?, tui, Box::new(clipboard.clone()));
    runner.run().await?;
    Ok((runner, clipboard))
}

pub fn screen_contains(runner: &AppRunner<TestTui>, needle: &str) -> bool {
    runner.tui().lines().iter().any(|line| line.contains(needle))
}

/// Fold messages through `update`, dropping commands
pub fn apply(state: AppState, msgs: impl IntoIterator<Item = Msg>) -> AppState {
    msgs.into_iter()
        .fold(state, |state, msg| update(msg, state).0)
}
