//! Notes pane
//!
//! The note list and, while composing, the editor under it.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, Focus},
    presentation::widgets::note_list::NoteListWidget,
};

const EDITOR_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Default)]
pub struct NotesComponent;

impl NotesComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let (list_area, editor_area) = if state.is_composing() {
            let [list_area, editor_area] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(EDITOR_HEIGHT)])
                    .areas(area);
            (list_area, Some(editor_area))
        } else {
            (area, None)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Notes ({}) ", state.notes.len()));
        if state.ui.focus == Focus::Notes && !state.is_composing() {
            block = block.border_style(styles.style("pane_focused"));
        }

        if state.notes.is_empty() {
            let empty = Paragraph::new("No notes yet. Press n to add one.")
                .style(styles.style("note_timestamp"))
                .block(block);
            frame.render_widget(empty, list_area);
        } else {
            let list = NoteListWidget::new(
                state.notes.notes(),
                state.ui.note_selection.selected_index(),
            )
            .timestamp_style(styles.style("note_timestamp"))
            .selected_style(styles.style("note_selected"))
            .block(block);
            frame.render_widget(list, list_area);
        }

        if let Some(editor_area) = editor_area {
            frame.render_widget(Clear, editor_area);
            frame.render_widget(state.ui.editor.textarea(), editor_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        domain::claim::Claim,
        infrastructure::{config::Config, tui::test::buffer_lines},
        model::editor,
    };

    fn draw(state: &AppState) -> Result<Vec<String>> {
        let mut terminal = Terminal::new(TestBackend::new(40, 16))?;
        terminal.draw(|frame| {
            let area = frame.area();
            NotesComponent::new().view(state, frame, area);
        })?;
        Ok(buffer_lines(terminal.backend().buffer()))
    }

    #[test]
    fn test_seeded_note_with_timestamp() -> Result<()> {
        let lines = draw(&AppState::default())?;
        assert!(lines[0].contains("Notes (1)"));
        assert!(lines.iter().any(|line| line.contains("Test Notes")));
        assert!(lines.iter().any(|line| line.contains("Mar 3, 3:58 PM")));
        Ok(())
    }

    #[test]
    fn test_empty_notes_prompt() -> Result<()> {
        let mut claim = Claim::sample();
        claim.notes.clear();
        let lines = draw(&AppState::new(claim, Config::default()))?;
        assert!(lines[0].contains("Notes (0)"));
        assert!(lines.iter().any(|line| line.contains("No notes yet.")));
        Ok(())
    }

    #[test]
    fn test_editor_drawn_while_composing() -> Result<()> {
        let mut state = AppState::default();
        state.ui.editor.update(editor::Message::ComposingStarted);

        let lines = draw(&state)?;
        assert!(lines.iter().any(|line| line.contains("New note")));
        Ok(())
    }
}
