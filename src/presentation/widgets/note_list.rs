use ratatui::{
    prelude::*,
    widgets::{Block, List, ListItem, ListState, StatefulWidget},
};

use crate::{domain::text, model::notes::Note};

/// Notes, oldest first, each as its content followed by its timestamp
pub struct NoteListWidget<'a> {
    notes: &'a [Note],
    selected: Option<usize>,
    timestamp_style: Style,
    selected_style: Style,
    block: Option<Block<'a>>,
}

/// Longest a single note may grow before it is cut with `...`
const MAX_NOTE_HEIGHT: usize = 6;

impl<'a> NoteListWidget<'a> {
    pub fn new(notes: &'a [Note], selected: Option<usize>) -> Self {
        Self {
            notes,
            selected,
            timestamp_style: Style::default(),
            selected_style: Style::default(),
            block: None,
        }
    }

    pub fn timestamp_style(mut self, style: Style) -> Self {
        self.timestamp_style = style;
        self
    }

    pub fn selected_style(mut self, style: Style) -> Self {
        self.selected_style = style;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// An item taller than `height` is dropped by `List` along with every
    /// item after it, so content is cut to leave room for the timestamp and
    /// the separator row only appears when it fits.
    fn item(&self, note: &'a Note, width: usize, height: usize) -> ListItem<'a> {
        let max_lines = MAX_NOTE_HEIGHT.min(height.saturating_sub(1)).max(1);
        let content = text::truncate_text(&text::wrap_text(note.content(), width), max_lines);
        let mut lines: Vec<Line> = content.lines().map(|line| Line::from(line.to_string())).collect();
        if lines.len() < height {
            lines.push(Line::styled(note.created_at(), self.timestamp_style));
        }
        if lines.len() < height {
            lines.push(Line::from(""));
        }
        ListItem::new(lines)
    }
}

impl<'a> Widget for NoteListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };
        let (width, height) = (inner.width as usize, inner.height as usize);
        let items: Vec<ListItem> = self
            .notes
            .iter()
            .map(|note| self.item(note, width, height))
            .collect();

        let mut list = List::new(items).highlight_style(self.selected_style);
        if let Some(block) = self.block {
            list = list.block(block);
        }
        let mut state = ListState::default().with_selected(self.selected);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
