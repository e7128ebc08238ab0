use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Wrap},
};

use crate::domain::claim::Field;

/// Label/value pairs, one per line
pub struct FieldsWidget<'a> {
    fields: &'a [Field],
    label_style: Style,
    value_style: Style,
    block: Option<Block<'a>>,
}

impl<'a> FieldsWidget<'a> {
    pub fn new(fields: &'a [Field]) -> Self {
        Self {
            fields,
            label_style: Style::default(),
            value_style: Style::default(),
            block: None,
        }
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    pub fn value_style(mut self, style: Style) -> Self {
        self.value_style = style;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let label_width = self
            .fields
            .iter()
            .map(|field| field.label.chars().count())
            .max()
            .unwrap_or(0);
        self.fields
            .iter()
            .map(|field| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<label_width$}  ", field.label),
                        self.label_style,
                    ),
                    Span::styled(field.value.as_str(), self.value_style),
                ])
            })
            .collect()
    }
}

impl<'a> Widget for FieldsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut paragraph = Paragraph::new(self.lines()).wrap(Wrap { trim: false });
        if let Some(block) = self.block {
            paragraph = paragraph.block(block);
        }
        paragraph.render(area, buf);
    }
}
