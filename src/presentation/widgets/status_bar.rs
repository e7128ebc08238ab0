use ratatui::{prelude::*, widgets::Paragraph};

use crate::model::status_bar::StatusBar;

/// Two bottom rows: key hints, then the latest notice
pub struct StatusBarWidget<'a> {
    status_bar: &'a StatusBar,
    hints: String,
    hint_style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(status_bar: &'a StatusBar, hints: String, hint_style: Style) -> Self {
        Self {
            status_bar,
            hints,
            hint_style,
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [hint_area, notice_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        Paragraph::new(self.hints)
            .style(self.hint_style)
            .render(hint_area, buf);
        Paragraph::new(self.status_bar.notice().unwrap_or_default()).render(notice_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::status_bar::Message, presentation::widgets::tests::render_lines};

    #[test]
    fn test_renders_hints_and_notice() {
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::NoticePosted {
            label: "Copied".to_string(),
            message: "CLM-2024-00187".to_string(),
        });
        let widget = StatusBarWidget::new(&status_bar, "q quit".to_string(), Style::default());
        let lines = render_lines(widget, 30, 2);

        assert_eq!(lines[0].trim_end(), "q quit");
        assert_eq!(lines[1].trim_end(), "[Copied] CLM-2024-00187");
    }

    #[test]
    fn test_empty_notice() {
        let status_bar = StatusBar::default();
        let widget = StatusBarWidget::new(&status_bar, String::new(), Style::default());
        let lines = render_lines(widget, 10, 2);
        assert_eq!(lines[1].trim_end(), "");
    }
}
