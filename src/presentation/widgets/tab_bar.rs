use ratatui::{prelude::*, widgets::Tabs as TabsWidget};

use crate::model::tabs::{ContentTab, Tabs};

/// Titles of the content tabs with the active one highlighted
#[derive(Clone)]
pub struct TabBarWidget<'a> {
    tabs: &'a Tabs,
    highlight: Style,
}

impl<'a> TabBarWidget<'a> {
    pub fn new(tabs: &'a Tabs, highlight: Style) -> Self {
        Self { tabs, highlight }
    }
}

impl<'a> Widget for TabBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        TabsWidget::new(ContentTab::titles())
            .select(self.tabs.active_index())
            .highlight_style(self.highlight)
            .divider("|")
            .render(area, buf);
    }
}
