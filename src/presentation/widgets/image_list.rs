use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
};

use crate::domain::claim::ImageRef;

/// Enlarged image group as a scrollable list of captions and sources.
///
/// A terminal cannot show the photos themselves; each entry names the image
/// and where it lives.
pub struct ImageListWidget<'a> {
    images: &'a [ImageRef],
    scroll: usize,
    caption_style: Style,
}

impl<'a> ImageListWidget<'a> {
    pub fn new(images: &'a [ImageRef], scroll: usize) -> Self {
        Self {
            images,
            scroll,
            caption_style: Style::default(),
        }
    }

    pub fn caption_style(mut self, style: Style) -> Self {
        self.caption_style = style;
        self
    }
}

impl<'a> Widget for ImageListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let total = self.images.len();
        let items: Vec<ListItem> = self
            .images
            .iter()
            .enumerate()
            .skip(self.scroll)
            .map(|(i, image)| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(format!("[{}/{total}] ", i + 1)),
                        Span::styled(image.alt.as_str(), self.caption_style),
                    ]),
                    Line::from(format!("      {}", image.src)),
                    Line::from(""),
                ])
            })
            .collect();
        Widget::render(List::new(items), area, buf);
    }
}
