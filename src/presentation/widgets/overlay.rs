use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear},
};

/// Centred rectangle taking the given share of `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}

/// Full-height strip along the right edge of `area`
pub fn drawer_rect(percent_x: u16, area: Rect) -> Rect {
    let [_, drawer] = Layout::horizontal([
        Constraint::Percentage(100 - percent_x),
        Constraint::Percentage(percent_x),
    ])
    .areas(area);
    drawer
}

/// Clears `area` and draws a titled border over it.
/// Returns the inner rectangle left for content.
pub fn frame_overlay(title: &str, border_style: Style, area: Rect, buf: &mut Buffer) -> Rect {
    Clear.render(area, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!(" {title} "))
        .title_bottom(Line::from(" Esc to close ").right_aligned());
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}
