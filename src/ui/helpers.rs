use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;

/// Split the frame into header, body, and footer panes.
pub fn frame_chunks(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Area of the color button, centered in the body pane. Click
/// hit-testing uses this same function, so the bound control and the
/// drawn control cannot drift apart.
pub fn button_rect(area: Rect) -> Rect {
    let body = frame_chunks(area)[1];
    let width = body.width.min(31);
    let height = body.height.min(5);
    let x = body.x + (body.width - width) / 2;
    let y = body.y + (body.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Foreground that stays readable on top of the given palette color.
pub fn contrast_fg(name: &str) -> Color {
    match name {
        "white" | "gray" | "turquoise" => Color::Black,
        _ => Color::White,
    }
}
