use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global"));
    lines.extend(section_lines(&["q: Quit", "?: Toggle help", "esc: Back"]));

    lines.push(Line::from(""));
    lines.push(section_title("Picker"));
    lines.extend(section_lines(&[
        "Space/Enter: New backdrop color",
        "Left click on the button: New backdrop color",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("CLI"));
    lines.extend(section_lines(&[
        "hueflip pick -n N: Print N random colors",
        "hueflip palette: List the palette in order",
    ]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
