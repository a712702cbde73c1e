mod help;
pub(crate) mod helpers;
mod theme;

use ratatui::{
    Frame,
    layout::Rect,
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, AppView};
use crate::color;
use helpers::{button_rect, contrast_fg, frame_chunks};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // The backdrop reads the style variable; everything else is drawn
    // on top of it.
    if let Some(bg) = app.backdrop.get().and_then(color::color_for) {
        frame.render_widget(Block::default().style(Style::default().bg(bg)), area);
    }

    let chunks = frame_chunks(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Hueflip  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "background color switcher",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(header, chunks[0]);

    let (title, body_text) = match app.view {
        AppView::Picker => (" Picker ", build_picker_text(app)),
        AppView::Help => (" Help ", help::build_help_text()),
    };

    let mut body_lines = vec![
        Line::from(Span::styled(
            format!("  {title}"),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    body_lines.extend(body_text.lines);
    let body = Paragraph::new(Text::from(body_lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(body, chunks[1]);

    let footer = Paragraph::new(Text::from(vec![status_line(app)]))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(footer, chunks[2]);

    if app.view == AppView::Picker {
        render_button(frame, area);
    }
}

fn build_picker_text(app: &App) -> Text<'_> {
    let mut lines = Vec::new();
    match app.backdrop.get() {
        Some(name) => lines.push(Line::from(vec![
            Span::styled("  Backdrop: ", Style::default().fg(Theme::dim())),
            Span::styled(
                name,
                Style::default()
                    .fg(contrast_fg(name))
                    .add_modifier(Modifier::BOLD),
            ),
        ])),
        None => lines.push(Line::from(Span::styled(
            "  Backdrop: terminal default",
            Style::default().fg(Theme::dim()),
        ))),
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  Picks this session: {}", app.pick_count),
        Style::default().fg(Theme::accent()),
    )));
    Text::from(lines)
}

fn render_button(frame: &mut Frame, area: Rect) {
    let button = button_rect(area);
    if button.width == 0 || button.height == 0 {
        return;
    }
    frame.render_widget(Clear, button);
    let label = Paragraph::new(Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Press to change color",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Black).bg(Theme::primary()))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(label, button);
}

fn status_line(app: &App) -> Line<'_> {
    match &app.status {
        Some(status) => Line::from(vec![
            Span::styled(format!("  {status}"), Style::default().fg(Theme::text())),
            Span::styled(
                format!("   picks: {}", app.pick_count),
                Style::default().fg(Theme::dim()),
            ),
        ]),
        None => Line::from(Span::styled(
            "  Click the button or press Space for a random backdrop  |  ?: help  q: quit",
            Style::default().fg(Theme::dim()),
        )),
    }
}
