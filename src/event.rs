use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::{App, AppEvent};

/// Polls for crossterm events and maps them to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return Ok(None);
                }
                return Ok(Some(AppEvent::KeyPress(key.code)));
            }
            Event::Mouse(mouse) => {
                if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
                    return Ok(None);
                }
                return Ok(Some(AppEvent::Click {
                    column: mouse.column,
                    row: mouse.row,
                }));
            }
            _ => return Ok(None),
        }
    }
    Ok(Some(AppEvent::Tick))
}

/// Runs the main event loop.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    let tick_rate = Duration::from_millis(250);

    while app.running {
        // Keep the click hit-test working on the same area the frame
        // is drawn into.
        let size = terminal.size()?;
        app.set_viewport(Rect::new(0, 0, size.width, size.height));

        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(tick_rate)? {
            app.update(event);
        }
    }
    Ok(())
}
