mod state;

use crossterm::event::KeyCode;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
    Click { column: u16, row: u16 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppView {
    Picker,
    Help,
}
