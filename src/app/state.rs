use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};

use crate::color;
use crate::types::{PaletteIndex, StyleVar};
use crate::ui::helpers::button_rect;

use super::{AppEvent, AppView};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub view: AppView,
    view_history: Vec<AppView>,
    pub backdrop: StyleVar,
    pub last_index: Option<PaletteIndex>,
    pub pick_count: u64,
    pub status: Option<String>,
    viewport: Rect,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            view: AppView::Picker,
            view_history: Vec::new(),
            backdrop: StyleVar::default(),
            last_index: None,
            pick_count: 0,
            status: None,
            viewport: Rect::default(),
        }
    }

    /// The full frame area, refreshed by the event loop before each
    /// draw so click hit-testing matches the rendered layout.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key),
            AppEvent::Click { column, row } => self.handle_click(column, row),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => {
                if self.view == AppView::Help {
                    self.go_back();
                } else {
                    self.navigate_to(AppView::Help);
                }
            }
            KeyCode::Esc => self.go_back(),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if self.view == AppView::Picker {
                    self.shuffle_backdrop();
                }
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if self.view != AppView::Picker {
            return;
        }
        if button_rect(self.viewport).contains(Position::new(column, row)) {
            self.shuffle_backdrop();
        }
    }

    /// The picker handler: draw a uniform palette index and write the
    /// selected name to the style variable.
    fn shuffle_backdrop(&mut self) {
        self.apply_palette_index(color::random_index(color::PALETTE.len()));
    }

    /// Write half of the handler, split out so the draw can be
    /// simulated. Out-of-range indices leave the backdrop untouched.
    pub(crate) fn apply_palette_index(&mut self, index: PaletteIndex) {
        let Some(name) = color::PALETTE.get(index).copied() else {
            return;
        };
        self.backdrop.set(name);
        self.last_index = Some(index);
        self.pick_count += 1;
        self.status = Some(format!("Backdrop set to {name}"));
    }

    fn navigate_to(&mut self, view: AppView) {
        if self.view != view {
            self.view_history.push(self.view.clone());
            self.view = view;
        }
    }

    fn go_back(&mut self) {
        if let Some(view) = self.view_history.pop() {
            self.view = view;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn app_with_viewport() -> App {
        let mut app = App::new();
        app.set_viewport(Rect::new(0, 0, 80, 24));
        app
    }

    #[test]
    fn activation_key_writes_a_palette_member() {
        let mut app = App::new();
        for _ in 0..50 {
            app.update(AppEvent::KeyPress(KeyCode::Char(' ')));
            let name = app.backdrop.get().expect("backdrop set after activation");
            assert!(color::PALETTE.contains(&name), "{name} not in palette");
        }
        assert_eq!(app.pick_count, 50);
    }

    #[rstest]
    #[case(0, "red")]
    #[case(2, "green")]
    #[case(8, "turquoise")]
    fn simulated_draw_writes_expected_name(#[case] index: usize, #[case] expected: &str) {
        let mut app = App::new();
        app.apply_palette_index(index);
        assert_eq!(app.backdrop.get(), Some(expected));
        assert_eq!(app.last_index, Some(index));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut app = App::new();
        app.apply_palette_index(color::PALETTE.len());
        assert_eq!(app.backdrop.get(), None);
        assert_eq!(app.pick_count, 0);
    }

    #[test]
    fn unbound_key_changes_nothing() {
        let mut app = App::new();
        app.update(AppEvent::KeyPress(KeyCode::Char('x')));
        app.update(AppEvent::Tick);
        assert_eq!(app.backdrop.get(), None);
        assert_eq!(app.pick_count, 0);
    }

    #[test]
    fn click_inside_button_shuffles() {
        let mut app = app_with_viewport();
        let button = button_rect(Rect::new(0, 0, 80, 24));
        app.update(AppEvent::Click {
            column: button.x + button.width / 2,
            row: button.y + button.height / 2,
        });
        assert!(app.backdrop.get().is_some());
        assert_eq!(app.pick_count, 1);
    }

    #[test]
    fn click_outside_button_changes_nothing() {
        let mut app = app_with_viewport();
        app.update(AppEvent::Click { column: 0, row: 0 });
        assert_eq!(app.backdrop.get(), None);
        assert_eq!(app.pick_count, 0);
    }

    #[test]
    fn no_activation_while_help_is_open() {
        let mut app = app_with_viewport();
        app.update(AppEvent::KeyPress(KeyCode::Char('?')));
        assert_eq!(app.view, AppView::Help);
        let button = button_rect(Rect::new(0, 0, 80, 24));
        app.update(AppEvent::KeyPress(KeyCode::Char(' ')));
        app.update(AppEvent::Click {
            column: button.x + 1,
            row: button.y + 1,
        });
        assert_eq!(app.backdrop.get(), None);
        assert_eq!(app.pick_count, 0);
    }

    #[test]
    fn help_toggles_and_escape_goes_back() {
        let mut app = App::new();
        app.update(AppEvent::KeyPress(KeyCode::Char('?')));
        assert_eq!(app.view, AppView::Help);
        app.update(AppEvent::KeyPress(KeyCode::Esc));
        assert_eq!(app.view, AppView::Picker);
        app.update(AppEvent::KeyPress(KeyCode::Char('?')));
        app.update(AppEvent::KeyPress(KeyCode::Char('?')));
        assert_eq!(app.view, AppView::Picker);
    }

    #[test]
    fn quit_key_stops_the_loop() {
        let mut app = App::new();
        app.update(AppEvent::KeyPress(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn repeated_activations_may_repeat_values() {
        // No idempotence law: only membership is guaranteed, so two
        // consecutive picks are allowed to match.
        let mut app = App::new();
        app.update(AppEvent::KeyPress(KeyCode::Enter));
        let first = app.backdrop.get();
        app.update(AppEvent::KeyPress(KeyCode::Enter));
        let second = app.backdrop.get();
        assert!(first.is_some() && second.is_some());
        assert_eq!(app.pick_count, 2);
    }
}
