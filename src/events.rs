use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, Focus, View};

/// Rows moved by PageUp/PageDown.
const PAGE: usize = 10;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If an overlay is shown, any key closes it
    if app.show_help || app.show_about {
        app.show_help = false;
        app.show_about = false;
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // View switching
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_view();
            } else {
                app.next_view();
            }
        }
        KeyCode::BackTab => app.prev_view(),
        KeyCode::Char('1') => app.set_view(View::Scatter),
        KeyCode::Char('2') => app.set_view(View::Rankings),
        KeyCode::Char('3') => app.set_view(View::Data),

        // Focus
        KeyCode::Char('f') => app.toggle_focus(),
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),

        // Filters
        KeyCode::Char('r') => app.reset_filters(),

        // Overlays
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('i') => app.toggle_about(),

        // Export
        KeyCode::Char('e') => match app.export_state() {
            Ok(_) => {
                let msg = format!(
                    "Exported {} items to {}",
                    app.presentation().view.len(),
                    app.export_path.display()
                );
                app.set_status_message(msg);
            }
            Err(e) => {
                tracing::warn!(error = %e, "export failed");
                app.set_status_message(format!("Export failed: {}", e));
            }
        },

        _ => match app.focus {
            Focus::Filters => handle_filter_key(app, key),
            Focus::Content => handle_content_key(app, key),
        },
    }
}

/// Keys while the filter sidebar has focus.
fn handle_filter_key(app: &mut App, key: KeyEvent) {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.control_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.control_next(),

        // Lower thumb
        KeyCode::Left | KeyCode::Char('h') if !shift => app.nudge_lower(-1),
        KeyCode::Right | KeyCode::Char('l') if !shift => app.nudge_lower(1),

        // Upper thumb
        KeyCode::Left | KeyCode::Char('H') => app.nudge_upper(-1),
        KeyCode::Right | KeyCode::Char('L') => app.nudge_upper(1),

        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_type(),
        KeyCode::Char('a') => app.select_all_types(),
        _ => {}
    }
}

/// Keys while the view has focus.
fn handle_content_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_view(),
        KeyCode::Right | KeyCode::Char('l') => app.next_view(),
        KeyCode::PageUp => app.select_prev_n(PAGE),
        KeyCode::PageDown => app.select_next_n(PAGE),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, tab_row: u16) {
    match mouse.kind {
        // Scroll wheel moves the row selection
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),

        MouseEventKind::Down(MouseButton::Left) if mouse.row == tab_row => {
            if let Some(view) = crate::ui::common::tab_at_column(mouse.column) {
                app.set_view(view);
            }
        }

        // Right-click goes back
        MouseEventKind::Down(MouseButton::Right) => app.go_back(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{RationItem, RationTable};
    use crate::ui::Theme;

    fn app() -> App {
        let items = vec![
            RationItem::new(1, "A", "Menu 1", "Entree", 300.0, 100.0).unwrap(),
            RationItem::new(2, "B", "Menu 1", "Snack", 150.0, 30.0).unwrap(),
        ];
        App::new(RationTable::from_items(items, "test").unwrap(), Theme::dark())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shift(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_arrow_moves_lower_thumb_shift_moves_upper() {
        let mut app = app();
        let domain = app.controls.calories.domain();
        let step = app.controls.calories.step();

        handle_key_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.controls.calories.current().min, domain.min + step);

        handle_key_event(&mut app, shift(KeyCode::Left));
        assert_eq!(app.controls.calories.current().max, domain.max - step);

        handle_key_event(&mut app, key(KeyCode::Char('L')));
        assert_eq!(app.controls.calories.current().max, domain.max);
    }

    #[test]
    fn test_space_toggles_type_under_cursor() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Down));
        handle_key_event(&mut app, key(KeyCode::Down));
        handle_key_event(&mut app, key(KeyCode::Char(' ')));
        // Types are sorted: Entree is first.
        let names: Vec<&str> = app.presentation().view.items().iter().map(|i| i.item()).collect();
        assert_eq!(names, vec!["B"]);

        handle_key_event(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.presentation().view.len(), 2);
    }

    #[test]
    fn test_content_focus_moves_selection() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.focus, Focus::Content);
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected_row, 1);
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected_row, 1);
        handle_key_event(&mut app, key(KeyCode::Home));
        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn test_any_key_closes_help() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn test_number_keys_switch_views() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.current_view, View::Data);
        handle_key_event(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.current_view, View::Rankings);
    }

    #[test]
    fn test_tab_click_switches_view() {
        let mut app = app();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 40,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, click, 1);
        assert_eq!(app.current_view, View::Data);
    }
}
