//! Terminal UI rendering using ratatui.
//!
//! Each view is implemented in its own submodule with a `render` function;
//! [`draw`] lays them out and is the only entry point the main loop needs.
//!
//! ## Submodules
//!
//! - [`scatter`]: Weight vs. calories scatter plot, one colour per item type
//! - [`bars`]: Ranked bars for calories, weight and calories per gram
//! - [`table`]: The filtered items as a table
//! - [`filters`]: Sidebar with the range controls and type checkboxes
//! - [`common`]: Shared components (header, tabs, status bar, overlays)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Tabs (common::render_tabs)           │
//! ├──────────┬───────────────────────────┤
//! │ Filters  │ View content              │
//! │          │ (scatter/bars/table)      │
//! ├──────────┴───────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlays rendered on top:
//!    - common::render_help
//!    - common::render_about
//! ```

pub mod bars;
pub mod common;
pub mod filters;
pub mod scatter;
pub mod table;
pub mod theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub use theme::Theme;

use crate::app::{App, View};

/// Minimum terminal size for a usable display.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 16;

/// Row of the tab bar, for mouse hit-testing.
pub const TAB_ROW: u16 = 1;

const SIDEBAR_WIDTH: u16 = 30;

/// Draw the whole screen for the current application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // Tabs
        Constraint::Min(8),    // Body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    common::render_tabs(frame, app, chunks[1]);

    let body = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[2]);
    filters::render(frame, app, body[0]);

    match app.current_view {
        View::Scatter => scatter::render(frame, app, body[1]),
        View::Rankings => bars::render(frame, app, body[1]),
        View::Data => table::render(frame, app, body[1]),
    }

    common::render_status_bar(frame, app, chunks[3]);

    if app.show_help {
        common::render_help(frame, app, area);
    } else if app.show_about {
        common::render_about(frame, app, area);
    }
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );
    let paragraph = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    let height = area.height.min(5);
    let centered = Rect::new(area.x, area.y + (area.height - height) / 2, area.width, height);
    frame.render_widget(paragraph, centered);
}
