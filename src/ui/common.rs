//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, the help and
//! about overlays, and the placeholder drawn for an empty selection.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, Focus, View};
use crate::data::presentation::format_amount;

/// Tab titles, in [`View::index`] order.
const TAB_TITLES: [&str; 3] = ["1:Weight vs Calories", "2:Rankings", "3:Data"];

/// Render the header bar with totals of the current selection.
///
/// Displays: matched/total items, total calories and grams, overall density
/// and the densest item.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let summary = &app.presentation().summary;
    let total = app.table().len();
    let active = app.controls.active_count();

    let indicator_style = if summary.count == 0 {
        app.theme.muted
    } else {
        Style::default().fg(app.theme.highlight)
    };

    let mut spans = vec![
        Span::styled(" ● ", indicator_style),
        Span::styled("RATIONS OPTIMIZER ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(
            format!("{}", summary.count),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("/{} items ", total)),
    ];

    if active > 0 {
        spans.push(Span::styled(
            format!("({} filter{}) ", active, if active == 1 { "" } else { "s" }),
            Style::default().fg(app.theme.highlight),
        ));
    }

    match (&summary.calories_per_gram, &summary.densest) {
        (Some(density), Some(densest)) => {
            spans.push(Span::raw(format!(
                "│ {} kcal │ {} g │ {:.2} cal/g │ densest: ",
                format_count(summary.total_calories),
                format_count(summary.total_grams),
                density,
            )));
            spans.push(Span::styled(
                format!("{} ({:.2})", densest.item, densest.calories_per_gram),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        _ => spans.push(Span::styled(
            "│ no items match the current filters",
            app.theme.muted,
        )),
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Format a total for display (e.g., 1234 -> "1.2K").
pub fn format_count(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else {
        format_amount(n)
    }
}

/// Render the tab bar showing available views.
///
/// Highlights the currently active view.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = TAB_TITLES.iter().map(|t| Line::from(*t)).collect();

    let tabs = Tabs::new(titles)
        .select(app.current_view.index())
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Map a click column on the tab row to a view.
///
/// Mirrors the [`Tabs`] layout: one cell of padding on each side of a title
/// and a one-cell divider between tabs.
pub fn tab_at_column(column: u16) -> Option<View> {
    let views = [View::Scatter, View::Rankings, View::Data];
    let mut start = 0u16;
    for (title, view) in TAB_TITLES.iter().zip(views) {
        let end = start + title.chars().count() as u16 + 2;
        if column < end {
            return (column >= start).then_some(view);
        }
        start = end + 1;
    }
    None
}

/// Render the status bar at the bottom.
///
/// Shows: catalog source, focused panel, available controls.
/// Temporary status messages take precedence.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = match app.focus {
        Focus::Filters => "↑↓:control ←→:min ⇧←→:max Space:type a:all r:reset f:view ?:help q:quit",
        Focus::Content => "↑↓:select Tab:switch Esc:filters e:export i:about ?:help q:quit",
    };

    let status = format!(" {} | {}", app.source_description(), controls);
    let paragraph = Paragraph::new(status).style(app.theme.muted);
    frame.render_widget(paragraph, area);
}

/// Placeholder for a view with nothing to draw.
pub fn render_empty(frame: &mut Frame, app: &App, area: Rect, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("Nothing to show", app.theme.muted)),
        Line::from(Span::styled(
            "No items match the current filters (r: reset)",
            app.theme.muted,
        )),
    ])
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let section = |name: &'static str| {
        Line::from(vec![Span::styled(name, Style::default().add_modifier(Modifier::BOLD))])
    };

    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        section(" Filters (sidebar)"),
        Line::from("  ↑/↓ j/k       Move between controls"),
        Line::from("  ←/→ h/l       Move range minimum"),
        Line::from("  ⇧←/→ H/L      Move range maximum"),
        Line::from("  Space/Enter   Toggle item type"),
        Line::from("  a             Select all types"),
        Line::from("  r             Reset all filters"),
        Line::from(""),
        section(" Views"),
        Line::from("  Tab/1-3       Switch view"),
        Line::from("  f             Focus filters / view"),
        Line::from("  ↑/↓ j/k       Select item"),
        Line::from("  PgUp/PgDn     Jump 10 items"),
        Line::from("  Home/End      First/last item"),
        Line::from(""),
        section(" General"),
        Line::from("  e             Export filtered items"),
        Line::from("  i             About"),
        Line::from("  q             Quit"),
        Line::from(""),
        Line::from(vec![Span::styled("Press any key to close", app.theme.muted)]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);
    render_centered(frame, paragraph, area, 46, 26);
}

/// Render the about overlay describing what the dashboard is for.
pub fn render_about(frame: &mut Frame, app: &App, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let text = vec![
        Line::from(Span::styled("Rations Optimizer", app.theme.header)),
        Line::from(""),
        Line::from(
            "Filter ration items to maximize calories while minimizing weight. \
             Compare the caloric density (calories per gram) of every item.",
        ),
        Line::from(""),
        Line::from(Span::styled("Key metrics", bold)),
        Line::from("  Calories per Gram: energy per unit of weight, higher is better"),
        Line::from("  Calories: total energy content of an item"),
        Line::from("  Grams: weight to carry"),
        Line::from(""),
        Line::from(
            "Narrow calories and weight, pick item types, and read the scatter \
             plot and rankings to find the best energy for the load.",
        ),
        Line::from(""),
        Line::from(Span::styled(
            format!("Source: {}", app.source_description()),
            app.theme.muted,
        )),
        Line::from(Span::styled("Press any key to close", app.theme.muted)),
    ];

    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    render_centered(frame, paragraph, area, 64, 20);
}

/// Draw a widget centered in `area`, clearing what is behind it.
fn render_centered(frame: &mut Frame, widget: Paragraph, area: Rect, width: u16, height: u16) {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay = Rect::new(x, y, width, height);

    frame.render_widget(Clear, overlay);
    frame.render_widget(widget, overlay);
}
