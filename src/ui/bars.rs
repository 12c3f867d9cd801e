//! Ranked bar views: calories, weight and calories per gram.
//!
//! Each metric is a horizontal bar chart ranked highest first. Bars only
//! take integer values, so every value is scaled by [`SCALE`] before it is
//! handed to the chart and printed from the original value.
//!
//! A chart shows one bar per row. When there are more entries than rows it
//! shows a window that scrolls to keep the selected item in view.

use std::ops::Range;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use crate::app::{App, Focus};
use crate::data::RankedBars;

use super::common::render_empty;

/// Fixed-point factor applied to bar values (keeps two decimals).
const SCALE: f64 = 100.0;

/// Render the rankings view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(rankings) = app.presentation().rankings.as_ref() else {
        render_empty(frame, app, area, "Rankings");
        return;
    };

    let rows = Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).split(area);
    let top = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_ranking(frame, app, &rankings.calories, top[0]);
    render_ranking(frame, app, &rankings.grams, top[1]);
    render_ranking(frame, app, &rankings.density, rows[1]);
}

fn render_ranking(frame: &mut Frame, app: &App, ranked: &RankedBars, area: Rect) {
    let label_width = area.width.saturating_sub(2) / 3;
    let total = ranked.entries.len();
    let rank = ranked.entries.iter().position(|e| e.row == app.selected_row);
    let shown = visible_window(total, area.height.saturating_sub(2) as usize, rank);

    let bars: Vec<Bar> = ranked.entries[shown.clone()]
        .iter()
        .map(|entry| {
            let mut style = Style::default().fg(app.theme.bar);
            let mut label_style = Style::default();
            if entry.row == app.selected_row {
                style = Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD);
                label_style = app.theme.selected;
            }
            Bar::default()
                .value(scaled(entry.value))
                .label(Line::styled(truncate(&entry.item, label_width as usize), label_style))
                .text_value(ranked.metric.format(entry.value))
                .style(style)
                .value_style(Style::default().add_modifier(Modifier::BOLD))
        })
        .collect();

    let title = if shown.len() == total {
        format!(" {} ({}) ", ranked.metric.label(), total)
    } else {
        format!(
            " {} ({}-{} of {}) ",
            ranked.metric.label(),
            shown.start + 1,
            shown.end,
            total
        )
    };
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(app.theme.panel_border(app.focus == Focus::Content)),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(scaled(ranked.max_value()).max(1))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Ranks to draw when `rows` bars fit: from the top, scrolled just far
/// enough that `selected` is the last visible bar.
fn visible_window(total: usize, rows: usize, selected: Option<usize>) -> Range<usize> {
    let rows = rows.min(total);
    if rows == 0 {
        return 0..0;
    }
    let start = match selected {
        Some(rank) if rank >= rows => rank + 1 - rows,
        _ => 0,
    };
    start..start + rows
}

fn scaled(value: f64) -> u64 {
    (value * SCALE).round().max(0.0) as u64
}

/// Cut a label to `width` characters, marking the cut with `…`.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}
