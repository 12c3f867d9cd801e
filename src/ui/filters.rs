//! Filter sidebar rendering.
//!
//! Shows the two range controls as a track with both thumbs, followed by
//! one checkbox per item type. The control under the cursor is highlighted
//! while the sidebar has focus.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::controls::{ControlFocus, RangeControl};
use crate::data::presentation::format_amount;

/// Render the filter sidebar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Filters;
    let cursor = focused.then(|| app.controls.focus());
    let track_width = area.width.saturating_sub(4) as usize;

    let mut lines = Vec::new();
    lines.extend(range_lines(
        app,
        &app.controls.calories,
        cursor == Some(ControlFocus::Calories),
        track_width,
    ));
    lines.push(Line::from(""));
    lines.extend(range_lines(
        app,
        &app.controls.grams,
        cursor == Some(ControlFocus::Grams),
        track_width,
    ));
    lines.push(Line::from(""));

    let types = &app.controls.types;
    lines.push(Line::from(Span::styled(
        format!("Type ({}/{})", types.selected_count(), types.options().len()),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (index, name) in types.options().iter().enumerate() {
        let mark = if types.is_selected(index) { "[x]" } else { "[ ]" };
        let mut style = Style::default().fg(app.theme.series_color(index));
        if cursor == Some(ControlFocus::Type(index)) {
            style = style.patch(app.theme.selected);
        }
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("{} {}", mark, name), style),
        ]));
    }

    let block = Block::default()
        .title(" Filters ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.panel_border(focused));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn range_lines(
    app: &App,
    control: &RangeControl,
    selected: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let current = control.current();
    let mut title = Style::default().add_modifier(Modifier::BOLD);
    if selected {
        title = title.patch(app.theme.selected);
    }

    vec![
        Line::from(Span::styled(control.label().to_string(), title)),
        Line::from(Span::styled(
            format!(" {}", slider_track(control, width)),
            Style::default().fg(app.theme.highlight),
        )),
        Line::from(format!(
            " {} – {}",
            format_amount(current.min),
            format_amount(current.max)
        )),
    ]
}

/// Draw the selected range on a track of `width` cells.
///
/// Thumbs are `●`, the selected span is `━` and the rest `─`.
pub fn slider_track(control: &RangeControl, width: usize) -> String {
    if width < 2 {
        return String::new();
    }
    let domain = control.domain();
    let current = control.current();
    let last = (width - 1) as f64;
    let cell = |value: f64| -> usize {
        if domain.span() == 0.0 {
            return 0;
        }
        (((value - domain.min) / domain.span()) * last).round() as usize
    };
    let lo = cell(current.min);
    let hi = cell(current.max).max(lo);

    (0..width)
        .map(|i| {
            if i == lo || i == hi {
                '●'
            } else if i > lo && i < hi {
                '━'
            } else {
                '─'
            }
        })
        .collect()
}
