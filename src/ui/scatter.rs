//! Weight vs. calories scatter plot.
//!
//! One dataset per item type, coloured by the type's position among all
//! table types. The selected item is drawn on top as its own dataset and
//! named in the title.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

use crate::app::{App, Focus};
use crate::data::presentation::format_amount;

use super::common::render_empty;

/// Render the scatter view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(plot) = app.presentation().scatter.as_ref() else {
        render_empty(frame, app, area, "Weight vs Calories");
        return;
    };

    let selected = app.selected_item();
    let selected_point: Vec<(f64, f64)> =
        selected.map(|item| vec![(item.grams(), item.calories())]).unwrap_or_default();

    let mut datasets: Vec<Dataset> = plot
        .series
        .iter()
        .map(|series| {
            Dataset::default()
                .name(series.kind.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(app.theme.series_color(series.color_index)))
                .data(&series.points)
        })
        .collect();

    if !selected_point.is_empty() {
        datasets.push(
            Dataset::default()
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD))
                .data(&selected_point),
        );
    }

    let title = match selected {
        Some(item) => format!(
            " Weight vs Calories │ {} ({}): {} g, {} kcal, {:.2} cal/g ",
            item.item(),
            item.menu(),
            format_amount(item.grams()),
            format_amount(item.calories()),
            item.calories_per_gram(),
        ),
        None => " Weight vs Calories ".to_string(),
    };

    let x_axis = Axis::default()
        .title(Span::styled("Weight (g)", app.theme.muted))
        .style(Style::default().fg(app.theme.border))
        .bounds(plot.x_bounds)
        .labels(axis_labels(plot.x_bounds));
    let y_axis = Axis::default()
        .title(Span::styled("Calories", app.theme.muted))
        .style(Style::default().fg(app.theme.border))
        .bounds(plot.y_bounds)
        .labels(axis_labels(plot.y_bounds));

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(app.theme.panel_border(app.focus == Focus::Content)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(Some(LegendPosition::TopLeft));

    frame.render_widget(chart, area);
}

/// Low, middle and high tick labels for an axis.
fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
    let [lo, hi] = bounds;
    [lo, (lo + hi) / 2.0, hi].iter().map(|v| format!("{:.0}", v)).collect()
}
