//! Data view rendering.
//!
//! Displays the filtered items as a table with their derived calories per
//! gram, in source order.

use ratatui::{
    layout::{Constraint, Rect},
    text::Text,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::app::{App, Focus};
use crate::data::presentation::format_amount;

/// Render the Data view showing every filtered item.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.presentation().view;

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Item"),
        Cell::from("Menu"),
        Cell::from("Type"),
        Cell::from(Text::from("Calories").right_aligned()),
        Cell::from(Text::from("Grams").right_aligned()),
        Cell::from(Text::from("Cal/g").right_aligned()),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = view
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Row::new(vec![
                Cell::from((index + 1).to_string()),
                Cell::from(item.item().to_string()),
                Cell::from(item.menu().to_string()),
                Cell::from(item.kind().to_string()),
                Cell::from(Text::from(format_amount(item.calories())).right_aligned()),
                Cell::from(Text::from(format_amount(item.grams())).right_aligned()),
                Cell::from(Text::from(format!("{:.2}", item.calories_per_gram())).right_aligned()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Fill(3), // Item - widest column
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Length(7),
        Constraint::Length(7),
    ];

    let position_info = if view.is_empty() {
        String::new()
    } else {
        format!(" [{}/{}]", app.selected_row + 1, view.len())
    };
    let title = format!(
        " Items ({}/{}){} ",
        view.len(),
        app.table().len(),
        position_info
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(app.theme.panel_border(app.focus == Focus::Content)),
        )
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if !view.is_empty() {
        state.select(Some(app.selected_row));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
