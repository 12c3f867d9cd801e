//! Application state and navigation logic.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::controls::FilterControls;
use crate::data::export::{export_view, ExportFormat};
use crate::data::{filter, Presentation, RationItem, RationTable};
use crate::ui::Theme;

/// How long a status message stays in the status bar.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// The current view/tab in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Weight vs. calories scatter plot.
    Scatter,
    /// Ranked bars for calories, weight and calories per gram.
    Rankings,
    /// Raw table of the filtered items.
    Data,
}

impl View {
    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Scatter => View::Rankings,
            View::Rankings => View::Data,
            View::Data => View::Scatter,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        match self {
            View::Scatter => View::Data,
            View::Rankings => View::Scatter,
            View::Data => View::Rankings,
        }
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Scatter => "Weight vs Calories",
            View::Rankings => "Rankings",
            View::Data => "Data",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            View::Scatter => 0,
            View::Rankings => 1,
            View::Data => 2,
        }
    }
}

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The filter sidebar.
    Filters,
    /// The current view (row selection).
    Content,
}

/// Main application state.
///
/// The table is loaded once and never changes. Every filter change goes
/// through [`App::refresh`], which replaces the whole [`Presentation`] so
/// that all views render from the same filtered snapshot.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub focus: Focus,
    pub show_help: bool,
    pub show_about: bool,

    // Data
    table: RationTable,
    types: Vec<String>,
    pub controls: FilterControls,
    presentation: Presentation,

    // Row selection within the filtered view
    pub selected_row: usize,

    // UI
    pub theme: Theme,
    pub export_path: PathBuf,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App over a loaded table, with every filter wide open.
    pub fn new(table: RationTable, theme: Theme) -> Self {
        let controls = FilterControls::for_table(&table);
        let types = table.types();
        let presentation = Presentation::build(filter(table.items(), &controls.bounds()), &types);

        Self {
            running: true,
            current_view: View::Scatter,
            focus: Focus::Filters,
            show_help: false,
            show_about: false,
            table,
            types,
            controls,
            presentation,
            selected_row: 0,
            theme,
            export_path: PathBuf::from("rations_export.json"),
            status_message: None,
        }
    }

    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }

    pub fn table(&self) -> &RationTable {
        &self.table
    }

    /// Observed item types, in selector order.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// The render models for the current filter state.
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Returns a description of the catalog source.
    pub fn source_description(&self) -> &str {
        self.table.source()
    }

    /// Recompute the filtered view and every render model from the controls.
    fn refresh(&mut self) {
        let bounds = self.controls.bounds();
        let view = filter(self.table.items(), &bounds);
        tracing::debug!(
            matched = view.len(),
            total = self.table.len(),
            calories = ?bounds.calories,
            grams = ?bounds.grams,
            types = bounds.types.len(),
            "filters changed"
        );
        self.presentation = Presentation::build(view, &self.types);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let count = self.presentation.view.len();
        if self.selected_row >= count {
            self.selected_row = count.saturating_sub(1);
        }
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, time)) if time.elapsed() < STATUS_MESSAGE_TTL => Some(msg),
            _ => None,
        }
    }

    /// Switch to the next view (cycles Scatter → Rankings → Data).
    pub fn next_view(&mut self) {
        self.current_view = self.current_view.next();
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.current_view = self.current_view.prev();
    }

    /// Switch to a specific view.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Move keyboard focus between the filter sidebar and the view.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Filters => Focus::Content,
            Focus::Content => Focus::Filters,
        };
    }

    // ----- filter controls -----

    pub fn control_next(&mut self) {
        self.controls.cursor_next();
    }

    pub fn control_prev(&mut self) {
        self.controls.cursor_prev();
    }

    /// Move the lower thumb of the focused range control.
    pub fn nudge_lower(&mut self, steps: i32) {
        let changed = self.controls.focused_range().is_some_and(|r| r.nudge_lower(steps));
        if changed {
            self.refresh();
        }
    }

    /// Move the upper thumb of the focused range control.
    pub fn nudge_upper(&mut self, steps: i32) {
        let changed = self.controls.focused_range().is_some_and(|r| r.nudge_upper(steps));
        if changed {
            self.refresh();
        }
    }

    /// Toggle the type under the cursor.
    pub fn toggle_type(&mut self) {
        if self.controls.toggle_focused_type() {
            self.refresh();
        }
    }

    pub fn select_all_types(&mut self) {
        if self.controls.types.select_all() {
            self.refresh();
        }
    }

    /// Widen every control back to the full domain.
    pub fn reset_filters(&mut self) {
        if self.controls.reset() {
            self.refresh();
            self.set_status_message("Filters reset".to_string());
        }
    }

    // ----- row selection -----

    /// Move selection down by one item.
    pub fn select_next(&mut self) {
        self.select_next_n(1);
    }

    /// Move selection up by one item.
    pub fn select_prev(&mut self) {
        self.select_prev_n(1);
    }

    /// Move selection down by n items.
    pub fn select_next_n(&mut self, n: usize) {
        let max = self.presentation.view.len().saturating_sub(1);
        self.selected_row = (self.selected_row + n).min(max);
    }

    /// Move selection up by n items.
    pub fn select_prev_n(&mut self, n: usize) {
        self.selected_row = self.selected_row.saturating_sub(n);
    }

    /// Jump to the first item in the list.
    pub fn select_first(&mut self) {
        self.selected_row = 0;
    }

    /// Jump to the last item in the list.
    pub fn select_last(&mut self) {
        self.selected_row = self.presentation.view.len().saturating_sub(1);
    }

    /// The selected item of the filtered view, if the view is not empty.
    pub fn selected_item(&self) -> Option<&RationItem> {
        self.presentation.view.items().get(self.selected_row)
    }

    // ----- overlays -----

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Toggle the about overlay.
    pub fn toggle_about(&mut self) {
        self.show_about = !self.show_about;
    }

    /// Navigate back: close overlays first, then return focus to the filters.
    pub fn go_back(&mut self) {
        if self.show_help || self.show_about {
            self.show_help = false;
            self.show_about = false;
            return;
        }
        self.focus = Focus::Filters;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the current filtered view to [`App::export_path`].
    pub fn export_state(&self) -> Result<ExportFormat> {
        self.export_to(&self.export_path)
    }

    pub fn export_to(&self, path: &Path) -> Result<ExportFormat> {
        export_view(
            &self.presentation.view,
            &self.controls.bounds(),
            self.table.source(),
            path,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::ControlFocus;

    fn app() -> App {
        let items = vec![
            RationItem::new(1, "A", "Menu 1", "Entree", 300.0, 100.0).unwrap(),
            RationItem::new(2, "B", "Menu 1", "Snack", 150.0, 30.0).unwrap(),
            RationItem::new(3, "C", "Menu 2", "Snack", 80.0, 28.0).unwrap(),
        ];
        App::new(RationTable::from_items(items, "test").unwrap(), Theme::dark())
    }

    #[test]
    fn test_starts_unfiltered() {
        let app = app();
        assert_eq!(app.presentation().view.items(), app.table().items());
        assert_eq!(app.current_view, View::Scatter);
        assert_eq!(app.focus, Focus::Filters);
    }

    #[test]
    fn test_view_cycle() {
        let mut app = app();
        app.next_view();
        assert_eq!(app.current_view, View::Rankings);
        app.next_view();
        app.next_view();
        assert_eq!(app.current_view, View::Scatter);
        app.prev_view();
        assert_eq!(app.current_view, View::Data);
    }

    #[test]
    fn test_raising_calorie_floor_refilters() {
        let mut app = app();
        assert_eq!(app.controls.focus(), ControlFocus::Calories);
        // Domain 80..300, step 2: 40 steps puts the floor at 160.
        app.nudge_lower(40);
        let names: Vec<&str> = app.presentation().view.items().iter().map(|i| i.item()).collect();
        assert_eq!(names, vec!["A"]);
        assert_eq!(app.presentation().summary.count, 1);
    }

    #[test]
    fn test_deselecting_every_type_empties_all_views() {
        let mut app = app();
        app.control_next();
        app.control_next();
        app.toggle_type();
        app.control_next();
        app.toggle_type();

        let p = app.presentation();
        assert!(p.is_empty());
        assert!(p.scatter.is_none());
        assert!(p.rankings.is_none());
        assert!(app.selected_item().is_none());

        app.select_all_types();
        assert_eq!(app.presentation().view.len(), 3);
    }

    #[test]
    fn test_selection_clamped_after_refilter() {
        let mut app = app();
        app.select_last();
        assert_eq!(app.selected_row, 2);
        assert_eq!(app.selected_item().unwrap().item(), "C");

        app.nudge_upper(-200); // calorie ceiling down to the floor (80)
        assert_eq!(app.presentation().view.len(), 1);
        assert_eq!(app.selected_row, 0);
        assert_eq!(app.selected_item().unwrap().item(), "C");
    }

    #[test]
    fn test_reset_filters() {
        let mut app = app();
        app.nudge_lower(40);
        app.reset_filters();
        assert_eq!(app.presentation().view.len(), 3);
        assert_eq!(app.get_status_message(), Some("Filters reset"));
    }

    #[test]
    fn test_go_back_closes_overlays_then_focus() {
        let mut app = app();
        app.toggle_focus();
        app.toggle_help();
        app.go_back();
        assert!(!app.show_help);
        assert_eq!(app.focus, Focus::Content);
        app.go_back();
        assert_eq!(app.focus, Focus::Filters);
    }

    #[test]
    fn test_export_state_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let app = app().with_export_path(&path);
        assert_eq!(app.export_state().unwrap(), ExportFormat::Csv);
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 4);
    }
}
