//! # ration-optimizer
//!
//! A terminal dashboard and library for choosing ration items that give the
//! most calories for the least weight.
//!
//! The catalog (item, menu, type, calories, grams) is loaded once and never
//! changes. Filter controls narrow it by calorie range, weight range and item
//! type; every change produces one filtered view from which all render models
//! are derived, so the scatter plot, the ranked bars and the data table always
//! show the same subset.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (filter) │    │(render) │    │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── EmbeddedSource | FileSource                 │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, view navigation and filter interaction
//! - **[`controls`]**: Range selectors and the type multi-select, clamped to
//!   the table's domain
//! - **[`source`]**: Catalog loading ([`CatalogSource`] trait) from the bundled
//!   catalog or a CSV/JSON file
//! - **[`data`]**: The validated table, the pure [`filter`] function, summary
//!   statistics, render models and export
//! - **[`ui`]**: Terminal rendering using ratatui
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Explore the bundled catalog
//! ration-optimizer
//!
//! # Explore your own catalog
//! ration-optimizer --data menus.csv
//!
//! # Write the filtered items and exit
//! ration-optimizer --export snacks.csv --types Snack --max-grams 50
//! ```
//!
//! ### As a library
//!
//! ```
//! use ration_optimizer::{filter, CatalogSource, EmbeddedSource};
//!
//! let table = EmbeddedSource::new().load().unwrap();
//! let mut bounds = table.full_bounds();
//! bounds.types.retain(|t| t == "Snack");
//!
//! let view = filter(table.items(), &bounds);
//! assert!(view.items().iter().all(|item| item.kind() == "Snack"));
//! ```

pub mod app;
pub mod config;
pub mod controls;
pub mod data;
pub mod error;
pub mod events;
pub mod logging;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use config::{Settings, ThemeChoice};
pub use controls::{FilterControls, RangeControl, TypeSelector};
pub use data::{
    filter, FilterBounds, FilteredView, Presentation, RationItem, RationTable, ValueRange,
    ViewSummary,
};
pub use error::LoadError;
pub use source::{source_for, CatalogSource, EmbeddedSource, FileSource};
