//! Data models and the filter-and-present pipeline.
//!
//! ## Submodules
//!
//! - [`ration`]: [`RationItem`] and validation of raw catalog records
//! - [`table`]: the immutable [`RationTable`] loaded once per session
//! - [`filter`]: [`filter`](filter::filter), [`FilterBounds`] and [`FilteredView`]
//! - [`presentation`]: scatter and ranked bar models built from one view
//! - [`export`]: writing a filtered view to CSV or JSON
//!
//! ## Data Flow
//!
//! ```text
//! CatalogSource::load()
//!        │
//!        ▼
//!   RationTable (immutable, calories_per_gram derived per item)
//!        │
//!        ▼  FilterControls::bounds()
//! filter(table.items(), &bounds) ──▶ FilteredView
//!        │
//!        ▼
//! Presentation::build() ──▶ scatter / rankings / table views
//! ```

pub mod export;
pub mod filter;
pub mod presentation;
pub mod ration;
pub mod table;

pub use filter::{filter, FilterBounds, FilteredView, ValueRange, ViewSummary};
pub use presentation::{Metric, Presentation, RankedBars, Rankings, ScatterPlot, ScatterSeries};
pub use ration::{RationItem, RawRow};
pub use table::RationTable;
