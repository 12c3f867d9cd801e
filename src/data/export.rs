//! Export of the current filtered view.
//!
//! Used both by the `--export` command line mode and by the `e` key in the
//! TUI. The format follows the file extension: `.csv` writes the raw rows,
//! anything else writes a JSON document with a summary block.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::filter::{filter, FilterBounds, FilteredView, ValueRange};
use super::ration::COLUMNS;
use super::table::RationTable;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Json,
        }
    }
}

/// Filter flags of a headless export. Unset limits fall back to the table's
/// domain; unset types select every type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportRequest {
    pub min_calories: Option<f64>,
    pub max_calories: Option<f64>,
    pub min_grams: Option<f64>,
    pub max_grams: Option<f64>,
    pub types: Option<Vec<String>>,
}

impl ExportRequest {
    /// Resolve the request against `table`.
    ///
    /// Limits are taken as given, not clamped into the domain, so a range
    /// outside the data selects nothing. A reversed pair is swapped.
    pub fn bounds(&self, table: &RationTable) -> Result<FilterBounds> {
        let limits = [
            ("--min-calories", self.min_calories),
            ("--max-calories", self.max_calories),
            ("--min-grams", self.min_grams),
            ("--max-grams", self.max_grams),
        ];
        for (flag, value) in limits {
            if value.is_some_and(|v| !v.is_finite()) {
                bail!("{} must be a finite number", flag);
            }
        }

        let calories = table.calorie_domain();
        let grams = table.weight_domain();
        let known = table.types();

        let types = match &self.types {
            None => known.iter().cloned().collect(),
            Some(names) => {
                let mut selected = std::collections::BTreeSet::new();
                let mut unknown = Vec::new();
                for name in names {
                    match known.iter().find(|t| t.eq_ignore_ascii_case(name)) {
                        Some(kind) => {
                            selected.insert(kind.clone());
                        }
                        None => unknown.push(name.as_str()),
                    }
                }
                if !unknown.is_empty() {
                    bail!(
                        "unknown item type(s): {} (known types: {})",
                        unknown.join(", "),
                        known.join(", ")
                    );
                }
                selected
            }
        };

        Ok(FilterBounds {
            calories: resolve(self.min_calories, self.max_calories, calories),
            grams: resolve(self.min_grams, self.max_grams, grams),
            types,
        })
    }
}

/// An explicit reversed pair is swapped. A single limit on the far side of
/// the domain yields a range with `min > max`, which matches nothing.
fn resolve(min: Option<f64>, max: Option<f64>, domain: ValueRange) -> ValueRange {
    match (min, max) {
        (Some(a), Some(b)) if a > b => ValueRange::new(b, a),
        _ => ValueRange::new(min.unwrap_or(domain.min), max.unwrap_or(domain.max)),
    }
}

/// Apply `request` to `table` and write the matching items to `path`.
///
/// Returns the exported view.
pub fn export_filtered(
    table: &RationTable,
    request: &ExportRequest,
    path: &Path,
) -> Result<FilteredView> {
    let bounds = request.bounds(table)?;
    let view = filter(table.items(), &bounds);
    export_view(&view, &bounds, table.source(), path)?;
    Ok(view)
}

/// Write `view` to `path`. An empty view produces a file with no items.
pub fn export_view(
    view: &FilteredView,
    bounds: &FilterBounds,
    source: &str,
    path: &Path,
) -> Result<ExportFormat> {
    let format = ExportFormat::for_path(path);
    match format {
        ExportFormat::Csv => write_csv(view, path)?,
        ExportFormat::Json => write_json(view, bounds, source, path)?,
    }
    tracing::info!(path = %path.display(), items = view.len(), ?format, "exported filtered view");
    Ok(format)
}

fn write_csv(view: &FilteredView, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    let mut header: Vec<&str> = COLUMNS.to_vec();
    header.push("Calories per Gram");
    writer.write_record(&header)?;

    for item in view.items() {
        writer.write_record([
            item.item().to_string(),
            item.menu().to_string(),
            item.kind().to_string(),
            item.calories().to_string(),
            item.grams().to_string(),
            format!("{:.4}", item.calories_per_gram()),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(view: &FilteredView, bounds: &FilterBounds, source: &str, path: &Path) -> Result<()> {
    let document = serde_json::json!({
        "source": source,
        "summary": view.summary(),
        "filters": bounds,
        "items": view.items(),
    });
    let json = serde_json::to_string_pretty(&document)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
