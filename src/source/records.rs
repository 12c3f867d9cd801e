//! Readers turning CSV and JSON catalogs into [`RawRow`]s.
//!
//! Column names are matched case-insensitively against the canonical
//! `Item, Menu, Type, Calories, Grams` header; extra columns are ignored.

use std::io::Read;

use csv::ReaderBuilder;
use serde_json::{Map, Value};

use crate::data::ration::{RawRow, COLUMNS};
use crate::error::LoadError;

/// Read a CSV catalog with a header row.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawRow>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_lowercase()).collect();
    let mut positions = [0usize; 5];
    for (slot, column) in positions.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == &column.to_lowercase())
            .ok_or(LoadError::MissingColumn(column))?;
    }
    let [item, menu, kind, calories, grams] = positions;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        // Skip fully blank lines instead of reporting five missing values.
        if record.iter().all(str::is_empty) {
            continue;
        }
        let field = |column: usize| record.get(column).filter(|v| !v.is_empty()).map(str::to_string);
        rows.push(RawRow {
            row: index + 1,
            item: field(item),
            menu: field(menu),
            kind: field(kind),
            calories: field(calories),
            grams: field(grams),
        });
    }
    Ok(rows)
}

/// Read a JSON catalog: an array of objects keyed by column name.
///
/// Numbers may be given as JSON numbers or numeric strings.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<RawRow>, LoadError> {
    let records: Vec<Map<String, Value>> = serde_json::from_reader(reader)?;

    for column in COLUMNS {
        let present = records.iter().any(|r| lookup(r, column).is_some());
        if !records.is_empty() && !present {
            return Err(LoadError::MissingColumn(column));
        }
    }

    Ok(records
        .iter()
        .enumerate()
        .map(|(index, record)| RawRow {
            row: index + 1,
            item: lookup(record, "Item"),
            menu: lookup(record, "Menu"),
            kind: lookup(record, "Type"),
            calories: lookup(record, "Calories"),
            grams: lookup(record, "Grams"),
        })
        .collect())
}

fn lookup(record: &Map<String, Value>, column: &str) -> Option<String> {
    let value = record
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(column))
        .map(|(_, value)| value)?;
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
