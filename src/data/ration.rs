//! Ration items and their validation.
//!
//! Sources hand over loosely typed [`RawRow`]s; [`RationItem::from_raw`] is the
//! single place where text becomes numbers and where the load-time invariants
//! (`grams > 0`, finite values, derived density) are enforced.

use serde::Serialize;

use crate::error::LoadError;

/// Canonical column names of a ration catalog, in display order.
pub const COLUMNS: [&str; 5] = ["Item", "Menu", "Type", "Calories", "Grams"];

/// One unvalidated catalog record, as read from a source.
///
/// Values are kept as trimmed text so that every source (CSV, JSON, the
/// embedded catalog) goes through the same numeric validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    /// 1-based position of the record among data rows.
    pub row: usize,
    pub item: Option<String>,
    pub menu: Option<String>,
    pub kind: Option<String>,
    pub calories: Option<String>,
    pub grams: Option<String>,
}

/// A single ration item with its derived caloric density.
///
/// Fields are private: `calories_per_gram` is computed once from `calories`
/// and `grams` in the constructor and can never be set on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RationItem {
    #[serde(rename = "Item")]
    item: String,
    #[serde(rename = "Menu")]
    menu: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Calories")]
    calories: f64,
    #[serde(rename = "Grams")]
    grams: f64,
    #[serde(rename = "Calories per Gram")]
    calories_per_gram: f64,
}

impl RationItem {
    /// Build an item from already-typed values.
    ///
    /// `row` is only used for error reporting.
    pub fn new(
        row: usize,
        item: impl Into<String>,
        menu: impl Into<String>,
        kind: impl Into<String>,
        calories: f64,
        grams: f64,
    ) -> Result<Self, LoadError> {
        if !calories.is_finite() {
            return Err(LoadError::NotANumber {
                row,
                field: "Calories",
                value: calories.to_string(),
            });
        }
        if !grams.is_finite() {
            return Err(LoadError::NotANumber {
                row,
                field: "Grams",
                value: grams.to_string(),
            });
        }
        if calories < 0.0 {
            return Err(LoadError::NegativeCalories {
                row,
                value: calories,
            });
        }
        if grams <= 0.0 {
            return Err(LoadError::NonPositiveGrams { row, value: grams });
        }

        Ok(Self {
            item: item.into(),
            menu: menu.into(),
            kind: kind.into(),
            calories,
            grams,
            calories_per_gram: calories / grams,
        })
    }

    /// Validate a raw record into an item.
    pub fn from_raw(raw: RawRow) -> Result<Self, LoadError> {
        let row = raw.row;
        let item = required(row, "Item", raw.item)?;
        let menu = required(row, "Menu", raw.menu)?;
        let kind = required(row, "Type", raw.kind)?;
        let calories = parse_number(row, "Calories", raw.calories)?;
        let grams = parse_number(row, "Grams", raw.grams)?;
        Self::new(row, item, menu, kind, calories, grams)
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn menu(&self) -> &str {
        &self.menu
    }

    /// The item's category (the catalog's `Type` column).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    pub fn grams(&self) -> f64 {
        self.grams
    }

    /// Caloric density; higher means more energy per unit of weight.
    pub fn calories_per_gram(&self) -> f64 {
        self.calories_per_gram
    }
}

fn required(row: usize, field: &'static str, value: Option<String>) -> Result<String, LoadError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(LoadError::MissingValue { row, field }),
    }
}

fn parse_number(row: usize, field: &'static str, value: Option<String>) -> Result<f64, LoadError> {
    let text = required(row, field, value)?;
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(LoadError::NotANumber {
            row,
            field,
            value: text,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(calories: &str, grams: &str) -> RawRow {
        RawRow {
            row: 3,
            item: Some("Pocket Sandwich".to_string()),
            menu: Some("Menu 1".to_string()),
            kind: Some("Entree".to_string()),
            calories: Some(calories.to_string()),
            grams: Some(grams.to_string()),
        }
    }

    #[test]
    fn test_density_is_derived_at_construction() {
        let item = RationItem::from_raw(raw("300", "100")).unwrap();
        assert_eq!(item.calories(), 300.0);
        assert_eq!(item.grams(), 100.0);
        assert!((item.calories_per_gram() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut row = raw(" 150 ", " 30");
        row.kind = Some("  Snack ".to_string());
        let item = RationItem::from_raw(row).unwrap();
        assert_eq!(item.kind(), "Snack");
        assert!((item.calories_per_gram() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_grams_rejected() {
        let err = RationItem::from_raw(raw("300", "0")).unwrap_err();
        assert!(matches!(err, LoadError::NonPositiveGrams { row: 3, .. }));
    }

    #[test]
    fn test_negative_grams_rejected() {
        let err = RationItem::from_raw(raw("300", "-5")).unwrap_err();
        assert!(matches!(err, LoadError::NonPositiveGrams { .. }));
    }

    #[test]
    fn test_negative_calories_rejected() {
        let err = RationItem::from_raw(raw("-1", "10")).unwrap_err();
        assert!(matches!(err, LoadError::NegativeCalories { .. }));
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = RationItem::from_raw(raw("lots", "10")).unwrap_err();
        match err {
            LoadError::NotANumber { field, value, .. } => {
                assert_eq!(field, "Calories");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(RationItem::from_raw(raw("NaN", "10")).is_err());
        assert!(RationItem::from_raw(raw("100", "inf")).is_err());
    }

    #[test]
    fn test_missing_value_rejected() {
        let mut row = raw("100", "10");
        row.menu = Some("   ".to_string());
        let err = RationItem::from_raw(row).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingValue {
                row: 3,
                field: "Menu"
            }
        ));
        assert_eq!(err.row(), Some(3));
    }
}
