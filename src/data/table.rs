//! The immutable catalog table held for the whole session.

use std::collections::BTreeSet;

use crate::error::LoadError;

use super::filter::{FilterBounds, ValueRange};
use super::ration::{RationItem, RawRow};

/// A validated, non-empty, read-only list of ration items.
#[derive(Debug, Clone)]
pub struct RationTable {
    items: Vec<RationItem>,
    source: String,
    calorie_domain: ValueRange,
    weight_domain: ValueRange,
}

impl RationTable {
    /// Wrap validated items. Fails on an empty catalog since the filter
    /// controls need a domain to work with.
    pub fn from_items(items: Vec<RationItem>, source: impl Into<String>) -> Result<Self, LoadError> {
        let calorie_domain =
            ValueRange::spanning(items.iter().map(RationItem::calories)).ok_or(LoadError::Empty)?;
        let weight_domain =
            ValueRange::spanning(items.iter().map(RationItem::grams)).ok_or(LoadError::Empty)?;

        Ok(Self {
            items,
            source: source.into(),
            calorie_domain,
            weight_domain,
        })
    }

    /// Validate raw records from a source. The first bad row aborts the
    /// load; no partial table is ever produced.
    pub fn from_raw_rows(
        rows: impl IntoIterator<Item = RawRow>,
        source: impl Into<String>,
    ) -> Result<Self, LoadError> {
        let items = rows
            .into_iter()
            .map(RationItem::from_raw)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_items(items, source)
    }

    pub fn items(&self) -> &[RationItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed table; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Where the table came from, e.g. `file: rations.csv`.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Actual min/max calories in the data.
    pub fn calorie_domain(&self) -> ValueRange {
        self.calorie_domain
    }

    /// Actual min/max grams in the data.
    pub fn weight_domain(&self) -> ValueRange {
        self.weight_domain
    }

    /// Observed categories, sorted and deduplicated.
    pub fn types(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|i| i.kind().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Bounds that select every row.
    pub fn full_bounds(&self) -> FilterBounds {
        FilterBounds {
            calories: self.calorie_domain,
            grams: self.weight_domain,
            types: self.types().into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filter;

    fn table() -> RationTable {
        let items = vec![
            RationItem::new(1, "A", "Menu 1", "Snack", 150.0, 30.0).unwrap(),
            RationItem::new(2, "B", "Menu 1", "Entree", 300.0, 100.0).unwrap(),
            RationItem::new(3, "C", "Menu 2", "Snack", 80.5, 28.0).unwrap(),
        ];
        RationTable::from_items(items, "test").unwrap()
    }

    #[test]
    fn test_domains_follow_data() {
        let t = table();
        assert_eq!(t.calorie_domain(), ValueRange::new(80.5, 300.0));
        assert_eq!(t.weight_domain(), ValueRange::new(28.0, 100.0));
    }

    #[test]
    fn test_types_sorted_unique() {
        assert_eq!(table().types(), vec!["Entree".to_string(), "Snack".to_string()]);
    }

    #[test]
    fn test_full_bounds_select_everything() {
        let t = table();
        let view = filter(t.items(), &t.full_bounds());
        assert_eq!(view.items(), t.items());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = RationTable::from_items(Vec::new(), "test").unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn test_bad_row_aborts_load() {
        let rows = vec![
            RawRow {
                row: 1,
                item: Some("A".into()),
                menu: Some("M".into()),
                kind: Some("Snack".into()),
                calories: Some("10".into()),
                grams: Some("5".into()),
            },
            RawRow {
                row: 2,
                item: Some("B".into()),
                menu: Some("M".into()),
                kind: Some("Snack".into()),
                calories: Some("10".into()),
                grams: Some("0".into()),
            },
        ];
        let err = RationTable::from_raw_rows(rows, "test").unwrap_err();
        assert_eq!(err.row(), Some(2));
    }
}
