//! The filter stage of the pipeline.
//!
//! [`filter`] is a pure, stable selection: the same items and bounds always
//! produce the same [`FilteredView`], in source order.

use std::collections::BTreeSet;

use serde::Serialize;

use super::ration::RationItem;

/// An inclusive numeric interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The smallest range covering every value, or `None` for no values.
    pub fn spanning(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Self::new(v, v)),
            Some(r) => Some(Self::new(r.min.min(v), r.max.max(v))),
        })
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when `self` lies entirely inside `outer`.
    pub fn is_within(&self, outer: &ValueRange) -> bool {
        outer.min <= self.min && self.max <= outer.max
    }
}

/// The active filter predicates; all of them must hold for a row to pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterBounds {
    pub calories: ValueRange,
    pub grams: ValueRange,
    pub types: BTreeSet<String>,
}

impl FilterBounds {
    pub fn matches(&self, item: &RationItem) -> bool {
        self.types.contains(item.kind())
            && self.calories.contains(item.calories())
            && self.grams.contains(item.grams())
    }
}

/// Select the items matching `bounds`, preserving their order.
///
/// Accepts any slice of items, so an existing view can be filtered again.
pub fn filter(items: &[RationItem], bounds: &FilterBounds) -> FilteredView {
    FilteredView {
        items: items.iter().filter(|item| bounds.matches(item)).cloned().collect(),
    }
}

/// The subset of a table selected by one set of bounds.
///
/// A view is never edited: each control change produces a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView {
    items: Vec<RationItem>,
}

impl FilteredView {
    pub fn items(&self) -> &[RationItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Aggregate figures shown in the header and written on export.
    pub fn summary(&self) -> ViewSummary {
        let total_calories: f64 = self.items.iter().map(RationItem::calories).sum();
        let total_grams: f64 = self.items.iter().map(RationItem::grams).sum();

        // First item wins ties so the result follows source order.
        let densest = self.items.iter().fold(None::<&RationItem>, |best, item| match best {
            Some(b) if b.calories_per_gram() >= item.calories_per_gram() => Some(b),
            _ => Some(item),
        });

        ViewSummary {
            count: self.items.len(),
            total_calories,
            total_grams,
            calories_per_gram: (total_grams > 0.0).then(|| total_calories / total_grams),
            densest: densest.map(|i| DensestItem {
                item: i.item().to_string(),
                menu: i.menu().to_string(),
                calories_per_gram: i.calories_per_gram(),
            }),
        }
    }
}

/// Totals over a filtered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSummary {
    pub count: usize,
    pub total_calories: f64,
    pub total_grams: f64,
    /// Overall density of the whole selection; `None` when it is empty.
    pub calories_per_gram: Option<f64>,
    pub densest: Option<DensestItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensestItem {
    pub item: String,
    pub menu: String,
    pub calories_per_gram: f64,
}
