//! Filter controls: two range selectors and a category multi-select.
//!
//! Controls are created from a [`RationTable`] and are bounded by its
//! domain: a range thumb can never leave `[domain.min, domain.max]` and the
//! lower thumb can never pass the upper one, so out-of-domain bounds cannot
//! be expressed at all.

use std::collections::BTreeSet;

use crate::data::{FilterBounds, RationTable, ValueRange};

/// A two-thumb range selector over a fixed domain.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeControl {
    label: &'static str,
    domain: ValueRange,
    current: ValueRange,
    step: f64,
}

impl RangeControl {
    /// Start at the full domain. The step is a whole unit, coarser for wide
    /// domains so a thumb crosses the range in about a hundred presses.
    pub fn new(label: &'static str, domain: ValueRange) -> Self {
        let step = (domain.span() / 100.0).round().max(1.0);
        Self {
            label,
            domain,
            current: domain,
            step,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn domain(&self) -> ValueRange {
        self.domain
    }

    pub fn current(&self) -> ValueRange {
        self.current
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Move the lower thumb by `steps` (negative moves down).
    ///
    /// Returns true if the range changed.
    pub fn nudge_lower(&mut self, steps: i32) -> bool {
        let target = (self.current.min + self.step * steps as f64)
            .clamp(self.domain.min, self.current.max);
        self.set(ValueRange::new(target, self.current.max))
    }

    /// Move the upper thumb by `steps` (negative moves down).
    ///
    /// Returns true if the range changed.
    pub fn nudge_upper(&mut self, steps: i32) -> bool {
        let target = (self.current.max + self.step * steps as f64)
            .clamp(self.current.min, self.domain.max);
        self.set(ValueRange::new(self.current.min, target))
    }

    pub fn reset(&mut self) -> bool {
        self.set(self.domain)
    }

    /// True when the control does not restrict anything.
    pub fn is_full(&self) -> bool {
        self.current == self.domain
    }

    fn set(&mut self, range: ValueRange) -> bool {
        debug_assert!(range.min <= range.max && range.is_within(&self.domain));
        let changed = range != self.current;
        self.current = range;
        changed
    }
}

/// Multi-choice selector over the table's categories.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSelector {
    options: Vec<String>,
    selected: Vec<bool>,
}

impl TypeSelector {
    /// All options start selected.
    pub fn new(options: Vec<String>) -> Self {
        let selected = vec![true; options.len()];
        Self { options, selected }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, index: usize) -> bool {
        match self.selected.get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => false,
        }
    }

    /// Select every option. Returns true if anything changed.
    pub fn select_all(&mut self) -> bool {
        let changed = self.selected.iter().any(|s| !s);
        self.selected.iter_mut().for_each(|s| *s = true);
        changed
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|s| **s).count()
    }

    pub fn selected_set(&self) -> BTreeSet<String> {
        self.options
            .iter()
            .zip(&self.selected)
            .filter(|(_, selected)| **selected)
            .map(|(option, _)| option.clone())
            .collect()
    }
}

/// Which control the cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFocus {
    Calories,
    Grams,
    /// Index into the type options.
    Type(usize),
}

/// All filter controls plus the cursor used for keyboard navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterControls {
    pub calories: RangeControl,
    pub grams: RangeControl,
    pub types: TypeSelector,
    cursor: usize,
}

impl FilterControls {
    /// Controls spanning the table's full domain with every type selected.
    pub fn for_table(table: &RationTable) -> Self {
        Self {
            calories: RangeControl::new("Calories", table.calorie_domain()),
            grams: RangeControl::new("Grams", table.weight_domain()),
            types: TypeSelector::new(table.types()),
            cursor: 0,
        }
    }

    /// The bounds to hand to [`filter`](crate::data::filter).
    pub fn bounds(&self) -> FilterBounds {
        FilterBounds {
            calories: self.calories.current(),
            grams: self.grams.current(),
            types: self.types.selected_set(),
        }
    }

    /// Number of cursor positions: two ranges plus one per type.
    pub fn len(&self) -> usize {
        2 + self.types.options().len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focus(&self) -> ControlFocus {
        match self.cursor {
            0 => ControlFocus::Calories,
            1 => ControlFocus::Grams,
            n => ControlFocus::Type(n - 2),
        }
    }

    pub fn cursor_next(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len() - 1);
    }

    pub fn cursor_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Range control under the cursor, if the cursor is on a range.
    pub fn focused_range(&mut self) -> Option<&mut RangeControl> {
        match self.focus() {
            ControlFocus::Calories => Some(&mut self.calories),
            ControlFocus::Grams => Some(&mut self.grams),
            ControlFocus::Type(_) => None,
        }
    }

    /// Toggle the type under the cursor. Returns true if a type was toggled.
    pub fn toggle_focused_type(&mut self) -> bool {
        match self.focus() {
            ControlFocus::Type(index) => self.types.toggle(index),
            _ => false,
        }
    }

    /// Back to the full domain with every type selected.
    pub fn reset(&mut self) -> bool {
        let calories = self.calories.reset();
        let grams = self.grams.reset();
        let types = self.types.select_all();
        calories || grams || types
    }

    /// Number of controls currently narrowing the selection.
    pub fn active_count(&self) -> usize {
        let types_narrowed = self.types.selected_count() < self.types.options().len();
        [!self.calories.is_full(), !self.grams.is_full(), types_narrowed]
            .iter()
            .filter(|active| **active)
            .count()
    }
}
