//! Render models derived from a filtered view.
//!
//! A [`Presentation`] is built in one go from one [`FilteredView`], so the
//! scatter plot, the ranked bars and the data table can never disagree about
//! which filters are active. Chart models are `None` for an empty view: there
//! is nothing to plot, and the views show a placeholder instead.

use super::filter::{FilteredView, ViewSummary};
use super::ration::RationItem;

/// Numeric column a bar view ranks by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Calories,
    Grams,
    CaloriesPerGram,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Calories => "Calories",
            Metric::Grams => "Weight (g)",
            Metric::CaloriesPerGram => "Calories per Gram",
        }
    }

    pub fn value_of(&self, item: &RationItem) -> f64 {
        match self {
            Metric::Calories => item.calories(),
            Metric::Grams => item.grams(),
            Metric::CaloriesPerGram => item.calories_per_gram(),
        }
    }

    /// Format a value of this metric for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Metric::Calories | Metric::Grams => format_amount(value),
            Metric::CaloriesPerGram => format!("{:.2}", value),
        }
    }
}

/// Whole numbers without decimals, everything else with one.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// One bar: an item and its value for the ranked metric.
#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub item: String,
    pub menu: String,
    pub value: f64,
    /// Position of the item in the filtered view.
    pub row: usize,
}

/// Items ranked by one metric, highest first.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedBars {
    pub metric: Metric,
    pub entries: Vec<BarEntry>,
}

impl RankedBars {
    pub fn build(metric: Metric, items: &[RationItem]) -> Self {
        let mut entries: Vec<BarEntry> = items
            .iter()
            .enumerate()
            .map(|(row, item)| BarEntry {
                item: item.item().to_string(),
                menu: item.menu().to_string(),
                value: metric.value_of(item),
                row,
            })
            .collect();

        // Stable sort: equal values keep source order.
        entries.sort_by(|a, b| b.value.total_cmp(&a.value));

        Self { metric, entries }
    }

    pub fn max_value(&self) -> f64 {
        self.entries.iter().map(|e| e.value).fold(0.0, f64::max)
    }
}

/// The three ranked bar views.
#[derive(Debug, Clone, PartialEq)]
pub struct Rankings {
    pub calories: RankedBars,
    pub grams: RankedBars,
    pub density: RankedBars,
}

/// Points of one category in the scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub kind: String,
    /// Index of the category among all table types; keeps colours stable
    /// while filters change.
    pub color_index: usize,
    /// `(grams, calories)` pairs.
    pub points: Vec<(f64, f64)>,
    /// Item name of each point, parallel to `points`.
    pub labels: Vec<String>,
}

/// Weight vs. calories scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    pub series: Vec<ScatterSeries>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl ScatterPlot {
    pub fn build(items: &[RationItem], all_types: &[String]) -> Option<Self> {
        if items.is_empty() {
            return None;
        }

        let mut series: Vec<ScatterSeries> = Vec::new();
        for item in items {
            let index = match series.iter().position(|s| s.kind == item.kind()) {
                Some(i) => i,
                None => {
                    series.push(ScatterSeries {
                        kind: item.kind().to_string(),
                        color_index: all_types
                            .iter()
                            .position(|t| t == item.kind())
                            .unwrap_or(series.len()),
                        points: Vec::new(),
                        labels: Vec::new(),
                    });
                    series.len() - 1
                }
            };
            series[index].points.push((item.grams(), item.calories()));
            series[index].labels.push(item.item().to_string());
        }
        series.sort_by_key(|s| s.color_index);

        Some(Self {
            series,
            x_bounds: padded_bounds(items.iter().map(RationItem::grams)),
            y_bounds: padded_bounds(items.iter().map(RationItem::calories)),
        })
    }
}

/// Axis bounds with 5% headroom on each side; a single value gets a unit
/// margin so the axis never collapses.
fn padded_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let pad = ((max - min) * 0.05).max(1.0);
    [(min - pad).max(0.0), max + pad]
}

/// Everything the views render, derived from a single filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub view: FilteredView,
    pub summary: ViewSummary,
    pub scatter: Option<ScatterPlot>,
    pub rankings: Option<Rankings>,
}

impl Presentation {
    pub fn build(view: FilteredView, all_types: &[String]) -> Self {
        let items = view.items();
        let rankings = (!items.is_empty()).then(|| Rankings {
            calories: RankedBars::build(Metric::Calories, items),
            grams: RankedBars::build(Metric::Grams, items),
            density: RankedBars::build(Metric::CaloriesPerGram, items),
        });

        Self {
            summary: view.summary(),
            scatter: ScatterPlot::build(items, all_types),
            rankings,
            view,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filter, FilterBounds, ValueRange};

    fn items() -> Vec<RationItem> {
        vec![
            RationItem::new(1, "Bar", "Menu 1", "Dessert", 300.0, 64.0).unwrap(),
            RationItem::new(2, "Jerky", "Menu 1", "Snack", 80.0, 28.0).unwrap(),
            RationItem::new(3, "Sandwich", "Menu 1", "Entree", 320.0, 113.0).unwrap(),
            RationItem::new(4, "Crackers", "Menu 2", "Snack", 300.0, 35.0).unwrap(),
        ]
    }

    fn types() -> Vec<String> {
        vec!["Dessert".into(), "Entree".into(), "Snack".into()]
    }

    fn all(items: &[RationItem]) -> FilteredView {
        let bounds = FilterBounds {
            calories: ValueRange::new(0.0, 1000.0),
            grams: ValueRange::new(0.0, 1000.0),
            types: types().into_iter().collect(),
        };
        filter(items, &bounds)
    }

    #[test]
    fn test_bars_ranked_descending_with_stable_ties() {
        let bars = RankedBars::build(Metric::Calories, &items());
        let order: Vec<&str> = bars.entries.iter().map(|e| e.item.as_str()).collect();
        assert_eq!(order, vec!["Sandwich", "Bar", "Crackers", "Jerky"]);
        assert_eq!(bars.entries[1].row, 0);
        assert_eq!(bars.max_value(), 320.0);
    }

    #[test]
    fn test_density_ranking() {
        let bars = RankedBars::build(Metric::CaloriesPerGram, &items());
        assert_eq!(bars.entries[0].item, "Crackers");
        assert_eq!(bars.entries.last().unwrap().item, "Sandwich");
    }

    #[test]
    fn test_scatter_groups_by_type_with_stable_colors() {
        let data = items();
        let plot = ScatterPlot::build(&data, &types()).unwrap();
        let kinds: Vec<&str> = plot.series.iter().map(|s| s.kind.as_str()).collect();
        assert_eq!(kinds, vec!["Dessert", "Entree", "Snack"]);

        let snacks = &plot.series[2];
        assert_eq!(snacks.color_index, 2);
        assert_eq!(snacks.points, vec![(28.0, 80.0), (35.0, 300.0)]);
        assert_eq!(snacks.labels, vec!["Jerky".to_string(), "Crackers".to_string()]);

        assert!(plot.x_bounds[0] <= 28.0 && plot.x_bounds[1] >= 113.0);
        assert!(plot.y_bounds[0] <= 80.0 && plot.y_bounds[1] >= 320.0);
    }

    #[test]
    fn test_single_point_has_nonzero_axes() {
        let data = vec![RationItem::new(1, "Gum", "Menu 1", "Snack", 10.0, 5.0).unwrap()];
        let plot = ScatterPlot::build(&data, &types()).unwrap();
        assert!(plot.x_bounds[1] > plot.x_bounds[0]);
        assert!(plot.y_bounds[1] > plot.y_bounds[0]);
    }

    #[test]
    fn test_empty_view_skips_charts() {
        let presentation = Presentation::build(FilteredView::default(), &types());
        assert!(presentation.is_empty());
        assert!(presentation.scatter.is_none());
        assert!(presentation.rankings.is_none());
        assert_eq!(presentation.summary.count, 0);
    }

    #[test]
    fn test_presentation_uses_one_view() {
        let data = items();
        let presentation = Presentation::build(all(&data), &types());
        let rankings = presentation.rankings.as_ref().unwrap();
        assert_eq!(rankings.calories.entries.len(), presentation.view.len());
        assert_eq!(rankings.density.entries.len(), presentation.view.len());
        let points: usize = presentation.scatter.as_ref().unwrap().series.iter().map(|s| s.points.len()).sum();
        assert_eq!(points, presentation.view.len());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(320.0), "320");
        assert_eq!(format_amount(80.5), "80.5");
        assert_eq!(Metric::CaloriesPerGram.format(2.8318), "2.83");
    }
}
