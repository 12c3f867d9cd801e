//! End-to-end checks of load → filter → present over the public API.

use std::io::Write;

use ration_optimizer::{
    filter, CatalogSource, EmbeddedSource, FileSource, FilterBounds, FilterControls, LoadError,
    Presentation, RationItem, RationTable, ValueRange,
};

fn scenario_table() -> RationTable {
    let items = vec![
        RationItem::new(1, "A", "Menu 1", "Entree", 300.0, 100.0).unwrap(),
        RationItem::new(2, "B", "Menu 1", "Snack", 150.0, 30.0).unwrap(),
    ];
    RationTable::from_items(items, "scenario").unwrap()
}

fn names(items: &[RationItem]) -> Vec<&str> {
    items.iter().map(|i| i.item()).collect()
}

#[test]
fn bundled_catalog_rows_are_consistent() {
    let table = EmbeddedSource::new().load().unwrap();
    assert!(!table.is_empty());
    for item in table.items() {
        assert!(item.grams() > 0.0);
        assert!(item.calories() >= 0.0);
        assert_eq!(item.calories_per_gram(), item.calories() / item.grams());
    }
}

#[test]
fn full_bounds_return_whole_table_in_order() {
    let table = EmbeddedSource::new().load().unwrap();
    let view = filter(table.items(), &table.full_bounds());
    assert_eq!(view.items(), table.items());
}

#[test]
fn filter_is_idempotent() {
    let table = EmbeddedSource::new().load().unwrap();
    let mut bounds = table.full_bounds();
    bounds.calories = ValueRange::new(100.0, 300.0);
    bounds.grams = ValueRange::new(20.0, 80.0);

    let once = filter(table.items(), &bounds);
    let twice = filter(once.items(), &bounds);
    assert_eq!(once, twice);
}

#[test]
fn narrowing_never_grows_the_result() {
    let table = EmbeddedSource::new().load().unwrap();
    let mut controls = FilterControls::for_table(&table);
    let mut previous = filter(table.items(), &controls.bounds()).len();

    for _ in 0..30 {
        controls.calories.nudge_lower(2);
        controls.grams.nudge_upper(-1);
        let current = filter(table.items(), &controls.bounds()).len();
        assert!(current <= previous);
        previous = current;
    }

    for index in 0..controls.types.options().len() {
        controls.types.toggle(index);
        let current = filter(table.items(), &controls.bounds()).len();
        assert!(current <= previous);
        previous = current;
    }
    assert_eq!(previous, 0);
}

#[test]
fn scenario_calorie_floor_and_single_type() {
    let table = scenario_table();
    let bounds = FilterBounds {
        calories: ValueRange::new(200.0, 400.0),
        grams: ValueRange::new(0.0, 200.0),
        types: ["Entree".to_string()].into_iter().collect(),
    };

    let view = filter(table.items(), &bounds);
    assert_eq!(names(view.items()), vec!["A"]);
    assert_eq!(view.items()[0].calories_per_gram(), 3.0);
}

#[test]
fn scenario_all_types_full_ranges() {
    let table = scenario_table();
    let bounds = FilterBounds {
        types: ["Entree".to_string(), "Snack".to_string()].into_iter().collect(),
        ..table.full_bounds()
    };

    let view = filter(table.items(), &bounds);
    assert_eq!(names(view.items()), vec!["A", "B"]);
    assert_eq!(view.items()[1].calories_per_gram(), 5.0);
}

#[test]
fn range_above_the_data_yields_empty_presentation() {
    let table = EmbeddedSource::new().load().unwrap();
    let top = table.calorie_domain().max + 1.0;
    let mut bounds = table.full_bounds();
    bounds.calories = ValueRange::new(top, top);

    let presentation = Presentation::build(filter(table.items(), &bounds), &table.types());
    assert!(presentation.is_empty());
    assert!(presentation.scatter.is_none());
    assert!(presentation.rankings.is_none());
    assert_eq!(presentation.summary.calories_per_gram, None);
}

#[test]
fn every_view_model_covers_the_same_items() {
    let table = EmbeddedSource::new().load().unwrap();
    let mut bounds = table.full_bounds();
    bounds.grams = ValueRange::new(10.0, 60.0);

    let presentation = Presentation::build(filter(table.items(), &bounds), &table.types());
    let count = presentation.view.len();
    let rankings = presentation.rankings.as_ref().unwrap();
    let points: usize = presentation
        .scatter
        .as_ref()
        .unwrap()
        .series
        .iter()
        .map(|s| s.points.len())
        .sum();

    assert_eq!(presentation.summary.count, count);
    assert_eq!(points, count);
    assert_eq!(rankings.calories.entries.len(), count);
    assert_eq!(rankings.grams.entries.len(), count);
    assert_eq!(rankings.density.entries.len(), count);
}

#[test]
fn file_source_rejects_bad_rows() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "Item,Menu,Type,Calories,Grams").unwrap();
    writeln!(file, "Cracker,Menu 1,Snack,120,30").unwrap();
    writeln!(file, "Water,Menu 1,Beverage,0,0").unwrap();

    let err = FileSource::new(file.path()).load().unwrap_err();
    assert!(matches!(err, LoadError::NonPositiveGrams { row: 2, .. }));
}

#[test]
fn file_source_loads_json_catalog() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[{{"Item": "Cracker", "Menu": "Menu 1", "Type": "Snack", "Calories": 120, "Grams": 30}}]"#
    )
    .unwrap();

    let table = FileSource::new(file.path()).load().unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.items()[0].calories_per_gram(), 4.0);
}
