//! Property tests for aggregation invariants.

use proptest::prelude::*;

use placement_core::aggregate;
use placement_model::{CellValue, ColumnBinding, KeyNormalization, UploadedTable};

fn site_cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Empty),
        "[A-D]".prop_map(CellValue::text),
        (0i64..3).prop_map(CellValue::Int),
    ]
}

fn score_cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Empty),
        Just(CellValue::text("n/a")),
        (0i64..=100).prop_map(CellValue::Int),
        (0.0f64..100.0).prop_map(CellValue::Float),
    ]
}

fn rows() -> impl Strategy<Value = Vec<Vec<CellValue>>> {
    prop::collection::vec(
        (site_cell(), site_cell(), score_cell()).prop_map(|(s, f, c)| vec![s, f, c]),
        0..60,
    )
}

fn build(rows: Vec<Vec<CellValue>>) -> UploadedTable {
    UploadedTable::new(
        vec!["Site".to_string(), "Field".to_string(), "Score".to_string()],
        rows,
    )
}

fn full_binding() -> ColumnBinding {
    ColumnBinding {
        site_column: "Site".to_string(),
        field_column: "Field".to_string(),
        score_column: Some("Score".to_string()),
    }
}

proptest! {
    #[test]
    fn site_counts_sum_to_non_empty_rows(rows in rows()) {
        let non_empty = rows.iter().filter(|row| !row[0].is_empty()).count();
        let result = aggregate(&build(rows), &full_binding(), KeyNormalization::Exact).unwrap();
        prop_assert_eq!(result.grouped_rows(), non_empty);
    }

    #[test]
    fn count_tables_are_sorted_descending(rows in rows()) {
        let result = aggregate(&build(rows), &full_binding(), KeyNormalization::Exact).unwrap();
        for table in [&result.by_site, &result.by_field] {
            for pair in table.windows(2) {
                prop_assert!(pair[0].count >= pair[1].count);
            }
        }
        for pair in result.score_avg.windows(2) {
            prop_assert!(pair[0].mean >= pair[1].mean);
        }
    }

    #[test]
    fn means_stay_within_score_bounds(rows in rows()) {
        let result = aggregate(&build(rows), &full_binding(), KeyNormalization::Exact).unwrap();
        for row in &result.score_avg {
            prop_assert!(row.samples > 0);
            prop_assert!((0.0..=100.0).contains(&row.mean));
        }
    }

    #[test]
    fn field_fallback_mirrors_sites(rows in rows()) {
        let binding = ColumnBinding::site_only("Site");
        let result = aggregate(&build(rows), &binding, KeyNormalization::Exact).unwrap();
        prop_assert_eq!(&result.by_field, &result.by_site);
        prop_assert!(result.score_avg.is_empty());
    }
}
