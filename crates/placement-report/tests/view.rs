use insta::assert_json_snapshot;

use placement_core::{AnalyticsError, AnalyticsReport, analyze_upload};
use placement_model::{
    AggregationResult, AnalyticsOptions, CellValue, ColumnBinding, CountRow, MeanRow,
};
use placement_report::{AnalyticsView, TablesView, write_summary_csv};

fn report() -> AnalyticsReport {
    AnalyticsReport {
        file_name: "results.csv".to_string(),
        row_count: 3,
        binding: ColumnBinding {
            site_column: "Placement".to_string(),
            field_column: "Field".to_string(),
            score_column: Some("Score".to_string()),
        },
        result: AggregationResult {
            by_site: vec![CountRow::new("A", 2), CountRow::new("B", 1)],
            by_field: vec![CountRow::new("X", 2), CountRow::new("Y", 1)],
            score_avg: vec![
                MeanRow {
                    key: CellValue::text("A"),
                    mean: 85.5,
                    samples: 2,
                },
                MeanRow {
                    key: CellValue::text("B"),
                    mean: 70.5,
                    samples: 1,
                },
            ],
        },
    }
}

#[test]
fn results_view_snapshot() {
    let view = AnalyticsView::from_outcome(Ok(report()));
    assert_eq!(view.error(), None);
    assert_json_snapshot!(view, @r#"
    {
      "tables": {
        "cols": {
          "site": "Placement",
          "field": "Field",
          "score": "Score"
        },
        "by_site": [
          {
            "Placement": "A",
            "count": 2
          },
          {
            "Placement": "B",
            "count": 1
          }
        ],
        "by_field": [
          {
            "Field": "X",
            "count": 2
          },
          {
            "Field": "Y",
            "count": 1
          }
        ],
        "score_avg": [
          {
            "Placement": "A",
            "Score": 85.5
          },
          {
            "Placement": "B",
            "Score": 70.5
          }
        ]
      },
      "charts": {
        "site_labels": [
          "A",
          "B"
        ],
        "site_values": [
          2,
          1
        ],
        "field_labels": [
          "X",
          "Y"
        ],
        "field_values": [
          2,
          1
        ],
        "avg_labels": [
          "A",
          "B"
        ],
        "avg_values": [
          85.5,
          70.5
        ],
        "samples_labels": [
          "A",
          "B"
        ],
        "samples_values": [
          2,
          1
        ]
      }
    }
    "#);
}

#[test]
fn error_view_snapshot() {
    let view = AnalyticsView::from_outcome(Err(AnalyticsError::NoFile));
    assert_eq!(view.error(), Some("no file selected"));
    assert_json_snapshot!(view, @r#"
    {
      "error": "no file selected",
      "error_kind": "no_file"
    }
    "#);
}

#[test]
fn pipeline_failures_become_error_views() {
    let outcome = analyze_upload("notes.txt", b"anything", &AnalyticsOptions::default());
    let view = AnalyticsView::from_outcome(outcome);
    let message = view.error().unwrap();
    assert!(message.starts_with("unsupported file format"), "{message}");

    let outcome = analyze_upload("people.csv", b"Name,Value\nx,1\n", &AnalyticsOptions::default());
    let view = AnalyticsView::from_outcome(outcome);
    assert!(view.error().unwrap().contains("site"));
}

#[test]
fn fallback_field_reuses_site_column_name() {
    let binding = ColumnBinding::site_only("מקום הכשרה");
    let result = AggregationResult {
        by_site: vec![CountRow::new("חיפה", 2)],
        by_field: vec![CountRow::new("חיפה", 2)],
        score_avg: Vec::new(),
    };
    let tables = TablesView::from_result(&binding, &result);
    assert_eq!(tables.cols.field, "מקום הכשרה");
    assert_eq!(tables.cols.score, None);
    assert_eq!(tables.by_field, tables.by_site);
    assert!(tables.score_avg.is_empty());
    let json = serde_json::to_value(&tables).unwrap();
    assert!(json["cols"].get("score").is_none());
}

#[test]
fn header_only_upload_renders_empty_tables() {
    let outcome = analyze_upload("empty.csv", b"Site,Field,Score\n", &AnalyticsOptions::default());
    match AnalyticsView::from_outcome(outcome) {
        AnalyticsView::Results { tables, charts } => {
            assert!(tables.by_site.is_empty());
            assert!(tables.by_field.is_empty());
            assert!(tables.score_avg.is_empty());
            assert!(charts.site_labels.is_empty());
        }
        AnalyticsView::Failed { error, .. } => panic!("unexpected error: {error}"),
    }
}

#[test]
fn csv_export_lists_every_table() {
    let mut out = Vec::new();
    write_summary_csv(&mut out, &report().result).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "table,key,value,samples");
    assert_eq!(lines[5], "score_avg,A,85.5,2");
}
