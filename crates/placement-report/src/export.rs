//! CSV export of the summary tables.

use std::io::Write;

use anyhow::{Context, Result};

use placement_model::AggregationResult;

/// Writes all three tables as one long-format CSV.
///
/// Columns: `table,key,value,samples`. `samples` is only filled for
/// `score_avg` rows.
pub fn write_summary_csv<W: Write>(writer: W, result: &AggregationResult) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["table", "key", "value", "samples"])
        .context("write CSV header")?;
    for (table, rows) in [("by_site", &result.by_site), ("by_field", &result.by_field)] {
        for row in rows {
            csv.write_record([
                table.to_string(),
                row.key.to_string(),
                row.count.to_string(),
                String::new(),
            ])
            .with_context(|| format!("write {table} row"))?;
        }
    }
    for row in &result.score_avg {
        csv.write_record([
            "score_avg".to_string(),
            row.key.to_string(),
            row.mean.to_string(),
            row.samples.to_string(),
        ])
        .context("write score_avg row")?;
    }
    csv.flush().context("flush CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use placement_model::{CellValue, CountRow, MeanRow};

    #[test]
    fn writes_long_format() {
        let result = AggregationResult {
            by_site: vec![CountRow::new("A", 2)],
            by_field: vec![CountRow::new("X, Y", 1)],
            score_avg: vec![MeanRow {
                key: CellValue::text("A"),
                mean: 85.0,
                samples: 2,
            }],
        };
        let mut out = Vec::new();
        write_summary_csv(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "table,key,value,samples\nby_site,A,2,\nby_field,\"X, Y\",1,\nscore_avg,A,85,2\n"
        );
    }
}
