use crate::data::{Dataset, MISSING};
use anyhow::Result;
use std::cmp::Ordering;
use std::collections::HashMap;

/// One aggregated row: a distinct (x, hue) pair and the number of dataset
/// rows matching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedRow {
    pub x: String,
    pub hue: String,
    pub count: u64,
}

pub type GroupedTable = Vec<GroupedRow>;

/// Partition the dataset by the distinct (x, hue) pair and count rows per
/// partition. Rows with a missing x or hue value are dropped. Only pairs
/// actually present in the data appear; there is no zero-fill.
///
/// Output order is deterministic: sorted by (x, hue), with x compared
/// numerically when every distinct x value parses as a number.
pub fn count_by(data: &Dataset, x_col: &str, hue_col: &str) -> Result<GroupedTable> {
    let x_idx = data.require_column(x_col)?;
    let hue_idx = data.require_column(hue_col)?;

    let mut counts: HashMap<(String, String), u64> = HashMap::new();
    for row in &data.rows {
        let x = &row[x_idx];
        let hue = &row[hue_idx];
        if x == MISSING || hue == MISSING {
            continue;
        }
        *counts.entry((x.clone(), hue.clone())).or_insert(0) += 1;
    }

    let mut table: GroupedTable = counts
        .into_iter()
        .map(|((x, hue), count)| GroupedRow { x, hue, count })
        .collect();

    let numeric_x = table.iter().all(|r| r.x.parse::<f64>().is_ok());
    table.sort_by(|a, b| {
        let x_ord = if numeric_x {
            compare_numeric(&a.x, &b.x)
        } else {
            a.x.cmp(&b.x)
        };
        x_ord.then_with(|| a.hue.cmp(&b.hue))
    });

    Ok(table)
}

/// Distinct hue values of a grouped table, deduplicated and sorted; the
/// default color assignment keys off this order.
pub fn hue_values(table: &GroupedTable) -> Vec<String> {
    let mut hues = Vec::new();
    for row in table {
        if !hues.contains(&row.hue) {
            hues.push(row.hue.clone());
        }
    }
    hues.sort();
    hues
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    let fa = a.parse::<f64>().unwrap_or(f64::NAN);
    let fb = b.parse::<f64>().unwrap_or(f64::NAN);
    fa.partial_cmp(&fb).unwrap_or(Ordering::Equal)
}
