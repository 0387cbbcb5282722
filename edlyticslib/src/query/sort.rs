//! Table sort transform.

use std::cmp::Ordering;

use crate::data::table::TableRow;

use super::options::{SortColumn, SortDirection};

/// Comparable value of a row in one column.
enum SortKey {
    Number(f64),
    Text(String),
}

fn sort_key(row: &TableRow, column: SortColumn) -> SortKey {
    match column {
        SortColumn::Platform => SortKey::Text(row.platform.to_lowercase()),
        SortColumn::Users => SortKey::Number(row.users as f64),
        SortColumn::MarketShare => SortKey::Number(row.market_share),
        SortColumn::Engagement => SortKey::Text(row.engagement.as_str().to_lowercase()),
    }
}

fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
        // Columns are homogeneous, mixed keys only appear if a column changes kind
        (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
        (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
    }
}

/// Return a reordered copy of `rows`.
///
/// Numeric columns compare numerically; text columns compare their
/// lowercased values lexicographically. The input slice is not modified.
pub fn sort_rows(rows: &[TableRow], column: SortColumn, direction: SortDirection) -> Vec<TableRow> {
    let mut keyed: Vec<(SortKey, &TableRow)> =
        rows.iter().map(|row| (sort_key(row, column), row)).collect();

    keyed.sort_by(|a, b| {
        let ord = compare_keys(&a.0, &b.0);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    tracing::debug!(column = column.key(), ?direction, rows = rows.len(), "table sorted");

    keyed.into_iter().map(|(_, row)| row.clone()).collect()
}
