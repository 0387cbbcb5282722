//! CSV export of the current view.
//!
//! One row per demographic bucket, filtered platform, filtered drop-out
//! reason and filtered desired feature, each tagged with the filter that was
//! active for its category.

use serde::Serialize;

use crate::data::survey::SurveyRecord;
use crate::query::filter::{FilterState, FilteredView};

pub const CSV_HEADER: [&str; 4] = ["Category", "Item", "Value", "Filter_Applied"];

/// One exported data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvRow {
    pub category: &'static str,
    pub item: String,
    pub value: u64,
    pub filter_applied: String,
}

impl CsvRow {
    fn new(category: &'static str, item: &str, value: u64, filter: &Option<String>) -> Self {
        Self {
            category,
            item: item.to_string(),
            value,
            filter_applied: FilterState::applied_label(filter).to_string(),
        }
    }

    fn fields(&self) -> [String; 4] {
        [
            self.category.to_string(),
            self.item.clone(),
            self.value.to_string(),
            self.filter_applied.clone(),
        ]
    }
}

/// Build export rows in output order.
///
/// Demographic buckets come from the canonical record (age and occupation
/// do not narrow the view); everything else comes from the filtered view.
pub fn csv_rows(source: &SurveyRecord, view: &FilteredView, filters: &FilterState) -> Vec<CsvRow> {
    let mut rows = Vec::new();

    for (age, &count) in source.demographics.age_distribution.iter() {
        rows.push(CsvRow::new("Age Distribution", age, count, &filters.age));
    }
    for (occupation, &count) in source.demographics.occupation_distribution.iter() {
        rows.push(CsvRow::new(
            "Occupation",
            occupation,
            count,
            &filters.occupation,
        ));
    }
    for (platform, &count) in view.platform_data.primary_platforms.iter() {
        rows.push(CsvRow::new(
            "Platform Usage",
            platform,
            count,
            &filters.platform,
        ));
    }
    for reason in &view.dropoff_reasons {
        rows.push(CsvRow::new(
            "Dropout Reasons",
            &reason.reason,
            reason.count,
            &filters.search,
        ));
    }
    for feature in &view.desired_features {
        rows.push(CsvRow::new(
            "Desired Features",
            &feature.feature,
            feature.mentions,
            &filters.search,
        ));
    }

    rows
}

/// Quote a CSV field, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn join_quoted<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields.into_iter().map(quote).collect::<Vec<_>>().join(",")
}

/// Render the export as CSV text: header plus one line per row, every field
/// quoted, lines joined with `\n`.
pub fn to_csv(source: &SurveyRecord, view: &FilteredView, filters: &FilterState) -> String {
    let rows = csv_rows(source, view, filters);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(join_quoted(CSV_HEADER));
    for row in &rows {
        let fields = row.fields();
        lines.push(join_quoted(fields.iter().map(String::as_str)));
    }

    lines.join("\n")
}
