//! Output: exports and chart bindings.
//!
//! This module handles the final stage of the pipeline - turning the current
//! state into something a front-end can draw or a user can download. It
//! provides:
//!
//! - **CSV**: Filtered rows tagged with the filter that produced them
//! - **JSON**: The complete state, including every canonical dataset
//! - **Artifacts**: Timestamped file names, content types, download sinks
//! - **Charts**: Label/series payloads for each dashboard chart
//!
//! Exports are read-only with respect to application state.
//!
//! ## Example
//!
//! ```rust
//! use edlyticslib::output::to_csv;
//! use edlyticslib::query::{FilterState, FilteredView};
//! use edlyticslib::Dataset;
//!
//! let data = Dataset::builtin();
//! let filters = FilterState::new().with_platform("Udemy");
//! let view = FilteredView::apply(&data.survey, &filters);
//! let csv = to_csv(&data.survey, &view, &filters);
//! assert!(csv.contains(r#""Platform Usage","Udemy","5","Udemy""#));
//! ```

pub mod artifact;
pub mod chart;
pub mod csv;
pub mod json;

pub use artifact::{
    file_timestamp, DirectorySink, DownloadSink, ExportArtifact, ExportFormat, MemorySink,
};
pub use chart::{ChartBoard, ChartData, ChartDataset, ChartKind};
pub use csv::{csv_rows, to_csv, CsvRow, CSV_HEADER};
pub use json::{iso_timestamp, ExportMetadata, JsonExport};
