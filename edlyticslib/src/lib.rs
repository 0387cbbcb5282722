//! # edlyticslib
//!
//! Data and state logic for an online-learning engagement dashboard.
//!
//! ## Overview
//!
//! The dashboard presents a survey of online learners next to industry
//! benchmarks and community articles. This library holds everything behind
//! the screen:
//!
//! - **Data**: the canonical survey, research and table datasets
//! - **Query**: filter-apply and table-sort transforms
//! - **Output**: CSV and JSON exports, download sinks, chart bindings
//! - **Session**: application state, event handlers and search debounce
//!
//! ## Features
//!
//! - **Pure transforms**: views are rebuilt from canonical data on every change
//! - **Explicit time**: debounce and exports take the clock as a parameter
//! - **Source order**: category maps keep the order of the dataset document
//!
//! ## Example
//!
//! ```rust
//! use edlyticslib::{sort_rows, to_csv, Dataset, FilterState, FilteredView};
//! use edlyticslib::{SortColumn, SortDirection};
//!
//! let data = Dataset::builtin();
//!
//! // Filter the survey
//! let filters = FilterState::new().with_platform("Coursera").with_search("course");
//! let view = FilteredView::apply(&data.survey, &filters);
//! assert_eq!(view.platform_data.primary_platforms.len(), 1);
//! assert!(view.dropoff_reasons.iter().all(|r| r.reason.to_lowercase().contains("course")));
//!
//! // Sort the platform table
//! let rows = sort_rows(&data.platform_table, SortColumn::Users, SortDirection::Descending);
//! assert_eq!(rows[0].platform, "YouTube");
//!
//! // Export
//! let csv = to_csv(&data.survey, &view, &filters);
//! assert!(csv.starts_with("\"Category\",\"Item\",\"Value\",\"Filter_Applied\""));
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod session;

pub use data::{Dataset, EngagementTier, Heatmap, OrderedMap, SurveyRecord, TableRow};
pub use error::DashboardError;
pub use output::{
    to_csv, ChartBoard, ChartData, DirectorySink, DownloadSink, ExportArtifact, ExportFormat,
    JsonExport, MemorySink,
};
pub use query::{sort_rows, FilterState, FilteredView, SortColumn, SortDirection, SortState};
pub use session::{Debouncer, Session, Tab, SEARCH_DEBOUNCE};

/// Result type for edlyticslib operations
pub type Result<T> = std::result::Result<T, DashboardError>;
