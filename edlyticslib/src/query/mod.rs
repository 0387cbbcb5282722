//! Query processing: filter the survey and order the platform table.
//!
//! This module handles the second stage of the pipeline - deriving
//! display-ready data from the canonical datasets. It provides:
//!
//! - **Filter**: `FilterState` and the `FilteredView` it produces
//! - **Options**: Table ordering configuration (`SortColumn`, `SortState`)
//! - **Sort**: The table sort transform
//!
//! ## Example
//!
//! ```rust
//! use edlyticslib::query::{sort_rows, FilterState, FilteredView, SortColumn, SortDirection};
//! use edlyticslib::Dataset;
//!
//! let data = Dataset::builtin();
//! let view = FilteredView::apply(&data.survey, &FilterState::new().with_platform("Udemy"));
//! assert_eq!(view.platform_data.primary_platforms.get("Udemy"), Some(&5));
//!
//! let rows = sort_rows(&data.platform_table, SortColumn::Users, SortDirection::Descending);
//! assert_eq!(rows[0].platform, "YouTube");
//! ```

pub mod filter;
pub mod options;
pub mod sort;

pub use filter::{FilterState, FilteredView};
pub use options::{SortColumn, SortDirection, SortState};
pub use sort::sort_rows;
