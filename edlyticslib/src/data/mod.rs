//! Canonical datasets.
//!
//! This module holds the first stage of the pipeline: the immutable
//! reference data every view is derived from. It provides:
//!
//! - **Survey**: respondent demographics, platforms, funnel, reasons, features
//! - **Research**: industry benchmarks and community articles
//! - **Table**: the platform performance table
//! - **Heatmap**: the week x weekday drop-off grid
//!
//! [`Dataset::builtin`] returns the embedded data; [`Dataset::from_json_file`]
//! loads a replacement document of the same shape.
//!
//! ## Example
//!
//! ```rust
//! use edlyticslib::Dataset;
//!
//! let data = Dataset::builtin();
//! assert_eq!(data.survey.demographics.total_respondents, 46);
//! assert_eq!(data.platform_table.len(), 6);
//! ```

pub mod builtin;
pub mod heatmap;
pub mod number;
pub mod ordered;
pub mod research;
pub mod survey;
pub mod table;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::Result;

pub use heatmap::{Heatmap, HeatmapCell, DAY_LABELS};
pub use ordered::OrderedMap;
pub use research::{Article, CommunityInsights, Discussion, IndustryResearch};
pub use survey::{
    Demographics, DesiredFeature, DropoffPatterns, DropoffReason, FunnelStage, PlatformData,
    Searchable, SurveyRecord,
};
pub use table::{EngagementTier, TableRow};

/// Every dataset the dashboard displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub survey: SurveyRecord,
    pub industry: IndustryResearch,
    pub community: CommunityInsights,
    pub platform_table: Vec<TableRow>,
    pub heatmap: Heatmap,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Dataset {
    /// The embedded survey and research data.
    pub fn builtin() -> Self {
        Self {
            survey: builtin::survey(),
            industry: builtin::industry(),
            community: builtin::community(),
            platform_table: builtin::platform_table(),
            heatmap: builtin::heatmap(),
        }
    }

    /// Load a dataset document from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DashboardError::DataRead {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset: Dataset =
            serde_json::from_str(&text).map_err(|source| DashboardError::DataParse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(
            path = %path.display(),
            respondents = dataset.survey.demographics.total_respondents,
            "loaded dataset"
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        let mut data = Dataset::builtin();
        data.survey.demographics.total_respondents = 50;
        fs::write(&path, serde_json::to_string_pretty(&data).unwrap()).unwrap();

        let loaded = Dataset::from_json_file(&path).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_missing_file() {
        let result = Dataset::from_json_file("/nonexistent/data.json");
        assert!(matches!(result, Err(DashboardError::DataRead { .. })));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"survey": 3}"#).unwrap();

        let result = Dataset::from_json_file(&path);
        if let Err(DashboardError::DataParse { path: p, .. }) = result {
            assert_eq!(p, path);
        } else {
            panic!("Expected DataParse error");
        }
    }
}
