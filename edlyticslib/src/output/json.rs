//! Full JSON export.
//!
//! Bundles the active filters, the filtered view, every canonical dataset,
//! and a metadata block into a single pretty-printed document. Field order
//! in the output follows the struct declaration order below.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::data::research::{CommunityInsights, IndustryResearch};
use crate::data::survey::SurveyRecord;
use crate::data::Dataset;
use crate::query::filter::{FilterState, FilteredView};
use crate::Result;

/// Completion rate reported in export metadata (percent).
pub const COMPLETION_RATE: f64 = 10.9;
pub const EXPORT_VERSION: &str = "2.1";
pub const DASHBOARD_VERSION: &str = "Enhanced EdTech Analytics v2.1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub total_respondents: u64,
    pub completion_rate: f64,
    pub export_version: String,
    pub dashboard_version: String,
}

/// The JSON export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonExport {
    /// UTC, ISO-8601 with milliseconds
    pub export_timestamp: String,
    pub applied_filters: FilterState,
    pub filtered_survey_data: FilteredView,
    pub original_survey_data: SurveyRecord,
    pub industry_research: IndustryResearch,
    pub community_insights: CommunityInsights,
    pub metadata: ExportMetadata,
}

impl JsonExport {
    /// Assemble an export document taken at `at`.
    pub fn new<Tz: TimeZone>(
        data: &Dataset,
        filters: &FilterState,
        view: &FilteredView,
        at: &DateTime<Tz>,
    ) -> Self {
        JsonExport {
            export_timestamp: iso_timestamp(at),
            applied_filters: filters.clone(),
            filtered_survey_data: view.clone(),
            original_survey_data: data.survey.clone(),
            industry_research: data.industry.clone(),
            community_insights: data.community.clone(),
            metadata: ExportMetadata {
                total_respondents: data.survey.demographics.total_respondents,
                completion_rate: COMPLETION_RATE,
                export_version: EXPORT_VERSION.to_string(),
                dashboard_version: DASHBOARD_VERSION.to_string(),
            },
        }
    }

    /// Pretty-printed JSON text.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// `2024-03-05T14:07:09.123Z`
pub fn iso_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    at.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
