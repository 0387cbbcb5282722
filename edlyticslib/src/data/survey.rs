//! Survey result records.
//!
//! A [`SurveyRecord`] is the canonical, immutable survey dataset: who
//! answered, which platforms they use, where in a course they dropped off,
//! why, and what would have kept them engaged.

use serde::{Deserialize, Serialize};

use super::number::whole_as_int;
use super::ordered::OrderedMap;

/// Respondent counts by demographic bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub total_respondents: u64,
    /// Age group -> respondents
    pub age_distribution: OrderedMap<u64>,
    /// Occupation -> respondents
    pub occupation_distribution: OrderedMap<u64>,
}

/// Primary learning platform usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformData {
    /// Platform name -> respondents naming it as primary
    pub primary_platforms: OrderedMap<u64>,
}

/// One stage of the completion funnel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: String,
    pub learners: u64,
    /// Share of the starting cohort still present, 0-100
    #[serde(serialize_with = "whole_as_int")]
    pub percentage: f64,
}

/// Where learners stopped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropoffPatterns {
    /// Self-reported drop point -> respondents
    pub drop_points: OrderedMap<u64>,
    /// Ordered funnel, first stage is the full cohort
    pub funnel_data: Vec<FunnelStage>,
}

/// A reason given for abandoning a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropoffReason {
    pub reason: String,
    pub count: u64,
}

/// A feature respondents asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesiredFeature {
    pub feature: String,
    pub mentions: u64,
}

/// Free-text entries that the search filter matches against.
pub trait Searchable {
    /// The text a search term is matched against.
    fn search_text(&self) -> &str;

    /// Case-insensitive substring match.
    fn matches_search(&self, needle: &str) -> bool {
        self.search_text()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

impl Searchable for DropoffReason {
    fn search_text(&self) -> &str {
        &self.reason
    }
}

impl Searchable for DesiredFeature {
    fn search_text(&self) -> &str {
        &self.feature
    }
}

/// The full survey dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub demographics: Demographics,
    pub platform_data: PlatformData,
    pub dropoff_patterns: DropoffPatterns,
    pub dropoff_reasons: Vec<DropoffReason>,
    pub desired_features: Vec<DesiredFeature>,
    /// Factor label -> mean impact score (1-5 scale)
    pub engagement_factors: OrderedMap<f64>,
}

impl SurveyRecord {
    /// Share of respondents that finished, taken from the last funnel stage.
    pub fn completion_rate(&self) -> Option<f64> {
        self.dropoff_patterns.funnel_data.last().map(|s| s.percentage)
    }
}
