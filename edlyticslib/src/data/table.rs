//! Platform performance table rows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Engagement level of a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EngagementTier {
    Low,
    Medium,
    High,
}

impl EngagementTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementTier::Low => "Low",
            EngagementTier::Medium => "Medium",
            EngagementTier::High => "High",
        }
    }
}

impl fmt::Display for EngagementTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngagementTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(EngagementTier::Low),
            "medium" => Ok(EngagementTier::Medium),
            "high" => Ok(EngagementTier::High),
            _ => Err(format!("Unknown engagement tier: {}", s)),
        }
    }
}

/// One row of the platform performance table.
///
/// Independent of [`SurveyRecord`](super::survey::SurveyRecord): the table
/// groups minor platforms under "Others".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub platform: String,
    pub users: u64,
    /// Percent of respondents
    pub market_share: f64,
    pub engagement: EngagementTier,
}

impl TableRow {
    pub fn new(
        platform: impl Into<String>,
        users: u64,
        market_share: f64,
        engagement: EngagementTier,
    ) -> Self {
        Self {
            platform: platform.into(),
            users,
            market_share,
            engagement,
        }
    }
}
