//! Industry benchmarks and community content.
//!
//! Reference material shown next to the survey results. Neither dataset is
//! affected by filters; both are carried verbatim into the JSON export.

use serde::{Deserialize, Serialize};

use super::number::whole_as_int;

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    #[serde(serialize_with = "whole_as_int")]
    pub min: f64,
    #[serde(serialize_with = "whole_as_int")]
    pub max: f64,
}

impl Range {
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Microlearning {
    #[serde(serialize_with = "whole_as_int")]
    pub improvement: f64,
    #[serde(serialize_with = "whole_as_int")]
    pub engagement_boost: f64,
}

/// Published course completion rates (percent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRates {
    #[serde(serialize_with = "whole_as_int")]
    pub mooc_median: f64,
    pub mooc_range: Range,
    pub traditional_online: Range,
    pub cohort_based: Range,
    pub microlearning: Microlearning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarlyAlertSystems {
    pub improvement_range: String,
}

/// Reported effect of retention strategies (percent improvement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionStrategies {
    #[serde(serialize_with = "whole_as_int")]
    pub gamification_impact: f64,
    #[serde(serialize_with = "whole_as_int")]
    pub personalization_improvement: f64,
    #[serde(serialize_with = "whole_as_int")]
    pub ai_tutoring_success: f64,
    #[serde(serialize_with = "whole_as_int")]
    pub group_learning_completion: f64,
    pub early_alert_systems: EarlyAlertSystems,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStatistics {
    #[serde(serialize_with = "whole_as_int")]
    pub industry_growth_since_2000: f64,
    #[serde(serialize_with = "whole_as_int")]
    pub projected_users_2028: f64,
    #[serde(serialize_with = "whole_as_int")]
    pub current_market_size_2024: f64,
    #[serde(serialize_with = "whole_as_int")]
    pub average_mobile_importance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryEngagement {
    #[serde(serialize_with = "whole_as_int")]
    pub microlearning_preference: f64,
    pub video_vs_text_preference: String,
    pub mobile_learning_growth: String,
    pub ai_personalization_demand: String,
}

/// Industry benchmark dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryResearch {
    pub completion_rates: CompletionRates,
    pub retention_strategies: RetentionStrategies,
    pub market_statistics: MarketStatistics,
    pub engagement_factors: IndustryEngagement,
}

/// A forum thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discussion {
    pub title: String,
    pub subreddit: String,
    pub summary: String,
    pub url: String,
    pub engagement: String,
    pub date: String,
    pub category: String,
}

/// A blog post or news piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub source: String,
    pub summary: String,
    pub url: String,
    pub date: String,
    pub reading_time: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// Community content dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityInsights {
    pub reddit_discussions: Vec<Discussion>,
    pub blog_articles: Vec<Article>,
    pub news_articles: Vec<Article>,
}

impl CommunityInsights {
    /// Total number of items across all sections.
    pub fn len(&self) -> usize {
        self.reddit_discussions.len() + self.blog_articles.len() + self.news_articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_midpoint() {
        let range = Range {
            min: 13.0,
            max: 40.0,
        };
        assert_eq!(range.midpoint(), 26.5);
    }

    #[test]
    fn test_empty_community() {
        let community = CommunityInsights {
            reddit_discussions: vec![],
            blog_articles: vec![],
            news_articles: vec![],
        };
        assert!(community.is_empty());
    }
}
