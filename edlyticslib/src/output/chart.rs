//! Chart data bindings.
//!
//! Charts are described as label/series payloads that a charting front-end
//! can draw directly. The [`ChartBoard`] owns the live set and rebinds the
//! filter-sensitive charts when the view changes.

use serde::Serialize;

use crate::data::research::IndustryResearch;
use crate::data::survey::SurveyRecord;
use crate::query::filter::FilteredView;

/// Completion rate reported by the MIT/Harvard MOOC study (percent).
const MIT_STUDY_COMPLETION: f64 = 3.13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Doughnut,
    Line,
    Radar,
}

/// One data series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// A chart's bound data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    fn single(
        id: &'static str,
        title: &'static str,
        kind: ChartKind,
        series: &str,
        points: Vec<(String, f64)>,
    ) -> Self {
        let (labels, data) = points.into_iter().unzip();
        ChartData {
            id,
            title,
            kind,
            labels,
            datasets: vec![ChartDataset {
                label: series.to_string(),
                data,
            }],
        }
    }

    /// Replace labels and first series in place.
    fn rebind(&mut self, points: Vec<(String, f64)>) {
        let (labels, data): (Vec<String>, Vec<f64>) = points.into_iter().unzip();
        self.labels = labels;
        match self.datasets.first_mut() {
            Some(first) => first.data = data,
            None => self.datasets.push(ChartDataset {
                label: String::new(),
                data,
            }),
        }
    }
}

pub const FUNNEL: &str = "funnelChart";
pub const DROPOFF_REASONS: &str = "dropoffReasonsChart";
pub const PLATFORM_DISTRIBUTION: &str = "platformDistributionChart";
pub const AGE_COMPLETION: &str = "ageCompletionChart";
pub const OCCUPATION: &str = "occupationPreferencesChart";
pub const ENGAGEMENT_FACTORS: &str = "engagementFactorsChart";
pub const DESIRED_FEATURES: &str = "desiredFeaturesChart";
pub const COMPLETION_BENCHMARK: &str = "completionBenchmarkChart";
pub const RETENTION_COMPARISON: &str = "retentionComparisonChart";
pub const MARKET_TRENDS: &str = "marketTrendsChart";
pub const ENGAGEMENT_STATS: &str = "engagementStatsChart";

fn platform_points(survey: &SurveyRecord) -> Vec<(String, f64)> {
    survey
        .platform_data
        .primary_platforms
        .iter()
        .map(|(k, &v)| (k.to_string(), v as f64))
        .collect()
}

fn reason_points(survey: &SurveyRecord) -> Vec<(String, f64)> {
    survey
        .dropoff_reasons
        .iter()
        .map(|r| (r.reason.clone(), r.count as f64))
        .collect()
}

fn feature_points(survey: &SurveyRecord) -> Vec<(String, f64)> {
    survey
        .desired_features
        .iter()
        .map(|f| (f.feature.clone(), f.mentions as f64))
        .collect()
}

pub fn funnel(survey: &SurveyRecord) -> ChartData {
    let points = survey
        .dropoff_patterns
        .funnel_data
        .iter()
        .map(|s| (s.stage.clone(), s.learners as f64))
        .collect();
    ChartData::single(FUNNEL, "Learning Funnel Analysis", ChartKind::Bar, "Learners", points)
}

pub fn dropoff_reasons(survey: &SurveyRecord) -> ChartData {
    ChartData::single(
        DROPOFF_REASONS,
        "Top Dropout Reasons",
        ChartKind::HorizontalBar,
        "Number of Responses",
        reason_points(survey),
    )
}

pub fn platform_distribution(survey: &SurveyRecord) -> ChartData {
    ChartData::single(
        PLATFORM_DISTRIBUTION,
        "Platform Usage Distribution",
        ChartKind::Doughnut,
        "Users",
        platform_points(survey),
    )
}

/// Observed completion share per age bucket.
fn completion_share(age_group: &str) -> f64 {
    if age_group == "18-24" {
        0.11
    } else {
        0.10
    }
}

pub fn age_completion(survey: &SurveyRecord) -> ChartData {
    let ages = &survey.demographics.age_distribution;
    ChartData {
        id: AGE_COMPLETION,
        title: "Completion Rates by Age Group",
        kind: ChartKind::Bar,
        labels: ages.keys().map(str::to_string).collect(),
        datasets: vec![
            ChartDataset {
                label: "Total Learners".to_string(),
                data: ages.values().map(|&v| v as f64).collect(),
            },
            ChartDataset {
                label: "Completed".to_string(),
                data: ages
                    .iter()
                    .map(|(k, &v)| (v as f64 * completion_share(k)).round())
                    .collect(),
            },
        ],
    }
}

pub fn occupation(survey: &SurveyRecord) -> ChartData {
    let points = survey
        .demographics
        .occupation_distribution
        .iter()
        .map(|(k, &v)| (k.to_string(), v as f64))
        .collect();
    ChartData::single(
        OCCUPATION,
        "Learning Preferences by Occupation",
        ChartKind::Bar,
        "Number of Learners",
        points,
    )
}

pub fn engagement_factors(survey: &SurveyRecord) -> ChartData {
    let points = survey
        .engagement_factors
        .iter()
        .map(|(k, &v)| (k.to_string(), v))
        .collect();
    ChartData::single(
        ENGAGEMENT_FACTORS,
        "Engagement Factor Impact",
        ChartKind::Radar,
        "Impact Score",
        points,
    )
}

pub fn desired_features(survey: &SurveyRecord) -> ChartData {
    ChartData::single(
        DESIRED_FEATURES,
        "Most Desired Features",
        ChartKind::HorizontalBar,
        "Mentions",
        feature_points(survey),
    )
}

pub fn completion_benchmark(survey: &SurveyRecord, industry: &IndustryResearch) -> ChartData {
    let rates = &industry.completion_rates;
    let points = vec![
        ("Our Survey".to_string(), survey.completion_rate().unwrap_or(0.0)),
        ("MOOC Median".to_string(), rates.mooc_median),
        ("Traditional Online".to_string(), rates.traditional_online.midpoint()),
        ("Cohort-Based".to_string(), rates.cohort_based.midpoint()),
        ("MIT Study".to_string(), MIT_STUDY_COMPLETION),
    ];
    ChartData::single(
        COMPLETION_BENCHMARK,
        "MOOC Completion Rate Benchmarks",
        ChartKind::Bar,
        "Completion Rate (%)",
        points,
    )
}

pub fn retention_comparison() -> ChartData {
    ChartData {
        id: RETENTION_COMPARISON,
        title: "Retention Rate Comparison",
        kind: ChartKind::Bar,
        labels: vec![
            "Online Learning".to_string(),
            "Traditional Classroom".to_string(),
            "Microlearning".to_string(),
        ],
        datasets: vec![
            ChartDataset {
                label: "Min Retention (%)".to_string(),
                data: vec![25.0, 8.0, 70.0],
            },
            ChartDataset {
                label: "Max Retention (%)".to_string(),
                data: vec![60.0, 10.0, 90.0],
            },
        ],
    }
}

pub fn market_trends(industry: &IndustryResearch) -> ChartData {
    let points = vec![
        ("2020".to_string(), 250.0),
        (
            "2024".to_string(),
            industry.market_statistics.current_market_size_2024,
        ),
        ("2028".to_string(), 750.0),
    ];
    ChartData::single(
        MARKET_TRENDS,
        "EdTech Market Growth",
        ChartKind::Line,
        "Market Size (Billion $)",
        points,
    )
}

pub fn engagement_stats(industry: &IndustryResearch) -> ChartData {
    let points = vec![
        (
            "Microlearning Effectiveness".to_string(),
            industry.completion_rates.microlearning.improvement,
        ),
        (
            "Gamification Impact".to_string(),
            industry.retention_strategies.gamification_impact,
        ),
        (
            "Personalization".to_string(),
            industry.retention_strategies.personalization_improvement,
        ),
        (
            "AI Tutoring".to_string(),
            industry.retention_strategies.ai_tutoring_success,
        ),
    ];
    ChartData::single(
        ENGAGEMENT_STATS,
        "Engagement Improvement Statistics",
        ChartKind::Doughnut,
        "Improvement (%)",
        points,
    )
}

/// The live chart set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartBoard {
    charts: Vec<ChartData>,
}

impl ChartBoard {
    /// Create the overview and behavior charts from the canonical record.
    pub fn new(survey: &SurveyRecord) -> Self {
        ChartBoard {
            charts: vec![
                funnel(survey),
                dropoff_reasons(survey),
                platform_distribution(survey),
                age_completion(survey),
                occupation(survey),
                engagement_factors(survey),
                desired_features(survey),
            ],
        }
    }

    /// Create the research charts on first use. Returns whether they were
    /// created by this call.
    pub fn ensure_research(&mut self, survey: &SurveyRecord, industry: &IndustryResearch) -> bool {
        if self.get(COMPLETION_BENCHMARK).is_some() {
            return false;
        }
        self.charts.push(completion_benchmark(survey, industry));
        self.charts.push(retention_comparison());
        self.charts.push(market_trends(industry));
        self.charts.push(engagement_stats(industry));
        tracing::info!("research charts created");
        true
    }

    /// Rebind filter-sensitive charts to `view`.
    ///
    /// The platform chart always follows the view. The reasons and features
    /// charts keep their previous data when the filtered sequence is empty.
    pub fn refresh(&mut self, view: &FilteredView) {
        if let Some(chart) = self.get_mut(PLATFORM_DISTRIBUTION) {
            chart.rebind(platform_points(view));
        }
        if !view.dropoff_reasons.is_empty() {
            if let Some(chart) = self.get_mut(DROPOFF_REASONS) {
                chart.rebind(reason_points(view));
            }
        }
        if !view.desired_features.is_empty() {
            if let Some(chart) = self.get_mut(DESIRED_FEATURES) {
                chart.rebind(feature_points(view));
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&ChartData> {
        self.charts.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut ChartData> {
        let chart = self.charts.iter_mut().find(|c| c.id == id);
        if chart.is_none() {
            tracing::warn!(chart = id, "chart not created, skipping update");
        }
        chart
    }

    pub fn charts(&self) -> &[ChartData] {
        &self.charts
    }
}
