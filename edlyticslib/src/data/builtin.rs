//! Embedded reference datasets.
//!
//! The survey of 46 online learners, the industry benchmarks it is compared
//! against, and the community articles shown alongside it.

use super::heatmap::Heatmap;
use super::ordered::OrderedMap;
use super::research::{
    Article, CommunityInsights, CompletionRates, Discussion, EarlyAlertSystems,
    IndustryEngagement, IndustryResearch, MarketStatistics, Microlearning, Range,
    RetentionStrategies,
};
use super::survey::{
    Demographics, DesiredFeature, DropoffPatterns, DropoffReason, FunnelStage, PlatformData,
    SurveyRecord,
};
use super::table::{EngagementTier, TableRow};

fn tally<V: Copy>(entries: &[(&str, V)]) -> OrderedMap<V> {
    entries.iter().map(|&(k, v)| (k, v)).collect()
}

fn reason(reason: &str, count: u64) -> DropoffReason {
    DropoffReason {
        reason: reason.to_string(),
        count,
    }
}

fn feature(feature: &str, mentions: u64) -> DesiredFeature {
    DesiredFeature {
        feature: feature.to_string(),
        mentions,
    }
}

fn stage(stage: &str, learners: u64, percentage: f64) -> FunnelStage {
    FunnelStage {
        stage: stage.to_string(),
        learners,
        percentage,
    }
}

pub fn survey() -> SurveyRecord {
    SurveyRecord {
        demographics: Demographics {
            total_respondents: 46,
            age_distribution: tally(&[("18-24", 35), ("25-34", 11)]),
            occupation_distribution: tally(&[
                ("Student", 27),
                ("Employed full-time", 15),
                ("Unemployed", 3),
                ("Freelancer", 1),
            ]),
        },
        platform_data: PlatformData {
            primary_platforms: tally(&[
                ("YouTube educational content", 21),
                ("Coursera", 14),
                ("Udemy", 5),
                ("edX", 2),
                ("MasterClass", 1),
                ("Skillshare", 1),
                ("LinkedIn Learning", 1),
                ("Banking courses", 1),
            ]),
        },
        dropoff_patterns: DropoffPatterns {
            drop_points: tally(&[
                ("Within the first week", 14),
                ("After 2-3 weeks", 9),
                ("Midway through the course", 9),
                ("Near the end of the course", 4),
                ("Multiple courses at different points", 5),
                ("Never dropped", 5),
            ]),
            funnel_data: vec![
                stage("Started course", 46, 100.0),
                stage("Completed first week", 32, 69.6),
                stage("Completed 2-3 weeks", 23, 50.0),
                stage("Completed midway", 14, 30.4),
                stage("Near completion", 10, 21.7),
                stage("Successfully completed", 5, 10.9),
            ],
        },
        dropoff_reasons: vec![
            reason("Lost interest in the subject", 19),
            reason("Lack of motivation", 17),
            reason("Lack of time", 15),
            reason("Course didn't meet my expectations", 14),
            reason("Boring or unengaging instructor", 12),
            reason("Lack of interaction with instructors/peers", 12),
            reason("Poor course quality", 9),
            reason("Course content was too difficult", 2),
        ],
        desired_features: vec![
            feature("Gamification (points, badges, leaderboards)", 25),
            feature("Mentor or study groups", 23),
            feature("Personalized learning paths", 22),
            feature("More interactive content", 21),
            feature("Better progress tracking", 21),
            feature("Certificates of completion", 20),
            feature("Clearer course structure", 18),
            feature("Networking opportunities with peers", 12),
        ],
        engagement_factors: tally(&[
            ("Lack of engaging content delivery", 2.96),
            ("Real-world application issues", 2.83),
            ("Insufficient feedback", 2.80),
            ("Inconsistent updates", 2.63),
            ("Deadlines/accountability", 2.52),
            ("Poor UI", 2.52),
            ("Content difficulty", 2.13),
        ]),
    }
}

pub fn industry() -> IndustryResearch {
    IndustryResearch {
        completion_rates: CompletionRates {
            mooc_median: 12.6,
            mooc_range: Range {
                min: 0.7,
                max: 52.1,
            },
            traditional_online: Range {
                min: 13.0,
                max: 40.0,
            },
            cohort_based: Range {
                min: 85.0,
                max: 100.0,
            },
            microlearning: Microlearning {
                improvement: 17.0,
                engagement_boost: 50.0,
            },
        },
        retention_strategies: RetentionStrategies {
            gamification_impact: 21.0,
            personalization_improvement: 30.0,
            ai_tutoring_success: 50.0,
            group_learning_completion: 76.2,
            early_alert_systems: EarlyAlertSystems {
                improvement_range: "5-15%".to_string(),
            },
        },
        market_statistics: MarketStatistics {
            industry_growth_since_2000: 900.0,
            projected_users_2028: 958.4,
            current_market_size_2024: 457.8,
            average_mobile_importance: 3.8,
        },
        engagement_factors: IndustryEngagement {
            microlearning_preference: 94.0,
            video_vs_text_preference: "Video dominant".to_string(),
            mobile_learning_growth: "Rapid adoption".to_string(),
            ai_personalization_demand: "Increasing".to_string(),
        },
    }
}

fn discussion(
    title: &str,
    subreddit: &str,
    summary: &str,
    url: &str,
    engagement: &str,
    date: &str,
    category: &str,
) -> Discussion {
    Discussion {
        title: title.to_string(),
        subreddit: subreddit.to_string(),
        summary: summary.to_string(),
        url: url.to_string(),
        engagement: engagement.to_string(),
        date: date.to_string(),
        category: category.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn article(
    title: &str,
    source: &str,
    summary: &str,
    url: &str,
    date: &str,
    reading_time: &str,
    category: &str,
    tags: &[&str],
) -> Article {
    Article {
        title: title.to_string(),
        source: source.to_string(),
        summary: summary.to_string(),
        url: url.to_string(),
        date: date.to_string(),
        reading_time: reading_time.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn community() -> CommunityInsights {
    CommunityInsights {
        reddit_discussions: vec![
            discussion(
                "What is the future of MOOCs?",
                "r/academia",
                "Discussion about MOOC effectiveness with users noting completion rates below 10% and the need for classroom environment",
                "https://www.reddit.com/r/academia/comments/17evl8f/what_is_the_future_of_moocs/",
                "Multiple active comments",
                "2023",
                "Future Trends",
            ),
            discussion(
                "Have MOOCs lost their cool?",
                "r/datascience",
                "Users discuss that 90% of people don't finish MOOC classes and courses are becoming bloated with unnecessary content",
                "https://www.reddit.com/r/datascience/comments/1eng1zz/have_moocs_lost_their_cool/",
                "38 upvotes, active discussion",
                "2024",
                "User Experience",
            ),
            discussion(
                "EdTech is booming, but are we solving real problems?",
                "r/edtech",
                "Critical discussion about whether EdTech focuses on genuine learning improvement or just visual appeal",
                "https://www.reddit.com/r/edtech/comments/1lu23y5/edtech_is_booming_but_are_we_actually_solving/",
                "64 upvotes, 66 comments",
                "2024",
                "Industry Analysis",
            ),
            discussion(
                "Anyone currently working in edtech? Layoffs discussion",
                "r/edtech",
                "Current EdTech employees discussing industry layoffs and market challenges",
                "https://www.reddit.com/r/edtech/comments/1gwkyr9/anyone_currently_working_in_edtech_how_do_you/",
                "Multiple responses",
                "2024",
                "Industry Challenges",
            ),
        ],
        blog_articles: vec![
            article(
                "MOOC Interrupted: Top 10 Reasons Readers Didn't Complete Courses",
                "Open Culture",
                "Analysis of 50+ responses identifying main reasons for MOOC abandonment including time constraints and content issues",
                "https://www.openculture.com/2013/04/10_reasons_you_didnt_complete_a_mooc.html",
                "2013",
                "8 min",
                "User Research",
                &["Completion Rates", "User Behavior", "MOOC Challenges"],
            ),
            article(
                "21+ Shocking Online Course Completion Rate Statistics",
                "BloggingX",
                "Comprehensive statistics showing completion rates between 5-15% for free courses and 85-90% for cohort-based courses",
                "https://bloggingx.com/online-course-completion-statistics/",
                "2022",
                "12 min",
                "Industry Statistics",
                &["Statistics", "Completion Rates", "Cohort Learning"],
            ),
            article(
                "How Ed-tech Companies Can Ace at Student Retention",
                "MoEngage",
                "Strategies for EdTech companies to improve student engagement and retention rates through data-driven approaches",
                "https://www.moengage.com/blog/ed-tech-companies-student-retention/",
                "2023",
                "10 min",
                "Best Practices",
                &["Retention", "Engagement", "Data Analytics"],
            ),
            article(
                "7 Student Retention Strategies for Online Schools",
                "NN Partners",
                "Comprehensive guide covering early alert systems, academic advising, and community building for online education",
                "https://nn.partners/student-retention-strategies/",
                "2025",
                "15 min",
                "Strategies",
                &["Retention Strategies", "Online Learning", "Student Success"],
            ),
            article(
                "Customer Onboarding in EdTech: 10 Best Practices",
                "Userpilot",
                "Examples from Duolingo, MasterClass, and Quizlet on effective user onboarding with surveys and gamification",
                "https://userpilot.com/blog/customer-onboarding-in-edtech/",
                "2025",
                "7 min",
                "User Experience",
                &["Onboarding", "UX Design", "Best Practices"],
            ),
        ],
        news_articles: vec![
            article(
                "How Duolingo reignited user growth",
                "Lenny's Newsletter",
                "Case study showing 21% increase in retention through gamification and social features",
                "https://www.lennysnewsletter.com/p/how-duolingo-reignited-user-growth",
                "2023",
                "20 min",
                "Case Study",
                &["Duolingo", "Growth", "Gamification", "Product Strategy"],
            ),
            article(
                "How Colleges Leverage Data to Retain Students",
                "EdTech Magazine",
                "Florida International University achieved 10% increase in four-year graduation rates using analytics",
                "https://edtechmagazine.com/higher/article/2024/05/how-colleges-leverage-data-retain-students-enrollment-cliff-looms",
                "2024",
                "6 min",
                "Higher Education",
                &["Data Analytics", "Student Success", "Retention"],
            ),
            article(
                "How Data-Driven Strategies Transform EdTech",
                "WebEngage",
                "Aakash Digital saw 31% increase in live class attendance through personalized engagement campaigns",
                "https://webengage.com/blog/how-edtech-companies-increase-student-engagement-revenue/",
                "2025",
                "8 min",
                "Success Stories",
                &["Data-Driven", "Engagement", "Personalization"],
            ),
        ],
    }
}

pub fn platform_table() -> Vec<TableRow> {
    vec![
        TableRow::new("YouTube", 21, 45.7, EngagementTier::High),
        TableRow::new("Coursera", 14, 30.4, EngagementTier::Medium),
        TableRow::new("Udemy", 5, 10.9, EngagementTier::Medium),
        TableRow::new("edX", 2, 4.3, EngagementTier::Low),
        TableRow::new("MasterClass", 1, 2.2, EngagementTier::Low),
        TableRow::new("Others", 3, 6.5, EngagementTier::Low),
    ]
}

pub fn heatmap() -> Heatmap {
    Heatmap::new(vec![
        [14, 12, 8, 6, 5, 3, 2],
        [9, 8, 6, 4, 3, 2, 1],
        [6, 5, 4, 3, 2, 1, 1],
        [3, 2, 2, 1, 1, 1, 0],
    ])
}
