//! Text rendering for CLI output

use console::Style;
use edlyticslib::data::{CommunityInsights, Heatmap, DAY_LABELS};
use edlyticslib::output::ChartData;
use edlyticslib::{Dataset, FilterState, FilteredView, SortState, TableRow};
use serde::Serialize;

/// Average days before a learner drops off, as reported in the survey write-up.
const AVG_DROPOFF_DAYS: u32 = 7;

fn heading() -> Style {
    Style::new().bold()
}

fn dim() -> Style {
    Style::new().dim()
}

/// Truncate a label to fit within max_len, adding ".." suffix if needed
fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() > max_len {
        let kept: String = label.chars().take(max_len.saturating_sub(2)).collect();
        format!("{kept}..")
    } else {
        label.to_string()
    }
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("{}\n", heading().apply_to(title)));
}

fn count_line(out: &mut String, label: &str, value: impl std::fmt::Display) {
    out.push_str(&format!(
        "  {:<48} {:>8}\n",
        truncate_label(label, 48),
        value
    ));
}

/// Headline figures shown above every tab.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub total_learners: u64,
    pub completion_rate: Option<f64>,
    pub avg_dropoff_days: u32,
    pub industry_median: f64,
}

impl Summary {
    pub fn from_dataset(data: &Dataset) -> Self {
        Summary {
            total_learners: data.survey.demographics.total_respondents,
            completion_rate: data.survey.completion_rate(),
            avg_dropoff_days: AVG_DROPOFF_DAYS,
            industry_median: data.industry.completion_rates.mooc_median,
        }
    }
}

pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    section(&mut out, "Summary");
    count_line(&mut out, "Total Learners", summary.total_learners);
    let completion = summary
        .completion_rate
        .map(|rate| format!("{rate}%"))
        .unwrap_or_else(|| "-".to_string());
    count_line(&mut out, "Completion Rate", completion);
    count_line(
        &mut out,
        "Avg Drop-off Time",
        format!("{} days", summary.avg_dropoff_days),
    );
    count_line(
        &mut out,
        "Industry Median",
        format!("{}%", summary.industry_median),
    );
    out
}

/// Render the filtered survey view with the active filters on top.
pub fn render_view(view: &FilteredView, filters: &FilterState) -> String {
    let mut out = String::new();

    section(&mut out, "Filters");
    count_line(&mut out, "Age", FilterState::applied_label(&filters.age));
    count_line(
        &mut out,
        "Occupation",
        FilterState::applied_label(&filters.occupation),
    );
    count_line(
        &mut out,
        "Platform",
        FilterState::applied_label(&filters.platform),
    );
    count_line(&mut out, "Search", FilterState::applied_label(&filters.search));
    out.push('\n');

    section(&mut out, "Platform Usage");
    if view.platform_data.primary_platforms.is_empty() {
        out.push_str(&format!("  {}\n", dim().apply_to("(select a platform)")));
    }
    for (platform, count) in view.platform_data.primary_platforms.iter() {
        count_line(&mut out, platform, count);
    }
    out.push('\n');

    section(&mut out, "Dropout Reasons");
    if view.dropoff_reasons.is_empty() {
        out.push_str(&format!("  {}\n", dim().apply_to("(no matches)")));
    }
    for reason in &view.dropoff_reasons {
        count_line(&mut out, &reason.reason, reason.count);
    }
    out.push('\n');

    section(&mut out, "Desired Features");
    if view.desired_features.is_empty() {
        out.push_str(&format!("  {}\n", dim().apply_to("(no matches)")));
    }
    for feature in &view.desired_features {
        count_line(&mut out, &feature.feature, feature.mentions);
    }

    out
}

/// Render the platform table. The sorted column carries a direction arrow.
pub fn render_table(rows: &[TableRow], sort: SortState) -> String {
    use edlyticslib::SortColumn;

    let header = |column: SortColumn| -> String {
        match sort.column {
            Some(c) if c == column => format!("{} {}", column.header(), sort.direction.arrow()),
            _ => column.header().to_string(),
        }
    };

    let mut out = String::new();
    let header_line = format!(
        "{:<20} {:>10} {:>14} {:>12}",
        header(SortColumn::Platform),
        header(SortColumn::Users),
        header(SortColumn::MarketShare),
        header(SortColumn::Engagement),
    );
    out.push_str(&format!("{}\n", heading().apply_to(&header_line)));
    out.push_str(&format!("{}\n", "-".repeat(header_line.chars().count())));

    for row in rows {
        out.push_str(&format!(
            "{:<20} {:>10} {:>13}% {:>12}\n",
            truncate_label(&row.platform, 20),
            row.users,
            row.market_share,
            row.engagement,
        ));
    }
    out
}

/// Render the drop-off heatmap as a week x weekday grid.
pub fn render_heatmap(heatmap: &Heatmap) -> String {
    let mut out = String::new();
    section(&mut out, "Drop-off Heatmap");

    out.push_str(&format!("{:<8}", ""));
    for day in DAY_LABELS {
        out.push_str(&format!("{day:>5}"));
    }
    out.push('\n');

    let max = heatmap.max();
    for (week, row) in heatmap.rows().iter().enumerate() {
        out.push_str(&format!("{:<8}", Heatmap::week_label(week)));
        for &value in row {
            let cell = format!("{value:>5}");
            if max > 0 && value == max {
                out.push_str(&heading().apply_to(cell).to_string());
            } else {
                out.push_str(&cell);
            }
        }
        out.push('\n');
    }
    out
}

/// Render chart payloads as label/value listings.
pub fn render_charts(charts: &[&ChartData]) -> String {
    let mut out = String::new();
    for (i, chart) in charts.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        section(&mut out, chart.title);
        for dataset in &chart.datasets {
            out.push_str(&format!("  {}\n", dim().apply_to(&dataset.label)));
            for (label, value) in chart.labels.iter().zip(&dataset.data) {
                count_line(&mut out, label, value);
            }
        }
    }
    out
}

pub fn render_community(community: &CommunityInsights) -> String {
    let mut out = String::new();

    section(&mut out, "Reddit Discussions");
    for d in &community.reddit_discussions {
        out.push_str(&format!(
            "  {} {}\n    {}\n",
            d.title,
            dim().apply_to(format!("({}, {})", d.subreddit, d.date)),
            d.url
        ));
    }
    out.push('\n');

    for (title, articles) in [
        ("Blog Articles", &community.blog_articles),
        ("News", &community.news_articles),
    ] {
        section(&mut out, title);
        for a in articles {
            out.push_str(&format!(
                "  {} {}\n    {}\n",
                a.title,
                dim().apply_to(format!("({}, {}, {})", a.source, a.date, a.reading_time)),
                a.url
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!("{} items\n", community.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use edlyticslib::{sort_rows, SortColumn, SortDirection};

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 10), "short");
        assert_eq!(truncate_label("a very long label", 8), "a very..");
    }

    #[test]
    fn test_summary_figures() {
        let summary = Summary::from_dataset(&Dataset::builtin());
        assert_eq!(summary.total_learners, 46);
        assert_eq!(summary.completion_rate, Some(10.9));
        assert_eq!(summary.industry_median, 12.6);

        let text = render_summary(&summary);
        assert!(text.contains("10.9%"));
        assert!(text.contains("7 days"));
    }

    #[test]
    fn test_table_marks_sorted_column() {
        let data = Dataset::builtin();
        let rows = sort_rows(&data.platform_table, SortColumn::Users, SortDirection::Descending);
        let text = render_table(&rows, SortState::by(SortColumn::Users).descending());

        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.contains(SortDirection::Descending.arrow()));
        assert!(lines.nth(1).unwrap().starts_with("YouTube"));
    }

    #[test]
    fn test_community_shows_subreddit_as_stored() {
        let text = render_community(&Dataset::builtin().community);
        assert!(text.contains("What is the future of MOOCs?"));
        assert!(text.contains("(r/academia, 2023)"));
        assert!(!text.contains("r/r/"));
    }

    #[test]
    fn test_heatmap_has_row_per_week() {
        let data = Dataset::builtin();
        let text = render_heatmap(&data.heatmap);
        assert_eq!(text.lines().count(), 2 + data.heatmap.weeks());
        assert!(text.contains("Week 1"));
    }
}
