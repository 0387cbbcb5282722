//! Dashboard session: the application state and its event handlers.
//!
//! A [`Session`] owns everything the dashboard mutates: the active filters,
//! the derived view, the table ordering, the selected tab and the live
//! charts. Handlers take `&mut self` and run to completion one at a time;
//! the canonical [`Dataset`] inside is never modified.
//!
//! ## Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use edlyticslib::{Dataset, Session, SortColumn, SortDirection};
//!
//! let mut session = Session::new(Dataset::builtin());
//! session.set_platform("Udemy");
//!
//! let t0 = Instant::now();
//! session.input_search("lack", t0);
//! assert!(!session.poll(t0 + Duration::from_millis(100)));
//! assert!(session.poll(t0 + Duration::from_millis(300)));
//! assert_eq!(session.view().dropoff_reasons.len(), 3);
//!
//! assert_eq!(session.click_sort_header(SortColumn::Users), SortDirection::Ascending);
//! assert_eq!(session.table()[0].platform, "MasterClass");
//! ```

pub mod debounce;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::data::table::TableRow;
use crate::data::Dataset;
use crate::error::DashboardError;
use crate::output::artifact::{DownloadSink, ExportArtifact, ExportFormat};
use crate::output::chart::ChartBoard;
use crate::query::filter::{FilterState, FilteredView};
use crate::query::options::{SortColumn, SortDirection, SortState};
use crate::query::sort::sort_rows;
use crate::Result;

pub use debounce::{Debouncer, SEARCH_DEBOUNCE};

/// Dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Overview,
    Behavior,
    Platforms,
    Research,
    Community,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Behavior,
        Tab::Platforms,
        Tab::Research,
        Tab::Community,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Behavior => "behavior",
            Tab::Platforms => "platforms",
            Tab::Research => "research",
            Tab::Community => "community",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Behavior => "User Behavior",
            Tab::Platforms => "Platform Insights",
            Tab::Research => "Industry Research",
            Tab::Community => "Community Insights",
        }
    }

    /// Chart ids shown on this tab.
    pub fn chart_ids(&self) -> &'static [&'static str] {
        use crate::output::chart::*;
        match self {
            Tab::Overview => &[FUNNEL, DROPOFF_REASONS, PLATFORM_DISTRIBUTION, AGE_COMPLETION],
            Tab::Behavior => &[OCCUPATION, ENGAGEMENT_FACTORS],
            Tab::Platforms => &[DESIRED_FEATURES],
            Tab::Research => &[
                COMPLETION_BENCHMARK,
                RETENTION_COMPARISON,
                MARKET_TRENDS,
                ENGAGEMENT_STATS,
            ],
            Tab::Community => &[],
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Tab {
    type Err = DashboardError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overview" => Ok(Tab::Overview),
            "behavior" | "behaviour" | "user-behavior" => Ok(Tab::Behavior),
            "platforms" | "platform" | "platform-insights" => Ok(Tab::Platforms),
            "research" | "industry" => Ok(Tab::Research),
            "community" => Ok(Tab::Community),
            _ => Err(DashboardError::UnknownTab(s.to_string())),
        }
    }
}

/// Application state for one dashboard.
#[derive(Debug, Clone)]
pub struct Session {
    data: Dataset,
    filters: FilterState,
    view: FilteredView,
    sort: SortState,
    table: Vec<TableRow>,
    tab: Tab,
    charts: ChartBoard,
    search_input: Debouncer<String>,
}

impl Session {
    pub fn new(data: Dataset) -> Self {
        let filters = FilterState::new();
        let view = FilteredView::apply(&data.survey, &filters);
        let charts = ChartBoard::new(&data.survey);
        let table = data.platform_table.clone();

        Session {
            data,
            filters,
            view,
            sort: SortState::new(),
            table,
            tab: Tab::default(),
            charts,
            search_input: Debouncer::new(SEARCH_DEBOUNCE),
        }
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    /// Platform table in its current order.
    pub fn table(&self) -> &[TableRow] {
        &self.table
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn charts(&self) -> &ChartBoard {
        &self.charts
    }

    fn recompute(&mut self) {
        self.view = FilteredView::apply(&self.data.survey, &self.filters);
        self.charts.refresh(&self.view);
    }

    fn check_bucket(
        field: &'static str,
        value: &str,
        buckets: &crate::data::OrderedMap<u64>,
    ) -> Result<()> {
        if value.is_empty() || buckets.contains_key(value) {
            Ok(())
        } else {
            tracing::warn!(field, value, "rejected unknown filter value");
            Err(DashboardError::UnknownCategory {
                field,
                value: value.to_string(),
            })
        }
    }

    /// Select an age bucket (empty clears). Unknown buckets are rejected.
    pub fn set_age(&mut self, age: &str) -> Result<()> {
        Self::check_bucket("age group", age, &self.data.survey.demographics.age_distribution)?;
        self.filters = std::mem::take(&mut self.filters).with_age(age);
        tracing::debug!(age, "age filter changed");
        self.recompute();
        Ok(())
    }

    /// Select an occupation bucket (empty clears). Unknown buckets are
    /// rejected.
    pub fn set_occupation(&mut self, occupation: &str) -> Result<()> {
        Self::check_bucket(
            "occupation",
            occupation,
            &self.data.survey.demographics.occupation_distribution,
        )?;
        self.filters = std::mem::take(&mut self.filters).with_occupation(occupation);
        tracing::debug!(occupation, "occupation filter changed");
        self.recompute();
        Ok(())
    }

    /// Select a platform (empty clears). Any value is accepted; one that is
    /// not a platform key yields an empty platform mapping.
    pub fn set_platform(&mut self, platform: &str) {
        self.filters = std::mem::take(&mut self.filters).with_platform(platform);
        tracing::debug!(platform, "platform filter changed");
        self.recompute();
    }

    /// Record a search keystroke. The filter is applied by [`poll`](Self::poll)
    /// once input has been quiet for [`SEARCH_DEBOUNCE`].
    pub fn input_search(&mut self, text: &str, now: Instant) {
        self.search_input.push(text.to_string(), now);
    }

    /// Apply pending search input if it is due. Returns whether the view
    /// was recomputed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.search_input.poll(now) {
            Some(text) => {
                self.apply_search(&text);
                true
            }
            None => false,
        }
    }

    /// Apply pending search input immediately.
    pub fn flush_search(&mut self) -> bool {
        match self.search_input.flush() {
            Some(text) => {
                self.apply_search(&text);
                true
            }
            None => false,
        }
    }

    pub fn has_pending_search(&self) -> bool {
        self.search_input.is_pending()
    }

    fn apply_search(&mut self, text: &str) {
        self.filters = std::mem::take(&mut self.filters).with_search(text);
        tracing::debug!(search = ?self.filters.search, "search filter changed");
        self.recompute();
    }

    /// Reset every selector and drop pending search input.
    pub fn clear_filters(&mut self) {
        self.search_input.flush();
        self.filters = FilterState::new();
        self.recompute();
    }

    /// Switch tabs. The research charts are created the first time the
    /// research tab is shown.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == Tab::Research {
            self.charts
                .ensure_research(&self.data.survey, &self.data.industry);
        }
        tracing::info!(tab = tab.key(), "tab selected");
        self.tab = tab;
    }

    /// Handle a click on a table header and reorder the table.
    pub fn click_sort_header(&mut self, column: SortColumn) -> SortDirection {
        let direction = self.sort.click(column);
        self.table = sort_rows(&self.data.platform_table, column, direction);
        direction
    }

    /// Build an export of the current state.
    pub fn export<Tz: TimeZone>(
        &self,
        format: ExportFormat,
        at: &DateTime<Tz>,
    ) -> Result<ExportArtifact>
    where
        Tz::Offset: fmt::Display,
    {
        ExportArtifact::build(format, &self.data, &self.filters, &self.view, at).map_err(|e| {
            tracing::error!(%format, error = %e, "export failed");
            e
        })
    }

    /// Build an export and hand it to `sink`.
    pub fn deliver<Tz: TimeZone>(
        &self,
        format: ExportFormat,
        at: &DateTime<Tz>,
        sink: &mut dyn DownloadSink,
    ) -> Result<PathBuf>
    where
        Tz::Offset: fmt::Display,
    {
        let artifact = self.export(format, at)?;
        let location = sink.deliver(&artifact).map_err(|e| {
            tracing::error!(%format, error = %e, "export delivery failed");
            e
        })?;
        tracing::info!(%format, file = %artifact.filename, "export delivered");
        Ok(location)
    }
}
