//! Filter state and the filter-apply transform.
//!
//! A [`FilteredView`] is always rebuilt from the canonical
//! [`SurveyRecord`]; it is never patched incrementally, so repeated filter
//! changes cannot accumulate drift.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::data::survey::{Searchable, SurveyRecord};

/// User-selected constraints on what the dashboard shows.
///
/// All selectors are optional; the default is "no filter". Empty strings
/// passed to the builders clear the selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Age bucket. Recorded and exported, does not narrow the view.
    pub age: Option<String>,
    /// Occupation bucket. Recorded and exported, does not narrow the view.
    pub occupation: Option<String>,
    /// Exact, case-sensitive platform key
    pub platform: Option<String>,
    /// Lowercased, trimmed search text
    pub search: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl FilterState {
    /// Create an empty filter state (nothing selected).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set age bucket
    pub fn with_age(mut self, age: &str) -> Self {
        self.age = non_empty(age);
        self
    }

    /// Builder: set occupation bucket
    pub fn with_occupation(mut self, occupation: &str) -> Self {
        self.occupation = non_empty(occupation);
        self
    }

    /// Builder: set platform
    pub fn with_platform(mut self, platform: &str) -> Self {
        self.platform = non_empty(platform);
        self
    }

    /// Builder: set search text (normalized to trimmed lowercase)
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = non_empty(&search.trim().to_lowercase());
        self
    }

    /// Whether any selector is set.
    pub fn is_active(&self) -> bool {
        self.age.is_some()
            || self.occupation.is_some()
            || self.platform.is_some()
            || self.search.is_some()
    }

    /// Label recorded next to exported rows: the selector value, or "None".
    pub fn applied_label(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or("None")
    }
}

/// Survey data narrowed by a [`FilterState`].
///
/// Has the exact shape of a [`SurveyRecord`] and serializes as one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilteredView(SurveyRecord);

impl Deref for FilteredView {
    type Target = SurveyRecord;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FilteredView {
    /// Derive a view from the canonical record.
    ///
    /// - Platforms: only the entry whose key equals the platform selector;
    ///   empty when no platform is selected or the key is unknown.
    /// - Search: reasons and features keep, in order, the entries whose
    ///   text contains the search term case-insensitively.
    /// - Everything else is an unmodified copy.
    pub fn apply(source: &SurveyRecord, filters: &FilterState) -> Self {
        let mut view = source.clone();

        view.platform_data.primary_platforms = match filters.platform.as_deref() {
            Some(platform) => source
                .platform_data
                .primary_platforms
                .get(platform)
                .map(|&count| (platform, count))
                .into_iter()
                .collect(),
            None => Default::default(),
        };

        if let Some(search) = filters.search.as_deref().filter(|s| !s.is_empty()) {
            view.dropoff_reasons = keep_matching(&source.dropoff_reasons, search);
            view.desired_features = keep_matching(&source.desired_features, search);
        }

        tracing::debug!(
            platforms = view.platform_data.primary_platforms.len(),
            reasons = view.dropoff_reasons.len(),
            features = view.desired_features.len(),
            "filters applied"
        );

        FilteredView(view)
    }

    pub fn into_inner(self) -> SurveyRecord {
        self.0
    }

    /// Whether every value in this view is present in `source`.
    pub fn is_subset_of(&self, source: &SurveyRecord) -> bool {
        let platforms_ok = self
            .platform_data
            .primary_platforms
            .iter()
            .all(|(k, v)| source.platform_data.primary_platforms.get(k) == Some(v));
        let reasons_ok = is_ordered_subsequence(&self.dropoff_reasons, &source.dropoff_reasons);
        let features_ok = is_ordered_subsequence(&self.desired_features, &source.desired_features);

        platforms_ok
            && reasons_ok
            && features_ok
            && self.demographics == source.demographics
            && self.dropoff_patterns == source.dropoff_patterns
            && self.engagement_factors == source.engagement_factors
    }
}

fn keep_matching<T: Searchable + Clone>(items: &[T], needle: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_search(needle))
        .cloned()
        .collect()
}

fn is_ordered_subsequence<T: PartialEq>(sub: &[T], full: &[T]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|item| rest.any(|candidate| candidate == item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin;

    #[test]
    fn test_builders_normalize() {
        let filters = FilterState::new()
            .with_age("")
            .with_platform("Udemy")
            .with_search("  MOTIVATION ");

        assert_eq!(filters.age, None);
        assert_eq!(filters.platform.as_deref(), Some("Udemy"));
        assert_eq!(filters.search.as_deref(), Some("motivation"));
        assert!(filters.is_active());
        assert!(!FilterState::new().is_active());
    }

    #[test]
    fn test_whitespace_search_clears() {
        let filters = FilterState::new().with_search("   ");
        assert_eq!(filters.search, None);
    }

    #[test]
    fn test_platform_exact_match() {
        let source = builtin::survey();
        let view = FilteredView::apply(&source, &FilterState::new().with_platform("Udemy"));

        let platforms: Vec<(&str, &u64)> = view.platform_data.primary_platforms.iter().collect();
        assert_eq!(platforms, vec![("Udemy", &5)]);
    }

    #[test]
    fn test_platform_case_sensitive() {
        let source = builtin::survey();
        let view = FilteredView::apply(&source, &FilterState::new().with_platform("udemy"));
        assert!(view.platform_data.primary_platforms.is_empty());
    }

    #[test]
    fn test_no_platform_selected_yields_empty_mapping() {
        let source = builtin::survey();
        let view = FilteredView::apply(&source, &FilterState::new());
        assert!(view.platform_data.primary_platforms.is_empty());
        // Without a search term the sequences are untouched
        assert_eq!(view.dropoff_reasons, source.dropoff_reasons);
        assert_eq!(view.desired_features, source.desired_features);
    }

    #[test]
    fn test_search_filters_reasons_and_features() {
        let source = builtin::survey();
        let view = FilteredView::apply(&source, &FilterState::new().with_search("course"));

        let reasons: Vec<&str> = view.dropoff_reasons.iter().map(|r| r.reason.as_str()).collect();
        assert_eq!(
            reasons,
            vec![
                "Course didn't meet my expectations",
                "Poor course quality",
                "Course content was too difficult",
            ]
        );
        let features: Vec<&str> = view
            .desired_features
            .iter()
            .map(|f| f.feature.as_str())
            .collect();
        assert_eq!(features, vec!["Clearer course structure"]);
    }

    #[test]
    fn test_search_without_matches() {
        let source = builtin::survey();
        let view = FilteredView::apply(&source, &FilterState::new().with_search("blockchain"));
        assert!(view.dropoff_reasons.is_empty());
        assert!(view.desired_features.is_empty());
    }

    #[test]
    fn test_source_untouched_and_no_drift() {
        let source = builtin::survey();
        let snapshot = source.clone();

        let narrow = FilteredView::apply(&source, &FilterState::new().with_search("lack"));
        assert_eq!(narrow.dropoff_reasons.len(), 3);

        let wide = FilteredView::apply(&source, &FilterState::new().with_search("l"));
        assert!(wide.dropoff_reasons.len() > narrow.dropoff_reasons.len());
        assert_eq!(source, snapshot);
    }

    #[test]
    fn test_age_and_occupation_pass_through() {
        let source = builtin::survey();
        let filters = FilterState::new()
            .with_age("25-34")
            .with_occupation("Student");
        let view = FilteredView::apply(&source, &filters);

        assert_eq!(view.demographics, source.demographics);
        assert_eq!(view.dropoff_reasons, source.dropoff_reasons);
    }

    #[test]
    fn test_view_is_subset() {
        let source = builtin::survey();
        let view = FilteredView::apply(
            &source,
            &FilterState::new().with_platform("Coursera").with_search("of"),
        );
        assert!(view.is_subset_of(&source));
    }

    #[test]
    fn test_applied_label() {
        let filters = FilterState::new().with_platform("edX");
        assert_eq!(FilterState::applied_label(&filters.platform), "edX");
        assert_eq!(FilterState::applied_label(&filters.age), "None");
    }
}
