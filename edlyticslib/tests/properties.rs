//! Property-based tests for the filter, sort and export transforms.

use chrono::{TimeZone, Utc};
use edlyticslib::data::{DesiredFeature, DropoffReason, EngagementTier, OrderedMap, TableRow};
use edlyticslib::{
    sort_rows, to_csv, Dataset, FilterState, FilteredView, JsonExport, SortColumn, SortDirection,
    SortState, SurveyRecord,
};
use proptest::prelude::*;

fn survey_with(
    platforms: Vec<(String, u64)>,
    reasons: Vec<(String, u64)>,
    features: Vec<(String, u64)>,
) -> SurveyRecord {
    let mut survey = Dataset::builtin().survey;
    survey.platform_data.primary_platforms = platforms.into_iter().collect::<OrderedMap<u64>>();
    survey.dropoff_reasons = reasons
        .into_iter()
        .map(|(reason, count)| DropoffReason { reason, count })
        .collect();
    survey.desired_features = features
        .into_iter()
        .map(|(feature, mentions)| DesiredFeature { feature, mentions })
        .collect();
    survey
}

fn entries() -> impl Strategy<Value = Vec<(String, u64)>> {
    prop::collection::vec(("[A-Za-z][A-Za-z ]{0,15}", 0u64..100), 0..10)
}

fn tier(n: u8) -> EngagementTier {
    match n % 3 {
        0 => EngagementTier::Low,
        1 => EngagementTier::Medium,
        _ => EngagementTier::High,
    }
}

fn rows() -> impl Strategy<Value = Vec<TableRow>> {
    prop::collection::vec(
        ("[A-Za-z]{1,10}", 0u64..1000, 0.0f64..100.0, any::<u8>()),
        0..12,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(name, users, share, t)| TableRow::new(name, users, share, tier(t)))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_platform_filter_keeps_only_selected(
        platforms in prop::collection::btree_map("[A-Za-z]{1,10}", 0u64..50, 0..8),
        pick in any::<prop::sample::Index>(),
        use_existing in any::<bool>(),
        other in "[A-Za-z]{1,10}",
    ) {
        let source = survey_with(platforms.clone().into_iter().collect(), vec![], vec![]);
        let selected = if use_existing && !platforms.is_empty() {
            platforms.keys().nth(pick.index(platforms.len())).cloned().unwrap()
        } else {
            other
        };

        let view = FilteredView::apply(&source, &FilterState::new().with_platform(&selected));
        let map = &view.platform_data.primary_platforms;

        prop_assert!(map.len() <= 1);
        for (key, value) in map.iter() {
            prop_assert_eq!(key, selected.as_str());
            prop_assert_eq!(Some(value), platforms.get(&selected));
        }
        prop_assert_eq!(map.len() == 1, platforms.contains_key(&selected));
    }

    #[test]
    fn prop_unset_platform_gives_empty_mapping(platforms in entries()) {
        let source = survey_with(platforms, vec![], vec![]);
        let view = FilteredView::apply(&source, &FilterState::new());
        prop_assert!(view.platform_data.primary_platforms.is_empty());
    }

    #[test]
    fn prop_search_keeps_exactly_matching_in_order(
        reasons in entries(),
        features in entries(),
        term in "[A-Za-z]{1,3}",
    ) {
        let source = survey_with(vec![], reasons, features);
        let view = FilteredView::apply(&source, &FilterState::new().with_search(&term));
        let needle = term.to_lowercase();

        let expected_reasons: Vec<_> = source
            .dropoff_reasons
            .iter()
            .filter(|r| r.reason.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        let expected_features: Vec<_> = source
            .desired_features
            .iter()
            .filter(|f| f.feature.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        prop_assert_eq!(&view.dropoff_reasons, &expected_reasons);
        prop_assert_eq!(&view.desired_features, &expected_features);
        prop_assert!(view.is_subset_of(&source));
    }

    #[test]
    fn prop_filter_never_mutates_source(
        platforms in entries(),
        reasons in entries(),
        term in "[a-z ]{0,4}",
        platform in "[A-Za-z]{0,6}",
    ) {
        let source = survey_with(platforms, reasons, vec![]);
        let before = source.clone();
        let filters = FilterState::new().with_platform(&platform).with_search(&term);

        let first = FilteredView::apply(&source, &filters);
        let second = FilteredView::apply(&source, &filters);

        prop_assert_eq!(&source, &before);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_sort_is_idempotent(rows in rows(), col in 0usize..4) {
        let column = SortColumn::ALL[col];
        let once = sort_rows(&rows, column, SortDirection::Ascending);
        let twice = sort_rows(&once, column, SortDirection::Ascending);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_second_click_reverses_distinct_keys(
        users in prop::collection::hash_set(0u64..10_000, 0..12),
    ) {
        let rows: Vec<TableRow> = users
            .into_iter()
            .enumerate()
            .map(|(i, u)| TableRow::new(format!("p{i}"), u, 1.0, EngagementTier::Low))
            .collect();

        let mut state = SortState::new();
        let first = sort_rows(&rows, SortColumn::Users, state.click(SortColumn::Users));
        let second = sort_rows(&rows, SortColumn::Users, state.click(SortColumn::Users));

        let mut reversed = first.clone();
        reversed.reverse();
        prop_assert_eq!(second, reversed);
    }

    #[test]
    fn prop_sort_keeps_input_untouched(rows in rows(), col in 0usize..4) {
        let before = rows.clone();
        let sorted = sort_rows(&rows, SortColumn::ALL[col], SortDirection::Descending);
        prop_assert_eq!(&rows, &before);
        prop_assert_eq!(sorted.len(), rows.len());
    }

    #[test]
    fn prop_csv_row_count(
        platforms in entries(),
        reasons in entries(),
        features in entries(),
        term in "[a-z]{0,2}",
        platform in "[A-Za-z]{0,6}",
    ) {
        let source = survey_with(platforms, reasons, features);
        let filters = FilterState::new().with_platform(&platform).with_search(&term);
        let view = FilteredView::apply(&source, &filters);
        let csv = to_csv(&source, &view, &filters);

        let ages = source.demographics.age_distribution.len();
        let occupations = source.demographics.occupation_distribution.len();
        let expected = 1
            + ages
            + occupations
            + view.platform_data.primary_platforms.len()
            + view.dropoff_reasons.len()
            + view.desired_features.len();
        prop_assert_eq!(csv.lines().count(), expected);
        prop_assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn prop_json_export_round_trips(
        reasons in entries(),
        term in "[a-z]{0,2}",
        secs in 0i64..2_000_000_000,
    ) {
        let mut data = Dataset::builtin();
        data.survey.dropoff_reasons = reasons
            .into_iter()
            .map(|(reason, count)| DropoffReason { reason, count })
            .collect();
        let filters = FilterState::new().with_search(&term).with_platform("Coursera");
        let view = FilteredView::apply(&data.survey, &filters);
        let at = Utc.timestamp_opt(secs, 0).unwrap();

        let export = JsonExport::new(&data, &filters, &view, &at);
        let text = export.to_json_pretty().unwrap();
        let parsed = JsonExport::from_json(&text).unwrap();

        prop_assert_eq!(parsed, export);
    }
}
