use super::*;
use crate::test_helpers::sample_universities;

fn ids(records: &[&University]) -> Vec<String> {
    records.iter().map(|u| u.id.clone()).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_criteria_match_everything_sorted_by_rank() {
    let records = sample_universities();
    let visible = FilterCriteria::default().apply(&records);
    assert_eq!(ids(&visible), vec!["pk3", "pk4", "pk1", "pk6", "pk8", "pk12"]);
}

#[test]
fn default_criteria_have_no_active_filters() {
    assert_eq!(FilterCriteria::default().active_count(), 0);
}

// =============================================================
// Predicates
// =============================================================

#[test]
fn query_matches_name_city_degree_or_discipline_case_insensitively() {
    let records = sample_universities();
    let mut criteria = FilterCriteria { query: "LUMS".to_owned(), ..FilterCriteria::default() };
    assert_eq!(ids(&criteria.apply(&records)), vec!["pk4"]);

    criteria.query = "karachi".to_owned();
    assert_eq!(ids(&criteria.apply(&records)), vec!["pk6"]);

    criteria.query = "bs engineering".to_owned();
    assert_eq!(ids(&criteria.apply(&records)), vec!["pk3"]);

    criteria.query = "medical".to_owned();
    assert_eq!(ids(&criteria.apply(&records)), vec!["pk6", "pk12"]);
}

#[test]
fn whitespace_query_matches_all() {
    let records = sample_universities();
    let criteria = FilterCriteria { query: "   ".to_owned(), ..FilterCriteria::default() };
    assert_eq!(criteria.apply(&records).len(), records.len());
}

#[test]
fn facets_compare_exactly() {
    let records = sample_universities();
    let criteria = FilterCriteria { city: Some("Islamabad".to_owned()), ..FilterCriteria::default() };
    assert_eq!(ids(&criteria.apply(&records)), vec!["pk3", "pk1", "pk12"]);

    let criteria = FilterCriteria { city: Some("islamabad".to_owned()), ..FilterCriteria::default() };
    assert!(criteria.apply(&records).is_empty());
}

#[test]
fn ranges_are_inclusive() {
    let records = sample_universities();
    let criteria = FilterCriteria { min_merit: 85.0, max_merit: 90.0, ..FilterCriteria::default() };
    assert_eq!(ids(&criteria.apply(&records)), vec!["pk3", "pk4", "pk1"]);

    let criteria = FilterCriteria { min_fee: 28_000, max_fee: 35_000, ..FilterCriteria::default() };
    assert_eq!(ids(&criteria.apply(&records)), vec!["pk1", "pk8"]);
}

#[test]
fn apply_is_the_conjunction_of_all_predicates() {
    let records = sample_universities();
    let criteria = FilterCriteria {
        query: "university".to_owned(),
        city: Some("Islamabad".to_owned()),
        province: Some("Punjab".to_owned()),
        max_fee: 100_000,
        ..FilterCriteria::default()
    };
    let visible = criteria.apply(&records);
    let expected: Vec<&University> = records.iter().filter(|u| criteria.matches(u)).collect();
    assert_eq!(visible.len(), expected.len());
    assert_eq!(ids(&visible), vec!["pk1"]);
    for u in &records {
        let shown = visible.iter().any(|v| v.id == u.id);
        let satisfies = u.name.to_lowercase().contains("university")
            && u.city == "Islamabad"
            && u.province == "Punjab"
            && u.fee <= 100_000;
        assert_eq!(shown, satisfies, "{}", u.id);
    }
}

#[test]
fn no_match_yields_empty_result() {
    let records = sample_universities();
    let criteria = FilterCriteria { discipline: Some("Law".to_owned()), ..FilterCriteria::default() };
    assert!(criteria.apply(&records).is_empty());
    assert!(criteria.apply(&[]).is_empty());
}

#[test]
fn apply_uses_selected_sort() {
    let records = sample_universities();
    let criteria = FilterCriteria { sort: SortKey::FeeHigh, ..FilterCriteria::default() };
    assert_eq!(ids(&criteria.apply(&records)), vec!["pk6", "pk4", "pk3", "pk1", "pk8", "pk12"]);
}

// =============================================================
// Active count / reset / ranges
// =============================================================

#[test]
fn active_count_counts_facets_and_narrowed_ranges() {
    let criteria = FilterCriteria {
        query: "ignored".to_owned(),
        city: Some("Lahore".to_owned()),
        discipline: Some("Arts".to_owned()),
        min_merit: 10.0,
        max_fee: 500_000,
        sort: SortKey::Name,
        ..FilterCriteria::default()
    };
    assert_eq!(criteria.active_count(), 4);
}

#[test]
fn reset_restores_defaults() {
    let mut criteria = FilterCriteria {
        query: "x".to_owned(),
        province: Some("Sindh".to_owned()),
        min_fee: 5,
        sort: SortKey::MeritHigh,
        ..FilterCriteria::default()
    };
    criteria.reset();
    assert_eq!(criteria, FilterCriteria::default());
}

#[test]
fn set_merit_range_orders_and_clamps() {
    let mut criteria = FilterCriteria::default();
    criteria.set_merit_range(120.0, 40.0);
    assert!((criteria.min_merit - 40.0).abs() < f64::EPSILON);
    assert!((criteria.max_merit - 100.0).abs() < f64::EPSILON);
}

#[test]
fn set_fee_range_orders_and_caps() {
    let mut criteria = FilterCriteria::default();
    criteria.set_fee_range(2_000_000, 50_000);
    assert_eq!(criteria.min_fee, 50_000);
    assert_eq!(criteria.max_fee, FEE_CEILING);
}

#[test]
fn parse_facet_treats_all_and_blank_as_none() {
    assert_eq!(parse_facet(""), None);
    assert_eq!(parse_facet("all"), None);
    assert_eq!(parse_facet("  "), None);
    assert_eq!(parse_facet("Lahore"), Some("Lahore".to_owned()));
}
