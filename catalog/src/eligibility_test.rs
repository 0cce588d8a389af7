use super::*;
use crate::sort::SortKey;
use crate::test_helpers::sample_universities;

#[test]
fn from_form_parses_numbers_and_facets() {
    let input = EligibilityInput::from_form("85", "200000", "Islamabad", "all");
    assert!((input.marks - 85.0).abs() < f64::EPSILON);
    assert_eq!(input.max_fee, Some(200_000));
    assert_eq!(input.city.as_deref(), Some("Islamabad"));
    assert_eq!(input.discipline, None);
}

#[test]
fn from_form_blank_fields_fall_back() {
    let input = EligibilityInput::from_form("", "", "", "");
    assert!(input.marks.abs() < f64::EPSILON);
    assert_eq!(input.max_fee, None);
    assert_eq!(input.city, None);
    assert_eq!(input.discipline, None);
}

#[test]
fn from_form_rejects_garbage_and_clamps_marks() {
    let input = EligibilityInput::from_form("abc", "-5", "", "");
    assert!(input.marks.abs() < f64::EPSILON);
    assert_eq!(input.max_fee, None);

    let input = EligibilityInput::from_form("140", "NaN", "", "");
    assert!((input.marks - 100.0).abs() < f64::EPSILON);
    assert_eq!(input.max_fee, None);
}

#[test]
fn apply_to_sets_ranges_and_facets_but_keeps_other_criteria() {
    let mut criteria = FilterCriteria {
        query: "uni".to_owned(),
        province: Some("Punjab".to_owned()),
        min_merit: 50.0,
        sort: SortKey::FeeLow,
        ..FilterCriteria::default()
    };
    EligibilityInput::from_form("88.5", "", "Lahore", "Business").apply_to(&mut criteria);

    assert!(criteria.min_merit.abs() < f64::EPSILON);
    assert!((criteria.max_merit - 88.5).abs() < f64::EPSILON);
    assert_eq!(criteria.max_fee, FEE_CEILING);
    assert_eq!(criteria.city.as_deref(), Some("Lahore"));
    assert_eq!(criteria.discipline.as_deref(), Some("Business"));
    assert_eq!(criteria.query, "uni");
    assert_eq!(criteria.province.as_deref(), Some("Punjab"));
    assert_eq!(criteria.sort, SortKey::FeeLow);
}

#[test]
fn eligibility_shows_only_affordable_programs_within_marks() {
    let records = sample_universities();
    let mut criteria = FilterCriteria::default();
    EligibilityInput::from_form("89", "200000", "all", "all").apply_to(&mut criteria);

    let ids: Vec<&str> = criteria.apply(&records).into_iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["pk3", "pk1", "pk8", "pk12"]);
}
