use super::*;
use crate::test_helpers::{SAMPLE_JSON, sample_universities, university};

#[test]
fn parse_catalog_reshapes_source_keys() {
    let catalog = parse_catalog(SAMPLE_JSON).expect("sample should parse");
    assert_eq!(catalog.len(), 2);

    let qau = catalog.get("pk1").expect("pk1 present");
    assert_eq!(qau.name, "Quaid-i-Azam University, Islamabad");
    assert_eq!(qau.phone.as_deref(), Some("(051) 9064-3000"));
    assert_eq!(qau.email.as_deref(), Some("info@qau.edu.pk"));
    assert_eq!(qau.website.as_deref(), Some("https://www.qau.edu.pk/"));
    assert_eq!(qau.image_url.as_deref(), Some("https://example.test/qau.jpg"));
    assert_eq!(qau.location.address, "University Road, Islamabad");
    assert!((qau.location.longitude - 73.1384).abs() < f64::EPSILON);
    assert_eq!(qau.deadline.as_deref(), Some("January 2025"));
    assert!(qau.admission.is_open());
    assert!(qau.active);
    assert_eq!(qau.merit_history.len(), 2);
    assert_eq!(qau.merit_history[0].year, 2023);
}

#[test]
fn parse_catalog_defaults_missing_optional_fields() {
    let catalog = parse_catalog(SAMPLE_JSON).expect("sample should parse");
    let nust = catalog.get("pk3").expect("pk3 present");

    assert!(!nust.active);
    assert_eq!(nust.phone, None, "blank contact becomes None");
    assert_eq!(nust.email, None);
    assert_eq!(nust.image_url, None);
    assert_eq!(nust.deadline, None);
    assert_eq!(nust.location.area, "Islamabad");
    assert!(nust.merit_history.is_empty());
    assert_eq!(nust.admission, AdmissionStatus::Closed);
}

#[test]
fn parse_catalog_accepts_minimal_record() {
    let catalog = parse_catalog(r#"[{"id":"x","title":"Minimal"}]"#).expect("minimal should parse");
    let u = catalog.get("x").expect("x present");
    assert_eq!(u.name, "Minimal");
    assert_eq!(u.fee, 0);
    assert!(u.active, "missing status is treated as active");
}

#[test]
fn parse_catalog_treats_null_fields_as_defaults() {
    let catalog = parse_catalog(
        r#"[{"id":"a","title":"A","fee":null,"merit":null,"ranking":null,"city":null,"admission":null,"map":null},
            {"id":"b","title":"B"}]"#,
    )
    .expect("null fields should not reject the catalog");
    assert_eq!(catalog.len(), 2);
    let a = catalog.get("a").expect("a present");
    assert_eq!(a.fee, 0);
    assert_eq!(a.merit, 0.0);
    assert_eq!(a.ranking, 0);
    assert_eq!(a.city, "");
    assert_eq!(a.admission, AdmissionStatus::Closed);
}

#[test]
fn parse_catalog_rounds_fractional_numbers() {
    let catalog = parse_catalog(r#"[{"id":"a","title":"A","fee":42620.0,"ranking":7.0,"status":1.0},{"id":"b","title":"B","fee":999.6}]"#)
        .expect("float fees should parse");
    let a = catalog.get("a").expect("a present");
    assert_eq!(a.fee, 42_620);
    assert_eq!(a.ranking, 7);
    assert!(a.active);
    assert_eq!(catalog.get("b").expect("b present").fee, 1_000);
}

#[test]
fn parse_catalog_clamps_negative_numbers_to_zero() {
    let catalog = parse_catalog(r#"[{"id":"a","title":"A","fee":-5,"ranking":-1}]"#).expect("parses");
    let a = catalog.get("a").expect("a present");
    assert_eq!(a.fee, 0);
    assert_eq!(a.ranking, 0);
}

#[test]
fn parse_catalog_rejects_malformed_json() {
    let err = parse_catalog("{not json").expect_err("should fail");
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn parse_catalog_rejects_missing_id() {
    let err = parse_catalog(r#"[{"id":"a","title":"A"},{"title":"B"}]"#).expect_err("should fail");
    assert!(matches!(err, CatalogError::MissingId { index: 1 }));
}

#[test]
fn parse_catalog_rejects_duplicate_id() {
    let err = parse_catalog(r#"[{"id":"a","title":"A"},{"id":"a","title":"B"}]"#).expect_err("should fail");
    assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "a"));
}

#[test]
fn empty_array_is_an_empty_catalog() {
    let catalog = parse_catalog("[]").expect("empty array parses");
    assert!(catalog.is_empty());
    assert!(catalog.cities().is_empty());
}

#[test]
fn facets_are_unique_in_first_seen_order() {
    let catalog = Catalog::from_universities(sample_universities()).expect("valid");
    assert_eq!(catalog.cities(), vec!["Islamabad", "Lahore", "Karachi", "Peshawar"]);
    assert_eq!(
        catalog.disciplines(),
        vec!["Computer Science", "Engineering", "Business", "Medical", "Social Sciences"]
    );
    assert_eq!(catalog.provinces(), vec!["Punjab", "Sindh", "KPK"]);
}

#[test]
fn facets_skip_blank_values() {
    let mut u = university("a", "A", "", "Arts", 50.0, 1, 1);
    u.province.clear();
    let catalog = Catalog::from_universities(vec![u]).expect("valid");
    assert!(catalog.cities().is_empty());
    assert!(catalog.provinces().is_empty());
    assert_eq!(catalog.disciplines(), vec!["Arts"]);
}

#[test]
fn bundled_dataset_parses() {
    let json = include_str!("../../data/universities.json");
    let catalog = parse_catalog(json).expect("bundled dataset should parse");
    assert!(!catalog.is_empty());
    assert!(catalog.get("pk0").is_some());
}
