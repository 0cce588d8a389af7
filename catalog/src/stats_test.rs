use super::*;
use crate::model::AdmissionStatus;
use crate::test_helpers::sample_universities;

#[test]
fn stats_of_empty_catalog_are_zero() {
    assert_eq!(CatalogStats::from_universities(&[]), CatalogStats::default());
}

#[test]
fn stats_count_open_cities_and_programs() {
    let mut records = sample_universities();
    records[1].admission = AdmissionStatus::Closed;
    let stats = CatalogStats::from_universities(&records);

    assert_eq!(stats.total, 6);
    assert_eq!(stats.open_admissions, 5);
    assert_eq!(stats.cities, 4);
    // Degrees are derived from disciplines in the fixture: five distinct.
    assert_eq!(stats.programs, 5);
}

#[test]
fn average_merit_is_rounded() {
    let stats = CatalogStats::from_universities(&sample_universities());
    // (88.5 + 85 + 90 + 95 + 70 + 45) / 6 = 78.916...
    assert_eq!(stats.average_merit, 79);
}
