//! Fixtures shared by the unit tests in this crate.

use crate::model::{AdmissionStatus, Location, MeritPoint, University};

/// Build a record with the fields most tests care about; the rest are blank.
pub fn university(id: &str, name: &str, city: &str, discipline: &str, merit: f64, fee: u64, ranking: u32) -> University {
    University {
        id: id.to_owned(),
        name: name.to_owned(),
        city: city.to_owned(),
        province: province_for(city).to_owned(),
        degree: format!("BS {discipline}"),
        discipline: discipline.to_owned(),
        fee,
        merit,
        ranking,
        active: true,
        phone: None,
        email: None,
        website: None,
        image_url: None,
        logo_url: None,
        location: Location::default(),
        deadline: None,
        admission: AdmissionStatus::Open,
        merit_history: Vec::new(),
    }
}

fn province_for(city: &str) -> &'static str {
    match city {
        "Karachi" => "Sindh",
        "Peshawar" => "KPK",
        "Quetta" => "Balochistan",
        _ => "Punjab",
    }
}

/// Attach a merit history series starting at `first_year`.
pub fn with_history(mut u: University, first_year: u16, merits: &[f64]) -> University {
    u.merit_history = merits
        .iter()
        .zip(first_year..)
        .map(|(&merit, year)| MeritPoint { year, merit })
        .collect();
    u
}

/// Six records spread across cities, disciplines, fees, and ranks.
pub fn sample_universities() -> Vec<University> {
    vec![
        university("pk1", "Quaid-i-Azam University", "Islamabad", "Computer Science", 88.5, 35_000, 3),
        university("pk3", "NUST", "Islamabad", "Engineering", 85.0, 185_000, 1),
        university("pk4", "LUMS", "Lahore", "Business", 90.0, 450_000, 2),
        university("pk6", "Aga Khan University", "Karachi", "Medical", 95.0, 550_000, 4),
        university("pk8", "University of Peshawar", "Peshawar", "Social Sciences", 70.0, 28_000, 15),
        university("pk12", "Islamabad Medical and Dental College", "Islamabad", "Medical", 45.0, 8_500, 85),
    ]
}

/// Source-format JSON for two records, one with every optional field set.
pub const SAMPLE_JSON: &str = r#"[
  {
    "id": "pk1",
    "title": "Quaid-i-Azam University, Islamabad",
    "city": "Islamabad",
    "province": "Punjab",
    "degree": "BS Computer Science",
    "discipline": "Computer Science",
    "fee": 35000,
    "merit": 88.5,
    "ranking": 3,
    "status": 1,
    "contact": "(051) 9064-3000",
    "info": "info@qau.edu.pk",
    "web": "https://www.qau.edu.pk/",
    "url": "https://example.test/qau.jpg",
    "logo": "https://example.test/qau-logo.png",
    "admissions": "1.0",
    "map": { "address": "University Road, Islamabad", "lat": 33.7477, "long": 73.1384, "location": "Islamabad" },
    "deadline": "January 2025",
    "admission": "Open",
    "meritHistory": [ { "year": 2023, "merit": 87.8 }, { "year": 2024, "merit": 88.5 } ]
  },
  {
    "id": "pk3",
    "title": "National University of Sciences and Technology (NUST)",
    "city": "Islamabad",
    "province": "Punjab",
    "degree": "BS Electrical Engineering",
    "discipline": "Engineering",
    "fee": 185000,
    "merit": 85,
    "ranking": 1,
    "status": 0,
    "contact": "",
    "admission": "Closed"
  }
]"#;
