//! University record model.
//!
//! DESIGN
//! ======
//! Records are immutable once loaded. Field names here are the domain names;
//! the source dataset's keys (`title`, `info`, `web`, `url`, ...) are mapped
//! onto them by `load`, so nothing outside that module sees the wire shape.

use serde::Deserialize;

/// A single university program listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct University {
    /// Stable identifier used as the favorites/compare key.
    pub id: String,
    /// Display name of the university.
    pub name: String,
    pub city: String,
    pub province: String,
    /// Degree program offered, e.g. `"MBBS"`.
    pub degree: String,
    /// Broad academic field, e.g. `"Medical"`.
    pub discipline: String,
    /// Annual fee in PKR.
    pub fee: u64,
    /// Minimum qualifying percentage.
    pub merit: f64,
    /// National rank, 1 is best.
    pub ranking: u32,
    /// Whether the listing is active.
    pub active: bool,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub image_url: Option<String>,
    pub logo_url: Option<String>,
    pub location: Location,
    /// Application deadline as free text, e.g. `"December 2024"`.
    pub deadline: Option<String>,
    pub admission: AdmissionStatus,
    /// Historical merit series, oldest first. Empty when unknown.
    pub merit_history: Vec<MeritPoint>,
}

impl University {
    /// Image to render for this record, falling back to the shared placeholder.
    #[must_use]
    pub fn image_or_fallback(&self) -> &str {
        self.image_url.as_deref().unwrap_or(crate::format::FALLBACK_IMAGE_URL)
    }

    /// `"City, Province"`, or whichever part is present.
    #[must_use]
    pub fn place(&self) -> String {
        match (self.city.is_empty(), self.province.is_empty()) {
            (false, false) => format!("{}, {}", self.city, self.province),
            (false, true) => self.city.clone(),
            (true, false) => self.province.clone(),
            (true, true) => String::new(),
        }
    }
}

/// Street address and coordinates of a campus.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Location {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Locality label, usually the city.
    pub area: String,
}

/// One year of the merit history series.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct MeritPoint {
    pub year: u16,
    pub merit: f64,
}

/// Admission window state of a listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AdmissionStatus {
    Open,
    #[default]
    Closed,
    /// Any other label carried by the dataset, kept verbatim.
    Other(String),
}

impl AdmissionStatus {
    /// Map a dataset label onto a status. Matching is case-insensitive.
    #[must_use]
    pub fn from_label(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("open") {
            Self::Open
        } else if trimmed.eq_ignore_ascii_case("closed") || trimmed.is_empty() {
            Self::Closed
        } else {
            Self::Other(trimmed.to_owned())
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Other(label) => label,
        }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;
