//! Dataset loading and reshaping.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog ships as one static JSON array. The browser fetches it once at
//! startup and the server reads it once to validate it; both go through
//! [`parse_catalog`], which maps the source keys onto [`University`].
//!
//! ERROR HANDLING
//! ==============
//! Only structural problems are errors: malformed JSON, a record without an
//! id, or a repeated id. Missing optional fields take neutral defaults.

use std::collections::HashMap;

use serde::Deserialize;

use crate::model::{AdmissionStatus, Location, MeritPoint, University};

/// Error returned by [`parse_catalog`] and [`Catalog::from_universities`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document is not a JSON array of university records.
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A record has an empty `id`.
    #[error("record at index {index} has no id")]
    MissingId { index: usize },
    /// Two records share the same `id`.
    #[error("duplicate university id: {0}")]
    DuplicateId(String),
}

// =============================================================================
// SOURCE RECORD
// =============================================================================

/// Source record. Everything but `title` tolerates a missing key or `null`;
/// numbers may arrive as integers or floats.
#[derive(Deserialize)]
struct RawUniversity {
    #[serde(default)]
    id: Option<String>,
    title: String,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    province: Option<String>,
    #[serde(default)]
    degree: Option<String>,
    #[serde(default)]
    discipline: Option<String>,
    #[serde(default)]
    fee: Option<f64>,
    #[serde(default)]
    merit: Option<f64>,
    #[serde(default)]
    ranking: Option<f64>,
    #[serde(default)]
    status: Option<f64>,
    #[serde(default)]
    contact: Option<String>,
    #[serde(default)]
    info: Option<String>,
    #[serde(default)]
    web: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    logo: Option<String>,
    #[serde(default)]
    map: Option<RawMap>,
    #[serde(default)]
    deadline: Option<String>,
    #[serde(default)]
    admission: Option<String>,
    #[serde(default, rename = "meritHistory")]
    merit_history: Option<Vec<MeritPoint>>,
}

#[derive(Deserialize)]
struct RawMap {
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    long: Option<f64>,
    #[serde(default)]
    location: Option<String>,
}

impl From<RawUniversity> for University {
    fn from(raw: RawUniversity) -> Self {
        let city = raw.city.unwrap_or_default();
        let location = raw.map.map_or_else(
            || Location { area: city.clone(), ..Location::default() },
            |m| Location {
                address: m.address.unwrap_or_default(),
                latitude: finite_or_zero(m.lat),
                longitude: finite_or_zero(m.long),
                area: m.location.unwrap_or_default(),
            },
        );
        Self {
            id: raw.id.unwrap_or_default().trim().to_owned(),
            name: raw.title,
            city,
            province: raw.province.unwrap_or_default(),
            degree: raw.degree.unwrap_or_default(),
            discipline: raw.discipline.unwrap_or_default(),
            fee: whole_number(raw.fee, u64::MAX),
            merit: finite_or_zero(raw.merit),
            ranking: u32::try_from(whole_number(raw.ranking, u64::from(u32::MAX))).unwrap_or(u32::MAX),
            active: raw.status.map_or(true, |s| (s - 1.0).abs() < f64::EPSILON),
            phone: non_blank(raw.contact),
            email: non_blank(raw.info),
            website: non_blank(raw.web),
            image_url: non_blank(raw.url),
            logo_url: non_blank(raw.logo),
            location,
            deadline: non_blank(raw.deadline),
            admission: AdmissionStatus::from_label(raw.admission.as_deref().unwrap_or_default()),
            merit_history: raw.merit_history.unwrap_or_default(),
        }
    }
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or_default()
}

/// Round a JSON number to a whole value in `0..=max`; missing, negative or
/// non-finite values become `0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn whole_number(value: Option<f64>, max: u64) -> u64 {
    let value = finite_or_zero(value).round();
    if value <= 0.0 {
        0
    } else if value >= max as f64 {
        max
    } else {
        value as u64
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// =============================================================================
// CATALOG
// =============================================================================

/// The loaded, immutable set of university records in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    universities: Vec<University>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-shaped records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingId`] or [`CatalogError::DuplicateId`]
    /// when ids are not unique and non-empty.
    pub fn from_universities(universities: Vec<University>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(universities.len());
        for (i, u) in universities.iter().enumerate() {
            if u.id.is_empty() {
                return Err(CatalogError::MissingId { index: i });
            }
            if index.insert(u.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(u.id.clone()));
            }
        }
        Ok(Self { universities, index })
    }

    #[must_use]
    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&University> {
        self.index.get(id).map(|&i| &self.universities[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.universities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }

    /// Distinct cities in first-seen order.
    #[must_use]
    pub fn cities(&self) -> Vec<String> {
        self.facet(|u| &u.city)
    }

    /// Distinct disciplines in first-seen order.
    #[must_use]
    pub fn disciplines(&self) -> Vec<String> {
        self.facet(|u| &u.discipline)
    }

    /// Distinct provinces in first-seen order.
    #[must_use]
    pub fn provinces(&self) -> Vec<String> {
        self.facet(|u| &u.province)
    }

    fn facet(&self, field: impl Fn(&University) -> &String) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for value in self.universities.iter().map(field) {
            if !value.is_empty() && !seen.contains(value) {
                seen.push(value.clone());
            }
        }
        seen
    }
}

/// Parse the source JSON document into a [`Catalog`].
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] for malformed JSON and the id errors of
/// [`Catalog::from_universities`].
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let raw: Vec<RawUniversity> = serde_json::from_str(json)?;
    Catalog::from_universities(raw.into_iter().map(University::from).collect())
}

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;
