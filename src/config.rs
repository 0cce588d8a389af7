//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_CATALOG_FILE: &str = "universities.json";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a valid TCP port number.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// `CATALOG_FILE` must name a file directly inside `DATA_DIR`.
    #[error("invalid CATALOG_FILE: {0}")]
    InvalidCatalogFile(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory served under `/data`.
    pub data_dir: PathBuf,
    /// Catalog document name inside `data_dir`.
    pub catalog_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_file: DEFAULT_CATALOG_FILE.to_owned(),
        }
    }
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DATA_DIR`: default `data`
    /// - `CATALOG_FILE`: default `universities.json`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let data_dir = lookup("DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let catalog_file = parse_catalog_file(lookup("CATALOG_FILE").as_deref())?;
        Ok(Self { port, data_dir, catalog_file })
    }

    /// Filesystem path of the catalog document.
    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_catalog_file(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_CATALOG_FILE.to_owned());
    };
    if value.contains(['/', '\\']) || value == ".." || value == "." {
        return Err(ConfigError::InvalidCatalogFile(value.to_owned()));
    }
    Ok(value.to_owned())
}
