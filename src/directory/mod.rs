//! City directory module
//!
//! Read-only mapping from a city key to the ordered list of cafés known for it.
//! Built once at startup and shared by every request through `AppState`.

mod seed;

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

pub use seed::{builtin_seed, SeedFile};

/// Errors raised while building a directory from a seed file
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read seed file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed data: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Immutable city → cafés lookup table
///
/// Keys match exactly and case-sensitively. Café order is preserved as seeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityDirectory {
    cities: HashMap<String, Vec<String>>,
}

impl CityDirectory {
    pub const fn new(cities: HashMap<String, Vec<String>>) -> Self {
        Self { cities }
    }

    /// Directory populated from the compiled-in seed
    pub fn builtin() -> Self {
        Self::new(builtin_seed())
    }

    /// Parse a TOML seed document with a `[cities]` table of string arrays
    pub fn from_toml_str(content: &str) -> Result<Self, DirectoryError> {
        let seed: SeedFile = toml::from_str(content)?;
        Ok(Self::new(seed.cities))
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Look up the cafés of a city
    ///
    /// Returns `None` for any key not present, including case variants and `""`.
    pub fn lookup(&self, city: &str) -> Option<&[String]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Supported city keys, sorted
    pub fn cities(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.cities.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
