//! Café lookup request handling
//!
//! Validates the `count` and `city` values of a request against the city
//! directory and selects the cafés to return. Validation order:
//! count presence, count value, city.

mod error;
mod query;

pub use error::CafeError;
pub use query::CafeQuery;

use crate::directory::CityDirectory;

/// Cafés selected for a successful request, in directory order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CafeList<'a> {
    cafes: &'a [String],
}

impl<'a> CafeList<'a> {
    pub const fn as_slice(&self) -> &'a [String] {
        self.cafes
    }

    pub const fn len(&self) -> usize {
        self.cafes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.cafes.is_empty()
    }

    /// Response body: names joined by a single comma, no trailing delimiter
    pub fn to_body(&self) -> String {
        self.cafes.join(",")
    }
}

/// Handle one `/cafe` request
pub fn handle<'a>(
    raw_count: Option<&str>,
    raw_city: Option<&str>,
    directory: &'a CityDirectory,
) -> Result<CafeList<'a>, CafeError> {
    let count = parse_count(raw_count)?;

    let cafes = raw_city
        .and_then(|city| directory.lookup(city))
        .ok_or(CafeError::InvalidCity)?;

    let take = count.min(cafes.len());
    Ok(CafeList {
        cafes: &cafes[..take],
    })
}

/// Convenience wrapper over `handle` for an already-extracted query
pub fn handle_query<'a>(
    query: &CafeQuery,
    directory: &'a CityDirectory,
) -> Result<CafeList<'a>, CafeError> {
    handle(query.count.as_deref(), query.city.as_deref(), directory)
}

fn parse_count(raw: Option<&str>) -> Result<usize, CafeError> {
    let raw = raw.ok_or(CafeError::CountMissing)?;
    let value: i64 = raw.parse().map_err(|_| CafeError::InvalidCount)?;
    if value < 0 {
        return Err(CafeError::InvalidCount);
    }
    // Larger than the address space still means "all of them"
    Ok(usize::try_from(value).unwrap_or(usize::MAX))
}
