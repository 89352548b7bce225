//! Geographic location value type.
//!
//! `Geo` is the single value type flowing through the whole service: zone
//! table entries, geo-IP responses, and the render model all carry one.

use serde::Deserialize;

/// An approximate geographic location.
///
/// `city` and `country` are always present. `region_name` is only set when a
/// finer-grained subdivision exists (US states, Canadian provinces, etc.).
///
/// The field renames match the ip-api.com JSON response, so a `Geo` can be
/// deserialized straight out of a geo-IP lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Geo {
    /// City name, e.g. "Council Bluffs"
    pub city: String,
    /// Subdivision name (state/province), when one exists
    #[serde(rename = "regionName", default)]
    pub region_name: Option<String>,
    /// Country name, e.g. "United States"
    pub country: String,
    /// ISO-ish country code, e.g. "US"
    #[serde(rename = "countryCode")]
    pub country_code: String,
}

impl Geo {
    /// Creates a `Geo` from string slices. Mostly a convenience for the
    /// static zone table and for tests.
    pub fn new(
        city: &str,
        region_name: Option<&str>,
        country: &str,
        country_code: &str,
    ) -> Self {
        Geo {
            city: city.to_string(),
            region_name: region_name.map(str::to_string),
            country: country.to_string(),
            country_code: country_code.to_string(),
        }
    }

    /// Human-readable search string for this location.
    ///
    /// `"{city}, {region_name}"` when a subdivision is known, otherwise
    /// `"{city}, {country}"`. Used both as the image search query and as the
    /// headline on the rendered page.
    pub fn search_string(&self) -> String {
        match &self.region_name {
            Some(region) => format!("{}, {}", self.city, region),
            None => format!("{}, {}", self.city, self.country),
        }
    }
}
