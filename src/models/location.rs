//! Location block of the provider payload

use serde::{Deserialize, Serialize};

/// Resolved location the weather data belongs to
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// City or place name
    pub name: String,
    /// Region, state or province (may be empty)
    #[serde(default)]
    pub region: String,
    pub country: String,
    /// Latitude in decimal degrees
    #[serde(rename = "lat")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(rename = "lon")]
    pub longitude: f64,
    /// IANA timezone id
    #[serde(default)]
    pub tz_id: Option<String>,
    #[serde(default)]
    pub localtime_epoch: Option<i64>,
    #[serde(default)]
    pub localtime: Option<String>,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(name: String, region: String, country: String, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            region,
            country,
            latitude,
            longitude,
            tz_id: None,
            localtime_epoch: None,
            localtime: None,
        }
    }

    /// Label for headers: the region is left out when empty or equal to the name
    #[must_use]
    pub fn display_name(&self) -> String {
        if !self.region.is_empty() && self.region != self.name {
            format!("{}, {}, {}", self.name, self.region, self.country)
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
