//! Current conditions, units and display helpers

use super::ConditionCode;
use crate::error::RainOrShineError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Condition block shared by current and hourly data
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Condition {
    /// Human-readable description of weather conditions
    #[serde(default)]
    pub text: String,
    /// Provider icon URL
    #[serde(default)]
    pub icon: Option<String>,
    /// Provider condition code, absent in some partial payloads
    #[serde(default)]
    pub code: Option<ConditionCode>,
}

impl Condition {
    /// Code to classify, `fallback` when the payload carried none
    #[must_use]
    pub fn code_or(&self, fallback: ConditionCode) -> ConditionCode {
        self.code.unwrap_or(fallback)
    }
}

/// Current weather observation
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrentConditions {
    #[serde(default)]
    pub last_updated_epoch: Option<i64>,
    #[serde(default)]
    pub last_updated: Option<String>,
    pub temp_c: f64,
    pub temp_f: f64,
    /// Provider sends 0/1; any non-zero value is day
    #[serde(deserialize_with = "deserialize_day_flag")]
    pub is_day: bool,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default)]
    pub wind_kph: f64,
    #[serde(default)]
    pub wind_mph: f64,
    #[serde(default)]
    pub wind_degree: Option<u16>,
    #[serde(default)]
    pub wind_dir: Option<String>,
    #[serde(default)]
    pub pressure_mb: Option<f64>,
    #[serde(default)]
    pub precip_mm: Option<f64>,
    #[serde(default)]
    pub humidity: Option<u8>,
    /// Cloud cover percentage
    #[serde(default)]
    pub cloud: Option<u8>,
    #[serde(default)]
    pub feelslike_c: Option<f64>,
    #[serde(default)]
    pub feelslike_f: Option<f64>,
    #[serde(default)]
    pub vis_km: Option<f64>,
    #[serde(default)]
    pub uv: Option<f64>,
    #[serde(default)]
    pub gust_kph: Option<f64>,
    #[serde(default)]
    pub gust_mph: Option<f64>,
}

impl CurrentConditions {
    /// Temperature in the requested units
    #[must_use]
    pub fn temperature(&self, units: Units) -> f64 {
        units.pick(self.temp_c, self.temp_f)
    }

    /// Feels-like temperature, falling back to the measured one
    #[must_use]
    pub fn feels_like(&self, units: Units) -> f64 {
        match units {
            Units::Metric => self.feelslike_c.unwrap_or(self.temp_c),
            Units::Imperial => self.feelslike_f.unwrap_or(self.temp_f),
        }
    }

    #[must_use]
    pub fn wind_speed(&self, units: Units) -> f64 {
        units.pick(self.wind_kph, self.wind_mph)
    }

    /// UV band, `None` when the payload has no UV index
    #[must_use]
    pub fn uv_band(&self) -> Option<UvBand> {
        self.uv.map(UvBand::from_index)
    }
}

pub(crate) fn deserialize_day_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DayFlag {
        Bool(bool),
        Int(i64),
    }

    Ok(match DayFlag::deserialize(deserializer)? {
        DayFlag::Bool(flag) => flag,
        DayFlag::Int(value) => value != 0,
    })
}

/// Measurement system for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius, km/h
    #[default]
    Metric,
    /// Fahrenheit, mph
    Imperial,
}

impl Units {
    fn pick(self, metric: f64, imperial: f64) -> f64 {
        match self {
            Self::Metric => metric,
            Self::Imperial => imperial,
        }
    }

    #[must_use]
    pub const fn temperature_unit(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    #[must_use]
    pub const fn wind_unit(self) -> &'static str {
        match self {
            Self::Metric => "km/h",
            Self::Imperial => "mph",
        }
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(self, value: f64) -> String {
        format!("{}{}", round_half_up(value), self.temperature_unit())
    }

    /// Format wind speed with unit
    #[must_use]
    pub fn format_wind(self, value: f64) -> String {
        format!("{} {}", round_half_up(value), self.wind_unit())
    }
}

/// Halves round towards positive infinity; never yields negative zero
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor() + 0.0
}

impl FromStr for Units {
    type Err = RainOrShineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            other => Err(RainOrShineError::validation(format!(
                "unknown units '{other}', expected metric or imperial"
            ))),
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => f.write_str("metric"),
            Self::Imperial => f.write_str("imperial"),
        }
    }
}

/// UV exposure band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UvBand {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvBand {
    /// Band for a UV index
    #[must_use]
    pub fn from_index(uv: f64) -> Self {
        if uv <= 2.0 {
            Self::Low
        } else if uv <= 5.0 {
            Self::Moderate
        } else if uv <= 7.0 {
            Self::High
        } else if uv <= 10.0 {
            Self::VeryHigh
        } else {
            Self::Extreme
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Extreme => "Extreme",
        }
    }

    /// Hex color
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "#4CAF50",
            Self::Moderate => "#FF9800",
            Self::High => "#FF5722",
            Self::VeryHigh => "#F44336",
            Self::Extreme => "#9C27B0",
        }
    }
}

/// Error body the provider returns instead of weather data
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Provider message, or `default` when it is missing or blank
    #[must_use]
    pub fn message_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.error
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const CURRENT: &str = r#"{
        "last_updated_epoch": 1700000000,
        "last_updated": "2023-11-14 22:00",
        "temp_c": 21.4,
        "temp_f": 70.5,
        "is_day": 0,
        "condition": {"text": "Clear", "icon": "//cdn.weatherapi.com/night/113.png", "code": 1000},
        "wind_kph": 12.2,
        "wind_mph": 7.6,
        "humidity": 78,
        "feelslike_c": 21.4,
        "feelslike_f": 70.5,
        "uv": 1.0
    }"#;

    #[test]
    fn test_parse_current() {
        let current: CurrentConditions = serde_json::from_str(CURRENT).unwrap();
        assert!(!current.is_day);
        assert_eq!(current.condition.code, Some(ConditionCode(1000)));
        assert_eq!(Units::Metric.format_temperature(current.temperature(Units::Metric)), "21°C");
        assert_eq!(Units::Imperial.format_wind(current.wind_speed(Units::Imperial)), "8 mph");
        assert_eq!(current.uv_band(), Some(UvBand::Low));
    }

    #[test]
    fn test_day_flag_accepts_bool_and_int() {
        let json = CURRENT.replace("\"is_day\": 0", "\"is_day\": true");
        let current: CurrentConditions = serde_json::from_str(&json).unwrap();
        assert!(current.is_day);

        let json = CURRENT.replace("\"is_day\": 0", "\"is_day\": 1");
        let current: CurrentConditions = serde_json::from_str(&json).unwrap();
        assert!(current.is_day);
    }

    #[test]
    fn test_missing_code_uses_fallback() {
        let condition = Condition::default();
        assert_eq!(condition.code_or(ConditionCode::CLEAR), ConditionCode(1000));
    }

    #[rstest]
    #[case(0.0, UvBand::Low)]
    #[case(2.0, UvBand::Low)]
    #[case(2.5, UvBand::Moderate)]
    #[case(5.0, UvBand::Moderate)]
    #[case(7.0, UvBand::High)]
    #[case(10.0, UvBand::VeryHigh)]
    #[case(11.0, UvBand::Extreme)]
    fn test_uv_band(#[case] uv: f64, #[case] expected: UvBand) {
        assert_eq!(UvBand::from_index(uv), expected);
    }

    #[rstest]
    #[case(-0.4, "0°C")]
    #[case(-0.5, "0°C")]
    #[case(-0.6, "-1°C")]
    #[case(20.5, "21°C")]
    #[case(21.4, "21°C")]
    fn test_format_temperature_rounding(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(Units::Metric.format_temperature(value), expected);
    }

    #[rstest]
    #[case(2.5, "3 km/h")]
    #[case(0.2, "0 km/h")]
    fn test_format_wind_rounding(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(Units::Metric.format_wind(value), expected);
    }

    #[test]
    fn test_units_from_str() {
        assert_eq!("Imperial".parse::<Units>().unwrap(), Units::Imperial);
        assert!("kelvin".parse::<Units>().is_err());
    }

    #[test]
    fn test_api_error_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":{"code":1006,"message":"No matching location found."}}"#)
                .unwrap();
        assert_eq!(body.message_or("fallback"), "No matching location found.");

        let blank: ApiErrorBody = serde_json::from_str(r#"{"error":{"message":"  "}}"#).unwrap();
        assert_eq!(blank.message_or("Failed to fetch weather data."), "Failed to fetch weather data.");
    }
}
