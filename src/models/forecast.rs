//! Forecast payload and hourly helpers

use super::weather::{ApiErrorBody, Condition, CurrentConditions, Units, deserialize_day_flag};
use super::{ConditionCode, Location};
use crate::error::RainOrShineError;
use crate::visuals::VisualState;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Hours within this distance of "now" count as the current hour
const CURRENT_HOUR_WINDOW_MINUTES: i64 = 30;

/// Full provider response: location, current conditions and optional forecast
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherResponse {
    pub location: Location,
    pub current: CurrentConditions,
    #[serde(default)]
    pub forecast: Option<Forecast>,
}

impl WeatherResponse {
    /// Parse a provider payload; a provider error body becomes a payload error
    /// carrying the provider's message
    pub fn from_json(json: &str) -> crate::Result<Self> {
        if let Ok(body) = serde_json::from_str::<ApiErrorBody>(json) {
            let message = body.message_or("Failed to fetch weather data.");
            warn!(code = ?body.error.code, "provider returned an error body");
            return Err(RainOrShineError::payload(message));
        }
        let response: Self = serde_json::from_str(json)?;
        debug!(location = %response.location.name, "parsed weather payload");
        Ok(response)
    }

    /// Visuals for the current conditions
    #[must_use]
    pub fn current_visuals(&self, fallback: ConditionCode) -> VisualState {
        VisualState::resolve(self.current.condition.code_or(fallback), self.current.is_day)
    }

    /// Hourly entries of the first forecast day
    #[must_use]
    pub fn today_hourly(&self) -> HourlyForecast<'_> {
        let hours = self
            .forecast
            .as_ref()
            .and_then(|f| f.forecastday.first())
            .map_or(&[][..], |day| day.hour.as_slice());
        HourlyForecast::new(hours)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Forecast {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastDay {
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub date_epoch: Option<i64>,
    #[serde(default)]
    pub hour: Vec<HourlyForecastItem>,
}

/// One hour of forecast data
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HourlyForecastItem {
    pub time_epoch: i64,
    /// Local time, `YYYY-MM-DD HH:MM`
    pub time: String,
    pub temp_c: f64,
    pub temp_f: f64,
    #[serde(deserialize_with = "deserialize_day_flag")]
    pub is_day: bool,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default)]
    pub wind_kph: f64,
    #[serde(default)]
    pub wind_mph: f64,
    #[serde(default)]
    pub humidity: Option<u8>,
    #[serde(default)]
    pub feelslike_c: Option<f64>,
    #[serde(default)]
    pub feelslike_f: Option<f64>,
    #[serde(default)]
    pub chance_of_rain: Option<u8>,
}

impl HourlyForecastItem {
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time_epoch, 0)
    }

    #[must_use]
    pub fn temperature(&self, units: Units) -> f64 {
        match units {
            Units::Metric => self.temp_c,
            Units::Imperial => self.temp_f,
        }
    }

    /// Whether this hour lies within half an hour of `now`
    #[must_use]
    pub fn is_current_hour(&self, now: DateTime<Utc>) -> bool {
        self.timestamp().is_some_and(|ts| {
            (now - ts).abs() < Duration::minutes(CURRENT_HOUR_WINDOW_MINUTES)
        })
    }
}

/// Borrowed view over a day's hourly entries
#[derive(Debug, Clone, Copy)]
pub struct HourlyForecast<'a> {
    hours: &'a [HourlyForecastItem],
}

/// Visuals for one hourly entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyVisual {
    pub time: String,
    pub temperature: String,
    pub is_current: bool,
    pub visuals: VisualState,
}

impl<'a> HourlyForecast<'a> {
    #[must_use]
    pub fn new(hours: &'a [HourlyForecastItem]) -> Self {
        Self { hours }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// First `max_items` hours
    #[must_use]
    pub fn display_items(&self, max_items: usize) -> &'a [HourlyForecastItem] {
        &self.hours[..self.hours.len().min(max_items)]
    }

    /// Index of the current hour among the first `max_items` hours
    #[must_use]
    pub fn current_hour_index(&self, max_items: usize, now: DateTime<Utc>) -> Option<usize> {
        self.display_items(max_items)
            .iter()
            .position(|item| item.is_current_hour(now))
    }

    /// Per-hour visuals, classified through the same path as the current conditions
    #[must_use]
    pub fn visuals(
        &self,
        max_items: usize,
        units: Units,
        fallback: ConditionCode,
        now: DateTime<Utc>,
    ) -> Vec<HourlyVisual> {
        self.display_items(max_items)
            .iter()
            .map(|item| HourlyVisual {
                time: item.time.clone(),
                temperature: units.format_temperature(item.temperature(units)),
                is_current: item.is_current_hour(now),
                visuals: VisualState::resolve(item.condition.code_or(fallback), item.is_day),
            })
            .collect()
    }
}
