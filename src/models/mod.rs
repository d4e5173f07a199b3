//! Data models for the provider payload
//!
//! This module contains the payload models organized by concern:
//! - Condition: provider condition codes
//! - Location: where the data applies, and its display label
//! - Weather: current conditions, units and UV banding
//! - Forecast: full response and hourly helpers

pub mod condition;
pub mod forecast;
pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use condition::ConditionCode;
pub use forecast::{Forecast, ForecastDay, HourlyForecast, HourlyForecastItem, HourlyVisual, WeatherResponse};
pub use location::Location;
pub use weather::{ApiErrorBody, Condition, CurrentConditions, Units, UvBand};
