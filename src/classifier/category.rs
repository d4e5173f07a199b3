//! Weather categories produced by classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse visual bucket for a condition code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCategory {
    /// Clear sky
    Clear,
    /// Cloud cover without the partly-cloudy refinement
    Cloudy,
    /// Cloud cover refined to partly cloudy
    PartlyCloudy,
    Rain,
    Snow,
    /// Thunderstorm, with or without rain or snow
    Storm,
    /// Mist and fog
    Mist,
    /// Unrecognised code; renders like `Clear` apart from its gradient and animation
    Default,
}

impl WeatherCategory {
    pub const ALL: [Self; 8] = [
        Self::Clear,
        Self::Cloudy,
        Self::PartlyCloudy,
        Self::Rain,
        Self::Snow,
        Self::Storm,
        Self::Mist,
        Self::Default,
    ];

    /// True for both cloud categories
    #[must_use]
    pub const fn is_cloud(self) -> bool {
        matches!(self, Self::Cloudy | Self::PartlyCloudy)
    }

    /// True for the categories that show a sun icon
    #[must_use]
    pub const fn is_clear_equivalent(self) -> bool {
        matches!(self, Self::Clear | Self::Default)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Cloudy => "Cloudy",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Storm => "Storm",
            Self::Mist => "Mist",
            Self::Default => "Default",
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloud_helpers() {
        assert!(WeatherCategory::Cloudy.is_cloud());
        assert!(WeatherCategory::PartlyCloudy.is_cloud());
        assert!(!WeatherCategory::Mist.is_cloud());
        assert!(WeatherCategory::Default.is_clear_equivalent());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&WeatherCategory::PartlyCloudy).unwrap();
        assert_eq!(json, "\"partly-cloudy\"");
    }
}
