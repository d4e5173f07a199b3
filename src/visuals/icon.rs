//! Icon selection per category

use crate::classifier::WeatherCategory;
use serde::Serialize;
use std::fmt;

/// Icon shape to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconShape {
    Sun,
    CloudSun,
    Cloud,
    Rain,
    Snowflake,
    Thunderstorm,
    Fog,
}

impl IconShape {
    /// Icon name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::CloudSun => "cloud-sun",
            Self::Cloud => "cloud",
            Self::Rain => "cloud-rain",
            Self::Snowflake => "snowflake",
            Self::Thunderstorm => "cloud-lightning",
            Self::Fog => "fog",
        }
    }
}

impl fmt::Display for IconShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape plus tint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconSelector {
    pub shape: IconShape,
    /// Hex color
    pub tint: &'static str,
}

pub const SUN_DAY_TINT: &str = "#FFB74D";
pub const SUN_NIGHT_TINT: &str = "#FFA726";

/// Icon for a category. `is_day` only changes the sun tint.
#[must_use]
pub const fn icon_for(category: WeatherCategory, is_day: bool) -> IconSelector {
    let (shape, tint) = match category {
        WeatherCategory::Clear | WeatherCategory::Default => {
            let tint = if is_day { SUN_DAY_TINT } else { SUN_NIGHT_TINT };
            (IconShape::Sun, tint)
        }
        WeatherCategory::PartlyCloudy => (IconShape::CloudSun, "#90A4AE"),
        WeatherCategory::Cloudy => (IconShape::Cloud, "#78909C"),
        WeatherCategory::Rain => (IconShape::Rain, "#42A5F5"),
        WeatherCategory::Snow => (IconShape::Snowflake, "#90CAF9"),
        WeatherCategory::Storm => (IconShape::Thunderstorm, "#5C6BC0"),
        WeatherCategory::Mist => (IconShape::Fog, "#B0BEC5"),
    };
    IconSelector { shape, tint }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_tint_follows_day_flag() {
        let day = icon_for(WeatherCategory::Clear, true);
        let night = icon_for(WeatherCategory::Clear, false);
        assert_eq!(day.shape, IconShape::Sun);
        assert_eq!(night.shape, IconShape::Sun);
        assert_eq!(day.tint, SUN_DAY_TINT);
        assert_eq!(night.tint, SUN_NIGHT_TINT);
    }

    #[test]
    fn test_day_flag_ignored_outside_sun() {
        for category in WeatherCategory::ALL {
            if category.is_clear_equivalent() {
                continue;
            }
            assert_eq!(icon_for(category, true), icon_for(category, false));
        }
    }

    #[test]
    fn test_cloud_shapes() {
        assert_eq!(icon_for(WeatherCategory::PartlyCloudy, true).shape, IconShape::CloudSun);
        assert_eq!(icon_for(WeatherCategory::Cloudy, true).shape, IconShape::Cloud);
    }

    #[test]
    fn test_default_renders_as_sun() {
        assert_eq!(
            icon_for(WeatherCategory::Default, false),
            icon_for(WeatherCategory::Clear, false)
        );
    }
}
