//! Background gradients per category

use crate::classifier::WeatherCategory;
use serde::Serialize;

/// One color stop of a linear gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorStop {
    /// Hex color, `#rrggbb`
    pub color: &'static str,
    /// Position along the gradient in percent
    pub position: u8,
}

const fn stop(color: &'static str, position: u8) -> ColorStop {
    ColorStop { color, position }
}

/// Linear background gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradientSpec {
    /// Direction in degrees
    pub angle: u16,
    pub stops: &'static [ColorStop],
}

impl GradientSpec {
    /// CSS `linear-gradient(...)` value
    #[must_use]
    pub fn to_css(&self) -> String {
        let stops = self
            .stops
            .iter()
            .map(|s| format!("{} {}%", s.color, s.position))
            .collect::<Vec<_>>()
            .join(", ");
        format!("linear-gradient({}deg, {stops})", self.angle)
    }
}

pub const STORM: GradientSpec = GradientSpec {
    angle: 135,
    stops: &[
        stop("#1a2a4a", 0),
        stop("#2c3e6e", 40),
        stop("#3d518f", 70),
        stop("#4e64b0", 100),
    ],
};

pub const RAIN: GradientSpec = GradientSpec {
    angle: 135,
    stops: &[
        stop("#3a516b", 0),
        stop("#4a6b8a", 40),
        stop("#5a85a9", 70),
        stop("#6a9fc8", 100),
    ],
};

pub const SNOW: GradientSpec = GradientSpec {
    angle: 135,
    stops: &[
        stop("#e6f0f9", 0),
        stop("#d0e4f5", 30),
        stop("#bbd8f0", 60),
        stop("#a5cceb", 100),
    ],
};

pub const CLOUD: GradientSpec = GradientSpec {
    angle: 135,
    stops: &[
        stop("#a7b8d1", 0),
        stop("#8fa3c2", 30),
        stop("#778eb3", 60),
        stop("#5f79a4", 100),
    ],
};

pub const CLEAR: GradientSpec = GradientSpec {
    angle: 135,
    stops: &[stop("#4facfe", 0), stop("#00f2fe", 100)],
};

pub const MIST: GradientSpec = GradientSpec {
    angle: 135,
    stops: &[stop("#d9e2ec", 0), stop("#b8c7db", 50), stop("#97acca", 100)],
};

/// Used for unrecognised codes
pub const DEFAULT: GradientSpec = GradientSpec {
    angle: 135,
    stops: &[stop("#6a11cb", 0), stop("#2575fc", 100)],
};

/// Background gradient for a category
#[must_use]
pub const fn gradient_for(category: WeatherCategory) -> GradientSpec {
    match category {
        WeatherCategory::Storm => STORM,
        WeatherCategory::Rain => RAIN,
        WeatherCategory::Snow => SNOW,
        WeatherCategory::Cloudy | WeatherCategory::PartlyCloudy => CLOUD,
        WeatherCategory::Clear => CLEAR,
        WeatherCategory::Mist => MIST,
        WeatherCategory::Default => DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_rendering() {
        assert_eq!(
            CLEAR.to_css(),
            "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)"
        );
        assert_eq!(
            gradient_for(WeatherCategory::Storm).to_css(),
            "linear-gradient(135deg, #1a2a4a 0%, #2c3e6e 40%, #3d518f 70%, #4e64b0 100%)"
        );
    }

    #[test]
    fn test_cloud_categories_share_gradient() {
        assert_eq!(
            gradient_for(WeatherCategory::Cloudy),
            gradient_for(WeatherCategory::PartlyCloudy)
        );
    }

    #[test]
    fn test_default_differs_from_clear() {
        assert_ne!(gradient_for(WeatherCategory::Default), CLEAR);
        assert_eq!(gradient_for(WeatherCategory::Default), DEFAULT);
    }

    #[test]
    fn test_stops_are_ordered() {
        for category in WeatherCategory::ALL {
            let spec = gradient_for(category);
            assert!(spec.stops.windows(2).all(|w| w[0].position < w[1].position));
            assert_eq!(spec.stops.first().map(|s| s.position), Some(0));
            assert_eq!(spec.stops.last().map(|s| s.position), Some(100));
        }
    }
}
