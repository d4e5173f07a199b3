//! Background animation selection and intensity

use crate::classifier::WeatherCategory;
use serde::Serialize;
use std::fmt;

/// Background animation to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    ParticleRain,
    ParticleSnow,
    DriftingClouds,
    PulsingSun,
    LightningWithRain,
    DriftingMist,
    None,
}

/// How much of an animation to draw
///
/// Durations are the range a presentation layer picks each element's cycle from;
/// start delays are spread over `0..=max_delay_secs`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationProfile {
    pub particles: u16,
    pub min_cycle_secs: f32,
    pub max_cycle_secs: f32,
    pub max_delay_secs: f32,
    pub lightning: Option<LightningProfile>,
}

/// Lightning overlay of the storm animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightningProfile {
    /// Flash cycle shared by sky flash and bolts
    pub flash_period_secs: f32,
    /// Start offset of each bolt
    pub bolt_delays_secs: &'static [f32],
}

const RAIN_PROFILE: AnimationProfile = AnimationProfile {
    particles: 50,
    min_cycle_secs: 1.0,
    max_cycle_secs: 3.0,
    max_delay_secs: 2.0,
    lightning: None,
};

impl AnimationKind {
    /// Identifier used by the presentation layer
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ParticleRain => "particle-rain",
            Self::ParticleSnow => "particle-snow",
            Self::DriftingClouds => "drifting-clouds",
            Self::PulsingSun => "pulsing-sun",
            Self::LightningWithRain => "lightning-with-rain",
            Self::DriftingMist => "drifting-mist",
            Self::None => "none",
        }
    }

    #[must_use]
    pub const fn is_animated(self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub const fn profile(self) -> AnimationProfile {
        match self {
            Self::ParticleRain => RAIN_PROFILE,
            Self::LightningWithRain => AnimationProfile {
                lightning: Some(LightningProfile {
                    flash_period_secs: 4.0,
                    bolt_delays_secs: &[1.0, 1.5, 2.2],
                }),
                ..RAIN_PROFILE
            },
            Self::ParticleSnow => AnimationProfile {
                particles: 40,
                min_cycle_secs: 4.0,
                max_cycle_secs: 8.0,
                max_delay_secs: 4.0,
                lightning: None,
            },
            Self::DriftingClouds => AnimationProfile {
                particles: 6,
                min_cycle_secs: 20.0,
                max_cycle_secs: 35.0,
                max_delay_secs: 15.0,
                lightning: None,
            },
            Self::PulsingSun => AnimationProfile {
                particles: 1,
                min_cycle_secs: 3.0,
                max_cycle_secs: 3.0,
                max_delay_secs: 0.0,
                lightning: None,
            },
            Self::DriftingMist => AnimationProfile {
                particles: 6,
                min_cycle_secs: 8.0,
                max_cycle_secs: 12.0,
                max_delay_secs: 4.0,
                lightning: None,
            },
            Self::None => AnimationProfile {
                particles: 0,
                min_cycle_secs: 0.0,
                max_cycle_secs: 0.0,
                max_delay_secs: 0.0,
                lightning: None,
            },
        }
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Animation for a category
#[must_use]
pub const fn animation_for(category: WeatherCategory) -> AnimationKind {
    match category {
        WeatherCategory::Storm => AnimationKind::LightningWithRain,
        WeatherCategory::Rain => AnimationKind::ParticleRain,
        WeatherCategory::Snow => AnimationKind::ParticleSnow,
        WeatherCategory::Cloudy | WeatherCategory::PartlyCloudy => AnimationKind::DriftingClouds,
        WeatherCategory::Clear => AnimationKind::PulsingSun,
        WeatherCategory::Mist => AnimationKind::DriftingMist,
        WeatherCategory::Default => AnimationKind::None,
    }
}
