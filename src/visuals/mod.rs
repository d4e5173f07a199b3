//! Presentation selectors derived from a weather category
//!
//! Every selector here is a fixed lookup keyed by [`WeatherCategory`]. Callers that
//! start from a raw condition code go through [`VisualState::resolve`] so the
//! classifier's precedence is applied in one place.

pub mod animation;
pub mod gradient;
pub mod icon;

pub use animation::{AnimationKind, AnimationProfile, LightningProfile, animation_for};
pub use gradient::{ColorStop, GradientSpec, gradient_for};
pub use icon::{IconSelector, IconShape, icon_for};

use crate::classifier::{WeatherCategory, classify};
use crate::models::ConditionCode;
use serde::Serialize;

/// Everything the presentation layer needs for one condition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualState {
    pub code: ConditionCode,
    pub is_day: bool,
    pub category: WeatherCategory,
    pub gradient: GradientSpec,
    pub icon: IconSelector,
    pub animation: AnimationKind,
}

impl VisualState {
    /// Classify `code` and select all visuals for it
    pub fn resolve(code: impl Into<ConditionCode>, is_day: bool) -> Self {
        let code = code.into();
        Self::for_category(code, classify(code), is_day)
    }

    fn for_category(code: ConditionCode, category: WeatherCategory, is_day: bool) -> Self {
        Self {
            code,
            is_day,
            category,
            gradient: gradient_for(category),
            icon: icon_for(category, is_day),
            animation: animation_for(category),
        }
    }

    /// Intensity of the selected animation
    #[must_use]
    pub const fn animation_profile(&self) -> AnimationProfile {
        self.animation.profile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_clear_day_and_night() {
        let day = VisualState::resolve(1000, true);
        assert_eq!(day.category, WeatherCategory::Clear);
        assert_eq!(day.icon.shape, IconShape::Sun);
        assert_eq!(day.icon.tint, icon::SUN_DAY_TINT);
        assert_eq!(day.animation, AnimationKind::PulsingSun);

        let night = VisualState::resolve(1000, false);
        assert_eq!(night.icon.tint, icon::SUN_NIGHT_TINT);
        assert_eq!(night.gradient, day.gradient);
    }

    #[test]
    fn test_resolve_unmapped_code() {
        let state = VisualState::resolve(9999, true);
        assert_eq!(state.category, WeatherCategory::Default);
        assert_eq!(state.gradient, gradient::DEFAULT);
        assert_eq!(state.animation, AnimationKind::None);
        assert_eq!(state.icon.shape, IconShape::Sun);
    }

    #[test]
    fn test_resolve_thunder_snow() {
        let state = VisualState::resolve(1282, false);
        assert_eq!(state.category, WeatherCategory::Storm);
        assert_eq!(state.gradient, gradient::STORM);
        assert_eq!(state.animation, AnimationKind::LightningWithRain);
        assert!(state.animation_profile().lightning.is_some());
    }

    #[test]
    fn test_resolve_is_deterministic() {
        for code in ConditionCode::DOCUMENTED {
            assert_eq!(VisualState::resolve(code, true), VisualState::resolve(code, true));
        }
    }
}
