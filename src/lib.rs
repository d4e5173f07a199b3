//! `RainOrShine` - weather condition classification for weather front-ends
//!
//! This library classifies provider condition codes into weather categories and
//! selects the background gradient, icon and animation a front-end shows for them.
//! It also models the provider's current/hourly payload so whole responses can be
//! turned into visuals.

pub mod classifier;
pub mod config;
pub mod error;
pub mod models;
pub mod visuals;

// Re-export core types for public API
pub use classifier::{Classification, ConditionSet, WeatherCategory, classify, explain, memberships};
pub use config::RainOrShineConfig;
pub use error::RainOrShineError;
pub use models::{ConditionCode, Location, Units, UvBand, WeatherResponse};
pub use visuals::{
    AnimationKind, AnimationProfile, GradientSpec, IconSelector, IconShape, VisualState,
    animation_for, gradient_for, icon_for,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, RainOrShineError>;
