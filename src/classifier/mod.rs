//! Condition classifier
//!
//! Maps a provider condition code to a single [`WeatherCategory`]. The code tables
//! overlap, so classification is an ordered list of membership checks where the
//! first match wins:
//!
//! Storm, Rain, Snow, Cloud (refined to PartlyCloudy), Clear, Mist, then Default.
//!
//! Thunder-with-rain and thunder-with-snow codes therefore always resolve to
//! `Storm`. Every code, including negative and undocumented ones, resolves to some
//! category; anything unmatched falls back to `Default`.

pub mod category;
pub mod sets;

pub use category::WeatherCategory;
pub use sets::ConditionSet;

use crate::models::ConditionCode;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Classify a condition code
pub fn classify(code: impl Into<ConditionCode>) -> WeatherCategory {
    let code = code.into();

    if ConditionSet::Storm.contains(code) {
        WeatherCategory::Storm
    } else if ConditionSet::Rain.contains(code) {
        WeatherCategory::Rain
    } else if ConditionSet::Snow.contains(code) {
        WeatherCategory::Snow
    } else if ConditionSet::Cloud.contains(code) {
        if ConditionSet::PartlyCloudy.contains(code) {
            WeatherCategory::PartlyCloudy
        } else {
            WeatherCategory::Cloudy
        }
    } else if ConditionSet::Clear.contains(code) {
        WeatherCategory::Clear
    } else if ConditionSet::Mist.contains(code) {
        WeatherCategory::Mist
    } else {
        trace!(code = code.value(), "unmapped condition code, using default category");
        WeatherCategory::Default
    }
}

/// Every table containing `code`, in precedence order
#[must_use]
pub fn memberships(code: impl Into<ConditionCode>) -> Vec<ConditionSet> {
    let code = code.into();
    ConditionSet::PRECEDENCE
        .into_iter()
        .filter(|set| set.contains(code))
        .collect()
}

/// Classification result together with the tables that matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub code: ConditionCode,
    pub category: WeatherCategory,
    pub memberships: Vec<ConditionSet>,
}

impl Classification {
    /// More than one primary table matched (partly-cloudy refinement excluded)
    #[must_use]
    pub fn is_overlap(&self) -> bool {
        self.memberships
            .iter()
            .filter(|set| **set != ConditionSet::PartlyCloudy)
            .count()
            > 1
    }
}

/// Classify and report which tables were involved
#[must_use]
pub fn explain(code: impl Into<ConditionCode>) -> Classification {
    let code = code.into();
    Classification {
        code,
        category: classify(code),
        memberships: memberships(code),
    }
}
