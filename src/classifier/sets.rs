//! Fixed condition-code tables
//!
//! The tables overlap on purpose: thunder-with-rain codes are in both `STORM` and
//! `RAIN`, thunder-with-snow codes in both `STORM` and `SNOW`. Resolving the overlap
//! is the classifier's job, not the tables'.

use crate::models::ConditionCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Thunderstorm codes
pub const STORM: &[i32] = &[1087, 1273, 1276, 1279, 1282];

/// Rain, drizzle and freezing rain codes
pub const RAIN: &[i32] = &[
    1063, 1150, 1153, 1168, 1171, 1180, 1183, 1186, 1189, 1192, 1195, 1198, 1201, 1240, 1243,
    1246, 1273, 1276,
];

/// Snow and blizzard codes
pub const SNOW: &[i32] = &[
    1066, 1114, 1117, 1210, 1213, 1216, 1219, 1222, 1225, 1255, 1258, 1279, 1282,
];

/// Cloud cover codes
pub const CLOUD: &[i32] = &[1003, 1006, 1009];

/// Subset of `CLOUD`
pub const PARTLY_CLOUDY: &[i32] = &[1003];

/// Clear sky code
pub const CLEAR: &[i32] = &[1000];

/// Mist and fog codes
pub const MIST: &[i32] = &[1030, 1135, 1147];

/// Named classification table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionSet {
    Storm,
    Rain,
    Snow,
    Cloud,
    PartlyCloudy,
    Clear,
    Mist,
}

impl ConditionSet {
    /// All tables in precedence order
    pub const PRECEDENCE: [Self; 7] = [
        Self::Storm,
        Self::Rain,
        Self::Snow,
        Self::Cloud,
        Self::PartlyCloudy,
        Self::Clear,
        Self::Mist,
    ];

    /// Codes belonging to this table
    #[must_use]
    pub const fn codes(self) -> &'static [i32] {
        match self {
            Self::Storm => STORM,
            Self::Rain => RAIN,
            Self::Snow => SNOW,
            Self::Cloud => CLOUD,
            Self::PartlyCloudy => PARTLY_CLOUDY,
            Self::Clear => CLEAR,
            Self::Mist => MIST,
        }
    }

    /// Membership test
    #[must_use]
    pub fn contains(self, code: ConditionCode) -> bool {
        self.codes().contains(&code.value())
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Storm => "storm",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Cloud => "cloud",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Clear => "clear",
            Self::Mist => "mist",
        }
    }
}

impl fmt::Display for ConditionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
