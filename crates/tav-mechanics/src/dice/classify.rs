//! Display banding of roll results.
//!
//! A roll is banded by how close it came to its maximum face sum. The band
//! is derived on demand and never stored with the result.

use serde::{Deserialize, Serialize};

/// How good a roll was relative to its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollQuality {
    /// Below 30% of the maximum.
    Poor,
    /// 30% up to 70%.
    Normal,
    /// 70% up to 90%.
    Good,
    /// 90% of the maximum or better.
    Critical,
}

impl RollQuality {
    /// Band `value / max`. A non-positive `max` bands as poor.
    pub fn from_ratio(value: i64, max: i64) -> Self {
        if max <= 0 {
            return Self::Poor;
        }
        // Compare in integers: value/max >= n/10  <=>  10*value >= n*max.
        let scaled = i128::from(value) * 10;
        let max = i128::from(max);
        if scaled >= 9 * max {
            Self::Critical
        } else if scaled >= 7 * max {
            Self::Good
        } else if scaled >= 3 * max {
            Self::Normal
        } else {
            Self::Poor
        }
    }
}

impl std::fmt::Display for RollQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Poor => write!(f, "poor"),
            Self::Normal => write!(f, "normal"),
            Self::Good => write!(f, "good"),
            Self::Critical => write!(f, "critical"),
        }
    }
}
