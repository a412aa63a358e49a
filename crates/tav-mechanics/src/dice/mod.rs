//! Dice notation, rolling, classification, and history.
//!
//! A roll request flows through three stages: [`notation::parse`] turns
//! text like `2d6+3` into a [`DiceSpec`], [`roll::evaluate`] draws the dice
//! from a [`RandomSource`], and [`RollHistory`] keeps the most recent
//! results for display. [`DiceRoller`] bundles the three.

pub mod classify;
pub mod history;
pub mod notation;
pub mod preset;
pub mod roll;
pub mod roller;
pub mod source;

pub use classify::RollQuality;
pub use history::{HISTORY_CAPACITY, HistoryEntry, RollHistory};
pub use notation::{MAX_DICE, NotationError, parse};
pub use preset::{DicePreset, PresetGroup};
pub use roll::{DieResult, RollResponse, RollResult, evaluate};
pub use roller::{DiceRoller, RollerConfig};
pub use source::{FixedSequence, RandomSource};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A parsed roll: how many dice, how many sides, and a flat modifier.
///
/// Deserialization runs the same bounds checks as [`DiceSpec::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDiceSpec")]
pub struct DiceSpec {
    count: u32,
    size: u32,
    modifier: i32,
}

#[derive(Deserialize)]
struct RawDiceSpec {
    count: u32,
    size: u32,
    #[serde(default)]
    modifier: i32,
}

impl TryFrom<RawDiceSpec> for DiceSpec {
    type Error = NotationError;

    fn try_from(raw: RawDiceSpec) -> Result<Self, Self::Error> {
        Self::new(raw.count, raw.size, raw.modifier)
    }
}

impl DiceSpec {
    /// Build a spec from its parts, enforcing the notation bounds
    /// (`1..=MAX_DICE` dice, at least two sides).
    pub fn new(count: u32, size: u32, modifier: i32) -> Result<Self, NotationError> {
        if count == 0 {
            return Err(NotationError::InvalidCount(count.to_string()));
        }
        if count > MAX_DICE {
            return Err(NotationError::TooManyDice(count));
        }
        if size < 2 {
            return Err(NotationError::InvalidSize(size.to_string()));
        }
        Ok(Self {
            count,
            size,
            modifier,
        })
    }

    /// Number of dice rolled.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Sides on each die.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Flat modifier added after summing the dice.
    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// Highest face sum, ignoring the modifier. Used for quality banding.
    pub fn max_dice_total(&self) -> i64 {
        i64::from(self.count) * i64::from(self.size)
    }

    /// Lowest possible total.
    pub fn min_total(&self) -> i64 {
        i64::from(self.count) + i64::from(self.modifier)
    }

    /// Highest possible total.
    pub fn max_total(&self) -> i64 {
        self.max_dice_total() + i64::from(self.modifier)
    }
}

/// Canonical notation: `2d6`, `1d20+5`, `3d6-1`.
impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.size)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

impl FromStr for DiceSpec {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        notation::parse(s)
    }
}
