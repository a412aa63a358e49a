use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Size of the point-buy pool every character spends on attributes.
pub const POINT_BUDGET: u32 = 27;

/// Maximum number of points that may be allocated to a single attribute.
pub const ATTRIBUTE_CAP: u32 = 8;

/// Score every attribute starts from before points and racial modifiers.
pub const BASE_SCORE: i32 = 10;

/// One of the six character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Physical power.
    #[serde(alias = "str")]
    Strength,
    /// Agility and reflexes.
    #[serde(alias = "dex")]
    Dexterity,
    /// Endurance and health.
    #[serde(alias = "con")]
    Constitution,
    /// Reasoning and memory.
    #[serde(alias = "int")]
    Intelligence,
    /// Perception and insight.
    #[serde(alias = "wis")]
    Wisdom,
    /// Force of personality.
    #[serde(alias = "cha")]
    Charisma,
}

impl Attribute {
    /// All attributes in canonical sheet order.
    pub const ALL: [Attribute; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Position of this attribute in [`Attribute::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Strength => 0,
            Self::Dexterity => 1,
            Self::Constitution => 2,
            Self::Intelligence => 3,
            Self::Wisdom => 4,
            Self::Charisma => 5,
        }
    }

    /// Lowercase full name, as used in documents.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    /// Three-letter abbreviation (`str`, `dex`, ...).
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::Strength => "str",
            Self::Dexterity => "dex",
            Self::Constitution => "con",
            Self::Intelligence => "int",
            Self::Wisdom => "wis",
            Self::Charisma => "cha",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = CoreError;

    /// Accepts the full name or the abbreviation, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == lower || a.abbrev() == lower)
            .ok_or_else(|| CoreError::UnknownAttribute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all_order() {
        for (i, attr) in Attribute::ALL.iter().enumerate() {
            assert_eq!(attr.index(), i);
        }
    }

    #[test]
    fn parse_full_and_abbrev() {
        assert_eq!("strength".parse::<Attribute>().unwrap(), Attribute::Strength);
        assert_eq!("DEX".parse::<Attribute>().unwrap(), Attribute::Dexterity);
        assert_eq!(" Wisdom ".parse::<Attribute>().unwrap(), Attribute::Wisdom);
        assert!("luck".parse::<Attribute>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Attribute::Charisma).unwrap();
        assert_eq!(json, "\"charisma\"");
        let back: Attribute = serde_json::from_str("\"constitution\"").unwrap();
        assert_eq!(back, Attribute::Constitution);
    }

    #[test]
    fn serde_accepts_abbreviations() {
        for attr in Attribute::ALL {
            let json = format!("\"{}\"", attr.abbrev());
            let back: Attribute = serde_json::from_str(&json).unwrap();
            assert_eq!(back, attr);
        }
        // Serialization always uses the full name.
        assert_eq!(serde_json::to_string(&Attribute::Strength).unwrap(), "\"strength\"");
    }

    #[test]
    fn budget_fits_within_caps() {
        assert!(POINT_BUDGET <= ATTRIBUTE_CAP * Attribute::ALL.len() as u32);
    }
}
