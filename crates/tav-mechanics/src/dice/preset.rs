//! Built-in one-click rolls, grouped by what they are used for.

use serde::{Deserialize, Serialize};

use super::DiceSpec;
use super::notation::{NotationError, parse};

/// A named roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePreset {
    /// Label shown to the player and recorded as the roll description.
    pub name: String,
    /// Dice notation.
    pub notation: String,
}

impl DicePreset {
    fn new(name: &str, notation: &str) -> Self {
        Self {
            name: name.to_string(),
            notation: notation.to_string(),
        }
    }

    /// Parse the preset's notation.
    pub fn spec(&self) -> Result<DiceSpec, NotationError> {
        parse(&self.notation)
    }
}

/// Presets sharing a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetGroup {
    /// Category name.
    pub category: String,
    /// Presets in display order.
    pub presets: Vec<DicePreset>,
}

/// The standard preset groups.
pub fn standard() -> Vec<PresetGroup> {
    vec![
        PresetGroup {
            category: "checks".to_string(),
            presets: vec![
                DicePreset::new("Ability check", "1d20"),
                DicePreset::new("Percentile table", "1d100"),
            ],
        },
        PresetGroup {
            category: "attributes".to_string(),
            presets: vec![DicePreset::new("Attribute roll", "3d6")],
        },
        PresetGroup {
            category: "damage".to_string(),
            presets: vec![
                DicePreset::new("Dagger", "1d4"),
                DicePreset::new("Shortsword", "1d6"),
                DicePreset::new("Longsword", "1d8+3"),
                DicePreset::new("Greataxe", "1d12"),
                DicePreset::new("Critical damage", "2d10"),
            ],
        },
    ]
}

/// Find a preset by name, ignoring case.
pub fn find(name: &str) -> Option<DicePreset> {
    let lower = name.trim().to_lowercase();
    standard()
        .into_iter()
        .flat_map(|g| g.presets)
        .find(|p| p.name.to_lowercase() == lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_parses() {
        for group in standard() {
            assert!(!group.presets.is_empty(), "{} is empty", group.category);
            for preset in &group.presets {
                assert!(preset.spec().is_ok(), "{} fails to parse", preset.notation);
            }
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        let preset = find("longsword").unwrap();
        assert_eq!(preset.notation, "1d8+3");
        assert_eq!(preset.spec().unwrap().modifier(), 3);
        assert!(find("Halberd").is_none());
    }
}
