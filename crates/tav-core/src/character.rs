//! Documents exchanged with the character store: the build submission a
//! client sends and the snapshot handed on for persistence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;

/// A character build as submitted by a client.
///
/// Attribute points arrive as raw integers and are not yet trusted; the
/// mechanics crate checks them against the point-buy rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSubmission {
    /// Character name.
    #[serde(default)]
    pub name: String,
    /// Selected race id (empty when none was chosen).
    #[serde(default)]
    pub race: String,
    /// Selected class id (empty when none was chosen).
    #[serde(default)]
    pub character_class: String,
    /// Free-text personal history.
    #[serde(default)]
    pub background: String,
    /// Points allocated per attribute. Missing attributes count as 0.
    #[serde(default)]
    pub attribute_points: BTreeMap<Attribute, i64>,
    /// Selected advantage ids.
    #[serde(default)]
    pub advantages: Vec<String>,
    /// Selected disadvantage ids.
    #[serde(default)]
    pub disadvantages: Vec<String>,
}

impl BuildSubmission {
    /// Parse a submission from JSON.
    pub fn from_json(json: &str) -> crate::CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Raw points for one attribute, 0 when absent.
    pub fn points(&self, attribute: Attribute) -> i64 {
        self.attribute_points.get(&attribute).copied().unwrap_or(0)
    }
}

/// Final score for one attribute after points and racial modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedAttribute {
    /// Which attribute.
    pub attribute: Attribute,
    /// Points allocated by the player.
    pub points: u32,
    /// Sum of racial bonus and penalty.
    pub racial: i32,
    /// Base score plus points plus racial modifier.
    pub total: i32,
}

/// A legal, submitted character ready for the character store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    /// Character name.
    pub name: String,
    /// Race id.
    pub race: String,
    /// Class id.
    pub character_class: String,
    /// Free-text personal history.
    pub background: String,
    /// The six derived attributes in canonical order.
    pub attributes: Vec<DerivedAttribute>,
    /// Selected advantage ids, sorted.
    pub advantages: Vec<String>,
    /// Selected disadvantage ids, sorted.
    pub disadvantages: Vec<String>,
}

impl CharacterSnapshot {
    /// Final score for one attribute.
    pub fn attribute(&self, attribute: Attribute) -> Option<i32> {
        self.attributes
            .iter()
            .find(|d| d.attribute == attribute)
            .map(|d| d.total)
    }
}
