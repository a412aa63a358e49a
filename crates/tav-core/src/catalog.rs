//! Typed registry of reference data: races, classes, advantages, and
//! disadvantages.
//!
//! The reference-data service publishes a loosely keyed JSON document. It is
//! read once into a [`ReferenceCatalog`] whose lookups either return a typed
//! record or [`CoreError::UnknownCatalogReference`]. Callers that must
//! tolerate stale ids map that error to a zero contribution in one place.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::error::{CoreError, CoreResult};

/// Which registry an id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// A playable race.
    Race,
    /// A character class.
    Class,
    /// A purchasable advantage.
    Advantage,
    /// A disadvantage that grants points.
    Disadvantage,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Race => write!(f, "race"),
            Self::Class => write!(f, "class"),
            Self::Advantage => write!(f, "advantage"),
            Self::Disadvantage => write!(f, "disadvantage"),
        }
    }
}

/// A playable race and the attribute modifiers it applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceDefinition {
    /// Registry key. Filled from the document key when omitted.
    #[serde(default)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// Signed modifiers added to the listed attributes.
    #[serde(default)]
    pub bonuses: BTreeMap<Attribute, i32>,
    /// Signed modifiers (usually negative) added to the listed attributes.
    #[serde(default)]
    pub penalties: BTreeMap<Attribute, i32>,
    /// Inherent racial advantages. Display only, never charged.
    #[serde(default, rename = "racial_advantages", alias = "advantages")]
    pub advantages: Vec<RacialTrait>,
    /// Inherent racial disadvantages. Display only, never credited.
    #[serde(default, rename = "racial_disadvantages", alias = "disadvantages")]
    pub disadvantages: Vec<RacialTrait>,
}

/// A trait every member of a race has. Shown with the race, never bought.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RacialTrait {
    /// Display name.
    pub name: String,
    /// Rules text.
    #[serde(default)]
    pub description: String,
}

impl RacialTrait {
    /// Create a racial trait.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl RaceDefinition {
    /// Create a race with no modifiers.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a bonus to an attribute.
    pub fn with_bonus(mut self, attribute: Attribute, value: i32) -> Self {
        self.bonuses.insert(attribute, value);
        self
    }

    /// Add a penalty to an attribute. Pass the signed value (e.g. `-2`).
    pub fn with_penalty(mut self, attribute: Attribute, value: i32) -> Self {
        self.penalties.insert(attribute, value);
        self
    }

    /// Add a racial advantage.
    pub fn with_advantage(mut self, racial: RacialTrait) -> Self {
        self.advantages.push(racial);
        self
    }

    /// Add a racial disadvantage.
    pub fn with_disadvantage(mut self, racial: RacialTrait) -> Self {
        self.disadvantages.push(racial);
        self
    }

    /// Combined racial modifier for one attribute; missing keys count as 0.
    /// Saturates instead of overflowing.
    pub fn modifier(&self, attribute: Attribute) -> i32 {
        let bonus = self.bonuses.get(&attribute).copied().unwrap_or(0);
        let penalty = self.penalties.get(&attribute).copied().unwrap_or(0);
        bonus.saturating_add(penalty)
    }
}

/// Descriptive metadata for a character class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDefinition {
    /// Registry key. Filled from the document key when omitted.
    #[serde(default)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
}

impl ClassDefinition {
    /// Create a class record.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
        }
    }
}

/// An advantage that costs points from the advantage economy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advantage {
    /// Registry key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Rules text.
    #[serde(default)]
    pub description: String,
    /// Points spent when selected.
    pub cost: u32,
}

impl Advantage {
    /// Create an advantage record.
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            cost,
        }
    }
}

/// A disadvantage that grants points to the advantage economy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disadvantage {
    /// Registry key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Rules text.
    #[serde(default)]
    pub description: String,
    /// Points granted when selected.
    pub points: u32,
}

impl Disadvantage {
    /// Create a disadvantage record.
    pub fn new(id: impl Into<String>, name: impl Into<String>, points: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            points,
        }
    }
}

/// Wire shape of the reference-data document.
#[derive(Debug, Default, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    races: BTreeMap<String, RaceDefinition>,
    #[serde(default)]
    classes: BTreeMap<String, ClassDefinition>,
    #[serde(default)]
    advantages: Vec<Advantage>,
    #[serde(default)]
    disadvantages: Vec<Disadvantage>,
}

/// Loaded reference data, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    races: BTreeMap<String, RaceDefinition>,
    classes: BTreeMap<String, ClassDefinition>,
    advantages: BTreeMap<String, Advantage>,
    disadvantages: BTreeMap<String, Disadvantage>,
}

impl ReferenceCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a reference-data JSON document.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    fn from_document(doc: CatalogDocument) -> CoreResult<Self> {
        let mut catalog = Self::new();

        for (key, mut race) in doc.races {
            race.id = reconcile_id(ReferenceKind::Race, &key, race.id)?;
            catalog.races.insert(key, race);
        }
        for (key, mut class) in doc.classes {
            class.id = reconcile_id(ReferenceKind::Class, &key, class.id)?;
            catalog.classes.insert(key, class);
        }
        for adv in doc.advantages {
            require_id(ReferenceKind::Advantage, &adv.id)?;
            if catalog.advantages.contains_key(&adv.id) {
                return Err(duplicate(ReferenceKind::Advantage, &adv.id));
            }
            catalog.advantages.insert(adv.id.clone(), adv);
        }
        for dis in doc.disadvantages {
            require_id(ReferenceKind::Disadvantage, &dis.id)?;
            if catalog.disadvantages.contains_key(&dis.id) {
                return Err(duplicate(ReferenceKind::Disadvantage, &dis.id));
            }
            catalog.disadvantages.insert(dis.id.clone(), dis);
        }

        Ok(catalog)
    }

    /// Register a race, replacing any race with the same id.
    pub fn with_race(mut self, race: RaceDefinition) -> Self {
        self.races.insert(race.id.clone(), race);
        self
    }

    /// Register a class, replacing any class with the same id.
    pub fn with_class(mut self, class: ClassDefinition) -> Self {
        self.classes.insert(class.id.clone(), class);
        self
    }

    /// Register an advantage, replacing any advantage with the same id.
    pub fn with_advantage(mut self, advantage: Advantage) -> Self {
        self.advantages.insert(advantage.id.clone(), advantage);
        self
    }

    /// Register a disadvantage, replacing any disadvantage with the same id.
    pub fn with_disadvantage(mut self, disadvantage: Disadvantage) -> Self {
        self.disadvantages
            .insert(disadvantage.id.clone(), disadvantage);
        self
    }

    /// Look up a race by id.
    pub fn race(&self, id: &str) -> CoreResult<&RaceDefinition> {
        self.races.get(id).ok_or_else(|| unknown(ReferenceKind::Race, id))
    }

    /// Look up a class by id.
    pub fn class(&self, id: &str) -> CoreResult<&ClassDefinition> {
        self.classes
            .get(id)
            .ok_or_else(|| unknown(ReferenceKind::Class, id))
    }

    /// Look up an advantage by id.
    pub fn advantage(&self, id: &str) -> CoreResult<&Advantage> {
        self.advantages
            .get(id)
            .ok_or_else(|| unknown(ReferenceKind::Advantage, id))
    }

    /// Look up a disadvantage by id.
    pub fn disadvantage(&self, id: &str) -> CoreResult<&Disadvantage> {
        self.disadvantages
            .get(id)
            .ok_or_else(|| unknown(ReferenceKind::Disadvantage, id))
    }

    /// All races, ordered by id.
    pub fn races(&self) -> impl Iterator<Item = &RaceDefinition> {
        self.races.values()
    }

    /// All classes, ordered by id.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.classes.values()
    }

    /// All advantages, ordered by id.
    pub fn advantages(&self) -> impl Iterator<Item = &Advantage> {
        self.advantages.values()
    }

    /// All disadvantages, ordered by id.
    pub fn disadvantages(&self) -> impl Iterator<Item = &Disadvantage> {
        self.disadvantages.values()
    }
}

/// Reference data as seen by a build session: either still being fetched
/// or available.
///
/// A loading catalog answers every lookup with
/// [`CoreError::UnknownCatalogReference`], so bonuses and costs read as 0
/// until the data arrives.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    /// The reference data has not arrived yet.
    #[default]
    Loading,
    /// The reference data is available.
    Ready(ReferenceCatalog),
}

impl CatalogState {
    /// Returns true once the catalog has been loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The loaded catalog, if any.
    pub fn catalog(&self) -> Option<&ReferenceCatalog> {
        match self {
            Self::Ready(c) => Some(c),
            Self::Loading => None,
        }
    }

    /// Look up a race by id.
    pub fn race(&self, id: &str) -> CoreResult<&RaceDefinition> {
        self.catalog()
            .ok_or_else(|| unknown(ReferenceKind::Race, id))?
            .race(id)
    }

    /// Look up a class by id.
    pub fn class(&self, id: &str) -> CoreResult<&ClassDefinition> {
        self.catalog()
            .ok_or_else(|| unknown(ReferenceKind::Class, id))?
            .class(id)
    }

    /// Look up an advantage by id.
    pub fn advantage(&self, id: &str) -> CoreResult<&Advantage> {
        self.catalog()
            .ok_or_else(|| unknown(ReferenceKind::Advantage, id))?
            .advantage(id)
    }

    /// Look up a disadvantage by id.
    pub fn disadvantage(&self, id: &str) -> CoreResult<&Disadvantage> {
        self.catalog()
            .ok_or_else(|| unknown(ReferenceKind::Disadvantage, id))?
            .disadvantage(id)
    }
}

impl From<ReferenceCatalog> for CatalogState {
    fn from(catalog: ReferenceCatalog) -> Self {
        Self::Ready(catalog)
    }
}

fn unknown(kind: ReferenceKind, id: &str) -> CoreError {
    CoreError::UnknownCatalogReference {
        kind,
        id: id.to_string(),
    }
}

fn duplicate(kind: ReferenceKind, id: &str) -> CoreError {
    CoreError::InvalidCatalog(format!("duplicate {kind} id \"{id}\""))
}

fn require_id(kind: ReferenceKind, id: &str) -> CoreResult<()> {
    if id.trim().is_empty() {
        return Err(CoreError::InvalidCatalog(format!("{kind} with empty id")));
    }
    Ok(())
}

/// The document key is authoritative; an explicit id must agree with it.
fn reconcile_id(kind: ReferenceKind, key: &str, explicit: String) -> CoreResult<String> {
    require_id(kind, key)?;
    if !explicit.is_empty() && explicit != key {
        return Err(CoreError::InvalidCatalog(format!(
            "{kind} keyed \"{key}\" declares id \"{explicit}\""
        )));
    }
    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "races": {
            "elf": {
                "name": "Elf",
                "description": "Graceful and long-lived.",
                "bonuses": { "dexterity": 2 },
                "penalties": { "constitution": -1 },
                "racial_advantages": [
                    { "name": "Darkvision", "description": "See in the dark." }
                ],
                "racial_disadvantages": [
                    { "name": "Frail", "description": "Slow to recover." }
                ]
            },
            "human": { "name": "Human", "bonuses": { "strength": 1 } }
        },
        "classes": {
            "mage": { "name": "Mage", "description": "Wields arcane power." }
        },
        "advantages": [
            { "id": "lucky", "name": "Lucky", "description": "Reroll once.", "cost": 2 }
        ],
        "disadvantages": [
            { "id": "coward", "name": "Coward", "description": "Flees.", "points": 3 }
        ]
    }"#;

    #[test]
    fn from_json_builds_registry() {
        let catalog = ReferenceCatalog::from_json(SAMPLE).unwrap();
        let elf = catalog.race("elf").unwrap();
        assert_eq!(elf.id, "elf");
        assert_eq!(elf.name, "Elf");
        assert_eq!(elf.modifier(Attribute::Dexterity), 2);
        assert_eq!(elf.modifier(Attribute::Constitution), -1);
        assert_eq!(elf.modifier(Attribute::Wisdom), 0);
        assert_eq!(
            elf.advantages,
            vec![RacialTrait::new("Darkvision", "See in the dark.")]
        );
        assert_eq!(elf.disadvantages[0].name, "Frail");
        assert_eq!(catalog.class("mage").unwrap().name, "Mage");
        assert_eq!(catalog.advantage("lucky").unwrap().cost, 2);
        assert_eq!(catalog.disadvantage("coward").unwrap().points, 3);
        assert_eq!(catalog.races().count(), 2);
    }

    #[test]
    fn racial_traits_accept_short_keys() {
        let json = r#"{ "races": { "dwarf": {
            "name": "Dwarf",
            "advantages": [{ "name": "Stonecunning" }],
            "disadvantages": [{ "name": "Grudging", "description": "Never forgets." }]
        } } }"#;
        let catalog = ReferenceCatalog::from_json(json).unwrap();
        let dwarf = catalog.race("dwarf").unwrap();
        assert_eq!(dwarf.advantages, vec![RacialTrait::new("Stonecunning", "")]);
        assert_eq!(dwarf.disadvantages[0].description, "Never forgets.");

        // Written back under the reference-data keys.
        let value = serde_json::to_value(dwarf).unwrap();
        assert_eq!(value["racial_advantages"][0]["name"], "Stonecunning");
    }

    #[test]
    fn extreme_modifiers_saturate() {
        let json = r#"{ "races": { "giant": {
            "name": "Giant",
            "bonuses": { "strength": 2147483647 },
            "penalties": { "strength": 5, "wisdom": -2147483648 }
        } } }"#;
        let catalog = ReferenceCatalog::from_json(json).unwrap();
        let giant = catalog.race("giant").unwrap();
        assert_eq!(giant.modifier(Attribute::Strength), i32::MAX);
        assert_eq!(giant.modifier(Attribute::Wisdom), i32::MIN);
    }

    #[test]
    fn unknown_lookup_reports_kind_and_id() {
        let catalog = ReferenceCatalog::new();
        let err = catalog.advantage("ghost").unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownCatalogReference {
                kind: ReferenceKind::Advantage,
                ..
            }
        ));
        assert_eq!(err.to_string(), "unknown advantage reference: \"ghost\"");
    }

    #[test]
    fn unknown_attribute_key_is_rejected() {
        let json = r#"{ "races": { "orc": { "name": "Orc", "bonuses": { "luck": 1 } } } }"#;
        assert!(matches!(
            ReferenceCatalog::from_json(json),
            Err(CoreError::Json(_))
        ));
    }

    #[test]
    fn duplicate_advantage_is_rejected() {
        let json = r#"{ "advantages": [
            { "id": "a", "name": "A", "cost": 1 },
            { "id": "a", "name": "A again", "cost": 2 }
        ] }"#;
        let err = ReferenceCatalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate advantage id"));
    }

    #[test]
    fn mismatched_race_id_is_rejected() {
        let json = r#"{ "races": { "elf": { "id": "dwarf", "name": "Elf" } } }"#;
        assert!(matches!(
            ReferenceCatalog::from_json(json),
            Err(CoreError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn negative_cost_is_rejected() {
        let json = r#"{ "advantages": [ { "id": "a", "name": "A", "cost": -1 } ] }"#;
        assert!(ReferenceCatalog::from_json(json).is_err());
    }

    #[test]
    fn loading_state_knows_nothing() {
        let state = CatalogState::default();
        assert!(!state.is_loaded());
        assert!(state.race("elf").is_err());
        assert!(state.advantage("lucky").is_err());

        let ready: CatalogState = ReferenceCatalog::from_json(SAMPLE).unwrap().into();
        assert!(ready.is_loaded());
        assert!(ready.race("elf").is_ok());
    }

    #[test]
    fn builder_registers_records() {
        let catalog = ReferenceCatalog::new()
            .with_race(RaceDefinition::new("dwarf", "Dwarf").with_bonus(Attribute::Constitution, 2))
            .with_class(ClassDefinition::new("warrior", "Warrior"))
            .with_advantage(Advantage::new("tough", "Tough", 1))
            .with_disadvantage(Disadvantage::new("slow", "Slow", 2));
        assert_eq!(
            catalog.race("dwarf").unwrap().modifier(Attribute::Constitution),
            2
        );
        assert!(catalog.class("warrior").is_ok());
        assert_eq!(catalog.advantages().count(), 1);
        assert_eq!(catalog.disadvantages().count(), 1);
    }
}
