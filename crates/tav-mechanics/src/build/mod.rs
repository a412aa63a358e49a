//! Character build economy.
//!
//! A [`BuildSession`] collects a player's choices while they create a
//! character: attribute points, race, class, advantages and
//! disadvantages, name and background. Every mutation goes through the
//! point-buy allocator or the trait ledger and never leaves a partial
//! update behind. Legality is not stored; [`BuildSession::verdict`]
//! recomputes it against the reference catalog on every call.

pub mod attributes;
pub mod ledger;
pub mod racial;
pub mod submission;
pub mod validate;

use std::collections::BTreeSet;

use serde::Serialize;
use tav_core::{
    Attribute, CatalogState, CharacterSnapshot, CoreResult, DerivedAttribute, RaceDefinition,
};

use crate::error::{MechError, MechResult};

pub use attributes::{AllocationRejection, AttributeSet};
pub use submission::check_submission;
pub use validate::{BuildInvalid, BuildState, BuildVerdict, Violation};

/// The single lookup path for catalog references: unknown ids are logged
/// and read as absent.
fn known<T>(lookup: CoreResult<T>) -> Option<T> {
    match lookup {
        Ok(found) => Some(found),
        Err(e) => {
            tracing::warn!("{e}");
            None
        }
    }
}

/// A character under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildSession {
    attributes: AttributeSet,
    race: Option<String>,
    class: Option<String>,
    advantages: BTreeSet<String>,
    disadvantages: BTreeSet<String>,
    name: String,
    background: String,
    submitted: bool,
}

impl BuildSession {
    /// An empty session: no points spent, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_open(&self) -> MechResult<()> {
        if self.submitted {
            return Err(MechError::SessionSubmitted);
        }
        Ok(())
    }

    /// Change one attribute by `delta` points.
    pub fn allocate(&mut self, attribute: Attribute, delta: i32) -> MechResult<()> {
        self.ensure_open()?;
        match self.attributes.allocate(attribute, delta) {
            Ok(next) => {
                self.attributes = next;
                Ok(())
            }
            Err(rejection) => {
                tracing::debug!(%attribute, delta, "allocation rejected: {rejection}");
                Err(rejection.into())
            }
        }
    }

    /// Set the character name.
    pub fn set_name(&mut self, name: impl Into<String>) -> MechResult<()> {
        self.ensure_open()?;
        self.name = name.into();
        Ok(())
    }

    /// Set the free-text background.
    pub fn set_background(&mut self, background: impl Into<String>) -> MechResult<()> {
        self.ensure_open()?;
        self.background = background.into();
        Ok(())
    }

    /// Select a race by id. A blank id clears the selection.
    pub fn select_race(&mut self, id: &str) -> MechResult<()> {
        self.ensure_open()?;
        self.race = selection(id);
        Ok(())
    }

    /// Select a class by id. A blank id clears the selection.
    pub fn select_class(&mut self, id: &str) -> MechResult<()> {
        self.ensure_open()?;
        self.class = selection(id);
        Ok(())
    }

    /// Add the advantage if absent, remove it if present.
    pub fn toggle_advantage(&mut self, id: &str) -> MechResult<()> {
        self.ensure_open()?;
        self.advantages = ledger::toggle(&self.advantages, id);
        Ok(())
    }

    /// Add the disadvantage if absent, remove it if present.
    pub fn toggle_disadvantage(&mut self, id: &str) -> MechResult<()> {
        self.ensure_open()?;
        self.disadvantages = ledger::toggle(&self.disadvantages, id);
        Ok(())
    }

    /// Allocated attribute points.
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// Selected race id.
    pub fn race(&self) -> Option<&str> {
        self.race.as_deref()
    }

    /// Selected class id.
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Selected advantage ids.
    pub fn advantages(&self) -> &BTreeSet<String> {
        &self.advantages
    }

    /// Selected disadvantage ids.
    pub fn disadvantages(&self) -> &BTreeSet<String> {
        &self.disadvantages
    }

    /// Character name as entered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Background as entered.
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Whether the session has been submitted.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Unspent attribute points.
    pub fn remaining(&self) -> u32 {
        self.attributes.remaining()
    }

    /// Disadvantage points minus advantage cost.
    pub fn balance(&self, catalog: &CatalogState) -> i64 {
        ledger::balance(&self.advantages, &self.disadvantages, catalog)
    }

    fn race_definition<'c>(&self, catalog: &'c CatalogState) -> Option<&'c RaceDefinition> {
        self.race.as_deref().and_then(|id| known(catalog.race(id)))
    }

    /// Final attribute scores with the selected race's modifiers.
    pub fn derived(&self, catalog: &CatalogState) -> Vec<DerivedAttribute> {
        racial::resolve_all(&self.attributes, self.race_definition(catalog))
    }

    /// Final score of one attribute.
    pub fn score(&self, attribute: Attribute, catalog: &CatalogState) -> i32 {
        racial::resolve(&self.attributes, self.race_definition(catalog), attribute)
    }

    /// Fresh legality verdict.
    pub fn verdict(&self, catalog: &CatalogState) -> BuildVerdict {
        validate::verdict(self, catalog)
    }

    /// Current state, derived from the verdict.
    pub fn state(&self, catalog: &CatalogState) -> BuildState {
        self.verdict(catalog).state
    }

    /// Freeze the session and produce the character snapshot.
    ///
    /// Fails with every violation when the build is not valid; the session
    /// is left untouched in that case.
    pub fn submit(&mut self, catalog: &CatalogState) -> MechResult<CharacterSnapshot> {
        self.ensure_open()?;
        let verdict = self.verdict(catalog);
        if !verdict.is_valid() {
            tracing::debug!(
                violations = verdict.violations.len(),
                "submission refused"
            );
            return Err(BuildInvalid {
                violations: verdict.violations,
            }
            .into());
        }

        self.submitted = true;
        let snapshot = CharacterSnapshot {
            name: self.name.trim().to_string(),
            race: self.race.clone().unwrap_or_default(),
            character_class: self.class.clone().unwrap_or_default(),
            background: self.background.clone(),
            attributes: verdict.attributes,
            advantages: self.advantages.iter().cloned().collect(),
            disadvantages: self.disadvantages.iter().cloned().collect(),
        };
        tracing::info!(
            name = %snapshot.name,
            race = %snapshot.race,
            class = %snapshot.character_class,
            "character submitted"
        );
        Ok(snapshot)
    }
}

fn selection(id: &str) -> Option<String> {
    let id = id.trim();
    (!id.is_empty()).then(|| id.to_string())
}
