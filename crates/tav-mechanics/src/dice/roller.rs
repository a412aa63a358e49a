//! A dice roller that owns its random source and history.

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::DiceSpec;
use super::history::{HistoryEntry, RollHistory};
use super::notation::parse;
use super::roll::{RollResult, evaluate};
use crate::error::MechResult;

/// Configuration for a [`DiceRoller`].
#[derive(Debug, Clone, Default)]
pub struct RollerConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl RollerConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Parses, evaluates, and records roll requests.
#[derive(Debug)]
pub struct DiceRoller {
    rng: StdRng,
    history: RollHistory,
}

impl DiceRoller {
    /// Create a roller from a configuration.
    pub fn new(config: RollerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            history: RollHistory::new(),
        }
    }

    /// Parse `notation`, roll it, and record the result.
    ///
    /// Malformed notation fails before anything is rolled or recorded.
    pub fn roll(&mut self, notation: &str, description: Option<&str>) -> MechResult<&HistoryEntry> {
        let spec = parse(notation)?;
        Ok(self.roll_spec(&spec, description))
    }

    /// Roll an already parsed spec and record the result.
    pub fn roll_spec(&mut self, spec: &DiceSpec, description: Option<&str>) -> &HistoryEntry {
        let mut result: RollResult = evaluate(spec, &mut self.rng);
        result.description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        self.history.push(result)
    }

    /// Recent rolls, newest first.
    pub fn history(&self) -> &RollHistory {
        &self.history
    }

    /// Forget all recorded rolls.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
