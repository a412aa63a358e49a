//! Rules engine for Taverna.
//!
//! Two independent halves: the character build economy (point-buy
//! attributes, racial modifiers, the advantage/disadvantage ledger and
//! the build validator) and the dice engine (notation parsing, rolling,
//! classification and a bounded roll history). Everything here is a
//! synchronous function over explicit values; reference data comes in as
//! a [`tav_core::CatalogState`].

pub mod build;
pub mod dice;
pub mod error;

pub use build::{
    AllocationRejection, AttributeSet, BuildInvalid, BuildSession, BuildState, BuildVerdict,
    Violation, check_submission,
};
pub use dice::{
    DicePreset, DiceRoller, DiceSpec, DieResult, HistoryEntry, NotationError, PresetGroup,
    RandomSource, RollHistory, RollQuality, RollResponse, RollResult, RollerConfig,
};
pub use error::{MechError, MechResult};
