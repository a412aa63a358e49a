//! Error types for the mechanics engine.

use crate::build::{AllocationRejection, BuildInvalid};
use crate::dice::NotationError;

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// An attribute delta would breach the per-attribute bounds or the
    /// point budget. The attribute set is unchanged.
    #[error("allocation rejected: {0}")]
    AllocationRejected(AllocationRejection),

    /// Submission was attempted while the build still violates rules.
    #[error("{0}")]
    BuildInvalid(BuildInvalid),

    /// Dice notation could not be parsed.
    #[error("invalid dice notation: {0}")]
    Notation(#[from] NotationError),

    /// The session has been submitted and no longer accepts changes.
    #[error("build session already submitted")]
    SessionSubmitted,

    /// A reference-data or document error from the core crate.
    #[error(transparent)]
    Core(#[from] tav_core::CoreError),
}

impl From<AllocationRejection> for MechError {
    fn from(rejection: AllocationRejection) -> Self {
        Self::AllocationRejected(rejection)
    }
}

impl From<BuildInvalid> for MechError {
    fn from(invalid: BuildInvalid) -> Self {
        Self::BuildInvalid(invalid)
    }
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
