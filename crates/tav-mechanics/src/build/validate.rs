//! Legality verdicts for a build session.
//!
//! A verdict is recomputed from scratch every time it is asked for. Nothing
//! about legality is cached on the session, so any mutation is reflected
//! in the next verdict.

use serde::Serialize;
use tav_core::{ATTRIBUTE_CAP, Attribute, CatalogState, DerivedAttribute, POINT_BUDGET};
use thiserror::Error;

use super::BuildSession;

/// A single reason a build cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Part of the point budget is still unspent.
    #[error("{remaining} attribute points left to allocate")]
    UnallocatedPoints {
        /// Unspent points.
        remaining: u32,
    },
    /// Raw attribute points add up to more than the budget.
    #[error("attribute points exceed the budget of {POINT_BUDGET} by {excess}")]
    OverBudget {
        /// Points above the budget.
        excess: u64,
    },
    /// A raw attribute value lies outside `0..=ATTRIBUTE_CAP`.
    #[error("{attribute} has {points} points, must be between 0 and {ATTRIBUTE_CAP}")]
    AttributeOutOfRange {
        /// The offending attribute.
        attribute: Attribute,
        /// The submitted value.
        points: i64,
    },
    /// Advantages cost more than disadvantages grant.
    #[error("advantages cost {} more points than disadvantages grant", .balance.unsigned_abs())]
    NegativeBalance {
        /// The (negative) balance.
        balance: i64,
    },
    /// The name is empty or only whitespace.
    #[error("character name is required")]
    MissingName,
    /// No race has been selected.
    #[error("no race selected")]
    MissingRace,
    /// No class has been selected.
    #[error("no class selected")]
    MissingClass,
}

/// Submission was refused; every violation found is listed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("build is invalid: {}", join(.violations))]
pub struct BuildInvalid {
    /// All violations, in check order.
    pub violations: Vec<Violation>,
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Where a build stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildState {
    /// At least one rule is violated.
    Draft,
    /// Every rule holds; the build may be submitted.
    Valid,
    /// The build has been submitted and is frozen.
    Submitted,
}

impl std::fmt::Display for BuildState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Valid => write!(f, "valid"),
            Self::Submitted => write!(f, "submitted"),
        }
    }
}

/// Everything a client needs to render the current build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildVerdict {
    /// Current state.
    pub state: BuildState,
    /// Unspent attribute points.
    pub remaining: u32,
    /// Disadvantage points minus advantage cost.
    pub balance: i64,
    /// The six derived attributes in canonical order.
    pub attributes: Vec<DerivedAttribute>,
    /// Rules the build currently breaks. Empty unless the state is draft.
    pub violations: Vec<Violation>,
}

impl BuildVerdict {
    /// Whether the build may be submitted right now.
    pub fn is_valid(&self) -> bool {
        self.state == BuildState::Valid
    }
}

/// Compute the verdict for a session against the catalog.
pub fn verdict(session: &BuildSession, catalog: &CatalogState) -> BuildVerdict {
    let remaining = session.remaining();
    let balance = session.balance(catalog);
    let violations = if session.is_submitted() {
        Vec::new()
    } else {
        collect_violations(session, remaining, balance)
    };
    let state = if session.is_submitted() {
        BuildState::Submitted
    } else if violations.is_empty() {
        BuildState::Valid
    } else {
        BuildState::Draft
    };

    BuildVerdict {
        state,
        remaining,
        balance,
        attributes: session.derived(catalog),
        violations,
    }
}

fn collect_violations(session: &BuildSession, remaining: u32, balance: i64) -> Vec<Violation> {
    let mut out = Vec::new();
    if remaining > 0 {
        out.push(Violation::UnallocatedPoints { remaining });
    }
    if balance < 0 {
        out.push(Violation::NegativeBalance { balance });
    }
    if session.name().trim().is_empty() {
        out.push(Violation::MissingName);
    }
    if session.race().is_none() {
        out.push(Violation::MissingRace);
    }
    if session.class().is_none() {
        out.push(Violation::MissingClass);
    }
    out
}
