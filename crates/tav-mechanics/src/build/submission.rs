//! Checking a build submitted as a whole document.
//!
//! Raw attribute points are untrusted. Values that the allocator could
//! never have produced are reported as violations together with every
//! other rule the document breaks. A document that passes is replayed
//! through a fresh [`BuildSession`] and submitted.

use std::collections::BTreeSet;

use tav_core::{
    ATTRIBUTE_CAP, Attribute, BuildSubmission, CatalogState, CharacterSnapshot, POINT_BUDGET,
};

use super::BuildSession;
use super::validate::{BuildInvalid, Violation};
use crate::error::MechResult;

/// Validate a submission against the catalog and produce its snapshot.
///
/// Duplicate trait ids in the document count once.
pub fn check_submission(
    submission: &BuildSubmission,
    catalog: &CatalogState,
) -> MechResult<CharacterSnapshot> {
    let mut session = BuildSession::new();
    session.set_name(submission.name.as_str())?;
    session.set_background(submission.background.as_str())?;
    session.select_race(&submission.race)?;
    session.select_class(&submission.character_class)?;
    for id in unique(&submission.advantages) {
        session.toggle_advantage(id)?;
    }
    for id in unique(&submission.disadvantages) {
        session.toggle_disadvantage(id)?;
    }

    let raw = raw_point_violations(submission);
    if !raw.is_empty() {
        // Unspent-points reporting is meaningless when the points
        // themselves are illegal.
        let rest = session
            .verdict(catalog)
            .violations
            .into_iter()
            .filter(|v| !matches!(v, Violation::UnallocatedPoints { .. }));
        return Err(BuildInvalid {
            violations: raw.into_iter().chain(rest).collect(),
        }
        .into());
    }

    for attribute in Attribute::ALL {
        let points = submission.points(attribute);
        if points > 0 {
            // In range after the raw check.
            session.allocate(attribute, points as i32)?;
        }
    }
    session.submit(catalog)
}

fn unique(ids: &[String]) -> BTreeSet<&str> {
    ids.iter().map(|id| id.trim()).filter(|id| !id.is_empty()).collect()
}

fn raw_point_violations(submission: &BuildSubmission) -> Vec<Violation> {
    let mut out = Vec::new();
    let mut total: i64 = 0;
    for attribute in Attribute::ALL {
        let points = submission.points(attribute);
        if !(0..=i64::from(ATTRIBUTE_CAP)).contains(&points) {
            out.push(Violation::AttributeOutOfRange { attribute, points });
        } else {
            total += points;
        }
    }
    let budget = i64::from(POINT_BUDGET);
    if total > budget {
        out.push(Violation::OverBudget {
            excess: (total - budget).unsigned_abs(),
        });
    }
    out
}
