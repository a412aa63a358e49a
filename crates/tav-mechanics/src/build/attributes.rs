//! Point-buy allocation of attribute points.
//!
//! Every character spends exactly [`POINT_BUDGET`] points across the six
//! attributes, at most [`ATTRIBUTE_CAP`] on any one of them.

use serde::Serialize;
use tav_core::{ATTRIBUTE_CAP, Attribute, POINT_BUDGET};
use thiserror::Error;

/// Why an allocation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocationRejection {
    /// The attribute would drop below zero.
    #[error("{attribute} cannot go below 0 (would be {value})")]
    BelowZero {
        /// The attribute being changed.
        attribute: Attribute,
        /// The value it would have had.
        value: i64,
    },
    /// The attribute would exceed the per-attribute cap.
    #[error("{attribute} cannot exceed {ATTRIBUTE_CAP} (would be {value})")]
    AboveCap {
        /// The attribute being changed.
        attribute: Attribute,
        /// The value it would have had.
        value: i64,
    },
    /// Not enough unspent points for the increase.
    #[error("only {remaining} points remaining, cannot spend {requested}")]
    BudgetExhausted {
        /// Points still unspent.
        remaining: u32,
        /// Points the increase asked for.
        requested: i64,
    },
}

/// Points allocated to each attribute.
///
/// Only constructible empty or through [`AttributeSet::allocate`], so every
/// value stays within `0..=ATTRIBUTE_CAP` and the sum within the budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct AttributeSet {
    points: [u32; 6],
}

impl AttributeSet {
    /// A set with no points allocated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Points allocated to one attribute.
    pub fn get(&self, attribute: Attribute) -> u32 {
        self.points[attribute.index()]
    }

    /// Total points allocated.
    pub fn spent(&self) -> u32 {
        self.points.iter().sum()
    }

    /// Points still available: `POINT_BUDGET - spent`.
    pub fn remaining(&self) -> u32 {
        POINT_BUDGET.saturating_sub(self.spent())
    }

    /// Whether the whole budget has been spent.
    pub fn is_fully_allocated(&self) -> bool {
        self.remaining() == 0
    }

    /// `(attribute, points)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u32)> + '_ {
        Attribute::ALL.into_iter().map(|a| (a, self.get(a)))
    }

    /// Apply `delta` to one attribute and return the new set.
    ///
    /// Decreases are allowed down to 0. Increases are refused once the
    /// attribute would pass the cap or the total would pass the budget.
    /// The receiver is never modified.
    pub fn allocate(&self, attribute: Attribute, delta: i32) -> Result<Self, AllocationRejection> {
        let value = i64::from(self.get(attribute)) + i64::from(delta);
        if value < 0 {
            return Err(AllocationRejection::BelowZero { attribute, value });
        }
        if value > i64::from(ATTRIBUTE_CAP) {
            return Err(AllocationRejection::AboveCap { attribute, value });
        }
        let remaining = self.remaining();
        if delta > 0 && i64::from(delta) > i64::from(remaining) {
            return Err(AllocationRejection::BudgetExhausted {
                remaining,
                requested: i64::from(delta),
            });
        }

        let mut next = *self;
        // Bounded by the cap check above.
        next.points[attribute.index()] = value as u32;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fill(set: AttributeSet, attribute: Attribute, points: i32) -> AttributeSet {
        set.allocate(attribute, points).unwrap()
    }

    #[test]
    fn empty_set_has_full_budget() {
        let set = AttributeSet::new();
        assert_eq!(set.spent(), 0);
        assert_eq!(set.remaining(), 27);
        assert!(!set.is_fully_allocated());
    }

    #[test]
    fn allocate_changes_only_target() {
        let set = AttributeSet::new();
        let next = set.allocate(Attribute::Wisdom, 3).unwrap();
        assert_eq!(next.get(Attribute::Wisdom), 3);
        for attr in Attribute::ALL {
            if attr != Attribute::Wisdom {
                assert_eq!(next.get(attr), 0);
            }
        }
        // Original untouched.
        assert_eq!(set.get(Attribute::Wisdom), 0);
    }

    #[test]
    fn rejects_below_zero() {
        let set = AttributeSet::new();
        assert_eq!(
            set.allocate(Attribute::Strength, -1),
            Err(AllocationRejection::BelowZero {
                attribute: Attribute::Strength,
                value: -1
            })
        );
    }

    #[test]
    fn rejects_above_cap() {
        let set = fill(AttributeSet::new(), Attribute::Strength, 8);
        assert!(matches!(
            set.allocate(Attribute::Strength, 1),
            Err(AllocationRejection::AboveCap { .. })
        ));
    }

    #[test]
    fn rejects_increase_when_budget_spent() {
        let mut set = AttributeSet::new();
        set = fill(set, Attribute::Strength, 8);
        set = fill(set, Attribute::Dexterity, 8);
        set = fill(set, Attribute::Constitution, 8);
        set = fill(set, Attribute::Intelligence, 3);
        assert!(set.is_fully_allocated());
        assert!(matches!(
            set.allocate(Attribute::Wisdom, 1),
            Err(AllocationRejection::BudgetExhausted { remaining: 0, .. })
        ));
    }

    #[test]
    fn rejects_increase_past_budget() {
        let mut set = AttributeSet::new();
        set = fill(set, Attribute::Strength, 8);
        set = fill(set, Attribute::Dexterity, 8);
        set = fill(set, Attribute::Constitution, 8);
        assert_eq!(set.remaining(), 3);
        assert!(matches!(
            set.allocate(Attribute::Wisdom, 4),
            Err(AllocationRejection::BudgetExhausted { remaining: 3, .. })
        ));
    }

    #[test]
    fn decrease_allowed_when_budget_spent() {
        let mut set = AttributeSet::new();
        set = fill(set, Attribute::Strength, 8);
        set = fill(set, Attribute::Dexterity, 8);
        set = fill(set, Attribute::Constitution, 8);
        set = fill(set, Attribute::Intelligence, 3);
        let next = set.allocate(Attribute::Strength, -2).unwrap();
        assert_eq!(next.get(Attribute::Strength), 6);
        assert_eq!(next.remaining(), 2);
    }

    #[test]
    fn zero_delta_is_noop() {
        let set = fill(AttributeSet::new(), Attribute::Charisma, 5);
        assert_eq!(set.allocate(Attribute::Charisma, 0).unwrap(), set);
    }

    fn any_attribute() -> impl Strategy<Value = Attribute> {
        (0usize..6).prop_map(|i| Attribute::ALL[i])
    }

    proptest! {
        #[test]
        fn allocation_sequences_keep_invariants(
            steps in prop::collection::vec((any_attribute(), -10i32..=10), 0..200)
        ) {
            let mut set = AttributeSet::new();
            for (attr, delta) in steps {
                if let Ok(next) = set.allocate(attr, delta) {
                    set = next;
                }
                prop_assert!(set.spent() <= POINT_BUDGET);
                prop_assert_eq!(set.remaining() + set.spent(), POINT_BUDGET);
                for (_, points) in set.iter() {
                    prop_assert!(points <= ATTRIBUTE_CAP);
                }
            }
        }
    }
}
