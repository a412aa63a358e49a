//! Dice evaluation and roll results.

use serde::{Deserialize, Serialize};

use super::DiceSpec;
use super::classify::RollQuality;
use super::source::RandomSource;

/// The result of rolling a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The value rolled (1 to `sides`).
    pub value: u32,
    /// Sides on the die.
    pub sides: u32,
}

impl DieResult {
    /// Display band for this single die.
    pub fn quality(&self) -> RollQuality {
        RollQuality::from_ratio(i64::from(self.value), i64::from(self.sides))
    }
}

/// The result of evaluating a [`DiceSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// The spec that was rolled.
    pub spec: DiceSpec,
    /// Individual die results in the order they were drawn.
    pub dice: Vec<DieResult>,
    /// Optional label, e.g. "Longsword damage".
    pub description: Option<String>,
}

impl RollResult {
    /// Sum of all die values.
    pub fn dice_total(&self) -> i64 {
        self.dice.iter().map(|d| i64::from(d.value)).sum()
    }

    /// Sum of all die values plus the modifier.
    pub fn total(&self) -> i64 {
        self.dice_total() + i64::from(self.spec.modifier())
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Display band for the whole roll: `total / (count * size)`.
    pub fn quality(&self) -> RollQuality {
        RollQuality::from_ratio(self.total(), self.spec.max_dice_total())
    }

    /// The individual values, in roll order.
    pub fn values(&self) -> Vec<u32> {
        self.dice.iter().map(|d| d.value).collect()
    }
}

/// `2d6+3: [4, 5] + 3 = 12`
impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "{}: [{}]", self.spec, values.join(", "))?;
        match self.spec.modifier() {
            0 => {}
            m if m > 0 => write!(f, " + {m}")?,
            m => write!(f, " - {}", i64::from(m).abs())?,
        }
        write!(f, " = {}", self.total())
    }
}

/// Roll `spec` against `source`.
///
/// Draws `count` faces in order, accepting every draw. The total is the sum
/// of the faces plus the modifier.
pub fn evaluate<S: RandomSource + ?Sized>(spec: &DiceSpec, source: &mut S) -> RollResult {
    let sides = spec.size();
    let dice: Vec<DieResult> = (0..spec.count())
        .map(|_| DieResult {
            value: source.roll_die(sides),
            sides,
        })
        .collect();

    let result = RollResult {
        spec: *spec,
        dice,
        description: None,
    };
    tracing::debug!(notation = %spec, total = result.total(), "evaluated roll");
    result
}

/// Wire shape of a roll result as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResponse {
    /// Canonical notation of the rolled spec.
    pub notation: String,
    /// Label, empty when none was given.
    pub description: String,
    /// Sum of faces plus modifier.
    pub total: i64,
    /// Flat modifier.
    pub modifier: i32,
    /// Per-die values and sides, in roll order.
    pub details: Vec<DieResult>,
    /// Highest face sum, the denominator of the quality band.
    pub max_possible: i64,
}

impl From<&RollResult> for RollResponse {
    fn from(result: &RollResult) -> Self {
        Self {
            notation: result.spec.to_string(),
            description: result.description.clone().unwrap_or_default(),
            total: result.total(),
            modifier: result.spec.modifier(),
            details: result.dice.clone(),
            max_possible: result.spec.max_dice_total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::source::FixedSequence;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fixed_sequence_two_d6_plus_three() {
        let spec = DiceSpec::new(2, 6, 3).unwrap();
        let mut src = FixedSequence::new([4, 5]);
        let result = evaluate(&spec, &mut src);
        assert_eq!(
            result.dice,
            vec![
                DieResult { value: 4, sides: 6 },
                DieResult { value: 5, sides: 6 },
            ]
        );
        assert_eq!(result.total(), 12);
        assert_eq!(result.dice_total(), 9);
    }

    #[test]
    fn negative_modifier_can_go_below_zero() {
        let spec = DiceSpec::new(1, 4, -5).unwrap();
        let result = evaluate(&spec, &mut FixedSequence::new([1]));
        assert_eq!(result.total(), -4);
        assert_eq!(result.quality(), RollQuality::Poor);
    }

    #[test]
    fn preserves_draw_order() {
        let spec = DiceSpec::new(4, 6, 0).unwrap();
        let result = evaluate(&spec, &mut FixedSequence::new([6, 1, 3, 2]));
        assert_eq!(result.values(), vec![6, 1, 3, 2]);
    }

    #[test]
    fn rng_rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let spec = DiceSpec::new(10, 8, 0).unwrap();
        let result = evaluate(&spec, &mut rng);
        assert_eq!(result.dice.len(), 10);
        assert!(result.dice.iter().all(|d| (1..=8).contains(&d.value)));
        assert!(result.total() >= spec.min_total() && result.total() <= spec.max_total());
    }

    #[test]
    fn display() {
        let spec = DiceSpec::new(2, 6, 3).unwrap();
        let result = evaluate(&spec, &mut FixedSequence::new([4, 5]));
        assert_eq!(result.to_string(), "2d6+3: [4, 5] + 3 = 12");

        let spec = DiceSpec::new(1, 20, -2).unwrap();
        let result = evaluate(&spec, &mut FixedSequence::new([11]));
        assert_eq!(result.to_string(), "1d20-2: [11] - 2 = 9");
    }

    #[test]
    fn response_shape() {
        let spec = DiceSpec::new(2, 6, 3).unwrap();
        let result = evaluate(&spec, &mut FixedSequence::new([4, 5])).with_description("Test");
        let response = RollResponse::from(&result);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["notation"], "2d6+3");
        assert_eq!(json["description"], "Test");
        assert_eq!(json["total"], 12);
        assert_eq!(json["modifier"], 3);
        assert_eq!(json["max_possible"], 12);
        assert_eq!(json["details"][0]["value"], 4);
        assert_eq!(json["details"][1]["sides"], 6);
    }
}
