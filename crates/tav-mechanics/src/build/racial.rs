//! Final attribute scores: base + allocated points + racial modifiers.

use tav_core::{Attribute, BASE_SCORE, DerivedAttribute, RaceDefinition};

use super::attributes::AttributeSet;

/// Final score of one attribute. With no race, racial terms are 0.
pub fn resolve(set: &AttributeSet, race: Option<&RaceDefinition>, attribute: Attribute) -> i32 {
    derive(set, race, attribute).total
}

/// Full breakdown of one attribute's score.
pub fn derive(
    set: &AttributeSet,
    race: Option<&RaceDefinition>,
    attribute: Attribute,
) -> DerivedAttribute {
    let points = set.get(attribute);
    let racial = race.map(|r| r.modifier(attribute)).unwrap_or(0);
    DerivedAttribute {
        attribute,
        points,
        racial,
        // Points are capped at ATTRIBUTE_CAP, far inside i32.
        total: BASE_SCORE.saturating_add(points as i32).saturating_add(racial),
    }
}

/// All six derived attributes in canonical order.
pub fn resolve_all(set: &AttributeSet, race: Option<&RaceDefinition>) -> Vec<DerivedAttribute> {
    Attribute::ALL
        .into_iter()
        .map(|a| derive(set, race, a))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elf() -> RaceDefinition {
        RaceDefinition::new("elf", "Elf").with_bonus(Attribute::Dexterity, 2)
    }

    #[test]
    fn elf_on_empty_set() {
        let set = AttributeSet::new();
        let race = elf();
        assert_eq!(resolve(&set, Some(&race), Attribute::Dexterity), 12);
        for attr in Attribute::ALL {
            if attr != Attribute::Dexterity {
                assert_eq!(resolve(&set, Some(&race), attr), 10);
            }
        }
    }

    #[test]
    fn no_race_means_no_modifier() {
        let set = AttributeSet::new().allocate(Attribute::Strength, 5).unwrap();
        assert_eq!(resolve(&set, None, Attribute::Strength), 15);
        assert_eq!(resolve(&set, None, Attribute::Wisdom), 10);
    }

    #[test]
    fn bonus_and_penalty_stack_with_points() {
        let race = RaceDefinition::new("half-orc", "Half-Orc")
            .with_bonus(Attribute::Strength, 2)
            .with_penalty(Attribute::Strength, -1)
            .with_penalty(Attribute::Intelligence, -2);
        let set = AttributeSet::new()
            .allocate(Attribute::Strength, 4)
            .unwrap();
        let derived = derive(&set, Some(&race), Attribute::Strength);
        assert_eq!(derived.points, 4);
        assert_eq!(derived.racial, 1);
        assert_eq!(derived.total, 15);
        assert_eq!(resolve(&set, Some(&race), Attribute::Intelligence), 8);
    }

    #[test]
    fn extreme_racial_modifier_saturates() {
        let giant = RaceDefinition::new("giant", "Giant").with_bonus(Attribute::Strength, i32::MAX);
        let wraith = RaceDefinition::new("wraith", "Wraith").with_penalty(Attribute::Wisdom, i32::MIN);
        let set = AttributeSet::new().allocate(Attribute::Strength, 8).unwrap();
        assert_eq!(resolve(&set, Some(&giant), Attribute::Strength), i32::MAX);
        assert_eq!(resolve(&set, Some(&wraith), Attribute::Wisdom), i32::MIN + 10);
    }

    #[test]
    fn resolve_all_is_canonical_order() {
        let all = resolve_all(&AttributeSet::new(), Some(&elf()));
        let order: Vec<Attribute> = all.iter().map(|d| d.attribute).collect();
        assert_eq!(order, Attribute::ALL.to_vec());
        assert_eq!(all[1].total, 12);
    }
}
