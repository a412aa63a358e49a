//! The advantage/disadvantage point economy.
//!
//! Disadvantages grant points, advantages spend them. A build is legal
//! when the balance is not negative. The catalog is authoritative for
//! costs; ids it does not know contribute nothing.

use std::collections::BTreeSet;

use tav_core::CatalogState;

use super::known;

/// Flip membership of `id`: add it if absent, remove it if present.
///
/// Returns the new set; the input is not modified.
pub fn toggle(selection: &BTreeSet<String>, id: &str) -> BTreeSet<String> {
    let mut next = selection.clone();
    if !next.remove(id) {
        next.insert(id.to_string());
    }
    next
}

/// Total cost of the selected advantages.
pub fn advantage_cost<'a>(
    ids: impl IntoIterator<Item = &'a String>,
    catalog: &CatalogState,
) -> u64 {
    ids.into_iter()
        .filter_map(|id| known(catalog.advantage(id)))
        .map(|a| u64::from(a.cost))
        .sum()
}

/// Total points granted by the selected disadvantages.
pub fn disadvantage_points<'a>(
    ids: impl IntoIterator<Item = &'a String>,
    catalog: &CatalogState,
) -> u64 {
    ids.into_iter()
        .filter_map(|id| known(catalog.disadvantage(id)))
        .map(|d| u64::from(d.points))
        .sum()
}

/// `Σ disadvantage points − Σ advantage cost`.
pub fn balance(
    advantages: &BTreeSet<String>,
    disadvantages: &BTreeSet<String>,
    catalog: &CatalogState,
) -> i64 {
    let granted = disadvantage_points(disadvantages, catalog);
    let spent = advantage_cost(advantages, catalog);
    // Trait costs are u32; realistic selections stay far inside i64.
    granted as i64 - spent as i64
}
