//! Pareto-dominance filtering over per-stat item contributions.

use crate::catalog::{Catalog, ItemId, Stat};

/// Per-stat contribution vector for one item. Missing stats contribute 0;
/// NaN is treated as 0 so comparisons stay total.
fn contributions(catalog: &Catalog, id: ItemId, stats: &[Stat]) -> Vec<f64> {
    stats
        .iter()
        .map(|&stat| {
            catalog
                .get(id)
                .and_then(|item| item.stats.get(stat))
                .filter(|v| !v.is_nan())
                .unwrap_or(0.0)
        })
        .collect()
}

/// True iff `a` is >= `b` on every stat and strictly greater on at least one.
fn dominates(a: &[f64], b: &[f64]) -> bool {
    let mut strictly_greater = false;
    for (&x, &y) in a.iter().zip(b) {
        if x < y {
            return false;
        }
        if x > y {
            strictly_greater = true;
        }
    }
    strictly_greater
}

/// Returns the non-dominated subset of `ids` under the given stat vector,
/// in id order, truncated to at most `cutoff` items.
///
/// Order is stable and reproducible: ties and incomparable items keep their
/// catalog-id ordering.
pub fn pareto_filter(catalog: &Catalog, ids: &[ItemId], stats: &[Stat], cutoff: usize) -> Vec<ItemId> {
    let mut sorted: Vec<ItemId> = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let vectors: Vec<Vec<f64>> = sorted
        .iter()
        .map(|&id| contributions(catalog, id, stats))
        .collect();

    let mut frontier: Vec<ItemId> = Vec::new();
    for (i, &id) in sorted.iter().enumerate() {
        if frontier.len() >= cutoff {
            break;
        }
        let dominated = vectors
            .iter()
            .enumerate()
            .any(|(j, other)| j != i && dominates(other, &vectors[i]));
        if !dominated {
            frontier.push(id);
        }
    }
    frontier
}
