//! Scoring engine: turns a loadout plus one factor into a scalar score.
//!
//! The score is a product over the factor's stats of the loadout-wide summed
//! value, hardcap-clamped, normalized to the 100% baseline and raised to the
//! factor's per-stat exponent. Deterministic and side-effect free.

use super::factor::{CapStats, Factor};
use crate::catalog::{Catalog, SlotKind, StatBlock};
use crate::constants::{MULTIPLICATIVE_BASELINE, OFFHAND_INDEX, OFFHAND_SCALE_DIVISOR};
use crate::loadout::Loadout;

/// Score `loadout` against `factor`.
///
/// `offhand_efficiency` is a percentage; the off-hand weapon position
/// contributes that fraction of its stats. `extras` are additional stat
/// blocks (synthetic cube/base bonuses) summed like items without off-hand
/// scaling. An empty factor scores 1.
pub fn score(
    catalog: &Catalog,
    loadout: &Loadout,
    factor: &Factor,
    offhand_efficiency: f64,
    caps: &CapStats,
    extras: &[&StatBlock],
) -> f64 {
    let mut composite = 1.0;

    for (index, &stat) in factor.stats.iter().enumerate() {
        let mut sum = stat.baseline();

        for (kind, position, id) in loadout.positions() {
            let Some(id) = id else { continue };
            let Some(item) = catalog.get(id) else { continue };
            let Some(value) = item.stats.get(stat) else {
                continue;
            };
            if value.is_nan() {
                continue;
            }
            let scale = if kind == SlotKind::Weapon && position == OFFHAND_INDEX {
                offhand_efficiency / OFFHAND_SCALE_DIVISOR
            } else {
                1.0
            };
            sum += value * scale;
        }

        for block in extras {
            if let Some(value) = block.get(stat) {
                if !value.is_nan() {
                    sum += value;
                }
            }
        }

        // Hardcap: never clamps below the 100% baseline.
        if let Some(cap) = caps.cap(stat) {
            let limit = MULTIPLICATIVE_BASELINE * (cap / caps.nude(stat).max(1.0)).max(1.0);
            sum = sum.min(limit);
        }

        composite *= (sum / MULTIPLICATIVE_BASELINE).powf(factor.exponent(index));
    }

    composite
}

/// Marginal score of a single item against a factor: the score a loadout
/// containing only this item would earn, caps aside. Each stat keeps its
/// real baseline, so an item missing an additive factor stat ranks at zero
/// exactly as the loadout score would have it. Used to order candidates
/// within a slot.
pub fn marginal_score(stats: &StatBlock, factor: &Factor) -> f64 {
    let mut composite = 1.0;
    for (index, &stat) in factor.stats.iter().enumerate() {
        let value = match stats.get(stat) {
            Some(v) if !v.is_nan() => v,
            _ => 0.0,
        };
        composite *= ((stat.baseline() + value) / MULTIPLICATIVE_BASELINE)
            .powf(factor.exponent(index));
    }
    composite
}
