//! Speed modifier: the effective rate multiplier a dedicated loadout earns
//! over the currently equipped one, times any running potion boosts.

use crate::catalog::{Catalog, StatBlock};
use crate::constants::{BLUE_HEART_MULTIPLIER, POTION_TIERS, RESOURCE_FAMILIES};
use crate::loadout::Loadout;
use crate::optimizer::{score, CapStats, Factor};
use serde::{Deserialize, Serialize};

/// Consumption toggles for one potion line (family x tier).
///
/// `dedicated` boosts the speed ratio; `current` divides it back out, since
/// a potion consumed on the current loadout is already reflected in the
/// current score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionToggle {
    #[serde(default)]
    pub dedicated: bool,
    #[serde(default)]
    pub current: bool,
}

/// Speed modifier configuration from the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeedConfig {
    /// Master switch; when false the modifier is exactly 1.
    #[serde(default)]
    pub modifiers: bool,
    /// Index of the currently equipped saved loadout (clamped to >= 0).
    #[serde(default)]
    pub current_loadout: i64,
    /// Index of the dedicated saved loadout (clamped to >= 0).
    #[serde(default)]
    pub dedicated_loadout: i64,
    /// Blue-heart boost scales every active potion effect by 1.1.
    #[serde(default)]
    pub blue_heart: bool,
    /// Toggles per resource family and potion tier.
    #[serde(default)]
    pub potions: [[PotionToggle; POTION_TIERS]; RESOURCE_FAMILIES],
}

/// Known potion effect multipliers per resource family and tier. A missing
/// entry deactivates that line regardless of toggles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PotionEffects {
    #[serde(default)]
    values: [[Option<f64>; POTION_TIERS]; RESOURCE_FAMILIES],
}

impl PotionEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, family: usize, tier: usize, effect: f64) {
        self.values[family][tier] = Some(effect);
    }

    pub fn get(&self, family: usize, tier: usize) -> Option<f64> {
        self.values[family][tier]
    }
}

/// Effective rate multiplier for one track factor.
///
/// Pure function of its inputs and never negative. Returns exactly 1 when
/// modifiers are off, independent of every other argument. The cube and base
/// stat blocks are the two synthetic catalog additions of the scoring pass.
#[allow(clippy::too_many_arguments)]
pub fn speed(
    catalog: &Catalog,
    cfg: &SpeedConfig,
    saved: &[Loadout],
    cube_stats: &StatBlock,
    base_stats: &StatBlock,
    factor: &Factor,
    caps: &CapStats,
    offhand_efficiency: f64,
    effects: &PotionEffects,
    exponent: f64,
) -> f64 {
    if !cfg.modifiers {
        return 1.0;
    }

    let empty = Loadout::empty(0);
    let current = saved
        .get(cfg.current_loadout.max(0) as usize)
        .unwrap_or(&empty);
    let dedicated = saved
        .get(cfg.dedicated_loadout.max(0) as usize)
        .unwrap_or(&empty);

    let extras = [cube_stats, base_stats];
    let current_score = score(catalog, current, factor, offhand_efficiency, caps, &extras);
    let dedicated_score = score(catalog, dedicated, factor, offhand_efficiency, caps, &extras);

    let mut speed = if current_score > 0.0 {
        dedicated_score / current_score
    } else {
        1.0
    };

    let heart = if cfg.blue_heart {
        BLUE_HEART_MULTIPLIER
    } else {
        1.0
    };

    for family in 0..RESOURCE_FAMILIES {
        for tier in 0..POTION_TIERS {
            let Some(effect) = effects.get(family, tier) else {
                continue;
            };
            let toggle = cfg.potions[family][tier];
            let boosted = effect * heart;
            if toggle.dedicated {
                speed *= boosted.powf(exponent);
            }
            if toggle.current {
                speed *= boosted.powf(-exponent);
            }
        }
    }

    speed
}
