use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Catalog-wide item identifier.
pub type ItemId = u32;

/// Equipment slot categories, in canonical iteration order.
///
/// IMPORTANT: scoring sums stats in this order; keep the derive(Ord) order
/// stable or score traces stop being comparable across versions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SlotKind {
    Weapon,
    Head,
    Chest,
    Legs,
    Boots,
    Accessory,
}

impl SlotKind {
    /// All slot kinds in canonical order.
    pub fn all() -> [SlotKind; 6] {
        [
            SlotKind::Weapon,
            SlotKind::Head,
            SlotKind::Chest,
            SlotKind::Legs,
            SlotKind::Boots,
            SlotKind::Accessory,
        ]
    }

    /// Returns the display name for this slot kind.
    pub fn name(&self) -> &'static str {
        match self {
            SlotKind::Weapon => "Weapon",
            SlotKind::Head => "Head",
            SlotKind::Chest => "Chest",
            SlotKind::Legs => "Legs",
            SlotKind::Boots => "Boots",
            SlotKind::Accessory => "Accessory",
        }
    }

    /// Number of positions this kind occupies in a loadout.
    /// Accessory cardinality is configuration-defined.
    pub fn positions(&self, accessory_slots: usize) -> usize {
        match self {
            SlotKind::Weapon => crate::constants::WEAPON_SLOTS,
            SlotKind::Accessory => accessory_slots,
            _ => 1,
        }
    }
}

/// Item and player stats the optimizer can weigh.
///
/// Power, Toughness and Respawn are additive (their loadout sum starts at 0);
/// every other stat is a multiplicative bonus whose sum starts at the 100%
/// baseline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Stat {
    Power,
    Toughness,
    Respawn,
    EnergyPower,
    EnergyCap,
    MagicPower,
    MagicCap,
    ResourcePower,
    ResourceCap,
    DropChance,
    GoldDrop,
}

impl Stat {
    /// True for stats that accumulate from zero rather than a 100% baseline.
    pub fn is_additive(&self) -> bool {
        matches!(self, Stat::Power | Stat::Toughness | Stat::Respawn)
    }

    /// Starting value for the loadout-wide sum of this stat.
    pub fn baseline(&self) -> f64 {
        if self.is_additive() {
            0.0
        } else {
            crate::constants::MULTIPLICATIVE_BASELINE
        }
    }
}

/// Where an item sits in the world: zone set, zone tier within the set, and
/// sub-tier (titan version) within the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoneInfo {
    pub set: u32,
    pub tier: u32,
    pub sub_tier: u32,
}

/// The two item families whose availability is gated by a player-configured
/// unlock count instead of zone progress alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialFamily {
    Relic,
    Trophy,
}

/// Rank of an item within a special family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialRank {
    pub family: SpecialFamily,
    pub rank: u32,
}

/// A bag of stat values. Missing stats contribute nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatBlock {
    values: HashMap<Stat, f64>,
}

impl StatBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with(mut self, stat: Stat, value: f64) -> Self {
        self.values.insert(stat, value);
        self
    }

    pub fn set(&mut self, stat: Stat, value: f64) {
        self.values.insert(stat, value);
    }

    pub fn get(&self, stat: Stat) -> Option<f64> {
        self.values.get(&stat).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A catalog item. Immutable and catalog-owned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub slot: SlotKind,
    #[serde(default)]
    pub zone: ZoneInfo,
    #[serde(default)]
    pub special: Option<SpecialRank>,
    #[serde(default)]
    pub stats: StatBlock,
}
