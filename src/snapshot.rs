//! Immutable game-state snapshot supplied by the caller at request time.
//!
//! Every field carries a serde default so a partial snapshot falls back to
//! neutral values instead of failing; a saved loadout missing its factor or
//! slot-count overrides falls back to the snapshot's globals.

use crate::catalog::{PlayerState, StatBlock};
use crate::loadout::{LockSet, Loadout};
use crate::optimizer::{CapStats, Factor};
use crate::progression::SpeedConfig;
use serde::{Deserialize, Serialize};

fn default_offhand_efficiency() -> f64 {
    100.0
}

/// One saved loadout with optional per-save overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLoadout {
    pub loadout: Loadout,
    /// Overrides the snapshot's factor list when present.
    #[serde(default)]
    pub factors: Option<Vec<Factor>>,
    /// Overrides the snapshot's accessory slot count when present.
    #[serde(default)]
    pub max_slots: Option<usize>,
}

/// Complete engine input: read at call time, discarded after the call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub loadout: Loadout,
    #[serde(default)]
    pub locks: LockSet,
    #[serde(default)]
    pub factors: Vec<Factor>,
    #[serde(default)]
    pub cap_stats: CapStats,
    #[serde(default)]
    pub player: PlayerState,
    #[serde(default = "default_offhand_efficiency")]
    pub offhand_efficiency: f64,
    #[serde(default)]
    pub saved: Vec<SavedLoadout>,
    #[serde(default)]
    pub speed: SpeedConfig,
    /// Synthetic "cube" stat bonuses, player-configured.
    #[serde(default)]
    pub cube_stats: StatBlock,
    /// Synthetic "base" stat bonuses, player-configured.
    #[serde(default)]
    pub base_stats: StatBlock,
}

impl Snapshot {
    /// Accessory cardinality, taken from the current loadout's shape.
    pub fn accessory_slots(&self) -> usize {
        self.loadout.accessory_slots()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{SlotKind, Stat};

    #[test]
    fn test_partial_snapshot_falls_back_to_defaults() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.factors.is_empty());
        assert_eq!(snapshot.offhand_efficiency, 100.0);
        assert!(!snapshot.speed.modifiers);
        assert_eq!(
            snapshot.accessory_slots(),
            crate::constants::DEFAULT_ACCESSORY_SLOTS
        );
    }

    #[test]
    fn test_saved_loadout_overrides_optional() {
        let json = r#"{"loadout": {"slots": {}}}"#;
        let saved: SavedLoadout = serde_json::from_str(json).unwrap();
        assert!(saved.factors.is_none());
        assert!(saved.max_slots.is_none());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut snapshot = Snapshot::default();
        snapshot.factors.push(Factor::new("power", [Stat::Power]));
        snapshot.loadout.set(SlotKind::Head, 0, Some(3)).unwrap();
        snapshot.locks.lock(SlotKind::Head, 0);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
