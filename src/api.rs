//! Request/response boundary to the UI and persistence layer.
//!
//! Requests are a tagged union dispatched by exhaustive matching; a raw
//! message whose command is unrecognized (or whose payload is malformed) is
//! logged and ignored, never answered and never fatal.

use crate::catalog::{Catalog, ItemId, SlotKind};
use crate::loadout::{LockSet, Loadout};
use crate::optimizer::{pareto_filter, Optimizer};
use crate::snapshot::Snapshot;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A typed engine request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Request {
    /// Optimize the current loadout against the snapshot's factor list.
    #[serde(rename = "optimize")]
    Optimize { state: Snapshot },
    /// Optimize every saved loadout, honoring per-save overrides.
    #[serde(rename = "optimizeSaves")]
    OptimizeSaves { state: Snapshot },
    /// Collect every item id that could ever matter.
    #[serde(rename = "scanUseless")]
    ScanUseless { state: Snapshot },
}

/// A typed engine response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Equip {
        equip: Loadout,
    },
    SavedEquip {
        savedequip: Vec<Loadout>,
    },
    UsefulIds {
        #[serde(rename = "usefulIds")]
        useful_ids: Vec<ItemId>,
    },
}

/// Compute one request synchronously. Each call builds its engines from the
/// snapshot and retains nothing afterwards.
pub fn dispatch(catalog: &Catalog, request: &Request, rng: &mut impl Rng) -> Response {
    match request {
        Request::Optimize { state } => {
            let optimizer = Optimizer::new(catalog, &state.player, &state.factors);
            let equip = optimizer.optimize(&state.locks, &state.loadout, rng);
            Response::Equip { equip }
        }
        Request::OptimizeSaves { state } => {
            let savedequip = state
                .saved
                .iter()
                .map(|saved| {
                    let factors = saved.factors.as_deref().unwrap_or(&state.factors);
                    let mut loadout = saved.loadout.clone();
                    loadout.resize_accessories(
                        saved.max_slots.unwrap_or_else(|| state.accessory_slots()),
                    );
                    let optimizer = Optimizer::new(catalog, &state.player, factors);
                    // Locks pin positions of the current equip, not saves.
                    optimizer.optimize(&LockSet::new(), &loadout, rng)
                })
                .collect();
            Response::SavedEquip { savedequip }
        }
        Request::ScanUseless { state } => Response::UsefulIds {
            useful_ids: scan_useful(catalog, state),
        },
    }
}

/// Parse and compute a raw JSON message. Unrecognized commands yield no
/// response.
pub fn handle_message(catalog: &Catalog, raw: &str, rng: &mut impl Rng) -> Option<Response> {
    match serde_json::from_str::<Request>(raw) {
        Ok(request) => Some(dispatch(catalog, &request, rng)),
        Err(err) => {
            log::warn!("ignoring unrecognized request: {err}");
            None
        }
    }
}

/// Union of every equipped id, every saved-loadout id, and the Pareto
/// frontier of every slot under every factor, restricted to eligible items.
/// Accessory frontiers keep as many items as there are accessory slots;
/// every other slot keeps one.
fn scan_useful(catalog: &Catalog, state: &Snapshot) -> Vec<ItemId> {
    let mut useful: BTreeSet<ItemId> = state.loadout.equipped_ids().into_iter().collect();
    for saved in &state.saved {
        useful.extend(saved.loadout.equipped_ids());
    }

    for factor in &state.factors {
        for kind in SlotKind::all() {
            let pool = catalog.eligible_for_slot(kind, &state.player);
            let cutoff = if kind == SlotKind::Accessory {
                state.accessory_slots().max(1)
            } else {
                1
            };
            useful.extend(pareto_filter(catalog, &pool, &factor.stats, cutoff));
        }
    }

    useful.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Item, Stat, StatBlock, ZoneInfo};
    use crate::optimizer::Factor;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn item(id: ItemId, slot: SlotKind, power: f64) -> Item {
        Item {
            id,
            name: format!("Item {id}"),
            slot,
            zone: ZoneInfo::default(),
            special: None,
            stats: StatBlock::new().with(Stat::Power, power),
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_unknown_command_is_ignored() {
        let catalog = Catalog::new();
        let out = handle_message(&catalog, r#"{"command": "augment"}"#, &mut rng());
        assert!(out.is_none());
        let out = handle_message(&catalog, "not even json", &mut rng());
        assert!(out.is_none());
    }

    #[test]
    fn test_optimize_round_trip_through_json() {
        let catalog = Catalog::from_items([item(1, SlotKind::Head, 5.0), item(2, SlotKind::Head, 9.0)]);
        let mut snapshot = Snapshot::default();
        snapshot.factors.push(Factor::new("power", [Stat::Power]));
        let raw = serde_json::to_string(&Request::Optimize { state: snapshot }).unwrap();

        let response = handle_message(&catalog, &raw, &mut rng()).expect("optimize must answer");
        match response {
            Response::Equip { equip } => {
                assert_eq!(equip.get(SlotKind::Head), &[Some(2)]);
            }
            other => panic!("expected equip response, got {other:?}"),
        }
    }

    #[test]
    fn test_scan_useful_includes_equipped_and_frontier() {
        let catalog = Catalog::from_items([
            item(1, SlotKind::Head, 1.0),
            item(2, SlotKind::Head, 9.0),
            item(3, SlotKind::Boots, 4.0),
        ]);
        let mut snapshot = Snapshot::default();
        snapshot.factors.push(Factor::new("power", [Stat::Power]));
        // Equip the weak head item; it stays useful by virtue of being worn.
        snapshot.loadout.set(SlotKind::Head, 0, Some(1)).unwrap();

        let useful = scan_useful(&catalog, &snapshot);
        assert_eq!(useful, vec![1, 2, 3]);
    }
}
