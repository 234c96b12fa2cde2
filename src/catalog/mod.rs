//! Immutable, id-indexed item catalog and zone eligibility rules.

mod types;

pub use types::{Item, ItemId, SlotKind, SpecialFamily, SpecialRank, Stat, StatBlock, ZoneInfo};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Player-side eligibility state consumed by `allowed_zone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerState {
    /// Highest zone tier the player has reached.
    pub zone: u32,
    /// Zone tier of the newest titan zone.
    pub titan_zone: u32,
    /// Unlocked titan version (sub-tier) within the newest titan zone.
    pub titan_version: u32,
    /// Unlocked rank count for the Relic family.
    pub relic_unlocks: u32,
    /// Unlocked rank count for the Trophy family.
    pub trophy_unlocks: u32,
}

/// The immutable item catalog, consumed read-only by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    items: BTreeMap<ItemId, Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of items. Later duplicates win.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items for a slot kind, in id order.
    pub fn items_for_slot(&self, kind: SlotKind) -> impl Iterator<Item = &Item> {
        self.items.values().filter(move |item| item.slot == kind)
    }

    /// Eligible item ids for a slot kind, in id order.
    pub fn eligible_for_slot(&self, kind: SlotKind, player: &PlayerState) -> Vec<ItemId> {
        self.items_for_slot(kind)
            .filter(|item| allowed_zone(item, player))
            .map(|item| item.id)
            .collect()
    }
}

/// Zone/titan/unlock eligibility test.
///
/// An item may be considered only if its zone tier has been reached, its
/// titan sub-tier is unlocked when it sits in the newest titan zone, and its
/// special-family rank does not exceed the player's unlock count.
pub fn allowed_zone(item: &Item, player: &PlayerState) -> bool {
    if item.zone.tier > player.zone {
        return false;
    }
    if item.zone.tier == player.titan_zone && item.zone.sub_tier > player.titan_version {
        return false;
    }
    match item.special {
        Some(SpecialRank {
            family: SpecialFamily::Relic,
            rank,
        }) => rank <= player.relic_unlocks,
        Some(SpecialRank {
            family: SpecialFamily::Trophy,
            rank,
        }) => rank <= player.trophy_unlocks,
        None => true,
    }
}
