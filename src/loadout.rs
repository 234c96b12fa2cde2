//! Loadouts (one item id per slot position) and lock sets.

use crate::catalog::{ItemId, SlotKind};
use crate::error::{GearError, GearResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// An assignment of item ids to slot positions. `None` is the explicit
/// "no item" placeholder.
///
/// Cardinality per kind is fixed by the catalog convention (two weapon
/// positions: main-hand then off-hand) except Accessory, whose length is
/// configuration-defined at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    slots: BTreeMap<SlotKind, Vec<Option<ItemId>>>,
}

impl Loadout {
    /// An empty loadout with the given accessory cardinality.
    pub fn empty(accessory_slots: usize) -> Self {
        let slots = SlotKind::all()
            .into_iter()
            .map(|kind| (kind, vec![None; kind.positions(accessory_slots)]))
            .collect();
        Self { slots }
    }

    /// Positions for one slot kind, main-hand first for Weapon.
    pub fn get(&self, kind: SlotKind) -> &[Option<ItemId>] {
        self.slots.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn set(&mut self, kind: SlotKind, position: usize, id: Option<ItemId>) -> GearResult<()> {
        let positions = self.slots.entry(kind).or_default();
        if position >= positions.len() {
            return Err(GearError::SlotOutOfRange {
                kind: kind.name(),
                position,
                slots: positions.len(),
            });
        }
        positions[position] = id;
        Ok(())
    }

    pub fn accessory_slots(&self) -> usize {
        self.get(SlotKind::Accessory).len()
    }

    /// Change the accessory cardinality, keeping existing assignments where
    /// they still fit.
    pub fn resize_accessories(&mut self, count: usize) {
        self.slots
            .entry(SlotKind::Accessory)
            .or_default()
            .resize(count, None);
    }

    /// Every (kind, position, id) triple in canonical order.
    pub fn positions(&self) -> impl Iterator<Item = (SlotKind, usize, Option<ItemId>)> + '_ {
        self.slots.iter().flat_map(|(&kind, positions)| {
            positions
                .iter()
                .enumerate()
                .map(move |(pos, &id)| (kind, pos, id))
        })
    }

    /// Ids of every equipped item, canonical order, placeholders skipped.
    pub fn equipped_ids(&self) -> Vec<ItemId> {
        self.positions().filter_map(|(_, _, id)| id).collect()
    }
}

impl Default for Loadout {
    fn default() -> Self {
        Self::empty(crate::constants::DEFAULT_ACCESSORY_SLOTS)
    }
}

/// Slot positions the optimizer must not alter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockSet {
    locked: BTreeMap<SlotKind, BTreeSet<usize>>,
}

impl LockSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&mut self, kind: SlotKind, position: usize) {
        self.locked.entry(kind).or_default().insert(position);
    }

    pub fn unlock(&mut self, kind: SlotKind, position: usize) {
        if let Some(positions) = self.locked.get_mut(&kind) {
            positions.remove(&position);
        }
    }

    pub fn is_locked(&self, kind: SlotKind, position: usize) -> bool {
        self.locked
            .get(&kind)
            .is_some_and(|positions| positions.contains(&position))
    }
}
