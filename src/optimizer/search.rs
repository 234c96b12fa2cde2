//! Loadout search: lexicographic refinement across factors with
//! Pareto-dominance pruning per slot.
//!
//! The flow is `construct_base` (locked positions pinned, open positions
//! seeded with every eligible catalog item) -> one `compute_optimal` pass per
//! factor in priority order -> `sort_locks` (write choices back, copying
//! locked positions verbatim). Factor 0 is optimized first; only items that
//! survive a pass stay in contention for the next factor. Whatever ties
//! remain after the last pass are equally valid answers and are resolved
//! uniformly at random through the injected rng, the crate's only randomness
//! point.

use super::factor::Factor;
use super::pareto::pareto_filter;
use super::scoring::marginal_score;
use crate::catalog::{Catalog, ItemId, PlayerState, SlotKind};
use crate::constants::{PASS_PARETO_CUTOFF, SCORE_TIE_EPSILON};
use crate::loadout::{LockSet, Loadout};
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};

/// Candidates for one open slot position, ordered best-first as rank groups.
/// Items inside one group are equally ranked by every factor pass run so
/// far; groups earlier in the list beat groups later in the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankedPool {
    groups: Vec<Vec<ItemId>>,
}

impl RankedPool {
    /// Seed a pool with one undifferentiated group of candidates.
    pub fn seed(ids: Vec<ItemId>) -> Self {
        if ids.is_empty() {
            Self { groups: Vec::new() }
        } else {
            Self { groups: vec![ids] }
        }
    }

    pub fn groups(&self) -> &[Vec<ItemId>] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All candidates, best group first.
    pub fn flatten(&self) -> Vec<ItemId> {
        self.groups.iter().flatten().copied().collect()
    }
}

/// One slot position in a candidate layout: either pinned to the original
/// loadout's item or an open pool of surviving candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotCell {
    Locked(Option<ItemId>),
    Open(RankedPool),
}

/// A partially resolved loadout: every position carries either a pinned item
/// or the candidate pool that survived the passes run so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLayout {
    cells: BTreeMap<SlotKind, Vec<SlotCell>>,
}

impl CandidateLayout {
    /// Cells for one slot kind, positional order.
    pub fn cells(&self, kind: SlotKind) -> &[SlotCell] {
        self.cells.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    fn open_positions(&self, kind: SlotKind) -> usize {
        self.cells(kind)
            .iter()
            .filter(|cell| matches!(cell, SlotCell::Open(_)))
            .count()
    }
}

/// Slot-assignment optimizer over an ordered factor list.
pub struct Optimizer<'a> {
    catalog: &'a Catalog,
    player: &'a PlayerState,
    factors: &'a [Factor],
}

impl<'a> Optimizer<'a> {
    pub fn new(catalog: &'a Catalog, player: &'a PlayerState, factors: &'a [Factor]) -> Self {
        Self {
            catalog,
            player,
            factors,
        }
    }

    /// Produce the starting candidate layouts: locked positions fixed to the
    /// supplied loadout's items, every open position seeded with all eligible
    /// catalog items for its slot. A slot with zero eligible items keeps an
    /// empty pool and resolves to the "no item" placeholder.
    pub fn construct_base(&self, locks: &LockSet, loadout: &Loadout) -> Vec<CandidateLayout> {
        let mut cells: BTreeMap<SlotKind, Vec<SlotCell>> = BTreeMap::new();
        for kind in SlotKind::all() {
            let eligible = self.catalog.eligible_for_slot(kind, self.player);
            let row = loadout
                .get(kind)
                .iter()
                .enumerate()
                .map(|(position, &id)| {
                    if locks.is_locked(kind, position) {
                        SlotCell::Locked(id)
                    } else {
                        SlotCell::Open(RankedPool::seed(eligible.clone()))
                    }
                })
                .collect();
            cells.insert(kind, row);
        }
        vec![CandidateLayout { cells }]
    }

    /// Run one lexicographic refinement pass for the factor at
    /// `factor_index`. Within every rank group of every open pool, dominated
    /// items are pruned to the back via ParetoFilter and the survivors split
    /// into score-tie groups, so a later factor can only reorder items an
    /// earlier factor left tied. Pools keep at least as many candidates as
    /// the slot kind has open positions (distinct items are assigned later).
    /// Out-of-range indices (including the empty factor list) are a
    /// pass-through.
    pub fn compute_optimal(
        &self,
        layouts: Vec<CandidateLayout>,
        factor_index: usize,
    ) -> Vec<CandidateLayout> {
        let Some(factor) = self.factors.get(factor_index) else {
            return layouts;
        };
        layouts
            .into_iter()
            .map(|mut layout| {
                for kind in SlotKind::all() {
                    let needed = layout.open_positions(kind);
                    if needed == 0 {
                        continue;
                    }
                    if let Some(row) = layout.cells.get_mut(&kind) {
                        for cell in row.iter_mut() {
                            if let SlotCell::Open(pool) = cell {
                                *pool = self.refine_pool(pool, factor, needed);
                            }
                        }
                    }
                }
                layout
            })
            .collect()
    }

    /// Refine one pool against one factor, keeping at least `needed` items.
    fn refine_pool(&self, pool: &RankedPool, factor: &Factor, needed: usize) -> RankedPool {
        let mut groups: Vec<Vec<ItemId>> = Vec::new();
        for group in pool.groups() {
            let frontier = pareto_filter(
                self.catalog,
                group,
                &factor.stats,
                PASS_PARETO_CUTOFF.max(needed),
            );
            let frontier_set: BTreeSet<ItemId> = frontier.iter().copied().collect();
            let dominated: Vec<ItemId> = group
                .iter()
                .copied()
                .filter(|id| !frontier_set.contains(id))
                .collect();

            // Dominated items rank strictly behind their group's frontier but
            // still ahead of every later group; they only matter as fillers
            // when a multi-position slot outnumbers its frontier.
            groups.extend(self.score_partition(frontier, factor));
            groups.extend(self.score_partition(dominated, factor));
        }

        // Truncate to the groups actually in contention: everything after
        // `needed` candidates have accumulated is dead weight.
        let mut kept: Vec<Vec<ItemId>> = Vec::new();
        let mut count = 0;
        for group in groups {
            if count >= needed {
                break;
            }
            count += group.len();
            kept.push(group);
        }
        RankedPool { groups: kept }
    }

    /// Split items into groups of equal marginal factor score, best first.
    /// Id order within a group keeps the output reproducible.
    fn score_partition(&self, ids: Vec<ItemId>, factor: &Factor) -> Vec<Vec<ItemId>> {
        if ids.is_empty() {
            return Vec::new();
        }
        let mut scored: Vec<(ItemId, f64)> = ids
            .into_iter()
            .map(|id| {
                let score = self
                    .catalog
                    .get(id)
                    .map(|item| marginal_score(&item.stats, factor))
                    .unwrap_or(0.0);
                (id, score)
            })
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut groups: Vec<Vec<ItemId>> = Vec::new();
        let mut group_score = f64::NEG_INFINITY;
        for (id, score) in scored {
            let tied = (group_score - score).abs() <= group_score.abs() * SCORE_TIE_EPSILON;
            match groups.last_mut() {
                Some(group) if tied => group.push(id),
                _ => {
                    groups.push(vec![id]);
                    group_score = score;
                }
            }
        }
        groups
    }

    /// Reconcile a candidate layout with the original loadout: locked
    /// positions are copied verbatim from `loadout`, open positions take the
    /// best remaining candidates. Positions of the same kind receive
    /// distinct items; ties inside a rank group are resolved uniformly at
    /// random via `rng`.
    pub fn sort_locks(
        &self,
        locks: &LockSet,
        loadout: &Loadout,
        layout: &CandidateLayout,
        rng: &mut impl Rng,
    ) -> Loadout {
        let mut result = Loadout::empty(loadout.accessory_slots());
        for kind in SlotKind::all() {
            let original = loadout.get(kind);
            let mut used: BTreeSet<ItemId> = layout
                .cells(kind)
                .iter()
                .filter_map(|cell| match cell {
                    SlotCell::Locked(Some(id)) => Some(*id),
                    _ => None,
                })
                .collect();

            for (position, cell) in layout.cells(kind).iter().enumerate() {
                let chosen = match cell {
                    SlotCell::Locked(_) => {
                        debug_assert!(locks.is_locked(kind, position));
                        original.get(position).copied().flatten()
                    }
                    SlotCell::Open(pool) => {
                        let pick = pick_best(pool, &used, rng);
                        if let Some(id) = pick {
                            used.insert(id);
                        }
                        pick
                    }
                };
                // Positions exist in both shapes; out-of-range is unreachable.
                let _ = result.set(kind, position, chosen);
            }
        }
        result
    }

    /// Full pipeline: base construction, one pass per factor in priority
    /// order, random selection among any equal-rank layouts, lock
    /// reconciliation.
    pub fn optimize(&self, locks: &LockSet, loadout: &Loadout, rng: &mut impl Rng) -> Loadout {
        let mut layouts = self.construct_base(locks, loadout);
        for factor_index in 0..self.factors.len() {
            layouts = self.compute_optimal(layouts, factor_index);
        }
        let layout = match layouts.as_slice() {
            [] => return loadout.clone(),
            [single] => single,
            many => &many[rng.gen_range(0..many.len())],
        };
        self.sort_locks(locks, loadout, layout, rng)
    }
}

/// Take the best not-yet-used candidate from a ranked pool.
///
/// The first group with an unused member supplies the pick; a uniform random
/// choice among that group's unused members is the crate's single randomness
/// point, so injecting a seeded rng makes the whole pipeline deterministic.
fn pick_best(pool: &RankedPool, used: &BTreeSet<ItemId>, rng: &mut impl Rng) -> Option<ItemId> {
    for group in pool.groups() {
        let available: Vec<ItemId> = group
            .iter()
            .copied()
            .filter(|id| !used.contains(id))
            .collect();
        if !available.is_empty() {
            return Some(available[rng.gen_range(0..available.len())]);
        }
    }
    None
}
