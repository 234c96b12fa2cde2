//! Shared balance and safety constants used by the optimizer and simulator.
//!
//! All tuning numbers live here. Change once, test everywhere.

// =============================================================================
// SCORING
// =============================================================================

/// Baseline for multiplicative bonus stats (100 = "100%, no bonus").
pub const MULTIPLICATIVE_BASELINE: f64 = 100.0;

/// Off-hand weapon contribution is `offhand_efficiency / 100` of its stats.
pub const OFFHAND_SCALE_DIVISOR: f64 = 100.0;

// =============================================================================
// LOADOUT SHAPE
// =============================================================================

/// Weapon slot positions: index 0 is main-hand, index 1 is off-hand.
pub const WEAPON_SLOTS: usize = 2;

/// Off-hand position within the weapon slot vector.
pub const OFFHAND_INDEX: usize = 1;

/// Accessory count used when a snapshot does not specify one.
pub const DEFAULT_ACCESSORY_SLOTS: usize = 4;

// =============================================================================
// OPTIMIZER
// =============================================================================

/// Pareto cutoff for intermediate factor passes. Frontiers are rarely this
/// wide; the bound only guards pathological catalogs.
pub const PASS_PARETO_CUTOFF: usize = 50;

/// Relative tolerance when comparing marginal factor scores for ties.
pub const SCORE_TIE_EPSILON: f64 = 1e-9;

// =============================================================================
// PROGRESSION SIMULATION
// =============================================================================

/// Discrete simulation ticks per second. A minutes budget converts as
/// `minutes * 60 * TICKS_PER_SECOND`.
pub const TICKS_PER_SECOND: f64 = 50.0;

/// Exponential per-level cost growth constant.
pub const SOFTCAP_FACTOR: f64 = 1.0078;

/// Hard ceiling on simulated level. Past this the loops stop rather than
/// chase astronomically large targets.
pub const LEVEL_CEILING: u64 = 1_000_000_000;

/// Hard ceiling on accumulated ticks in time-to-target before returning early.
pub const TICK_CEILING: f64 = 1e15;

/// Batch jumping triggers when the remaining budget exceeds this many times
/// the current per-level cost.
pub const JUMP_TRIGGER_RATIO: f64 = 100.0;

/// Maximum levels committed in a single batch jump.
pub const JUMP_MAX_LEVELS: u64 = 1000;

/// Headroom divisor when sizing a batch jump from the remaining budget.
pub const JUMP_HEADROOM: f64 = 1.5;

// =============================================================================
// SPEED MODIFIER
// =============================================================================

/// Multiplier applied to every active potion effect while the blue heart
/// boost is running.
pub const BLUE_HEART_MULTIPLIER: f64 = 1.1;

/// Resource families with potion lines (energy, magic, third resource).
pub const RESOURCE_FAMILIES: usize = 3;

/// Potion tiers per resource family.
pub const POTION_TIERS: usize = 2;
