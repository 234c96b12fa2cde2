//! Per-track cost curve: linear growth, exponential softcap and periodic
//! milestone multipliers.

use crate::constants::SOFTCAP_FACTOR;
use serde::{Deserialize, Serialize};

fn default_level_cap() -> u64 {
    u64::MAX
}

/// Catalog-sourced parameters of one progression track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackParams {
    pub base_cost: f64,
    pub milestone_spacing: u32,
    pub milestone_multiplier: f64,
    pub linear_bonus_coefficient: f64,
    #[serde(default = "default_level_cap")]
    pub level_cap: u64,
    /// The one designated track whose own bonus reduces its own future cost.
    #[serde(default)]
    pub self_accelerating: bool,
}

/// Mutable-per-call state of one track. Operations are pure; the caller
/// produces the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackState {
    pub level: u64,
    pub goal: u64,
    /// Shrinks the milestone spacing; spacing never drops below 1.
    pub reducer: u32,
}

/// Rate inputs to the cost curve. Any non-positive or NaN member makes the
/// whole computation degenerate (the simulator returns its input unchanged).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateInputs {
    pub cap: f64,
    pub power: f64,
    pub speed: f64,
}

impl RateInputs {
    /// True when any input is non-positive or NaN.
    pub fn is_degenerate(&self) -> bool {
        !(self.cap > 0.0) || !(self.power > 0.0) || !(self.speed > 0.0)
    }
}

impl TrackParams {
    /// Effective milestone spacing after the reducer, never below 1.
    pub fn spacing(&self, reducer: u32) -> u64 {
        u64::from(self.milestone_spacing.saturating_sub(reducer).max(1))
    }

    /// Milestones passed at `level`.
    pub fn milestones_passed(&self, level: u64, reducer: u32) -> u64 {
        level / self.spacing(reducer)
    }

    /// Level of the most recent milestone at or below `level`.
    pub fn milestone_level(&self, level: u64, reducer: u32) -> u64 {
        self.milestones_passed(level, reducer) * self.spacing(reducer)
    }

    /// Track bonus at `level`: linear growth times the milestone multiplier
    /// per milestone passed. `bonus(0) == 100` (the 100% baseline).
    pub fn bonus(&self, level: u64, reducer: u32) -> f64 {
        (level as f64 * self.linear_bonus_coefficient + 100.0)
            * self
                .milestone_multiplier
                .powf(self.milestones_passed(level, reducer) as f64)
    }

    /// Ticks required to advance from `level` to `level + 1`.
    pub fn cost_at(&self, level: u64, reducer: u32, rate: &RateInputs) -> f64 {
        let self_accel = if self.self_accelerating {
            self.bonus(level, reducer) / 100.0
        } else {
            1.0
        };
        let effective = rate.cap * rate.power * rate.speed * self_accel;
        (self.base_cost * (level as f64 + 1.0) * SOFTCAP_FACTOR.powf(level as f64) / effective)
            .ceil()
    }
}
