//! Discrete-time progression simulation: forward ("level reachable in T
//! time") and inverse ("time to reach level N") over a track's cost curve.
//!
//! Both directions treat non-positive or NaN rate inputs as "nothing to do"
//! rather than errors, and stop at hard numeric ceilings instead of looping
//! over astronomically large level counts.

use super::track::{RateInputs, TrackParams, TrackState};
use crate::constants::{
    JUMP_HEADROOM, JUMP_MAX_LEVELS, JUMP_TRIGGER_RATIO, LEVEL_CEILING, SOFTCAP_FACTOR,
    TICKS_PER_SECOND, TICK_CEILING,
};

/// Stateless simulator over one track. Built per call from a snapshot.
pub struct Simulator<'a> {
    params: &'a TrackParams,
    rate: RateInputs,
}

impl<'a> Simulator<'a> {
    pub fn new(params: &'a TrackParams, rate: RateInputs) -> Self {
        Self { params, rate }
    }

    fn level_limit(&self) -> u64 {
        self.params.level_cap.min(LEVEL_CEILING)
    }

    /// Highest level reachable from `state.level` within `minutes` of
    /// simulated time.
    pub fn reachable(&self, state: &TrackState, minutes: f64) -> u64 {
        self.reachable_ticks(state, (minutes * 60.0 * TICKS_PER_SECOND).floor())
    }

    /// Highest level reachable within an exact tick budget.
    ///
    /// When the remaining budget dwarfs the current per-level cost, a batch
    /// of up to 1000 levels is committed at once: a conservative estimate
    /// gates the jump, and a passing gate commits the exact per-level batch
    /// sum, so the final level always matches what single-stepping would
    /// reach.
    pub fn reachable_ticks(&self, state: &TrackState, ticks: f64) -> u64 {
        if self.rate.is_degenerate() || !(ticks > 0.0) {
            return state.level;
        }

        let limit = self.level_limit();
        let mut level = state.level;
        let mut budget = ticks;

        while level < limit {
            let cost = self.params.cost_at(level, state.reducer, &self.rate);
            if !cost.is_finite() {
                break;
            }

            if budget > JUMP_TRIGGER_RATIO * cost {
                let sized = (budget / (cost * JUMP_HEADROOM)).floor() as u64;
                let jump = sized.min(JUMP_MAX_LEVELS).min(limit - level);
                if jump >= 2 {
                    let gate = (cost * jump as f64 * SOFTCAP_FACTOR.powf(jump as f64)).ceil();
                    if gate <= budget {
                        let mut batch = 0.0;
                        for offset in 0..jump {
                            batch += self.params.cost_at(level + offset, state.reducer, &self.rate);
                        }
                        if batch <= budget {
                            budget -= batch;
                            level += jump;
                            continue;
                        }
                        // Estimate passed but the exact sum does not fit;
                        // fall back to single-level stepping.
                    }
                }
            }

            if budget >= cost {
                budget -= cost;
                level += 1;
            } else {
                break;
            }
        }

        level
    }

    /// Total ticks to advance from `state.level` to `target`.
    ///
    /// Returns 0 for degenerate rate inputs; returns early once the
    /// accumulated total passes the tick ceiling or the level ceiling is hit
    /// (a documented safety bound, not an error).
    pub fn time_to(&self, state: &TrackState, target: u64) -> f64 {
        if self.rate.is_degenerate() {
            return 0.0;
        }

        let target = target.min(self.level_limit());
        let mut total = 0.0;
        let mut level = state.level;
        while level < target {
            total += self.params.cost_at(level, state.reducer, &self.rate);
            if total > TICK_CEILING || level > LEVEL_CEILING {
                break;
            }
            level += 1;
        }
        total
    }
}
