//! Loadout optimization: scoring, Pareto pruning and lexicographic search.

mod factor;
mod pareto;
mod scoring;
mod search;

pub use factor::{CapStats, Factor};
pub use pareto::pareto_filter;
pub use scoring::{marginal_score, score};
pub use search::{CandidateLayout, Optimizer, RankedPool, SlotCell};
