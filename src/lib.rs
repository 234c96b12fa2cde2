//! Gearsim - loadout optimization and progression simulation for a
//! long-running idle RPG.
//!
//! Two coupled engines: a combinatorial loadout optimizer (lexicographic
//! factor refinement with Pareto-dominance pruning) and a discrete-time
//! progression simulator whose effective rate is a ratio of two optimizer
//! scores. Every engine call is synchronous and stateless: it consumes an
//! immutable snapshot and returns one value.

pub mod api;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod loadout;
pub mod optimizer;
pub mod progression;
pub mod snapshot;
