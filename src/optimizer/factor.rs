use crate::catalog::Stat;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One optimization objective: a weighted multiplicative composite over a
/// list of stats. Factors are optimized lexicographically, highest priority
/// first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    pub name: String,
    pub stats: Vec<Stat>,
    /// Optional per-stat exponents, parallel to `stats`. Missing entries
    /// default to 1.
    #[serde(default)]
    pub exponents: Option<Vec<f64>>,
}

impl Factor {
    pub fn new(name: impl Into<String>, stats: impl Into<Vec<Stat>>) -> Self {
        Self {
            name: name.into(),
            stats: stats.into(),
            exponents: None,
        }
    }

    pub fn with_exponents(mut self, exponents: impl Into<Vec<f64>>) -> Self {
        self.exponents = Some(exponents.into());
        self
    }

    /// Exponent for the stat at `index` (default 1).
    pub fn exponent(&self, index: usize) -> f64 {
        self.exponents
            .as_ref()
            .and_then(|exps| exps.get(index).copied())
            .unwrap_or(1.0)
    }
}

/// Hardcap inputs: per-stat cap values and the "nude" (unequipped) baseline
/// used to scale them. A stat with no cap entry is unclamped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapStats {
    #[serde(default)]
    caps: HashMap<Stat, f64>,
    #[serde(default)]
    nude: HashMap<Stat, f64>,
}

impl CapStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cap(mut self, stat: Stat, cap: f64, nude: f64) -> Self {
        self.caps.insert(stat, cap);
        self.nude.insert(stat, nude);
        self
    }

    pub fn cap(&self, stat: Stat) -> Option<f64> {
        self.caps.get(&stat).copied()
    }

    pub fn nude(&self, stat: Stat) -> f64 {
        self.nude.get(&stat).copied().unwrap_or(1.0)
    }
}
