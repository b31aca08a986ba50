//! Weighted random choice over a fixed list of variants.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A list of `(variant, weight)` pairs sampled proportionally to weight.
///
/// Entries with a non-positive or non-finite weight are dropped at
/// construction, so an all-zero table is simply empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedTable<T> {
    entries: Vec<(T, f64)>,
    total: f64,
}

impl<T: Copy> WeightedTable<T> {
    pub fn new(entries: impl IntoIterator<Item = (T, f64)>) -> Self {
        let entries: Vec<(T, f64)> = entries
            .into_iter()
            .filter(|(_, w)| w.is_finite() && *w > 0.0)
            .collect();
        let total = entries.iter().map(|(_, w)| w).sum();
        Self { entries, total }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all retained weights.
    pub fn total_weight(&self) -> f64 {
        self.total
    }

    /// Normalized probability of `variant` (0.0 if absent).
    pub fn probability(&self, variant: T) -> f64
    where
        T: PartialEq,
    {
        if self.total <= 0.0 {
            return 0.0;
        }
        self.entries
            .iter()
            .filter(|(v, _)| *v == variant)
            .map(|(_, w)| w)
            .sum::<f64>()
            / self.total
    }

    /// Draw one variant. `None` only when the table is empty.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T> {
        if self.entries.is_empty() {
            return None;
        }
        let roll = rng.gen_range(0.0..self.total);
        self.pick_at(roll)
    }

    /// Resolve a roll in `[0, total)` to its variant.
    pub fn pick_at(&self, roll: f64) -> Option<T> {
        let mut acc = 0.0;
        for (variant, weight) in &self.entries {
            acc += weight;
            if roll < acc {
                return Some(*variant);
            }
        }
        // Rounding can leave `roll` a hair above the final bucket.
        self.entries.last().map(|(v, _)| *v)
    }
}
