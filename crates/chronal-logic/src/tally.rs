//! Per-seed cell counter used by the region classifier.
//!
//! Keys are seed indices into a `SeedSet`. Seeds that never owned a cell are
//! simply absent and read back as zero. Tallies from disjoint row shards are
//! combined with [`RegionTally::merge`], which sums counts and unions the
//! infinite sets, so shard order never matters.

use std::collections::{HashMap, HashSet};

/// Cell counts per owning seed plus the set of seeds found to be unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionTally {
    counts: HashMap<usize, usize>,
    infinite: HashSet<usize>,
    tied_cells: usize,
}

impl RegionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more cell owned by `seed`.
    pub fn add(&mut self, seed: usize) {
        *self.counts.entry(seed).or_insert(0) += 1;
    }

    /// Record a cell with two or more seeds at the minimum distance.
    pub fn add_tie(&mut self) {
        self.tied_cells += 1;
    }

    pub fn mark_infinite(&mut self, seed: usize) {
        self.infinite.insert(seed);
    }

    /// Cells owned by `seed`; zero if it owns none.
    pub fn get(&self, seed: usize) -> usize {
        self.counts.get(&seed).copied().unwrap_or(0)
    }

    /// Drop `seed` from the counts, returning its previous count.
    pub fn remove(&mut self, seed: usize) -> Option<usize> {
        self.counts.remove(&seed)
    }

    pub fn is_infinite(&self, seed: usize) -> bool {
        self.infinite.contains(&seed)
    }

    pub fn infinite(&self) -> &HashSet<usize> {
        &self.infinite
    }

    pub fn tied_cells(&self) -> usize {
        self.tied_cells
    }

    /// Total uniquely-owned cells across all seeds.
    pub fn owned_cells(&self) -> usize {
        self.counts.values().sum()
    }

    /// Largest count currently held, or 0 when empty.
    pub fn max_value(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Remove every infinite seed from the counts.
    pub fn drop_infinite(&mut self) {
        let infinite: Vec<usize> = self.infinite.iter().copied().collect();
        for seed in infinite {
            self.remove(seed);
        }
    }

    /// Combine two shard tallies.
    pub fn merge(mut self, other: RegionTally) -> RegionTally {
        for (seed, n) in other.counts {
            *self.counts.entry(seed).or_insert(0) += n;
        }
        self.infinite.extend(other.infinite);
        self.tied_cells += other.tied_cells;
        self
    }
}
