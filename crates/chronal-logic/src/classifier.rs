//! Nearest-seed region classification over the seeds' bounding rectangle.
//!
//! Two queries share the same inclusive scan rectangle:
//!
//! - **Largest bounded region**: every cell is owned by the single seed at
//!   minimum Manhattan distance. Cells with two or more seeds at that
//!   distance belong to nobody. A seed owning any border cell is treated as
//!   unbounded and dropped before taking the maximum.
//! - **Safe region**: the number of cells whose summed distance to all
//!   seeds is strictly below a limit.
//!
//! Both are brute-force `O(W·H·N)` scans. The border rule approximates
//! "unbounded Voronoi cell" and can misjudge seeds lying far outside the
//! hull of the others; the safe-region count never looks past the
//! rectangle and undercounts when the true region extends beyond it.
//!
//! Rows are independent, so each query also has a rayon variant that scans
//! rows in parallel and merges per-row results. Merging only sums counts and
//! unions infinite sets, so it yields exactly the sequential answer.

use std::ops::RangeInclusive;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::coordinate::Coordinate;
use crate::seeds::{Bounds, SeedSet};
use crate::tally::RegionTally;

/// Who owns a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Exactly one seed is nearest.
    Owned(usize),
    /// `seeds` seeds share the minimum `distance`.
    Tied { distance: u64, seeds: usize },
}

/// Find the nearest seed to `cell` in one pass, tracking the running
/// minimum and how many seeds reach it.
pub fn nearest_seed(cell: Coordinate, seeds: &[Coordinate]) -> Ownership {
    let mut best = u64::MAX;
    let mut best_index = 0;
    let mut ties = 0;
    for (i, seed) in seeds.iter().enumerate() {
        let d = seed.manhattan(cell);
        if d < best {
            best = d;
            best_index = i;
            ties = 1;
        } else if d == best {
            ties += 1;
        }
    }
    if ties == 1 {
        Ownership::Owned(best_index)
    } else {
        Ownership::Tied {
            distance: best,
            seeds: ties,
        }
    }
}

fn scan_row(seeds: &[Coordinate], bounds: &Bounds, y: i32, tally: &mut RegionTally) {
    for x in bounds.columns() {
        let cell = Coordinate::new(x, y);
        match nearest_seed(cell, seeds) {
            Ownership::Owned(owner) => {
                tally.add(owner);
                if bounds.is_border(cell) {
                    tally.mark_infinite(owner);
                }
            }
            Ownership::Tied { .. } => tally.add_tie(),
        }
    }
}

/// Classify every cell in `rows` (clamped to the seed bounds).
///
/// This is the shard primitive: tallies of disjoint row ranges can be
/// combined with [`RegionTally::merge`].
pub fn scan_rows(set: &SeedSet, rows: RangeInclusive<i32>) -> RegionTally {
    let bounds = set.bounds();
    let rows = clamp_rows(&bounds, rows);
    let mut tally = RegionTally::new();
    for y in rows {
        scan_row(set.seeds(), &bounds, y, &mut tally);
    }
    tally
}

fn clamp_rows(bounds: &Bounds, rows: RangeInclusive<i32>) -> RangeInclusive<i32> {
    let (start, end) = rows.into_inner();
    start.max(bounds.y_min)..=end.min(bounds.y_max)
}

/// Size of one seed's region in a finished report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub index: usize,
    pub seed: Coordinate,
    pub area: usize,
    pub infinite: bool,
}

/// Result of a full nearest-seed classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionReport {
    pub bounds: Bounds,
    /// One entry per seed, in input order.
    pub regions: Vec<RegionSummary>,
    /// Cells claimed by no seed because of a distance tie.
    pub tied_cells: usize,
    /// Largest area among seeds not touching the border, 0 if none.
    pub largest_bounded: usize,
}

impl RegionReport {
    /// Assemble a report from a tally covering the whole rectangle.
    pub fn from_tally(set: &SeedSet, mut tally: RegionTally) -> Self {
        let regions = set
            .seeds()
            .iter()
            .enumerate()
            .map(|(index, &seed)| RegionSummary {
                index,
                seed,
                area: tally.get(index),
                infinite: tally.is_infinite(index),
            })
            .collect();
        let tied_cells = tally.tied_cells();
        let owned_cells = tally.owned_cells();
        tally.drop_infinite();
        let largest_bounded = tally.max_value();
        log::debug!(
            "classified {} cells: {} owned, {} tied, {} infinite seeds, largest bounded {}",
            set.bounds().cell_count(),
            owned_cells,
            tied_cells,
            tally.infinite().len(),
            largest_bounded
        );
        Self {
            bounds: set.bounds(),
            regions,
            tied_cells,
            largest_bounded,
        }
    }

    /// Seeds whose region reaches the border.
    pub fn infinite_seeds(&self) -> impl Iterator<Item = &RegionSummary> + '_ {
        self.regions.iter().filter(|r| r.infinite)
    }

    /// Seeds with a bounded region, largest first.
    pub fn bounded_by_area(&self) -> Vec<&RegionSummary> {
        let mut bounded: Vec<_> = self.regions.iter().filter(|r| !r.infinite).collect();
        bounded.sort_by(|a, b| b.area.cmp(&a.area).then(a.index.cmp(&b.index)));
        bounded
    }
}

/// Full nearest-seed classification, scanning rows in order.
pub fn classify(set: &SeedSet) -> RegionReport {
    RegionReport::from_tally(set, scan_rows(set, set.bounds().rows()))
}

/// Same as [`classify`], with rows scanned on the rayon pool.
pub fn classify_parallel(set: &SeedSet) -> RegionReport {
    let bounds = set.bounds();
    let tally = bounds
        .rows()
        .into_par_iter()
        .fold(RegionTally::new, |mut tally, y| {
            scan_row(set.seeds(), &bounds, y, &mut tally);
            tally
        })
        .reduce(RegionTally::new, RegionTally::merge);
    RegionReport::from_tally(set, tally)
}

/// Size of the largest region that does not touch the scan border.
///
/// Returns 0 when every seed is unbounded (e.g. a single seed, or a fully
/// symmetric layout).
pub fn largest_bounded_region_size(set: &SeedSet) -> usize {
    classify(set).largest_bounded
}

fn safe_cells_in_row(seeds: &[Coordinate], bounds: &Bounds, y: i32, limit: u64) -> usize {
    bounds
        .columns()
        .filter(|&x| within_limit(Coordinate::new(x, y), seeds, limit))
        .count()
}

/// True if the summed distance from `cell` to every seed is below `limit`.
/// Stops summing as soon as the limit is reached.
pub fn within_limit(cell: Coordinate, seeds: &[Coordinate], limit: u64) -> bool {
    let mut total = 0u64;
    for seed in seeds {
        total = total.saturating_add(seed.manhattan(cell));
        if total >= limit {
            return false;
        }
    }
    total < limit
}

/// Count safe cells in `rows` (clamped to the seed bounds).
pub fn safe_cells_in_rows(set: &SeedSet, rows: RangeInclusive<i32>, limit: u64) -> usize {
    let bounds = set.bounds();
    clamp_rows(&bounds, rows)
        .map(|y| safe_cells_in_row(set.seeds(), &bounds, y, limit))
        .sum()
}

/// Number of cells in the seed bounds whose summed distance to all seeds is
/// strictly less than `limit`.
pub fn safe_region_size(set: &SeedSet, limit: u64) -> usize {
    safe_cells_in_rows(set, set.bounds().rows(), limit)
}

/// Same as [`safe_region_size`], with rows scanned on the rayon pool.
pub fn safe_region_size_parallel(set: &SeedSet, limit: u64) -> usize {
    let bounds = set.bounds();
    bounds
        .rows()
        .into_par_iter()
        .map(|y| safe_cells_in_row(set.seeds(), &bounds, y, limit))
        .sum()
}

/// How the classifier walks the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    Sequential,
    #[default]
    Parallel,
}

/// Runs both queries over one seed set with a fixed scan mode.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    seeds: &'a SeedSet,
    mode: ScanMode,
}

impl<'a> Classifier<'a> {
    pub fn new(seeds: &'a SeedSet, mode: ScanMode) -> Self {
        Self { seeds, mode }
    }

    /// Pick the scan mode from a run config. Grids smaller than
    /// `parallel_min_cells` are always scanned sequentially.
    pub fn from_config(seeds: &'a SeedSet, config: &RunConfig) -> Self {
        let mode = match config.mode {
            ScanMode::Parallel if seeds.bounds().cell_count() < config.parallel_min_cells => {
                ScanMode::Sequential
            }
            mode => mode,
        };
        Self::new(seeds, mode)
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    pub fn report(&self) -> RegionReport {
        match self.mode {
            ScanMode::Sequential => classify(self.seeds),
            ScanMode::Parallel => classify_parallel(self.seeds),
        }
    }

    pub fn largest_bounded(&self) -> usize {
        self.report().largest_bounded
    }

    pub fn safe_region(&self, limit: u64) -> usize {
        match self.mode {
            ScanMode::Sequential => safe_region_size(self.seeds, limit),
            ScanMode::Parallel => safe_region_size_parallel(self.seeds, limit),
        }
    }
}
