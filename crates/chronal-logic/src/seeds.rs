//! Seed sets and their bounding rectangle.
//!
//! A `SeedSet` is built once from parsed coordinates and never changes
//! afterwards. The index of a seed inside the set is its region id for the
//! classifier. `Bounds` is the minimal inclusive rectangle containing every
//! seed and is computed exactly once per set.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::ChronalError;

/// Inclusive scan rectangle `[x_min, x_max] × [y_min, y_max]`.
///
/// Invariant: `x_min <= x_max` and `y_min <= y_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Bounds {
    /// Number of columns in the rectangle.
    pub fn width(&self) -> u64 {
        self.x_max.abs_diff(self.x_min) as u64 + 1
    }

    /// Number of rows in the rectangle.
    pub fn height(&self) -> u64 {
        self.y_max.abs_diff(self.y_min) as u64 + 1
    }

    /// Number of cells, saturating at `u64::MAX` for rectangles spanning the
    /// whole `i32` plane.
    pub fn cell_count(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    /// True if the cell lies on the rectangle's outer edge.
    pub fn is_border(&self, c: Coordinate) -> bool {
        c.x == self.x_min || c.x == self.x_max || c.y == self.y_min || c.y == self.y_max
    }

    /// Row indices (y values) of the rectangle, top to bottom.
    pub fn rows(&self) -> RangeInclusive<i32> {
        self.y_min..=self.y_max
    }

    /// Column indices (x values) of the rectangle, left to right.
    pub fn columns(&self) -> RangeInclusive<i32> {
        self.x_min..=self.x_max
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.rows()
            .flat_map(move |y| self.columns().map(move |x| Coordinate::new(x, y)))
    }
}

/// Compute the minimal bounding rectangle of `seeds`.
///
/// Returns `EmptyInput` when there are no seeds, since bounds are undefined.
pub fn compute_bounds(seeds: &[Coordinate]) -> Result<Bounds, ChronalError> {
    let first = seeds.first().ok_or(ChronalError::EmptyInput)?;
    let init = Bounds {
        x_min: first.x,
        x_max: first.x,
        y_min: first.y,
        y_max: first.y,
    };
    Ok(seeds.iter().skip(1).fold(init, |b, s| Bounds {
        x_min: b.x_min.min(s.x),
        x_max: b.x_max.max(s.x),
        y_min: b.y_min.min(s.y),
        y_max: b.y_max.max(s.y),
    }))
}

/// Parse newline-separated seed lines. Blank lines are skipped; the first
/// malformed line aborts with its 1-based line number.
pub fn parse_seeds(text: &str) -> Result<Vec<Coordinate>, ChronalError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.parse::<Coordinate>()
                .map_err(|source| ChronalError::Parse { line: i + 1, source })
        })
        .collect()
}

/// A fixed, non-empty set of seeds with its precomputed bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSet {
    seeds: Vec<Coordinate>,
    bounds: Bounds,
}

impl SeedSet {
    /// Build a seed set, failing with `EmptyInput` if `seeds` is empty.
    pub fn new(seeds: Vec<Coordinate>) -> Result<Self, ChronalError> {
        let bounds = compute_bounds(&seeds)?;
        log::debug!(
            "seed set: {} seeds, bounds x {}..={} y {}..={} ({} cells)",
            seeds.len(),
            bounds.x_min,
            bounds.x_max,
            bounds.y_min,
            bounds.y_max,
            bounds.cell_count()
        );
        Ok(Self { seeds, bounds })
    }

    /// Parse seed lines and build the set in one step.
    pub fn parse(text: &str) -> Result<Self, ChronalError> {
        Self::new(parse_seeds(text)?)
    }

    pub fn seeds(&self) -> &[Coordinate] {
        &self.seeds
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Coordinate> {
        self.seeds.get(index).copied()
    }
}
