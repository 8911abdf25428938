//! Integer grid coordinates and seed-line parsing.
//!
//! Seeds arrive one per line as `<x>, <y>`. A malformed line is always an
//! error, never a zeroed coordinate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Separator between the two fields of a seed line.
pub const SEED_SEPARATOR: &str = ", ";

/// A point on the integer grid. Identity is by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance `|x1-x2| + |y1-y2|`.
    ///
    /// Widened to `u64` so any pair of `i32` coordinates fits.
    pub const fn manhattan(self, other: Coordinate) -> u64 {
        self.x.abs_diff(other.x) as u64 + self.y.abs_diff(other.y) as u64
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (x, y) = line
            .split_once(SEED_SEPARATOR)
            .ok_or_else(|| ParseError::MissingSeparator(line.to_string()))?;
        Ok(Self::new(parse_field(x)?, parse_field(y)?))
    }
}

fn parse_field(text: &str) -> Result<i32, ParseError> {
    text.parse().map_err(|source| ParseError::InvalidNumber {
        text: text.to_string(),
        source,
    })
}

/// Parse a single `<x>, <y>` seed line.
pub fn parse_seed(line: &str) -> Result<Coordinate, ParseError> {
    line.parse()
}
