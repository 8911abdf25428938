//! Pure region classification logic for Chronal.
//!
//! This crate takes a fixed set of 2-D integer seeds, partitions their
//! bounding grid by nearest seed (Manhattan distance) and counts the cells
//! whose summed distance to every seed stays under a limit. Functions take
//! plain data and return results, so they are unit-testable and usable from
//! the CLI, benchmarks or any other caller.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`classifier`] | Nearest-seed ownership, largest bounded region, safe region |
//! | [`config`] | Run configuration (limit, scan mode) with JSON loading |
//! | [`coordinate`] | `Coordinate`, Manhattan distance, `"x, y"` line parsing |
//! | [`error`] | Typed errors for parsing, empty input, invalid limits |
//! | [`seeds`] | `SeedSet` and its inclusive `Bounds` rectangle |
//! | [`tally`] | Per-seed cell counter with infinite-seed tracking |
//!
//! ```
//! use chronal_logic::classifier::{largest_bounded_region_size, safe_region_size};
//! use chronal_logic::seeds::SeedSet;
//!
//! let seeds = SeedSet::parse("1, 1\n1, 6\n8, 3\n3, 4\n5, 5\n8, 9").unwrap();
//! assert_eq!(largest_bounded_region_size(&seeds), 17);
//! assert_eq!(safe_region_size(&seeds, 32), 16);
//! ```

pub mod classifier;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod seeds;
pub mod tally;

pub use classifier::{Classifier, Ownership, RegionReport, RegionSummary, ScanMode};
pub use config::RunConfig;
pub use coordinate::Coordinate;
pub use error::{ChronalError, ParseError};
pub use seeds::{Bounds, SeedSet};
