//! Puzzle input loading.
//!
//! Inputs live next to the checkout as `../input/<year>-<day>.txt`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chronal_logic::seeds::SeedSet;

pub const YEAR: u32 = 2018;
pub const DAY: u32 = 6;

/// Conventional input path for a puzzle day, e.g. `../input/2018-06.txt`.
pub fn default_input_path(day: u32) -> PathBuf {
    PathBuf::from(format!("../input/{}-{:02}.txt", YEAR, day))
}

/// Read and parse a seed file.
pub fn load_seeds(path: &Path) -> Result<SeedSet> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let seeds = SeedSet::parse(&text)
        .with_context(|| format!("invalid seed file {}", path.display()))?;
    log::info!("loaded {} seeds from {}", seeds.len(), path.display());
    Ok(seeds)
}
