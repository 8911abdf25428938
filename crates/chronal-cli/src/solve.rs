//! `chronal solve`: load seeds, run both queries, print the answers.

use std::fs;

use anyhow::{Context, Result};
use chronal_logic::classifier::{safe_cells_in_rows, scan_rows, Classifier, RegionReport};
use chronal_logic::config::RunConfig;
use chronal_logic::seeds::SeedSet;
use chronal_logic::tally::RegionTally;
use chronal_logic::ScanMode;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;

use crate::{input, SolveArgs, TITLE};

#[derive(Debug, Serialize)]
struct SolveOutput<'a> {
    title: &'a str,
    part_one: usize,
    part_two: usize,
    limit: u64,
    mode: ScanMode,
    report: &'a RegionReport,
}

/// Resolve the run configuration: file first, then flags on top.
pub fn resolve_config(args: &SolveArgs) -> Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            RunConfig::from_json(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => RunConfig::default(),
    };
    if let Some(limit) = args.limit {
        config.limit = limit;
    }
    if args.sequential {
        config.mode = ScanMode::Sequential;
    }
    config.validate()?;
    Ok(config)
}

fn progress_bar(rows: u64, label: &str) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("{msg:>14} {wide_bar} {pos}/{len} rows ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    let pb = ProgressBar::new(rows);
    pb.set_style(style);
    pb.set_message(label.to_string());
    pb
}

/// Classify row by row, advancing `pb` once per row.
fn classify_with_progress(set: &SeedSet, mode: ScanMode, pb: ProgressBar) -> RegionReport {
    let rows = set.bounds().rows();
    let tally = match mode {
        ScanMode::Sequential => rows.fold(RegionTally::new(), |tally, y| {
            pb.inc(1);
            tally.merge(scan_rows(set, y..=y))
        }),
        ScanMode::Parallel => rows
            .into_par_iter()
            .progress_with(pb.clone())
            .map(|y| scan_rows(set, y..=y))
            .reduce(RegionTally::new, RegionTally::merge),
    };
    pb.finish_and_clear();
    RegionReport::from_tally(set, tally)
}

fn safe_region_with_progress(set: &SeedSet, mode: ScanMode, limit: u64, pb: ProgressBar) -> usize {
    let rows = set.bounds().rows();
    let count: usize = match mode {
        ScanMode::Sequential => rows
            .map(|y| {
                pb.inc(1);
                safe_cells_in_rows(set, y..=y, limit)
            })
            .sum(),
        ScanMode::Parallel => rows
            .into_par_iter()
            .progress_with(pb.clone())
            .map(|y| safe_cells_in_rows(set, y..=y, limit))
            .sum(),
    };
    pb.finish_and_clear();
    count
}

pub fn run(args: &SolveArgs, verbose: bool) -> Result<()> {
    let config = resolve_config(args)?;
    let seeds = input::load_seeds(&args.input)?;
    let classifier = Classifier::from_config(&seeds, &config);
    let mode = classifier.mode();
    log::info!(
        "scanning {} cells ({:?}, limit {})",
        seeds.bounds().cell_count(),
        mode,
        config.limit
    );

    let (report, part_two) = if args.quiet || args.json {
        (classifier.report(), classifier.safe_region(config.limit))
    } else {
        let rows = seeds.bounds().height();
        let report = classify_with_progress(&seeds, mode, progress_bar(rows, "regions"));
        let safe = safe_region_with_progress(
            &seeds,
            mode,
            config.limit,
            progress_bar(rows, "safe region"),
        );
        (report, safe)
    };
    let part_one = report.largest_bounded;

    if args.json {
        let output = SolveOutput {
            title: TITLE,
            part_one,
            part_two,
            limit: config.limit,
            mode,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", TITLE);
    println!("Part one: {}", part_one);
    println!("Part two: {}", part_two);

    if verbose {
        println!();
        println!("{} tied cells", report.tied_cells);
        for r in &report.regions {
            let tag = if r.infinite { "infinite" } else { "bounded" };
            println!("  #{:<3} {:<12} {:>6} {}", r.index, r.seed.to_string(), r.area, tag);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronal_logic::classifier::{classify, safe_region_size};
    use std::path::PathBuf;

    fn args() -> SolveArgs {
        SolveArgs {
            input: PathBuf::from("unused.txt"),
            limit: None,
            sequential: false,
            config: None,
            json: false,
            quiet: true,
        }
    }

    fn example() -> SeedSet {
        SeedSet::parse("1, 1\n1, 6\n8, 3\n3, 4\n5, 5\n8, 9").unwrap()
    }

    #[test]
    fn flags_override_defaults() {
        let mut a = args();
        a.limit = Some(32);
        a.sequential = true;
        let config = resolve_config(&a).unwrap();
        assert_eq!(config.limit, 32);
        assert_eq!(config.mode, ScanMode::Sequential);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut a = args();
        a.limit = Some(0);
        assert!(resolve_config(&a).is_err());
    }

    #[test]
    fn progress_scan_matches_plain_scan() {
        let set = example();
        for mode in [ScanMode::Sequential, ScanMode::Parallel] {
            let report = classify_with_progress(&set, mode, ProgressBar::hidden());
            assert_eq!(report, classify(&set));
            let safe = safe_region_with_progress(&set, mode, 32, ProgressBar::hidden());
            assert_eq!(safe, safe_region_size(&set, 32));
        }
    }
}
