//! Integration tests for the full classification pipeline.
//!
//! Exercises: seed text → SeedSet → Bounds → RegionReport / safe region,
//! plus properties checked over randomized seed layouts.

use chronal_logic::classifier::{
    classify, classify_parallel, largest_bounded_region_size, nearest_seed, safe_region_size,
    safe_region_size_parallel, Classifier, Ownership, ScanMode,
};
use chronal_logic::config::RunConfig;
use chronal_logic::coordinate::{parse_seed, Coordinate};
use chronal_logic::error::{ChronalError, ParseError};
use chronal_logic::seeds::SeedSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ── Helpers ────────────────────────────────────────────────────────────

const EXAMPLE: &str = "\
1, 1
1, 6
8, 3
3, 4
5, 5
8, 9
";

fn random_layout(rng: &mut StdRng) -> SeedSet {
    let count = rng.gen_range(1..=12);
    let seeds = (0..count)
        .map(|_| Coordinate::new(rng.gen_range(-15..=25), rng.gen_range(-15..=25)))
        .collect();
    SeedSet::new(seeds).unwrap()
}

fn layouts(seed: u64, n: usize) -> Vec<SeedSet> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| random_layout(&mut rng)).collect()
}

// ── Reference scenario ─────────────────────────────────────────────────

#[test]
fn reference_fixture_answers() {
    let set = SeedSet::parse(EXAMPLE).unwrap();
    assert_eq!(largest_bounded_region_size(&set), 17);
    assert_eq!(safe_region_size(&set, 32), 16);
}

#[test]
fn reference_fixture_with_config_modes() {
    let set = SeedSet::parse(EXAMPLE).unwrap();
    for mode in [ScanMode::Sequential, ScanMode::Parallel] {
        let config = RunConfig {
            limit: 32,
            mode,
            parallel_min_cells: 0,
        };
        let c = Classifier::from_config(&set, &config);
        assert_eq!(c.mode(), mode);
        assert_eq!(c.largest_bounded(), 17);
        assert_eq!(c.safe_region(config.limit), 16);
    }
}

#[test]
fn single_seed_has_no_bounded_region() {
    let set = SeedSet::parse("42, 7").unwrap();
    assert_eq!(largest_bounded_region_size(&set), 0);
    assert_eq!(safe_region_size(&set, 1), 1);
}

// ── Failures ───────────────────────────────────────────────────────────

#[test]
fn malformed_line_is_parse_error() {
    assert!(matches!(parse_seed("abc"), Err(ParseError::MissingSeparator(_))));
    assert!(matches!(
        SeedSet::parse("1, 1\nabc"),
        Err(ChronalError::Parse { line: 2, .. })
    ));
    assert!(matches!(
        SeedSet::parse("1, x"),
        Err(ChronalError::Parse {
            line: 1,
            source: ParseError::InvalidNumber { .. }
        })
    ));
}

#[test]
fn empty_input_fails_before_scan() {
    assert!(matches!(SeedSet::parse(""), Err(ChronalError::EmptyInput)));
    assert!(matches!(SeedSet::new(Vec::new()), Err(ChronalError::EmptyInput)));
}

// ── Properties over random layouts ─────────────────────────────────────

#[test]
fn queries_are_deterministic() {
    for set in layouts(7, 25) {
        assert_eq!(classify(&set), classify(&set));
        assert_eq!(safe_region_size(&set, 200), safe_region_size(&set, 200));
    }
}

#[test]
fn safe_region_is_monotonic_in_limit() {
    for set in layouts(11, 25) {
        let mut previous = 0;
        for limit in (0..=600).step_by(25) {
            let size = safe_region_size(&set, limit);
            assert!(
                size >= previous,
                "limit {} shrank safe region {} -> {}",
                limit,
                previous,
                size
            );
            previous = size;
        }
    }
}

#[test]
fn parallel_scan_matches_sequential() {
    for set in layouts(23, 25) {
        assert_eq!(classify_parallel(&set), classify(&set));
        for limit in [1, 50, 150, 400] {
            assert_eq!(
                safe_region_size_parallel(&set, limit),
                safe_region_size(&set, limit)
            );
        }
    }
}

#[test]
fn tied_cells_belong_to_no_region() {
    for set in layouts(31, 25) {
        let report = classify(&set);
        let bounds = set.bounds();
        let tied = bounds
            .cells()
            .filter(|&c| matches!(nearest_seed(c, set.seeds()), Ownership::Tied { .. }))
            .count();
        let owned: usize = report.regions.iter().map(|r| r.area).sum();
        assert_eq!(report.tied_cells, tied);
        assert_eq!(owned + tied, bounds.cell_count() as usize);
    }
}

#[test]
fn border_owners_are_excluded() {
    for set in layouts(47, 25) {
        let report = classify(&set);
        let bounds = set.bounds();
        for cell in bounds.cells().filter(|&c| bounds.is_border(c)) {
            if let Ownership::Owned(i) = nearest_seed(cell, set.seeds()) {
                assert!(report.regions[i].infinite, "seed {} owns {}", i, cell);
            }
        }
        let expected = report
            .regions
            .iter()
            .filter(|r| !r.infinite)
            .map(|r| r.area)
            .max()
            .unwrap_or(0);
        assert_eq!(report.largest_bounded, expected);
    }
}

#[test]
fn report_serializes_to_json() {
    let set = SeedSet::parse(EXAMPLE).unwrap();
    let report = classify(&set);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["largest_bounded"], 17);
    assert_eq!(json["regions"][4]["seed"]["x"], 5);
    assert_eq!(json["bounds"]["y_max"], 9);
}
