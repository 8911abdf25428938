//! Headless self-check harness.
//!
//! Runs the classifier against known scenarios and randomized layouts
//! entirely in-process and prints one line per check. Returns false if any
//! check failed so `main` can exit non-zero.

use chronal_logic::classifier::{
    classify, classify_parallel, largest_bounded_region_size, safe_region_size,
    safe_region_size_parallel,
};
use chronal_logic::coordinate::{parse_seed, Coordinate};
use chronal_logic::error::ChronalError;
use chronal_logic::seeds::SeedSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const REFERENCE: &str = "1, 1\n1, 6\n8, 3\n3, 4\n5, 5\n8, 9";

/// Layouts per randomized sweep.
const SWEEP_LAYOUTS: usize = 40;

// ── Check harness ──────────────────────────────────────────────────────

struct CheckResult {
    name: String,
    passed: bool,
    detail: String,
}

pub fn run(verbose: bool) -> bool {
    println!("=== {} self-check ===\n", crate::TITLE);

    let mut results = Vec::new();

    // 1. Reference fixture
    results.extend(check_reference());

    // 2. Edge cases
    results.extend(check_edge_cases());

    // 3. Input failures
    results.extend(check_failures());

    // 4. Randomized property sweeps
    results.extend(check_properties(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );
    log::info!("self-check finished: {} passed, {} failed", passed, failed);

    failed == 0
}

// ── 1. Reference fixture ───────────────────────────────────────────────

fn check_reference() -> Vec<CheckResult> {
    println!("--- Reference fixture ---");
    let mut results = Vec::new();

    let set = match SeedSet::parse(REFERENCE) {
        Ok(set) => set,
        Err(e) => {
            results.push(CheckResult {
                name: "reference_parse".into(),
                passed: false,
                detail: format!("parse error: {}", e),
            });
            return results;
        }
    };

    let largest = largest_bounded_region_size(&set);
    results.push(CheckResult {
        name: "reference_largest_bounded".into(),
        passed: largest == 17,
        detail: format!("largest bounded region = {} (expected 17)", largest),
    });

    let safe = safe_region_size(&set, 32);
    results.push(CheckResult {
        name: "reference_safe_region".into(),
        passed: safe == 16,
        detail: format!("safe region below 32 = {} (expected 16)", safe),
    });

    let report = classify(&set);
    let infinite: Vec<String> = report.infinite_seeds().map(|r| r.seed.to_string()).collect();
    results.push(CheckResult {
        name: "reference_infinite_seeds".into(),
        passed: infinite.len() == 4,
        detail: format!("infinite: {}", infinite.join(" ")),
    });

    results
}

// ── 2. Edge cases ──────────────────────────────────────────────────────

fn check_edge_cases() -> Vec<CheckResult> {
    println!("--- Edge cases ---");
    let mut results = Vec::new();

    match SeedSet::new(vec![Coordinate::new(5, 5)]) {
        Ok(single) => {
            let largest = largest_bounded_region_size(&single);
            results.push(CheckResult {
                name: "single_seed_unbounded".into(),
                passed: largest == 0,
                detail: format!("single seed → {} (expected 0)", largest),
            });
        }
        Err(e) => results.push(CheckResult {
            name: "single_seed_unbounded".into(),
            passed: false,
            detail: format!("unexpected error: {}", e),
        }),
    }

    match SeedSet::new(vec![Coordinate::new(0, 0), Coordinate::new(0, 0)]) {
        Ok(dupes) => {
            let report = classify(&dupes);
            let owned: usize = report.regions.iter().map(|r| r.area).sum();
            results.push(CheckResult {
                name: "duplicate_seeds_tie".into(),
                passed: owned == 0 && report.tied_cells == 1,
                detail: format!("owned {}, tied {}", owned, report.tied_cells),
            });
        }
        Err(e) => results.push(CheckResult {
            name: "duplicate_seeds_tie".into(),
            passed: false,
            detail: format!("unexpected error: {}", e),
        }),
    }

    results
}

// ── 3. Input failures ──────────────────────────────────────────────────

fn check_failures() -> Vec<CheckResult> {
    println!("--- Input failures ---");
    let mut results = Vec::new();

    let bad = parse_seed("abc");
    results.push(CheckResult {
        name: "parse_rejects_garbage".into(),
        passed: bad.is_err(),
        detail: match bad {
            Ok(c) => format!("\"abc\" parsed as {}", c),
            Err(e) => e.to_string(),
        },
    });

    let empty = SeedSet::parse("");
    results.push(CheckResult {
        name: "empty_input_rejected".into(),
        passed: matches!(empty, Err(ChronalError::EmptyInput)),
        detail: match empty {
            Ok(set) => format!("empty input produced {} seeds", set.len()),
            Err(e) => e.to_string(),
        },
    });

    results
}

// ── 4. Randomized properties ───────────────────────────────────────────

fn random_layout(rng: &mut StdRng) -> Result<SeedSet, ChronalError> {
    let count = rng.gen_range(1..=15);
    let seeds = (0..count)
        .map(|_| Coordinate::new(rng.gen_range(0..40), rng.gen_range(0..40)))
        .collect();
    SeedSet::new(seeds)
}

fn check_properties(verbose: bool) -> Vec<CheckResult> {
    println!("--- Randomized properties ---");
    let mut rng = StdRng::seed_from_u64(201806);
    let layouts: Vec<SeedSet> = match (0..SWEEP_LAYOUTS)
        .map(|_| random_layout(&mut rng))
        .collect::<Result<_, _>>()
    {
        Ok(layouts) => layouts,
        Err(e) => {
            return vec![CheckResult {
                name: "random_layouts".into(),
                passed: false,
                detail: format!("layout generation failed: {}", e),
            }];
        }
    };
    if verbose {
        println!("  {} layouts", layouts.len());
    }

    let mut deterministic = true;
    let mut monotonic = true;
    let mut parallel_equal = true;
    for set in &layouts {
        let report = classify(set);
        if report != classify(set) || safe_region_size(set, 300) != safe_region_size(set, 300) {
            deterministic = false;
        }
        if report != classify_parallel(set)
            || safe_region_size(set, 300) != safe_region_size_parallel(set, 300)
        {
            parallel_equal = false;
        }
        let mut previous = 0;
        for limit in (0..=800).step_by(50) {
            let size = safe_region_size(set, limit);
            if size < previous {
                monotonic = false;
            }
            previous = size;
        }
    }

    vec![
        CheckResult {
            name: "queries_deterministic".into(),
            passed: deterministic,
            detail: "repeated scans agree".into(),
        },
        CheckResult {
            name: "safe_region_monotonic".into(),
            passed: monotonic,
            detail: "safe region never shrinks as the limit grows".into(),
        },
        CheckResult {
            name: "parallel_matches_sequential".into(),
            passed: parallel_equal,
            detail: "row-parallel scans equal sequential scans".into(),
        },
    ]
}
