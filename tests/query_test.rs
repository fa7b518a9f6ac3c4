// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for whole queries: validation, seeds, search, report.

mod common;

use common::seqs;
use egyptian_search::query::{self, DEFAULT_DISPLAY_LIMIT};
use egyptian_search::{CancellationToken, EgyptianError, Query, SearchConfig, StopReason};
use num_bigint::BigInt;

fn int(v: i64) -> BigInt {
    BigInt::from(v)
}

#[test]
fn test_report_for_four_seventeenths() {
    let query = Query::new(&int(4), &int(17), 3).unwrap();
    let report = query::run(&query, &SearchConfig::default(), &CancellationToken::new());
    assert!(report.is_complete());
    assert_eq!(
        report.sorted(),
        seqs(&[&[6, 17, 102], &[5, 34, 170], &[6, 15, 510], &[5, 30, 510]])
    );

    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "  4/17:  [5, 30, 510]  Engel");
    assert_eq!(lines[1], "  4/17:  [5, 29, 1233, 3039345]  Greedy");
    assert!(lines[2].starts_with(
        "  4/17: [[6, 17, 102], [5, 34, 170], [6, 15, 510], [5, 30, 510]] in "
    ));
    assert!(lines[2].ends_with(" us"));
}

#[test]
fn test_interrupted_report_lists_a_bounded_preview() {
    let query = Query::new(&int(5), &int(121), 3).unwrap();
    let config = SearchConfig {
        max_frames: Some(2_000),
        display_limit: 2,
        ..SearchConfig::default()
    };
    let report = query::run(&query, &config, &CancellationToken::new());
    assert!(!report.is_complete());
    assert!(report.solutions.len() > 2);

    let text = report.to_string();
    let last = text.lines().filter(|l| !l.is_empty()).last().unwrap();
    assert!(last.starts_with(&format!("{} - terms=[", StopReason::FrameBudget)));
    assert!(last.contains(&format!("#sols={}: ", report.solutions.len())));
    let preview = &report.solutions.discovered()[..2];
    assert!(last.ends_with(&format!("[{}, {}]... ", preview[0], preview[1])));
}

#[test]
fn test_cancelled_token_skips_seeds_and_search() {
    let token = CancellationToken::new();
    token.cancel();
    let query = Query::new(&int(2), &int(3), 3).unwrap();
    let report = query::run(&query, &SearchConfig::default(), &token);
    assert!(!report.is_complete());
    assert!(report.solutions.is_empty());
    let seeds = report.seeds.as_ref().unwrap();
    assert!(!seeds.complete);
    assert!(seeds.engel.is_empty());
    assert_eq!(report.live_prefix().len(), 0);
    assert!(report.to_string().contains("Engel (interrupted)"));
}

#[test]
fn test_batch_runs_independently() {
    let queries = Query::batch(&int(2), &int(6), &int(5), 3).unwrap();
    let token = CancellationToken::new();
    let counts: Vec<usize> = queries
        .map(|q| query::run(&q, &SearchConfig::default(), &token).solutions.len())
        .collect();
    assert_eq!(counts, vec![6, 4, 2, 1, 1]);
}

#[test]
fn test_unit_fraction_with_largest_term_count() {
    let query = Query::new(&int(1), &int(2), i64::MAX).unwrap();
    assert_eq!(query.max_terms() as u64, i64::MAX as u64);
    let report = query::run(&query, &SearchConfig::default(), &CancellationToken::new());
    assert!(report.is_complete());
    assert_eq!(report.sorted(), seqs(&[&[2]]));
    assert!(report.partial.is_empty());
}

#[test]
fn test_invalid_queries() {
    for (n, d, k) in [(0, 5, 3), (-1, 5, 3), (1, 0, 3), (1, -5, 3), (1, 5, 0), (1, 5, -2)] {
        let err = Query::new(&int(n), &int(d), k).unwrap_err();
        assert!(matches!(err, EgyptianError::InvalidInput { .. }), "{:?}", err);
    }
    assert_eq!(SearchConfig::default().display_limit, DEFAULT_DISPLAY_LIMIT);
}
