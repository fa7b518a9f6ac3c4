// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end.
//!
//! ```text
//! egypt [N_LO] [D] [K_HI] [N_HI]
//! ```
//!
//! For each numerator `n` in `N_LO..=N_HI`, prints the Engel and greedy
//! expansions of `n/D` and then every expansion with at most `K_HI` terms.
//! Ctrl-C stops the current search, prints what was found so far, and ends
//! the run successfully. A `--timeout` or `--max-frames` stop only ends the
//! current numerator.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use num_bigint::BigInt;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use egyptian_search::cancel::install_interrupt_handler;
use egyptian_search::query::{self, DEFAULT_DISPLAY_LIMIT};
use egyptian_search::{CancellationToken, Query, SearchConfig, SearchOutcome, StopReason};

#[derive(Parser, Debug)]
#[command(name = "egypt")]
#[command(about = "Find Egyptian fraction expansions of n/d with at most k terms")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// First numerator
    #[arg(default_value = "4")]
    n_lo: BigInt,

    /// Denominator
    #[arg(default_value = "17")]
    d: BigInt,

    /// Maximum number of terms
    #[arg(default_value_t = 3)]
    k_hi: i64,

    /// Last numerator (defaults to the first)
    n_hi: Option<BigInt>,

    /// Solutions listed after an interruption
    #[arg(long, default_value_t = DEFAULT_DISPLAY_LIMIT)]
    limit: usize,

    /// Stop each search after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<f64>,

    /// Stop each search after entering this many frames
    #[arg(long)]
    max_frames: Option<u64>,

    /// Skip the Engel and greedy expansions
    #[arg(long)]
    no_seeds: bool,

    /// Log search progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> Result<SearchConfig> {
        let timeout = self
            .timeout
            .map(Duration::try_from_secs_f64)
            .transpose()
            .context("invalid --timeout")?;
        Ok(SearchConfig {
            display_limit: self.limit,
            timeout,
            max_frames: self.max_frames,
            seeds: !self.no_seeds,
        })
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let n_hi = args.n_hi.clone().unwrap_or_else(|| args.n_lo.clone());
    let mut queries = Query::batch(&args.n_lo, &n_hi, &args.d, args.k_hi)
        .context("rejected query")?;
    let config = args.config()?;

    let token = CancellationToken::new();
    install_interrupt_handler(&token).context("cannot install Ctrl-C handler")?;

    while let Some(query) = queries.next() {
        let report = query::run(&query, &config, &token);
        println!("{}", report);
        if let SearchOutcome::Interrupted {
            reason: StopReason::Interrupt,
            ..
        } = report.outcome
        {
            if !queries.is_finished() {
                warn!(after = %query.target(), "skipping remaining numerators");
            }
            break;
        }
    }
    Ok(())
}
