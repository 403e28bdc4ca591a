//! Offline leaderboard simulation
//!
//! Seeds an in-memory index, optionally churns it, and prints one page of
//! the resulting leaderboard. Useful for eyeballing rank behaviour without
//! running the server.

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rankctl_core::{seed_participants, RankIndex, RankedEntry};
use rankctl_server::{randomize_ratings, ChurnPolicy};

/// Arguments for the simulate command
#[derive(Parser, Debug)]
pub struct SimulateArgs {
    /// Number of synthetic users to seed
    #[arg(long, default_value_t = 1000)]
    pub users: usize,

    /// Bulk score updates to apply after seeding
    #[arg(long, default_value_t = 0)]
    pub churn_rounds: usize,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Rows to skip
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Rows to print
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run_simulate(args: SimulateArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let index = RankIndex::new();
    seed_participants(&index, args.users, &mut rng);

    for round in 1..=args.churn_rounds {
        let report = randomize_ratings(&index, ChurnPolicy::default(), &mut rng)
            .with_context(|| format!("churn round {} failed", round))?;
        tracing::info!(round, updated = report.updated, "churn round complete");
    }

    let page = index.list_range(args.offset, args.limit);
    if args.json {
        let out = serde_json::to_string_pretty(&page).context("failed to encode leaderboard")?;
        println!("{}", out);
    } else {
        print!("{}", render_table(&page));
    }

    Ok(())
}

fn render_table(rows: &[RankedEntry]) -> String {
    let mut out = format!("{:>6}  {:<24}  {:>6}\n", "RANK", "USERNAME", "RATING");
    for row in rows {
        out.push_str(&format!(
            "{:>6}  {:<24}  {:>6}\n",
            row.rank, row.username, row.rating
        ));
    }
    out
}
