//! rankctl CLI - live leaderboard server and tooling
//!
//! Entry point for the `rankctl` binary:
//! - `serve`: run the HTTP leaderboard API (seeds synthetic users on startup)
//! - `simulate`: seed and churn an in-memory leaderboard, print a page
//! - `completions`: shell completion scripts

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "rankctl",
    author,
    version,
    about = "Live leaderboard with dense ranking over bounded integer ratings",
    long_about = "Serve a concurrent in-memory leaderboard over HTTP. Ratings are bucketed \
                  by value, so rank lookups cost at most one scan of the rating range."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP leaderboard API
    Serve(commands::serve::ServeArgs),
    /// Seed an in-memory leaderboard and print a page of it
    Simulate(commands::simulate::SimulateArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Local .env only; deployments set the environment directly
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    if !dotenv_loaded {
        tracing::debug!("No .env file found, using process environment");
    }

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await?,
        Commands::Simulate(args) => commands::simulate::run_simulate(args)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
