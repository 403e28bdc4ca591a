//! HTTP server command for the leaderboard API
//!
//! Builds an empty rank index, seeds it in the background and serves the
//! leaderboard routes until shutdown.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rankctl_core::RankIndex;
use rankctl_server::{run_server, ChurnPolicy, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "RANKCTL_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on (PORT is honoured for PaaS deployments)
    #[arg(long, short = 'p', env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Number of synthetic users seeded at startup (0 disables seeding)
    #[arg(long, env = "SEED_USERS", default_value_t = 10_000)]
    pub seed_users: usize,

    /// Restrict CORS to localhost origins instead of allowing any origin
    #[arg(long)]
    pub cors_localhost: bool,

    /// Minimum users touched by one bulk score update
    #[arg(long, default_value_t = 5000)]
    pub churn_min: usize,

    /// Maximum users touched by one bulk score update
    #[arg(long, default_value_t = 7000)]
    pub churn_max: usize,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
        cors_permissive: !args.cors_localhost,
        seed_count: args.seed_users,
        churn: ChurnPolicy::new(args.churn_min, args.churn_max),
    };

    tracing::info!(
        seed_users = config.seed_count,
        "Starting rankctl server on {}",
        config.bind_addr
    );

    let index = Arc::new(RankIndex::new());

    // Run server (blocks until shutdown)
    run_server(index, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = ServeArgs::try_parse_from(["serve"]).unwrap();
        assert!(!args.cors_localhost);
        assert_eq!(args.churn_min, 5000);
        assert_eq!(args.churn_max, 7000);
    }

    #[test]
    fn explicit_flags() {
        let args = ServeArgs::try_parse_from([
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--seed-users",
            "0",
            "--cors-localhost",
        ])
        .unwrap();
        assert_eq!(args.host, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(args.port, 9000);
        assert_eq!(args.seed_users, 0);
        assert!(args.cors_localhost);
    }
}
