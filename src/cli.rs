//! Command-line interface parsing for the Pokedex CLI
//!
//! This module handles parsing of CLI arguments using clap, including the
//! cache tuning flags, and their validation into a startup configuration.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

/// Errors from validating CLI arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// The cache TTL was zero.
    #[error("--cache-ttl must be greater than zero")]
    ZeroCacheTtl,

    /// The sweep interval was zero.
    #[error("--sweep-interval must be greater than zero")]
    ZeroSweepInterval,
}

/// Pokedex CLI - explore location areas and catch Pokemon from your terminal
#[derive(Parser, Debug)]
#[command(name = "pokedexcli")]
#[command(about = "An interactive Pokedex backed by PokeAPI")]
#[command(version)]
pub struct Cli {
    /// How long cached API responses stay fresh, in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub cache_ttl: u64,

    /// How often stale responses are evicted, in seconds (defaults to the TTL)
    #[arg(long, value_name = "SECONDS")]
    pub sweep_interval: Option<u64>,

    /// Base URL of the PokeAPI endpoint
    #[arg(long, value_name = "URL", default_value = "https://pokeapi.co/api/v2")]
    pub base_url: String,
}

/// Configuration derived from CLI arguments for application startup.
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// How long a cached response body stays fresh.
    pub cache_lifetime: Duration,
    /// How often the cache sweep runs.
    pub sweep_interval: Duration,
    /// Base URL for every API request.
    pub base_url: String,
}

impl StartupConfig {
    /// Validates parsed CLI arguments into a startup configuration.
    ///
    /// Zero durations are rejected here rather than deep inside the cache,
    /// so the user sees the offending flag name.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.cache_ttl == 0 {
            return Err(CliError::ZeroCacheTtl);
        }
        if cli.sweep_interval == Some(0) {
            return Err(CliError::ZeroSweepInterval);
        }

        let cache_lifetime = Duration::from_secs(cli.cache_ttl);
        let sweep_interval = cli
            .sweep_interval
            .map(Duration::from_secs)
            .unwrap_or(cache_lifetime);

        Ok(Self {
            cache_lifetime,
            sweep_interval,
            base_url: cli.base_url.clone(),
        })
    }
}
