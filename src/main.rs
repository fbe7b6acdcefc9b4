//! Pokedex CLI - explore location areas and catch Pokemon
//!
//! An interactive REPL that queries PokeAPI for location and Pokemon data,
//! keeps a registry of caught Pokemon, and caches raw response bodies in a
//! concurrent time-expiring cache so repeated commands skip the network.

use std::error::Error;
use std::io::Write;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedexcli::app::{App, Outcome};
use pokedexcli::cache::ResponseCache;
use pokedexcli::cli::{Cli, StartupConfig};
use pokedexcli::commands::Command;
use pokedexcli::data::PokeApi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Log to stderr so REPL output on stdout stays clean.
    // Defaults to "warn", can be overridden with the RUST_LOG env var.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedexcli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli)?;

    let cache =
        ResponseCache::with_sweep_interval(config.cache_lifetime, config.sweep_interval)?;
    let api = PokeApi::new(cache.clone()).with_base_url(config.base_url);
    let mut app = App::new(api);

    info!(
        ttl_secs = config.cache_lifetime.as_secs(),
        sweep_secs = config.sweep_interval.as_secs(),
        "response cache ready"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("Pokedex > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // EOF (ctrl-D or a closed pipe) ends the session like `exit`.
            println!();
            break;
        };

        match Command::parse(&line) {
            None => continue,
            Some(Ok(command)) => {
                if app.execute(command).await == Outcome::Exit {
                    break;
                }
            }
            Some(Err(err)) => println!("{err}"),
        }
    }

    cache.shutdown().await;
    Ok(())
}
