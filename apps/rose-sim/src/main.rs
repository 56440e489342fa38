//! # rose-sim
//!
//! Runs the Gilded Rose inventory forward day by day and prints a snapshot of
//! every item for each day.
//!
//! ## Usage
//! ```bash
//! # Built-in stock, day 0 through day 2
//! cargo run -p rose-sim
//!
//! # Thirty days as JSON lines
//! cargo run -p rose-sim -- 30 --format json
//!
//! # Custom stock, admitting legendary items that are still listed
//! cargo run -p rose-sim -- --inventory stock.toml --lenient-legendary
//! ```
//!
//! Logs go to stderr (`RUST_LOG`, default `info`); the report goes to stdout.

mod cli;
mod config;
mod report;
mod stock;

use anyhow::Context;
use rose_core::Inventory;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Command;
use crate::config::SimConfig;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = match cli::parse(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        Command::Run(args) => args,
    };

    let mut config = SimConfig::load(args.config.clone()).context("Failed to load configuration")?;
    config.apply_cli(&args);
    config.validate()?;

    info!(
        days = config.days,
        format = %config.format,
        inventory = ?config.inventory,
        enforce_legendary_expiration = config.validation.enforce_legendary_expiration,
        "Configuration loaded"
    );

    let items = match config.inventory {
        Some(ref path) => stock::load(path)
            .with_context(|| format!("Failed to load stock from {}", path.display()))?,
        None => stock::default_stock(),
    };

    let mut inventory =
        Inventory::with_policy(items, config.validation).context("Stock rejected")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::run(&mut inventory, config.days, config.format, &mut out)?;

    info!(days = config.days, items = inventory.len(), "Simulation complete");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
