// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::str::FromStr;
use tacit_config::load_config;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod answered;
mod cli;
mod create;
mod list;
mod state;
mod stats;
mod submit;

fn setup_simple_tracing(log_level: &str) -> Result<()> {
    let level = Level::from_str(log_level)
        .with_context(|| format!("unknown log level '{}'", log_level))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    setup_simple_tracing(&config.log_level)?;

    let mut engine = state::load(&config)?;

    match cli.command {
        Commands::Create(args) => create::execute(&mut engine, args)?,
        Commands::Submit(args) => submit::execute(&mut engine, args)?,
        Commands::Stats(args) => stats::execute(&mut engine, args)?,
        Commands::List => list::execute(&engine)?,
        Commands::Answered(args) => answered::execute(&engine, args)?,
    }

    state::save(&config, &engine)
}
