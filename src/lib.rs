//! Fichalia library root.
//! Exposes the pairing engine (`core::calculator`), the entry store (`db`)
//! and the CLI front end built on top of them.

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use context::AppContext;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, ctx),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, ctx),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    logging::init()?;

    let cfg = Config::load()?;
    let ctx = AppContext::resolve(&cli, cfg)?;
    tracing::debug!(subject = %ctx.subject_id, zone = %ctx.zone, db = %ctx.config.database, "context resolved");

    dispatch(&cli, &ctx)
}
