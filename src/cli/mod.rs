//! CLI module for the pharmacy inventory backend
//!
//! Subcommands:
//! - `serve`: run the HTTP API (default)
//! - `migrate`: apply pending schema migrations
//! - `seed`: insert demo users for local development

pub mod migrate;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

/// Pharmacy inventory - stock, sales and purchasing backend
#[derive(Parser)]
#[command(name = "pharmacy-inventory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default)
    Serve,

    /// Apply pending database migrations
    Migrate(migrate::MigrateArgs),

    /// Seed demo users into the database
    Seed,
}
