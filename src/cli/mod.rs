//! CLI for the user directory API
//!
//! Subcommands:
//! - `serve`: run the HTTP server (default mode)
//! - `seed`: load fixture users into the database

pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

/// User Directory API - manage user records with creation analytics
#[derive(Parser)]
#[command(name = "user-directory-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Load fixture users into the database
    Seed,
}
