//! Fuhrpark - vehicle fleet management
//!
//! A CLI tool for managing brand/model master data, fleet vehicles with
//! depreciation and repair bookkeeping, users, and a trip log. All state is
//! stored as JSON files in the data directory.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
