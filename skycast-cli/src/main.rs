//! Binary crate for the `skycast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Assembling configuration for the core library
//! - Human-friendly output formatting

use clap::Parser;
use env_logger::Env;

use skycast_core::config::Config;

mod cli;
mod render;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cmd = cli::Cli::parse();
    let result = match Config::from_env() {
        Ok(config) => cmd.run(config).await,
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
