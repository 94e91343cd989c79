mod cli;
mod display;
mod engine;
mod error;
mod models;
mod session;

use clap::Parser;
use crate::cli::Cli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    cli::run(cli);
}
