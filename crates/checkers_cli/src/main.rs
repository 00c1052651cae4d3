//! Terminal driver for the checkers rule engine.
//!
//! Reads one command per line from stdin (`<row> <col>`, `board`, `new`,
//! `quit`) and prints the board and highlights after each one.

mod cli;
mod command;
mod config;
mod render;
mod session;

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::session::Session;

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = args.resolve_config()?;
    init_tracing(&cfg.log_filter);

    let board = cfg
        .initial_board()
        .context("invalid starting position")?;
    info!(first = ?cfg.first_player, output = ?cfg.output, "starting session");

    let mut session = Session::new(board, cfg.first_player, cfg.output);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session
        .run(stdin.lock(), &mut stdout)
        .context("terminal I/O failed")?;
    Ok(())
}
