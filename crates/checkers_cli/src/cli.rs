use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use checkers_core::Player;
use clap::{Parser, ValueEnum};

use crate::config::{CliConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "checkers",
    version,
    about = "Play flying-king checkers in the terminal, one cell per line"
)]
pub struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File holding a board diagram to start from instead of the usual setup
    #[arg(short, long)]
    pub position: Option<PathBuf>,

    /// Side to move first
    #[arg(long, value_enum)]
    pub first: Option<Side>,

    /// How to print the game after each input
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Log filter directive (RUST_LOG still wins)
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Side {
    One,
    Two,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::One => Player::One,
            Side::Two => Player::Two,
        }
    }
}

impl Args {
    /// Configuration from the file named by `--config` (or defaults), with
    /// the command line flags layered on top.
    pub fn resolve_config(&self) -> anyhow::Result<CliConfig> {
        let mut cfg = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        if let Some(path) = &self.position {
            let diagram = fs::read_to_string(path)
                .with_context(|| format!("failed to read position file {}", path.display()))?;
            cfg.position = Some(diagram);
        }
        if let Some(side) = self.first {
            cfg.first_player = side.into();
        }
        if let Some(output) = self.output {
            cfg.output = output;
        }
        if let Some(filter) = &self.log {
            cfg.log_filter = filter.clone();
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "checkers", "--first", "two", "--output", "json", "--log", "debug",
        ])
        .unwrap();
        let cfg = args.resolve_config().unwrap();
        assert_eq!(cfg.first_player, Player::Two);
        assert_eq!(cfg.output, OutputFormat::Json);
        assert_eq!(cfg.log_filter, "debug");
        assert!(cfg.position.is_none());
    }

    #[test]
    fn test_no_flags_gives_defaults() {
        let args = Args::try_parse_from(["checkers"]).unwrap();
        assert_eq!(args.resolve_config().unwrap(), CliConfig::default());
    }

    #[test]
    fn test_missing_position_file_is_reported() {
        let args =
            Args::try_parse_from(["checkers", "--position", "/nonexistent/board.txt"]).unwrap();
        let err = args.resolve_config().unwrap_err();
        assert!(err.to_string().contains("position file"));
    }

    #[test]
    fn test_bad_side_is_rejected() {
        assert!(Args::try_parse_from(["checkers", "--first", "three"]).is_err());
    }
}
