//! Settings for the terminal driver, read from TOML.
//!
//! ```toml
//! log_filter = "info"
//! first_player = "two"
//! output = "json"
//! position = """
//! x.x.x.x.
//! ...
//! """
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use checkers_core::{Board, CheckersError, Player};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Board diagram with highlight markers
    #[default]
    Text,
    /// One JSON object per input
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// `tracing` filter directive used when RUST_LOG is unset
    pub log_filter: String,
    pub first_player: Player,
    /// Board diagram to start from; the standard setup when absent
    pub position: Option<String>,
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            first_player: Player::One,
            position: None,
            output: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn initial_board(&self) -> Result<Board, CheckersError> {
        match &self.position {
            Some(diagram) => Board::from_diagram(diagram),
            None => Ok(Board::startpos()),
        }
    }
}
