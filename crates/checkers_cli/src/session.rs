use std::io::{self, BufRead, Write};

use checkers_core::{Board, Game, GameStatus, Outcome, Player, Snapshot};
use serde::Serialize;
use tracing::{info, warn};

use crate::command::{Command, parse_command};
use crate::config::OutputFormat;
use crate::render::{describe, render_game};

/// One interactive game: the rule engine plus how to print it.
pub struct Session {
    game: Game,
    start: Board,
    first: Player,
    output: OutputFormat,
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    snapshot: Snapshot,
}

impl Session {
    pub fn new(start: Board, first: Player, output: OutputFormat) -> Self {
        Self {
            game: Game::from_board(start.clone(), first),
            start,
            first,
            output,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        self.print(out, None, None)?;
        for line in input.lines() {
            let line = line?;
            let Some(cmd) = parse_command(&line) else {
                continue;
            };
            if !self.handle(cmd, out)? {
                break;
            }
        }
        Ok(())
    }

    /// Apply one command. Returns `false` once the session should end.
    pub fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<bool> {
        match cmd {
            Command::Select { row, col } => {
                let outcome = self.game.select_raw(row, col);
                if outcome == Outcome::TurnEnd {
                    if let GameStatus::Won(winner) = self.game.status() {
                        info!(%winner, "game over");
                    }
                }
                self.print(out, Some(outcome), None)?;
            }
            Command::Board => self.print(out, None, None)?,
            Command::New => {
                info!(first = ?self.first, "new game");
                self.game = Game::from_board(self.start.clone(), self.first);
                self.print(out, None, None)?;
            }
            Command::Help => {
                writeln!(out, "commands:")?;
                writeln!(out, "  <row> <col>   select a cell (0-7 each, row 0 at the top)")?;
                writeln!(out, "  board         print the board again")?;
                writeln!(out, "  new           start over")?;
                writeln!(out, "  quit          leave")?;
            }
            Command::Quit => return Ok(false),
            Command::Unknown(text) => {
                warn!(input = %text, "unrecognised command");
                self.print(out, None, Some("unknown command, try 'help'"))?;
            }
        }
        out.flush()?;
        Ok(true)
    }

    fn print<W: Write>(
        &self,
        out: &mut W,
        outcome: Option<Outcome>,
        error: Option<&str>,
    ) -> io::Result<()> {
        match self.output {
            OutputFormat::Text => {
                if let Some(outcome) = outcome {
                    writeln!(out, "{}", describe(outcome))?;
                }
                if let Some(error) = error {
                    writeln!(out, "{error}")?;
                    return Ok(());
                }
                write!(out, "{}", render_game(&self.game))
            }
            OutputFormat::Json => {
                let report = Report {
                    outcome,
                    error,
                    snapshot: self.game.snapshot(),
                };
                let json = serde_json::to_string(&report).map_err(io::Error::other)?;
                writeln!(out, "{json}")
            }
        }
    }
}
