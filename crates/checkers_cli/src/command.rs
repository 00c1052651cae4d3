/// One line of driver input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A cell picked by the player, passed through unvalidated.
    Select { row: i32, col: i32 },
    Board,
    New,
    Help,
    Quit,
    Unknown(String),
}

/// Parse a line; blank lines give `None`.
///
/// Cells are two integers separated by whitespace or a comma (`2 2`, `2,2`).
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let parts: Vec<&str> = line
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    let cmd = match parts.as_slice() {
        ["board" | "b"] => Command::Board,
        ["new"] => Command::New,
        ["help" | "?"] => Command::Help,
        ["quit" | "exit" | "q"] => Command::Quit,
        [row, col] => match (row.parse(), col.parse()) {
            (Ok(row), Ok(col)) => Command::Select { row, col },
            _ => Command::Unknown(line.to_string()),
        },
        _ => Command::Unknown(line.to_string()),
    };
    Some(cmd)
}
