//! Rule engine for 8x8 checkers with mandatory maximal captures and flying
//! kings.
//!
//! The crate is split the same way a turn flows through it:
//! - [`board`] holds the grid and nothing else,
//! - [`captures`] finds capture chains and applies the longest-chain rule,
//! - [`movegen`] covers non-capturing moves,
//! - [`turn`] runs the per-turn state machine driven by cell selections,
//! - [`highlight`] derives the cells a player should see as legal targets.

pub mod board;
pub mod captures;
pub mod cellset;
pub mod error;
pub mod highlight;
pub mod movegen;
pub mod snapshot;
pub mod turn;
pub mod types;

pub use board::*;
pub use captures::*;
pub use cellset::CellSet;
pub use error::{CheckersError, Result};
pub use highlight::*;
pub use movegen::*;
pub use snapshot::Snapshot;
pub use turn::*;
pub use types::*;
