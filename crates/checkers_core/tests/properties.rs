//! Randomised whole-game checks of the rule invariants.
//!
//! Games are played from the start position by picking random legal inputs,
//! with the occasional stray click mixed in. Every position reached is run
//! through the capture search and checked.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use checkers_core::{
    Board, CaptureChain, Cell, CellSet, Game, GameStatus, Outcome, Piece, Player, TurnState,
    jump_chains, longest_jumps,
};

const GAMES: u64 = 64;
const MAX_INPUTS: usize = 400;

/// Check the geometry of one chain found from `origin` on `board`.
fn check_chain(board: &Board, piece: Piece, origin: Cell, chain: &CaptureChain) {
    let captured: CellSet = chain.captured().collect();
    assert_eq!(captured.len() as usize, chain.len(), "square captured twice in {chain:?}");

    let mut at = origin;
    for (i, step) in chain.steps().iter().enumerate() {
        let victim = board.get(step.captured).expect("captured cell must hold a piece");
        assert_ne!(victim.owner, piece.owner, "captured own piece in {chain:?}");
        assert!(board.get(step.landing).is_none(), "landed on occupied cell");

        let dr = step.landing.row() as i8 - at.row() as i8;
        let dc = step.landing.col() as i8 - at.col() as i8;
        assert_eq!(dr.abs(), dc.abs(), "jump off the diagonal");
        let dir = (dr.signum(), dc.signum());

        if !piece.king {
            assert_eq!(dr.abs(), 2, "men jump exactly two cells");
            assert_eq!(dir.0, piece.owner.forward(), "man captured backward");
            assert_eq!(at.offset(dir, 1), Some(step.captured));
        } else {
            // Exactly one occupied cell (the victim) strictly between
            let between: Vec<Cell> = (1..dr.abs()).filter_map(|d| at.offset(dir, d)).collect();
            let occupied: Vec<Cell> = between
                .iter()
                .copied()
                .filter(|c| board.get(*c).is_some())
                .collect();
            assert_eq!(occupied, vec![step.captured], "king path not clear at step {i}");
        }
        at = step.landing;
    }
}

fn check_position(game: &Game) {
    let board = game.board();

    for player in [Player::One, Player::Two] {
        for (cell, piece) in board.pieces(player) {
            assert!(cell.is_dark(), "piece on light cell {cell}");
            if !piece.king {
                assert_ne!(
                    cell.row(),
                    player.promotion_row(),
                    "uncrowned man on its back rank at {cell}"
                );
            }
        }
    }

    if game.state() != &TurnState::Idle {
        return;
    }

    let player = game.to_move();
    let map = longest_jumps(board, player);
    let mut global_max = 0;
    let mut per_piece = Vec::new();
    for (cell, piece) in board.pieces(player) {
        let chains = jump_chains(board, piece, cell);
        for chain in &chains {
            check_chain(board, piece, cell, chain);
        }
        let best = chains.iter().map(CaptureChain::len).max().unwrap_or(0);
        global_max = global_max.max(best);
        per_piece.push((cell, best));
    }

    assert_eq!(map.max_len(), global_max);
    let expected: Vec<Cell> = per_piece
        .iter()
        .filter(|(_, best)| global_max > 0 && *best == global_max)
        .map(|(cell, _)| *cell)
        .collect();
    assert_eq!(map.starters().collect::<Vec<_>>(), expected);
    for (_, chains) in map.iter() {
        assert!(chains.iter().all(|ch| ch.len() == global_max));
    }
}

fn pick_piece(game: &Game, rng: &mut StdRng) -> Option<Cell> {
    let board = game.board();
    let map = longest_jumps(board, game.to_move());
    let candidates: Vec<Cell> = if map.is_mandatory() {
        map.starters().collect()
    } else {
        board
            .pieces(game.to_move())
            .map(|(cell, _)| cell)
            .filter(|cell| !checkers_core::simple_moves(board, *cell).is_empty())
            .collect()
    };
    candidates.choose(rng).copied()
}

fn play_random_game(seed: u64) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();
    let mut turns = 0;

    for _ in 0..MAX_INPUTS {
        check_position(&game);
        if game.status() != GameStatus::InProgress {
            break;
        }

        let before = game.board().clone();
        let mover = game.to_move();
        let was_capturing = game.state().is_capturing();

        let outcome = if rng.gen_bool(0.05) {
            game.select_raw(rng.gen_range(-1..9), rng.gen_range(-1..9))
        } else if game.selected().is_none() {
            match pick_piece(&game, &mut rng) {
                Some(cell) => {
                    let outcome = game.select(cell);
                    assert_eq!(outcome, Outcome::Continue, "legal piece refused at {cell}");
                    assert!(!game.highlights().is_empty());
                    outcome
                }
                None => break,
            }
        } else {
            match game.highlights().choose(&mut rng).copied() {
                Some(target) => game.select(target),
                None => game.select_raw(-1, -1),
            }
        };

        let enemy = mover.other();
        match outcome {
            Outcome::Rejected => {
                assert_eq!(game.board(), &before, "rejected input changed the board");
                assert_eq!(game.to_move(), mover);
                assert_eq!(game.state(), &TurnState::Idle);
            }
            Outcome::Continue => {
                assert_eq!(game.to_move(), mover);
                let taken = before.count(enemy) - game.board().count(enemy);
                assert!(taken <= 1, "at most one piece per input");
            }
            Outcome::TurnEnd => {
                turns += 1;
                assert_eq!(game.to_move(), enemy);
                assert_eq!(game.state(), &TurnState::Idle);
                assert!(game.highlights().is_empty());
                let taken = before.count(enemy) - game.board().count(enemy);
                if was_capturing {
                    assert_eq!(taken, 1);
                } else {
                    assert_eq!(taken, 0);
                }
            }
        }
        assert_eq!(game.board().count(mover), before.count(mover));
    }
    turns
}

#[test]
fn random_games_respect_rule_invariants() {
    let turns: usize = (0..GAMES).into_par_iter().map(play_random_game).sum();
    assert!(turns > GAMES as usize, "games should get past the opening");
}

#[test]
fn random_games_are_deterministic_per_seed() {
    assert_eq!(play_random_game(7), play_random_game(7));
}
