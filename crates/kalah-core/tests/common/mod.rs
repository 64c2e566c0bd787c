//! Shared helpers for integration tests
#![allow(dead_code)]

use kalah_core::search::static_eval;
use kalah_core::{Board, Pit, Value};
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

pub fn pit(i: usize) -> Pit {
    Pit::new(i).expect("pit index in range")
}

/// Plays `moves` from the starting position
pub fn play_from_start(moves: &[usize]) -> Board {
    let mut board = Board::new();
    for &m in moves {
        board.apply_move(pit(m)).expect("legal move in test line");
    }
    board
}

/// Random legal playout of up to `max_moves` moves, stopping early at a
/// finished game
pub fn random_playout(seed: u64, max_moves: usize) -> Board {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut board = Board::new();
    for _ in 0..max_moves {
        if board.is_terminal() {
            break;
        }
        let moves: Vec<Pit> = board.legal_moves().collect();
        let mv = moves[rng.random_range(0..moves.len())];
        board.apply_move(mv).expect("legal move from enumeration");
    }
    board
}

fn terminal_or_eval(board: &Board) -> (Value, bool) {
    match board.final_outcome() {
        Some(outcome) => match outcome.winner() {
            Some(p) if p == board.turn() => (Value::WIN, true),
            Some(_) => (Value::LOSS, true),
            None => (Value::DRAW, true),
        },
        None => (static_eval(board), false),
    }
}

/// Plain negamax over the whole tree to `horizon`, no pruning or caching.
/// Extra turns do not advance `ply`.
pub fn reference_negamax(board: &Board, ply: u32, horizon: u32) -> Value {
    let (eval, terminal) = terminal_or_eval(board);
    if terminal || ply >= horizon {
        return eval;
    }
    board
        .legal_moves()
        .map(|mv| reference_move_score(board, mv, ply, horizon))
        .max()
        .expect("non-terminal board has a legal move")
}

/// Score of playing `mv` at `board`, from the mover's perspective
pub fn reference_move_score(board: &Board, mv: Pit, ply: u32, horizon: u32) -> Value {
    let mut child = *board;
    child.apply_move(mv).expect("legal move from enumeration");
    if child.turn() == board.turn() {
        reference_negamax(&child, ply, horizon)
    } else {
        -reference_negamax(&child, ply + 1, horizon)
    }
}
