//! Engine-vs-engine harness
//!
//! Writes one JSON object per game. Games after the first can start with a
//! few random opening moves so that deterministic engines do not replay the
//! same game.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use kalah_core::{Board, Outcome, Pit, Player, Searcher, Value};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

#[derive(clap::Args, Debug, Clone)]
pub struct SelfplayArgs {
    /// Number of games to run
    #[arg(long, default_value_t = 1)]
    pub games: u32,

    /// Depth for player one (defaults to --depth)
    #[arg(long)]
    pub depth_one: Option<u32>,

    /// Depth for player two (defaults to --depth)
    #[arg(long)]
    pub depth_two: Option<u32>,

    /// Random moves played before the engines take over (game 1 never
    /// gets any)
    #[arg(long, default_value_t = 0)]
    pub random_opening: u32,

    /// Seed for the random openings
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Output JSONL path (stdout when omitted)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MoveLog {
    pub player: Player,
    pub pit: Pit,
    /// Engine score; absent for random opening moves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_ms: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub game: u32,
    pub depth_one: u32,
    pub depth_two: u32,
    pub moves: Vec<MoveLog>,
    pub outcome: Outcome,
    /// Stores after the final sweep, player one first
    pub stores: [u8; 2],
}

/// Plays one game. `opening` random moves come first, drawn from `rng`.
pub fn play_game(
    game: u32,
    depths: [u32; 2],
    opening: u32,
    rng: &mut Xoshiro256PlusPlus,
    searchers: &mut [Searcher; 2],
) -> Result<GameRecord> {
    let mut board = Board::new();
    let mut moves = Vec::new();

    while !board.is_terminal() {
        let mover = board.turn();
        let log = if (moves.len() as u32) < opening {
            let legal: Vec<Pit> = board.legal_moves().collect();
            let pit = legal[rng.random_range(0..legal.len())];
            MoveLog {
                player: mover,
                pit,
                score: None,
                nodes: None,
                time_ms: None,
            }
        } else {
            let result = searchers[mover.index()].search(&board, depths[mover.index()])?;
            MoveLog {
                player: mover,
                pit: result.best_move,
                score: Some(result.score),
                nodes: Some(result.stats.nodes),
                time_ms: Some(result.stats.elapsed_ms),
            }
        };
        board.apply_move(log.pit)?;
        moves.push(log);
    }

    let outcome = board
        .sweep_remaining()
        .context("finished game without an outcome")?;
    Ok(GameRecord {
        game,
        depth_one: depths[0],
        depth_two: depths[1],
        moves,
        outcome,
        stores: [board.store(Player::One), board.store(Player::Two)],
    })
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let Some(path) = path else {
        return Ok(Box::new(BufWriter::new(std::io::stdout())));
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory {}", parent.display())
            })?;
        }
    }
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

pub fn run(args: &SelfplayArgs, depth: u32, hash_seed: u64) -> Result<()> {
    let depths = [args.depth_one.unwrap_or(depth), args.depth_two.unwrap_or(depth)];
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(args.seed);
    let mut searchers = [Searcher::with_seed(hash_seed), Searcher::with_seed(hash_seed)];
    let mut writer = open_output(args.out.as_deref())?;

    let mut wins = [0u32; 2];
    let mut draws = 0u32;
    for game in 1..=args.games {
        let opening = if game == 1 { 0 } else { args.random_opening };
        let record = play_game(game, depths, opening, &mut rng, &mut searchers)?;
        match record.outcome {
            Outcome::Win(p) => wins[p.index()] += 1,
            Outcome::Draw => draws += 1,
        }
        log::info!(
            "game {game}: {} ({}-{}) in {} moves",
            record.outcome,
            record.stores[0],
            record.stores[1],
            record.moves.len()
        );
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    log::info!(
        "P1 (depth {}) {} - P2 (depth {}) {} - draws {draws}",
        depths[0],
        wins[0],
        depths[1],
        wins[1]
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searchers() -> [Searcher; 2] {
        [Searcher::new(), Searcher::new()]
    }

    #[test]
    fn test_game_record_consistent() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let record = play_game(1, [2, 3], 0, &mut rng, &mut searchers()).unwrap();

        assert_eq!(record.stores[0] as u32 + record.stores[1] as u32, 48);
        assert_eq!(record.moves[0].pit, Pit::new(2).unwrap());
        assert!(record.moves.iter().all(|m| m.score.is_some()));

        // the log replays to a finished game
        let mut board = Board::new();
        for m in &record.moves {
            assert_eq!(board.turn(), m.player);
            board.apply_move(m.pit).unwrap();
        }
        assert!(board.is_terminal());
        assert_eq!(board.final_outcome(), Some(record.outcome));
    }

    #[test]
    fn test_random_opening_moves_unscored() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let record = play_game(2, [1, 1], 3, &mut rng, &mut searchers()).unwrap();
        assert!(record.moves[..3].iter().all(|m| m.score.is_none()));
        assert!(record.moves[3..].iter().all(|m| m.score.is_some()));
    }

    #[test]
    fn test_record_serializes_as_one_line() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(9);
        let record = play_game(1, [1, 1], 0, &mut rng, &mut searchers()).unwrap();
        let line = serde_json::to_string(&record).unwrap();
        assert!(!line.contains('\n'));
        let back: GameRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(back, record);
    }
}
