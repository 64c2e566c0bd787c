//! Interactive game loop

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use kalah_core::{Board, Outcome, Pit, Player, Searcher};

use crate::HumanSide;

pub struct PlayConfig {
    pub human: HumanSide,
    pub depth: u32,
    pub hash_seed: u64,
}

enum HumanInput {
    Move(Pit),
    Quit,
}

/// Reads one move for `board`'s side to move, re-prompting on bad input.
/// Errors only when the input stream ends.
fn read_human_move<R: BufRead, W: Write>(board: &Board, input: &mut R, out: &mut W) -> Result<HumanInput> {
    let turn = board.turn();
    let (first, last) = (Pit::first(turn), Pit::last(turn));
    loop {
        write!(out, "{turn} move ({first}-{last}, q to quit): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read move")? == 0 {
            bail!("input closed before the game ended");
        }
        let text = line.trim();
        if text.eq_ignore_ascii_case("q") || text.eq_ignore_ascii_case("quit") {
            return Ok(HumanInput::Quit);
        }

        let Ok(index) = text.parse::<usize>() else {
            writeln!(out, "not a pit number: `{text}`")?;
            continue;
        };
        let Some(pit) = Pit::new(index) else {
            writeln!(out, "{}", kalah_core::KalahError::InvalidPit(index))?;
            continue;
        };
        let mut scratch = *board;
        if let Err(e) = scratch.apply_move(pit) {
            writeln!(out, "{e}")?;
            continue;
        }
        return Ok(HumanInput::Move(pit));
    }
}

fn report_result<W: Write>(board: &Board, outcome: Outcome, out: &mut W) -> Result<()> {
    let one = board.store(Player::One);
    let two = board.store(Player::Two);
    match outcome {
        Outcome::Win(Player::One) => writeln!(out, "P1 wins ({one}-{two})")?,
        Outcome::Win(Player::Two) => writeln!(out, "P2 wins ({two}-{one})")?,
        Outcome::Draw => writeln!(out, "Draw ({one}-{two})")?,
    }
    Ok(())
}

/// Plays one game from the starting position. Returns `None` when the human
/// quits early.
pub fn run_game<R: BufRead, W: Write>(config: &PlayConfig, mut input: R, mut out: W) -> Result<Option<Outcome>> {
    let mut board = Board::new();
    let mut searcher = Searcher::with_seed(config.hash_seed);
    log::info!("new game: human {:?}, depth {}", config.human, config.depth);

    while !board.is_terminal() {
        writeln!(out, "{board}")?;
        let mover = board.turn();
        let pit = if config.human.controls(mover) {
            match read_human_move(&board, &mut input, &mut out)? {
                HumanInput::Move(pit) => pit,
                HumanInput::Quit => return Ok(None),
            }
        } else {
            let result = searcher.search(&board, config.depth)?;
            log::debug!("{}", result.stats);
            writeln!(out, "{mover} plays {} (score {})", result.best_move, result.score)?;
            result.best_move
        };
        let undo = board.apply_move(pit)?;
        log::debug!("{mover} {pit}: {:?}", undo.kind);
    }

    let outcome = board
        .sweep_remaining()
        .context("finished game without an outcome")?;
    writeln!(out, "{board}")?;
    report_result(&board, outcome, &mut out)?;
    Ok(Some(outcome))
}
