//! Text rendering
//!
//! ```text
//!        11  10   9   8   7   6
//!       [ 4   4   4   4   4   4]
//!   0                              0
//!       [ 4   4   4   4   4   4]
//!         0   1   2   3   4   5
//! P1 to move
//! ```
//!
//! Player two's row runs right to left on top so that each pit faces the pit
//! it captures from; player two's store is on the left, player one's on the
//! right.

use std::fmt;

use super::Board;
use crate::types::{Pit, Player};

fn write_row(f: &mut fmt::Formatter<'_>, board: &Board, pits: &[Pit]) -> fmt::Result {
    write!(f, "      [")?;
    for (i, &pit) in pits.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{:>3}", board.pit(pit))?;
    }
    writeln!(f, "]")
}

fn write_labels(f: &mut fmt::Formatter<'_>, pits: &[Pit]) -> fmt::Result {
    write!(f, "       ")?;
    for (i, pit) in pits.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{:>3}", pit.index())?;
    }
    writeln!(f)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top: Vec<Pit> = Pit::side(Player::Two).rev().collect();
        let bottom: Vec<Pit> = Pit::side(Player::One).collect();

        write_labels(f, &top)?;
        write_row(f, self, &top)?;
        writeln!(
            f,
            "{:>4}{:>29}",
            self.store(Player::Two),
            self.store(Player::One)
        )?;
        write_row(f, self, &bottom)?;
        write_labels(f, &bottom)?;
        write!(f, "{} to move", self.turn())
    }
}
