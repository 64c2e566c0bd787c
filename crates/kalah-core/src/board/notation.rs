//! Text notation for positions
//!
//! `"p0 p1 ... p11 / store1 store2 / turn"`, e.g. the starting position is
//! `"4 4 4 4 4 4 4 4 4 4 4 4 / 0 0 / 1"`.

use std::str::FromStr;

use super::Board;
use crate::error::KalahError;
use crate::types::{Pit, Player};

impl Board {
    /// Renders the position in the notation accepted by [`Board::from_str`].
    pub fn to_notation(&self) -> String {
        let pits: Vec<String> = self.pits.iter().map(u8::to_string).collect();
        format!(
            "{} / {} {} / {}",
            pits.join(" "),
            self.store(Player::One),
            self.store(Player::Two),
            self.turn.number()
        )
    }
}

fn parse_counts<const N: usize>(field: &str, what: &str) -> Result<[u8; N], KalahError> {
    let values = field
        .split_whitespace()
        .map(|t| {
            t.parse::<u8>()
                .map_err(|e| KalahError::Parse(format!("{what}: `{t}`: {e}")))
        })
        .collect::<Result<Vec<u8>, _>>()?;
    <[u8; N]>::try_from(values.as_slice()).map_err(|_| {
        KalahError::Parse(format!("{what}: expected {N} numbers, got {}", values.len()))
    })
}

impl FromStr for Board {
    type Err = KalahError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split('/').collect();
        let [pits, stores, turn] = fields.as_slice() else {
            return Err(KalahError::Parse(format!(
                "expected `pits / stores / turn`, got {} field(s)",
                fields.len()
            )));
        };
        let pits = parse_counts::<{ Pit::NUM }>(pits, "pits")?;
        let stores = parse_counts::<{ Player::NUM }>(stores, "stores")?;
        let turn = turn
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Player::from_number)
            .ok_or_else(|| KalahError::Parse(format!("turn must be 1 or 2, got `{}`", turn.trim())))?;
        Board::from_parts(pits, stores, turn)
    }
}
