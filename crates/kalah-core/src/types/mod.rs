//! Basic types (Player, Pit, Value, Bound)

mod bound;
mod pit;
mod player;
mod value;

pub use bound::Bound;
pub use pit::Pit;
pub use player::Player;
pub use value::Value;

/// Stones per pit at the start of a game
pub const STARTING_STONES: u8 = 4;

/// Stones on the board for the whole game
pub const TOTAL_STONES: u8 = (Pit::NUM as u8) * STARTING_STONES;

/// A store holding this many stones decides the game (majority of 48)
pub const STONES_TO_WIN: u8 = TOTAL_STONES / 2 + 1;

/// Largest count a single pit can hold; sizes the hash key table
pub const MAX_PIT_STONES: usize = TOTAL_STONES as usize;
