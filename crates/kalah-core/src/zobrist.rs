//! Zobrist hashing (PositionHasher)
//!
//! The key covers pit counts and the side to move only. Store totals are left
//! out: the transposition table keeps scores relative to each position's
//! static evaluation, so positions that differ only in how the captured stones
//! are split between the stores can share an entry.
//!
//! Distinct boards may still collide. The table does not detect that; the
//! worst case is a wrong score for that node and a legal but weaker move.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::board::Board;
use crate::types::{MAX_PIT_STONES, Pit, Player};

/// Default seed for the key table
pub const DEFAULT_SEED: u64 = 0x1234_5678_9ABC_DEF0;

/// Random key table, owned by whoever hashes positions.
///
/// Two hashers built from the same seed produce identical keys.
#[derive(Clone)]
pub struct PositionHasher {
    /// [Player][pit offset][stone count]
    pit: Box<[[[u64; MAX_PIT_STONES + 1]; Pit::PER_SIDE]; Player::NUM]>,
    /// XORed in when player two is to move
    side: u64,
    seed: u64,
}

impl PositionHasher {
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut pit = Box::new([[[0u64; MAX_PIT_STONES + 1]; Pit::PER_SIDE]; Player::NUM]);
        for side in pit.iter_mut() {
            for counts in side.iter_mut() {
                for key in counts.iter_mut() {
                    *key = rng.random();
                }
            }
        }
        let side = rng.random();
        Self { pit, side, seed }
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Key for `count` stones sitting in `pit`
    #[inline]
    pub fn pit_key(&self, pit: Pit, count: u8) -> u64 {
        debug_assert!(usize::from(count) <= MAX_PIT_STONES);
        self.pit[pit.owner().index()][pit.offset()][usize::from(count)]
    }

    #[inline]
    pub fn side_key(&self) -> u64 {
        self.side
    }

    /// Full-board hash, recomputed from scratch
    pub fn hash(&self, board: &Board) -> u64 {
        let mut key = Pit::all().fold(0u64, |acc, pit| acc ^ self.pit_key(pit, board.pit(pit)));
        if board.turn() == Player::Two {
            key ^= self.side;
        }
        key
    }
}

impl Default for PositionHasher {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl std::fmt::Debug for PositionHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionHasher").field("seed", &self.seed).finish_non_exhaustive()
    }
}
