//! Uniform random targeting for the computer seat.
//! Holds no state between calls: every shot is drawn fresh.

use log::trace;
use rand::Rng;

use crate::board::Board;
use crate::config::BOARD_SIZE;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Rejected draws tolerated before sampling directly from the legal cells.
const MAX_REJECTIONS: usize = 4 * GRID_SIZE * GRID_SIZE;

/// Stateless opponent that fires at a uniformly random legal cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTargeting;

impl RandomTargeting {
    pub fn new() -> Self {
        Self
    }

    /// Pick a cell of `board` that is neither Hit nor Miss, uniformly at
    /// random. Returns `None` when every cell has been resolved.
    pub fn choose_target<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Option<(usize, usize)> {
        if board.legal_targets().next().is_none() {
            return None;
        }
        for _ in 0..MAX_REJECTIONS {
            let r = rng.random_range(0..GRID_SIZE);
            let c = rng.random_range(0..GRID_SIZE);
            if board.is_legal_target(r, c) {
                return Some((r, c));
            }
            trace!("target ({}, {}) already resolved, redrawing", r, c);
        }
        // Late game: draw straight from what is left. Still uniform.
        let remaining: Vec<(usize, usize)> = board.legal_targets().collect();
        Some(remaining[rng.random_range(0..remaining.len())])
    }
}
