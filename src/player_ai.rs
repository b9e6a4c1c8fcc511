use rand::rngs::SmallRng;

use crate::{
    board::{Board, Placement},
    common::{GameError, PlacementError},
    ship::ShipType,
    strategy::RandomTargeting,
};

use crate::player::Player;

/// Computer player: random fleet layout and uniform random shots.
#[derive(Debug, Default)]
pub struct ComputerPlayer {
    targeting: RandomTargeting,
}

impl ComputerPlayer {
    pub fn new() -> Self {
        Self {
            targeting: RandomTargeting::new(),
        }
    }
}

impl Player for ComputerPlayer {
    fn choose_placement(
        &mut self,
        rng: &mut SmallRng,
        ship: ShipType,
        board: &Board,
    ) -> anyhow::Result<Placement> {
        let placement = board
            .random_placement(rng, ship.id(), ship.length())
            .ok_or(GameError::Placement(PlacementError::NoRoom))?;
        Ok(placement)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        target: &Board,
    ) -> anyhow::Result<(usize, usize)> {
        let coord = self
            .targeting
            .choose_target(target, rng)
            .ok_or(GameError::NoLegalTarget)?;
        Ok(coord)
    }
}
