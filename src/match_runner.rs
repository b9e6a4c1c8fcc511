use anyhow::anyhow;
use log::info;
use rand::rngs::SmallRng;

use crate::{
    common::{GameError, Seat},
    game::GameController,
    player::Player,
};

/// Drives a [`GameController`] from two players until someone wins.
///
/// Players are indexed by seat order: index 0 is Player 1, index 1 is
/// Player 2 or the computer.
pub struct MatchRunner {
    controller: GameController,
    players: [Box<dyn Player>; 2],
}

impl MatchRunner {
    pub fn new(controller: GameController, players: [Box<dyn Player>; 2]) -> Self {
        Self {
            controller,
            players,
        }
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    fn seat_index(&self, seat: Seat) -> anyhow::Result<usize> {
        self.controller
            .seats()
            .iter()
            .position(|&s| s == seat)
            .ok_or_else(|| anyhow!("{:?} has no place in this game", seat))
    }

    /// Ask each seat in turn for placements until both fleets are down.
    /// Rejected placements are reported back and asked for again.
    fn setup(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        while let Some(seat) = self.controller.setup_seat() {
            let idx = self.seat_index(seat)?;
            let ship = self
                .controller
                .next_ship()
                .ok_or_else(|| anyhow!("no ship left to place for {:?}", seat))?;
            let board = self
                .controller
                .board(seat)
                .ok_or_else(|| anyhow!("no board for {:?}", seat))?;
            let placement = self.players[idx].choose_placement(rng, ship, board)?;
            match self.controller.place_next_ship(placement) {
                Ok(_) => {}
                Err(GameError::Placement(e)) => self.players[idx].handle_placement_error(ship, e),
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Play the whole game: fleet setup, then alternating attacks. Returns
    /// the winning seat.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<Seat> {
        self.setup(rng)?;
        loop {
            if let Some(winner) = self.controller.winner() {
                info!(
                    "game over after {} attacks, {:?} wins",
                    self.controller.attacks_made(),
                    winner
                );
                for player in self.players.iter_mut() {
                    player.handle_game_over(winner);
                }
                return Ok(winner);
            }

            let seat = self
                .controller
                .current_attacker()
                .ok_or_else(|| anyhow!("game is not in play: {:?}", self.controller.phase()))?;
            let idx = self.seat_index(seat)?;
            let target = self
                .controller
                .current_target()
                .ok_or_else(|| anyhow!("no target board"))?;
            let (row, col) = self.players[idx].select_target(rng, target)?;

            let report = self.controller.attack(row, col)?;
            self.players[idx].handle_attack_result(&report);
            if let Some(own_board) = self.controller.board(report.defender) {
                self.players[1 - idx].handle_opponent_attack(&report, own_board);
            }
        }
    }
}
