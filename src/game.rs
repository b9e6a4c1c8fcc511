//! Game controller: owns both boards, runs fleet setup, alternates turns
//! and detects the winner.

use log::{debug, info};
use rand::Rng;

use crate::{
    board::{Board, Placement},
    common::{AttackResult, GameError, Mode, PlacementError, Seat},
    config::{FLEET, NUM_SHIPS},
    ship::{ShipId, ShipType},
    strategy::RandomTargeting,
};

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Player 1 is placing the fleet.
    SettingUpPlayer1,
    /// Player 2 or the computer is placing the fleet.
    SettingUpOpponent,
    InPlay,
    GameOver { winner: Seat },
}

/// Everything the presentation layer needs to announce a completed attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub attacker: Seat,
    pub defender: Seat,
    pub row: usize,
    pub col: usize,
    pub result: AttackResult,
    /// Ship sunk by this shot, if any.
    pub sunk: Option<ShipId>,
    /// Set when this shot ended the game.
    pub winner: Option<Seat>,
}

pub struct GameController {
    mode: Mode,
    boards: [Board; 2],
    phase: Phase,
    /// Fleet index of the next ship to place for the seat in setup.
    next_ship: usize,
    /// Seat index (0 or 1) of the current attacker.
    attacker: usize,
    attacks: usize,
}

impl GameController {
    /// Start a new game with two empty boards, Player 1 placing first.
    pub fn new(mode: Mode) -> Self {
        info!("new game: {:?}", mode);
        Self {
            mode,
            boards: [Board::new(), Board::new()],
            phase: Phase::SettingUpPlayer1,
            next_ship: 0,
            attacker: 0,
            attacks: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seats in turn order: Player 1 first, then Player 2 or the computer.
    pub fn seats(&self) -> [Seat; 2] {
        [Seat::Player1, self.mode.opponent_seat()]
    }

    fn seat_index(&self, seat: Seat) -> Option<usize> {
        self.seats().iter().position(|&s| s == seat)
    }

    /// Board belonging to `seat`, or `None` if the seat is not in this game.
    pub fn board(&self, seat: Seat) -> Option<&Board> {
        self.seat_index(seat).map(|i| &self.boards[i])
    }

    fn setup_index(&self) -> Result<usize, GameError> {
        match self.phase {
            Phase::SettingUpPlayer1 => Ok(0),
            Phase::SettingUpOpponent => Ok(1),
            other => Err(GameError::WrongPhase(other)),
        }
    }

    /// Seat currently placing its fleet.
    pub fn setup_seat(&self) -> Option<Seat> {
        self.setup_index().ok().map(|i| self.seats()[i])
    }

    /// Next fleet entry the seat in setup has to place.
    pub fn next_ship(&self) -> Option<ShipType> {
        self.setup_index().ok().and_then(|_| FLEET.get(self.next_ship).copied())
    }

    /// Seat whose turn it is to fire.
    pub fn current_attacker(&self) -> Option<Seat> {
        match self.phase {
            Phase::InPlay => Some(self.seats()[self.attacker]),
            _ => None,
        }
    }

    /// Board the current attacker is firing at.
    pub fn current_target(&self) -> Option<&Board> {
        match self.phase {
            Phase::InPlay => Some(&self.boards[1 - self.attacker]),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Seat> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Number of completed attacks so far, both seats combined.
    pub fn attacks_made(&self) -> usize {
        self.attacks
    }

    /// Place the next ship of the fleet for the seat in setup.
    ///
    /// On a placement error the board is untouched and the same ship stays
    /// next, so the caller retries with new coordinates.
    pub fn place_next_ship(&mut self, placement: Placement) -> Result<ShipType, GameError> {
        let idx = self.setup_index()?;
        let ship = FLEET[self.next_ship];
        self.boards[idx].place_ship(
            ship.id(),
            ship.length(),
            placement.row,
            placement.col,
            placement.orientation,
        )?;
        self.next_ship += 1;
        if self.next_ship == NUM_SHIPS {
            self.next_ship = 0;
            self.phase = match self.phase {
                Phase::SettingUpPlayer1 => Phase::SettingUpOpponent,
                _ => Phase::InPlay,
            };
            info!("{:?} fleet placed, now {:?}", self.seats()[idx], self.phase);
        }
        Ok(ship)
    }

    /// Place the next ship at a random legal position.
    pub fn place_next_ship_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Placement, GameError> {
        let idx = self.setup_index()?;
        let ship = FLEET[self.next_ship];
        let placement = self.boards[idx]
            .random_placement(rng, ship.id(), ship.length())
            .ok_or(PlacementError::NoRoom)?;
        self.place_next_ship(placement)?;
        Ok(placement)
    }

    /// Randomly place every remaining ship for the seat in setup.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let idx = self.setup_index()?;
        while self.setup_index().ok() == Some(idx) {
            self.place_next_ship_randomly(rng)?;
        }
        Ok(())
    }

    /// Fire the current attacker's shot at (row, col) on the opposing board.
    ///
    /// Every completed attack, including one on an already resolved cell,
    /// passes the turn, unless it sank the last ship: then the attacker wins
    /// and the game is over.
    pub fn attack(&mut self, row: usize, col: usize) -> Result<TurnReport, GameError> {
        if self.phase != Phase::InPlay {
            return Err(GameError::WrongPhase(self.phase));
        }
        let target = 1 - self.attacker;
        let board = &mut self.boards[target];
        let result = board.attack(row, col)?;
        let sunk = match result {
            AttackResult::Hit => board
                .ship_at(row, col)
                .filter(|s| s.is_sunk())
                .map(|s| s.id()),
            _ => None,
        };
        let fleet_lost = board.all_ships_sunk();

        self.attacks += 1;
        let [attacker, defender] = [self.seats()[self.attacker], self.seats()[target]];
        debug!(
            "{:?} fires at ({}, {}): {:?}{}",
            attacker,
            row,
            col,
            result,
            sunk.map(|id| format!(", sank {}", id)).unwrap_or_default()
        );

        let winner = if fleet_lost {
            self.phase = Phase::GameOver { winner: attacker };
            info!("{:?} wins after {} attacks", attacker, self.attacks);
            Some(attacker)
        } else {
            self.attacker = target;
            None
        };

        Ok(TurnReport {
            attacker,
            defender,
            row,
            col,
            result,
            sunk,
            winner,
        })
    }

    /// Let the computer seat pick a random legal cell and fire at it.
    ///
    /// Step-by-step entry point for callers driving the controller directly.
    /// [`MatchRunner`](crate::MatchRunner) asks
    /// [`ComputerPlayer`](crate::ComputerPlayer) instead; both draw from
    /// [`RandomTargeting`], so the same rng state picks the same cell.
    pub fn computer_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TurnReport, GameError> {
        match self.current_attacker() {
            Some(Seat::Computer) => {}
            Some(_) => return Err(GameError::NotComputerTurn),
            None => return Err(GameError::WrongPhase(self.phase)),
        }
        let (row, col) = RandomTargeting::new()
            .choose_target(&self.boards[1 - self.attacker], rng)
            .ok_or(GameError::NoLegalTarget)?;
        self.attack(row, col)
    }
}
