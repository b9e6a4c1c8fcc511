//! Game board state: a 10×10 grid of cells and the ships placed on it.

use std::collections::BTreeMap;

use log::{debug, trace};
use rand::Rng;

use crate::common::{AttackResult, PlacementError, PreconditionError};
use crate::config::{BOARD_SIZE, NUM_SHIPS};
use crate::ship::{Orientation, Ship, ShipId};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Random draws attempted before `random_placement` enumerates the legal
/// positions instead.
const MAX_RANDOM_DRAWS: usize = 1_000;

/// State of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(ShipId),
    Hit(ShipId),
    Miss,
}

impl Cell {
    /// Hit and Miss are terminal; everything else can still be shot at.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit(_) | Cell::Miss)
    }
}

/// What the presentation layer gets to see of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Water,
    Ship(ShipId),
    Hit,
    Miss,
}

/// Read-only snapshot of a board, indexed `[row][col]`.
pub type BoardView = [[CellView; GRID_SIZE]; GRID_SIZE];

/// Bow position and axis of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(row: usize, col: usize, orientation: Orientation) -> Self {
        Placement {
            row,
            col,
            orientation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; GRID_SIZE]; GRID_SIZE],
    ships: BTreeMap<ShipId, Ship>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (all water, no ships placed).
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
            ships: BTreeMap::new(),
        }
    }

    fn check_coord(row: usize, col: usize) -> Result<(), PreconditionError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(PreconditionError::OutOfRange { row, col });
        }
        Ok(())
    }

    /// Cell state at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, PreconditionError> {
        Self::check_coord(row, col)?;
        Ok(self.grid[row][col])
    }

    /// Validate a placement without touching the board.
    pub fn check_placement(
        &self,
        id: ShipId,
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        if length == 0 {
            return Err(PlacementError::ZeroLength);
        }
        if self.ships.contains_key(&id) {
            return Err(PlacementError::AlreadyPlaced);
        }
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(PlacementError::OutOfBounds);
        }
        let room = match orientation {
            Orientation::Horizontal => GRID_SIZE - col,
            Orientation::Vertical => GRID_SIZE - row,
        };
        if length > room {
            return Err(PlacementError::OutOfBounds);
        }
        for i in 0..length {
            let (r, c) = orientation.step(row, col, i);
            if self.grid[r][c] != Cell::Empty {
                return Err(PlacementError::Overlap);
            }
        }
        Ok(())
    }

    /// Place a ship of `length` cells with its bow at (row, col).
    pub fn place_ship(
        &mut self,
        id: ShipId,
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        self.check_placement(id, length, row, col, orientation)?;
        for i in 0..length {
            let (r, c) = orientation.step(row, col, i);
            self.grid[r][c] = Cell::Occupied(id);
        }
        self.ships.insert(id, Ship::new(id, length));
        debug!(
            "placed {} (length {}) at ({}, {}) {:?}",
            id, length, row, col, orientation
        );
        Ok(())
    }

    /// Returns a random legal placement for a ship of `length`, or `None` if
    /// the ship fits nowhere.
    ///
    /// Draws are uniform over every row, column and orientation and rejected
    /// until one is legal. After `MAX_RANDOM_DRAWS` rejections a uniform
    /// choice is made among the enumerated legal placements.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        id: ShipId,
        length: usize,
    ) -> Option<Placement> {
        for _ in 0..MAX_RANDOM_DRAWS {
            let row = rng.random_range(0..GRID_SIZE);
            let col = rng.random_range(0..GRID_SIZE);
            let orientation = Orientation::from(rng.random::<bool>());
            match self.check_placement(id, length, row, col, orientation) {
                Ok(()) => return Some(Placement::new(row, col, orientation)),
                Err(e) => trace!("rejected {} at ({}, {}): {}", id, row, col, e),
            }
        }
        let legal: Vec<Placement> = (0..GRID_SIZE)
            .flat_map(|r| (0..GRID_SIZE).map(move |c| (r, c)))
            .flat_map(|(r, c)| {
                [Orientation::Horizontal, Orientation::Vertical]
                    .into_iter()
                    .map(move |o| Placement::new(r, c, o))
            })
            .filter(|p| {
                self.check_placement(id, length, p.row, p.col, p.orientation)
                    .is_ok()
            })
            .collect();
        if legal.is_empty() {
            None
        } else {
            Some(legal[rng.random_range(0..legal.len())])
        }
    }

    /// Fire at (row, col).
    ///
    /// Shooting at an already resolved cell is a no-op reported as
    /// [`AttackResult::AlreadyAttacked`].
    pub fn attack(&mut self, row: usize, col: usize) -> Result<AttackResult, PreconditionError> {
        Self::check_coord(row, col)?;
        let cell = &mut self.grid[row][col];
        let result = match *cell {
            Cell::Hit(_) | Cell::Miss => AttackResult::AlreadyAttacked,
            Cell::Empty => {
                *cell = Cell::Miss;
                AttackResult::Miss
            }
            Cell::Occupied(id) => {
                *cell = Cell::Hit(id);
                if let Some(ship) = self.ships.get_mut(&id) {
                    ship.record_hit();
                }
                AttackResult::Hit
            }
        };
        debug!("attack at ({}, {}) -> {:?}", row, col, result);
        Ok(result)
    }

    /// Returns `true` when every placed ship is sunk. Vacuously true before
    /// any ship is placed.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.values().all(Ship::is_sunk)
    }

    /// Snapshot of the grid for display. With `hide_ships`, intact ship
    /// segments show as water.
    pub fn render(&self, hide_ships: bool) -> BoardView {
        let mut view = [[CellView::Water; GRID_SIZE]; GRID_SIZE];
        for (r, row) in self.grid.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                view[r][c] = match *cell {
                    Cell::Empty => CellView::Water,
                    Cell::Occupied(_) if hide_ships => CellView::Water,
                    Cell::Occupied(id) => CellView::Ship(id),
                    Cell::Hit(_) => CellView::Hit,
                    Cell::Miss => CellView::Miss,
                };
            }
        }
        view
    }

    /// `true` if (row, col) is on the grid and not yet resolved.
    pub fn is_legal_target(&self, row: usize, col: usize) -> bool {
        matches!(self.cell(row, col), Ok(cell) if !cell.is_resolved())
    }

    /// All cells that can still be shot at, in row-major order.
    pub fn legal_targets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GRID_SIZE)
            .flat_map(|r| (0..GRID_SIZE).map(move |c| (r, c)))
            .filter(move |&(r, c)| !self.grid[r][c].is_resolved())
    }

    /// Ship occupying (row, col), intact or damaged.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&Ship> {
        match self.cell(row, col).ok()? {
            Cell::Occupied(id) | Cell::Hit(id) => self.ships.get(&id),
            Cell::Empty | Cell::Miss => None,
        }
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(&id)
    }

    /// Placed ships in fleet order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.values()
    }

    /// `true` once every ship of the standard fleet is on the board.
    pub fn fleet_placed(&self) -> bool {
        self.ships.len() == NUM_SHIPS
    }
}
