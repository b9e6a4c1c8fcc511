//! Ship identities, fleet entries and per-ship damage tracking.

use core::fmt;

/// Stable identifier for each vessel of the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShipId {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipId {
    /// Position of this ship in [`crate::FLEET`].
    pub const fn index(self) -> usize {
        match self {
            ShipId::Carrier => 0,
            ShipId::Battleship => 1,
            ShipId::Cruiser => 2,
            ShipId::Submarine => 3,
            ShipId::Destroyer => 4,
        }
    }

    pub fn name(self) -> &'static str {
        crate::config::ship_type(self).name()
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell `offset` steps away from (`row`, `col`) along this axis.
    pub fn step(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + offset),
            Orientation::Vertical => (row + offset, col),
        }
    }
}

impl From<bool> for Orientation {
    /// `true` means horizontal.
    fn from(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Type of ship: identity, display name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    id: ShipId,
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(id: ShipId, name: &'static str, length: usize) -> Self {
        Self { id, name, length }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A placed ship and the damage it has taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    length: usize,
    hits: usize,
}

impl Ship {
    pub fn new(id: ShipId, length: usize) -> Self {
        Ship { id, length, hits: 0 }
    }

    /// Register one more damaged segment. Saturates at the ship's length.
    pub fn record_hit(&mut self) {
        if self.hits < self.length {
            self.hits += 1;
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}
