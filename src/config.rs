use crate::ship::{ShipId, ShipType};

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new(ShipId::Carrier, "Carrier", 5),
    ShipType::new(ShipId::Battleship, "Battleship", 4),
    ShipType::new(ShipId::Cruiser, "Cruiser", 3),
    ShipType::new(ShipId::Submarine, "Submarine", 3),
    ShipType::new(ShipId::Destroyer, "Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV_VAR: &str = "BROADSIDE_LOG";

/// Look up the fleet entry for a ship id.
pub fn ship_type(id: ShipId) -> ShipType {
    FLEET[id.index()]
}
