/// Cell kinds a dungeon grid can hold. The discriminants are the wire codes
/// used in persisted records and must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    Empty = 0,
    Door = 1,
    SecretDoor = 2,
    LockedDoor = 3,
    TrapDoor = 4,
    StairDown = 5,
    StairUp = 6,
    Corridor = 7,
    Room = 8,
    Wall = 9,
}

impl Cell {
    /// Wire code for persisted records.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Door),
            2 => Some(Cell::SecretDoor),
            3 => Some(Cell::LockedDoor),
            4 => Some(Cell::TrapDoor),
            5 => Some(Cell::StairDown),
            6 => Some(Cell::StairUp),
            7 => Some(Cell::Corridor),
            8 => Some(Cell::Room),
            9 => Some(Cell::Wall),
            _ => None,
        }
    }

    pub fn is_door(self) -> bool {
        matches!(
            self,
            Cell::Door | Cell::SecretDoor | Cell::LockedDoor | Cell::TrapDoor
        )
    }

    /// Kinds the game layer treats as traversable.
    pub fn is_walkable(self) -> bool {
        self.is_door() || matches!(self, Cell::Corridor | Cell::Room)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Wall
    }
}
