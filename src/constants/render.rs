//! Raster rendering constants.

/// Pixels per map cell in rendered images
pub const CELL_SIZE: u32 = 11;
/// Empty-cell border, in cells, added around the rendered map
pub const BORDER_CELLS: u32 = 4;
/// Grid line color drawn between cells
pub const GRID_LINE_COLOR: [u8; 3] = [0, 0, 0];

/// RGB color per cell kind, indexed by wire code. Secret doors deliberately
/// share the wall color so they stay hidden in rendered maps.
pub const CELL_COLORS: [[u8; 3]; 10] = [
    [80, 80, 80],    // 0 empty / background
    [120, 60, 40],   // 1 door
    [80, 80, 80],    // 2 secret door (hidden)
    [200, 0, 0],     // 3 locked door
    [120, 60, 40],   // 4 trap door
    [0, 200, 0],     // 5 stairs down
    [0, 200, 200],   // 6 stairs up
    [120, 120, 120], // 7 corridor
    [150, 150, 150], // 8 room floor
    [80, 80, 80],    // 9 wall
];
