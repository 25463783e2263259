//! Raster rendering of dungeon grids.
//!
//! Presentation only: the generator has no dependency on this module. Each
//! cell becomes a colored square, the map gets a four-cell background border,
//! and one-pixel grid lines separate the cells.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::cell::Cell;
use crate::constants::{BORDER_CELLS, CELL_COLORS, CELL_SIZE, GRID_LINE_COLOR};
use crate::grid::Grid;

/// Color for a cell kind, from the fixed kind-to-color table.
pub fn cell_color(cell: Cell) -> [u8; 3] {
    CELL_COLORS[cell.code() as usize]
}

/// Render at the default cell size.
pub fn render(grid: &Grid) -> RgbImage {
    render_scaled(grid, CELL_SIZE)
}

/// Render with `cell_size` pixels per cell.
pub fn render_scaled(grid: &Grid, cell_size: u32) -> RgbImage {
    let cols = grid.width() as u32 + 2 * BORDER_CELLS;
    let rows = grid.height() as u32 + 2 * BORDER_CELLS;

    // One pixel per cell first, then a nearest-neighbor upscale so every cell
    // stays a uniform square.
    let mut cells = RgbImage::from_pixel(cols, rows, Rgb(cell_color(Cell::Empty)));
    for ((x, y), cell) in grid.iter_cells() {
        cells.put_pixel(
            x as u32 + BORDER_CELLS,
            y as u32 + BORDER_CELLS,
            Rgb(cell_color(cell)),
        );
    }
    let mut image = imageops::resize(
        &cells,
        cols * cell_size,
        rows * cell_size,
        FilterType::Nearest,
    );

    draw_grid_lines(&mut image, rows, cols, cell_size);
    image
}

fn draw_grid_lines(image: &mut RgbImage, rows: u32, cols: u32, cell_size: u32) {
    let line = Rgb(GRID_LINE_COLOR);
    for col in 1..cols {
        let x = col * cell_size;
        for y in 0..image.height() {
            image.put_pixel(x, y, line);
        }
    }
    for row in 1..rows {
        let y = row * cell_size;
        for x in 0..image.width() {
            image.put_pixel(x, y, line);
        }
    }
}
