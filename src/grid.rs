use crate::cell::Cell;

/// Row-major cell grid with the origin at the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn filled(width: usize, height: usize, fill: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// All cells paired with their coordinates, row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = ((i32, i32), Cell)> + '_ {
        self.cells.iter().enumerate().map(move |(idx, &cell)| {
            let x = (idx % self.width) as i32;
            let y = (idx / self.width) as i32;
            ((x, y), cell)
        })
    }

    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Nested wire-code matrix, `height` rows of `width` codes.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    /// Rebuild a grid from a wire-code matrix. Returns `None` when the matrix
    /// is empty, ragged, or contains an unknown code.
    pub fn from_codes(codes: &[Vec<u8>]) -> Option<Self> {
        let height = codes.len();
        let width = codes.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return None;
        }
        let mut cells = Vec::with_capacity(width * height);
        for row in codes {
            if row.len() != width {
                return None;
            }
            for &code in row {
                cells.push(Cell::from_code(code)?);
            }
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }
}
