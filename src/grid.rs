use crate::config::DEFAULT_GRID_SIZE;
use crate::input::Heading;

/// Grid position in logical cell coordinates (column, row).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighboring cell one step along `heading`.
    ///
    /// The result may lie outside the grid; callers check bounds.
    #[must_use]
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Square playing field with hard walls on every side.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    size: u16,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl Grid {
    /// Creates an `size`×`size` grid.
    #[must_use]
    pub fn new(size: u16) -> Self {
        debug_assert!(size > 0);
        Self { size }
    }

    /// Returns the side length in cells.
    #[must_use]
    pub fn size(self) -> u16 {
        self.size
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.size) * usize::from(self.size)
    }

    /// Returns true when the cell lies inside the walls.
    #[must_use]
    pub fn in_bounds(self, cell: Cell) -> bool {
        let size = i32::from(self.size);
        cell.x >= 0 && cell.y >= 0 && cell.x < size && cell.y < size
    }

    /// Returns the row-major index of an in-bounds cell.
    #[must_use]
    pub fn index_of(self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }

        let x = usize::try_from(cell.x).ok()?;
        let y = usize::try_from(cell.y).ok()?;
        Some(y * usize::from(self.size) + x)
    }

    /// Iterates over every cell, row by row.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let size = i32::from(self.size);
        (0..size).flat_map(move |y| (0..size).map(move |x| Cell { x, y }))
    }
}
