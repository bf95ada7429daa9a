use rand::Rng;

use crate::error::GridError;

/// Minimum grid dimension along either axis.
pub const MIN_DIM: usize = 10;
/// Maximum grid dimension along either axis.
pub const MAX_DIM: usize = 100;

/// A single cell state. Stored as a small integer rather than a bool so the
/// persisted format can grow additional states without changing shape.
pub type Cell = u8;

/// A dead cell.
pub const DEAD: Cell = 0;
/// A live cell.
pub const ALIVE: Cell = 1;

/// Owns the cell matrix for one generation.
///
/// Row-major, always exactly `height * width` cells; there is no ragged row
/// to corrupt during a resize. Neighbor lookups wrap toroidally, so every
/// cell has a full Moore neighborhood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid. Dimensions outside `[MIN_DIM, MAX_DIM]` are
    /// rejected.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![DEAD; width * height],
        })
    }

    /// Build a grid from an already-validated flat buffer.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounds-checked read.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[y * self.width + x])
    }

    /// Bounds-checked write. Out-of-range coordinates are an error, never a
    /// silent drop.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        self.check_bounds(x, y)?;
        self.cells[y * self.width + x] = cell;
        Ok(())
    }

    /// Cell value with toroidal wrapping; offsets may be negative or past
    /// either edge.
    pub fn wrapped(&self, x: i64, y: i64) -> Cell {
        let w = self.width as i64;
        let h = self.height as i64;
        let wx = ((x % w) + w) % w;
        let wy = ((y % h) + h) % h;
        self.cells[wy as usize * self.width + wx as usize]
    }

    /// Allocate a new grid of the requested size, copying the overlapping
    /// region. Cells outside the old extent start dead. Validation happens
    /// before any allocation, so a rejected resize leaves nothing half-done.
    pub fn resize(&self, new_width: usize, new_height: usize) -> Result<Self, GridError> {
        check_dimensions(new_width, new_height)?;
        let mut cells = vec![DEAD; new_width * new_height];
        let copy_w = self.width.min(new_width);
        let copy_h = self.height.min(new_height);
        for y in 0..copy_h {
            let src = y * self.width;
            let dst = y * new_width;
            cells[dst..dst + copy_w].copy_from_slice(&self.cells[src..src + copy_w]);
        }
        Ok(Self {
            width: new_width,
            height: new_height,
            cells,
        })
    }

    /// Kill every cell, in place.
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    /// Set every cell independently alive or dead with probability ½.
    /// Takes the random source as an argument so callers can seed it.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = if rng.gen_bool(0.5) { ALIVE } else { DEAD };
        }
    }

    /// Count live cells.
    pub fn population(&self) -> u64 {
        self.cells.iter().map(|&c| u64::from(c)).sum()
    }

    /// Row-major view of the cell matrix, one slice per row. Read-only; this
    /// is the surface a renderer walks when repainting.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
    if width < MIN_DIM || width > MAX_DIM || height < MIN_DIM || height > MAX_DIM {
        return Err(GridError::InvalidDimensions { width, height });
    }
    Ok(())
}
