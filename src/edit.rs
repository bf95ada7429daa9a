use crate::error::GridError;
use crate::grid::{self, Cell, Grid, ALIVE};

/// Smallest brush: a single cell.
pub const MIN_BRUSH_SIZE: usize = 1;
/// Largest brush.
pub const MAX_BRUSH_SIZE: usize = 10;
/// Cells added or removed along an axis by one resize command.
pub const DEFAULT_RESIZE_STEP: usize = 10;

/// Direction of a resize command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeOp {
    Increase,
    Decrease,
}

/// Bound hit while clamping a resize command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeLimit {
    MinWidth,
    MaxWidth,
    MinHeight,
    MaxHeight,
}

/// Result of [`EditSession::alter_size`]: the dimensions actually applied
/// and every bound the request ran into. Hitting a bound clamps instead of
/// failing; the driver decides whether to tell the user about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeOutcome {
    pub width: usize,
    pub height: usize,
    pub limits: Vec<SizeLimit>,
}

impl ResizeOutcome {
    /// Whether the request was clamped on any axis.
    pub fn clamped(&self) -> bool {
        !self.limits.is_empty()
    }
}

/// Interactive editing state: brush size and resize step.
///
/// One value per session, owned by whoever drives the edits; nothing here is
/// shared or global.
#[derive(Debug, Clone)]
pub struct EditSession {
    brush_size: usize,
    resize_step: usize,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(MIN_BRUSH_SIZE)
    }
}

impl EditSession {
    /// `brush_size` is clamped into `[MIN_BRUSH_SIZE, MAX_BRUSH_SIZE]`.
    pub fn new(brush_size: usize) -> Self {
        Self {
            brush_size: brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
            resize_step: DEFAULT_RESIZE_STEP,
        }
    }

    pub fn brush_size(&self) -> usize {
        self.brush_size
    }

    pub fn increase_brush(&mut self) {
        if self.brush_size < MAX_BRUSH_SIZE {
            self.brush_size += 1;
        }
    }

    pub fn decrease_brush(&mut self) {
        if self.brush_size > MIN_BRUSH_SIZE {
            self.brush_size -= 1;
        }
    }

    pub fn resize_step(&self) -> usize {
        self.resize_step
    }

    pub fn set_resize_step(&mut self, step: usize) {
        self.resize_step = step;
    }

    /// Flip one cell and return its new state. Out-of-range coordinates are
    /// an error, never a silent drop.
    pub fn toggle_cell(&self, grid: &mut Grid, x: usize, y: usize) -> Result<Cell, GridError> {
        let next = grid.get(x, y)? ^ 1;
        grid.set(x, y, next)?;
        Ok(next)
    }

    /// Paint with the current brush: a square of side `2 * brush_size - 1`
    /// centered on `(x, y)`, clipped to the grid. The policy is set-alive
    /// rather than toggle, since toggling under a dragged cursor flickers
    /// cells on and off. Returns the coordinates that actually changed, for
    /// the caller's redraw path.
    ///
    /// The center itself must be in bounds; only the brush overhang is
    /// clipped.
    pub fn paint(
        &self,
        grid: &mut Grid,
        x: usize,
        y: usize,
    ) -> Result<Vec<(usize, usize)>, GridError> {
        grid.get(x, y)?;

        let r = self.brush_size - 1;
        let x0 = x.saturating_sub(r);
        let y0 = y.saturating_sub(r);
        let x1 = (x + r).min(grid.width() - 1);
        let y1 = (y + r).min(grid.height() - 1);

        let mut touched = Vec::new();
        for py in y0..=y1 {
            for px in x0..=x1 {
                if grid.get(px, py)? != ALIVE {
                    grid.set(px, py, ALIVE)?;
                    touched.push((px, py));
                }
            }
        }
        Ok(touched)
    }

    /// Grow or shrink the grid by the resize step along the requested axes,
    /// clamped to `[MIN_DIM, MAX_DIM]`. The overlapping content survives the
    /// reallocation (`Grid::resize` does the copy); the outcome records
    /// every bound that was hit.
    pub fn alter_size(
        &self,
        grid: &mut Grid,
        op: SizeOp,
        horizontal: bool,
        vertical: bool,
    ) -> Result<ResizeOutcome, GridError> {
        let mut limits = Vec::new();
        let width = if horizontal {
            adjust(
                grid.width(),
                op,
                self.resize_step,
                &mut limits,
                SizeLimit::MinWidth,
                SizeLimit::MaxWidth,
            )
        } else {
            grid.width()
        };
        let height = if vertical {
            adjust(
                grid.height(),
                op,
                self.resize_step,
                &mut limits,
                SizeLimit::MinHeight,
                SizeLimit::MaxHeight,
            )
        } else {
            grid.height()
        };

        if width != grid.width() || height != grid.height() {
            *grid = grid.resize(width, height)?;
            log::debug!("grid resized to {width}x{height}");
        }
        Ok(ResizeOutcome {
            width,
            height,
            limits,
        })
    }
}

/// Apply one axis of a resize command, recording which bound (if any) the
/// request ran into.
fn adjust(
    current: usize,
    op: SizeOp,
    step: usize,
    limits: &mut Vec<SizeLimit>,
    min_limit: SizeLimit,
    max_limit: SizeLimit,
) -> usize {
    match op {
        SizeOp::Increase => {
            let target = current + step;
            if target > grid::MAX_DIM {
                limits.push(max_limit);
                grid::MAX_DIM
            } else {
                target
            }
        }
        SizeOp::Decrease => {
            let target = current.saturating_sub(step);
            if target < grid::MIN_DIM {
                limits.push(min_limit);
                grid::MIN_DIM
            } else {
                target
            }
        }
    }
}
