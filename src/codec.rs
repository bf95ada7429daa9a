use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::grid::{Grid, ALIVE, DEAD, MAX_DIM, MIN_DIM};

/// On-disk record: dimensions plus the full row-major cell matrix, exactly
/// `height` rows of `width` 0/1 integers. Earlier save files padded an extra
/// row and column, but the padding never carried state and is not
/// reproduced.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    width: usize,
    height: usize,
    matrix: Vec<Vec<u8>>,
}

/// Encode a grid as JSON bytes. Lossless: `deserialize(serialize(g)) == g`
/// for every valid grid.
pub fn serialize(grid: &Grid) -> Result<Vec<u8>, GridError> {
    let state = PersistedState {
        width: grid.width(),
        height: grid.height(),
        matrix: grid.rows().map(|row| row.to_vec()).collect(),
    };
    serde_json::to_vec(&state).map_err(|e| GridError::CorruptState(e.to_string()))
}

/// Decode a grid from JSON bytes.
///
/// Fails with `CorruptState` when the record doesn't parse, when the
/// dimensions are missing or out of range, or when the matrix shape doesn't
/// match the declared dimensions. A shape mismatch is never papered over.
/// Nonzero cell values decode as alive.
pub fn deserialize(bytes: &[u8]) -> Result<Grid, GridError> {
    let state: PersistedState = serde_json::from_slice(bytes)
        .map_err(|e| GridError::CorruptState(format!("unreadable save data: {e}")))?;

    if state.width < MIN_DIM
        || state.width > MAX_DIM
        || state.height < MIN_DIM
        || state.height > MAX_DIM
    {
        return Err(GridError::CorruptState(format!(
            "dimensions {}x{} out of range",
            state.width, state.height
        )));
    }
    if state.matrix.len() != state.height {
        return Err(GridError::CorruptState(format!(
            "expected {} rows, found {}",
            state.height,
            state.matrix.len()
        )));
    }

    let mut cells = Vec::with_capacity(state.width * state.height);
    for (y, row) in state.matrix.iter().enumerate() {
        if row.len() != state.width {
            return Err(GridError::CorruptState(format!(
                "row {y} has {} cells, expected {}",
                row.len(),
                state.width
            )));
        }
        cells.extend(row.iter().map(|&v| if v == DEAD { DEAD } else { ALIVE }));
    }
    Ok(Grid::from_cells(state.width, state.height, cells))
}

/// Write `grid` to `path`, replacing any existing file.
pub fn save(grid: &Grid, path: &Path) -> Result<(), GridError> {
    fs::write(path, serialize(grid)?)?;
    log::info!(
        "saved {}x{} grid to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(())
}

/// Read a grid back from `path`.
pub fn load(path: &Path) -> Result<Grid, GridError> {
    let grid = deserialize(&fs::read(path)?)?;
    log::info!(
        "loaded {}x{} grid from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}
