use crate::grid::{Grid, ALIVE, DEAD};

/// Compute the next generation under the standard Conway rule (B3/S23) on
/// the toroidal 8-neighbor Moore neighborhood.
///
/// Pure: the input grid is never mutated, and the same input always yields
/// the same output. The caller keeps the old generation around for as long
/// as it needs (typically to diff against the new one) and then swaps.
///
/// Neighbor counts come from a wrap-padded border copy plus eight shifted
/// window passes rather than eight modulo lookups per cell, which keeps a
/// 100x100 grid comfortable at a 0.1s tick.
pub fn step(grid: &Grid) -> Grid {
    let w = grid.width();
    let h = grid.height();
    let cells = grid.cells();

    // Padded copy with a one-cell border drawn from the opposite edges, so
    // the window passes below never wrap mid-row.
    let pw = w + 2;
    let mut padded = vec![DEAD; pw * (h + 2)];
    for py in 0..h + 2 {
        let sy = (py + h - 1) % h;
        for px in 0..w + 2 {
            let sx = (px + w - 1) % w;
            padded[py * pw + px] = cells[sy * w + sx];
        }
    }

    // Accumulate the eight shifted windows; the center offset (1, 1) is the
    // cell itself and is skipped.
    let mut counts = vec![0u8; w * h];
    for dy in 0..3 {
        for dx in 0..3 {
            if dx == 1 && dy == 1 {
                continue;
            }
            for y in 0..h {
                let src = &padded[(y + dy) * pw + dx..(y + dy) * pw + dx + w];
                let dst = &mut counts[y * w..(y + 1) * w];
                for (count, neighbor) in dst.iter_mut().zip(src) {
                    *count += *neighbor;
                }
            }
        }
    }

    let mut next = vec![DEAD; w * h];
    for (i, out) in next.iter_mut().enumerate() {
        let alive = cells[i] == ALIVE;
        *out = match (alive, counts[i]) {
            // Survival with 2 or 3 neighbors, birth on exactly 3.
            (true, 2) | (true, 3) | (false, 3) => ALIVE,
            _ => DEAD,
        };
    }

    Grid::from_cells(w, h, next)
}
