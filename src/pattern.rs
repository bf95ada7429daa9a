use rand::Rng;

use crate::grid::{Grid, ALIVE, DEAD};

/// A named, fixed arrangement of live cells, positioned relative to the
/// top-left corner of its bounding box. Patterns are static data; nothing is
/// ever derived from grid state.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    /// Bounding box, including any quiet margin the pattern needs to evolve
    /// without touching its surroundings.
    pub width: usize,
    pub height: usize,
    /// Live cells as `(row, col)` offsets within the box.
    pub cells: &'static [(usize, usize)],
}

/// Glider: the smallest spaceship, drifts one cell diagonally every 4 steps.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    width: 3,
    height: 3,
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// Pulsar: 48-cell period-3 oscillator. The 17x17 box carries a two-cell
/// quiet margin around the core so the oscillation never couples to whatever
/// sits outside the box.
pub const PULSAR: Pattern = Pattern {
    name: "pulsar",
    width: 17,
    height: 17,
    cells: &[
        // Top half
        (3, 5), (3, 6), (3, 7), (3, 11), (3, 12), (3, 13),
        (5, 3), (6, 3), (7, 3),
        (5, 8), (6, 8), (7, 8),
        (5, 10), (6, 10), (7, 10),
        (5, 15), (6, 15), (7, 15),
        (8, 5), (8, 6), (8, 7), (8, 11), (8, 12), (8, 13),
        // Bottom half, mirrored
        (10, 5), (10, 6), (10, 7), (10, 11), (10, 12), (10, 13),
        (11, 3), (12, 3), (13, 3),
        (11, 8), (12, 8), (13, 8),
        (11, 10), (12, 10), (13, 10),
        (11, 15), (12, 15), (13, 15),
        (15, 5), (15, 6), (15, 7), (15, 11), (15, 12), (15, 13),
    ],
};

/// Stamp `pattern` at a uniformly random anchor chosen so the bounding box
/// fits entirely inside the grid. The box is cleared before the pattern's
/// offsets are raised: stamping onto a populated area must not leave orphan
/// live cells behind.
///
/// Returns `false`, leaving the grid untouched, when the grid is smaller
/// than the pattern's box.
pub fn stamp<R: Rng + ?Sized>(grid: &mut Grid, pattern: &Pattern, rng: &mut R) -> bool {
    if grid.width() < pattern.width || grid.height() < pattern.height {
        return false;
    }

    let x0 = rng.gen_range(0..=grid.width() - pattern.width);
    let y0 = rng.gen_range(0..=grid.height() - pattern.height);
    let width = grid.width();
    let cells = grid.cells_mut();

    for dy in 0..pattern.height {
        let row = (y0 + dy) * width + x0;
        cells[row..row + pattern.width].fill(DEAD);
    }
    for &(row, col) in pattern.cells {
        cells[(y0 + row) * width + x0 + col] = ALIVE;
    }

    log::debug!("stamped {} at ({x0}, {y0})", pattern.name);
    true
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::engine::step;

    #[test]
    fn glider_has_five_cells() {
        let mut grid = Grid::new(20, 20).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(stamp(&mut grid, &GLIDER, &mut rng));
        assert_eq!(grid.population(), 5);
    }

    #[test]
    fn stamping_clears_the_bounding_box_first() {
        let mut grid = Grid::new(20, 20).unwrap();
        for y in 0..20 {
            for x in 0..20 {
                grid.set(x, y, ALIVE).unwrap();
            }
        }

        let mut rng = StdRng::seed_from_u64(3);
        assert!(stamp(&mut grid, &GLIDER, &mut rng));
        // 400 live cells, minus the 3x3 box, plus the glider's 5.
        assert_eq!(grid.population(), 400 - 9 + 5);
    }

    #[test]
    fn pulsar_needs_a_17x17_grid() {
        let mut grid = Grid::new(16, 16).unwrap();
        grid.randomize(&mut StdRng::seed_from_u64(5));
        let before = grid.clone();

        let mut rng = StdRng::seed_from_u64(5);
        assert!(!stamp(&mut grid, &PULSAR, &mut rng));
        assert_eq!(grid, before);
    }

    #[test]
    fn pulsar_oscillates_with_period_three() {
        let mut grid = Grid::new(20, 20).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        assert!(stamp(&mut grid, &PULSAR, &mut rng));
        assert_eq!(grid.population(), 48);

        let g1 = step(&grid);
        let g2 = step(&g1);
        let g3 = step(&g2);
        assert_ne!(g1, grid);
        assert_ne!(g2, grid);
        assert_eq!(g3, grid);
    }

    #[test]
    fn anchor_always_fits_on_the_smallest_grid() {
        // Glider on a minimum-size grid: every seed must place it in bounds,
        // which population == 5 confirms (an out-of-range write would panic).
        for seed in 0..50 {
            let mut grid = Grid::new(10, 10).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(stamp(&mut grid, &GLIDER, &mut rng));
            assert_eq!(grid.population(), 5);
        }
    }
}
