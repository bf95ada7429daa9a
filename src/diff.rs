use crate::grid::Grid;

/// Redraw plan produced by [`ChangeTracker::diff`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeSet {
    /// Exactly the `(x, y)` coordinates whose value differs, row-major.
    Cells(Vec<(usize, usize)>),
    /// Too much changed (or the dimensions did): repaint the whole surface.
    Full,
}

impl ChangeSet {
    pub fn is_full(&self) -> bool {
        matches!(self, ChangeSet::Full)
    }

    /// True when nothing changed at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, ChangeSet::Cells(cells) if cells.is_empty())
    }
}

/// Decides between enumerating changed cells and a full-surface repaint.
///
/// Enumeration is exact and never under-reports: every coordinate whose
/// value differs is listed. Once more than `full_redraw_fraction` of all
/// cells differ, a `Full` sentinel is returned instead and the renderer
/// repaints the whole surface.
#[derive(Debug, Clone)]
pub struct ChangeTracker {
    full_redraw_fraction: f64,
}

impl Default for ChangeTracker {
    fn default() -> Self {
        Self::new(0.25)
    }
}

impl ChangeTracker {
    /// `full_redraw_fraction` is the share of total cells above which `diff`
    /// collapses to [`ChangeSet::Full`].
    pub fn new(full_redraw_fraction: f64) -> Self {
        Self {
            full_redraw_fraction,
        }
    }

    /// Compare two generations (or pre/post-edit snapshots). Grids of
    /// different dimensions are entirely dirty by definition.
    pub fn diff(&self, old: &Grid, new: &Grid) -> ChangeSet {
        if old.width() != new.width() || old.height() != new.height() {
            return ChangeSet::Full;
        }

        let width = old.width();
        let total = width * old.height();
        let limit = (total as f64 * self.full_redraw_fraction) as usize;

        let mut changed = Vec::new();
        for (i, (a, b)) in old.cells().iter().zip(new.cells()).enumerate() {
            if a != b {
                if changed.len() == limit {
                    return ChangeSet::Full;
                }
                changed.push((i % width, i / width));
            }
        }
        ChangeSet::Cells(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, ALIVE};

    #[test]
    fn identical_grids_produce_an_empty_set() {
        let grid = Grid::new(20, 20).unwrap();
        let diff = ChangeTracker::default().diff(&grid, &grid.clone());
        assert!(diff.is_empty());
        assert!(!diff.is_full());
    }

    #[test]
    fn reports_exactly_the_toggled_cells() {
        let old = Grid::new(20, 20).unwrap();
        let mut new = old.clone();
        new.set(3, 1, ALIVE).unwrap();
        new.set(7, 4, ALIVE).unwrap();
        new.set(19, 19, ALIVE).unwrap();

        let diff = ChangeTracker::default().diff(&old, &new);
        assert_eq!(
            diff,
            ChangeSet::Cells(vec![(3, 1), (7, 4), (19, 19)])
        );
    }

    #[test]
    fn collapses_to_full_above_the_threshold() {
        let old = Grid::new(10, 10).unwrap();
        let mut new = old.clone();
        // 26 of 100 cells changed: past the default quarter.
        for i in 0..26 {
            new.set(i % 10, i / 10, ALIVE).unwrap();
        }
        assert_eq!(ChangeTracker::default().diff(&old, &new), ChangeSet::Full);
    }

    #[test]
    fn stays_explicit_at_the_threshold() {
        let old = Grid::new(10, 10).unwrap();
        let mut new = old.clone();
        for i in 0..25 {
            new.set(i % 10, i / 10, ALIVE).unwrap();
        }
        match ChangeTracker::default().diff(&old, &new) {
            ChangeSet::Cells(cells) => assert_eq!(cells.len(), 25),
            ChangeSet::Full => panic!("25% changed must still be enumerated"),
        }
    }

    #[test]
    fn dimension_mismatch_is_fully_dirty() {
        let old = Grid::new(10, 10).unwrap();
        let new = Grid::new(20, 10).unwrap();
        assert_eq!(ChangeTracker::default().diff(&old, &new), ChangeSet::Full);
    }

    #[test]
    fn custom_fraction_is_respected() {
        let old = Grid::new(10, 10).unwrap();
        let mut new = old.clone();
        for x in 0..6 {
            new.set(x, 0, ALIVE).unwrap();
        }
        // 6 changes, limit of 5.
        assert_eq!(ChangeTracker::new(0.05).diff(&old, &new), ChangeSet::Full);
    }
}
