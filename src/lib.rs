//! Toroidal Game of Life engine with incremental redraw tracking.
//!
//! This crate owns the simulation side of a character-cell Life
//! application: the wrap-around grid ([`Grid`]), the pure B3/S23 evaluator
//! ([`engine::step`]), change detection that tells a renderer whether to
//! repaint everything or only a handful of cells ([`ChangeTracker`]),
//! pattern stamping, brush editing, and save/load.
//!
//! Everything else belongs to the driver: timers, input decoding, painting,
//! and sequencing. Every operation here runs to completion on the caller's
//! thread and assumes exclusive access to the grid it is handed; the engine
//! has no notion of a "running" simulation, only one-shot transformations.
//!
//! The usual tick looks like:
//!
//! ```
//! use lifegrid::{engine, ChangeTracker, Grid};
//!
//! let mut grid = Grid::new(20, 20)?;
//! let tracker = ChangeTracker::default();
//!
//! let next = engine::step(&grid);
//! let plan = tracker.diff(&grid, &next);
//! grid = next;
//! // ...hand `plan` to the renderer, repeat on the next timer tick.
//! # let _ = plan;
//! # Ok::<(), lifegrid::GridError>(())
//! ```

pub mod codec;
pub mod diff;
pub mod edit;
pub mod engine;
pub mod error;
pub mod grid;
pub mod pattern;

pub use diff::{ChangeSet, ChangeTracker};
pub use edit::{EditSession, ResizeOutcome, SizeLimit, SizeOp};
pub use error::GridError;
pub use grid::{Cell, Grid, ALIVE, DEAD, MAX_DIM, MIN_DIM};
pub use pattern::{stamp, Pattern, GLIDER, PULSAR};
