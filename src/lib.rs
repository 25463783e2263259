//! Deterministic BSP dungeon generation with content-addressed persistence.
//!
//! [`generate`] turns a `(seed, height, width)` triple into a
//! [`DungeonRecord`]: a tile grid of rooms, corridors, doors, and stairs plus
//! an id hashed from the grid contents. The same inputs always produce the
//! same record. The [`storage`], [`renderer`], and [`game`] modules are
//! collaborators that consume the finished grid; generation never depends on
//! them.

pub mod cell;
pub mod constants;
pub mod dungeon_gen;
pub mod error;
pub mod game;
pub mod grid;
pub mod record;
pub mod renderer;
pub mod storage;

pub use cell::Cell;
pub use dungeon_gen::{generate, Rect};
pub use error::{GenerationError, StorageError};
pub use grid::Grid;
pub use record::DungeonRecord;
