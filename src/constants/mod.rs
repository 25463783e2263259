//! Generation and game constants organized by domain.
//!
//! The dungeon and door values are load-bearing: changing any of them changes
//! every grid produced from every seed.

mod combat;
mod doors;
mod dungeon;
mod render;

pub use combat::*;
pub use doors::*;
pub use dungeon::*;
pub use render::*;
