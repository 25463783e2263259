//! Content-addressed dungeon records.
//!
//! A record's `id` is the hex MD5 digest of the canonical map serialization:
//! the compact JSON encoding (no whitespace) of the map as nested arrays of
//! wire codes, outer array of `height` rows, inner arrays of `width` codes.
//! The hash covers the final grid, after stair placement, so records with the
//! same `(seed, width, height)` share one id and external storage can
//! deduplicate on it.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonRecord {
    /// Hex MD5 of the canonical map serialization.
    pub id: String,
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    /// `height` rows of `width` cell codes.
    pub map: Vec<Vec<u8>>,
}

/// Hash the canonical serialization of a code matrix.
pub fn content_hash(map: &[Vec<u8>]) -> Result<String, serde_json::Error> {
    let canonical = serde_json::to_string(map)?;
    Ok(format!("{:x}", md5::compute(canonical.as_bytes())))
}

/// Package a finished grid into a persistable record.
pub fn finalize(
    seed: u64,
    width: usize,
    height: usize,
    grid: &Grid,
) -> Result<DungeonRecord, serde_json::Error> {
    let map = grid.to_codes();
    let id = content_hash(&map)?;
    Ok(DungeonRecord {
        id,
        width,
        height,
        seed,
        map,
    })
}
