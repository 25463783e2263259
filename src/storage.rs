//! JSON persistence for dungeon records.
//!
//! Records are stored content-addressed as `<id>.json`; a file that already
//! exists under that name holds the same content by construction and is
//! reused instead of rewritten.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::grid::Grid;
use crate::record::DungeonRecord;

/// Write `record` into `dir`, returning the record's path.
pub fn save_record(record: &DungeonRecord, dir: &Path) -> Result<PathBuf, StorageError> {
    let path = dir.join(format!("{}.json", record.id));
    if path.exists() {
        log::debug!("record {} already stored, reusing it", record.id);
        return Ok(path);
    }
    let json = serde_json::to_string(record).map_err(StorageError::Encode)?;
    fs::write(&path, json)?;
    log::info!("saved dungeon record to {}", path.display());
    Ok(path)
}

/// Read and validate a record from disk.
pub fn load_record(path: &Path) -> Result<DungeonRecord, StorageError> {
    let raw = fs::read_to_string(path)?;
    parse_record(&raw)
}

/// Parse and validate a record from its JSON text.
pub fn parse_record(raw: &str) -> Result<DungeonRecord, StorageError> {
    let record: DungeonRecord = serde_json::from_str(raw)
        .map_err(|err| StorageError::CorruptRecord(err.to_string()))?;
    validate_record(&record)?;
    Ok(record)
}

/// Rebuild the cell grid a record describes.
pub fn record_grid(record: &DungeonRecord) -> Result<Grid, StorageError> {
    validate_record(record)?;
    Grid::from_codes(&record.map).ok_or_else(|| {
        StorageError::CorruptRecord("map contains unknown cell codes".to_string())
    })
}

fn validate_record(record: &DungeonRecord) -> Result<(), StorageError> {
    if record.map.len() != record.height {
        return Err(StorageError::CorruptRecord(format!(
            "declared height {} but map has {} rows",
            record.height,
            record.map.len()
        )));
    }
    for (y, row) in record.map.iter().enumerate() {
        if row.len() != record.width {
            return Err(StorageError::CorruptRecord(format!(
                "declared width {} but row {} has {} cells",
                record.width,
                y,
                row.len()
            )));
        }
        if let Some(&code) = row.iter().find(|&&code| code > 9) {
            return Err(StorageError::CorruptRecord(format!(
                "unknown cell code {code} in row {y}"
            )));
        }
    }
    Ok(())
}
