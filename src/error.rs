use thiserror::Error;

/// Failures while producing a dungeon record.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Requested dimensions cannot contain even one minimum-size partition.
    #[error("dungeon dimensions {width}x{height} are too small, both must be at least {min}")]
    DimensionsTooSmall {
        width: usize,
        height: usize,
        min: usize,
    },
    #[error("failed to encode map for hashing: {0}")]
    MapEncoding(#[from] serde_json::Error),
}

/// Failures in the persistence collaborator, distinct from generation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("record I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),
    /// Missing keys, a ragged or mis-sized map, or unknown cell codes.
    #[error("corrupt dungeon record: {0}")]
    CorruptRecord(String),
}
