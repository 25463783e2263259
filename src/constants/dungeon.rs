//! BSP partitioning and carving constants.

/// Smallest room interior dimension
pub const MIN_ROOM: i32 = 4;
/// Buffer between a partition edge and its room, applied on both sides
pub const MARGIN: i32 = 2;
/// Smallest partition that can still hold a room
pub const MIN_LEAF: i32 = MIN_ROOM + MARGIN * 2;
/// Smallest region size that may be split along an axis
pub const MIN_SPLIT: i32 = MIN_LEAF * 2;
/// Aspect ratio at which the split axis stops being a random choice
pub const SPLIT_ASPECT_BIAS: f64 = 1.25;
/// Chebyshev radius around locked and secret doors kept free of stairs
pub const STAIR_EXCLUSION_RADIUS: i32 = 3;
