//! Combat and being-stat constants.

/// Base hit points before class scaling
pub const HP_BASE: i64 = 8;
/// Growth factor per class tier for the minimum HP roll
pub const HP_GROWTH_MIN: i64 = 10;
/// Growth factor per class tier for the maximum HP roll
pub const HP_GROWTH_MAX: i64 = 15;
/// Highest class tier with a bestiary entry
pub const MAX_CLASS: u32 = 8;
/// Smallest attack roll
pub const ROLL_MIN: u32 = 1;
/// Largest attack roll
pub const ROLL_MAX: u32 = 100;
