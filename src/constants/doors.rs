//! Door classification constants.

/// Probability that a junction becomes a special door instead of a plain one.
/// The three special kinds are then equally likely.
pub const SPECIAL_DOOR_CHANCE: f64 = 0.16;
