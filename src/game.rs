//! Read-only game layer over a generated grid.
//!
//! The grid is consumed as an immutable value: movement legality checks, stair
//! lookup, being stats, and the damage formula live here, none of it feeds
//! back into generation.

use rand::Rng;

use crate::cell::Cell;
use crate::constants::{HP_BASE, HP_GROWTH_MIN, HP_GROWTH_MAX, MAX_CLASS};
use crate::grid::Grid;

/// Whether a being may stand on `(x, y)`.
pub fn is_walkable(grid: &Grid, x: i32, y: i32) -> bool {
    grid.get(x, y).is_some_and(Cell::is_walkable)
}

/// First cell of `kind` in row-major order. Used to locate stairs.
pub fn find_cell(grid: &Grid, kind: Cell) -> Option<(i32, i32)> {
    grid.iter_cells()
        .find(|&(_, cell)| cell == kind)
        .map(|(pos, _)| pos)
}

/// Sample `count` distinct room cells for enemy spawns. Returns an empty list
/// when the grid has fewer room cells than requested.
pub fn spawn_positions(grid: &Grid, count: usize, rng: &mut impl Rng) -> Vec<(i32, i32)> {
    let rooms: Vec<(i32, i32)> = grid
        .iter_cells()
        .filter(|&(_, cell)| cell == Cell::Room)
        .map(|(pos, _)| pos)
        .collect();
    if rooms.len() < count {
        log::warn!(
            "wanted {count} spawn positions but only {} room cells exist",
            rooms.len()
        );
        return Vec::new();
    }
    rand::seq::index::sample(rng, rooms.len(), count)
        .iter()
        .map(|i| rooms[i])
        .collect()
}

/// A player or enemy. Stats are rolled once from the class tier.
#[derive(Debug, Clone)]
pub struct Being {
    pub name: String,
    pub class_number: u32,
    pub hp: i64,
    pub max_hp: i64,
    pub defense: i64,
    pub attack_power: i64,
    pub special_power: i64,
    pub position: (i32, i32),
}

impl Being {
    pub fn new(name: &str, class_number: u32, position: (i32, i32), rng: &mut impl Rng) -> Self {
        let tier = class_number.clamp(1, MAX_CLASS) - 1;
        let min_hp = HP_BASE * HP_GROWTH_MIN.pow(tier);
        let mut max_hp = HP_BASE * HP_GROWTH_MAX.pow(tier);
        if min_hp >= max_hp {
            max_hp = min_hp * 3 / 2;
        }
        let hp = rng.gen_range(min_hp..=max_hp).max(1);

        // Secondary stats scale off the rolled HP; divisors floor like the
        // HP fractions they approximate.
        let defense = rng
            .gen_range((hp as f64 / 3.5) as i64..=(hp as f64 / 3.0) as i64)
            .max(1);
        let attack_power = rng
            .gen_range((hp as f64 / 4.0) as i64..=(hp as f64 / 3.5) as i64)
            .max(1);
        let special_power = rng
            .gen_range((hp as f64 / 3.0) as i64..=(hp as f64 / 2.0) as i64)
            .max(attack_power + 1);

        Self {
            name: name.to_string(),
            class_number,
            hp,
            max_hp: hp,
            defense,
            attack_power,
            special_power,
            position,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Apply damage, clamped to non-negative HP. Returns the damage dealt.
    pub fn take_damage(&mut self, damage: i64) -> i64 {
        let actual = damage.max(0);
        self.hp = (self.hp - actual).max(0);
        actual
    }
}

/// Damage for one attack given a roll in `ROLL_MIN..=ROLL_MAX`: the roll
/// scales the attack stat between 0.5x and 1.5x, then the defender's
/// defense-to-max-HP ratio shaves off its share.
pub fn calculate_damage(attacker: &Being, defender: &Being, roll: u32, use_special: bool) -> i64 {
    let attack_stat = if use_special {
        attacker.special_power
    } else {
        attacker.attack_power
    };
    if defender.max_hp <= 0 {
        return 0;
    }
    let modifier = 0.5 + roll as f64 / 100.0;
    let base = modifier * attack_stat as f64;
    let defense_factor = defender.defense as f64 / defender.max_hp as f64;
    ((base * (1.0 - defense_factor)) as i64).max(0)
}
