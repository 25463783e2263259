//! BSP dungeon generation.
//!
//! The pipeline runs in strict phase order: partition the map into a binary
//! tree of regions, carve one room per leaf and connect sibling subtrees with
//! corridors, classify room/corridor junctions into doors, then place the two
//! stairs. All randomness comes from one seeded generator threaded through
//! the phases, so a `(seed, width, height)` triple always reproduces the same
//! grid bit for bit.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cell::Cell;
use crate::constants::*;
use crate::error::GenerationError;
use crate::grid::Grid;
use crate::record::{finalize, DungeonRecord};

/// An axis-aligned rectangle of grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// A node in the partition tree. Leaves own at most one room; internal nodes
/// own exactly two children covering disjoint halves of the region.
struct BspNode {
    region: Rect,
    room: Option<Rect>,
    children: Option<(usize, usize)>,
}

impl BspNode {
    fn new(region: Rect) -> Self {
        Self {
            region,
            room: None,
            children: None,
        }
    }
}

/// Partition tree stored as an arena; children are referenced by index, so
/// the structure is a strict acyclic tree by construction.
struct PartitionTree {
    nodes: Vec<BspNode>,
}

impl PartitionTree {
    /// Build the tree for a `width`-by-`height` map.
    ///
    /// Construction is breadth-first so that random draws are consumed in a
    /// stable order for a given seed; a depth-first build with the same
    /// generator would produce a different tree.
    fn build(width: i32, height: i32, rng: &mut impl Rng) -> Self {
        let mut tree = Self {
            nodes: vec![BspNode::new(Rect::new(0, 0, width, height))],
        };
        let mut queue = VecDeque::from([0usize]);
        while let Some(idx) = queue.pop_front() {
            if let Some((left, right)) = tree.try_split(idx, rng) {
                queue.push_back(left);
                queue.push_back(right);
            }
        }
        tree
    }

    /// Split `idx` into two children if its region allows it. A region that
    /// cannot fit two minimum leaves along either axis stays a leaf, which is
    /// the designed termination path rather than an error.
    fn try_split(&mut self, idx: usize, rng: &mut impl Rng) -> Option<(usize, usize)> {
        let Rect {
            x,
            y,
            width: w,
            height: h,
        } = self.nodes[idx].region;

        let can_split_width = w >= MIN_SPLIT;
        let can_split_height = h >= MIN_SPLIT;
        if !can_split_width && !can_split_height {
            return None;
        }

        // Strongly elongated regions are always split across their long axis;
        // near-square ones pick an axis at random.
        let mut divide_width = if w > h && w as f64 / h as f64 >= SPLIT_ASPECT_BIAS {
            true
        } else if h > w && h as f64 / w as f64 >= SPLIT_ASPECT_BIAS {
            false
        } else {
            rng.gen_bool(0.5)
        };
        if divide_width && !can_split_width {
            divide_width = false;
        } else if !divide_width && !can_split_height {
            divide_width = true;
        }

        let (first, second) = if divide_width {
            let offset = rng.gen_range(MIN_LEAF..=w - MIN_LEAF);
            (
                Rect::new(x, y, offset, h),
                Rect::new(x + offset, y, w - offset, h),
            )
        } else {
            let offset = rng.gen_range(MIN_LEAF..=h - MIN_LEAF);
            (
                Rect::new(x, y, w, offset),
                Rect::new(x, y + offset, w, h - offset),
            )
        };

        let left = self.push(first);
        let right = self.push(second);
        self.nodes[idx].children = Some((left, right));
        Some((left, right))
    }

    fn push(&mut self, region: Rect) -> usize {
        self.nodes.push(BspNode::new(region));
        self.nodes.len() - 1
    }

    /// Carve rooms and corridors below `idx`, post-order, and return the
    /// subtree's room center: a leaf yields its room's center, an internal
    /// node one of its children's centers picked at random. The center is
    /// computed once here and propagated upward, never recomputed.
    fn carve(&mut self, idx: usize, grid: &mut Grid, rng: &mut impl Rng) -> Option<(i32, i32)> {
        match self.nodes[idx].children {
            Some((left, right)) => {
                let first = self.carve(left, grid, rng);
                let second = self.carve(right, grid, rng);
                if let (Some(a), Some(b)) = (first, second) {
                    carve_corridor(grid, a, b, rng);
                }
                match (first, second) {
                    (Some(a), Some(b)) => Some(if rng.gen_bool(0.5) { a } else { b }),
                    (center, None) => center,
                    (None, center) => center,
                }
            }
            None => {
                let room = carve_room(&self.nodes[idx].region, grid, rng);
                self.nodes[idx].room = Some(room);
                Some(room.center())
            }
        }
    }

    /// Rooms carved so far, in leaf-creation order.
    fn rooms(&self) -> Vec<Rect> {
        self.nodes.iter().filter_map(|node| node.room).collect()
    }
}

/// Pick a room size and position inside the leaf region, inset from the
/// partition edges, and fill it with `Room` cells.
fn carve_room(region: &Rect, grid: &mut Grid, rng: &mut impl Rng) -> Rect {
    let inset = MARGIN / 2;
    let room_w = rng.gen_range(MIN_ROOM..=region.width - MARGIN);
    let room_h = rng.gen_range(MIN_ROOM..=region.height - MARGIN);
    let room_x = rng.gen_range(region.x + inset..=region.x + region.width - room_w - inset);
    let room_y = rng.gen_range(region.y + inset..=region.y + region.height - room_h - inset);

    for y in room_y..room_y + room_h {
        for x in room_x..room_x + room_w {
            grid.set(x, y, Cell::Room);
        }
    }
    Rect::new(room_x, room_y, room_w, room_h)
}

/// Step one cell at a time from `from` toward `to`, preferring the axis with
/// the larger remaining distance and breaking ties at random. Only `Wall`
/// cells become `Corridor`; rooms and earlier corridors are never overwritten.
fn carve_corridor(grid: &mut Grid, from: (i32, i32), to: (i32, i32), rng: &mut impl Rng) {
    let (mut cx, mut cy) = from;
    let (x2, y2) = to;

    while cx != x2 || cy != y2 {
        let dx = (x2 - cx).abs();
        let dy = (y2 - cy).abs();
        let step_x = if dx > 0 && dy > 0 {
            if dx != dy {
                dx > dy
            } else {
                rng.gen_bool(0.5)
            }
        } else {
            dx > 0
        };

        if step_x {
            cx += (x2 - cx).signum();
        } else {
            cy += (y2 - cy).signum();
        }
        if grid.get(cx, cy) == Some(Cell::Wall) {
            grid.set(cx, cy, Cell::Corridor);
        }
    }
}

/// Scan interior cells left to right, top to bottom, and turn corridor cells
/// at room/corridor junctions into doors. Mutation happens during the scan,
/// so an earlier door can influence the neighbor reads of later candidates;
/// that ordering is part of the reproducible output.
fn place_doors(grid: &mut Grid, rng: &mut impl Rng) {
    const SPECIAL_KINDS: [Cell; 3] = [Cell::SecretDoor, Cell::LockedDoor, Cell::TrapDoor];

    let width = grid.width() as i32;
    let height = grid.height() as i32;
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            if grid.get(x, y) != Some(Cell::Corridor) {
                continue;
            }
            let up = grid.get(x, y - 1);
            let down = grid.get(x, y + 1);
            let left = grid.get(x - 1, y);
            let right = grid.get(x + 1, y);

            let room = Some(Cell::Room);
            let corridor = Some(Cell::Corridor);
            let wall = Some(Cell::Wall);

            let vertical = ((up == room && down == corridor) || (down == room && up == corridor))
                && left == wall
                && right == wall;
            let horizontal = ((left == room && right == corridor)
                || (right == room && left == corridor))
                && up == wall
                && down == wall;

            if vertical || horizontal {
                let kind = if rng.gen::<f64>() > SPECIAL_DOOR_CHANCE {
                    Cell::Door
                } else {
                    SPECIAL_KINDS[rng.gen_range(0..SPECIAL_KINDS.len())]
                };
                grid.set(x, y, kind);
            }
        }
    }
}

/// Place the up and down stairs on two distinct room cells away from locked
/// and secret doors. Fewer than two valid cells is a designed degenerate
/// case; the grid is simply left without stairs.
fn place_stairs(grid: &mut Grid, rng: &mut impl Rng) {
    let special_doors: Vec<(i32, i32)> = grid
        .iter_cells()
        .filter(|&(_, cell)| cell == Cell::LockedDoor || cell == Cell::SecretDoor)
        .map(|(pos, _)| pos)
        .collect();

    let near_special = |(x, y): (i32, i32)| {
        special_doors
            .iter()
            .any(|&(sx, sy)| (sx - x).abs().max((sy - y).abs()) <= STAIR_EXCLUSION_RADIUS)
    };

    let spots: Vec<(i32, i32)> = grid
        .iter_cells()
        .filter(|&(pos, cell)| cell == Cell::Room && !near_special(pos))
        .map(|(pos, _)| pos)
        .collect();

    if spots.len() < 2 {
        log::debug!(
            "only {} stair-safe room cells, leaving stairs unplaced",
            spots.len()
        );
        return;
    }

    // One 2-of-N draw without replacement; drawing twice independently could
    // land both stairs on the same cell.
    let picked = rand::seq::index::sample(rng, spots.len(), 2);
    let (ux, uy) = spots[picked.index(0)];
    let (dx, dy) = spots[picked.index(1)];
    grid.set(ux, uy, Cell::StairUp);
    grid.set(dx, dy, Cell::StairDown);
}

/// Generate the dungeon for `(seed, height, width)` and package it as a
/// content-addressed record.
pub fn generate(seed: u64, height: usize, width: usize) -> Result<DungeonRecord, GenerationError> {
    let min = MIN_LEAF as usize;
    if width < min || height < min {
        return Err(GenerationError::DimensionsTooSmall { width, height, min });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::filled(width, height, Cell::Wall);

    let mut tree = PartitionTree::build(width as i32, height as i32, &mut rng);
    tree.carve(0, &mut grid, &mut rng);
    place_doors(&mut grid, &mut rng);
    place_stairs(&mut grid, &mut rng);

    log::debug!(
        "generated {}x{} dungeon: {} rooms, {} corridor cells",
        width,
        height,
        tree.rooms().len(),
        grid.count(Cell::Corridor)
    );
    Ok(finalize(seed, width, height, &grid)?)
}
