//! A* search over the tile grid
//!
//! Costs are pluggable through [`PathCost`]: corridor carving treats every
//! tile as passable and only biases the heuristic, while gameplay queries
//! are limited to walkable tiles.

use core::cmp::Ordering;
use std::collections::BinaryHeap;

use super::grid::{Connectivity, Grid};
use super::tile::TileType;

/// Cost model for [`find_path`]
pub trait PathCost {
    /// Check if the search may enter `pos`
    fn passable(&self, grid: &Grid, pos: (u32, u32)) -> bool;

    /// Cost of moving between two adjacent tiles
    fn step_cost(&self, _grid: &Grid, _from: (u32, u32), _to: (u32, u32)) -> u64 {
        1
    }

    /// Estimated remaining cost from `pos` to `goal`
    fn heuristic(&self, grid: &Grid, pos: (u32, u32), goal: (u32, u32)) -> u64;
}

fn distance_sq(a: (u32, u32), b: (u32, u32)) -> u64 {
    let dx = a.0.abs_diff(b.0) as u64;
    let dy = a.1.abs_diff(b.1) as u64;
    dx * dx + dy * dy
}

/// Corridor carving costs
///
/// Every tile is passable. The heuristic is the squared Euclidean distance
/// to the goal, multiplied by `empty_tile_weight` on tiles that are still
/// Empty so corridors drift onto existing floor. It overestimates on
/// purpose, so paths are not guaranteed shortest.
#[derive(Debug, Clone, Copy)]
pub struct CorridorCost {
    pub empty_tile_weight: u32,
}

impl PathCost for CorridorCost {
    fn passable(&self, _grid: &Grid, _pos: (u32, u32)) -> bool {
        true
    }

    fn heuristic(&self, grid: &Grid, pos: (u32, u32), goal: (u32, u32)) -> u64 {
        let weight = match grid[pos].kind {
            TileType::Empty => self.empty_tile_weight as u64,
            _ => 1,
        };
        distance_sq(pos, goal) * weight
    }
}

/// Walking costs: only walkable tiles, Chebyshev heuristic
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkCost;

impl PathCost for WalkCost {
    fn passable(&self, grid: &Grid, pos: (u32, u32)) -> bool {
        grid[pos].kind.is_walkable()
    }

    fn heuristic(&self, _grid: &Grid, pos: (u32, u32), goal: (u32, u32)) -> u64 {
        pos.0.abs_diff(goal.0).max(pos.1.abs_diff(goal.1)) as u64
    }
}

/// Open-set entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    idx: usize,
    g_cost: u64,
    f_cost: u64,
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.g_cost.cmp(&self.g_cost))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reconstruct path from came_from links, start first
fn reconstruct_path(grid: &Grid, came_from: &[Option<usize>], end: usize) -> Vec<(u32, u32)> {
    let mut path = vec![grid.pos_of(end)];
    let mut current = end;

    while let Some(prev) = came_from[current] {
        path.push(grid.pos_of(prev));
        current = prev;
    }

    path.reverse();
    path
}

/// Find a path from `start` to `goal`, both included
///
/// Returns `None` if either endpoint is off the grid or impassable, or if
/// the open set runs dry before reaching the goal.
pub fn find_path<C: PathCost>(
    grid: &Grid,
    start: (u32, u32),
    goal: (u32, u32),
    connectivity: Connectivity,
    cost: &C,
) -> Option<Vec<(u32, u32)>> {
    let start_idx = grid.index_of(start.0, start.1)?;
    let goal_idx = grid.index_of(goal.0, goal.1)?;
    if !cost.passable(grid, start) || !cost.passable(grid, goal) {
        return None;
    }

    let len = grid.tiles().len();
    let mut open_set = BinaryHeap::new();
    let mut g_scores = vec![u64::MAX; len];
    let mut came_from: Vec<Option<usize>> = vec![None; len];
    let mut closed = vec![false; len];

    g_scores[start_idx] = 0;
    open_set.push(Node {
        idx: start_idx,
        g_cost: 0,
        f_cost: cost.heuristic(grid, start, goal),
    });

    while let Some(current) = open_set.pop() {
        if current.idx == goal_idx {
            return Some(reconstruct_path(grid, &came_from, goal_idx));
        }

        if closed[current.idx] {
            continue;
        }
        closed[current.idx] = true;

        let pos = grid.pos_of(current.idx);
        for next in grid.neighbours(pos.0, pos.1, connectivity) {
            let Some(next_idx) = grid.index_of(next.0, next.1) else {
                continue;
            };
            if closed[next_idx] || !cost.passable(grid, next) {
                continue;
            }

            let new_g = current.g_cost + cost.step_cost(grid, pos, next);
            if new_g < g_scores[next_idx] {
                g_scores[next_idx] = new_g;
                came_from[next_idx] = Some(current.idx);
                open_set.push(Node {
                    idx: next_idx,
                    g_cost: new_g,
                    f_cost: new_g + cost.heuristic(grid, next, goal),
                });
            }
        }
    }

    None // No path found
}
