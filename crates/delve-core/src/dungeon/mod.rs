//! Dungeon layout: tiles, rooms, corridors and the staged generator

mod features;
mod generator;
mod grid;
mod pathfind;
mod room;
mod separation;
mod tile;

pub use features::{carve_path, carve_rooms, create_walls, place_doors, place_player};
pub use generator::{Generator, Stage};
pub use grid::{Connectivity, Grid};
pub use pathfind::{CorridorCost, PathCost, WalkCost, find_path};
pub use room::Room;
pub use separation::{discard_conflicts, separation_pass, symmetric_ceil};
pub use tile::{Tile, TileFlags, TileType};
