//! delve-core: procedural dungeon generation
//!
//! Rooms are scattered over a fixed tile grid, pushed apart until they no
//! longer overlap, connected through an Urquhart graph built on top of a
//! Delaunay triangulation of their centers, and joined by A* corridors.
//! Walls, doors and a spawn point are then derived from the carved layout.
//!
//! Generation runs as a staged state machine so a caller can advance it one
//! bounded unit of work at a time (for example once per rendered frame) and
//! observe every intermediate state. This crate performs no I/O.

pub mod config;
pub mod dungeon;
pub mod error;
pub mod geometry;
pub mod graph;

mod consts;
mod rng;

pub use config::GeneratorConfig;
pub use consts::*;
pub use error::{GenerationError, Result};
pub use rng::GameRng;
