//! Staged dungeon generator
//!
//! Generation is split into stages that each do a bounded amount of work
//! per [`Generator::step`] call, so a caller can render the intermediate
//! layouts. Stages only move forward:
//!
//! CreateRooms → FitRooms → DiscardRooms → ConnectRooms → CreatePaths →
//! CreateWalls → PlacePlayer → PlaceDoors → Finished

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::features::{carve_path, carve_rooms, create_walls, place_doors, place_player};
use super::grid::{Connectivity, Grid};
use super::pathfind::{CorridorCost, find_path};
use super::room::Room;
use super::separation::{discard_conflicts, separation_pass};
use super::tile::TileType;
use crate::config::GeneratorConfig;
use crate::error::{GenerationError, Result};
use crate::geometry::{Edge, Triangle, Vec2f};
use crate::graph::RoomGraph;
use crate::rng::GameRng;

/// Generation stage
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Stage {
    /// Sample one candidate room per step
    #[default]
    #[strum(serialize = "Create Rooms")]
    CreateRooms,
    /// One separation pass per step
    #[strum(serialize = "Fit Rooms")]
    FitRooms,
    #[strum(serialize = "Discard Rooms")]
    DiscardRooms,
    #[strum(serialize = "Connect Rooms")]
    ConnectRooms,
    /// One corridor per step
    #[strum(serialize = "Create Paths")]
    CreatePaths,
    #[strum(serialize = "Create Walls")]
    CreateWalls,
    #[strum(serialize = "Place Player")]
    PlacePlayer,
    #[strum(serialize = "Place Doors")]
    PlaceDoors,
    #[strum(serialize = "Finished")]
    Finished,
}

impl Stage {
    /// The stage that follows this one; `Finished` is its own successor
    pub const fn next(self) -> Stage {
        match self {
            Stage::CreateRooms => Stage::FitRooms,
            Stage::FitRooms => Stage::DiscardRooms,
            Stage::DiscardRooms => Stage::ConnectRooms,
            Stage::ConnectRooms => Stage::CreatePaths,
            Stage::CreatePaths => Stage::CreateWalls,
            Stage::CreateWalls => Stage::PlacePlayer,
            Stage::PlacePlayer => Stage::PlaceDoors,
            Stage::PlaceDoors | Stage::Finished => Stage::Finished,
        }
    }
}

/// Resumable dungeon generator
///
/// Owns the grid and every intermediate product until generation
/// finishes. Once a step fails, every later step returns the same error.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    rng: GameRng,
    stage: Stage,
    rooms: Vec<Room>,
    grid: Grid,
    graph: RoomGraph,
    fit_passes: u32,
    paths_carved: usize,
    failure: Option<GenerationError>,
}

impl Generator {
    /// Create a generator positioned at `CreateRooms`
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rng: GameRng::new(config.seed),
            grid: Grid::new(config.width, config.height),
            config,
            stage: Stage::CreateRooms,
            rooms: Vec::new(),
            graph: RoomGraph::default(),
            fit_passes: 0,
            paths_carved: 0,
            failure: None,
        })
    }

    /// Generate a complete dungeon, regenerating when no room survives
    ///
    /// Attempt `n` (from zero) uses seed `config.seed + n`.
    pub fn generate(config: GeneratorConfig) -> Result<Self> {
        Self::generate_with(config, Self::run)
    }

    /// Retry loop behind [`Generator::generate`], with the per-attempt
    /// driver passed in
    fn generate_with(
        config: GeneratorConfig,
        mut drive: impl FnMut(&mut Self) -> Result<()>,
    ) -> Result<Self> {
        config.validate()?;
        for attempt in 0..config.max_attempts {
            let seed = config.seed.wrapping_add(attempt as u64);
            let mut generator = Self::new(GeneratorConfig {
                seed,
                ..config.clone()
            })?;
            match drive(&mut generator) {
                Ok(()) => return Ok(generator),
                Err(GenerationError::InsufficientRooms { survivors }) => {
                    warn!("Seed {seed} left {survivors} rooms, regenerating");
                }
                Err(e) => return Err(e),
            }
        }
        Err(GenerationError::AttemptsExhausted {
            attempts: config.max_attempts,
        })
    }

    /// Step until `Finished`
    pub fn run(&mut self) -> Result<()> {
        for _ in 0..self.config.max_steps() {
            if self.is_finished() {
                return Ok(());
            }
            self.step()?;
        }
        if self.is_finished() {
            Ok(())
        } else {
            Err(GenerationError::NotFinished { stage: self.stage })
        }
    }

    /// Perform one unit of work and return the stage now current
    pub fn step(&mut self) -> Result<Stage> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let result = match self.stage {
            Stage::CreateRooms => self.create_rooms(),
            Stage::FitRooms => self.fit_rooms(),
            Stage::DiscardRooms => self.discard_rooms(),
            Stage::ConnectRooms => self.connect_rooms(),
            Stage::CreatePaths => self.create_paths(),
            Stage::CreateWalls => self.create_walls(),
            Stage::PlacePlayer => self.place_player(),
            Stage::PlaceDoors => self.place_doors(),
            Stage::Finished => Ok(()),
        };

        match result {
            Ok(()) => Ok(self.stage),
            Err(e) => {
                self.failure = Some(e.clone());
                Err(e)
            }
        }
    }

    fn advance(&mut self) {
        let next = self.stage.next();
        debug!("Stage '{}' -> '{}'", self.stage, next);
        self.stage = next;
    }

    fn create_rooms(&mut self) -> Result<()> {
        if self.rooms.len() < self.config.room_count as usize {
            let room = Room::random(&mut self.rng, &self.config);
            self.rooms.push(room);
        }
        if self.rooms.len() >= self.config.room_count as usize {
            self.advance();
        }
        Ok(())
    }

    fn fit_rooms(&mut self) -> Result<()> {
        if self.fit_passes >= self.config.separation_iterations {
            self.advance();
            return Ok(());
        }

        let conflicts = separation_pass(
            &mut self.rooms,
            self.config.width,
            self.config.height,
            self.config.separation_overshoot,
        );
        self.fit_passes += 1;
        debug!("Separation pass {}: {} conflicts", self.fit_passes, conflicts);

        if conflicts == 0 || self.fit_passes >= self.config.separation_iterations {
            self.advance();
        }
        Ok(())
    }

    fn discard_rooms(&mut self) -> Result<()> {
        discard_conflicts(&mut self.rooms, self.config.width, self.config.height);
        if self.rooms.is_empty() {
            return Err(GenerationError::InsufficientRooms { survivors: 0 });
        }
        carve_rooms(&mut self.grid, &self.rooms);
        self.advance();
        Ok(())
    }

    fn connect_rooms(&mut self) -> Result<()> {
        if self.rooms.len() < 2 {
            debug!("Single room, no corridors to connect");
        } else {
            let centers: Vec<Vec2f> = self.rooms.iter().map(Room::center_point).collect();
            self.graph = RoomGraph::build(&centers);
            debug!(
                "Room graph: {} triangles, {} edges",
                self.graph.triangles.len(),
                self.graph.edges.len()
            );
        }
        self.advance();
        Ok(())
    }

    /// Grid tile nearest to `p`
    fn tile_at(&self, p: Vec2f) -> (u32, u32) {
        let clamp = |v: f32, limit: u32| (v.round().max(0.0) as u32).min(limit - 1);
        (clamp(p.x, self.config.width), clamp(p.y, self.config.height))
    }

    fn create_paths(&mut self) -> Result<()> {
        if let Some(edge) = self.graph.edges.get(self.paths_carved).copied() {
            let from = self.tile_at(edge.a);
            let to = self.tile_at(edge.b);
            let cost = CorridorCost {
                empty_tile_weight: self.config.empty_tile_weight,
            };
            let path = find_path(&self.grid, from, to, Connectivity::Four, &cost)
                .ok_or(GenerationError::Unreachable { from, to })?;
            carve_path(&mut self.grid, &path);
            self.paths_carved += 1;
        }
        if self.paths_carved >= self.graph.edges.len() {
            self.advance();
        }
        Ok(())
    }

    fn create_walls(&mut self) -> Result<()> {
        let walls = create_walls(&mut self.grid);
        debug!("Created {walls} wall tiles");
        self.advance();
        Ok(())
    }

    fn place_player(&mut self) -> Result<()> {
        let spawn = place_player(&mut self.grid, &mut self.rng).ok_or(
            GenerationError::InsufficientRooms {
                survivors: self.rooms.len(),
            },
        )?;
        debug!("Spawn at {spawn:?}");
        self.advance();
        Ok(())
    }

    fn place_doors(&mut self) -> Result<()> {
        place_doors(&mut self.grid);
        self.advance();
        info!(
            "Generated dungeon (seed {}): {} rooms, {} corridors, {} floor, {} wall, {} door tiles",
            self.rng.seed(),
            self.rooms.len(),
            self.graph.edges.len(),
            self.grid.count(TileType::Floor),
            self.grid.count(TileType::Wall),
            self.grid.count(TileType::DoorClosed),
        );
        Ok(())
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_finished(&self) -> bool {
        self.stage == Stage::Finished
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Current rooms (candidates before DiscardRooms, survivors after)
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Delaunay triangulation of the room centers, for diagnostics
    pub fn triangles(&self) -> &[Triangle] {
        &self.graph.triangles
    }

    /// Reduced room-connection graph
    pub fn edges(&self) -> &[Edge] {
        &self.graph.edges
    }

    /// Separation passes run so far
    pub fn fit_passes(&self) -> u32 {
        self.fit_passes
    }

    /// Hand off the finished grid
    pub fn into_grid(self) -> Result<Grid> {
        if self.is_finished() {
            Ok(self.grid)
        } else {
            Err(GenerationError::NotFinished { stage: self.stage })
        }
    }
}
