//! Generation errors

use thiserror::Error;

use crate::dungeon::Stage;
use crate::geometry::Vec2f;

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, GenerationError>;

/// Errors that can occur while generating a dungeon
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),

    #[error("Degenerate triangle: {a}, {b}, {c} are collinear")]
    DegenerateTriangle { a: Vec2f, b: Vec2f, c: Vec2f },

    #[error("No corridor path from {from:?} to {to:?}")]
    Unreachable { from: (u32, u32), to: (u32, u32) },

    #[error("Only {survivors} rooms survived discarding")]
    InsufficientRooms { survivors: usize },

    #[error("Generation has not finished (currently in stage '{stage}')")]
    NotFinished { stage: Stage },

    #[error("Gave up after {attempts} generation attempts")]
    AttemptsExhausted { attempts: u32 },
}
