//! Geometry primitives used by the room graph
//!
//! All types compare coordinates with exact floating-point equality. Room
//! centers are integer-derived, so repeated points and edges compare
//! bit-exact and no tolerance is applied.

mod edge;
mod triangle;
mod vec2;

pub use edge::Edge;
pub use triangle::Triangle;
pub use vec2::Vec2f;
