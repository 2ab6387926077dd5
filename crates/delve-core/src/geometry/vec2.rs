//! 2D float vector

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point or displacement in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length
    pub fn magnitude(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`
    pub fn distance(self, other: Vec2f) -> f32 {
        (other - self).magnitude()
    }

    /// Bit pattern identifying this point under `==`
    ///
    /// `-0.0` is folded onto `0.0` so equal points always share a key.
    pub(crate) fn key(self) -> (u32, u32) {
        ((self.x + 0.0).to_bits(), (self.y + 0.0).to_bits())
    }
}

impl Eq for Vec2f {}

impl Hash for Vec2f {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Add for Vec2f {
    type Output = Vec2f;

    fn add(self, rhs: Vec2f) -> Vec2f {
        Vec2f::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2f {
    type Output = Vec2f;

    fn sub(self, rhs: Vec2f) -> Vec2f {
        Vec2f::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Vec2f {
    fn from((x, y): (i32, i32)) -> Self {
        Vec2f::new(x as f32, y as f32)
    }
}

impl fmt::Display for Vec2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
