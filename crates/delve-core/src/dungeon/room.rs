//! Rectangular rooms

use serde::{Deserialize, Serialize};

use crate::GeneratorConfig;
use crate::geometry::Vec2f;
use crate::rng::GameRng;

/// An axis-aligned room
///
/// `right()` and `bottom()` are exclusive, so a room covers the tiles
/// `left..right` by `top..bottom`. Position is signed because separation
/// may push a room past the grid edge before it is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    left: i32,
    top: i32,
    width: u32,
    height: u32,
}

impl Room {
    pub const fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Sample a room inside the configured grid
    ///
    /// Width and height are drawn from `room_size_min..=room_size_max`,
    /// then the position so that the room starts fully in bounds.
    pub fn random(rng: &mut GameRng, config: &GeneratorConfig) -> Self {
        let width = rng.range(config.room_size_min, config.room_size_max);
        let height = rng.range(config.room_size_min, config.room_size_max);
        let left = rng.range(0, config.width.saturating_sub(width));
        let top = rng.range(0, config.height.saturating_sub(height));
        Self::new(left as i32, top as i32, width, height)
    }

    pub const fn left(&self) -> i32 {
        self.left
    }

    pub const fn top(&self) -> i32 {
        self.top
    }

    pub const fn right(&self) -> i32 {
        self.left + self.width as i32
    }

    pub const fn bottom(&self) -> i32 {
        self.top + self.height as i32
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Center tile, truncating half extents
    pub fn center(&self) -> (i32, i32) {
        (
            (self.left as f32 + self.width as f32 / 2.0) as i32,
            (self.top as f32 + self.height as f32 / 2.0) as i32,
        )
    }

    pub fn center_point(&self) -> Vec2f {
        Vec2f::from(self.center())
    }

    /// Check if the interiors of two rooms overlap
    ///
    /// Rooms that only share a border do not intersect.
    pub fn intersects(&self, other: &Room) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }

    /// Translation per axis that would move `self` clear of `other`
    ///
    /// On each axis the shorter of the two push directions is chosen;
    /// equal distances push in the positive direction. `None` if the rooms
    /// do not intersect.
    pub fn overlap(&self, other: &Room) -> Option<(i32, i32)> {
        if !self.intersects(other) {
            return None;
        }
        let dx = if (self.right() - other.left).abs() < (other.right() - self.left).abs() {
            other.left - self.right()
        } else {
            other.right() - self.left
        };
        let dy = if (self.bottom() - other.top).abs() < (other.bottom() - self.top).abs() {
            other.top - self.bottom()
        } else {
            other.bottom() - self.top
        };
        Some((dx, dy))
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.left += dx;
        self.top += dy;
    }

    /// Smallest translation bringing the room inside a `width`×`height`
    /// grid, or `None` if it already fits
    pub fn out_of_bounds(&self, width: u32, height: u32) -> Option<(i32, i32)> {
        let axis = |lo: i32, hi: i32, limit: u32| {
            if lo < 0 {
                -lo
            } else if hi > limit as i32 {
                limit as i32 - hi
            } else {
                0
            }
        };
        let dx = axis(self.left, self.right(), width);
        let dy = axis(self.top, self.bottom(), height);
        (dx != 0 || dy != 0).then_some((dx, dy))
    }

    pub fn within(&self, width: u32, height: u32) -> bool {
        self.out_of_bounds(width, height).is_none()
    }

    /// Tiles covered by the room
    ///
    /// Only meaningful for rooms that lie within the grid.
    pub fn tiles(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let (left, top) = (self.left.max(0) as u32, self.top.max(0) as u32);
        (top..top + self.height).flat_map(move |y| (left..left + self.width).map(move |x| (x, y)))
    }
}
