//! Grid tiles

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Tile terrain type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileType {
    #[default]
    Empty = 0,
    Floor = 1,
    Wall = 2,
    DoorClosed = 3,
    DoorOpen = 4,
    Stairs = 5,
}

impl TileType {
    /// Check if a player can stand on this tile
    pub const fn is_walkable(&self) -> bool {
        matches!(self, TileType::Floor | TileType::DoorOpen | TileType::Stairs)
    }

    pub const fn is_door(&self) -> bool {
        matches!(self, TileType::DoorClosed | TileType::DoorOpen)
    }

    /// Get the display character for this tile type
    pub const fn symbol(&self) -> char {
        match self {
            TileType::Empty => ' ',
            TileType::Floor => '.',
            TileType::Wall => '#',
            TileType::DoorClosed => '+',
            TileType::DoorOpen => '\'',
            TileType::Stairs => '>',
        }
    }
}

bitflags! {
    /// Per-tile flags
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct TileFlags: u8 {
        /// Player start position; at most one per grid
        const SPAWN = 0x01;
        /// Seen at some point (remembered)
        const SEEN = 0x02;
        /// In view right now
        const VISIBLE = 0x04;
    }
}

// Manual serde impl for TileFlags
impl Serialize for TileFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TileFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(TileFlags::from_bits_truncate(bits))
    }
}

/// A single grid tile
///
/// Coordinates are fixed when the grid is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    x: u32,
    y: u32,

    /// Terrain
    pub kind: TileType,

    pub flags: TileFlags,
}

impl Tile {
    pub(crate) const fn new(x: u32, y: u32) -> Self {
        Self {
            x,
            y,
            kind: TileType::Empty,
            flags: TileFlags::empty(),
        }
    }

    pub const fn x(&self) -> u32 {
        self.x
    }

    pub const fn y(&self) -> u32 {
        self.y
    }

    pub const fn pos(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    pub fn is_spawn(&self) -> bool {
        self.flags.contains(TileFlags::SPAWN)
    }

    pub fn is_seen(&self) -> bool {
        self.flags.contains(TileFlags::SEEN)
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(TileFlags::VISIBLE)
    }

    /// Mark as currently visible, which also makes it seen
    pub fn mark_visible(&mut self) {
        self.flags.insert(TileFlags::VISIBLE | TileFlags::SEEN);
    }

    /// Reset terrain and flags, keeping the coordinates
    pub(crate) fn clear(&mut self) {
        self.kind = TileType::Empty;
        self.flags = TileFlags::empty();
    }
}
