//! Fixed-size tile grid

use core::fmt;
use core::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileFlags, TileType};

/// Neighbourhood used for adjacency queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Connectivity {
    /// Orthogonal neighbours only
    #[default]
    Four,
    /// Orthogonal plus diagonal neighbours
    Eight,
}

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Row-major grid of tiles, addressed by `(x, y)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create an all-Empty grid
    pub fn new(width: u32, height: u32) -> Self {
        let tiles = (0..height)
            .flat_map(|y| (0..width).map(move |x| Tile::new(x, y)))
            .collect();
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Linear index of `(x, y)`
    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Coordinates of linear index `idx`
    pub(crate) fn pos_of(&self, idx: usize) -> (u32, u32) {
        let width = self.width as usize;
        ((idx % width) as u32, (idx / width) as u32)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&Tile> {
        self.index_of(x, y).map(|i| &self.tiles[i])
    }

    pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut Tile> {
        self.index_of(x, y).map(|i| &mut self.tiles[i])
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// In-bounds neighbours of `(x, y)`
    ///
    /// Order is left, right, up, down, then (for `Eight`) up-left,
    /// up-right, down-left, down-right.
    pub fn neighbours(&self, x: u32, y: u32, connectivity: Connectivity) -> Vec<(u32, u32)> {
        let dirs = match connectivity {
            Connectivity::Four => &DIRECTIONS[..4],
            Connectivity::Eight => &DIRECTIONS[..],
        };
        dirs.iter()
            .map(|&(dx, dy)| (x as i64 + dx as i64, y as i64 + dy as i64))
            .filter(|&(nx, ny)| self.in_bounds(nx, ny))
            .map(|(nx, ny)| (nx as u32, ny as u32))
            .collect()
    }

    /// Reset every tile to Empty with no flags
    pub fn clear(&mut self) {
        self.tiles.iter_mut().for_each(Tile::clear);
    }

    /// Drop the VISIBLE flag everywhere, keeping SEEN
    pub fn reset_visibility(&mut self) {
        for tile in &mut self.tiles {
            tile.flags.remove(TileFlags::VISIBLE);
        }
    }

    /// Open a closed door or close an open one
    ///
    /// Returns the new type, or `None` if `(x, y)` is not a door.
    pub fn toggle_door(&mut self, x: u32, y: u32) -> Option<TileType> {
        let tile = self.get_mut(x, y)?;
        tile.kind = match tile.kind {
            TileType::DoorClosed => TileType::DoorOpen,
            TileType::DoorOpen => TileType::DoorClosed,
            _ => return None,
        };
        Some(tile.kind)
    }

    /// Position of the spawn tile, if one has been placed
    pub fn spawn(&self) -> Option<(u32, u32)> {
        self.tiles.iter().find(|t| t.is_spawn()).map(Tile::pos)
    }

    /// Number of tiles of the given type
    pub fn count(&self, kind: TileType) -> usize {
        self.tiles.iter().filter(|t| t.kind == kind).count()
    }

    /// Type at `(x, y)`, or Empty outside the grid
    pub(crate) fn kind_at(&self, x: i64, y: i64) -> TileType {
        if self.in_bounds(x, y) {
            self[(x as u32, y as u32)].kind
        } else {
            TileType::Empty
        }
    }
}

impl Index<(u32, u32)> for Grid {
    type Output = Tile;

    fn index(&self, (x, y): (u32, u32)) -> &Tile {
        match self.index_of(x, y) {
            Some(i) => &self.tiles[i],
            None => panic!(
                "tile ({x}, {y}) out of bounds for {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

impl IndexMut<(u32, u32)> for Grid {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut Tile {
        let (w, h) = (self.width, self.height);
        match self.index_of(x, y) {
            Some(i) => &mut self.tiles[i],
            None => panic!("tile ({x}, {y}) out of bounds for {w}x{h} grid"),
        }
    }
}

/// One symbol per tile, one line per row; the spawn tile shows as `@`
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.width.max(1) as usize) {
            let line: String = row
                .iter()
                .map(|t| if t.is_spawn() { '@' } else { t.kind.symbol() })
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_past_u32_range() {
        // Index math only; no tiles are allocated
        let grid = Grid {
            width: 100_000,
            height: 100_000,
            tiles: Vec::new(),
        };
        let idx = grid.index_of(99_999, 99_999).unwrap();
        assert_eq!(idx as u64, 99_999 * 100_000 + 99_999);
        assert_eq!(grid.pos_of(idx), (99_999, 99_999));
    }

    #[test]
    fn test_coordinates_match_index() {
        let grid = Grid::new(7, 5);
        assert_eq!(grid.tiles().len(), 35);
        for (i, tile) in grid.tiles().iter().enumerate() {
            assert_eq!(grid.pos_of(i), tile.pos());
            assert_eq!(grid.index_of(tile.x(), tile.y()), Some(i));
        }
        assert_eq!(grid.index_of(7, 0), None);
        assert!(grid.get(0, 5).is_none());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::new(4, 4);
        let _tile = &grid[(4, 0)];
    }

    #[test]
    fn test_neighbours_corner_and_interior() {
        let grid = Grid::new(5, 5);
        assert_eq!(grid.neighbours(0, 0, Connectivity::Four), vec![(1, 0), (0, 1)]);
        assert_eq!(
            grid.neighbours(0, 0, Connectivity::Eight),
            vec![(1, 0), (0, 1), (1, 1)]
        );
        assert_eq!(
            grid.neighbours(2, 2, Connectivity::Four),
            vec![(1, 2), (3, 2), (2, 1), (2, 3)]
        );
        assert_eq!(grid.neighbours(2, 2, Connectivity::Eight).len(), 8);
        assert_eq!(grid.neighbours(4, 4, Connectivity::Eight).len(), 3);
    }

    #[test]
    fn test_clear_and_visibility() {
        let mut grid = Grid::new(3, 3);
        grid[(1, 1)].kind = TileType::Floor;
        grid[(1, 1)].mark_visible();
        grid.reset_visibility();
        assert!(grid[(1, 1)].is_seen());
        assert!(!grid[(1, 1)].is_visible());

        grid.clear();
        assert_eq!(grid.count(TileType::Empty), 9);
        assert!(!grid[(1, 1)].is_seen());
        assert_eq!(grid[(2, 1)].pos(), (2, 1));
    }

    #[test]
    fn test_toggle_door() {
        let mut grid = Grid::new(3, 3);
        grid[(1, 0)].kind = TileType::DoorClosed;
        assert_eq!(grid.toggle_door(1, 0), Some(TileType::DoorOpen));
        assert_eq!(grid.toggle_door(1, 0), Some(TileType::DoorClosed));
        assert_eq!(grid.toggle_door(0, 0), None);
        assert_eq!(grid.toggle_door(9, 9), None);
    }

    #[test]
    fn test_display_and_spawn() {
        let mut grid = Grid::new(3, 2);
        assert_eq!(grid.spawn(), None);
        grid[(0, 0)].kind = TileType::Wall;
        grid[(1, 0)].kind = TileType::Floor;
        grid[(2, 0)].kind = TileType::Wall;
        grid[(1, 1)].kind = TileType::Floor;
        grid[(1, 1)].flags.insert(TileFlags::SPAWN);
        assert_eq!(grid.spawn(), Some((1, 1)));
        assert_eq!(grid.to_string(), "#.#\n @\n");
        assert_eq!(grid.kind_at(-1, 0), TileType::Empty);
        assert_eq!(grid.kind_at(1, 0), TileType::Floor);
    }
}
