//! Tile features derived from the carved layout: walls, doors, spawn

use super::grid::{Connectivity, Grid};
use super::room::Room;
use super::tile::{TileFlags, TileType};
use crate::rng::GameRng;

/// Mark every tile of every room as Floor
pub fn carve_rooms(grid: &mut Grid, rooms: &[Room]) {
    for room in rooms {
        for (x, y) in room.tiles() {
            if let Some(tile) = grid.get_mut(x, y) {
                tile.kind = TileType::Floor;
            }
        }
    }
}

/// Mark every tile on `path` as Floor
pub fn carve_path(grid: &mut Grid, path: &[(u32, u32)]) {
    for &pos in path {
        grid[pos].kind = TileType::Floor;
    }
}

/// Wrap all Floor in a one-tile skin of Wall
///
/// Every Empty tile orthogonally adjacent to Floor becomes Wall. Returns
/// the number of walls created.
pub fn create_walls(grid: &mut Grid) -> usize {
    let mut walls = Vec::new();
    for tile in grid.tiles().iter().filter(|t| t.kind == TileType::Floor) {
        for pos in grid.neighbours(tile.x(), tile.y(), Connectivity::Four) {
            if grid[pos].kind == TileType::Empty {
                walls.push(pos);
            }
        }
    }
    walls.sort_unstable();
    walls.dedup();
    for &pos in &walls {
        grid[pos].kind = TileType::Wall;
    }
    walls.len()
}

/// Flag one uniformly chosen Floor tile as the spawn point
pub fn place_player(grid: &mut Grid, rng: &mut GameRng) -> Option<(u32, u32)> {
    let floors: Vec<(u32, u32)> = grid
        .tiles()
        .iter()
        .filter(|t| t.kind == TileType::Floor)
        .map(|t| t.pos())
        .collect();
    let pos = *rng.choose(&floors)?;
    grid[pos].flags.insert(TileFlags::SPAWN);
    Some(pos)
}

/// One cell of a 3×3 door pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Floor,
    Wall,
    Any,
}

impl Cell {
    fn matches(self, kind: TileType) -> bool {
        match self {
            Cell::Floor => kind == TileType::Floor,
            Cell::Wall => kind == TileType::Wall,
            Cell::Any => true,
        }
    }
}

type Pattern = [[Cell; 3]; 3];

/// Vertical passage between walls; the center tile becomes the door
const DOOR_PATTERN: Pattern = [
    [Cell::Any, Cell::Floor, Cell::Any],
    [Cell::Wall, Cell::Floor, Cell::Wall],
    [Cell::Any, Cell::Floor, Cell::Any],
];

/// Rotate a pattern a quarter turn clockwise
fn rotate(p: &Pattern) -> Pattern {
    let mut out = *p;
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = p[2 - c][r];
        }
    }
    out
}

fn door_patterns() -> [Pattern; 4] {
    let p0 = DOOR_PATTERN;
    let p1 = rotate(&p0);
    let p2 = rotate(&p1);
    let p3 = rotate(&p2);
    [p0, p1, p2, p3]
}

fn matches_pattern(grid: &Grid, x: u32, y: u32, pattern: &Pattern) -> bool {
    pattern.iter().enumerate().all(|(r, row)| {
        row.iter().enumerate().all(|(c, cell)| {
            let kind = grid.kind_at(x as i64 + c as i64 - 1, y as i64 + r as i64 - 1);
            cell.matches(kind)
        })
    })
}

/// Tiles whose neighbourhood matches a door pattern
fn find_doors(grid: &Grid) -> Vec<(u32, u32)> {
    let patterns = door_patterns();
    let (width, height) = (grid.width(), grid.height());

    grid.tiles()
        .iter()
        .filter(|t| t.x() > 0 && t.y() > 0 && t.x() + 1 < width && t.y() + 1 < height)
        .filter(|t| !t.is_spawn())
        .filter(|t| patterns.iter().any(|p| matches_pattern(grid, t.x(), t.y(), p)))
        .map(|t| t.pos())
        .collect()
}

/// Turn narrow passages into closed doors
///
/// A Floor tile becomes a door when one axis through it reads
/// Floor-Floor-Floor and the other Wall-Floor-Wall. All matches are found
/// before any tile changes. Border tiles and the spawn tile are never
/// doors. Returns the number of doors placed.
pub fn place_doors(grid: &mut Grid) -> usize {
    let doors = find_doors(grid);
    for &pos in &doors {
        grid[pos].kind = TileType::DoorClosed;
    }
    doors.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse a map drawn with the tile symbols
    fn parse(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows[0].len() as u32, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                grid[(x as u32, y as u32)].kind = match ch {
                    '.' => TileType::Floor,
                    '#' => TileType::Wall,
                    '+' => TileType::DoorClosed,
                    _ => TileType::Empty,
                };
            }
        }
        grid
    }

    #[test]
    fn test_rotate_full_turn() {
        let p = DOOR_PATTERN;
        let turned = rotate(&rotate(&rotate(&rotate(&p))));
        assert_eq!(turned, p);
        // Quarter turn gives the horizontal passage
        let p1 = rotate(&p);
        assert_eq!(p1[0], [Cell::Any, Cell::Wall, Cell::Any]);
        assert_eq!(p1[1], [Cell::Floor, Cell::Floor, Cell::Floor]);
        assert_eq!(p1[2], [Cell::Any, Cell::Wall, Cell::Any]);
        assert_eq!(rotate(&p1), p);
    }

    #[test]
    fn test_walls_wrap_floor() {
        let mut grid = parse(&["     ", "     ", "  .  ", "     ", "     "]);
        assert_eq!(create_walls(&mut grid), 4);
        assert_eq!(grid.to_string(), "\n  #\n #.#\n  #\n\n");
    }

    #[test]
    fn test_walls_leave_floor_alone() {
        let mut grid = parse(&["......", "......"]);
        assert_eq!(create_walls(&mut grid), 0);
        assert_eq!(grid.count(TileType::Floor), 12);
    }

    #[test]
    fn test_carve_rooms_and_path() {
        let mut grid = Grid::new(10, 10);
        carve_rooms(&mut grid, &[Room::new(1, 1, 3, 2)]);
        carve_path(&mut grid, &[(5, 5), (5, 6)]);
        assert_eq!(grid.count(TileType::Floor), 8);
        assert_eq!(grid[(3, 2)].kind, TileType::Floor);
        assert_eq!(grid[(4, 2)].kind, TileType::Empty);
    }

    #[test]
    fn test_doors_along_walled_corridor() {
        let mut grid = parse(&[
            "         ",
            "   #.#   ",
            "   #.#   ",
            " ###.####",
            " #.......",
            " #.......",
        ]);
        // (4, 1) has nothing above it; room tiles are not between walls
        assert_eq!(place_doors(&mut grid), 2);
        assert_eq!(grid[(4, 1)].kind, TileType::Floor);
        assert_eq!(grid[(4, 2)].kind, TileType::DoorClosed);
        assert_eq!(grid[(4, 3)].kind, TileType::DoorClosed);
        assert_eq!(grid.count(TileType::Floor), 1 + 7 * 2);
    }

    #[test]
    fn test_corners_are_ignored() {
        // Same cross with every corner flipped between Floor and Wall
        for corners in [['.', '.', '.', '.'], ['#', '#', '#', '#'], ['.', '#', ' ', '.']] {
            let top = format!(" {}.{} ", corners[0], corners[1]);
            let bottom = format!(" {}.{} ", corners[2], corners[3]);
            let mut grid = parse(&["     ", top.as_str(), " #.# ", bottom.as_str(), "     "]);
            let before = grid.clone();
            assert_eq!(place_doors(&mut grid), 1, "{before}");
            assert_eq!(grid[(2, 2)].kind, TileType::DoorClosed);
        }
    }

    #[test]
    fn test_matches_read_before_writes() {
        // Two stacked matches: the lower one still sees Floor above it
        let mut grid = parse(&["     ", " #.# ", " #.# ", " #.# ", " #.# ", "     "]);
        assert_eq!(place_doors(&mut grid), 2);
        assert_eq!(grid[(2, 2)].kind, TileType::DoorClosed);
        assert_eq!(grid[(2, 3)].kind, TileType::DoorClosed);
    }

    #[test]
    fn test_door_all_orientations() {
        let mut grid = parse(&[
            "           ",
            " ......### ",
            " ........  ",
            " ......### ",
            "           ",
        ]);
        // Corridor enters from the right
        assert_eq!(place_doors(&mut grid), 1);
        assert_eq!(grid[(7, 2)].kind, TileType::DoorClosed);

        let mut grid = parse(&[
            "           ",
            " ###...... ",
            "  ........ ",
            " ###...... ",
            "           ",
        ]);
        assert_eq!(place_doors(&mut grid), 1);
        assert_eq!(grid[(3, 2)].kind, TileType::DoorClosed);
    }

    #[test]
    fn test_straight_corridor_interior_becomes_door() {
        let mut grid = parse(&["     ", " #.# ", " #.# ", " #.# ", "     "]);
        assert_eq!(place_doors(&mut grid), 1);
        assert_eq!(grid[(2, 2)].kind, TileType::DoorClosed);
        // Ends open onto Empty, so they stay Floor
        assert_eq!(grid[(2, 1)].kind, TileType::Floor);
        assert_eq!(grid[(2, 3)].kind, TileType::Floor);
    }

    #[test]
    fn test_wall_floor_wall_alone_is_not_a_door() {
        // Walls on both sides but Floor on only one end
        let mut grid = parse(&["     ", "     ", " #.# ", " ... ", "     "]);
        assert_eq!(place_doors(&mut grid), 0);
    }

    #[test]
    fn test_spawn_never_becomes_door() {
        let mut grid = parse(&[
            "         ",
            "   #.#   ",
            "   #.#   ",
            " ###.####",
            " #.......",
            " #.......",
        ]);
        grid[(4, 3)].flags.insert(TileFlags::SPAWN);
        assert_eq!(place_doors(&mut grid), 1);
        assert_eq!(grid[(4, 2)].kind, TileType::DoorClosed);
        assert_eq!(grid[(4, 3)].kind, TileType::Floor);
    }

    #[test]
    fn test_place_player_single_floor() {
        let mut grid = parse(&["   ", " . ", "   "]);
        let mut rng = GameRng::new(42);
        assert_eq!(place_player(&mut grid, &mut rng), Some((1, 1)));
        assert_eq!(grid.spawn(), Some((1, 1)));

        let mut empty = Grid::new(3, 3);
        assert_eq!(place_player(&mut empty, &mut rng), None);
    }
}
