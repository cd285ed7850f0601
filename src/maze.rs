use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

/// A rectangular field of walls and paths.
///
/// Start is always the top-left corner and goal the bottom-right one; both
/// are derived from the dimensions rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-path grid.
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn open(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid must be at least 1x1");
        Self {
            width,
            height,
            cells: vec![Cell::Path; width * height],
        }
    }

    /// All-path grid with the given cells turned into walls. Out-of-bounds
    /// positions are ignored.
    pub fn with_walls(width: usize, height: usize, walls: impl IntoIterator<Item = Pos>) -> Self {
        let mut grid = Self::open(width, height);
        for pos in walls {
            if grid.in_bounds(pos) {
                grid.set_wall(pos);
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Pos {
        Pos::new(0, 0)
    }

    pub fn goal(&self) -> Pos {
        Pos::new(self.width - 1, self.height - 1)
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        if self.in_bounds(pos) {
            Some(self.cells[pos.y * self.width + pos.x])
        } else {
            None
        }
    }

    pub fn is_path(&self, pos: Pos) -> bool {
        self.cell(pos) == Some(Cell::Path)
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Wall).count()
    }

    pub fn walls(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Wall)
            .map(move |(idx, _)| Pos::new(idx % self.width, idx / self.width))
    }

    pub fn step(&self, pos: Pos, dir: Dir) -> Option<Pos> {
        let (dx, dy) = dir.delta();
        let nx = pos.x.checked_add_signed(dx)?;
        let ny = pos.y.checked_add_signed(dy)?;
        let next = Pos::new(nx, ny);
        self.in_bounds(next).then_some(next)
    }

    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        Dir::ALL.into_iter().filter_map(move |dir| self.step(pos, dir))
    }

    pub(crate) fn set_wall(&mut self, pos: Pos) {
        self.cells[pos.y * self.width + pos.x] = Cell::Wall;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                let ch = match cell {
                    Cell::Wall => '#',
                    Cell::Path => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridParseError {
    #[error("grid text has no rows")]
    Empty,
    #[error("row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    BadChar { ch: char, row: usize, col: usize },
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parses rows of `#` (wall) and `.` (path). Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = match rows.first() {
            Some(first) => first.chars().count(),
            None => return Err(GridParseError::Empty),
        };

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridParseError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                cells.push(match ch {
                    '#' => Cell::Wall,
                    '.' => Cell::Path,
                    _ => return Err(GridParseError::BadChar { ch, row, col }),
                });
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_goal_follow_dimensions() {
        let grid = Grid::open(7, 4);
        assert_eq!(grid.start(), Pos::new(0, 0));
        assert_eq!(grid.goal(), Pos::new(6, 3));
    }

    #[test]
    fn step_stays_in_bounds() {
        let grid = Grid::open(3, 3);
        assert_eq!(grid.step(Pos::new(0, 0), Dir::Up), None);
        assert_eq!(grid.step(Pos::new(0, 0), Dir::Left), None);
        assert_eq!(grid.step(Pos::new(2, 2), Dir::Right), None);
        assert_eq!(grid.step(Pos::new(1, 1), Dir::Down), Some(Pos::new(1, 2)));
    }

    #[test]
    fn corner_has_two_neighbors() {
        let grid = Grid::open(4, 4);
        let mut around: Vec<Pos> = grid.neighbors(Pos::new(0, 0)).collect();
        around.sort_by_key(|p| (p.y, p.x));
        assert_eq!(around, vec![Pos::new(1, 0), Pos::new(0, 1)]);
        assert_eq!(grid.neighbors(Pos::new(1, 1)).count(), 4);
    }

    #[test]
    fn with_walls_skips_out_of_bounds() {
        let grid = Grid::with_walls(2, 2, [Pos::new(1, 0), Pos::new(5, 5)]);
        assert_eq!(grid.wall_count(), 1);
        assert_eq!(grid.cell(Pos::new(1, 0)), Some(Cell::Wall));
        assert_eq!(grid.cell(Pos::new(5, 5)), None);
    }

    #[test]
    fn parses_text_form() {
        let grid: Grid = "..#\n.#.\n...\n".parse().unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        let walls: Vec<Pos> = grid.walls().collect();
        assert_eq!(walls, vec![Pos::new(2, 0), Pos::new(1, 1)]);
        assert_eq!(grid.to_string(), "..#\n.#.\n...\n");
    }

    #[test]
    fn rejects_bad_text() {
        assert_eq!("".parse::<Grid>(), Err(GridParseError::Empty));
        assert_eq!(
            "...\n..\n".parse::<Grid>(),
            Err(GridParseError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            ".x\n..\n".parse::<Grid>(),
            Err(GridParseError::BadChar {
                ch: 'x',
                row: 0,
                col: 1
            })
        );
    }
}
