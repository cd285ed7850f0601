use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use rand::Rng;

use crate::maze::{Grid, Pos};
use crate::solver::is_solvable;

/// Generation attempts before giving up and handing out an open grid.
pub const MAX_ATTEMPTS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn density(self) -> f64 {
        match self {
            Difficulty::Easy => 0.1,
            Difficulty::Medium => 0.2,
            Difficulty::Hard => 0.3,
        }
    }

    /// Case-insensitive lookup. Anything unrecognised is Medium.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            other => {
                warn!("unknown difficulty {other:?}, using medium");
                Difficulty::Medium
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

/// Source of candidate wall positions.
pub trait WallSampler {
    /// A position with `x < width` and `y < height`.
    fn sample(&mut self, width: usize, height: usize) -> Pos;
}

pub struct RngSampler<'a, R: Rng>(pub &'a mut R);

impl<R: Rng> WallSampler for RngSampler<'_, R> {
    fn sample(&mut self, width: usize, height: usize) -> Pos {
        let x = self.0.gen_range(0..width);
        let y = self.0.gen_range(0..height);
        Pos::new(x, y)
    }
}

#[derive(Debug, Clone)]
pub struct Generation {
    pub grid: Grid,
    /// Attempts consumed, including the accepted one.
    pub attempts: u32,
    /// Set when every attempt was rejected and `grid` is fully open.
    pub fallback: bool,
}

pub fn wall_budget(width: usize, height: usize, difficulty: Difficulty) -> usize {
    ((width * height) as f64 * difficulty.density()).floor() as usize
}

pub fn generate(rng: &mut impl Rng, width: usize, height: usize, difficulty: Difficulty) -> Grid {
    generate_with(&mut RngSampler(rng), width, height, difficulty).grid
}

pub fn generate_with(
    sampler: &mut impl WallSampler,
    width: usize,
    height: usize,
    difficulty: Difficulty,
) -> Generation {
    let budget = wall_budget(width, height, difficulty);
    for attempt in 1..=MAX_ATTEMPTS {
        debug!("generating {width}x{height} maze (attempt #{attempt}), difficulty: {difficulty}");
        let grid = place_walls(sampler, width, height, budget);
        if is_solvable(&grid) {
            return Generation {
                grid,
                attempts: attempt,
                fallback: false,
            };
        }
    }

    warn!("no solvable maze after {MAX_ATTEMPTS} attempts, returning an open maze");
    Generation {
        grid: Grid::open(width, height),
        attempts: MAX_ATTEMPTS,
        fallback: true,
    }
}

fn place_walls(sampler: &mut impl WallSampler, width: usize, height: usize, budget: usize) -> Grid {
    let mut grid = Grid::open(width, height);
    let start = grid.start();
    let goal = grid.goal();
    for _ in 0..budget {
        let pos = sampler.sample(width, height);
        if pos != start && pos != goal && grid.in_bounds(pos) {
            grid.set_wall(pos);
        }
    }
    grid
}
