use log::info;
use rand::Rng;

use crate::generator::{generate_with, Difficulty, Generation, RngSampler, WallSampler};
use crate::maze::{Dir, Grid, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Target was a wall or off the grid; the player stayed put.
    Blocked,
    Moved,
    /// Goal reached. The session already holds a fresh maze.
    Won,
}

/// One play session: the current maze, where the player stands, and the
/// difficulty the next maze will be built with.
#[derive(Debug, Clone)]
pub struct Session {
    width: usize,
    height: usize,
    grid: Grid,
    player: Pos,
    goal: Pos,
    difficulty: Difficulty,
    last_attempts: u32,
    last_fallback: bool,
}

impl Session {
    /// # Panics
    /// If either dimension is zero.
    pub fn new(rng: &mut impl Rng, width: usize, height: usize, difficulty: Difficulty) -> Self {
        let generation = generate_with(&mut RngSampler(rng), width, height, difficulty);
        let mut session = Self {
            width,
            height,
            grid: Grid::open(width, height),
            player: Pos::new(0, 0),
            goal: Pos::new(width - 1, height - 1),
            difficulty,
            last_attempts: 0,
            last_fallback: false,
        };
        session.install(generation);
        session
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn last_attempts(&self) -> u32 {
        self.last_attempts
    }

    pub fn is_fallback(&self) -> bool {
        self.last_fallback
    }

    /// Selects the difficulty used by the next generation. The current maze
    /// is left alone.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Builds a new maze with the selected difficulty and puts the player
    /// back on start.
    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.restart_with(&mut RngSampler(rng));
    }

    pub fn restart_with(&mut self, sampler: &mut impl WallSampler) {
        let generation = generate_with(sampler, self.width, self.height, self.difficulty);
        self.install(generation);
        info!(
            "new {} maze after {} attempt(s)",
            self.difficulty, self.last_attempts
        );
    }

    pub fn target(&self, dir: Dir) -> Option<Pos> {
        self.grid
            .step(self.player, dir)
            .filter(|&pos| self.grid.is_path(pos))
    }

    pub fn move_player(&mut self, dir: Dir, rng: &mut impl Rng) -> MoveOutcome {
        let Some(next) = self.target(dir) else {
            return MoveOutcome::Blocked;
        };
        self.player = next;
        if self.player == self.goal {
            info!("goal reached, generating a new maze");
            self.restart(rng);
            return MoveOutcome::Won;
        }
        MoveOutcome::Moved
    }

    fn install(&mut self, generation: Generation) {
        self.player = generation.grid.start();
        self.goal = generation.grid.goal();
        self.grid = generation.grid;
        self.last_attempts = generation.attempts;
        self.last_fallback = generation.fallback;
    }
}
