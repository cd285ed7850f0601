//! Solvable grid mazes and the game session that plays them.

pub mod config;
pub mod generator;
pub mod maze;
pub mod session;
pub mod solver;

pub use config::{Config, ConfigError};
pub use generator::{
    generate, generate_with, wall_budget, Difficulty, Generation, RngSampler, WallSampler,
    MAX_ATTEMPTS,
};
pub use maze::{Cell, Dir, Grid, GridParseError, Pos};
pub use session::{MoveOutcome, Session};
pub use solver::is_solvable;
