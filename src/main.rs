mod render;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use maze_runner::{generate_with, Config, Difficulty, Dir, MoveOutcome, RngSampler, Session};
use render::Renderer;

const WIN_MESSAGE: &str = "You won! Generating a new maze...";

#[derive(Debug, Parser)]
#[command(name = "maze-runner", version)]
#[command(about = "Walk from the top-left corner to the bottom-right one of a random maze")]
struct Args {
    /// Maze width in cells (env: MAZE_WIDTH)
    #[arg(long)]
    width: Option<usize>,

    /// Maze height in cells (env: MAZE_HEIGHT)
    #[arg(long)]
    height: Option<usize>,

    /// easy, medium or hard; anything else plays as medium (env: MAZE_DIFFICULTY)
    #[arg(long)]
    difficulty: Option<String>,

    /// Seed for reproducible mazes (env: MAZE_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Print one maze as text and exit
    #[arg(long)]
    print: bool,
}

impl Args {
    fn apply(&self, mut config: Config) -> Config {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(name) = &self.difficulty {
            config.difficulty = Difficulty::from_name(name);
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.apply(Config::from_env());
    config.validate().context("invalid maze settings")?;

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    if args.print {
        let generation =
            generate_with(&mut RngSampler(&mut rng), config.width, config.height, config.difficulty);
        info!("printed maze took {} attempt(s)", generation.attempts);
        print!("{}", generation.grid);
        return Ok(());
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("enabling raw mode")?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, &config, &mut rng);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode().context("disabling raw mode")?;
    result
}

fn run(stdout: &mut Stdout, config: &Config, rng: &mut ChaCha8Rng) -> Result<()> {
    let mut session = Session::new(rng, config.width, config.height, config.difficulty);
    let mut renderer = Renderer::new(config.width, config.height);
    let mut status = String::new();

    loop {
        renderer
            .draw(stdout, &session, &status)
            .context("drawing maze")?;

        match event::read().context("reading terminal event")? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                let dir = match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('r') => {
                        session.restart(rng);
                        status.clear();
                        continue;
                    }
                    KeyCode::Char('d') => {
                        let next = session.difficulty().next();
                        session.set_difficulty(next);
                        status = format!("Next maze will be {next}.");
                        continue;
                    }
                    KeyCode::Up | KeyCode::Char('k') => Dir::Up,
                    KeyCode::Down | KeyCode::Char('j') => Dir::Down,
                    KeyCode::Left | KeyCode::Char('h') => Dir::Left,
                    KeyCode::Right | KeyCode::Char('l') => Dir::Right,
                    _ => continue,
                };
                match session.move_player(dir, rng) {
                    MoveOutcome::Won => status = WIN_MESSAGE.to_string(),
                    MoveOutcome::Moved => status.clear(),
                    MoveOutcome::Blocked => {}
                }
            }
            Event::Resize(_, _) => renderer.invalidate(),
            _ => {}
        }
    }
}
