use thiserror::Error;

use crate::generator::Difficulty;

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;
pub const MIN_SIDE: usize = 2;
/// Keeps the drawn board, two columns per cell, inside terminal coordinates.
pub const MAX_SIDE: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub difficulty: Difficulty,
    /// Fixed seed for reproducible mazes; entropy when unset.
    pub seed: Option<u64>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be at least {min} (got {value})")]
    TooSmall {
        field: &'static str,
        min: usize,
        value: usize,
    },
    #[error("{field} must be at most {max} (got {value})")]
    TooLarge {
        field: &'static str,
        max: usize,
        value: usize,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            difficulty: Difficulty::Medium,
            seed: None,
        }
    }
}

impl Config {
    /// Defaults overridden by `MAZE_WIDTH`, `MAZE_HEIGHT`, `MAZE_DIFFICULTY`
    /// and `MAZE_SEED`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`] with a custom variable source. Values that
    /// fail to parse, and zero sizes, are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let size = |key: &str, fallback: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(fallback)
        };
        Self {
            width: size("MAZE_WIDTH", defaults.width),
            height: size("MAZE_HEIGHT", defaults.height),
            difficulty: lookup("MAZE_DIFFICULTY")
                .map(|v| Difficulty::from_name(&v))
                .unwrap_or(defaults.difficulty),
            seed: lookup("MAZE_SEED").and_then(|v| v.trim().parse::<u64>().ok()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if value < MIN_SIDE {
                return Err(ConfigError::TooSmall {
                    field,
                    min: MIN_SIDE,
                    value,
                });
            }
            if value > MAX_SIDE {
                return Err(ConfigError::TooLarge {
                    field,
                    max: MAX_SIDE,
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn environment_overrides_apply() {
        let config = Config::from_lookup(lookup_from(&[
            ("MAZE_WIDTH", "16"),
            ("MAZE_HEIGHT", " 12 "),
            ("MAZE_DIFFICULTY", "Hard"),
            ("MAZE_SEED", "1337"),
        ]));
        assert_eq!(config.width, 16);
        assert_eq!(config.height, 12);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, Some(1337));
    }

    #[test]
    fn garbage_values_are_ignored() {
        let config = Config::from_lookup(lookup_from(&[
            ("MAZE_WIDTH", "wide"),
            ("MAZE_HEIGHT", "0"),
            ("MAZE_DIFFICULTY", "impossible"),
            ("MAZE_SEED", "-4"),
        ]));
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn one_wide_grid_is_rejected() {
        let config = Config {
            width: 1,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooSmall {
                field: "width",
                min: 2,
                value: 1
            })
        );
        let config = Config {
            height: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let config = Config {
            height: 65534,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooLarge {
                field: "height",
                max: MAX_SIDE,
                value: 65534
            })
        );
        let config = Config {
            width: 32768,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooLarge { field: "width", .. })
        ));
        let config = Config {
            width: MAX_SIDE,
            height: MAX_SIDE,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
