use std::{env, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAZE_SIZE, MAX_MAZE_SIZE, MIN_MAZE_SIZE};
use crate::error::ConfigError;
use crate::maze::RepairPolicy;

/// Inclusive bounds on maze width and height.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SizeLimits {
    pub min: usize,
    pub max: usize,
}

impl Default for SizeLimits {
    fn default() -> Self {
        SizeLimits {
            min: MIN_MAZE_SIZE,
            max: MAX_MAZE_SIZE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    pub auto_entry_exit: bool,
    pub entry: Option<(usize, usize)>,
    pub exit: Option<(usize, usize)>,
    pub seed: Option<u64>,
    pub repair_policy: RepairPolicy,
    pub limits: SizeLimits,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            width: DEFAULT_MAZE_SIZE,
            height: DEFAULT_MAZE_SIZE,
            auto_entry_exit: true,
            entry: None,
            exit: None,
            seed: None,
            repair_policy: RepairPolicy::default(),
            limits: SizeLimits::default(),
        }
    }
}

impl MazeConfig {
    pub fn new(width: usize, height: usize) -> Self {
        MazeConfig {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_entry_and_exit(mut self, entry: (usize, usize), exit: (usize, usize)) -> Self {
        self.auto_entry_exit = false;
        self.entry = Some(entry);
        self.exit = Some(exit);
        self
    }

    pub fn with_limits(mut self, min: usize, max: usize) -> Self {
        self.limits = SizeLimits { min, max };
        self
    }

    /// Rejects the request before anything is allocated. Values are never
    /// clamped into range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let SizeLimits { min, max } = self.limits;
        if min == 0 || min > max {
            return Err(ConfigError::InvalidLimits { min, max });
        }

        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if value < min || value > max {
                return Err(ConfigError::DimensionOutOfRange {
                    axis,
                    value,
                    min,
                    max,
                });
            }
        }

        if self.auto_entry_exit {
            return Ok(());
        }

        let entry = self.entry.ok_or(ConfigError::MissingEntry)?;
        let exit = self.exit.ok_or(ConfigError::MissingExit)?;

        self.check_boundary_cell("entry", entry, 0)?;
        self.check_boundary_cell("exit", exit, self.width - 1)?;

        Ok(())
    }

    fn check_boundary_cell(
        &self,
        role: &'static str,
        (x, y): (usize, usize),
        column: usize,
    ) -> Result<(), ConfigError> {
        if x >= self.width || y >= self.height {
            return Err(ConfigError::OutOfBounds {
                role,
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        if x != column {
            return Err(ConfigError::NotOnBoundary { role, x, y, column });
        }

        Ok(())
    }

    /// Reads the configuration from the environment, loading a `.env` file
    /// first if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = MazeConfig::default();

        if let Some(width) = parse_var(&lookup, "MAZE_WIDTH")? {
            config.width = width;
        }
        if let Some(height) = parse_var(&lookup, "MAZE_HEIGHT")? {
            config.height = height;
        }
        config.seed = parse_var(&lookup, "MAZE_SEED")?;
        if let Some(policy) = parse_var(&lookup, "MAZE_REPAIR")? {
            config.repair_policy = policy;
        }

        config.entry = coordinates_var(&lookup, "MAZE_ENTRY")?;
        config.exit = coordinates_var(&lookup, "MAZE_EXIT")?;

        // Supplying coordinates implies manual placement unless told otherwise.
        config.auto_entry_exit = match lookup("MAZE_AUTO_ENTRY_EXIT") {
            Some(value) => parse_bool("MAZE_AUTO_ENTRY_EXIT", &value)?,
            None => config.entry.is_none() && config.exit.is_none(),
        };

        Ok(config)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(None),
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

fn coordinates_var(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<(usize, usize)>, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(None);
    };

    let invalid = || ConfigError::InvalidValue {
        key,
        value: value.clone(),
    };

    let (x, y) = value.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse().map_err(|_| invalid())?;
    let y = y.trim().parse().map_err(|_| invalid())?;

    Ok(Some((x, y)))
}
