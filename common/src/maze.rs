pub mod grid;
pub mod maker;

use std::fmt;

use glam::{Vec3, vec3};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::MazeConfig;
use crate::error::{ConfigError, MazeError};
pub use grid::{Cell, Direction, Grid, Walls};
pub use maker::{Algorithm, ExitRepair, RepairPolicy};
use maker::MazeMaker;

pub const CELL_SIZE: f32 = 1.0; // World units per cell edge when placing cell prefabs.

/// A finished maze: a carved grid plus its doorways. Read-only once built.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    grid: Grid,
    entry: (usize, usize),
    exit: (usize, usize),
    seed: u64,
    repair: Option<ExitRepair>,
}

/// Builds a maze from a validated configuration. Without a configured seed
/// a fresh one is drawn and recorded in [`Maze::seed`].
pub fn generate(config: &MazeConfig) -> Result<Maze, MazeError> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let grid = Grid::new(config.width, config.height);
    let mut maker = MazeMaker::new(grid, StdRng::seed_from_u64(seed));

    if config.auto_entry_exit {
        maker.place_entry_and_exit();
    } else {
        let entry = config.entry.ok_or(ConfigError::MissingEntry)?;
        let exit = config.exit.ok_or(ConfigError::MissingExit)?;
        maker.set_entry_and_exit(entry, exit);
    }

    maker.carve(Algorithm::Backtrack);
    let repair = maker.ensure_exit_path(config.repair_policy);

    info!(
        width = config.width,
        height = config.height,
        seed,
        entry = ?maker.entry,
        exit = ?maker.exit,
        "generated maze"
    );

    Ok(Maze {
        grid: maker.grid,
        entry: maker.entry,
        exit: maker.exit,
        seed,
        repair,
    })
}

impl Maze {
    pub fn generate(
        width: usize,
        height: usize,
        auto_entry_exit: bool,
        entry: Option<(usize, usize)>,
        exit: Option<(usize, usize)>,
        seed: Option<u64>,
    ) -> Result<Self, MazeError> {
        let config = MazeConfig {
            width,
            height,
            auto_entry_exit,
            entry,
            exit,
            seed,
            ..Default::default()
        };
        generate(&config)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn entry(&self) -> (usize, usize) {
        self.entry
    }

    pub fn exit(&self) -> (usize, usize) {
        self.exit
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn repair(&self) -> Option<&ExitRepair> {
        self.repair.as_ref()
    }

    pub fn walls(&self, x: usize, y: usize) -> Walls {
        self.grid.walls(x, y)
    }

    /// Which sides of a cell prefab should be drawn solid. Shared walls are
    /// owned by one cell only (top and left), so the bottom row and the last
    /// column draw the outer edge, leaving the exit open.
    pub fn prefab_walls(&self, x: usize, y: usize) -> Walls {
        let walls = self.grid.walls(x, y);
        let last_column = x == self.width() - 1;

        Walls {
            top: walls.top,
            left: walls.left,
            right: last_column && (x, y) != self.exit,
            bottom: y == 0,
        }
    }

    pub fn cell_position(&self, x: usize, y: usize, cell_size: f32) -> Vec3 {
        let cell = self.grid.cell(x, y);
        vec3(cell.x as f32 * cell_size, 0.0, cell.y as f32 * cell_size)
    }

    pub fn log(&self) -> String {
        let width = 2 * self.width() + 1;
        let height = 2 * self.height() + 1;
        let mut blocks = vec![vec![true; width]; height];

        for cell in self.grid.cells() {
            let (bx, by) = (2 * cell.x + 1, 2 * cell.y + 1);
            blocks[by][bx] = false;

            let walls = cell.walls;
            if !walls.left {
                blocks[by][bx - 1] = false;
            }
            if !walls.right {
                blocks[by][bx + 1] = false;
            }
            if !walls.bottom {
                blocks[by - 1][bx] = false;
            }
            if !walls.top {
                blocks[by + 1][bx] = false;
            }
        }

        // Row `height - 1` is the top of the maze.
        blocks
            .iter()
            .rev()
            .map(|row| {
                row.iter()
                    .map(|&wall| if wall { "██" } else { "  " })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
