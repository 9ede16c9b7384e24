pub mod algorithms;

use glam::Vec2;
use rand::{Rng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{debug, warn};

use super::grid::{Direction, Grid};
use algorithms::backtrack::Backtrack;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    Backtrack, // Randomized depth-first search: long winding corridors.
}

/// What to do when the exit was not reached by the carve.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RepairPolicy {
    /// Open the wall toward the exit's nearest unvisited neighbor.
    #[default]
    Nearest,
    /// Open the exit's left wall and the right wall of cell `(0, 1)`,
    /// whatever the nearest neighbor is. Kept so older layouts can be
    /// reproduced; the two walls cleared are generally not a matched pair.
    Legacy,
}

/// Record of an exit repair, so that the extra passage can be told apart
/// from the carved tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ExitRepair {
    pub exit: (usize, usize),
    pub policy: RepairPolicy,
    pub nearest: Option<(usize, usize)>,
    pub opened_toward: Option<(usize, usize)>,
}

const LEGACY_REPAIR_TARGET: (usize, usize) = (0, 1);

pub struct MazeMaker {
    pub grid: Grid,
    pub rng: StdRng,
    pub entry: (usize, usize),
    pub exit: (usize, usize),
}

impl MazeMaker {
    pub fn new(grid: Grid, rng: StdRng) -> Self {
        let exit = (grid.width() - 1, 0);

        MazeMaker {
            grid,
            rng,
            entry: (0, 0),
            exit,
        }
    }

    /// Picks entry and exit rows at random, entry first, and opens their
    /// outer doorways.
    pub fn place_entry_and_exit(&mut self) {
        let height = self.grid.height();
        let entry_y = self.rng.random_range(0..height);
        let exit_y = self.rng.random_range(0..height);

        self.set_entry_and_exit((0, entry_y), (self.grid.width() - 1, exit_y));
    }

    pub fn set_entry_and_exit(&mut self, entry: (usize, usize), exit: (usize, usize)) {
        self.entry = entry;
        self.exit = exit;

        self.grid.open_outer_wall(entry.0, entry.1, Direction::Left);
        self.grid.open_outer_wall(exit.0, exit.1, Direction::Right);

        debug!(?entry, ?exit, "placed entry and exit");
    }

    pub fn carve(&mut self, algorithm: Algorithm) {
        match algorithm {
            Algorithm::Backtrack => self.backtrack(self.entry),
        }

        debug!(
            passages = self.grid.passages(),
            width = self.grid.width(),
            height = self.grid.height(),
            "carved maze"
        );
    }

    /// Makes sure the exit was reached by the carve. Returns a record of the
    /// repair if one was needed.
    pub fn ensure_exit_path(&mut self, policy: RepairPolicy) -> Option<ExitRepair> {
        let exit = self.exit;
        if self.grid.is_visited(exit.0, exit.1) {
            return None;
        }

        let neighbors = self.grid.unvisited_neighbors(exit.0, exit.1);
        let nearest = nearest_to(exit, &neighbors);

        let opened_toward = nearest.and_then(|nearest| match policy {
            RepairPolicy::Nearest => {
                self.grid.break_walls_between(exit, nearest);
                Some(nearest)
            }
            RepairPolicy::Legacy => self
                .break_walls_legacy(exit, LEGACY_REPAIR_TARGET)
                .then_some(LEGACY_REPAIR_TARGET),
        });

        self.grid.visit(exit.0, exit.1);

        warn!(
            ?exit,
            %policy,
            ?nearest,
            ?opened_toward,
            "exit was not reached by the carve; repaired"
        );

        Some(ExitRepair {
            exit,
            policy,
            nearest,
            opened_toward,
        })
    }

    // Compares coordinates the way the historical implementation did,
    // without requiring the two cells to be adjacent. Returns whether any
    // wall was cleared.
    fn break_walls_legacy(&mut self, first: (usize, usize), second: (usize, usize)) -> bool {
        let direction = if first.0 < second.0 {
            Direction::Right
        } else if first.0 > second.0 {
            Direction::Left
        } else if first.1 < second.1 {
            Direction::Up
        } else if first.1 > second.1 {
            Direction::Down
        } else {
            return false;
        };

        self.grid.clear_wall_unpaired(first.0, first.1, direction);
        if self.grid.contains(second.0, second.1) {
            self.grid
                .clear_wall_unpaired(second.0, second.1, direction.opposite());
        }
        true
    }
}

fn nearest_to(origin: (usize, usize), candidates: &[(usize, usize)]) -> Option<(usize, usize)> {
    let to_vec = |(x, y): (usize, usize)| Vec2::new(x as f32, y as f32);
    let origin = to_vec(origin);

    let mut nearest = *candidates.first()?;
    for &candidate in candidates {
        if to_vec(candidate).distance(origin) < to_vec(nearest).distance(origin) {
            nearest = candidate;
        }
    }

    Some(nearest)
}
