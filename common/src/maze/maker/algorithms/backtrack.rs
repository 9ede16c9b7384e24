use rand::prelude::IndexedRandom;

use super::super::MazeMaker;

pub trait Backtrack {
    fn backtrack(&mut self, start: (usize, usize));
}

impl Backtrack for MazeMaker {
    fn backtrack(&mut self, start: (usize, usize)) {
        let mut stack = vec![start];
        self.grid.visit(start.0, start.1);

        while let Some(&current) = stack.last() {
            let neighbors = self.grid.unvisited_neighbors(current.0, current.1);

            match neighbors.choose(&mut self.rng).copied() {
                Some(next) => {
                    self.grid.break_walls_between(current, next);
                    self.grid.visit(next.0, next.1);
                    stack.push(next);
                }
                None => {
                    stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::maze::grid::{Direction, Grid};

    fn carve(width: usize, height: usize, start: (usize, usize), seed: u64) -> Grid {
        let mut maker = MazeMaker::new(Grid::new(width, height), StdRng::seed_from_u64(seed));
        maker.backtrack(start);
        maker.grid
    }

    #[test]
    fn test_backtrack_visits_every_cell() {
        for seed in 0..32 {
            let grid = carve(9, 7, (0, seed as usize % 7), seed);
            assert!(grid.cells().all(|cell| cell.visited));
        }
    }

    #[test]
    fn test_backtrack_carves_a_spanning_tree() {
        for seed in 0..32 {
            let grid = carve(8, 8, (3, 4), seed);
            assert_eq!(grid.passages(), 8 * 8 - 1);
        }
    }

    #[test]
    fn test_backtrack_single_row_is_a_corridor() {
        let grid = carve(5, 1, (0, 0), 7);

        assert_eq!(grid.passages(), 4);
        for x in 0..4 {
            assert!(grid.walls(x, 0).is_open(Direction::Right));
        }
        assert!(grid.cells().all(|cell| cell.walls.top && cell.walls.bottom));
    }

    #[test]
    fn test_backtrack_single_cell_carves_nothing() {
        let grid = carve(1, 1, (0, 0), 1);

        assert!(grid.is_visited(0, 0));
        assert_eq!(grid.passages(), 0);
    }

    #[test]
    fn test_backtrack_leaves_outer_walls_standing() {
        let grid = carve(6, 5, (0, 2), 99);

        for cell in grid.cells() {
            for direction in [Direction::Left, Direction::Right, Direction::Down, Direction::Up] {
                if grid.neighbor(cell.x, cell.y, direction).is_none() {
                    assert!(cell.walls.get(direction));
                }
            }
        }
    }
}
