use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// The four sides of a cell, in the order neighbors are considered when
/// carving. `Up` moves to `y + 1` and faces a cell's top wall.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Up => (0, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }

    fn between(from: (usize, usize), to: (usize, usize)) -> Option<Direction> {
        let dx = to.0 as isize - from.0 as isize;
        let dy = to.1 as isize - from.1 as isize;
        Direction::iter().find(|direction| direction.offset() == (dx, dy))
    }
}

/// Wall flags of a single cell. `true` means the wall is standing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Walls {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Walls {
    pub fn closed() -> Self {
        Walls {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }

    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Down => self.bottom,
            Direction::Up => self.top,
        }
    }

    pub fn is_open(&self, direction: Direction) -> bool {
        !self.get(direction)
    }

    pub fn set(&mut self, direction: Direction, present: bool) {
        match direction {
            Direction::Left => self.left = present,
            Direction::Right => self.right = present,
            Direction::Down => self.bottom = present,
            Direction::Up => self.top = present,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub walls: Walls,
    pub visited: bool,
}

impl Cell {
    fn new(x: usize, y: usize) -> Cell {
        Cell {
            x,
            y,
            walls: Walls::closed(),
            visited: false,
        }
    }
}

/// A dense `width` x `height` lattice of cells, indexed `[y][x]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");

        let cells = (0..height)
            .map(|y| (0..width).map(|x| Cell::new(x, y)).collect())
            .collect();

        Grid {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        self.assert_in_bounds(x, y);
        &self.cells[y][x]
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        self.assert_in_bounds(x, y);
        &mut self.cells[y][x]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    pub fn walls(&self, x: usize, y: usize) -> Walls {
        self.cell(x, y).walls
    }

    pub fn is_visited(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).visited
    }

    pub fn visit(&mut self, x: usize, y: usize) {
        self.cell_mut(x, y).visited = true;
    }

    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = direction.offset();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;

        if self.contains(nx, ny) {
            Some((nx, ny))
        } else {
            None
        }
    }

    /// In-bounds neighbors of `(x, y)` that the carve has not reached yet,
    /// in left, right, down, up order.
    pub fn unvisited_neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        self.assert_in_bounds(x, y);

        Direction::iter()
            .filter_map(|direction| self.neighbor(x, y, direction))
            .filter(|&(nx, ny)| !self.is_visited(nx, ny))
            .collect()
    }

    /// Clears the wall pair shared by two adjacent cells.
    pub fn break_walls_between(&mut self, first: (usize, usize), second: (usize, usize)) {
        self.assert_in_bounds(first.0, first.1);
        self.assert_in_bounds(second.0, second.1);

        let direction = Direction::between(first, second).unwrap_or_else(|| {
            panic!(
                "cells ({}, {}) and ({}, {}) are not adjacent",
                first.0, first.1, second.0, second.1
            )
        });

        self.cell_mut(first.0, first.1).walls.set(direction, false);
        self.cell_mut(second.0, second.1)
            .walls
            .set(direction.opposite(), false);
    }

    /// Opens a wall on the outer boundary, where there is no cell on the
    /// other side to pair with.
    pub fn open_outer_wall(&mut self, x: usize, y: usize, direction: Direction) {
        assert!(
            self.neighbor(x, y, direction).is_none(),
            "wall {direction:?} of ({x}, {y}) is not on the grid boundary"
        );

        self.cell_mut(x, y).walls.set(direction, false);
    }

    /// Clears a single wall flag without touching the cell behind it.
    pub(crate) fn clear_wall_unpaired(&mut self, x: usize, y: usize, direction: Direction) {
        self.cell_mut(x, y).walls.set(direction, false);
    }

    /// Number of internal wall pairs that have been carved open.
    pub fn passages(&self) -> usize {
        self.cells()
            .map(|cell| {
                let right = cell.x + 1 < self.width && cell.walls.is_open(Direction::Right);
                let up = cell.y + 1 < self.height && cell.walls.is_open(Direction::Up);
                right as usize + up as usize
            })
            .sum()
    }

    fn assert_in_bounds(&self, x: usize, y: usize) {
        assert!(
            self.contains(x, y),
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_fully_walled_and_unvisited() {
        let grid = Grid::new(6, 4);

        assert_eq!(grid.cells().count(), 24);
        for cell in grid.cells() {
            assert_eq!(cell.walls, Walls::closed());
            assert!(!cell.visited);
            assert_eq!(grid.cell(cell.x, cell.y), cell);
        }
        assert_eq!(grid.passages(), 0);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_zero_width_grid_panics() {
        Grid::new(0, 5);
    }

    #[test]
    #[should_panic(expected = "outside the 5x5 grid")]
    fn test_out_of_range_access_panics() {
        let grid = Grid::new(5, 5);
        grid.cell(5, 0);
    }

    #[test]
    fn test_corner_cells_have_two_neighbors() {
        let grid = Grid::new(5, 5);

        assert_eq!(grid.unvisited_neighbors(0, 0), vec![(1, 0), (0, 1)]);
        assert_eq!(grid.unvisited_neighbors(4, 4), vec![(3, 4), (4, 3)]);
    }

    #[test]
    fn test_neighbors_follow_left_right_down_up_order() {
        let grid = Grid::new(5, 5);

        assert_eq!(
            grid.unvisited_neighbors(2, 2),
            vec![(1, 2), (3, 2), (2, 1), (2, 3)]
        );
    }

    #[test]
    fn test_visited_neighbors_are_excluded() {
        let mut grid = Grid::new(5, 5);
        grid.visit(1, 2);
        grid.visit(2, 3);

        assert_eq!(grid.unvisited_neighbors(2, 2), vec![(3, 2), (2, 1)]);
    }

    #[test]
    fn test_breaking_walls_clears_both_sides() {
        let mut grid = Grid::new(3, 3);

        grid.break_walls_between((1, 1), (2, 1));
        assert!(grid.walls(1, 1).is_open(Direction::Right));
        assert!(grid.walls(2, 1).is_open(Direction::Left));

        grid.break_walls_between((1, 1), (1, 0));
        assert!(grid.walls(1, 1).is_open(Direction::Down));
        assert!(grid.walls(1, 0).is_open(Direction::Up));

        assert_eq!(grid.passages(), 2);
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn test_breaking_walls_between_distant_cells_panics() {
        let mut grid = Grid::new(5, 5);
        grid.break_walls_between((4, 0), (0, 1));
    }

    #[test]
    fn test_outer_walls_open_only_on_the_boundary() {
        let mut grid = Grid::new(5, 5);
        grid.open_outer_wall(0, 3, Direction::Left);
        grid.open_outer_wall(4, 1, Direction::Right);

        assert!(grid.walls(0, 3).is_open(Direction::Left));
        assert!(grid.walls(4, 1).is_open(Direction::Right));
        assert_eq!(grid.passages(), 0);
    }

    #[test]
    #[should_panic(expected = "not on the grid boundary")]
    fn test_inner_wall_is_not_an_outer_wall() {
        let mut grid = Grid::new(5, 5);
        grid.open_outer_wall(2, 2, Direction::Left);
    }

    #[test]
    fn test_opposite_directions_round_trip() {
        for direction in Direction::iter() {
            assert_eq!(direction.opposite().opposite(), direction);
            let (dx, dy) = direction.offset();
            assert_eq!(direction.opposite().offset(), (-dx, -dy));
        }
    }
}
