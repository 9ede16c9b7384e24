pub const MIN_MAZE_SIZE: usize = 5;
pub const MAX_MAZE_SIZE: usize = 100;
pub const DEFAULT_MAZE_SIZE: usize = 5;
