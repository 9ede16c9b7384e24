pub mod config;
pub mod constants;
pub mod error;
pub mod maze;
pub mod session;

pub use config::{MazeConfig, SizeLimits};
pub use error::{ConfigError, MazeError};
pub use maze::{Maze, generate};
pub use session::MazeSession;
