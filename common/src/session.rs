use tracing::debug;

use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::maze::{self, Maze};

/// Holds the current maze for one play session. Each regeneration throws
/// the previous maze away.
#[derive(Debug)]
pub struct MazeSession {
    config: MazeConfig,
    maze: Maze,
    generations: u64,
}

impl MazeSession {
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        let maze = maze::generate(&config)?;

        Ok(MazeSession {
            config,
            maze,
            generations: 1,
        })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Replaces the current maze with a new one. A configured seed is offset
    /// by the generation count, so a seeded session yields the same sequence
    /// of mazes every time it is replayed.
    pub fn regenerate(&mut self) -> Result<&Maze, MazeError> {
        let mut config = self.config.clone();
        config.seed = self
            .config
            .seed
            .map(|seed| seed.wrapping_add(self.generations));

        self.maze = maze::generate(&config)?;
        self.generations += 1;

        debug!(generations = self.generations, seed = self.maze.seed(), "regenerated maze");

        Ok(&self.maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_holds_first_maze() {
        let config = MazeConfig::new(7, 7).with_seed(10);
        let session = MazeSession::new(config).expect("config should be valid");

        assert_eq!(session.generations(), 1);
        assert_eq!(session.maze().seed(), 10);
        assert_eq!(session.config().width, 7);
    }

    #[test]
    fn test_invalid_config_fails_session_creation() {
        assert!(MazeSession::new(MazeConfig::new(2, 7)).is_err());
    }

    #[test]
    fn test_regenerate_replaces_maze() {
        let config = MazeConfig::new(12, 12).with_seed(10);
        let mut session = MazeSession::new(config).expect("config should be valid");
        let first = session.maze().clone();

        let second = session.regenerate().expect("regeneration should succeed").clone();

        assert_eq!(session.generations(), 2);
        assert_eq!(second.seed(), 11);
        assert_ne!(first, second);
    }

    #[test]
    fn test_seeded_sessions_replay_identically() {
        let config = MazeConfig::new(9, 6).with_seed(99);
        let mut one = MazeSession::new(config.clone()).expect("config should be valid");
        let mut two = MazeSession::new(config).expect("config should be valid");

        for _ in 0..3 {
            let a = one.regenerate().expect("regeneration should succeed").clone();
            let b = two.regenerate().expect("regeneration should succeed").clone();
            assert_eq!(a, b);
        }
    }
}
