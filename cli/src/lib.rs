use common::maze::Maze;
use common::{MazeConfig, MazeError};
use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(config: &MazeConfig) -> Result<Maze, MazeError> {
    let maze = common::generate(config)?;
    println!("{}", banner(&maze));
    println!("{}", maze.log());
    Ok(maze)
}

pub fn banner(maze: &Maze) -> String {
    let mut lines = vec![
        format!("  Size: {}x{}", maze.width(), maze.height()),
        format!("  Seed: {}", maze.seed()),
        format!("  Entry: {:?}", maze.entry()),
        format!("  Exit: {:?}", maze.exit()),
    ];

    if let Some(repair) = maze.repair() {
        lines.push(format!(
            "  Exit repaired ({}), opened toward {:?}",
            repair.policy, repair.opened_toward
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_lists_seed_and_doorways() {
        let maze = common::generate(&MazeConfig::new(5, 5).with_seed(42))
            .expect("config should be valid");
        let banner = banner(&maze);

        assert!(banner.contains("Size: 5x5"));
        assert!(banner.contains("Seed: 42"));
        assert!(banner.contains(&format!("Entry: {:?}", maze.entry())));
        assert!(banner.contains(&format!("Exit: {:?}", maze.exit())));
        assert!(!banner.contains("repaired"));
    }
}
