use std::process;

use common::MazeConfig;

fn main() {
    cli::init_logging();

    let config = match MazeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to read maze configuration.");
            eprintln!("Details: {}.", e);
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&config) {
        eprintln!("Error: Failed to generate maze.");
        eprintln!("Details: {}.", e);
        process::exit(1);
    }
}
