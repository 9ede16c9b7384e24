use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{axis} {value} is outside the allowed range {min}..={max}")]
    DimensionOutOfRange {
        axis: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    #[error("size limits {min}..={max} are invalid")]
    InvalidLimits { min: usize, max: usize },
    #[error("entry must be supplied when entry/exit placement is manual")]
    MissingEntry,
    #[error("exit must be supplied when entry/exit placement is manual")]
    MissingExit,
    #[error("{role} ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        role: &'static str,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("{role} ({x}, {y}) must lie on column {column}")]
    NotOnBoundary {
        role: &'static str,
        x: usize,
        y: usize,
        column: usize,
    },
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze configuration: {0}")]
    Config(#[from] ConfigError),
}
