use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error("grid cell size must be finite and positive, got {0}")]
    InvalidCellSize(f32),
    #[error("grid extent must be finite and positive, got {width}x{height}")]
    InvalidExtent { width: f32, height: f32 },
    #[error("grid of {columns}x{rows} cells is too large")]
    TooManyCells { columns: usize, rows: usize },
    #[error("invalid scene config: {0}")]
    Config(String),
    #[error("failed to read scene config: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PhysicsError {
    fn from(err: serde_json::Error) -> Self {
        PhysicsError::Config(err.to_string())
    }
}
