use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid must be at least 1x1")]
    InvalidGridSize,
    #[error("Round must last at least one second")]
    InvalidRoundSeconds,
    #[error("Obake rate must be within [0, 1]")]
    InvalidObakeRate,
    #[error("Sample interval must be non-zero")]
    InvalidSampleInterval,
    #[error("Cell index is outside the board")]
    InvalidIndex,
}

pub type Result<T> = core::result::Result<T, GameError>;
