use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("pixels error: {0}")]
    Pixels(#[from] pixels::Error),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Seconds per generation must be a positive, finite number.
    #[error("invalid interval {0:?}: expected a positive number of seconds")]
    InvalidInterval(String),
}

pub type LifeResult<T> = Result<T, LifeError>;
