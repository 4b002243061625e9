use thiserror::Error;

/// Invalid command-line settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("frame rate {0} is out of range (allowed {min}..={max})", min = crate::config::MIN_FPS, max = crate::config::MAX_FPS)]
    FrameRate(u32),
}

/// Errors surfaced by the terminal front-end.  The simulation itself never
/// fails.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
