use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;

pub const MIN_FPS: u32 = 10;
pub const MAX_FPS: u32 = 240;

/// Fend off ten levels of zombies in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "zombie_defense", version)]
pub struct Config {
    /// Display refresh rate; one simulation tick per frame.
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Seed for zombie placement and variants (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// File receiving log output (the terminal is taken over by the game).
    #[arg(long, default_value = "zombie_defense.log")]
    pub log_file: PathBuf,

    /// Do not capture the mouse; aim stays at the last pointer position.
    #[arg(long)]
    pub no_mouse: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_FPS..=MAX_FPS).contains(&self.fps) {
            return Err(ConfigError::FrameRate(self.fps));
        }
        Ok(())
    }

    pub fn frame_millis(&self) -> u64 {
        1000 / u64::from(self.fps.max(1))
    }
}
