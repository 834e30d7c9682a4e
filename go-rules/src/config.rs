use serde::{Deserialize, Serialize};

/// Construction-time settings for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub size: u8,
}

impl GameConfig {
    pub const DEFAULT_SIZE: u8 = 19;

    pub fn new(size: u8) -> Self {
        GameConfig { size }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: Self::DEFAULT_SIZE,
        }
    }
}
