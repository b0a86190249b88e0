use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Time a frame is held when a config leaves `speed` out
pub const DEFAULT_ANIMATION_SPEED: f32 = 100.0;

fn default_speed() -> f32 {
    DEFAULT_ANIMATION_SPEED
}

/// How a strip is sliced and played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub frame_width: u32,
    pub frame_height: u32,
    pub frame_count: usize,
    /// Time a frame is held, same unit as the heartbeat delta
    #[serde(default = "default_speed")]
    pub speed: f32,
    #[serde(default)]
    pub looping: bool,
    /// Start playing right after construction
    #[serde(default)]
    pub autostart: bool,
}

impl AnimationConfig {
    pub fn new(frame_width: u32, frame_height: u32, frame_count: usize) -> Self {
        Self {
            frame_width,
            frame_height,
            frame_count,
            speed: DEFAULT_ANIMATION_SPEED,
            looping: false,
            autostart: false,
        }
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let config = serde_json::from_str(s)?;
        Ok(config)
    }
}
