pub use crate::animation::{AnimatedSprite, AnimationMode};
pub use crate::color::*;
pub use crate::config::{AnimationConfig, DEFAULT_ANIMATION_SPEED};
pub use crate::image::Image;
pub use crate::render::{Canvas, Surface};
pub use crate::sprite::{Sprite, Visual};
pub use crate::types::Rect;
pub use anyhow::{self, Result};
pub use glam::{self, Vec2};
