use glam::Vec2;

use crate::{
    color::{Color, WHITE},
    types::Rect,
};

/// Position, size, rotation and visibility shared by everything that can be drawn
pub trait Visual {
    fn pos(&self) -> Vec2;
    fn set_pos(&mut self, pos: Vec2);
    fn size(&self) -> Vec2;
    /// Angle in radians
    fn angle(&self) -> f32;
    fn set_angle(&mut self, angle: f32);
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);

    /// Bounding box before rotation
    fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos(), self.size())
    }
}

/// Sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// top left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Angle in radians
    pub angle: f32,
    pub visible: bool,
    /// paint, every drawn pixel is modulated by it
    pub color: Color,
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ZERO)
    }
}

impl Sprite {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            angle: 0.0,
            visible: true,
            color: WHITE,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

impl Visual for Sprite {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn angle(&self) -> f32 {
        self.angle
    }

    fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
