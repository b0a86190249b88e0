use glam::{Affine2, Vec2};
use image::RgbaImage;

use crate::{color::Color, image::Image, types::Rect};

/// Drawing target
///
/// Coordinates are y-down pixels, so a positive angle turns clockwise on
/// screen. Transforms apply to every following `draw_image` until restored.
pub trait Surface {
    /// Push the current transform
    fn save(&mut self);
    /// Pop the transform pushed by the matching `save`
    fn restore(&mut self);
    /// Rotate `angle` radians around `pivot`
    fn rotate(&mut self, angle: f32, pivot: Vec2);
    /// Blit `image` with its top left corner at `pos`, modulated by `paint`
    fn draw_image(&mut self, image: &Image, pos: Vec2, paint: Color);
}

/// Software canvas
pub struct Canvas {
    target: RgbaImage,
    transform: Affine2,
    transform_stack: Vec<Affine2>,
    draw_calls: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: RgbaImage::new(width, height),
            transform: Affine2::IDENTITY,
            transform_stack: Vec::new(),
            draw_calls: 0,
        }
    }

    pub fn clear(&mut self, color: Color) {
        for px in self.target.pixels_mut() {
            *px = color.into();
        }
        self.draw_calls = 0;
    }

    pub fn target(&self) -> &RgbaImage {
        &self.target
    }

    pub fn into_image(self) -> Image {
        Image::from_rgba(self.target)
    }

    /// Read a pixel of the target, None if out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.target.get_pixel_checked(x, y).map(|px| (*px).into())
    }

    /// Draws that overlapped the target since the last clear
    pub fn draw_calls(&self) -> u32 {
        self.draw_calls
    }

    pub fn transform(&self) -> Affine2 {
        self.transform
    }

    fn target_rect(&self) -> Rect {
        let size = Vec2::new(self.target.width() as f32, self.target.height() as f32);
        Rect::from_pos_size(Vec2::ZERO, size)
    }
}

impl Surface for Canvas {
    fn save(&mut self) {
        self.transform_stack.push(self.transform);
    }

    fn restore(&mut self) {
        match self.transform_stack.pop() {
            Some(transform) => self.transform = transform,
            None => {
                log::warn!("Canvas restore without save");
                self.transform = Affine2::IDENTITY;
            }
        }
    }

    fn rotate(&mut self, angle: f32, pivot: Vec2) {
        self.transform = self.transform
            * Affine2::from_translation(pivot)
            * Affine2::from_angle(angle)
            * Affine2::from_translation(-pivot);
    }

    fn draw_image(&mut self, image: &Image, pos: Vec2, paint: Color) {
        let size = image.sizef();
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        // a collapsed transform covers no pixels
        if self.transform.matrix2.determinant().abs() <= f32::EPSILON {
            return;
        }

        let corners = [
            pos,
            pos + Vec2::new(size.x, 0.0),
            pos + size,
            pos + Vec2::new(0.0, size.y),
        ]
        .map(|p| self.transform.transform_point2(p));
        let min = corners.iter().fold(Vec2::INFINITY, |acc, &p| acc.min(p));
        let max = corners.iter().fold(Vec2::NEG_INFINITY, |acc, &p| acc.max(p));
        let screen = self.target_rect();
        if !screen.overlaps(&Rect { min, max }) {
            return;
        }
        self.draw_calls += 1;

        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = max.x.ceil().min(screen.max.x) as u32;
        let y1 = max.y.ceil().min(screen.max.y) as u32;
        let inverse = self.transform.inverse();

        for y in y0..y1 {
            for x in x0..x1 {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let local = inverse.transform_point2(center) - pos;
                if local.x < 0.0 || local.y < 0.0 || local.x >= size.x || local.y >= size.y {
                    continue;
                }
                let Some(texel) = image.pixel(local.x as u32, local.y as u32) else {
                    continue;
                };
                let dst: Color = (*self.target.get_pixel(x, y)).into();
                let out = texel.modulate(paint).blend_over(dst);
                self.target.put_pixel(x, y, out.into());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;
    use crate::color::{BLUE, RED, TRANSPARENT, WHITE};

    fn two_tone() -> Image {
        // left column red, right column blue
        let mut image = Image::filled(2, 2, RED);
        image.as_rgba_mut().put_pixel(1, 0, BLUE.into());
        image.as_rgba_mut().put_pixel(1, 1, BLUE.into());
        image
    }

    #[test]
    fn test_draw_at_position() {
        let mut canvas = Canvas::new(6, 6);
        canvas.draw_image(&two_tone(), Vec2::new(2.0, 3.0), WHITE);
        assert_eq!(canvas.draw_calls(), 1);
        assert_eq!(canvas.pixel(2, 3), Some(RED));
        assert_eq!(canvas.pixel(3, 4), Some(BLUE));
        assert_eq!(canvas.pixel(1, 3), Some(TRANSPARENT));
        assert_eq!(canvas.pixel(4, 3), Some(TRANSPARENT));
    }

    #[test]
    fn test_draw_tinted() {
        let mut canvas = Canvas::new(2, 2);
        canvas.draw_image(&Image::filled(2, 2, WHITE), Vec2::ZERO, RED);
        assert_eq!(canvas.pixel(0, 0), Some(RED));
    }

    #[test]
    fn test_rotate_half_turn_mirrors() {
        let mut canvas = Canvas::new(4, 4);
        canvas.save();
        canvas.rotate(PI, Vec2::new(2.0, 2.0));
        canvas.draw_image(&two_tone(), Vec2::new(1.0, 1.0), WHITE);
        canvas.restore();
        assert_eq!(canvas.pixel(1, 1), Some(BLUE));
        assert_eq!(canvas.pixel(2, 2), Some(RED));
        assert_eq!(canvas.transform(), Affine2::IDENTITY);
    }

    #[test]
    fn test_offscreen_is_skipped() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_image(&two_tone(), Vec2::new(10.0, 10.0), WHITE);
        canvas.draw_image(&two_tone(), Vec2::new(-5.0, 0.0), WHITE);
        assert_eq!(canvas.draw_calls(), 0);
        assert!(canvas.target().pixels().all(|px| px.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn test_edge_touching_is_not_counted() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_image(&two_tone(), Vec2::new(4.0, 0.0), WHITE);
        canvas.draw_image(&two_tone(), Vec2::new(0.0, -2.0), WHITE);
        assert_eq!(canvas.draw_calls(), 0);
        canvas.draw_image(&two_tone(), Vec2::new(3.0, 3.0), WHITE);
        assert_eq!(canvas.draw_calls(), 1);
        assert_eq!(canvas.pixel(3, 3), Some(RED));
    }

    #[test]
    fn test_unbalanced_restore_resets() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut canvas = Canvas::new(1, 1);
        canvas.rotate(1.0, Vec2::ZERO);
        canvas.restore();
        assert_eq!(canvas.transform(), Affine2::IDENTITY);
    }
}
