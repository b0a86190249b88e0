use core::fmt;
use std::fmt::Debug;

use glam::{UVec2, Vec2};
use image::{imageops, RgbaImage};

use crate::color::Color;

/// Image
/// An owned RGBA bitmap, frames of an animation are sub images of a strip
#[derive(Clone, PartialEq)]
pub struct Image {
    pixels: RgbaImage,
}

impl Image {
    /// Build a transparent image
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    /// Build an image filled with one color
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, color.into()),
        }
    }

    /// Wrap decoded pixels
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn as_rgba_mut(&mut self) -> &mut RgbaImage {
        &mut self.pixels
    }

    pub fn into_rgba(self) -> RgbaImage {
        self.pixels
    }

    /// Return the pixel at (x, y), None if out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixels.get_pixel_checked(x, y).map(|px| (*px).into())
    }

    /// Copy out a sub region.
    ///
    /// The region is clamped to the image, so a region reaching past the
    /// right or bottom edge yields a smaller (possibly empty) image.
    pub fn sub_image(&self, x: u32, y: u32, width: u32, height: u32) -> Image {
        let view = imageops::crop_imm(&self.pixels, x, y, width, height);
        Image {
            pixels: view.to_image(),
        }
    }

    /// Slice a horizontal strip into `frame_count` frames, left to right.
    pub fn slice_strip(
        &self,
        frame_width: u32,
        frame_height: u32,
        frame_count: usize,
    ) -> Vec<Image> {
        let needed = frame_width as u64 * frame_count as u64;
        if needed > self.pixels.width() as u64 || frame_height > self.pixels.height() {
            log::warn!(
                "Strip {:?} is smaller than {} frames of {}x{}",
                self.size(),
                frame_count,
                frame_width,
                frame_height
            );
        }
        (0..frame_count)
            .map(|i| {
                let x = (i as u64 * frame_width as u64).min(u32::MAX as u64) as u32;
                self.sub_image(x, 0, frame_width, frame_height)
            })
            .collect()
    }
}

impl Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        f.debug_struct("Image").field("size", &size).finish()
    }
}

impl Image {
    /// Return image size
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.pixels.width(), self.pixels.height())
    }

    /// Return image size in Vec2
    pub fn sizef(&self) -> Vec2 {
        let size = self.size();
        Vec2::new(size.x as f32, size.y as f32)
    }
}
