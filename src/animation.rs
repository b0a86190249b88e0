use glam::{UVec2, Vec2};

use crate::{
    config::AnimationConfig,
    errors::Error,
    image::Image,
    render::Surface,
    sprite::{Sprite, Visual},
};

/// Playback state derived from the animating and looping flags.
///
/// A single pass that just wrapped has no state of its own, it reads as
/// `Idle` at frame 0. `LoopingPaused` is a looping animation that was
/// stopped with `stop_animation` and keeps its loop flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationMode {
    /// Not advancing. A finished single pass ends here at frame 0
    Idle,
    /// Advancing, stops after the last frame
    SinglePass,
    /// Advancing forever
    Looping,
    /// Looping flag set but stopped
    LoopingPaused,
}

/// A sprite playing a horizontal strip of frames.
///
/// The frame index only moves on [`AnimatedSprite::heartbeat`], the caller
/// owns the clock. Invalid indices are ignored rather than reported.
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    sprite: Sprite,
    frames: Box<[Image]>,
    current_frame: usize,
    animation_delta: f32,
    animation_speed: f32,
    animating: bool,
    loop_animation: bool,
}

impl AnimatedSprite {
    /// Slice `sheet` into `frame_count` frames of `frame_width` x `frame_height`.
    ///
    /// Nothing is validated, frames reaching past the sheet come out
    /// clipped or empty. The sprite starts hidden and stopped at frame 0,
    /// with a speed of 0 so every heartbeat advances until a speed is set.
    pub fn new(sheet: &Image, frame_width: u32, frame_height: u32, frame_count: usize) -> Self {
        let frames = sheet.slice_strip(frame_width, frame_height, frame_count);
        let mut sprite = Sprite::new(
            Vec2::ZERO,
            Vec2::new(frame_width as f32, frame_height as f32),
        );
        sprite.visible = false;
        Self {
            sprite,
            frames: frames.into_boxed_slice(),
            current_frame: 0,
            animation_delta: 0.0,
            animation_speed: 0.0,
            animating: false,
            loop_animation: false,
        }
    }

    /// Like [`AnimatedSprite::new`] but rejects a strip that can't hold every frame
    pub fn try_new(
        sheet: &Image,
        frame_width: u32,
        frame_height: u32,
        frame_count: usize,
    ) -> Result<Self, Error> {
        if frame_width == 0 || frame_height == 0 {
            return Err(Error::ZeroFrameSize);
        }
        if frame_count == 0 {
            return Err(Error::NoFrames);
        }
        let needed_width = u32::try_from(frame_count as u64 * frame_width as u64)
            .unwrap_or(u32::MAX);
        let needed = UVec2::new(needed_width, frame_height);
        let actual = sheet.size();
        if actual.x < needed.x || actual.y < needed.y {
            return Err(Error::StripTooSmall { needed, actual });
        }
        Ok(Self::new(sheet, frame_width, frame_height, frame_count))
    }

    /// Build from a config, starting playback if it asks to
    pub fn from_config(sheet: &Image, config: &AnimationConfig) -> Self {
        let mut anim = Self::new(
            sheet,
            config.frame_width,
            config.frame_height,
            config.frame_count,
        );
        anim.set_animation_speed(config.speed);
        anim.loop_animation = config.looping;
        if config.autostart {
            anim.start_animation();
        }
        anim
    }

    /// Advance the animation clock by `delta`.
    ///
    /// At most one frame is advanced per call, however large `delta` is.
    pub fn heartbeat(&mut self, delta: f32) {
        if !self.animating {
            return;
        }
        self.animation_delta += delta;
        if self.animation_delta < self.animation_speed {
            return;
        }
        self.animation_delta = 0.0;
        self.current_frame += 1;
        if self.current_frame >= self.frames.len() {
            self.current_frame = 0;
            if !self.loop_animation {
                self.animating = false;
                log::debug!("Animation finished after {} frames", self.frames.len());
            }
        }
    }

    /// Draw the current frame rotated around the sprite center
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !self.sprite.visible {
            return;
        }
        surface.save();
        surface.rotate(self.sprite.angle, self.sprite.center());
        if let Some(frame) = self.current_image() {
            surface.draw_image(frame, self.sprite.pos, self.sprite.color);
        }
        surface.restore();
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_looping(&self) -> bool {
        self.loop_animation
    }

    pub fn mode(&self) -> AnimationMode {
        match (self.animating, self.loop_animation) {
            (false, false) => AnimationMode::Idle,
            (true, false) => AnimationMode::SinglePass,
            (true, true) => AnimationMode::Looping,
            (false, true) => AnimationMode::LoopingPaused,
        }
    }

    /// Frame at `index`, None if out of range
    pub fn frame(&self, index: usize) -> Option<&Image> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Image] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn current_image(&self) -> Option<&Image> {
        self.frame(self.current_frame)
    }

    /// Jump to `index`, ignored if out of range
    pub fn set_frame(&mut self, index: usize) {
        if index < self.frames.len() {
            self.current_frame = index;
        }
    }

    /// Rewind to frame 0 and play
    pub fn start_animation(&mut self) {
        self.current_frame = 0;
        self.animation_delta = 0.0;
        self.animating = true;
        log::debug!(
            "Start animation, {} frames, looping {}",
            self.frames.len(),
            self.loop_animation
        );
    }

    /// Freeze on the current frame
    pub fn stop_animation(&mut self) {
        self.animating = false;
    }

    pub fn start_loop_animation(&mut self) {
        self.loop_animation = true;
        self.start_animation();
    }

    pub fn stop_loop_animation(&mut self) {
        self.loop_animation = false;
        self.stop_animation();
    }

    pub fn animation_speed(&self) -> f32 {
        self.animation_speed
    }

    /// Time each frame is held. A non-positive speed advances on every heartbeat
    pub fn set_animation_speed(&mut self, speed: f32) {
        self.animation_speed = speed;
    }

    /// Time accumulated toward the next frame
    pub fn animation_delta(&self) -> f32 {
        self.animation_delta
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }
}

impl Visual for AnimatedSprite {
    fn pos(&self) -> Vec2 {
        self.sprite.pos
    }

    fn set_pos(&mut self, pos: Vec2) {
        self.sprite.pos = pos;
    }

    fn size(&self) -> Vec2 {
        self.sprite.size
    }

    fn angle(&self) -> f32 {
        self.sprite.angle
    }

    fn set_angle(&mut self, angle: f32) {
        self.sprite.angle = angle;
    }

    fn is_visible(&self) -> bool {
        self.sprite.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.sprite.visible = visible;
    }
}
