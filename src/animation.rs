//! Tick-driven sprite animation.

use crate::render::{Sprite, SpriteSheet};

/// A sequence of sprites shown for `frame_duration` ticks each.
#[derive(Debug, Clone)]
pub struct SpriteAnimation<'a> {
    looping: bool,
    frames: Vec<Sprite<'a>>,
    frame_duration: usize,
    time: usize,
}

impl<'a> SpriteAnimation<'a> {
    /// Create an animation over every frame of `sheet`.
    pub fn new(sheet: &SpriteSheet<'a>, frame_duration: usize, looping: bool) -> Self {
        let frames = (0..sheet.len()).filter_map(|i| sheet.frame(i)).collect();
        Self {
            looping,
            frames,
            frame_duration: frame_duration.max(1),
            time: 0,
        }
    }

    pub fn looping(sheet: &SpriteSheet<'a>, frame_duration: usize) -> Self {
        Self::new(sheet, frame_duration, true)
    }

    pub fn frame_duration(&self) -> usize {
        self.frame_duration
    }

    pub fn time(&self) -> usize {
        self.time
    }

    fn total_duration(&self) -> usize {
        self.frames.len() * self.frame_duration
    }

    /// Change the ticks per frame. Elapsed time is folded back into the new
    /// cycle so the current frame index stays valid.
    pub fn set_frame_duration(&mut self, frame_duration: usize) {
        self.frame_duration = frame_duration.max(1);
        if self.total_duration() > 0 {
            self.time %= self.total_duration();
        }
    }

    pub fn reset(&mut self) {
        self.time = 0;
    }

    /// Advance by one tick. Looping animations wrap to the first frame;
    /// one-shot animations hold the last one.
    pub fn tick(&mut self) {
        let total = self.total_duration();
        if total == 0 {
            return;
        }
        self.time += 1;
        if self.time >= total {
            self.time = if self.looping { 0 } else { total - 1 };
        }
    }

    pub fn current_index(&self) -> usize {
        self.time / self.frame_duration
    }

    /// The sprite to draw this tick.
    pub fn current_frame(&self) -> Option<&Sprite<'a>> {
        self.frames.get(self.current_index())
    }
}
