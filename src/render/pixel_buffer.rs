//! Software raster that every frame is composed into.
//!
//! Provides the [`PixelBuffer`] struct which owns the color buffer and
//! implements the sprite, text and number blits used by the game.
//!
//! # Orientation
//!
//! Row 0 is the *bottom* of the playfield. A sprite drawn at `(x, y)` has its
//! bottom row on buffer row `y` and its top row on `y + height - 1`, so sprite
//! masks (authored top row first) come out upright once the presentation layer
//! flips the buffer vertically.

use super::sprite::{Sprite, SpriteSheet};

/// First character of the glyph sheet.
const FIRST_GLYPH: u32 = ' ' as u32;

pub struct PixelBuffer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![0; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Paint one full buffer row.
    pub fn draw_hline(&mut self, y: i32, color: u32) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let start = (y as u32 * self.width) as usize;
        self.color_buffer[start..start + self.width as usize].fill(color);
    }

    /// Overlay `color` wherever `sprite` is opaque.
    ///
    /// Sprite row `yi` lands on buffer row `sprite.height - 1 + y - yi`.
    /// Pixels that fall outside the buffer (including negative coordinates)
    /// are dropped; transparent pixels never touch the buffer.
    pub fn draw_sprite(&mut self, sprite: &Sprite<'_>, x: i32, y: i32, color: u32) {
        let top = sprite.height() as i32 - 1 + y;
        for yi in 0..sprite.height() {
            let row = top - yi as i32;
            if row < 0 || row >= self.height as i32 {
                continue;
            }
            for xi in 0..sprite.width() {
                let col = x + xi as i32;
                if col < 0 || col >= self.width as i32 {
                    continue;
                }
                if sprite.is_opaque(xi, yi) {
                    self.color_buffer[(row as u32 * self.width + col as u32) as usize] = color;
                }
            }
        }
    }

    /// Draw `text` left to right, one glyph per character.
    ///
    /// Glyph `i` of `sheet` is character `' ' + i`. Characters with no glyph
    /// leave a blank cell.
    pub fn draw_text(&mut self, sheet: &SpriteSheet<'_>, text: &str, x: i32, y: i32, color: u32) {
        let mut cursor = x;
        for c in text.chars() {
            let glyph = (c as u32)
                .checked_sub(FIRST_GLYPH)
                .and_then(|index| sheet.frame(index as usize));
            if let Some(glyph) = glyph {
                self.draw_sprite(&glyph, cursor, y, color);
            }
            cursor += sheet.frame_width() as i32;
        }
    }

    /// Draw the decimal digits of `number`, most significant first.
    ///
    /// `digits` must hold the glyphs for `0..=9` in order.
    pub fn draw_number(&mut self, digits: &SpriteSheet<'_>, number: usize, x: i32, y: i32, color: u32) {
        let mut decimal = Vec::with_capacity(20);
        let mut current = number;
        loop {
            decimal.push(current % 10);
            current /= 10;
            if current == 0 {
                break;
            }
        }

        let mut cursor = x;
        for digit in decimal.into_iter().rev() {
            if let Some(glyph) = digits.frame(digit) {
                self.draw_sprite(&glyph, cursor, y, color);
            }
            cursor += digits.frame_width() as i32;
        }
    }

    /// The raster as native-endian bytes, ready for a streaming texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8, and the
        // returned slice borrows `self`, so it cannot outlive the buffer.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }
}
