//! 1-bit sprite masks and sprite sheet views.
//!
//! A [`Sprite`] is a borrowed view into a row-major mask where any nonzero
//! byte is opaque. A [`SpriteSheet`] packs several equally sized frames into
//! one mask; individual frames are handed out as [`Sprite`] views so the
//! drawing code never has to know where a frame came from.

/// A borrowed, immutable sprite mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite<'a> {
    width: usize,
    height: usize,
    mask: &'a [u8],
}

impl<'a> Sprite<'a> {
    /// Create a sprite view over `mask`.
    ///
    /// # Panics
    /// Panics if `mask.len() != width * height`. In a `const` context this is
    /// a compile error, which is how the built-in catalog is validated.
    pub const fn new(width: usize, height: usize, mask: &'a [u8]) -> Self {
        assert!(mask.len() == width * height, "sprite mask size mismatch");
        Self {
            width,
            height,
            mask,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel at column `x`, row `y` (row 0 = top of the sprite) is opaque.
    #[inline]
    pub fn is_opaque(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.mask[y * self.width + x] != 0
    }

    /// Axis-aligned bounding box test between two sprites placed at
    /// `(x1, y1)` and `(x2, y2)`.
    pub fn overlaps(&self, x1: i32, y1: i32, other: &Sprite<'_>, x2: i32, y2: i32) -> bool {
        let (w1, h1) = (self.width as i32, self.height as i32);
        let (w2, h2) = (other.width as i32, other.height as i32);
        x1 < x2 + w2 && x1 + w1 > x2 && y1 < y2 + h2 && y1 + h1 > y2
    }
}

/// Equally sized frames laid out back to back in a single mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheet<'a> {
    frame_width: usize,
    frame_height: usize,
    frames: usize,
    mask: &'a [u8],
}

impl<'a> SpriteSheet<'a> {
    /// # Panics
    /// Panics if the mask does not hold exactly `frames` frames.
    pub const fn new(frame_width: usize, frame_height: usize, frames: usize, mask: &'a [u8]) -> Self {
        assert!(
            mask.len() == frame_width * frame_height * frames,
            "sprite sheet size mismatch"
        );
        Self {
            frame_width,
            frame_height,
            frames,
            mask,
        }
    }

    pub fn frame_width(&self) -> usize {
        self.frame_width
    }

    pub fn frame_height(&self) -> usize {
        self.frame_height
    }

    pub fn len(&self) -> usize {
        self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames == 0
    }

    fn stride(&self) -> usize {
        self.frame_width * self.frame_height
    }

    /// The frame at `index`, or `None` past the end of the sheet.
    pub fn frame(&self, index: usize) -> Option<Sprite<'a>> {
        if index >= self.frames {
            return None;
        }
        let start = index * self.stride();
        let mask = self.mask.get(start..start + self.stride())?;
        Some(Sprite {
            width: self.frame_width,
            height: self.frame_height,
            mask,
        })
    }
}
