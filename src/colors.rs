//! Color constants in RGBA8888 format (`0xRRGGBBAA`).

/// Pack an opaque color the way the streaming texture expects it.
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | 0xFF
}

pub const BACKGROUND: u32 = rgb(0, 128, 0);
pub const FOREGROUND: u32 = rgb(128, 0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_packs_red_in_the_high_byte() {
        assert_eq!(rgb(0x12, 0x34, 0x56), 0x123456FF);
        assert_eq!(BACKGROUND, 0x008000FF);
    }
}
