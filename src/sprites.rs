//! Built-in sprite catalog.
//!
//! Every mask is `'static` constant data compiled into the binary.
//!
//! Masks are written as ASCII art (`#` opaque, anything else transparent), top
//! row first, and converted to 1-byte-per-pixel masks at compile time. A row
//! of the wrong length fails the build.

use crate::render::{Sprite, SpriteSheet};

const fn from_art<const N: usize>(width: usize, rows: &[&str]) -> [u8; N] {
    assert!(rows.len() * width == N, "art does not match mask size");
    let mut mask = [0u8; N];
    let mut y = 0;
    while y < rows.len() {
        let row = rows[y].as_bytes();
        assert!(row.len() == width, "art row has the wrong width");
        let mut x = 0;
        while x < width {
            mask[y * width + x] = (row[x] == b'#') as u8;
            x += 1;
        }
        y += 1;
    }
    mask
}

// =============================================================================
// Aliens
// =============================================================================

pub const ALIEN_FRAMES: usize = 2;

const ALIEN_A_MASK: [u8; 8 * 8 * ALIEN_FRAMES] = from_art(
    8,
    &[
        "...##...",
        "..####..",
        ".######.",
        "##.##.##",
        "########",
        ".#.##.#.",
        "#......#",
        ".#....#.",
        // frame 2
        "...##...",
        "..####..",
        ".######.",
        "##.##.##",
        "########",
        "..#..#..",
        ".#.##.#.",
        "#.#..#.#",
    ],
);

const ALIEN_B_MASK: [u8; 11 * 8 * ALIEN_FRAMES] = from_art(
    11,
    &[
        "..#.....#..",
        "...#...#...",
        "..#######..",
        ".##.###.##.",
        "###########",
        "#.#######.#",
        "#.#.....#.#",
        "...##.##...",
        // frame 2
        "..#.....#..",
        "#..#...#..#",
        "#.#######.#",
        "###.###.###",
        "###########",
        ".#########.",
        "..#.....#..",
        ".#.......#.",
    ],
);

const ALIEN_C_MASK: [u8; 12 * 8 * ALIEN_FRAMES] = from_art(
    12,
    &[
        "....####....",
        ".##########.",
        "############",
        "###..##..###",
        "############",
        "...##..##...",
        "..##.##.##..",
        "##........##",
        // frame 2
        "....####....",
        ".##########.",
        "############",
        "###..##..###",
        "############",
        "..###..###..",
        ".##..##..##.",
        "..##....##..",
    ],
);

/// Two-frame animation sheets for alien types A, B and C, in that order.
pub const ALIENS: [SpriteSheet<'static>; 3] = [
    SpriteSheet::new(8, 8, ALIEN_FRAMES, &ALIEN_A_MASK),
    SpriteSheet::new(11, 8, ALIEN_FRAMES, &ALIEN_B_MASK),
    SpriteSheet::new(12, 8, ALIEN_FRAMES, &ALIEN_C_MASK),
];

const ALIEN_DEATH_MASK: [u8; 13 * 7] = from_art(
    13,
    &[
        ".#..#...#..#.",
        "..#..#.#..#..",
        "...#.....#...",
        "##.........##",
        "...#.....#...",
        "..#..#.#..#..",
        ".#..#...#..#.",
    ],
);

pub const ALIEN_DEATH: Sprite<'static> = Sprite::new(13, 7, &ALIEN_DEATH_MASK);

// =============================================================================
// Player and bullets
// =============================================================================

const PLAYER_MASK: [u8; 11 * 7] = from_art(
    11,
    &[
        ".....#.....",
        "....###....",
        "....###....",
        ".#########.",
        "###########",
        "###########",
        "###########",
    ],
);

pub const PLAYER: Sprite<'static> = Sprite::new(11, 7, &PLAYER_MASK);

const PLAYER_BULLET_MASK: [u8; 3 * 3] = [1; 9];

pub const PLAYER_BULLET: Sprite<'static> = Sprite::new(3, 3, &PLAYER_BULLET_MASK);

const ALIEN_BULLET_MASK: [u8; 3 * 7 * 2] = from_art(
    3,
    &[
        ".#.", "#..", ".#.", "..#", ".#.", "#..", ".#.",
        // frame 2
        ".#.", "..#", ".#.", "#..", ".#.", "..#", ".#.",
    ],
);

pub const ALIEN_BULLET: SpriteSheet<'static> = SpriteSheet::new(3, 7, 2, &ALIEN_BULLET_MASK);

// =============================================================================
// Text
// =============================================================================

const GLYPH_WIDTH: usize = 5;
const GLYPH_HEIGHT: usize = 7;
/// `' '` through `` '`' ``.
const GLYPH_COUNT: usize = 65;
/// Index of `'0'` in the glyph sheet.
pub const DIGIT_GLYPH_OFFSET: usize = ('0' as usize) - (' ' as usize);

#[rustfmt::skip]
const GLYPH_ART: [[&str; GLYPH_HEIGHT]; GLYPH_COUNT] = [
    [".....", ".....", ".....", ".....", ".....", ".....", "....."], // ' '
    ["..#..", "..#..", "..#..", "..#..", "..#..", ".....", "..#.."], // !
    [".#.#.", ".#.#.", ".....", ".....", ".....", ".....", "....."], // "
    [".#.#.", ".#.#.", "#####", ".#.#.", "#####", ".#.#.", ".#.#."], // #
    ["..#..", ".####", "#.#..", ".###.", "..#.#", "####.", "..#.."], // $
    ["##...", "##..#", "...#.", "..#..", ".#...", "#..##", "...##"], // %
    [".##..", "#..#.", "#.#..", ".#...", "#.#.#", "#..#.", ".##.#"], // &
    ["..#..", "..#..", ".....", ".....", ".....", ".....", "....."], // '
    ["...#.", "..#..", ".#...", ".#...", ".#...", "..#..", "...#."], // (
    [".#...", "..#..", "...#.", "...#.", "...#.", "..#..", ".#..."], // )
    ["..#..", "#.#.#", ".###.", "..#..", ".###.", "#.#.#", "..#.."], // *
    [".....", "..#..", "..#..", "#####", "..#..", "..#..", "....."], // +
    [".....", ".....", ".....", ".....", "..#..", "..#..", ".#..."], // ,
    [".....", ".....", ".....", "#####", ".....", ".....", "....."], // -
    [".....", ".....", ".....", ".....", ".....", "..#..", "..#.."], // .
    [".....", "....#", "...#.", "..#..", ".#...", "#....", "....."], // /
    [".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."], // 0
    ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."], // 1
    [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"], // 2
    [".###.", "#...#", "....#", "..##.", "....#", "#...#", ".###."], // 3
    ["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."], // 4
    ["#####", "#....", "####.", "....#", "....#", "#...#", ".###."], // 5
    [".###.", "#....", "#....", "####.", "#...#", "#...#", ".###."], // 6
    ["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#..."], // 7
    [".###.", "#...#", "#...#", ".###.", "#...#", "#...#", ".###."], // 8
    [".###.", "#...#", "#...#", ".####", "....#", "....#", ".###."], // 9
    [".....", "..#..", "..#..", ".....", "..#..", "..#..", "....."], // :
    [".....", "..#..", "..#..", ".....", "..#..", "..#..", ".#..."], // ;
    ["....#", "...#.", "..#..", ".#...", "..#..", "...#.", "....#"], // <
    [".....", ".....", "#####", ".....", "#####", ".....", "....."], // =
    ["#....", ".#...", "..#..", "...#.", "..#..", ".#...", "#...."], // >
    [".###.", "#...#", "....#", "...#.", "..#..", ".....", "..#.."], // ?
    [".###.", "#...#", "#.###", "#.#.#", "#.###", "#....", ".###."], // @
    [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"], // A
    ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."], // B
    [".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."], // C
    ["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."], // D
    ["#####", "#....", "#....", "####.", "#....", "#....", "#####"], // E
    ["#####", "#....", "#....", "####.", "#....", "#....", "#...."], // F
    [".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".###."], // G
    ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"], // H
    [".###.", "..#..", "..#..", "..#..", "..#..", "..#..", ".###."], // I
    ["..###", "...#.", "...#.", "...#.", "...#.", "#..#.", ".##.."], // J
    ["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"], // K
    ["#....", "#....", "#....", "#....", "#....", "#....", "#####"], // L
    ["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#"], // M
    ["#...#", "#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#"], // N
    [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."], // O
    ["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."], // P
    [".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"], // Q
    ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"], // R
    [".####", "#....", "#....", ".###.", "....#", "....#", "####."], // S
    ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."], // T
    ["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."], // U
    ["#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", "..#.."], // V
    ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "##.##", "#...#"], // W
    ["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"], // X
    ["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#.."], // Y
    ["#####", "....#", "...#.", "..#..", ".#...", "#....", "#####"], // Z
    [".###.", ".#...", ".#...", ".#...", ".#...", ".#...", ".###."], // [
    [".....", "#....", ".#...", "..#..", "...#.", "....#", "....."], // \
    [".###.", "...#.", "...#.", "...#.", "...#.", "...#.", ".###."], // ]
    ["..#..", ".#.#.", "#...#", ".....", ".....", ".....", "....."], // ^
    [".....", ".....", ".....", ".....", ".....", ".....", "#####"], // _
    [".#...", "..#..", ".....", ".....", ".....", ".....", "....."], // `
];

const fn glyph_sheet() -> [u8; GLYPH_WIDTH * GLYPH_HEIGHT * GLYPH_COUNT] {
    let mut mask = [0u8; GLYPH_WIDTH * GLYPH_HEIGHT * GLYPH_COUNT];
    let mut glyph = 0;
    while glyph < GLYPH_COUNT {
        let cell: [u8; GLYPH_WIDTH * GLYPH_HEIGHT] = from_art(GLYPH_WIDTH, &GLYPH_ART[glyph]);
        let base = glyph * GLYPH_WIDTH * GLYPH_HEIGHT;
        let mut i = 0;
        while i < cell.len() {
            mask[base + i] = cell[i];
            i += 1;
        }
        glyph += 1;
    }
    mask
}

const GLYPH_MASK: [u8; GLYPH_WIDTH * GLYPH_HEIGHT * GLYPH_COUNT] = glyph_sheet();

/// Glyphs for ASCII `' '..='`'`, 5x7 each.
pub const GLYPHS: SpriteSheet<'static> =
    SpriteSheet::new(GLYPH_WIDTH, GLYPH_HEIGHT, GLYPH_COUNT, &GLYPH_MASK);

/// `count` frames of `stride` bytes starting at frame `first`.
const fn frames_of(mask: &'static [u8], first: usize, count: usize, stride: usize) -> &'static [u8] {
    mask.split_at(first * stride).1.split_at(count * stride).0
}

const DIGIT_MASK: &[u8] = frames_of(
    &GLYPH_MASK,
    DIGIT_GLYPH_OFFSET,
    10,
    GLYPH_WIDTH * GLYPH_HEIGHT,
);

/// The `'0'..='9'` region of [`GLYPHS`], sharing its mask.
pub const DIGITS: SpriteSheet<'static> = SpriteSheet::new(GLYPH_WIDTH, GLYPH_HEIGHT, 10, DIGIT_MASK);

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque_pixels(sprite: &Sprite<'_>) -> usize {
        (0..sprite.height())
            .flat_map(|y| (0..sprite.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| sprite.is_opaque(x, y))
            .count()
    }

    #[test]
    fn alien_sheets_have_catalog_dimensions() {
        let widths: Vec<usize> = ALIENS.iter().map(|sheet| sheet.frame_width()).collect();
        assert_eq!(widths, vec![8, 11, 12]);
        for sheet in &ALIENS {
            assert_eq!(sheet.frame_height(), 8);
            assert_eq!(sheet.len(), 2);
            assert_ne!(sheet.frame(0), sheet.frame(1));
        }
    }

    #[test]
    fn fixed_sprites_have_catalog_dimensions() {
        assert_eq!((ALIEN_DEATH.width(), ALIEN_DEATH.height()), (13, 7));
        assert_eq!((PLAYER.width(), PLAYER.height()), (11, 7));
        assert_eq!((PLAYER_BULLET.width(), PLAYER_BULLET.height()), (3, 3));
        assert_eq!(opaque_pixels(&PLAYER_BULLET), 9);
        assert_eq!((ALIEN_BULLET.frame_width(), ALIEN_BULLET.frame_height()), (3, 7));
        assert_eq!(ALIEN_BULLET.len(), 2);
    }

    #[test]
    fn alien_bullet_frames_zig_zag() {
        let a = ALIEN_BULLET.frame(0).unwrap();
        let b = ALIEN_BULLET.frame(1).unwrap();
        assert_eq!(opaque_pixels(&a), 7);
        assert_eq!(opaque_pixels(&b), 7);
        assert!(a.is_opaque(0, 1) && b.is_opaque(2, 1));
        for y in 0..7 {
            assert_eq!(a.is_opaque(1, y), b.is_opaque(1, y));
        }
    }

    #[test]
    fn glyph_sheet_covers_space_to_backtick() {
        assert_eq!(GLYPHS.len(), ('`' as usize) - (' ' as usize) + 1);
        assert_eq!(opaque_pixels(&GLYPHS.frame(0).unwrap()), 0);
        for index in 1..GLYPHS.len() {
            assert!(opaque_pixels(&GLYPHS.frame(index).unwrap()) > 0, "glyph {index} is blank");
        }
    }

    #[test]
    fn digit_region_starts_at_zero() {
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(DIGITS.frame(0), GLYPHS.frame(16));
        assert_eq!(DIGITS.frame(9), GLYPHS.frame(('9' as usize) - 32));
        for digit in 0..10 {
            assert_eq!(DIGITS.frame(digit), GLYPHS.frame(DIGIT_GLYPH_OFFSET + digit));
        }
    }
}
