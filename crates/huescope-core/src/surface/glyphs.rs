//! 5x9 bitmap glyphs for graticule labels.
//!
//! Rows 0..7 sit on the baseline, rows 7..9 are descenders. Each row is
//! a 5-bit mask with the leftmost column in bit 4.

/// Glyph cell width in unscaled pixels.
pub(crate) const GLYPH_WIDTH: u32 = 5;
/// Rows above the baseline.
pub(crate) const GLYPH_ASCENT: u32 = 7;
/// Horizontal advance per character.
pub(crate) const GLYPH_ADVANCE: u32 = 6;

type Glyph = [u8; 9];

#[rustfmt::skip]
const UPPER_B: Glyph = [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110, 0, 0];
#[rustfmt::skip]
const UPPER_C: Glyph = [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110, 0, 0];
#[rustfmt::skip]
const UPPER_G: Glyph = [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111, 0, 0];
#[rustfmt::skip]
const UPPER_M: Glyph = [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001, 0, 0];
#[rustfmt::skip]
const UPPER_R: Glyph = [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001, 0, 0];
#[rustfmt::skip]
const UPPER_Y: Glyph = [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100, 0, 0];
#[rustfmt::skip]
const LOWER_G: Glyph = [0, 0, 0b01111, 0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110];
#[rustfmt::skip]
const LOWER_L: Glyph = [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110, 0, 0];
#[rustfmt::skip]
const LOWER_Y: Glyph = [0, 0, 0b10001, 0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110];

/// Bitmap for `ch`, or `None` for characters outside the label set
/// (drawn as blank space).
pub(crate) fn glyph(ch: char) -> Option<&'static Glyph> {
    match ch {
        'B' => Some(&UPPER_B),
        'C' => Some(&UPPER_C),
        'G' => Some(&UPPER_G),
        'M' => Some(&UPPER_M),
        'R' => Some(&UPPER_R),
        'Y' => Some(&UPPER_Y),
        'g' => Some(&LOWER_G),
        'l' => Some(&LOWER_L),
        'y' => Some(&LOWER_Y),
        _ => None,
    }
}
