//! Bitmap Font Resource
//!
//! Procedural text rendering using a 5x7 bitmap font drawn with SDL2
//! rectangles. A `BitmapFont` is the "font resource" buttons resolve from
//! the [`crate::assets::FontRegistry`] at construction time; it knows how to
//! measure a string (for label centering) and how to draw it.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Glyph cell width in font pixels (5 columns + 1 spacing column).
const GLYPH_ADVANCE: u32 = 6;

/// Glyph cell height in font pixels (7 rows).
const GLYPH_HEIGHT: u32 = 7;

/// A 5x7 bitmap font at a fixed integer scale.
///
/// The glyph shapes are shared static data; a `BitmapFont` value is just the
/// scale applied to them, so it is cheap to clone into each widget that
/// needs one.
///
/// # Example
///
/// ```rust
/// let font = BitmapFont::new(2);
/// let w = font.text_width("PLAY");          // pixels, for centering
/// font.draw_text(&mut canvas, "PLAY", 100, 50, Color::WHITE)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl BitmapFont {
    /// Creates a font at the given scale (1 = 5x7 pixel glyphs, 2 = 10x14,
    /// and so on).
    pub fn new(scale: u32) -> Self {
        BitmapFont { scale: scale.max(1) }
    }

    /// The horizontal advance of one glyph cell, in screen pixels.
    pub fn char_width(&self) -> u32 {
        GLYPH_ADVANCE * self.scale
    }

    /// The glyph height, in screen pixels.
    pub fn char_height(&self) -> u32 {
        GLYPH_HEIGHT * self.scale
    }

    /// Measures the rendered width of `text` in screen pixels.
    ///
    /// Every glyph cell has the same advance, so this is exact for any
    /// string, including unknown characters (drawn as a full block).
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * self.char_width()
    }

    /// Draws `text` at the given top-left position.
    ///
    /// Characters are case-insensitive; unknown characters render as a full
    /// block. Returns `Err(String)` if an SDL2 draw call fails.
    pub fn draw_text(
        &self,
        canvas: &mut Canvas<Window>,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
    ) -> Result<(), String> {
        canvas.set_draw_color(color);

        let pixel_size = self.scale as i32;

        for (i, c) in text.chars().enumerate() {
            let char_x = x + i as i32 * self.char_width() as i32;
            let pattern = glyph(c);

            for (row, &pattern_row) in pattern.iter().enumerate() {
                for col in 0..5 {
                    if (pattern_row >> (4 - col)) & 1 == 1 {
                        canvas.fill_rect(Rect::new(
                            char_x + (col * pixel_size),
                            y + (row as i32 * pixel_size),
                            self.scale,
                            self.scale,
                        ))?;
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self::new(2)
    }
}

/// 5x7 bitmap pattern for one character (1 = pixel on, 0 = pixel off).
fn glyph(c: char) -> &'static [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => &[0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => &[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => &[0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => &[0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => &[0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => &[0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '<' => &[0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => &[0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '-' => &[0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => &[0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '!' => &[0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '(' => &[0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => &[0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ' ' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => &[0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111], // Full block for unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_metrics_scale_with_font() {
        let font = BitmapFont::new(1);
        assert_eq!(font.char_width(), 6);
        assert_eq!(font.char_height(), 7);

        let font = BitmapFont::new(3);
        assert_eq!(font.char_width(), 18);
        assert_eq!(font.char_height(), 21);
    }

    #[test]
    fn test_text_width() {
        let font = BitmapFont::new(2);
        assert_eq!(font.text_width(""), 0);
        assert_eq!(font.text_width("PLAY"), 4 * 12);
        // Unknown characters still occupy a full cell
        assert_eq!(font.text_width("@@"), 2 * 12);
    }

    #[test]
    fn test_zero_scale_clamps_to_one() {
        let font = BitmapFont::new(0);
        assert_eq!(font.char_width(), 6);
    }

    #[test]
    fn test_glyph_lookup_is_case_insensitive() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }
}
