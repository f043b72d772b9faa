//! Bitmap text blitter for overlays
//!
//! 8x8 glyphs from `font8x8`, scaled up by an integer factor.

use font8x8::{BASIC_FONTS, UnicodeFonts};

use super::canvas::Canvas;

const GLYPH_SIZE: i32 = 8;

/// Draw a single line of text with its top-left corner at (x, y).
/// Characters without a glyph advance the cursor and draw nothing.
pub fn draw_text(canvas: &mut Canvas, x: i32, y: i32, text: &str, scale: u32, color: [u8; 3]) {
    let scale = scale.max(1) as i32;
    let mut pen_x = x;
    for ch in text.chars() {
        if let Some(glyph) = BASIC_FONTS.get(ch) {
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..GLYPH_SIZE {
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    let px = pen_x + col * scale;
                    let py = y + row as i32 * scale;
                    for sy in 0..scale {
                        for sx in 0..scale {
                            canvas.put_pixel(px + sx, py + sy, color);
                        }
                    }
                }
            }
        }
        pen_x += GLYPH_SIZE * scale;
    }
}
