//! 5x7 bitmap font for score labels

/// Glyph rows, top to bottom. Bit 4 is the leftmost column.
type Glyph = [u8; 7];

const GLYPH_COLUMNS: u32 = 5;
const GLYPH_ROWS: u32 = 7;
/// Columns per character including the gap
const ADVANCE_COLUMNS: u32 = 6;

fn glyph(c: char) -> Option<Glyph> {
    let rows = match c.to_ascii_uppercase() {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        _ => return None,
    };
    Some(rows)
}

/// A horizontal run of lit pixels, in screen units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Bitmap font handle. `pixel` is the on-screen size of one font pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub pixel: f32,
}

impl Font {
    /// Roughly the size of a 7x13 terminal font at the reference canvas
    pub const BASIC: Font = Font { pixel: 2.0 };

    /// Basic font scaled relative to the reference canvas height
    pub fn scaled_to(height: f32) -> Self {
        Font {
            pixel: Self::BASIC.pixel * height / crate::consts::SCREEN_HEIGHT as f32,
        }
    }

    /// Distance between the baseline and the top of a glyph
    pub fn ascent(&self) -> f32 {
        GLYPH_ROWS as f32 * self.pixel
    }

    pub fn advance(&self) -> f32 {
        ADVANCE_COLUMNS as f32 * self.pixel
    }

    /// Lit pixel runs for `text` with its baseline at `y`.
    ///
    /// Characters without a glyph render as blanks.
    pub fn spans(&self, text: &str, x: f32, y: f32) -> Vec<Span> {
        let mut spans = Vec::new();
        let top = y - self.ascent();

        for (i, c) in text.chars().enumerate() {
            let Some(rows) = glyph(c) else { continue };
            let origin_x = x + i as f32 * self.advance();

            for (row, bits) in rows.iter().enumerate() {
                let row_y = top + row as f32 * self.pixel;
                let mut col = 0;
                while col < GLYPH_COLUMNS {
                    if !lit(*bits, col) {
                        col += 1;
                        continue;
                    }
                    let start = col;
                    while col < GLYPH_COLUMNS && lit(*bits, col) {
                        col += 1;
                    }
                    spans.push(Span {
                        x: origin_x + start as f32 * self.pixel,
                        y: row_y,
                        width: (col - start) as f32 * self.pixel,
                        height: self.pixel,
                    });
                }
            }
        }

        spans
    }
}

fn lit(bits: u8, col: u32) -> bool {
    bits & (1 << (GLYPH_COLUMNS - 1 - col)) != 0
}
