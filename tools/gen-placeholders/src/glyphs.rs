//! Built-in 5x7 bitmap glyphs for image labels
//!
//! Labels are rasterized from this table so no font file is needed at
//! generation time. Each glyph is 7 rows of 5 bits, MSB = leftmost column.
//! Glyphs are scaled by an integer factor derived from the requested font
//! size and cropped to the pixels that are actually lit, so callers center
//! on measured extents rather than nominal cell sizes.

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance in cells (glyph + 1 column spacing)
const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;
/// Font size units per cell (7 rows + 1 row of leading)
const SIZE_PER_CELL: u32 = GLYPH_HEIGHT + 1;

const FALLBACK: [u8; 7] = [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04];

fn glyph_rows(c: char) -> [u8; 7] {
    match c {
        ' ' => [0x00; 7],
        '?' => FALLBACK,

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

        'a' => [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F],
        'b' => [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E],
        'c' => [0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E],
        'd' => [0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F],
        'e' => [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E],
        'f' => [0x06, 0x09, 0x08, 0x1C, 0x08, 0x08, 0x08],
        'g' => [0x00, 0x0F, 0x11, 0x11, 0x0F, 0x01, 0x0E],
        'h' => [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11],
        'i' => [0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E],
        'j' => [0x02, 0x00, 0x06, 0x02, 0x02, 0x12, 0x0C],
        'k' => [0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12],
        'l' => [0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'm' => [0x00, 0x00, 0x1A, 0x15, 0x15, 0x11, 0x11],
        'n' => [0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11],
        'o' => [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E],
        'p' => [0x00, 0x00, 0x1E, 0x11, 0x1E, 0x10, 0x10],
        'q' => [0x00, 0x00, 0x0D, 0x13, 0x0F, 0x01, 0x01],
        'r' => [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10],
        's' => [0x00, 0x00, 0x0E, 0x10, 0x0E, 0x01, 0x1E],
        't' => [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06],
        'u' => [0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D],
        'v' => [0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'w' => [0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0A],
        'x' => [0x00, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11],
        'y' => [0x00, 0x00, 0x11, 0x11, 0x0F, 0x01, 0x0E],
        'z' => [0x00, 0x00, 0x1F, 0x02, 0x04, 0x08, 0x1F],

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

        _ => FALLBACK,
    }
}

/// Integer pixel scale for a given font size (never below 1)
pub fn scale_for_size(font_size: u32) -> u32 {
    (font_size / SIZE_PER_CELL).max(1)
}

/// Rasterized label, cropped to its lit pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelBitmap {
    pub width: u32,
    pub height: u32,
    /// Row-major coverage, `width * height` entries
    pub pixels: Vec<bool>,
}

impl LabelBitmap {
    #[inline]
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Iterate lit pixel coordinates relative to the bitmap's top-left
    pub fn lit(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.is_set(x, y))
    }
}

/// Rasterize `label` at `font_size` and crop to the lit bounding box.
///
/// Returns `None` if no pixel would be lit (empty or all-space labels).
pub fn rasterize_label(label: &str, font_size: u32) -> Option<LabelBitmap> {
    let scale = scale_for_size(font_size);
    let chars: Vec<char> = label.chars().collect();
    if chars.is_empty() {
        return None;
    }

    // Full layout in cell units
    let cells_w = chars.len() as u32 * GLYPH_ADVANCE;
    let lit_cell = |cx: u32, cy: u32| -> bool {
        let (index, col) = ((cx / GLYPH_ADVANCE) as usize, cx % GLYPH_ADVANCE);
        if col >= GLYPH_WIDTH {
            return false;
        }
        let row = glyph_rows(chars[index])[cy as usize];
        row & (1 << (GLYPH_WIDTH - 1 - col)) != 0
    };

    // Measure the lit extents
    let mut min = (u32::MAX, u32::MAX);
    let mut max = (0u32, 0u32);
    for cy in 0..GLYPH_HEIGHT {
        for cx in 0..cells_w {
            if lit_cell(cx, cy) {
                min = (min.0.min(cx), min.1.min(cy));
                max = (max.0.max(cx), max.1.max(cy));
            }
        }
    }
    if min.0 == u32::MAX {
        return None;
    }

    let cols = max.0 - min.0 + 1;
    let rows = max.1 - min.1 + 1;
    let width = cols * scale;
    let height = rows * scale;

    let mut pixels = vec![false; (width * height) as usize];
    for y in 0..height {
        for x in 0..width {
            pixels[(y * width + x) as usize] = lit_cell(min.0 + x / scale, min.1 + y / scale);
        }
    }

    Some(LabelBitmap {
        width,
        height,
        pixels,
    })
}
