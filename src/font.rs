//! Bitmap fonts
//!
//! Text is drawn from 1-bit glyph bitmaps. Glyph data is produced ahead of
//! time by a font converter and lives in static tables; the driver only reads it.
//!
//! ## Bitmap Format
//!
//! Bits run MSB-first through each byte and row-major through the glyph, with
//! no padding at the end of a row: pixel `i` is bit `7 - i % 8` of byte `i / 8`.
//! A set bit is drawn in the foreground color, a clear bit in the background.
//!
//! ## Example
//!
//! ```
//! use ili9341::font::{DescriptorFont, Font};
//!
//! // Two 4x2 glyphs for 'A' and 'B', one byte each
//! static BITMAPS: [u8; 2] = [0b0110_1001, 0b1110_1110];
//! static DESCRIPTORS: [(u8, u16); 2] = [(4, 0), (4, 1)];
//! let font = DescriptorFont::new(&BITMAPS, &DESCRIPTORS, 'A', 2, 1, 3);
//!
//! let glyph = font.glyph('B').unwrap();
//! assert_eq!((glyph.width, glyph.height, glyph.spacing), (4, 2, 1));
//! assert!(font.glyph('C').is_none());
//! ```

/// A single character bitmap plus layout metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph<'a> {
    /// Width in pixels
    pub width: u8,
    /// Height in pixels
    pub height: u8,
    /// Blank columns to leave after the glyph
    pub spacing: u8,
    /// Packed 1-bit pixels, see the module docs
    pub bitmap: &'a [u8],
}

impl<'a> Glyph<'a> {
    /// Create a glyph
    pub const fn new(width: u8, height: u8, spacing: u8, bitmap: &'a [u8]) -> Self {
        Self {
            width,
            height,
            spacing,
            bitmap,
        }
    }

    /// Number of pixels covered by the glyph
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Horizontal distance from this glyph to the next one
    pub fn advance(&self) -> u16 {
        self.width as u16 + self.spacing as u16
    }
}

/// Character to glyph lookup
pub trait Font {
    /// Width of an inter-word space in pixels
    fn space_width(&self) -> u8;

    /// Look up the glyph for `c`, or `None` if the font does not cover it
    fn glyph(&self, c: char) -> Option<Glyph<'_>>;
}

/// Font stored as a bitmap array plus one `(width, offset)` descriptor per character
///
/// This is the layout emitted by the usual LCD font converters: glyphs for the
/// contiguous range `first..` share one height, and each descriptor gives the
/// glyph width and its byte offset into `bitmaps`. Bits are packed as in the
/// module docs, so a glyph spans `ceil(width * height / 8)` bytes.
///
/// Control characters `'\n'` and `'\r'` map to zero-width glyphs of the font
/// height, and `' '` falls back to a blank glyph of
/// [`space_width`](Font::space_width) when the table does not cover it.
#[derive(Clone, Copy, Debug)]
pub struct DescriptorFont<'a> {
    bitmaps: &'a [u8],
    descriptors: &'a [(u8, u16)],
    first: char,
    height: u8,
    spacing: u8,
    space_width: u8,
}

/// Bitmap for synthesized blank glyphs; missing bits render as background
static BLANK: [u8; 0] = [];

impl<'a> DescriptorFont<'a> {
    /// Create a font
    ///
    /// # Arguments
    ///
    /// * `bitmaps` - Packed glyph bitmaps
    /// * `descriptors` - `(width, byte offset)` for each character from `first` on
    /// * `first` - First character covered by `descriptors`
    /// * `height` - Glyph height in pixels
    /// * `spacing` - Blank columns after each glyph
    /// * `space_width` - Width of `' '` when the table lacks it
    pub const fn new(
        bitmaps: &'a [u8],
        descriptors: &'a [(u8, u16)],
        first: char,
        height: u8,
        spacing: u8,
        space_width: u8,
    ) -> Self {
        Self {
            bitmaps,
            descriptors,
            first,
            height,
            spacing,
            space_width,
        }
    }

    fn blank(&self, width: u8, spacing: u8) -> Glyph<'_> {
        Glyph::new(width, self.height, spacing, &BLANK)
    }

    fn lookup(&self, c: char) -> Option<Glyph<'_>> {
        let index = (c as u32).checked_sub(self.first as u32)? as usize;
        let &(width, offset) = self.descriptors.get(index)?;
        let len = (width as usize * self.height as usize).div_ceil(8);
        let start = offset as usize;
        let bitmap = self.bitmaps.get(start..start + len)?;
        Some(Glyph::new(width, self.height, self.spacing, bitmap))
    }
}

impl Font for DescriptorFont<'_> {
    fn space_width(&self) -> u8 {
        self.space_width
    }

    fn glyph(&self, c: char) -> Option<Glyph<'_>> {
        match c {
            '\n' | '\r' => Some(self.blank(0, 0)),
            ' ' => self
                .lookup(c)
                .or_else(|| Some(self.blank(self.space_width, self.spacing))),
            _ => self.lookup(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static BITMAPS: [u8; 6] = [0xAA, 0x55, 0xF0, 0x0F, 0xFF, 0x81];
    // '0' is 4x2 (1 byte), '1' is 10x2 (20 bits, 3 bytes)
    static DESCRIPTORS: [(u8, u16); 2] = [(4, 0), (10, 2)];

    fn font() -> DescriptorFont<'static> {
        DescriptorFont::new(&BITMAPS, &DESCRIPTORS, '0', 2, 1, 5)
    }

    #[test]
    fn test_lookup_slices_bitmap() {
        let font = font();
        let zero = font.glyph('0').unwrap();
        assert_eq!(zero, Glyph::new(4, 2, 1, &[0xAA]));

        let one = font.glyph('1').unwrap();
        assert_eq!(one.width, 10);
        assert_eq!(one.bitmap, &[0xF0, 0x0F, 0xFF]);
    }

    #[test]
    fn test_missing_characters() {
        let font = font();
        assert!(font.glyph('/').is_none());
        assert!(font.glyph('2').is_none());
        assert!(font.glyph('A').is_none());
    }

    #[test]
    fn test_control_characters_use_font_height() {
        let font = font();
        for c in ['\n', '\r'] {
            let glyph = font.glyph(c).unwrap();
            assert_eq!(glyph.width, 0);
            assert_eq!(glyph.height, 2);
        }
    }

    #[test]
    fn test_space_falls_back_to_space_width() {
        let font = font();
        let space = font.glyph(' ').unwrap();
        assert_eq!(space.width, 5);
        assert_eq!(space.height, 2);
        assert_eq!(space.advance(), 6);
    }

    #[test]
    fn test_truncated_table_is_missing() {
        static SHORT: [u8; 1] = [0xFF];
        static DESC: [(u8, u16); 1] = [(8, 0)];
        let font = DescriptorFont::new(&SHORT, &DESC, 'x', 2, 0, 3);
        assert!(font.glyph('x').is_none());
    }
}
