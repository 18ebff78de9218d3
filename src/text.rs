//! Text rendering
//!
//! Glyphs are rasterized into a buffer of color words and written to the
//! panel as a single window, background included. Strings are laid out left to
//! right with a simple wrap at the right edge of the screen.

use alloc::vec::Vec;

use crate::color::Color565;
use crate::display::Display;
use crate::error::Error;
use crate::font::{Font, Glyph};
use crate::interface::DisplayInterface;

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Draw a string starting at `(x, y)`
    ///
    /// `'\n'` moves down by the height of the font's newline glyph and `'\r'`
    /// returns to `x`. A character that would cross the right edge of the
    /// screen wraps to `x` on the next line first. A space the font has no
    /// glyph for leaves a gap of [`Font::space_width`].
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingGlyph` for a character the font lacks and
    /// `Error::InvalidWindow` once text runs off the bottom of the screen.
    /// Characters before the failing one stay drawn.
    pub fn draw_string<F>(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: impl Into<Color565>,
        bg: impl Into<Color565>,
        font: &F,
    ) -> Result<(), Error<I>>
    where
        F: Font + ?Sized,
    {
        let (fg, bg) = (fg.into(), bg.into());
        let screen_width = self.width();
        let mut cur_x = x;
        let mut cur_y = y;

        for c in text.chars() {
            let glyph = match font.glyph(c) {
                Some(glyph) => glyph,
                None if c == ' ' => {
                    cur_x = cur_x.saturating_add(u16::from(font.space_width()));
                    continue;
                }
                None => return Err(Error::MissingGlyph(c)),
            };
            match c {
                '\n' => cur_y = cur_y.saturating_add(u16::from(glyph.height)),
                '\r' => cur_x = x,
                _ => {
                    if cur_x.saturating_add(u16::from(glyph.width)) > screen_width {
                        cur_x = x;
                        cur_y = cur_y.saturating_add(u16::from(glyph.height));
                    }
                    self.draw_char(cur_x, cur_y, fg, bg, &glyph)?;
                    cur_x = cur_x.saturating_add(glyph.advance());
                }
            }
        }
        Ok(())
    }

    /// Draw one glyph with its top-left corner at `(x, y)`
    ///
    /// Zero-sized glyphs draw nothing.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if the glyph does not fit on screen
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        fg: impl Into<Color565>,
        bg: impl Into<Color565>,
        glyph: &Glyph<'_>,
    ) -> Result<(), Error<I>> {
        if glyph.width == 0 || glyph.height == 0 {
            return Ok(());
        }
        let right = x.saturating_add(u16::from(glyph.width) - 1);
        let bottom = y.saturating_add(u16::from(glyph.height) - 1);
        self.check_window(x, right, y, bottom)?;

        let pixels = rasterize(glyph, fg.into(), bg.into());
        self.set_window(x, right, y, bottom)?;
        self.write_pixels(&pixels)
    }
}

/// Expand a glyph bitmap into `width * height` color words
///
/// Bits past the end of a short bitmap render as background.
pub(crate) fn rasterize(glyph: &Glyph<'_>, fg: Color565, bg: Color565) -> Vec<u16> {
    let (fg, bg) = (fg.into_raw(), bg.into_raw());
    let count = glyph.pixel_count();
    let mut pixels: Vec<u16> = glyph
        .bitmap
        .iter()
        .flat_map(|byte| (0..8).rev().map(move |bit| (byte >> bit) & 1 == 1))
        .take(count)
        .map(|set| if set { fg } else { bg })
        .collect();
    pixels.resize(count, bg);
    pixels
}
