//! Color types for RGB565 TFT panels
//!
//! The ILI9341 is configured for 16 bits per pixel, so every pixel on the wire
//! is a [`Color565`] word. [`Color888`] exists only as an input format and is
//! converted once, at the API boundary, with [`to_color565`].
//!
//! ## Bit Layout
//!
//! | Type | Bits | Layout |
//! |------|------|--------|
//! | [`Color565`] | 16 | `RRRRRGGG GGGBBBBB` |
//! | [`Color888`] | 24 | `RRRRRRRR GGGGGGGG BBBBBBBB` |
//!
//! ## Example
//!
//! ```
//! use ili9341::color::{to_color565, Color565, Color888};
//!
//! assert_eq!(to_color565(Color888::WHITE), Color565::WHITE);
//! assert_eq!(Color565::from(Color888::new(0x0000FF)).into_raw(), 0x001F);
//! ```

/// A 16-bit 5-6-5 RGB color, the panel's native pixel format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color565(u16);

impl Color565 {
    /// Black (0x0000)
    pub const BLACK: Self = Self(0x0000);
    /// Blue (0x001F)
    pub const BLUE: Self = Self(0x001F);
    /// Light blue (0xA53F)
    pub const LIGHT_BLUE: Self = Self(0xA53F);
    /// Dark blue (0x421C)
    pub const DARK_BLUE: Self = Self(0x421C);
    /// Green (0x07E0)
    pub const GREEN: Self = Self(0x07E0);
    /// Red (0xF800)
    pub const RED: Self = Self(0xF800);
    /// White (0xFFFF)
    pub const WHITE: Self = Self(0xFFFF);

    /// Wrap a raw 5-6-5 word
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Build a color from 8-bit channels, dropping the low bits of each
    ///
    /// ```
    /// use ili9341::color::Color565;
    ///
    /// assert_eq!(Color565::from_rgb(0xFF, 0x00, 0x00), Color565::RED);
    /// ```
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r >> 3) as u16) << 11) | (((g >> 2) as u16) << 5) | ((b >> 3) as u16))
    }

    /// The raw word as sent to the panel
    pub const fn into_raw(self) -> u16 {
        self.0
    }
}

/// A 24-bit 8-8-8 RGB color
///
/// Only the low 24 bits are significant; [`Color888::new`] masks the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color888(u32);

impl Color888 {
    /// Black (0x000000)
    pub const BLACK: Self = Self(0x00_0000);
    /// Blue (0x0000FF)
    pub const BLUE: Self = Self(0x00_00FF);
    /// Sky blue (0x00AEEF)
    pub const SKY_BLUE: Self = Self(0x00_AEEF);
    /// Light blue (0xA5A5FF)
    pub const LIGHT_BLUE: Self = Self(0xA5_A5FF);
    /// Dark blue (0x4342E6)
    pub const DARK_BLUE: Self = Self(0x43_42E6);
    /// Green (0x00FF00)
    pub const GREEN: Self = Self(0x00_FF00);
    /// Red (0xFF0000)
    pub const RED: Self = Self(0xFF_0000);
    /// White (0xFFFFFF)
    pub const WHITE: Self = Self(0xFF_FFFF);

    /// Wrap a `0xRRGGBB` value
    pub const fn new(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    /// The `0xRRGGBB` value
    pub const fn into_raw(self) -> u32 {
        self.0
    }

    /// Red channel
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel
    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

/// Convert a 24-bit color to the panel's 16-bit encoding
///
/// Keeps the top 5 bits of red, 6 of green and 5 of blue.
pub const fn to_color565(color: Color888) -> Color565 {
    Color565::from_rgb(color.r(), color.g(), color.b())
}

impl From<Color888> for Color565 {
    fn from(color: Color888) -> Self {
        to_color565(color)
    }
}

impl From<Color565> for u16 {
    fn from(color: Color565) -> Self {
        color.into_raw()
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color565 {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::IntoStorage;
        Self(color.into_storage())
    }
}

#[cfg(feature = "graphics")]
impl From<Color565> for embedded_graphics_core::pixelcolor::Rgb565 {
    fn from(color: Color565) -> Self {
        use embedded_graphics_core::pixelcolor::raw::RawU16;
        Self::from(RawU16::new(color.0))
    }
}
