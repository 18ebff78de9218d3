//! Graphics support via embedded-graphics
//!
//! [`Display`] implements the [`DrawTarget`] trait from the embedded-graphics
//! ecosystem directly. There is no frame buffer: every primitive is written to
//! the panel as it is drawn.
//!
//! - Individual pixels go through [`Display::draw_pixel`]; pixels off screen are
//!   skipped.
//! - Solid fills are clipped to the screen and sent with [`Display::fill_rect`].
//! - Contiguous fills that fit on screen (images, for example) are sent as a
//!   single [`Display::flush`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # use ili9341::{Builder, Display, Interface};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! # let config = match Builder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let mut display = match Display::new(interface, config, &mut MockDelay) {
//! #     Ok(display) => display,
//! #     Err(_) => return,
//! # };
//! let _ = display.clear(Rgb565::BLACK);
//!
//! // Draw shapes
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::BLUE))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 2))
//!     .draw(&mut display);
//!
//! // Draw text
//! let _ = Text::new(
//!     "Hello, ILI9341!",
//!     Point::new(10, 100),
//!     MonoTextStyle::new(&FONT_6X10, Rgb565::GREEN),
//! )
//! .draw(&mut display);
//! ```

use alloc::vec::Vec;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions as _, OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    prelude::Pixel,
    primitives::{PointsIter, Rectangle},
};

use crate::color::Color565;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                continue;
            };
            if !self.dimensions().contains(x, y) {
                continue;
            }
            self.draw_pixel(x, y, color)?;
        }
        Ok(())
    }

    fn fill_contiguous<Iter>(&mut self, area: &Rectangle, colors: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Self::Color>,
    {
        if area.intersection(&self.bounding_box()) != *area {
            // draw_iter drops the pixels that fall off screen
            return self.draw_iter(
                area.points()
                    .zip(colors)
                    .map(|(point, color)| Pixel(point, color)),
            );
        }
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }

        let pixels: Vec<u16> = colors
            .into_iter()
            .take(area.size.width as usize * area.size.height as usize)
            .map(|color| Color565::from(color).into_raw())
            .collect();
        self.flush(
            area.top_left.x,
            area.top_left.y,
            area.size.width as i32,
            area.size.height as i32,
            &pixels,
        )
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let drawable = area.intersection(&self.bounding_box());
        let Some(bottom_right) = drawable.bottom_right() else {
            return Ok(());
        };
        // Clipped to the screen, so every corner fits in u16
        self.fill_rect(
            drawable.top_left.x as u16,
            bottom_right.x as u16,
            drawable.top_left.y as u16,
            bottom_right.y as u16,
            color,
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(color)
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(u32::from(dims.width), u32::from(dims.height))
    }
}
