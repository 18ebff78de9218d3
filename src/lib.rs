//! ILI9341 TFT Display Driver
//!
//! A driver for the ILI9341 240x320 TFT controller over 4-wire SPI.
//!
//! ## Features
//!
//! - `no_std` compatible (needs `alloc` for pixel batches)
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - RGB565 colors, with conversion from 24-bit RGB
//! - Rectangle, circle and bitmap drawing
//! - Bitmap font text rendering with line wrapping
//! - Four orientations
//! - Optional mutex wrapper for sharing a panel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ili9341::{Builder, Color565, Color888, Display, Interface, Orientation};
//!
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
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let backlight = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst, backlight);
//! let config = match Builder::new()
//!     .orientation(Orientation::Landscape)
//!     .backlight(true)
//!     .build()
//! {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = match Display::new(interface, config, &mut delay) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! let _ = display.clear_screen();
//! let _ = display.fill_rect(10, 109, 10, 59, Color565::RED);
//! let _ = display.draw_circle(160, 120, 30, Color888::SKY_BLUE);
//! ```

#![no_std]

extern crate alloc;

/// RGB565 and RGB888 color types
pub mod color;
/// ILI9341 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Bitmap fonts
pub mod font;
/// Hardware interface abstraction
pub mod interface;
/// Sharing a display between tasks
pub mod shared;
/// Text rendering
pub mod text;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod mock;

pub use color::{Color565, Color888, to_color565};
pub use config::{Builder, Config, Dimensions, Orientation, PANEL_HEIGHT, PANEL_WIDTH};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use font::{DescriptorFont, Font, Glyph};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface, SPI_FREQUENCY_HZ, SPI_MODE, TransferWidth};
pub use shared::SharedDisplay;
