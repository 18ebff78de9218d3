//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during initialization and drawing
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use ili9341::{Builder, BuilderError};
//!
//! // RTNA must lie in 0x10..=0x1F
//! let result = Builder::new().frame_rate(0x00, 0x05).build();
//! assert!(matches!(result, Err(BuilderError::InvalidFrameRate { .. })));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    /// Returned from [`Display::new`](crate::Display::new) it means the panel never
    /// reached the ready state.
    Interface(I::Error),
    /// Window does not fit the current logical screen
    ///
    /// Windows must satisfy `left <= right < width` and `top <= bottom < height`.
    InvalidWindow {
        /// First column
        left: u16,
        /// Last column (inclusive)
        right: u16,
        /// First row
        top: u16,
        /// Last row (inclusive)
        bottom: u16,
    },
    /// Pixel coordinate outside the current logical screen
    OutOfBounds {
        /// X coordinate
        x: u16,
        /// Y coordinate
        y: u16,
    },
    /// Pixel buffer is too small for the requested blit
    BufferTooSmall {
        /// Required number of pixels
        required: usize,
        /// Provided number of pixels
        provided: usize,
    },
    /// Font has no glyph for a character
    MissingGlyph(char),
    /// The display is already locked by the caller
    ///
    /// Returned by [`SharedDisplay::lock`](crate::shared::SharedDisplay::lock)
    /// when called re-entrantly.
    Busy,
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::InvalidWindow {
                left,
                right,
                top,
                bottom,
            } => {
                write!(
                    f,
                    "Invalid window: columns {left}..={right}, rows {top}..={bottom}"
                )
            }
            Self::OutOfBounds { x, y } => write!(f, "Pixel out of bounds: x={x}, y={y}"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} pixels, provided {provided}"
                )
            }
            Self::MissingGlyph(c) => write!(f, "No glyph for {c:?}"),
            Self::Busy => write!(f, "Display is busy"),
        }
    }
}

// Written by hand so that `I` itself need not be `Debug`
impl<I: DisplayInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Self::InvalidWindow {
                left,
                right,
                top,
                bottom,
            } => f
                .debug_struct("InvalidWindow")
                .field("left", left)
                .field("right", right)
                .field("top", top)
                .field("bottom", bottom)
                .finish(),
            Self::OutOfBounds { x, y } => f
                .debug_struct("OutOfBounds")
                .field("x", x)
                .field("y", y)
                .finish(),
            Self::BufferTooSmall { required, provided } => f
                .debug_struct("BufferTooSmall")
                .field("required", required)
                .field("provided", provided)
                .finish(),
            Self::MissingGlyph(c) => f.debug_tuple("MissingGlyph").field(c).finish(),
            Self::Busy => f.write_str("Busy"),
        }
    }
}

impl<I: DisplayInterface> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Frame rate parameters out of range
    ///
    /// See [`Builder::frame_rate()`](crate::config::Builder::frame_rate) for constraints.
    InvalidFrameRate {
        /// Division ratio (DIVA) requested
        division: u8,
        /// Clocks per line (RTNA) requested
        clocks_per_line: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidFrameRate {
                division,
                clocks_per_line,
            } => write!(
                f,
                "Invalid frame rate: DIVA={division:#04x} (max 0x03), RTNA={clocks_per_line:#04x} (0x10..=0x1F)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
