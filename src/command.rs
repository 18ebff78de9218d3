//! ILI9341 command definitions
//!
//! This module defines the command bytes used to drive the ILI9341 TFT
//! controller. Commands are sent with the DC pin low and their parameters with
//! the DC pin high.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Set DC low (command mode)
//! 2. Send command byte
//! 3. Set DC high (data mode)
//! 4. Send parameter or pixel bytes (if any)
//!
//! ## Example
//!
//! ```rust,no_run
//! use ili9341::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! // 16 bits per pixel
//! let _ = interface.send_command(command::PIXEL_FORMAT_SET);
//! let _ = interface.send_data(&[command::PIXEL_FORMAT_16BPP]);
//! ```

// System control commands

/// Software reset command (0x01)
///
/// Resets registers to their defaults. Wait at least 5ms before the next
/// command and 120ms before sleep out.
pub const SOFTWARE_RESET: u8 = 0x01;

/// Enter sleep mode command (0x10)
pub const ENTER_SLEEP_MODE: u8 = 0x10;

/// Sleep out command (0x11)
///
/// Turns off sleep mode. Wait 120ms before the panel is stable.
pub const SLEEP_OUT: u8 = 0x11;

/// Display inversion off (0x20)
pub const DISPLAY_INVERSION_OFF: u8 = 0x20;

/// Display inversion on (0x21)
pub const DISPLAY_INVERSION_ON: u8 = 0x21;

/// Gamma set command (0x26)
///
/// Selects one of the predefined gamma curves.
/// Requires 1 byte: 0x01 = gamma curve 1 (G2.2)
pub const GAMMA_SET: u8 = 0x26;

/// Display off command (0x28)
///
/// Stops output from frame memory; the panel shows blank.
pub const DISPLAY_OFF: u8 = 0x28;

/// Display on command (0x29)
pub const DISPLAY_ON: u8 = 0x29;

// Addressing and memory commands

/// Column address set command (0x2A)
///
/// Defines the column range of the write window.
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const COLUMN_ADDRESS_SET: u8 = 0x2A;

/// Page address set command (0x2B)
///
/// Defines the row range of the write window.
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const PAGE_ADDRESS_SET: u8 = 0x2B;

/// Memory write command (0x2C)
///
/// Resets the write pointer to the top-left of the window. Following data is
/// pixel data, filled row-major.
pub const MEMORY_WRITE: u8 = 0x2C;

/// Memory access control command (0x36)
///
/// Controls scan direction and RGB/BGR order. Requires 1 byte:
/// - Bit 7 (MY): row address order
/// - Bit 6 (MX): column address order
/// - Bit 5 (MV): row/column exchange
/// - Bit 3 (BGR): BGR color filter panel
pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;

/// Pixel format set command (0x3A)
///
/// Requires 1 byte: see [`PIXEL_FORMAT_16BPP`]
pub const PIXEL_FORMAT_SET: u8 = 0x3A;

/// Pixel format parameter for 16 bits/pixel on both RGB and MCU interfaces
pub const PIXEL_FORMAT_16BPP: u8 = 0x55;

// Panel configuration commands (manufacturer command set)

/// Frame rate control, normal mode (0xB1)
///
/// Requires 2 bytes: [DIVA (bits 1:0), RTNA (bits 4:0)]
pub const FRAME_CONTROL_NORMAL: u8 = 0xB1;

/// Display function control command (0xB6)
///
/// Requires 4 bytes controlling scan mode, gate/source scan direction and
/// number of driving lines.
pub const DISPLAY_FUNCTION_CONTROL: u8 = 0xB6;

/// Entry mode set command (0xB7)
///
/// Requires 1 byte: low-voltage detection and gate output levels.
pub const ENTRY_MODE_SET: u8 = 0xB7;
