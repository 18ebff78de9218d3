//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ILI9341 controller over 4-wire SPI.
//!
//! ## Hardware Requirements
//!
//! The ILI9341 requires:
//! - SPI bus (MOSI + SCK, CS handled by the [`SpiDevice`]), mode 0, up to
//!   [`SPI_FREQUENCY_HZ`], 8-bit frames
//! - 3 GPIO pins:
//!   - **DC**: Data/Command select (output)
//!   - **RST**: Reset (output, active low)
//!   - **BL**: Backlight enable (output, active high)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ili9341::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! // Create interface with SPI and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//!
//! // Send command
//! let _ = interface.send_command(0x01); // Software reset
//!
//! // Send pixel data
//! let _ = interface.send_data_words(&[0xF800, 0x07E0, 0x001F]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{MODE_0, Mode, SpiDevice};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Target SPI clock for the ILI9341 write cycle
pub const SPI_FREQUENCY_HZ: u32 = 40_000_000;

/// SPI mode expected by the controller
pub const SPI_MODE: Mode = MODE_0;

/// Minimum time the reset line is held low, in milliseconds
pub const RESET_PULSE_MS: u32 = 10;

/// Bus transfer width
///
/// Pixel primitives switch to [`TransferWidth::Sixteen`] while streaming color
/// words and always switch back to [`TransferWidth::Eight`] afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransferWidth {
    /// 8 bits per transfer unit (commands and parameters)
    #[default]
    Eight,
    /// 16 bits per transfer unit (pixel data)
    Sixteen,
}

/// Trait for hardware interface to ILI9341 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this trait
/// yourself for buses with native 16-bit frames, or to drive the panel through
/// a parallel port.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Send the command byte over the bus
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send parameter bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Send the bytes over the bus, unchanged
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send 16-bit data words to the controller
    ///
    /// Same framing as [`send_data`](Self::send_data). Each word reaches the
    /// panel most significant byte first, whatever the current
    /// [`TransferWidth`].
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data_words(&mut self, data: &[u16]) -> InterfaceResult<(), Self::Error>;

    /// Change the bus transfer width
    ///
    /// # Errors
    ///
    /// Returns an error if the bus rejects the new width.
    fn set_transfer_width(&mut self, width: TransferWidth) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST pin low
    /// 2. Wait at least [`RESET_PULSE_MS`]
    /// 3. Set RST pin high
    ///
    /// # Errors
    ///
    /// Returns an error if the reset pin cannot be driven.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Drive the backlight line
    ///
    /// # Errors
    ///
    /// Returns an error if the backlight pin cannot be driven.
    fn set_backlight(&mut self, on: bool) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Bytes staged per SPI write when serializing words
const WORD_CHUNK_BYTES: usize = 64;

/// Hardware interface implementation for ILI9341
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
/// The SPI device is configured by the host (see [`SPI_MODE`] and
/// [`SPI_FREQUENCY_HZ`]); words are serialized big-endian into 8-bit frames,
/// so the recorded [`TransferWidth`] never changes what reaches the panel.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BL` - Backlight pin implementing [`OutputPin`]
pub struct Interface<SPI, DC, RST, BL> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Backlight pin (active high)
    bl: BL,
    /// Current transfer width
    width: TransferWidth,
}

impl<SPI, DC, RST, BL> Interface<SPI, DC, RST, BL>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    /// * `bl` - Backlight pin (output, active high)
    pub fn new(spi: SPI, dc: DC, rst: RST, bl: BL) -> Self {
        Self {
            spi,
            dc,
            rst,
            bl,
            width: TransferWidth::Eight,
        }
    }

    /// Get the current transfer width
    pub fn transfer_width(&self) -> TransferWidth {
        self.width
    }

    /// Release the bus and pins
    pub fn release(self) -> (SPI, DC, RST, BL) {
        (self.spi, self.dc, self.rst, self.bl)
    }
}

impl<SPI, DC, RST, BL, PinErr> DisplayInterface for Interface<SPI, DC, RST, BL>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BL: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data_words(&mut self, data: &[u16]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        let mut staged = [0u8; WORD_CHUNK_BYTES];
        for words in data.chunks(WORD_CHUNK_BYTES / 2) {
            for (bytes, word) in staged.chunks_exact_mut(2).zip(words) {
                bytes.copy_from_slice(&word.to_be_bytes());
            }
            self.spi
                .write(&staged[..words.len() * 2])
                .map_err(InterfaceError::Spi)?;
        }
        Ok(())
    }

    fn set_transfer_width(&mut self, width: TransferWidth) -> InterfaceResult<(), Self::Error> {
        self.width = width;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> InterfaceResult<(), Self::Error> {
        if on {
            self.bl.set_high().map_err(InterfaceError::Pin)
        } else {
            self.bl.set_low().map_err(InterfaceError::Pin)
        }
    }
}
