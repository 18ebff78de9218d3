//! Software model of the ILI9341 frame memory
//!
//! Interprets the command stream the way the controller does: CASET/PASET set
//! the window, RAMWR resets the write pointer to its top-left corner, and pixel
//! bytes fill it row by row.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType as PinErrorType, OutputPin};
use embedded_hal::spi::{ErrorType as SpiErrorType, Operation, SpiDevice};
use ili9341::{Builder, Display, DisplayInterface, Interface, Orientation, TransferWidth};

/// Side of the square model memory, large enough for either orientation
pub const STRIDE: usize = 320;

const CASET: u8 = 0x2A;
const PASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;

pub struct Panel {
    pub pixels: Vec<u16>,
    pub columns: (u16, u16),
    pub pages: (u16, u16),
    pub madctl: Option<u8>,
    pub commands: Vec<u8>,
    pub data_writes: usize,
    cursor: (u16, u16),
    command: Option<u8>,
    params: Vec<u8>,
    high_byte: Option<u8>,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            pixels: vec![0; STRIDE * STRIDE],
            columns: (0, 0),
            pages: (0, 0),
            madctl: None,
            commands: Vec::new(),
            data_writes: 0,
            cursor: (0, 0),
            command: None,
            params: Vec::new(),
            high_byte: None,
        }
    }
}

impl Panel {
    pub fn command(&mut self, command: u8) {
        self.commands.push(command);
        self.command = Some(command);
        self.params.clear();
        self.high_byte = None;
        if command == RAMWR {
            self.cursor = (self.columns.0, self.pages.0);
        }
    }

    pub fn data(&mut self, bytes: &[u8]) {
        self.data_writes += 1;
        match self.command {
            Some(CASET | PASET | MADCTL) => {
                self.params.extend_from_slice(bytes);
                self.latch_params();
            }
            Some(RAMWR) => {
                for &byte in bytes {
                    match self.high_byte.take() {
                        Some(high) => self.put(u16::from_be_bytes([high, byte])),
                        None => self.high_byte = Some(byte),
                    }
                }
            }
            _ => {}
        }
    }

    fn latch_params(&mut self) {
        let p = &self.params;
        match (self.command, p.len()) {
            (Some(CASET), 4) => {
                self.columns = (
                    u16::from_be_bytes([p[0], p[1]]),
                    u16::from_be_bytes([p[2], p[3]]),
                );
            }
            (Some(PASET), 4) => {
                self.pages = (
                    u16::from_be_bytes([p[0], p[1]]),
                    u16::from_be_bytes([p[2], p[3]]),
                );
            }
            (Some(MADCTL), 1) => self.madctl = Some(p[0]),
            _ => {}
        }
    }

    fn put(&mut self, word: u16) {
        let (x, y) = self.cursor;
        if usize::from(x) < STRIDE && usize::from(y) < STRIDE {
            self.pixels[usize::from(y) * STRIDE + usize::from(x)] = word;
        }
        self.cursor = if x >= self.columns.1 {
            (self.columns.0, y + 1)
        } else {
            (x + 1, y)
        };
    }

    pub fn pixel(&self, x: usize, y: usize) -> u16 {
        self.pixels[y * STRIDE + x]
    }

    pub fn window(&self) -> (u16, u16, u16, u16) {
        (self.columns.0, self.columns.1, self.pages.0, self.pages.1)
    }

    /// Forget everything but the frame memory and window
    pub fn clear_log(&mut self) {
        self.commands.clear();
        self.data_writes = 0;
    }
}

/// Interface that feeds the model directly
#[derive(Default)]
pub struct ModelInterface {
    pub panel: Panel,
    pub width: TransferWidth,
}

impl DisplayInterface for ModelInterface {
    type Error = Infallible;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.panel.command(command);
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.panel.data(data);
        Ok(())
    }

    fn send_data_words(&mut self, data: &[u16]) -> Result<(), Self::Error> {
        let bytes: Vec<u8> = data.iter().flat_map(|w| w.to_be_bytes()).collect();
        self.panel.data(&bytes);
        Ok(())
    }

    fn set_transfer_width(&mut self, width: TransferWidth) -> Result<(), Self::Error> {
        self.width = width;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_backlight(&mut self, _on: bool) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

pub fn model_display(orientation: Orientation) -> Display<ModelInterface> {
    let config = Builder::new().orientation(orientation).build().unwrap();
    Display::new(ModelInterface::default(), config, &mut NoDelay).unwrap()
}

/// SPI device that routes bytes into a shared model by the DC level
pub struct WireSpi {
    panel: Rc<RefCell<Panel>>,
    dc: Rc<Cell<bool>>,
}

impl SpiErrorType for WireSpi {
    type Error = Infallible;
}

impl SpiDevice for WireSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        let mut panel = self.panel.borrow_mut();
        for op in operations {
            if let Operation::Write(bytes) = op {
                if self.dc.get() {
                    panel.data(bytes);
                } else {
                    for &byte in bytes.iter() {
                        panel.command(byte);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Output pin; the DC pin shares its level with [`WireSpi`]
pub struct WirePin {
    level: Rc<Cell<bool>>,
}

impl PinErrorType for WirePin {
    type Error = Infallible;
}

impl OutputPin for WirePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        Ok(())
    }
}

pub type WireInterface = Interface<WireSpi, WirePin, WirePin, WirePin>;

/// Build an SPI interface wired to a fresh model
///
/// Returns the interface, the model and the backlight level.
pub fn wire() -> (WireInterface, Rc<RefCell<Panel>>, Rc<Cell<bool>>) {
    let panel = Rc::new(RefCell::new(Panel::default()));
    let dc = Rc::new(Cell::new(false));
    let backlight = Rc::new(Cell::new(false));
    let interface = Interface::new(
        WireSpi {
            panel: Rc::clone(&panel),
            dc: Rc::clone(&dc),
        },
        WirePin { level: dc },
        WirePin {
            level: Rc::new(Cell::new(true)),
        },
        WirePin {
            level: Rc::clone(&backlight),
        },
    );
    (interface, panel, backlight)
}

/// Handles kept by a test after the interface moves into the display
pub struct Model {
    pub panel: Rc<RefCell<Panel>>,
    pub light: Rc<Cell<bool>>,
}
