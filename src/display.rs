//! Core display operations

use alloc::vec;
use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::color::Color565;
use crate::command::{
    COLUMN_ADDRESS_SET, DISPLAY_FUNCTION_CONTROL, DISPLAY_INVERSION_OFF, DISPLAY_INVERSION_ON,
    DISPLAY_OFF, DISPLAY_ON, ENTER_SLEEP_MODE, ENTRY_MODE_SET, FRAME_CONTROL_NORMAL, GAMMA_SET,
    MEMORY_ACCESS_CONTROL, MEMORY_WRITE, PAGE_ADDRESS_SET, PIXEL_FORMAT_16BPP, PIXEL_FORMAT_SET,
    SLEEP_OUT, SOFTWARE_RESET,
};
use crate::config::{Config, Dimensions, Orientation};
use crate::error::Error;
use crate::interface::{DisplayInterface, TransferWidth};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Wait after software reset before the next command
const SOFTWARE_RESET_DELAY_MS: u32 = 10;
/// Wait after sleep out before the panel is stable
const SLEEP_OUT_DELAY_MS: u32 = 120;
/// Wait after display on
const DISPLAY_ON_DELAY_MS: u32 = 100;
/// Wait after entering sleep before the next command
const SLEEP_IN_DELAY_MS: u32 = 5;

/// Column range programmed during initialization (0..=239)
const INIT_COLUMNS: [u8; 4] = [0x00, 0x00, 0x00, 0xEF];
/// Page range programmed during initialization (0..=319)
const INIT_PAGES: [u8; 4] = [0x00, 0x00, 0x01, 0x3F];

/// Steps of the power-up sequence, run in declaration order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InitStage {
    HardwareReset,
    SoftwareReset,
    DisplayOff,
    Orientation,
    PixelFormat,
    Registers,
    SleepOut,
    DisplayOn,
    MemoryWrite,
    Ready,
}

impl InitStage {
    fn next(self) -> Self {
        match self {
            Self::HardwareReset => Self::SoftwareReset,
            Self::SoftwareReset => Self::DisplayOff,
            Self::DisplayOff => Self::Orientation,
            Self::Orientation => Self::PixelFormat,
            Self::PixelFormat => Self::Registers,
            Self::Registers => Self::SleepOut,
            Self::SleepOut => Self::DisplayOn,
            Self::DisplayOn => Self::MemoryWrite,
            Self::MemoryWrite | Self::Ready => Self::Ready,
        }
    }
}

/// Core display driver for ILI9341
///
/// A `Display` only exists once the panel has been initialized: [`Display::new`]
/// runs the full power-up sequence and fails if any step of it fails.
///
/// Every operation takes `&mut self`, so one caller at a time owns the bus.
/// Use [`SharedDisplay`](crate::shared::SharedDisplay) to share a panel.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Current orientation
    orientation: Orientation,
    /// Logical dimensions for `orientation`
    dimensions: Dimensions,
    /// Whether the backlight is on
    backlight_on: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display and initialize the panel
    ///
    /// Runs hardware reset, software reset and the register sequence, then
    /// turns the display on and drives the backlight to `config.backlight`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if any transfer fails. The panel is left in
    /// an unknown state and must be initialized again from scratch.
    pub fn new<D: DelayNs>(interface: I, config: Config, delay: &mut D) -> Result<Self, Error<I>> {
        let orientation = config.orientation;
        let mut display = Self {
            interface,
            config,
            orientation,
            dimensions: orientation.dimensions(),
            backlight_on: false,
        };

        let mut stage = InitStage::HardwareReset;
        while stage != InitStage::Ready {
            log::debug!("ili9341: init {:?}", stage);
            if let Err(e) = display.run_stage(stage, delay) {
                log::error!("ili9341: initialization failed at {:?}", stage);
                return Err(e);
            }
            stage = stage.next();
        }

        let backlight = display.config.backlight;
        display.set_backlight(backlight)?;
        Ok(display)
    }

    fn run_stage<D: DelayNs>(&mut self, stage: InitStage, delay: &mut D) -> DisplayResult<I> {
        match stage {
            InitStage::HardwareReset => self.interface.reset(delay).map_err(Error::Interface)?,
            InitStage::SoftwareReset => {
                self.send_command(SOFTWARE_RESET)?;
                delay.delay_ms(SOFTWARE_RESET_DELAY_MS);
            }
            InitStage::DisplayOff => self.send_command(DISPLAY_OFF)?,
            InitStage::Orientation => self.set_orientation(self.config.orientation)?,
            InitStage::PixelFormat => {
                self.send_command(PIXEL_FORMAT_SET)?;
                self.send_data(&[PIXEL_FORMAT_16BPP])?;
            }
            InitStage::Registers => self.write_registers()?,
            InitStage::SleepOut => {
                self.send_command(SLEEP_OUT)?;
                delay.delay_ms(SLEEP_OUT_DELAY_MS);
            }
            InitStage::DisplayOn => {
                self.send_command(DISPLAY_ON)?;
                delay.delay_ms(DISPLAY_ON_DELAY_MS);
            }
            InitStage::MemoryWrite => self.send_command(MEMORY_WRITE)?,
            InitStage::Ready => {}
        }
        Ok(())
    }

    fn write_registers(&mut self) -> DisplayResult<I> {
        let frame_rate = self.config.frame_rate;
        self.send_command(FRAME_CONTROL_NORMAL)?;
        self.send_data(&frame_rate)?;

        self.send_command(GAMMA_SET)?;
        self.send_data(&[self.config.gamma_curve])?;

        self.send_command(COLUMN_ADDRESS_SET)?;
        self.send_data(&INIT_COLUMNS)?;
        self.send_command(PAGE_ADDRESS_SET)?;
        self.send_data(&INIT_PAGES)?;

        self.send_command(ENTRY_MODE_SET)?;
        self.send_data(&[self.config.entry_mode])?;

        let function_control = self.config.display_function_control;
        self.send_command(DISPLAY_FUNCTION_CONTROL)?;
        self.send_data(&function_control)
    }

    /// Set the address window and start a memory write
    ///
    /// Coordinates are inclusive. No range checking is done here; the
    /// controller ignores writes that fall outside its memory.
    pub fn set_window(&mut self, left: u16, right: u16, top: u16, bottom: u16) -> DisplayResult<I> {
        log::trace!("ili9341: window x={left}..={right} y={top}..={bottom}");
        let [l_hi, l_lo] = left.to_be_bytes();
        let [r_hi, r_lo] = right.to_be_bytes();
        self.send_command(COLUMN_ADDRESS_SET)?;
        self.send_data(&[l_hi, l_lo, r_hi, r_lo])?;

        let [t_hi, t_lo] = top.to_be_bytes();
        let [b_hi, b_lo] = bottom.to_be_bytes();
        self.send_command(PAGE_ADDRESS_SET)?;
        self.send_data(&[t_hi, t_lo, b_hi, b_lo])?;

        self.send_command(MEMORY_WRITE)
    }

    /// Change orientation
    ///
    /// Swaps width and height for landscape modes and resets the address
    /// window to the whole screen.
    pub fn set_orientation(&mut self, orientation: Orientation) -> DisplayResult<I> {
        log::debug!("ili9341: orientation {:?}", orientation);
        self.orientation = orientation;
        self.dimensions = orientation.dimensions();

        self.send_command(MEMORY_ACCESS_CONTROL)?;
        self.send_data(&[orientation.register()])?;

        let Dimensions { width, height } = self.dimensions;
        self.set_window(0, width - 1, 0, height - 1)
    }

    /// Turn the backlight on or off
    pub fn set_backlight(&mut self, on: bool) -> DisplayResult<I> {
        log::debug!("ili9341: backlight {}", if on { "on" } else { "off" });
        self.interface.set_backlight(on).map_err(Error::Interface)?;
        self.backlight_on = on;
        Ok(())
    }

    /// Whether the backlight is on
    pub fn backlight(&self) -> bool {
        self.backlight_on
    }

    /// Enable or disable color inversion
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        if inverted {
            self.send_command(DISPLAY_INVERSION_ON)
        } else {
            self.send_command(DISPLAY_INVERSION_OFF)
        }
    }

    /// Enter sleep mode
    ///
    /// Frame memory is retained. Call [`wake`](Self::wake) before drawing again.
    pub fn sleep<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("ili9341: sleep");
        self.send_command(ENTER_SLEEP_MODE)?;
        delay.delay_ms(SLEEP_IN_DELAY_MS);
        Ok(())
    }

    /// Leave sleep mode
    pub fn wake<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("ili9341: wake");
        self.send_command(SLEEP_OUT)?;
        delay.delay_ms(SLEEP_OUT_DELAY_MS);
        Ok(())
    }

    /// Draw a single pixel
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if `(x, y)` is off screen
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: impl Into<Color565>) -> DisplayResult<I> {
        if !self.dimensions.contains(x, y) {
            return Err(Error::OutOfBounds { x, y });
        }
        self.set_window(x, x, y, y)?;
        self.write_pixels(&[color.into().into_raw()])
    }

    /// Fill a rectangle with one color
    ///
    /// Bounds are inclusive.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if the rectangle is empty or leaves the screen
    pub fn fill_rect(
        &mut self,
        left: u16,
        right: u16,
        top: u16,
        bottom: u16,
        color: impl Into<Color565>,
    ) -> DisplayResult<I> {
        self.check_window(left, right, top, bottom)?;
        let color = color.into().into_raw();
        let width = usize::from(right - left) + 1;
        let height = usize::from(bottom - top) + 1;
        let size = width * height;

        self.set_window(left, right, top, bottom)?;
        self.send_command(MEMORY_WRITE)?;
        self.with_wide_transfers(|interface| {
            if size % 2 == 0 {
                log::trace!("ili9341: fill {size} pixels in one batch");
                interface.send_data_words(&vec![color; size])
            } else {
                log::trace!("ili9341: fill {height} lines of {width}");
                let line = vec![color; width];
                for _ in 0..height {
                    interface.send_data_words(&line)?;
                }
                Ok(())
            }
        })
    }

    /// Fill a circle centered on `(x0, y0)`
    ///
    /// Points that fall off screen are skipped.
    pub fn draw_circle(
        &mut self,
        x0: u16,
        y0: u16,
        radius: u16,
        color: impl Into<Color565>,
    ) -> DisplayResult<I> {
        let color = color.into();
        let r = i32::from(radius);
        let (cx, cy) = (i32::from(x0), i32::from(y0));
        let (w, h) = (i32::from(self.width()), i32::from(self.height()));
        let r2 = i64::from(r) * i64::from(r);

        // Scan only the part of the bounding box that is on screen
        for dy in (-r).max(-cy)..=r.min(h - 1 - cy) {
            for dx in (-r).max(-cx)..=r.min(w - 1 - cx) {
                let d2 = i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy);
                if d2 > r2 {
                    continue;
                }
                // Both coordinates lie in 0..w and 0..h here
                self.draw_pixel((cx + dx) as u16, (cy + dy) as u16, color)?;
            }
        }
        Ok(())
    }

    /// Copy a block of pixels to the screen
    ///
    /// `pixels` is row-major with a stride of `width`. A block that runs past
    /// the right or bottom edge is clipped; a block with a negative origin or a
    /// non-positive size draws nothing.
    ///
    /// Blocks of even width go out in one transfer; odd widths are sent one
    /// row per transfer.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `pixels` holds fewer than
    /// `width * height` entries
    pub fn flush(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        pixels: &[u16],
    ) -> DisplayResult<I> {
        let (Ok(x), Ok(y), Ok(stride), Ok(rows)) = (
            u16::try_from(x),
            u16::try_from(y),
            usize::try_from(width),
            usize::try_from(height),
        ) else {
            return Ok(());
        };
        if stride == 0 || rows == 0 || !self.dimensions.contains(x, y) {
            return Ok(());
        }

        let required = stride.checked_mul(rows).unwrap_or(usize::MAX);
        if pixels.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: pixels.len(),
            });
        }

        let Dimensions {
            width: screen_w,
            height: screen_h,
        } = self.dimensions;
        let cols = stride.min(usize::from(screen_w - x));
        let visible_rows = rows.min(usize::from(screen_h - y));
        if cols < stride || visible_rows < rows {
            log::warn!(
                "ili9341: flush {stride}x{rows} at ({x}, {y}) clipped to {cols}x{visible_rows}"
            );
        }

        // cols and visible_rows are bounded by the screen, so they fit in u16
        let right = x + cols as u16 - 1;
        let bottom = y + visible_rows as u16 - 1;
        self.set_window(x, right, y, bottom)?;
        self.send_command(MEMORY_WRITE)?;
        self.with_wide_transfers(|interface| {
            if cols % 2 == 0 {
                if cols == stride {
                    interface.send_data_words(&pixels[..cols * visible_rows])
                } else {
                    let packed: Vec<u16> = pixels
                        .chunks(stride)
                        .take(visible_rows)
                        .flat_map(|row| &row[..cols])
                        .copied()
                        .collect();
                    interface.send_data_words(&packed)
                }
            } else {
                for row in pixels.chunks(stride).take(visible_rows) {
                    interface.send_data_words(&row[..cols])?;
                }
                Ok(())
            }
        })
    }

    /// Fill the whole screen with black
    pub fn clear_screen(&mut self) -> DisplayResult<I> {
        self.fill_screen(Color565::BLACK)
    }

    /// Fill the whole screen with one color
    pub fn fill_screen(&mut self, color: impl Into<Color565>) -> DisplayResult<I> {
        let Dimensions { width, height } = self.dimensions;
        self.fill_rect(0, width - 1, 0, height - 1, color)
    }

    /// Logical width in pixels
    pub fn width(&self) -> u16 {
        self.dimensions.width
    }

    /// Logical height in pixels
    pub fn height(&self) -> u16 {
        self.dimensions.height
    }

    /// Get logical dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Get current orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Access the interface directly
    ///
    /// For commands the driver does not wrap. Leave the transfer width at
    /// [`TransferWidth::Eight`] when done.
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Check that an inclusive window lies on the screen
    pub(crate) fn check_window(
        &self,
        left: u16,
        right: u16,
        top: u16,
        bottom: u16,
    ) -> DisplayResult<I> {
        let Dimensions { width, height } = self.dimensions;
        if left > right || top > bottom || right >= width || bottom >= height {
            return Err(Error::InvalidWindow {
                left,
                right,
                top,
                bottom,
            });
        }
        Ok(())
    }

    /// Stream color words into the current window
    pub(crate) fn write_pixels(&mut self, words: &[u16]) -> DisplayResult<I> {
        self.with_wide_transfers(|interface| interface.send_data_words(words))
    }

    /// Run `f` with 16-bit transfers, restoring 8-bit transfers afterwards
    /// whether or not `f` succeeds
    fn with_wide_transfers<F>(&mut self, f: F) -> DisplayResult<I>
    where
        F: FnOnce(&mut I) -> Result<(), I::Error>,
    {
        self.interface
            .set_transfer_width(TransferWidth::Sixteen)
            .map_err(Error::Interface)?;
        let result = f(&mut self.interface);
        let restored = self.interface.set_transfer_width(TransferWidth::Eight);
        result.map_err(Error::Interface)?;
        restored.map_err(Error::Interface)
    }

    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}
