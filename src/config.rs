//! Display configuration types and builder

pub use crate::error::BuilderError;

/// Native panel width in pixels (portrait)
pub const PANEL_WIDTH: u16 = 240;

/// Native panel height in pixels (portrait)
pub const PANEL_HEIGHT: u16 = 320;

/// Logical display dimensions for the current orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Whether `(x, y)` lies on the screen
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }
}

/// Panel orientation
///
/// Each variant carries its memory-access-control register byte
/// (MY/MX/MV plus the BGR bit).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Orientation {
    /// 240x320, connector at the bottom
    #[default]
    Portrait = 0x48,
    /// 320x240
    Landscape = 0xE8,
    /// 240x320, rotated 180 degrees
    Portrait180 = 0x88,
    /// 320x240, rotated 180 degrees
    Landscape180 = 0x28,
}

impl Orientation {
    /// Memory access control register byte
    pub fn register(self) -> u8 {
        self as u8
    }

    /// Whether width and height are swapped relative to the native panel
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape | Self::Landscape180)
    }

    /// Logical dimensions in this orientation
    ///
    /// ```
    /// use ili9341::Orientation;
    ///
    /// let dims = Orientation::Landscape.dimensions();
    /// assert_eq!((dims.width, dims.height), (320, 240));
    /// ```
    pub fn dimensions(self) -> Dimensions {
        if self.is_landscape() {
            Dimensions {
                width: PANEL_HEIGHT,
                height: PANEL_WIDTH,
            }
        } else {
            Dimensions {
                width: PANEL_WIDTH,
                height: PANEL_HEIGHT,
            }
        }
    }
}

/// Display configuration
///
/// This struct holds the register payloads written during initialization.
/// Use `Builder` to create a Config; the defaults are the vendor values for
/// bare ILI9341 modules.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Orientation applied during initialization
    pub orientation: Orientation,
    /// Frame rate control bytes (command 0xB1): [DIVA, RTNA]
    pub frame_rate: [u8; 2],
    /// Gamma curve selector (command 0x26)
    pub gamma_curve: u8,
    /// Entry mode byte (command 0xB7)
    pub entry_mode: u8,
    /// Display function control bytes (command 0xB6)
    pub display_function_control: [u8; 4],
    /// Backlight state once initialization completes
    pub backlight: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: Orientation::Portrait,
            // 70Hz: fosc/1, 27 clocks per line
            frame_rate: [0x00, 0x1B],
            // Gamma curve 1 (G2.2)
            gamma_curve: 0x01,
            // Low voltage detection off, normal gate output
            entry_mode: 0x07,
            // Interval scan, normally white, 320 lines
            display_function_control: [0x0A, 0x82, 0x27, 0x00],
            backlight: false,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use ili9341::{Builder, Orientation};
///
/// let config = match Builder::new()
///     .orientation(Orientation::Landscape)
///     .backlight(true)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial orientation
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    /// Set frame rate control
    ///
    /// `division` is DIVA (0x00..=0x03), `clocks_per_line` is RTNA (0x10..=0x1F).
    /// Checked in [`build`](Self::build).
    pub fn frame_rate(mut self, division: u8, clocks_per_line: u8) -> Self {
        self.config.frame_rate = [division, clocks_per_line];
        self
    }

    /// Set the gamma curve selector
    pub fn gamma_curve(mut self, value: u8) -> Self {
        self.config.gamma_curve = value;
        self
    }

    /// Set the entry mode byte
    pub fn entry_mode(mut self, value: u8) -> Self {
        self.config.entry_mode = value;
        self
    }

    /// Set display function control bytes
    pub fn display_function_control(mut self, values: [u8; 4]) -> Self {
        self.config.display_function_control = values;
        self
    }

    /// Set the backlight state applied after initialization
    pub fn backlight(mut self, on: bool) -> Self {
        self.config.backlight = on;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidFrameRate` if DIVA > 0x03 or RTNA is
    /// outside 0x10..=0x1F
    pub fn build(self) -> Result<Config, BuilderError> {
        let [division, clocks_per_line] = self.config.frame_rate;
        if division > 0x03 || !(0x10..=0x1F).contains(&clocks_per_line) {
            return Err(BuilderError::InvalidFrameRate {
                division,
                clocks_per_line,
            });
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_registers() {
        assert_eq!(Orientation::Portrait.register(), 0x48);
        assert_eq!(Orientation::Landscape.register(), 0xE8);
        assert_eq!(Orientation::Portrait180.register(), 0x88);
        assert_eq!(Orientation::Landscape180.register(), 0x28);
    }

    #[test]
    fn test_orientation_dimensions() {
        for orientation in [Orientation::Portrait, Orientation::Portrait180] {
            assert_eq!(
                orientation.dimensions(),
                Dimensions {
                    width: 240,
                    height: 320
                }
            );
        }
        for orientation in [Orientation::Landscape, Orientation::Landscape180] {
            assert_eq!(
                orientation.dimensions(),
                Dimensions {
                    width: 320,
                    height: 240
                }
            );
        }
    }

    #[test]
    fn test_default_config_matches_vendor_sequence() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config.orientation, Orientation::Portrait);
        assert_eq!(config.frame_rate, [0x00, 0x1B]);
        assert_eq!(config.gamma_curve, 0x01);
        assert_eq!(config.entry_mode, 0x07);
        assert_eq!(config.display_function_control, [0x0A, 0x82, 0x27, 0x00]);
        assert!(!config.backlight);
    }

    #[test]
    fn test_builder_rejects_bad_frame_rate() {
        let result = Builder::new().frame_rate(0x04, 0x1B).build();
        assert_eq!(
            result,
            Err(BuilderError::InvalidFrameRate {
                division: 0x04,
                clocks_per_line: 0x1B
            })
        );

        let result = Builder::new().frame_rate(0x00, 0x0F).build();
        assert!(matches!(result, Err(BuilderError::InvalidFrameRate { .. })));
    }

    #[test]
    fn test_builder_overrides() {
        let config = Builder::new()
            .orientation(Orientation::Landscape180)
            .frame_rate(0x01, 0x1F)
            .gamma_curve(0x02)
            .backlight(true)
            .build()
            .unwrap();
        assert_eq!(config.orientation, Orientation::Landscape180);
        assert_eq!(config.frame_rate, [0x01, 0x1F]);
        assert_eq!(config.gamma_curve, 0x02);
        assert!(config.backlight);
    }

    #[test]
    fn test_dimensions_contains() {
        let dims = Orientation::Portrait.dimensions();
        assert!(dims.contains(0, 0));
        assert!(dims.contains(239, 319));
        assert!(!dims.contains(240, 0));
        assert!(!dims.contains(0, 320));
    }
}
