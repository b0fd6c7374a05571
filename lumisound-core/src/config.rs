//! Build-time settings of the polling loop.

use crate::Error;

/// Length of the sound amplitude window.
pub const SAMPLE_WINDOW_MS: u32 = 50;

/// Baud rate of the diagnostic stream.
pub const BAUD_RATE: u32 = 115_200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Wall-clock duration of each sound amplitude window.
    pub window_ms: u32,
    /// Baud rate the diagnostic serial port is opened at.
    pub baud_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_ms: SAMPLE_WINDOW_MS,
            baud_rate: BAUD_RATE,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.window_ms == 0 {
            return Err(Error::InvalidWindow(self.window_ms));
        }
        if self.baud_rate == 0 {
            return Err(Error::InvalidBaudRate(self.baud_rate));
        }
        Ok(())
    }
}
