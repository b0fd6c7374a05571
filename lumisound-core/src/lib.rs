//! Portable core of the lumisound firmware.
//!
//! Everything here is independent of the chip: the sampler, the light band
//! classifier and its RGB indicator, the diagnostic stream formatter and the
//! polling [`Monitor`] that ties them together. Hardware is reached through
//! [`AnalogInput`], [`Clock`], [`embedded_hal::digital::OutputPin`] and
//! [`embedded_io::Write`].

#![cfg_attr(not(test), no_std)]

use thiserror::Error;

pub mod adc;
pub mod config;
pub mod light;
pub mod monitor;
pub mod sampler;
pub mod telemetry;

#[cfg(test)]
mod mock;

pub use adc::{ADC_MAX, AnalogInput, VREF, to_voltage};
pub use config::Config;
pub use light::{ClassifierState, Indicator, LightBand};
pub use monitor::{Monitor, Parts};
pub use sampler::{AmplitudeWindow, Clock, sample_amplitude, sample_voltage};
pub use telemetry::{Report, write_report};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Sampling window {0}ms must be greater than zero")]
    InvalidWindow(u32),
    #[error("Baud rate {0} must be greater than zero")]
    InvalidBaudRate(u32),
    #[error("Failed to drive the {0} indicator output")]
    Indicator(&'static str),
    #[error("Failed to write to the diagnostic stream")]
    Telemetry,
}
