//! Line-oriented diagnostic stream.
//!
//! Every value goes out as `>Name:value` followed by CRLF, the format
//! Teleplot-style serial plotters pick up. Voltages carry two decimals.

use embedded_io::Write;

use crate::Error;

pub const SOUND_VOLTAGE: &str = "Sound_Voltage";
pub const SOUND_INTENSITY: &str = "Sound_Intensity";
pub const LDR_VOLTAGE: &str = "LDR_Voltage";

/// The readings of one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Instantaneous sound channel voltage, read after the amplitude window.
    pub sound_voltage: f32,
    /// Peak-to-peak count of the amplitude window.
    pub sound_intensity: i32,
    /// Light sensor voltage.
    pub ldr_voltage: f32,
}

/// Write `report` to the stream and flush it.
pub fn write_report<W: Write>(serial: &mut W, report: &Report) -> Result<(), Error> {
    write!(serial, ">{SOUND_VOLTAGE}:{:.2}\r\n", report.sound_voltage)
        .map_err(|_| Error::Telemetry)?;
    write!(serial, ">{SOUND_INTENSITY}:{}\r\n", report.sound_intensity)
        .map_err(|_| Error::Telemetry)?;
    write!(serial, ">{LDR_VOLTAGE}:{:.2}\r\n", report.ldr_voltage)
        .map_err(|_| Error::Telemetry)?;
    serial.flush().map_err(|_| Error::Telemetry)
}
