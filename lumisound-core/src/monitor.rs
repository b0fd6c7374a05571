//! The polling loop: sample, classify, report, forever.

use embedded_hal::digital::OutputPin;
use embedded_io::Write;
use log::{debug, error, info};

use crate::{
    Error,
    adc::AnalogInput,
    config::Config,
    light::{ClassifierState, Indicator},
    sampler::{Clock, sample_amplitude, sample_voltage},
    telemetry::{Report, write_report},
};

/// The hardware a [`Monitor`] runs on.
pub struct Parts<S, L, C, R, B, G, W> {
    /// Sound sensor channel.
    pub sound: S,
    /// Light sensor channel.
    pub light: L,
    /// Millisecond clock timing the amplitude window.
    pub clock: C,
    /// RGB light band indicator.
    pub indicator: Indicator<R, B, G>,
    /// Diagnostic serial stream.
    pub serial: W,
}

pub struct Monitor<S, L, C, R, B, G, W> {
    config: Config,
    parts: Parts<S, L, C, R, B, G, W>,
    state: ClassifierState,
}

impl<S, L, C, R, B, G, W> Monitor<S, L, C, R, B, G, W>
where
    S: AnalogInput,
    L: AnalogInput,
    C: Clock,
    R: OutputPin,
    B: OutputPin,
    G: OutputPin,
    W: Write,
{
    pub fn new(config: Config, parts: Parts<S, L, C, R, B, G, W>) -> Result<Self, Error> {
        config.validate()?;
        info!(
            "Monitoring with a {}ms sound window, diagnostics at {} baud",
            config.window_ms, config.baud_rate
        );
        Ok(Self {
            config,
            parts,
            state: ClassifierState::default(),
        })
    }

    /// Run one iteration and return what was reported.
    pub fn step(&mut self) -> Result<Report, Error> {
        let parts = &mut self.parts;
        let window =
            sample_amplitude(self.config.window_ms, &mut parts.sound, &mut parts.clock);
        let sound_voltage = sample_voltage(&mut parts.sound);
        let ldr_voltage = sample_voltage(&mut parts.light);
        let shown = parts.indicator.show(&mut self.state, ldr_voltage);

        let report = Report {
            sound_voltage,
            sound_intensity: window.peak_to_peak(),
            ldr_voltage,
        };
        debug!("{report:?} band={shown:?}");
        // readings go out even when an indicator pin failed
        write_report(&mut parts.serial, &report)?;
        shown?;
        Ok(report)
    }

    /// Step forever. Failed iterations are logged and the loop carries on.
    pub fn run(&mut self) -> ! {
        loop {
            if let Err(err) = self.step() {
                error!("iteration failed: {err}");
            }
        }
    }

    /// The band currently shown.
    pub fn state(&self) -> ClassifierState {
        self.state
    }

    /// Give the hardware back.
    pub fn into_parts(self) -> Parts<S, L, C, R, B, G, W> {
        self.parts
    }
}
