//! Light level bands and the RGB indicator that shows them.
//!
//! | Band | Voltage           | Lit output |
//! | ---- | ----------------- | ---------- |
//! | Low  | v < 1.05          | red        |
//! | Mid  | 1.15 <= v < 2.15  | blue       |
//! | High | 2.20 <= v < 3.3   | green      |
//!
//! Readings in `[1.05, 1.15)` or `[2.15, 2.20)` match no band and leave the
//! indicator as it was. The edges are evaluated in double precision, so a
//! saturated sensor (`3.2999999523` as `f32`) is still in the high band.

use embedded_hal::digital::{OutputPin, PinState};
use log::debug;

use crate::Error;

/// Boundary between the low and mid bands.
const LOW_MID: f64 = 1.1;
/// Boundary between the mid and high bands.
const MID_HIGH: f64 = 2.2;
/// Margin applied around the boundaries.
const MARGIN: f64 = 0.05;
/// Upper bound of the high band.
const FULL_SCALE: f64 = 3.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightBand {
    Low,
    Mid,
    High,
}

impl LightBand {
    /// The band `voltage` falls in, checked low to high. `None` inside a dead zone.
    pub fn classify(voltage: f32) -> Option<Self> {
        let v = f64::from(voltage);
        if v < LOW_MID - MARGIN {
            Some(Self::Low)
        } else if v >= LOW_MID + MARGIN && v < MID_HIGH - MARGIN {
            Some(Self::Mid)
        } else if v >= MID_HIGH && v < FULL_SCALE {
            Some(Self::High)
        } else {
            None
        }
    }
}

/// The band currently shown, carried from one iteration to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierState {
    /// `None` until a reading first lands in a band.
    pub current: Option<LightBand>,
}

/// Three push-pull outputs, exactly one lit once a band has been shown.
pub struct Indicator<R, B, G> {
    red: R,
    blue: B,
    green: G,
}

impl<R, B, G> Indicator<R, B, G>
where
    R: OutputPin,
    B: OutputPin,
    G: OutputPin,
{
    pub fn new(red: R, blue: B, green: G) -> Self {
        Self { red, blue, green }
    }

    /// Classify `voltage` and light the matching output.
    ///
    /// In a dead zone neither the pins nor `state` change. Returns the band
    /// shown after the call.
    pub fn show(
        &mut self,
        state: &mut ClassifierState,
        voltage: f32,
    ) -> Result<Option<LightBand>, Error> {
        let Some(band) = LightBand::classify(voltage) else {
            debug!("{voltage:.2}V is between bands, holding {:?}", state.current);
            return Ok(state.current);
        };
        self.drive(band)?;
        state.current = Some(band);
        Ok(state.current)
    }

    fn drive(&mut self, band: LightBand) -> Result<(), Error> {
        set(&mut self.red, band == LightBand::Low, "red")?;
        set(&mut self.blue, band == LightBand::Mid, "blue")?;
        set(&mut self.green, band == LightBand::High, "green")
    }
}

fn set<P: OutputPin>(pin: &mut P, lit: bool, name: &'static str) -> Result<(), Error> {
    pin.set_state(PinState::from(lit))
        .map_err(|_| Error::Indicator(name))
}
