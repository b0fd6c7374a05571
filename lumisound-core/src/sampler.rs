//! Acquire one representative measurement per input and iteration.
//!
//! The sound channel is scanned for its peak-to-peak amplitude over a fixed
//! window of wall-clock time, the light channel is a single conversion.

use log::debug;

use crate::adc::{ADC_MAX, AnalogInput, to_voltage};

/// A free-running millisecond counter.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin. Must not go backwards.
    fn now_ms(&mut self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn now_ms(&mut self) -> u64 {
        T::now_ms(self)
    }
}

/// Extremes observed on the sound channel during one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmplitudeWindow {
    pub min: u16,
    pub max: u16,
}

impl Default for AmplitudeWindow {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl AmplitudeWindow {
    /// Sentinels: the first accepted sample replaces both.
    pub const EMPTY: Self = Self {
        min: ADC_MAX,
        max: 0,
    };

    /// Fold one sample into the window.
    ///
    /// Saturated samples are spikes, not signal, and leave the window untouched.
    pub fn update(&mut self, sample: u16) {
        if sample >= ADC_MAX {
            return;
        }
        if sample > self.max {
            self.max = sample;
        }
        if sample < self.min {
            self.min = sample;
        }
    }

    /// `max - min`. Negative only for a window that accepted no sample.
    pub fn peak_to_peak(&self) -> i32 {
        i32::from(self.max) - i32::from(self.min)
    }

    /// True when every sample of the window was rejected.
    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }
}

/// Busy-read `input` for `duration_ms` and return the extremes seen.
///
/// The loop never sleeps or yields; it blocks the caller for the whole window.
pub fn sample_amplitude<I, C>(duration_ms: u32, input: &mut I, clock: &mut C) -> AmplitudeWindow
where
    I: AnalogInput + ?Sized,
    C: Clock + ?Sized,
{
    let start = clock.now_ms();
    let mut window = AmplitudeWindow::EMPTY;
    let mut reads = 0u32;
    while clock.now_ms().saturating_sub(start) < u64::from(duration_ms) {
        window.update(input.read_raw());
        reads = reads.wrapping_add(1);
    }
    if window.is_empty() {
        debug!("no usable sound sample in {reads} reads over {duration_ms}ms");
    }
    window
}

/// One conversion of `input`, in volts.
pub fn sample_voltage<I: AnalogInput + ?Sized>(input: &mut I) -> f32 {
    to_voltage(input.read_raw())
}
