//! Raw converter counts and their voltage.

/// Full-scale count of the 12-bit converter. A reading at this value is a
/// saturated sample.
pub const ADC_MAX: u16 = 4095;

/// Reference voltage matching [`ADC_MAX`].
pub const VREF: f32 = 3.3;

/// A single analog channel that can be converted on demand.
///
/// The converter always returns a count, so reads are infallible here.
/// Adapters for real hardware decide what to hand back if the peripheral
/// misbehaves.
pub trait AnalogInput {
    /// Take one conversion.
    fn read_raw(&mut self) -> u16;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    fn read_raw(&mut self) -> u16 {
        T::read_raw(self)
    }
}

/// Convert a raw count to volts. Counts above [`ADC_MAX`] are clamped.
pub fn to_voltage(raw: u16) -> f32 {
    f32::from(raw.min(ADC_MAX)) * (VREF / ADC_MAX as f32)
}
