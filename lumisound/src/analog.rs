//! Sensor channels on ADC1.
//!
//! Both sensors sit on the same converter, so the converter lives in a static
//! cell behind a mutex and every channel borrows it for a single conversion.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::NoopMutex;
use esp_hal::{
    Blocking,
    analog::adc::{Adc, AdcChannel, AdcPin},
    peripherals::ADC1,
};
use log::warn;
use lumisound_core::{ADC_MAX, AnalogInput};

pub type AdcType<'a> = Adc<'a, ADC1, Blocking>;
pub type AdcBus<'a> = NoopMutex<RefCell<AdcType<'a>>>;

/// One sensor pin on the shared converter.
pub struct AnalogChannel<PIN> {
    bus: &'static AdcBus<'static>,
    pin: AdcPin<PIN, ADC1>,
    name: &'static str,
}

impl<PIN: AdcChannel> AnalogChannel<PIN> {
    pub fn new(
        bus: &'static AdcBus<'static>,
        pin: AdcPin<PIN, ADC1>,
        name: &'static str,
    ) -> Self {
        Self { bus, pin, name }
    }
}

impl<PIN: AdcChannel> AnalogInput for AnalogChannel<PIN> {
    /// Blocks until the conversion completes.
    ///
    /// A failed conversion comes back as a saturated count, which the
    /// amplitude window discards as a spike.
    fn read_raw(&mut self) -> u16 {
        let pin = &mut self.pin;
        let result = self
            .bus
            .lock(|adc| nb::block!(adc.borrow_mut().read_oneshot(pin)));
        match result {
            Ok(raw) => raw,
            Err(error) => {
                warn!("{} conversion failed: {:?}", self.name, error);
                ADC_MAX
            }
        }
    }
}
