//! Board Support Package for an esp32c3 board wired to the light and sound sensors.
//!
//! ### Analog inputs
//!
//! Both sensors are read through ADC1 with 11 dB attenuation (about 0 to 3.3 V).
//!
//! | Sensor                    | GPIO  | ADC1 channel |
//! | ------------------------- | ----- | ------------ |
//! | LDR voltage divider       | GPIO3 | CH3          |
//! | Microphone module (AO)    | GPIO4 | CH4          |
//!
//! ### I/Os
//!
//! The following devices are connected through GPIO:
//!
//! | I/O Devices | GPIO  |
//! | ----------- | ----- |
//! | Red LED     | GPIO5 |
//! | Blue LED    | GPIO6 |
//! | Green LED   | GPIO7 |
//!
//! ### Diagnostic stream
//!
//! | Signal | GPIO   |
//! | ------ | ------ |
//! | TX     | GPIO21 |
//! | RX     | GPIO20 |
//!
//! UART0, opened at the configured baud rate (115200 by default).

use core::cell::RefCell;

use embassy_sync::blocking_mutex::NoopMutex;
use esp_hal::{
    Blocking,
    analog::adc::{Adc, AdcConfig, Attenuation},
    clock::CpuClock,
    gpio::GpioPin,
    time::Instant,
    uart::{self, Uart},
};
use log::info;
use lumisound_core::{Clock, Config};
use static_cell::StaticCell;

use crate::{
    analog::{AdcBus, AnalogChannel},
    led::{self, RgbIndicator},
};

pub type LightSensor = AnalogChannel<GpioPin<3>>;
pub type SoundSensor = AnalogChannel<GpioPin<4>>;
pub type Serial = Uart<'static, Blocking>;

/// Milliseconds from the system timer.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&mut self) -> u64 {
        Instant::now().duration_since_epoch().as_millis()
    }
}

/// Board-specific peripherals.
pub struct Board {
    /// LDR on ADC1
    pub light: LightSensor,
    /// Microphone module on ADC1
    pub sound: SoundSensor,
    /// Red/blue/green light band LEDs
    pub indicator: RgbIndicator,
    /// Diagnostic serial port
    pub serial: Serial,
    /// Time base for the sound window
    pub clock: SystemClock,
}

impl Board {
    /// Initialize the board.
    pub fn init(config: &Config) -> Self {
        let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
        let p = esp_hal::init(hal_config);

        info!("{} initialized!", esp_hal::chip!());

        let (adc_bus, light, sound) = {
            static BUS: StaticCell<AdcBus<'static>> = StaticCell::new();
            let mut adc_config = AdcConfig::new();
            let light = adc_config.enable_pin(p.GPIO3, Attenuation::_11dB);
            let sound = adc_config.enable_pin(p.GPIO4, Attenuation::_11dB);
            let adc = Adc::new(p.ADC1, adc_config);
            let bus: &'static AdcBus<'static> = BUS.init(NoopMutex::new(RefCell::new(adc)));
            (bus, light, sound)
        };
        info!("Initialized ADC1");

        let indicator = led::indicator(p.GPIO5, p.GPIO6, p.GPIO7);
        info!("Initialized indicator LEDs");

        let serial = Uart::new(
            p.UART0,
            uart::Config::default().with_baudrate(config.baud_rate),
        )
        .expect("Failed to initialize UART0")
        .with_tx(p.GPIO21)
        .with_rx(p.GPIO20);
        info!("Initialized UART0 at {} baud", config.baud_rate);

        Self {
            light: AnalogChannel::new(adc_bus, light, "light"),
            sound: AnalogChannel::new(adc_bus, sound, "sound"),
            indicator,
            serial,
            clock: SystemClock,
        }
    }
}
