use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};
use esp_hal::peripheral::Peripheral;
use lumisound_core::Indicator;

/// The light band indicator, one discrete LED per band.
pub type RgbIndicator = Indicator<Output<'static>, Output<'static>, Output<'static>>;

/// Configure the three LED pins as push-pull outputs, all off.
pub fn indicator(
    red: impl Peripheral<P = impl OutputPin> + 'static,
    blue: impl Peripheral<P = impl OutputPin> + 'static,
    green: impl Peripheral<P = impl OutputPin> + 'static,
) -> RgbIndicator {
    let config = OutputConfig::default();
    Indicator::new(
        Output::new(red, Level::Low, config),
        Output::new(blue, Level::Low, config),
        Output::new(green, Level::Low, config),
    )
}
