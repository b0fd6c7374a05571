#![no_std]
#![no_main]

use esp_backtrace as _;
use log::info;

use lumisound::bsp::Board;
use lumisound_core::{Config, Monitor, Parts};

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = Config::default();
    let board = Board::init(&config);

    let mut monitor = Monitor::new(
        config,
        Parts {
            sound: board.sound,
            light: board.light,
            clock: board.clock,
            indicator: board.indicator,
            serial: board.serial,
        },
    )
    .expect("invalid monitor configuration");

    info!("Light and sound monitor running");
    monitor.run()
}
