#![no_std]

pub mod analog;
pub mod bsp;
pub mod led;
