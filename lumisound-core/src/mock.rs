//! Fakes for the hardware seams, used by the unit tests.

use core::convert::Infallible;
use std::{cell::RefCell, rc::Rc};

use crate::{adc::AnalogInput, sampler::Clock};

/// Replays a fixed sequence of counts, wrapping around at the end.
pub struct ScriptedInput {
    samples: Vec<u16>,
    reads: usize,
}

impl ScriptedInput {
    pub fn new(samples: &[u16]) -> Self {
        assert!(!samples.is_empty());
        Self {
            samples: samples.to_vec(),
            reads: 0,
        }
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl AnalogInput for ScriptedInput {
    fn read_raw(&mut self) -> u16 {
        let sample = self.samples[self.reads % self.samples.len()];
        self.reads += 1;
        sample
    }
}

/// Advances one millisecond every time it is read.
#[derive(Default)]
pub struct StepClock {
    pub now: u64,
}

impl Clock for StepClock {
    fn now_ms(&mut self) -> u64 {
        self.now += 1;
        self.now
    }
}

/// Output pin whose level can be inspected from the test through a shared handle.
#[derive(Clone, Default)]
pub struct RecordingPin {
    high: Rc<RefCell<bool>>,
    writes: Rc<RefCell<usize>>,
}

impl RecordingPin {
    pub fn is_high(&self) -> bool {
        *self.high.borrow()
    }

    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl embedded_hal::digital::ErrorType for RecordingPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        *self.high.borrow_mut() = false;
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        *self.high.borrow_mut() = true;
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

/// A pin that always fails.
pub struct BrokenPin;

#[derive(Debug)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl embedded_hal::digital::ErrorType for BrokenPin {
    type Error = PinFault;
}

impl embedded_hal::digital::OutputPin for BrokenPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }
}

/// Collects everything written to the diagnostic stream.
#[derive(Default)]
pub struct SerialSink {
    pub bytes: Vec<u8>,
    pub flushes: usize,
}

impl SerialSink {
    pub fn text(&self) -> &str {
        core::str::from_utf8(&self.bytes).unwrap()
    }
}

impl embedded_io::ErrorType for SerialSink {
    type Error = Infallible;
}

impl embedded_io::Write for SerialSink {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

/// A serial port that rejects every write.
pub struct ClosedSerial;

impl embedded_io::ErrorType for ClosedSerial {
    type Error = embedded_io::ErrorKind;
}

impl embedded_io::Write for ClosedSerial {
    fn write(&mut self, _: &[u8]) -> Result<usize, Self::Error> {
        Err(embedded_io::ErrorKind::BrokenPipe)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
