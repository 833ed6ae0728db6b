//! Simulated GPIO outputs for the host build.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use log::trace;

/// An output pin that only records and logs its level.
#[derive(Debug, Default)]
pub struct LogPin {
    index: usize,
    high: bool,
}

impl LogPin {
    pub fn new(index: usize) -> Self {
        Self { index, high: false }
    }

    /// Four pins numbered LED1..LED4.
    pub fn bank() -> [Self; 4] {
        core::array::from_fn(|i| Self::new(i + 1))
    }
}

impl ErrorType for LogPin {
    type Error = Infallible;
}

impl OutputPin for LogPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        if self.high {
            trace!("LED{} off", self.index);
        }
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        if !self.high {
            trace!("LED{} on", self.index);
        }
        self.high = true;
        Ok(())
    }
}
