//! Four-LED output bank.
//!
//! Wraps four `embedded-hal` output pins and writes an effect mask to
//! them. The last written mask is kept so the host build and the tests
//! can observe the pattern without probing pins.

use embedded_hal::digital::{OutputPin, PinState};
use log::warn;

pub const LED_COUNT: usize = 4;

pub struct LedBank<P> {
    pins: [P; LED_COUNT],
    mask: u8,
}

impl<P: OutputPin> LedBank<P> {
    pub fn new(pins: [P; LED_COUNT]) -> Self {
        Self { pins, mask: 0 }
    }

    /// Drive LED `i` high when bit `i` of `mask` is set.
    pub fn write_mask(&mut self, mask: u8) {
        for (i, pin) in self.pins.iter_mut().enumerate() {
            let state = PinState::from(mask & (1 << i) != 0);
            if let Err(e) = pin.set_state(state) {
                warn!("led: pin {} write failed: {:?}", i, e);
            }
        }
        self.mask = mask & 0x0F;
    }

    /// Mask most recently written.
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Pins in LED order.
    pub fn pins(&self) -> &[P; LED_COUNT] {
        &self.pins
    }
}
