//! System configuration parameters
//!
//! Timer periods for the console subsystems plus the compile-time
//! capacities of the serial pipeline. There is no persistent store; a
//! board adapter may override the periods before the tasks start.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Byte marking end-of-command on the serial link.
pub const LINE_TERMINATOR: u8 = b'\r';

/// Depth of the ISR → assembler byte queue.
pub const BYTE_QUEUE_CAP: usize = 10;

/// Content bytes retained per command (terminator excluded).
pub const PAYLOAD_CAP: usize = BYTE_QUEUE_CAP - 1;

/// Depth of the shared print queue.
pub const PRINT_QUEUE_DEPTH: usize = 10;

/// Console UART line rate.
pub const UART_BAUD: u32 = 115_200;

/// Core console configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Frame period of every LED effect timer (milliseconds)
    pub led_effect_period_ms: u32,
    /// Period of the RTC report timer (milliseconds)
    pub rtc_report_period_ms: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            led_effect_period_ms: 500,
            rtc_report_period_ms: 1000,
        }
    }
}

impl ConsoleConfig {
    /// Reject periods a periodic timer cannot run with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.led_effect_period_ms == 0 {
            return Err(Error::Config("led_effect_period_ms must be non-zero"));
        }
        if self.rtc_report_period_ms == 0 {
            return Err(Error::Config("rtc_report_period_ms must be non-zero"));
        }
        Ok(())
    }
}
