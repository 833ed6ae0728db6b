//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements        | Connects to                 |
//! |------------|-------------------|-----------------------------|
//! | `soft_rtc` | RtcPort           | `std::time::Instant` clock  |
//! | `stdio`    | SerialTx          | stdout (+ stdin reader)     |
//! | `sim_pins` | OutputPin         | log output                  |
//! | `esp`      | SerialTx, pins    | ESP-IDF UART1 and GPIO      |

pub mod soft_rtc;

#[cfg(not(target_os = "espidf"))]
pub mod sim_pins;
#[cfg(not(target_os = "espidf"))]
pub mod stdio;

#[cfg(target_os = "espidf")]
pub mod esp;
