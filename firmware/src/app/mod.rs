//! Application core: console logic, zero I/O.
//!
//! Menu selection, LED effect selection and the RTC dialogs live here.
//! All interaction with hardware happens through the **port traits** in
//! [`ports`], so this layer is testable without peripherals.

pub mod clock;
pub mod commands;
pub mod led;
pub mod menu;
pub mod messages;
pub mod ports;
pub mod rtc;
