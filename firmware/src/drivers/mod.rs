//! LED output drivers.

pub mod led_bank;
pub mod led_patterns;
