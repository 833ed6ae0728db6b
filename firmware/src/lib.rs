//! Serial command console firmware library.
//!
//! Exposes the console backbone and its port traits for the binary, the
//! integration tests and the fuzz targets. ESP-IDF-specific code is
//! guarded by `#[cfg(target_os = "espidf")]` inside [`adapters`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod console;
pub mod drivers;
pub mod error;
pub mod fsm;
pub mod timers;

pub use error::{Error, Result};
