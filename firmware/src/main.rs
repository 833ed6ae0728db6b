//! Serial command console main entry point.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  UART rx thread / stdin   UartTx / StdoutTx   LED pins  SoftRtc│
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │   Console backbone (edge-executor, one thread)         │    │
//! │  │   assembler · router · menu · LED · RTC · print        │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  TimerMux: LED slots 1-4 · RTC report                          │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Result;
use log::info;

use cmdconsole::adapters::soft_rtc::SoftRtc;
use cmdconsole::app::clock::{RtcDate, RtcTime};
use cmdconsole::config::ConsoleConfig;
use cmdconsole::console::{self, channels::Console};

/// The single console context; the receive path needs it `'static`.
static CONSOLE: Console = Console::new();

fn main() -> Result<()> {
    // ── 1. Platform bootstrap + logging ───────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }
    #[cfg(not(target_os = "espidf"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("╔══════════════════════════════════════╗");
    info!("║  CmdConsole v{}                       ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = ConsoleConfig::default();
    config.validate()?;

    // ── 3. Board bring-up ─────────────────────────────────────
    #[cfg(target_os = "espidf")]
    let (leds, tx) = cmdconsole::adapters::esp::Board::take()?.start_rx(&CONSOLE)?;

    #[cfg(not(target_os = "espidf"))]
    let (leds, tx) = {
        use cmdconsole::adapters::{sim_pins::LogPin, stdio};
        use cmdconsole::drivers::led_bank::LedBank;
        stdio::spawn_reader(&CONSOLE)?;
        (LedBank::new(LogPin::bank()), stdio::StdoutTx)
    };

    let rtc = SoftRtc::new(RtcTime::new(12, 0, 0, false), RtcDate::new(1, 1, 1, 0));

    // ── 4. Run ────────────────────────────────────────────────
    console::run(&CONSOLE, &config, leds, tx, rtc)?;
    Ok(())
}
