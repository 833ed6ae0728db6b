//! Host serial link over the process's stdin/stdout.
//!
//! A reader thread plays the receive interrupt: it feeds stdin one byte
//! at a time into [`Console::on_rx_byte`]. Terminals send `\n` at end of
//! line, so `\n` is translated to the console's CR terminator and a
//! literal `\r` is dropped.

use std::io::{Read, Write};
use std::thread::JoinHandle;

use log::{info, warn};

use crate::app::ports::SerialTx;
use crate::config::LINE_TERMINATOR;
use crate::console::channels::Console;
use crate::console::ingest::Admission;
use crate::error::SerialError;

/// Transmit primitive writing to stdout.
#[derive(Debug, Default)]
pub struct StdoutTx;

impl SerialTx for StdoutTx {
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), SerialError> {
        let mut out = std::io::stdout().lock();
        out.write_all(bytes)
            .and_then(|()| out.flush())
            .map_err(|e| {
                warn!("stdout: {}", e);
                SerialError::TransmitFailed
            })
    }
}

/// Map a terminal byte onto the serial line convention.
pub fn translate(byte: u8) -> Option<u8> {
    match byte {
        b'\n' => Some(LINE_TERMINATOR),
        b'\r' => None,
        b => Some(b),
    }
}

/// Spawn the stdin reader. It ends when stdin closes.
pub fn spawn_reader(console: &'static Console) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("stdin-rx".into())
        .spawn(move || {
            for byte in std::io::stdin().lock().bytes() {
                let byte = match byte {
                    Ok(b) => b,
                    Err(e) => {
                        warn!("stdin: {}", e);
                        break;
                    }
                };
                if let Some(b) = translate(byte) {
                    if let Admission::Dropped = console.on_rx_byte(b) {
                        warn!("stdin: byte 0x{:02x} dropped, queue full", b);
                    }
                }
            }
            info!("stdin: closed");
        })
}
