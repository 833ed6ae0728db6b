//! Fuzz target: receive path + `CommandAssembler::pass`
//!
//! Pushes arbitrary bytes through the interrupt-side admission policy,
//! running an assembly pass after every byte, and asserts that commands
//! stay within the payload capacity and the queue never overflows.
//!
//! cargo fuzz run fuzz_line_ingest

#![no_main]

use cmdconsole::config::{BYTE_QUEUE_CAP, PAYLOAD_CAP};
use cmdconsole::console::assembler::{Assembly, CommandAssembler};
use cmdconsole::console::channels::Console;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let console = Console::new();
    let mut assembler = CommandAssembler::new();

    // First byte picks how many bytes arrive between assembler passes.
    let Some((&burst, bytes)) = data.split_first() else {
        return;
    };
    let burst = usize::from(burst % 16) + 1;

    for chunk in bytes.chunks(burst) {
        for &b in chunk {
            console.on_rx_byte(b);
            assert!(console.rx.len() <= BYTE_QUEUE_CAP);
        }
        while let Assembly::Complete(cmd) = assembler.pass(&console.rx) {
            assert!(cmd.len() <= PAYLOAD_CAP, "command exceeds payload capacity");
        }
        assert!(console.rx.is_empty(), "pass left bytes behind");
    }
});
