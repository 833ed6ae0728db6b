//! ESP-IDF board adapter.
//!
//! Four LED GPIOs (5..8, bit `i` of an effect mask on the `i`th) and
//! UART1 on GPIO 17/18. The UART driver is split: the transmit
//! half becomes the print task's [`SerialTx`], and a dedicated thread
//! blocks on the receive half, handing every byte to
//! [`Console::on_rx_byte`] the way the receive interrupt does.

use esp_idf_hal::delay::BLOCK;
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, Output, Pin, PinDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::uart::{UartDriver, UartRxDriver, UartTxDriver, config::Config};
use esp_idf_hal::units::Hertz;
use log::{info, warn};

use crate::app::ports::SerialTx;
use crate::console::channels::Console;
use crate::drivers::led_bank::LedBank;
use crate::config::UART_BAUD;
use crate::error::{Error, SerialError};

pub type LedPin = PinDriver<'static, AnyOutputPin, Output>;

pub struct UartTx(UartTxDriver<'static>);

impl SerialTx for UartTx {
    fn transmit(&mut self, mut bytes: &[u8]) -> Result<(), SerialError> {
        while !bytes.is_empty() {
            let n = self.0.write(bytes).map_err(|e| {
                warn!("uart: write failed: {}", e);
                SerialError::TransmitFailed
            })?;
            bytes = &bytes[n..];
        }
        Ok(())
    }
}

pub struct Board {
    pub leds: LedBank<LedPin>,
    pub tx: UartTx,
    rx: UartRxDriver<'static>,
}

impl Board {
    pub fn take() -> Result<Self, Error> {
        let p = Peripherals::take().map_err(|_| Error::Init("peripherals already taken"))?;

        let led = |pin: AnyOutputPin| {
            PinDriver::output(pin).map_err(|_| Error::Init("LED GPIO setup failed"))
        };
        let leds = LedBank::new([
            led(p.pins.gpio5.into())?,
            led(p.pins.gpio6.into())?,
            led(p.pins.gpio7.into())?,
            led(p.pins.gpio8.into())?,
        ]);

        let (tx_pin, rx_pin) = (p.pins.gpio17, p.pins.gpio18);
        let (tx_gpio, rx_gpio) = (tx_pin.pin(), rx_pin.pin());
        let config = Config::default().baudrate(Hertz(UART_BAUD));
        let uart = UartDriver::new(
            p.uart1,
            tx_pin,
            rx_pin,
            Option::<AnyIOPin>::None,
            Option::<AnyIOPin>::None,
            &config,
        )
        .map_err(|_| Error::Init("UART setup failed"))?;
        let (tx, rx) = uart.into_split();

        let led_gpios = leds.pins().each_ref().map(|pin| pin.pin());
        info!(
            "board: LEDs on GPIO {:?}, UART1 tx={} rx={} @ {} baud",
            led_gpios, tx_gpio, rx_gpio, UART_BAUD
        );
        Ok(Self {
            leds,
            tx: UartTx(tx),
            rx,
        })
    }

    /// Split off the outputs and start the receive thread.
    pub fn start_rx(
        self,
        console: &'static Console,
    ) -> Result<(LedBank<LedPin>, UartTx), Error> {
        let mut rx = self.rx;
        std::thread::Builder::new()
            .name("uart-rx".into())
            .stack_size(4096)
            .spawn(move || {
                let mut byte = [0u8; 1];
                loop {
                    match rx.read(&mut byte, BLOCK) {
                        Ok(1) => {
                            console.on_rx_byte(byte[0]);
                        }
                        Ok(_) => {}
                        Err(e) => warn!("uart: read failed: {}", e),
                    }
                }
            })
            .map_err(|_| Error::Init("UART receive thread"))?;
        Ok((self.leds, self.tx))
    }
}
