//! Descriptor to embassy-stm32 configuration
//!
//! Drivers built on embassy take their settings from the board tables
//! through these helpers instead of repeating them.

use embassy_stm32::{gpio, usart};
use tracker_hal::gpio::{Pull, Speed};
use tracker_hal::uart::{DataBits, Parity, StopBits, UartConfig};

/// Pull setting for an embassy pin
pub fn pull(pull: Pull) -> gpio::Pull {
    match pull {
        Pull::None => gpio::Pull::None,
        Pull::Up => gpio::Pull::Up,
        Pull::Down => gpio::Pull::Down,
    }
}

/// Output speed for an embassy pin
pub fn speed(speed: Speed) -> gpio::Speed {
    match speed {
        Speed::Low => gpio::Speed::Low,
        Speed::Medium => gpio::Speed::Medium,
        Speed::High => gpio::Speed::High,
    }
}

/// USART configuration from a UART descriptor's init parameters
///
/// Flow control and direction are handled by which pins the caller
/// passes to the embassy constructor.
pub fn usart_config(config: &UartConfig) -> usart::Config {
    let mut out = usart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Seven => usart::DataBits::DataBits7,
        DataBits::Eight => usart::DataBits::DataBits8,
        DataBits::Nine => usart::DataBits::DataBits9,
    };
    out.parity = match config.parity {
        Parity::None => usart::Parity::ParityNone,
        Parity::Even => usart::Parity::ParityEven,
        Parity::Odd => usart::Parity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => usart::StopBits::STOP1,
        StopBits::Two => usart::StopBits::STOP2,
    };
    out
}
