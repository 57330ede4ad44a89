//! Arribada v2 tracker board
//!
//! Maps every logical peripheral role on the board to its STM32F091
//! instance and init parameters. Drivers and boot code resolve roles
//! through the tables here and never name a physical instance directly.
//!
//! Several roles can share one physical bus: the accelerometer and the
//! battery monitor both sit on I2C2, reached through [`I2C_AXL`] and
//! [`I2C_BATTERY`].

pub mod gpio;
pub mod i2c;
pub mod spi;
pub mod uart;

pub use gpio::{GpioDescriptor, GpioPin, GPIO_INITS, GPIO_TOTAL_NUMBER};
pub use i2c::{I2cBus, I2cDescriptor, I2C_INITS, I2C_TIMEOUT_MS, I2C_TOTAL_NUMBER};
pub use spi::{SpiBus, SpiDescriptor, SPI_INITS, SPI_TIMEOUT_MS, SPI_TOTAL_NUMBER};
pub use uart::{
    overflow_policy, UartDescriptor, UartPort, UART_INITS, UART_RX_BUF_SIZE, UART_TIMEOUT_MS,
    UART_TOTAL_NUMBER,
};

use tracker_hal::registry::{Descriptor, LogicalId, LookupError, PeripheralClass};
use tracker_hal::watchdog::{WatchdogConfig, WatchdogPrescaler};

use crate::gpio::{pa, pb, GpioLine, LineAllocator};
use crate::iwdg::Iwdg;
use crate::uart::UsartInstance;

// Logical device mappings to physical buses
/// GPS receiver
pub const GPS_UART: UartPort = UartPort::Uart1;
/// Debug console
pub const PRINTF_UART: UartPort = UartPort::Uart2;
/// Accelerometer/gyro
pub const I2C_AXL: I2cBus = I2cBus::I2c2;
/// Battery fuel gauge, shares the bus with the accelerometer
pub const I2C_BATTERY: I2cBus = I2cBus::I2c2;
/// Pressure sensor
pub const I2C_PRESSURE: I2cBus = I2cBus::I2c1;
/// Bluetooth module
pub const SPI_BLE: SpiBus = SpiBus::Spi1;
/// External flash
pub const SPI_FLASH: SpiBus = SpiBus::Spi2;

// Opened by boot code through typed embassy peripherals; `verify` checks
// the tables against them.
/// USART behind [`PRINTF_UART`]
pub const CONSOLE_USART: UsartInstance = UsartInstance::Usart2;
/// Console transmit line ([`GpioPin::Uart2Tx`])
pub const CONSOLE_TX_LINE: GpioLine = pa(2);
/// Status LED line ([`GpioPin::Led1Green`])
pub const STATUS_LED_LINE: GpioLine = pb(2);

/// Flash filesystem device index
pub const FS_DEVICE: u8 = 0;

/// Core clock after reset (HSI)
pub const CORE_CLOCK_HZ: u32 = 8_000_000;

/// SysTick interrupt rate
pub const SYSTICK_HZ: u32 = 1000;

const IWDG_CONFIG: WatchdogConfig = WatchdogConfig::new(WatchdogPrescaler::Div256, 3124);

/// Independent watchdog handle, roughly 20 s at the nominal LSI rate
pub static IWDG_INIT: Descriptor<Iwdg, WatchdogConfig> = Descriptor::new(Iwdg, IWDG_CONFIG);

const _: () = assert!(GPIO_TOTAL_NUMBER == 39, "GPIO role list changed");
const _: () = assert!(UART_RX_BUF_SIZE.is_power_of_two());
const _: () = assert!(IWDG_CONFIG.validate().is_ok(), "invalid watchdog configuration");

/// Descriptor of any class, returned by [`resolve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyDescriptor {
    Gpio(&'static GpioDescriptor),
    Spi(&'static SpiDescriptor),
    I2c(&'static I2cDescriptor),
    Uart(&'static UartDescriptor),
}

impl AnyDescriptor {
    pub fn class(&self) -> PeripheralClass {
        match self {
            AnyDescriptor::Gpio(_) => PeripheralClass::Gpio,
            AnyDescriptor::Spi(_) => PeripheralClass::Spi,
            AnyDescriptor::I2c(_) => PeripheralClass::I2c,
            AnyDescriptor::Uart(_) => PeripheralClass::Uart,
        }
    }
}

/// Look up a descriptor by class and raw index
///
/// Any index at or beyond the class's count, the count itself included,
/// is rejected with [`LookupError::OutOfRange`].
pub fn resolve(class: PeripheralClass, index: usize) -> Result<AnyDescriptor, LookupError> {
    Ok(match class {
        PeripheralClass::Gpio => AnyDescriptor::Gpio(GPIO_INITS.resolve_index(index)?),
        PeripheralClass::Spi => AnyDescriptor::Spi(SPI_INITS.resolve_index(index)?),
        PeripheralClass::I2c => AnyDescriptor::I2c(I2C_INITS.resolve_index(index)?),
        PeripheralClass::Uart => AnyDescriptor::Uart(UART_INITS.resolve_index(index)?),
    })
}

/// Number of roles in a class
pub const fn count(class: PeripheralClass) -> usize {
    match class {
        PeripheralClass::Gpio => GPIO_TOTAL_NUMBER,
        PeripheralClass::Spi => SPI_TOTAL_NUMBER,
        PeripheralClass::I2c => I2C_TOTAL_NUMBER,
        PeripheralClass::Uart => UART_TOTAL_NUMBER,
    }
}

/// Default blocking timeout for a class, `None` for GPIO
pub const fn default_timeout_ms(class: PeripheralClass) -> Option<u32> {
    match class {
        PeripheralClass::Gpio => None,
        PeripheralClass::Spi => Some(SPI_TIMEOUT_MS),
        PeripheralClass::I2c => Some(I2C_TIMEOUT_MS),
        PeripheralClass::Uart => Some(UART_TIMEOUT_MS),
    }
}

/// Board-level structural problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    Table(LookupError),
    /// Two GPIO roles wired to the same physical line
    SharedLine { first: GpioPin, second: GpioPin },
    /// Alternate-function roles without an AF number, or the reverse
    InconsistentGpio(GpioPin),
    /// Bus init parameters the hardware cannot take
    InvalidInit { class: PeripheralClass, index: usize },
    /// Table disagrees with a line or port boot code opens directly
    BootWiring(GpioPin),
}

impl From<LookupError> for BoardError {
    fn from(e: LookupError) -> Self {
        BoardError::Table(e)
    }
}

/// Re-check every table before any hardware is touched
pub fn verify() -> Result<(), BoardError> {
    GPIO_INITS.verify()?;
    SPI_INITS.verify()?;
    I2C_INITS.verify()?;
    UART_INITS.verify()?;

    for (bus, desc) in SPI_INITS.iter() {
        if !desc.init.is_valid() {
            return Err(BoardError::InvalidInit {
                class: PeripheralClass::Spi,
                index: bus.index(),
            });
        }
    }
    for (bus, desc) in I2C_INITS.iter() {
        if !desc.init.is_valid() {
            return Err(BoardError::InvalidInit {
                class: PeripheralClass::I2c,
                index: bus.index(),
            });
        }
    }

    if UART_INITS[PRINTF_UART].instance != CONSOLE_USART
        || GPIO_INITS[GpioPin::Uart2Tx].instance != CONSOLE_TX_LINE
    {
        return Err(BoardError::BootWiring(GpioPin::Uart2Tx));
    }
    if GPIO_INITS[GpioPin::Led1Green].instance != STATUS_LED_LINE {
        return Err(BoardError::BootWiring(GpioPin::Led1Green));
    }

    let mut lines = LineAllocator::new();
    for (pin, desc) in GPIO_INITS.iter() {
        if !desc.init.is_consistent() {
            return Err(BoardError::InconsistentGpio(pin));
        }
        if lines.claim(desc.instance).is_err() {
            let first = GPIO_INITS
                .iter()
                .find(|(_, other)| other.instance == desc.instance)
                .map_or(pin, |(other, _)| other);
            return Err(BoardError::SharedLine { first, second: pin });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::Port;
    use crate::i2c::I2cInstance;
    use crate::spi::SpiInstance;
    use tracker_hal::uart::OverflowPolicy;

    #[test]
    fn test_board_verifies() {
        assert_eq!(verify(), Ok(()));
    }

    #[test]
    fn test_aliases_resolve_to_wired_instance() {
        assert_eq!(UART_INITS[GPS_UART].instance, UsartInstance::Usart1);
        assert_eq!(UART_INITS[PRINTF_UART].instance, UsartInstance::Usart2);
        assert_eq!(I2C_INITS[I2C_PRESSURE].instance, I2cInstance::I2c1);
        assert_eq!(SPI_INITS[SPI_BLE].instance, SpiInstance::Spi1);
        assert_eq!(SPI_INITS[SPI_FLASH].instance, SpiInstance::Spi2);
    }

    #[test]
    fn test_shared_i2c_bus() {
        let axl = I2C_INITS.resolve(I2C_AXL);
        let battery = I2C_INITS.resolve(I2C_BATTERY);
        assert_eq!(axl.instance, I2cInstance::I2c2);
        assert!(core::ptr::eq(axl, battery));
    }

    #[test]
    fn test_boot_wiring_matches_tables() {
        assert_eq!(UART_INITS[PRINTF_UART].instance, CONSOLE_USART);
        assert_eq!(GPIO_INITS[GpioPin::Uart2Tx].instance, pa(2));
        assert_eq!(GPIO_INITS[GpioPin::Led1Green].instance, pb(2));
        assert_eq!(CONSOLE_TX_LINE, pa(2));
        assert_eq!(STATUS_LED_LINE, pb(2));
    }

    #[test]
    fn test_overflow_policies() {
        assert_eq!(overflow_policy(UartPort::Uart1), OverflowPolicy::Destructive);
        assert_eq!(overflow_policy(UartPort::Uart2), OverflowPolicy::Safe);
        assert_eq!(overflow_policy(UartPort::Uart3), OverflowPolicy::Safe);
    }

    #[test]
    fn test_timeouts() {
        assert_eq!(default_timeout_ms(PeripheralClass::Gpio), None);
        assert_eq!(default_timeout_ms(PeripheralClass::Spi), Some(1000));
        assert_eq!(default_timeout_ms(PeripheralClass::I2c), Some(1000));
        assert_eq!(default_timeout_ms(PeripheralClass::Uart), Some(1000));
    }

    #[test]
    fn test_resolve_rejects_count() {
        for class in PeripheralClass::ALL {
            let n = count(class);
            assert!(resolve(class, n - 1).is_ok());
            assert_eq!(
                resolve(class, n),
                Err(LookupError::OutOfRange {
                    class,
                    index: n,
                    count: n,
                })
            );
        }
    }

    #[test]
    fn test_gpio_port_grouping() {
        let on_b = GPIO_INITS
            .iter()
            .filter(|(_, desc)| desc.instance.port == Port::B)
            .count();
        assert_eq!(on_b, 14);
        assert_eq!(GPIO_INITS[GpioPin::Led1Green].instance.port, Port::B);
        assert_eq!(GPIO_INITS[GpioPin::Led1Green].instance.pin, 2);
    }
}
