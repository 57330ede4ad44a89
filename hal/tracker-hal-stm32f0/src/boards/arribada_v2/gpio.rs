//! GPIO roles on the Arribada v2 tracker

use tracker_hal::gpio::{GpioConfig, GpioMode, Pull, Speed};
use tracker_hal::registry::{Descriptor, DescriptorTable};

use crate::gpio::{pa, pb, pc, pd, GpioLine};

tracker_hal::logical_ids! {
    /// Logical GPIO roles
    pub enum GpioPin: Gpio {
        SpareGpio,
        /// GPS one-pulse-per-second output
        OnePps,
        Gpio1,
        Gpio2,
        Gpio3,
        /// USB VBUS sense
        Vusb,
        /// Saltwater switch
        Sws,
        ReedSwitch,
        Spi1CsBt,
        Spi2CsArg,
        Spi2CsFlash,
        Gpout,
        BtGpio,
        UsbId,
        AuxEnable,
        Led1Green,
        Led2Red,
        /// Magnetometer data ready
        DrdyM,
        /// Magnetometer interrupt
        IntM,
        /// Accelerometer/gyro data enable
        DenAg,
        Int1Ag,
        Int2Ag,
        Uart1Tx,
        Uart1Rx,
        Uart2Tx,
        Uart3Tx,
        Uart3Rx,
        Uart3Rts,
        Uart3Cts,
        I2c1Scl,
        I2c1Sda,
        I2c2Scl,
        I2c2Sda,
        Spi1Sck,
        Spi1Miso,
        Spi1Mosi,
        Spi2Sck,
        Spi2Miso,
        Spi2Mosi,
    }
}

/// Number of GPIO roles
pub const GPIO_TOTAL_NUMBER: usize = GpioPin::COUNT;

pub type GpioDescriptor = Descriptor<GpioLine, GpioConfig>;
pub type GpioTable = DescriptorTable<GpioPin, GpioLine, GpioConfig, GPIO_TOTAL_NUMBER>;

const AF0: u8 = 0;
const AF1: u8 = 1;
const AF4: u8 = 4;

const fn d(line: GpioLine, init: GpioConfig) -> GpioDescriptor {
    Descriptor::new(line, init)
}

/// GPIO descriptors, one per [`GpioPin`]
pub static GPIO_INITS: GpioTable = tracker_hal::descriptor_table!(GpioPin {
    SpareGpio => d(pc(0), GpioConfig::analog()),
    OnePps => d(pa(0), GpioConfig::interrupt(GpioMode::InterruptRising, Pull::Down)),
    Gpio1 => d(pc(1), GpioConfig::analog()),
    Gpio2 => d(pc(5), GpioConfig::analog()),
    Gpio3 => d(pc(6), GpioConfig::analog()),
    Vusb => d(pa(8), GpioConfig::interrupt(GpioMode::InterruptBoth, Pull::Down)),
    Sws => d(pc(7), GpioConfig::input(Pull::None)),
    ReedSwitch => d(pc(8), GpioConfig::interrupt(GpioMode::InterruptFalling, Pull::Up)),
    Spi1CsBt => d(pa(4), GpioConfig::output_fast(Speed::High)),
    Spi2CsArg => d(pb(12), GpioConfig::output_fast(Speed::High)),
    Spi2CsFlash => d(pc(4), GpioConfig::output_fast(Speed::High)),
    Gpout => d(pc(9), GpioConfig::output()),
    BtGpio => d(pb(0), GpioConfig::input(Pull::Down)),
    UsbId => d(pa(15), GpioConfig::input(Pull::Up)),
    AuxEnable => d(pb(1), GpioConfig::output()),
    Led1Green => d(pb(2), GpioConfig::output()),
    Led2Red => d(pc(12), GpioConfig::output()),
    DrdyM => d(pc(13), GpioConfig::interrupt(GpioMode::InterruptRising, Pull::None)),
    IntM => d(pb(7), GpioConfig::interrupt(GpioMode::InterruptRising, Pull::None)),
    DenAg => d(pd(2), GpioConfig::output()),
    Int1Ag => d(pc(14), GpioConfig::interrupt(GpioMode::InterruptRising, Pull::None)),
    Int2Ag => d(pc(15), GpioConfig::interrupt(GpioMode::InterruptRising, Pull::None)),
    Uart1Tx => d(pa(9), GpioConfig::alternate(AF1, Pull::None, Speed::High)),
    Uart1Rx => d(pa(10), GpioConfig::alternate(AF1, Pull::Up, Speed::High)),
    Uart2Tx => d(pa(2), GpioConfig::alternate(AF1, Pull::None, Speed::High)),
    Uart3Tx => d(pc(10), GpioConfig::alternate(AF1, Pull::None, Speed::High)),
    Uart3Rx => d(pc(11), GpioConfig::alternate(AF1, Pull::Up, Speed::High)),
    Uart3Rts => d(pb(14), GpioConfig::alternate(AF4, Pull::None, Speed::High)),
    Uart3Cts => d(pa(6), GpioConfig::alternate(AF4, Pull::None, Speed::High)),
    I2c1Scl => d(pb(8), GpioConfig::alternate_open_drain(AF1, Pull::Up)),
    I2c1Sda => d(pb(9), GpioConfig::alternate_open_drain(AF1, Pull::Up)),
    I2c2Scl => d(pb(10), GpioConfig::alternate_open_drain(AF1, Pull::Up)),
    I2c2Sda => d(pb(11), GpioConfig::alternate_open_drain(AF1, Pull::Up)),
    Spi1Sck => d(pb(3), GpioConfig::alternate(AF0, Pull::None, Speed::High)),
    Spi1Miso => d(pb(4), GpioConfig::alternate(AF0, Pull::None, Speed::High)),
    Spi1Mosi => d(pb(5), GpioConfig::alternate(AF0, Pull::None, Speed::High)),
    Spi2Sck => d(pb(13), GpioConfig::alternate(AF0, Pull::None, Speed::High)),
    Spi2Miso => d(pc(2), GpioConfig::alternate(AF1, Pull::None, Speed::High)),
    Spi2Mosi => d(pc(3), GpioConfig::alternate(AF1, Pull::None, Speed::High)),
});
