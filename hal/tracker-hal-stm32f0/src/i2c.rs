//! I2C blocks on STM32F0

use tracker_hal::registry::PhysicalInstance;

/// I2C peripheral instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cInstance {
    I2c1,
    I2c2,
}

impl PhysicalInstance for I2cInstance {
    fn base_address(&self) -> u32 {
        match self {
            I2cInstance::I2c1 => 0x4000_5400,
            I2cInstance::I2c2 => 0x4000_5800,
        }
    }
}

/// TIMINGR for 100 kHz standard mode from the 8 MHz HSI
pub const TIMING_STANDARD_HSI: u32 = 0x2000_090E;
