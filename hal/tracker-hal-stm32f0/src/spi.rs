//! SPI blocks on STM32F0

use tracker_hal::registry::PhysicalInstance;

/// SPI peripheral instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiInstance {
    /// APB2
    Spi1,
    /// APB1
    Spi2,
}

impl PhysicalInstance for SpiInstance {
    fn base_address(&self) -> u32 {
        match self {
            SpiInstance::Spi1 => 0x4001_3000,
            SpiInstance::Spi2 => 0x4000_3800,
        }
    }
}
