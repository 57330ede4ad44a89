//! SPI buses on the Arribada v2 tracker

use tracker_hal::registry::{Descriptor, DescriptorTable};
use tracker_hal::spi::{BaudPrescaler, SpiConfig};

use crate::spi::SpiInstance;

tracker_hal::logical_ids! {
    /// Logical SPI buses
    pub enum SpiBus: Spi {
        Spi1,
        Spi2,
    }
}

pub const SPI_TOTAL_NUMBER: usize = SpiBus::COUNT;

/// Default blocking timeout for SPI transfers
pub const SPI_TIMEOUT_MS: u32 = 1000;

pub type SpiDescriptor = Descriptor<SpiInstance, SpiConfig>;
pub type SpiTable = DescriptorTable<SpiBus, SpiInstance, SpiConfig, SPI_TOTAL_NUMBER>;

/// SPI descriptors, one per [`SpiBus`]
pub static SPI_INITS: SpiTable = tracker_hal::descriptor_table!(SpiBus {
    // Bluetooth module
    Spi1 => Descriptor::new(
        SpiInstance::Spi1,
        SpiConfig {
            prescaler: BaudPrescaler::Div8,
            ..SpiConfig::DEFAULT
        },
    ),
    // Flash and Argos transceiver
    Spi2 => Descriptor::new(
        SpiInstance::Spi2,
        SpiConfig {
            prescaler: BaudPrescaler::Div2,
            ..SpiConfig::DEFAULT
        },
    ),
});
