//! I2C buses on the Arribada v2 tracker

use tracker_hal::i2c::I2cConfig;
use tracker_hal::registry::{Descriptor, DescriptorTable};

use crate::i2c::{I2cInstance, TIMING_STANDARD_HSI};

tracker_hal::logical_ids! {
    /// Logical I2C buses
    pub enum I2cBus: I2c {
        I2c1,
        I2c2,
    }
}

pub const I2C_TOTAL_NUMBER: usize = I2cBus::COUNT;

/// Default blocking timeout for I2C transactions
pub const I2C_TIMEOUT_MS: u32 = 1000;

pub type I2cDescriptor = Descriptor<I2cInstance, I2cConfig>;
pub type I2cTable = DescriptorTable<I2cBus, I2cInstance, I2cConfig, I2C_TOTAL_NUMBER>;

/// I2C descriptors, one per [`I2cBus`]
pub static I2C_INITS: I2cTable = tracker_hal::descriptor_table!(I2cBus {
    I2c1 => Descriptor::new(I2cInstance::I2c1, I2cConfig::standard(TIMING_STANDARD_HSI)),
    I2c2 => Descriptor::new(I2cInstance::I2c2, I2cConfig::standard(TIMING_STANDARD_HSI)),
});
