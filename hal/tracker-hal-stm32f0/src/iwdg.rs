//! Independent watchdog on STM32F0

use tracker_hal::registry::PhysicalInstance;

/// Nominal LSI frequency clocking the IWDG
pub const LSI_HZ: u32 = 40_000;

/// The IWDG block (there is only one)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Iwdg;

impl PhysicalInstance for Iwdg {
    fn base_address(&self) -> u32 {
        0x4000_3000
    }
}
