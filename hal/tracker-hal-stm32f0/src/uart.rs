//! USART blocks on STM32F0

use tracker_hal::registry::PhysicalInstance;

/// USART peripheral instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UsartInstance {
    /// APB2
    Usart1,
    Usart2,
    Usart3,
}

impl PhysicalInstance for UsartInstance {
    fn base_address(&self) -> u32 {
        match self {
            UsartInstance::Usart1 => 0x4001_3800,
            UsartInstance::Usart2 => 0x4000_4400,
            UsartInstance::Usart3 => 0x4000_4800,
        }
    }
}

/// BRR value for `baudrate` with 16x oversampling
pub const fn brr_by16(pclk_hz: u32, baudrate: u32) -> u32 {
    (pclk_hz + baudrate / 2) / baudrate
}
