//! I2C bus configuration

/// I2C init parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Pre-computed TIMINGR value for the board's I2C kernel clock
    pub timing: u32,
    /// Nominal SCL frequency `timing` was computed for, in Hz
    pub frequency: u32,
    /// Own-address width
    pub addressing: AddressingMode,
    /// Own address when acting as a slave (0 when master only)
    pub own_address: u16,
    /// Secondary 7-bit own address
    pub dual_address: Option<u8>,
    /// Respond to the general call address
    pub general_call: bool,
    /// Allow slave clock stretching
    pub clock_stretching: bool,
}

impl I2cConfig {
    /// Standard mode (100 kHz) with the given timing word
    pub const fn standard(timing: u32) -> Self {
        Self {
            timing,
            frequency: 100_000,
            addressing: AddressingMode::SevenBit,
            own_address: 0,
            dual_address: None,
            general_call: false,
            clock_stretching: true,
        }
    }

    /// Fast mode (400 kHz) with the given timing word
    pub const fn fast(timing: u32) -> Self {
        Self {
            frequency: 400_000,
            ..Self::standard(timing)
        }
    }

    /// Own address fits the configured addressing mode
    pub const fn is_valid(&self) -> bool {
        match self.addressing {
            AddressingMode::SevenBit => self.own_address <= 0x7F,
            AddressingMode::TenBit => self.own_address <= 0x3FF,
        }
    }
}

/// Own-address width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressingMode {
    SevenBit,
    TenBit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let std = I2cConfig::standard(0x2000_090E);
        assert_eq!(std.frequency, 100_000);
        assert!(std.clock_stretching);

        let fast = I2cConfig::fast(0x0090_0D2D);
        assert_eq!(fast.frequency, 400_000);
        assert_eq!(fast.timing, 0x0090_0D2D);
    }

    #[test]
    fn test_own_address_range() {
        let mut config = I2cConfig::standard(0);
        config.own_address = 0x80;
        assert!(!config.is_valid());
        config.addressing = AddressingMode::TenBit;
        assert!(config.is_valid());
    }
}
