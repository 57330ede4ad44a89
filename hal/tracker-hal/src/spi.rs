//! SPI bus configuration
//!
//! Init parameters for an SPI block, shaped after the register-level
//! settings the driver programs into CR1/CR2.

/// SPI init parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Master or slave
    pub role: Role,
    /// Line configuration
    pub direction: Direction,
    /// Frame size in bits (4-16)
    pub data_bits: u8,
    /// Clock polarity and phase
    pub mode: Mode,
    /// Chip-select management
    pub nss: Nss,
    /// Kernel clock divider
    pub prescaler: BaudPrescaler,
    /// Bit order on the wire
    pub bit_order: BitOrder,
    /// Hardware CRC polynomial, `None` when CRC is disabled
    pub crc_polynomial: Option<u16>,
}

impl SpiConfig {
    /// 8-bit full-duplex master, mode 0, software chip select
    pub const DEFAULT: Self = Self {
        role: Role::Master,
        direction: Direction::FullDuplex,
        data_bits: 8,
        mode: Mode::Mode0,
        nss: Nss::Software,
        prescaler: BaudPrescaler::Div16,
        bit_order: BitOrder::MsbFirst,
        crc_polynomial: None,
    };

    /// SCK frequency for a given kernel clock
    pub const fn frequency(&self, pclk_hz: u32) -> u32 {
        pclk_hz / self.prescaler.divisor()
    }

    /// Frame size is one the hardware supports
    pub const fn is_valid(&self) -> bool {
        self.data_bits >= 4 && self.data_bits <= 16
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Bus role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Role {
    Master,
    Slave,
}

/// Data line configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// MOSI and MISO both used
    FullDuplex,
    /// Single bidirectional data line
    HalfDuplex,
    /// Receive only
    RxOnly,
}

/// Chip-select handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Nss {
    /// Chip select driven as a plain GPIO
    Software,
    /// NSS pin is an input (slave / multi-master)
    HardwareInput,
    /// NSS pin driven by the peripheral
    HardwareOutput,
}

/// SCK divider applied to the peripheral clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BaudPrescaler {
    Div2,
    Div4,
    Div8,
    Div16,
    Div32,
    Div64,
    Div128,
    Div256,
}

impl BaudPrescaler {
    pub const fn divisor(self) -> u32 {
        match self {
            BaudPrescaler::Div2 => 2,
            BaudPrescaler::Div4 => 4,
            BaudPrescaler::Div8 => 8,
            BaudPrescaler::Div16 => 16,
            BaudPrescaler::Div32 => 32,
            BaudPrescaler::Div64 => 64,
            BaudPrescaler::Div128 => 128,
            BaudPrescaler::Div256 => 256,
        }
    }
}

/// Bit order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_from_prescaler() {
        let config = SpiConfig {
            prescaler: BaudPrescaler::Div8,
            ..SpiConfig::DEFAULT
        };
        assert_eq!(config.frequency(48_000_000), 6_000_000);
    }

    #[test]
    fn test_frame_size_bounds() {
        assert!(SpiConfig::DEFAULT.is_valid());
        let wide = SpiConfig {
            data_bits: 17,
            ..SpiConfig::DEFAULT
        };
        assert!(!wide.is_valid());
    }

    #[test]
    fn test_mode_split() {
        let (pol, pha): (Polarity, Phase) = Mode::Mode3.into();
        assert_eq!(pol, Polarity::IdleHigh);
        assert_eq!(pha, Phase::CaptureOnSecondTransition);
    }
}
