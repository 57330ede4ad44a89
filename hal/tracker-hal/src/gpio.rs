//! GPIO line configuration
//!
//! Init parameters for a single GPIO line. The physical side (which port
//! and pin number) is chip-specific and lives in the chip HAL.

/// Electrical mode of a GPIO line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioMode {
    /// Floating or pulled digital input
    Input,
    /// Push-pull output
    OutputPushPull,
    /// Open-drain output
    OutputOpenDrain,
    /// Peripheral-driven, push-pull
    AlternatePushPull,
    /// Peripheral-driven, open-drain (I2C)
    AlternateOpenDrain,
    /// Analog (ADC/DAC or lowest-power unused state)
    Analog,
    /// Input with an EXTI interrupt on the rising edge
    InterruptRising,
    /// Input with an EXTI interrupt on the falling edge
    InterruptFalling,
    /// Input with an EXTI interrupt on both edges
    InterruptBoth,
}

impl GpioMode {
    /// Line is a software-driven output
    pub const fn is_output(self) -> bool {
        matches!(
            self,
            GpioMode::OutputPushPull | GpioMode::OutputOpenDrain
        )
    }

    /// Line is handed to a peripheral through the alternate-function mux
    pub const fn is_alternate(self) -> bool {
        matches!(
            self,
            GpioMode::AlternatePushPull | GpioMode::AlternateOpenDrain
        )
    }

    /// Line raises an external interrupt
    pub const fn is_interrupt(self) -> bool {
        matches!(
            self,
            GpioMode::InterruptRising | GpioMode::InterruptFalling | GpioMode::InterruptBoth
        )
    }
}

/// Internal pull resistor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    #[default]
    None,
    Up,
    Down,
}

/// Output slew rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    #[default]
    Low,
    Medium,
    High,
}

/// GPIO init parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioConfig {
    pub mode: GpioMode,
    pub pull: Pull,
    pub speed: Speed,
    /// Alternate function number, required for the alternate modes
    pub alternate: Option<u8>,
}

impl GpioConfig {
    /// Floating input
    pub const fn input(pull: Pull) -> Self {
        Self {
            mode: GpioMode::Input,
            pull,
            speed: Speed::Low,
            alternate: None,
        }
    }

    /// Push-pull output at low speed
    pub const fn output() -> Self {
        Self {
            mode: GpioMode::OutputPushPull,
            pull: Pull::None,
            speed: Speed::Low,
            alternate: None,
        }
    }

    /// Push-pull output at the given speed (chip selects, enables)
    pub const fn output_fast(speed: Speed) -> Self {
        Self {
            mode: GpioMode::OutputPushPull,
            pull: Pull::None,
            speed,
            alternate: None,
        }
    }

    /// Push-pull alternate function
    pub const fn alternate(af: u8, pull: Pull, speed: Speed) -> Self {
        Self {
            mode: GpioMode::AlternatePushPull,
            pull,
            speed,
            alternate: Some(af),
        }
    }

    /// Open-drain alternate function
    pub const fn alternate_open_drain(af: u8, pull: Pull) -> Self {
        Self {
            mode: GpioMode::AlternateOpenDrain,
            pull,
            speed: Speed::High,
            alternate: Some(af),
        }
    }

    /// External interrupt input
    pub const fn interrupt(mode: GpioMode, pull: Pull) -> Self {
        Self {
            mode,
            pull,
            speed: Speed::Low,
            alternate: None,
        }
    }

    /// Analog / unused
    pub const fn analog() -> Self {
        Self {
            mode: GpioMode::Analog,
            pull: Pull::None,
            speed: Speed::Low,
            alternate: None,
        }
    }

    /// Alternate modes carry an AF number and other modes do not
    pub const fn is_consistent(&self) -> bool {
        self.mode.is_alternate() == self.alternate.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_are_consistent() {
        let configs = [
            GpioConfig::input(Pull::Up),
            GpioConfig::output(),
            GpioConfig::output_fast(Speed::High),
            GpioConfig::alternate(1, Pull::None, Speed::High),
            GpioConfig::alternate_open_drain(1, Pull::Up),
            GpioConfig::interrupt(GpioMode::InterruptRising, Pull::Down),
            GpioConfig::analog(),
        ];
        for config in configs {
            assert!(config.is_consistent());
        }
    }

    #[test]
    fn test_alternate_without_af_is_inconsistent() {
        let config = GpioConfig {
            mode: GpioMode::AlternatePushPull,
            pull: Pull::None,
            speed: Speed::Low,
            alternate: None,
        };
        assert!(!config.is_consistent());
    }

    #[test]
    fn test_mode_predicates() {
        assert!(GpioMode::OutputOpenDrain.is_output());
        assert!(!GpioMode::AlternatePushPull.is_output());
        assert!(GpioMode::InterruptBoth.is_interrupt());
        assert!(!GpioMode::Input.is_interrupt());
    }
}
