//! Independent watchdog configuration

/// Largest value the 12-bit reload and window registers accept
pub const MAX_RELOAD: u16 = 0x0FFF;

/// Watchdog configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchdogError {
    /// Reload value exceeds 12 bits
    ReloadOutOfRange,
    /// Window value exceeds 12 bits
    WindowOutOfRange,
    /// Clock frequency of zero
    NoClock,
    /// Timeout does not fit in `u32` microseconds
    TimeoutOverflow,
}

/// LSI divider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchdogPrescaler {
    Div4,
    Div8,
    Div16,
    Div32,
    Div64,
    Div128,
    Div256,
}

impl WatchdogPrescaler {
    pub const fn divisor(self) -> u32 {
        match self {
            WatchdogPrescaler::Div4 => 4,
            WatchdogPrescaler::Div8 => 8,
            WatchdogPrescaler::Div16 => 16,
            WatchdogPrescaler::Div32 => 32,
            WatchdogPrescaler::Div64 => 64,
            WatchdogPrescaler::Div128 => 128,
            WatchdogPrescaler::Div256 => 256,
        }
    }
}

/// Watchdog handle: prescaler, reload and window values
///
/// A window equal to [`MAX_RELOAD`] disables windowed mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchdogConfig {
    pub prescaler: WatchdogPrescaler,
    pub reload: u16,
    pub window: u16,
}

impl WatchdogConfig {
    /// Non-windowed watchdog
    pub const fn new(prescaler: WatchdogPrescaler, reload: u16) -> Self {
        Self {
            prescaler,
            reload,
            window: MAX_RELOAD,
        }
    }

    pub const fn validate(&self) -> Result<(), WatchdogError> {
        if self.reload > MAX_RELOAD {
            return Err(WatchdogError::ReloadOutOfRange);
        }
        if self.window > MAX_RELOAD {
            return Err(WatchdogError::WindowOutOfRange);
        }
        Ok(())
    }

    pub const fn is_windowed(&self) -> bool {
        self.window < MAX_RELOAD
    }

    /// Time from the last refresh until reset, in microseconds
    pub fn timeout_us(&self, lsi_hz: u32) -> Result<u32, WatchdogError> {
        if lsi_hz == 0 {
            return Err(WatchdogError::NoClock);
        }
        self.validate()?;
        let ticks = u64::from(self.prescaler.divisor()) * (u64::from(self.reload) + 1);
        u32::try_from(ticks * 1_000_000 / u64::from(lsi_hz))
            .map_err(|_| WatchdogError::TimeoutOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout() {
        let config = WatchdogConfig::new(WatchdogPrescaler::Div256, 3124);
        assert_eq!(config.timeout_us(40_000), Ok(20_000_000));
    }

    #[test]
    fn test_timeout_overflow_on_slow_clock() {
        let config = WatchdogConfig::new(WatchdogPrescaler::Div256, MAX_RELOAD);
        // 1_048_576 ticks at 100 Hz is about 10_486 s
        assert_eq!(config.timeout_us(100), Err(WatchdogError::TimeoutOverflow));
        assert_eq!(config.timeout_us(40_000), Ok(26_214_400));
    }

    #[test]
    fn test_reload_range() {
        let config = WatchdogConfig::new(WatchdogPrescaler::Div4, 0x1000);
        assert_eq!(config.validate(), Err(WatchdogError::ReloadOutOfRange));
        assert_eq!(
            config.timeout_us(40_000),
            Err(WatchdogError::ReloadOutOfRange)
        );
    }

    #[test]
    fn test_window() {
        let mut config = WatchdogConfig::new(WatchdogPrescaler::Div32, 100);
        assert!(!config.is_windowed());
        config.window = 50;
        assert!(config.is_windowed());
        assert_eq!(config.timeout_us(0), Err(WatchdogError::NoClock));
    }
}
