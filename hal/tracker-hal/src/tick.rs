//! Monotonic system tick
//!
//! Advanced from the SysTick interrupt, read from anywhere. Uses
//! `portable-atomic` so the counter works on cores without native
//! read-modify-write atomics (Cortex-M0).

use portable_atomic::{AtomicU32, Ordering};

/// Wrapping tick counter
#[derive(Debug)]
pub struct TickCounter {
    ticks: AtomicU32,
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl TickCounter {
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
        }
    }

    /// Advance by one tick; called once per SysTick interrupt
    pub fn advance(&self) -> u32 {
        self.ticks.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    /// Current tick count
    pub fn now(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Ticks elapsed since `start`, correct across one wrap
    pub fn elapsed_since(&self, start: u32) -> u32 {
        self.now().wrapping_sub(start)
    }
}

/// Largest value the 24-bit SysTick reload register holds
pub const SYSTICK_MAX_RELOAD: u32 = 0x00FF_FFFF;

/// SysTick rate the core clock cannot produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickError {
    /// Tick rate of zero
    NoRate,
    /// Tick rate above the core clock
    RateTooHigh,
    /// Reload does not fit in 24 bits
    ReloadOutOfRange,
}

/// SysTick reload value for `tick_hz` interrupts per second
pub const fn systick_reload(core_clock_hz: u32, tick_hz: u32) -> Result<u32, TickError> {
    if tick_hz == 0 {
        return Err(TickError::NoRate);
    }
    if tick_hz > core_clock_hz {
        return Err(TickError::RateTooHigh);
    }
    let reload = core_clock_hz / tick_hz - 1;
    if reload > SYSTICK_MAX_RELOAD {
        return Err(TickError::ReloadOutOfRange);
    }
    Ok(reload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_monotonic() {
        let counter = TickCounter::new();
        assert_eq!(counter.now(), 0);
        assert_eq!(counter.advance(), 1);
        assert_eq!(counter.advance(), 2);
        assert_eq!(counter.now(), 2);
    }

    #[test]
    fn test_elapsed_across_wrap() {
        let counter = TickCounter::new();
        counter.ticks.store(u32::MAX - 1, Ordering::Relaxed);
        let start = counter.now();
        counter.advance();
        counter.advance();
        counter.advance();
        assert_eq!(counter.now(), 1);
        assert_eq!(counter.elapsed_since(start), 3);
    }

    #[test]
    fn test_systick_reload() {
        assert_eq!(systick_reload(8_000_000, 1000), Ok(7_999));
        assert_eq!(systick_reload(48_000_000, 1000), Ok(47_999));
        assert_eq!(systick_reload(8_000_000, 8_000_000), Ok(0));
    }

    #[test]
    fn test_systick_reload_rejects_bad_rates() {
        assert_eq!(systick_reload(8_000_000, 0), Err(TickError::NoRate));
        assert_eq!(
            systick_reload(8_000_000, 8_000_001),
            Err(TickError::RateTooHigh)
        );
        // 48 MHz at 1 Hz needs a 26-bit reload
        assert_eq!(
            systick_reload(48_000_000, 1),
            Err(TickError::ReloadOutOfRange)
        );
        assert_eq!(systick_reload(16_777_216, 1), Ok(SYSTICK_MAX_RELOAD));
    }
}
