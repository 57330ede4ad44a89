//! System tick
//!
//! SysTick fires at [`SYSTICK_HZ`] and advances a process-wide counter.
//! Embassy's time driver runs on a general-purpose timer, so SysTick is
//! free for this.

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use cortex_m_rt::exception;

use tracker_hal::tick::{systick_reload, TickCounter};
use tracker_hal_stm32f0::boards::arribada_v2::{CORE_CLOCK_HZ, SYSTICK_HZ};

/// Ticks since SysTick was started
pub static SYSTEM_TICKS: TickCounter = TickCounter::new();

const SYSTICK_RELOAD: u32 = match systick_reload(CORE_CLOCK_HZ, SYSTICK_HZ) {
    Ok(reload) => reload,
    Err(_) => panic!("SYSTICK_HZ not reachable from CORE_CLOCK_HZ"),
};

/// Configure and start SysTick
pub fn start(mut syst: SYST) {
    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(SYSTICK_RELOAD);
    syst.clear_current();
    syst.enable_interrupt();
    syst.enable_counter();
}

/// Seconds elapsed since `start_tick`
pub fn seconds_since(start_tick: u32) -> u32 {
    SYSTEM_TICKS.elapsed_since(start_tick) / SYSTICK_HZ
}

#[exception]
fn SysTick() {
    SYSTEM_TICKS.advance();
}
