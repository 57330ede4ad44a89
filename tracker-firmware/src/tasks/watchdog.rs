//! Watchdog refresh task
//!
//! Pets the IWDG well inside its timeout and blinks the green LED as a
//! sign of life.

use defmt::*;
use embassy_stm32::gpio::Output;
use embassy_stm32::peripherals::IWDG;
use embassy_stm32::wdg::IndependentWatchdog;
use embassy_time::{Duration, Ticker};

use crate::tick::{seconds_since, SYSTEM_TICKS};

/// Refresh interval in milliseconds
pub const PET_INTERVAL_MS: u64 = 1000;

/// Log uptime every this many refreshes
const UPTIME_LOG_EVERY: u32 = 60;

#[embassy_executor::task]
pub async fn watchdog_task(mut wdg: IndependentWatchdog<'static, IWDG>, mut led: Output<'static>) {
    info!("Watchdog task started");

    let boot_tick = SYSTEM_TICKS.now();
    let mut ticker = Ticker::every(Duration::from_millis(PET_INTERVAL_MS));
    let mut pets: u32 = 0;

    loop {
        ticker.next().await;

        wdg.pet();
        led.toggle();

        pets = pets.wrapping_add(1);
        if pets % UPTIME_LOG_EVERY == 0 {
            info!("Uptime {} s", seconds_since(boot_tick));
        }
    }
}
