//! Tracker Firmware
//!
//! Boot firmware for the Arribada v2 tracker (STM32F091RC). Checks the
//! board's peripheral tables, starts the system tick, brings up the debug
//! console and hands the independent watchdog to a background task.
//!
//! Build with `cargo build -p tracker-firmware --target thumbv6m-none-eabi`.

#![no_std]
#![no_main]

mod fault;
mod tasks;
mod tick;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output};
use embassy_stm32::usart::UartTx;
use embassy_stm32::wdg::IndependentWatchdog;
use {defmt_rtt as _, panic_probe as _};

use tracker_hal::registry::PeripheralClass;
use tracker_hal_stm32f0::boards::arribada_v2::{
    self as board, GpioPin, CONSOLE_TX_LINE, CONSOLE_USART, GPIO_INITS, IWDG_INIT, PRINTF_UART,
    STATUS_LED_LINE, UART_INITS,
};
use tracker_hal_stm32f0::embassy::{speed, usart_config};
use tracker_hal_stm32f0::gpio::{pa, pb};
use tracker_hal_stm32f0::iwdg::LSI_HZ;
use tracker_hal_stm32f0::uart::UsartInstance;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tracker firmware starting...");

    if let Err(e) = board::verify() {
        defmt::panic!("Board tables rejected: {:?}", e);
    }
    for class in PeripheralClass::ALL {
        debug!("{}: {} roles", class, board::count(class));
    }

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    let core = unwrap!(cortex_m::Peripherals::take());
    tick::start(core.SYST);

    // Debug console is transmit-only: USART2 on PA2
    let console = &UART_INITS[PRINTF_UART];
    defmt::assert_eq!(CONSOLE_USART, UsartInstance::Usart2);
    defmt::assert_eq!(CONSOLE_TX_LINE, pa(2));
    debug_assert_eq!(console.instance, CONSOLE_USART);
    debug_assert_eq!(GPIO_INITS[GpioPin::Uart2Tx].instance, CONSOLE_TX_LINE);
    let mut console_tx = unwrap!(UartTx::new_blocking(
        p.USART2,
        p.PA2,
        usart_config(&console.init)
    ));
    unwrap!(console_tx.blocking_write(b"tracker: boot\r\n"));

    // Green status LED on PB2
    let led = &GPIO_INITS[GpioPin::Led1Green];
    defmt::assert_eq!(STATUS_LED_LINE, pb(2));
    debug_assert_eq!(led.instance, STATUS_LED_LINE);
    let led = Output::new(p.PB2, Level::Low, speed(led.init.speed));

    let timeout_us = unwrap!(IWDG_INIT.init.timeout_us(LSI_HZ));
    let mut wdg = IndependentWatchdog::new(p.IWDG, timeout_us);
    wdg.unleash();
    info!("Watchdog running, timeout {} ms", timeout_us / 1000);

    unwrap!(spawner.spawn(tasks::watchdog_task(wdg, led)));

    info!("All tasks spawned");
}
