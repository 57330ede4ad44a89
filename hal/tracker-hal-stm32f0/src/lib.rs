//! STM32F0-specific HAL for the tracker firmware
//!
//! Physical side of the peripheral descriptors: GPIO ports and lines,
//! SPI/I2C/USART blocks and the independent watchdog, plus the board
//! tables that map logical roles onto them.
//!
//! - STM32F091RC (Arribada v2 tracker)
//!
//! # Features
//!
//! - `stm32f091rc` - Enable embassy-stm32 support for STM32F091RC
//! - `embassy` - Conversions from descriptors to embassy-stm32 configs
//! - `defmt` - Enable debug formatting support
//!
//! Without a chip feature the crate builds on the host, which is how the
//! board tables are tested.

#![no_std]

pub mod boards;
pub mod gpio;
pub mod i2c;
pub mod iwdg;
pub mod scb;
pub mod spi;
pub mod uart;

#[cfg(feature = "embassy")]
pub mod embassy;

// Re-export shared types from tracker-hal
pub use tracker_hal::registry::{Descriptor, LogicalId, LookupError, PeripheralClass};
