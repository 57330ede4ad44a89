//! Tracker Hardware Abstraction Layer
//!
//! Board-agnostic half of the tracker's hardware boundary. Chip HALs and
//! board definitions build on the types here; nothing in this crate
//! touches a register.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tracker-firmware (boot, fault handler) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tracker-hal-stm32f0 (instances, board) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tracker-hal (this crate - model)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`] - Logical identifiers and descriptor tables
//! - [`gpio`], [`spi`], [`i2c`], [`uart`] - Per-class init parameters
//! - [`watchdog`] - Independent watchdog configuration
//! - [`fault`] - Fault frame decode and the capture state machine
//! - [`tick`] - Monotonic SysTick counter

#![no_std]
#![deny(unsafe_code)]

pub mod fault;
pub mod gpio;
pub mod i2c;
pub mod registry;
pub mod spi;
pub mod tick;
pub mod uart;
pub mod watchdog;

// Re-export key types at crate root for convenience
pub use fault::{FaultCapture, FaultFrame, FaultRecord, FaultSink, FaultStatus, StackSource};
pub use gpio::GpioConfig;
pub use i2c::I2cConfig;
pub use registry::{
    Descriptor, DescriptorTable, LogicalId, LookupError, PeripheralClass, PhysicalInstance,
};
pub use spi::SpiConfig;
pub use tick::{TickCounter, TickError};
pub use uart::{OverflowPolicy, UartConfig};
pub use watchdog::WatchdogConfig;
