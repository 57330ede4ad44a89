//! Embassy async tasks

pub mod watchdog;

pub use watchdog::watchdog_task;
