//! Unrecoverable fault capture
//!
//! The architecture trampoline decides which stack the core pushed the
//! exception frame onto and hands the raw words over. Everything from
//! there on is plain data: frame decode, status decode, a one-way
//! `Running -> Faulted` state machine and a report to a [`FaultSink`].
//!
//! Register reads themselves are chip-side (`tracker-hal-stm32f0::scb`);
//! this module only knows the addresses and how to interpret the bits.

pub mod capture;
pub mod frame;
pub mod status;

#[cfg(feature = "defmt")]
pub use capture::DefmtSink;
pub use capture::{FaultCapture, FaultRecord, FaultSink, FaultState, HaltPolicy};
pub use frame::{FaultFrame, FrameError, StackSource, EXC_RETURN_SPSEL, FRAME_WORDS};
pub use status::{registers, Cfsr, Dfsr, FaultKind, FaultStatus, Hfsr};
