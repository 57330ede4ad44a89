//! Fault status register access
//!
//! The only place the fault path reads hardware registers. Addresses come
//! from [`tracker_hal::fault::registers`].

use core::ptr;

use tracker_hal::fault::{registers, FaultStatus, FRAME_WORDS};

/// Read the fault status and fault address registers
///
/// MMFAR and BFAR are read unconditionally; whether they hold a real
/// address is decided later from the valid bits in CFSR.
///
/// # Safety
///
/// Must run on a Cortex-M core, where the SCB lives at the architectural
/// addresses. ARMv6-M does not implement these registers, so the values
/// carry no fault information there.
pub unsafe fn read_fault_status() -> FaultStatus {
    FaultStatus {
        cfsr: read(registers::CFSR),
        hfsr: read(registers::HFSR),
        dfsr: read(registers::DFSR),
        afsr: read(registers::AFSR),
        mmfar: read(registers::MMFAR),
        bfar: read(registers::BFAR),
    }
}

/// Copy the hardware-stacked exception frame starting at `sp`
///
/// # Safety
///
/// `sp` must be the stack pointer selected by EXC_RETURN on exception
/// entry, pointing at [`FRAME_WORDS`] readable words.
pub unsafe fn read_stacked_frame(sp: *const u32) -> [u32; FRAME_WORDS] {
    let mut words = [0u32; FRAME_WORDS];
    for (i, word) in words.iter_mut().enumerate() {
        *word = ptr::read_volatile(sp.add(i));
    }
    words
}

#[inline(always)]
unsafe fn read(addr: usize) -> u32 {
    ptr::read_volatile(addr as *const u32)
}
