//! HardFault handling
//!
//! The entry stub only picks the stack pointer that holds the exception
//! frame (EXC_RETURN bit 2: PSP when set, MSP otherwise) and branches to
//! [`capture_fault`]. Everything else happens in Rust.

use core::arch::global_asm;
use core::cell::RefCell;

use cortex_m::interrupt::{self, Mutex};
use tracker_hal::fault::{DefmtSink, FaultCapture, FaultRecord, HaltPolicy};
use tracker_hal_stm32f0::scb;

static CAPTURE: Mutex<RefCell<FaultCapture>> = Mutex::new(RefCell::new(FaultCapture::new()));

// Thumb-1 only: ARMv6-M has no `tst` with an immediate.
global_asm!(
    ".section .HardFault.user, \"ax\"",
    ".global HardFault",
    ".type HardFault,%function",
    ".thumb_func",
    "HardFault:",
    "    mov r0, lr",
    "    movs r1, #4",
    "    tst r0, r1",
    "    beq 1f",
    "    mrs r1, psp",
    "    b 2f",
    "1:",
    "    mrs r1, msp",
    "2:",
    "    ldr r2, ={capture}",
    "    bx r2",
    "    .ltorg",
    capture = sym capture_fault,
);

/// Record the fault, report it once and halt
///
/// # Safety
///
/// Only reachable from the `HardFault` stub, with `sp` the stack pointer
/// selected by `exc_return`.
unsafe extern "C" fn capture_fault(exc_return: u32, sp: *const u32) -> ! {
    let words = scb::read_stacked_frame(sp);
    let status = scb::read_fault_status();

    interrupt::free(|cs| {
        let mut capture = CAPTURE.borrow(cs).borrow_mut();
        capture.capture(FaultRecord::new(exc_return, words, status), &mut DefmtSink);
    });

    halt(HaltPolicy::for_build())
}

fn halt(policy: HaltPolicy) -> ! {
    match policy {
        HaltPolicy::Breakpoint => cortex_m::asm::bkpt(),
        HaltPolicy::Spin => {}
    }
    loop {
        cortex_m::asm::nop();
    }
}
