//! GPIO ports and lines for STM32F0
//!
//! A [`GpioLine`] is the physical side of a GPIO descriptor: which port
//! register block and which bit within it. Several logical roles share a
//! port, so the port is kept alongside the pin number.

use tracker_hal::registry::PhysicalInstance;

/// GPIO port register block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Port {
    /// AHB2 base address of the port's registers
    pub const fn base_address(self) -> u32 {
        0x4800_0000 + 0x400 * self.number() as u32
    }

    /// Zero-based port number (A = 0)
    pub const fn number(self) -> u8 {
        match self {
            Port::A => 0,
            Port::B => 1,
            Port::C => 2,
            Port::D => 3,
            Port::E => 4,
            Port::F => 5,
        }
    }
}

/// One physical GPIO line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioLine {
    pub port: Port,
    /// Bit within the port (0-15)
    pub pin: u8,
}

impl GpioLine {
    pub const fn new(port: Port, pin: u8) -> Self {
        assert!(pin < 16, "GPIO pin number out of range");
        Self { port, pin }
    }

    /// Bit mask within the port's ODR/IDR/BSRR
    pub const fn mask(self) -> u16 {
        1 << self.pin
    }
}

impl PhysicalInstance for GpioLine {
    fn base_address(&self) -> u32 {
        self.port.base_address()
    }
}

/// Shorthand for building lines in board tables
pub const fn pa(pin: u8) -> GpioLine {
    GpioLine::new(Port::A, pin)
}

pub const fn pb(pin: u8) -> GpioLine {
    GpioLine::new(Port::B, pin)
}

pub const fn pc(pin: u8) -> GpioLine {
    GpioLine::new(Port::C, pin)
}

pub const fn pd(pin: u8) -> GpioLine {
    GpioLine::new(Port::D, pin)
}

/// Error claiming a GPIO line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line already claimed by another role
    AlreadyClaimed(GpioLine),
}

/// Tracks which physical lines have been claimed
///
/// Used to check that no two logical roles are wired to the same pin.
#[derive(Debug, Clone, Default)]
pub struct LineAllocator {
    /// One bitmask per port
    claimed: [u16; 6],
}

impl LineAllocator {
    pub const fn new() -> Self {
        Self { claimed: [0; 6] }
    }

    /// Claim a line
    pub fn claim(&mut self, line: GpioLine) -> Result<(), LineError> {
        let slot = &mut self.claimed[line.port.number() as usize];
        if *slot & line.mask() != 0 {
            return Err(LineError::AlreadyClaimed(line));
        }
        *slot |= line.mask();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_addresses() {
        assert_eq!(Port::A.base_address(), 0x4800_0000);
        assert_eq!(Port::C.base_address(), 0x4800_0800);
        assert_eq!(Port::F.base_address(), 0x4800_1400);
    }

    #[test]
    fn test_claim_rejects_shared_line() {
        let mut lines = LineAllocator::new();
        assert_eq!(lines.claim(pb(3)), Ok(()));
        assert_eq!(lines.claim(pb(3)), Err(LineError::AlreadyClaimed(pb(3))));
        // Same pin number on another port is a different line
        assert!(lines.claim(pc(3)).is_ok());
        assert!(lines.claim(pa(3)).is_ok());
    }
}
