//! System control block fault status and address registers

use bitflags::bitflags;

/// Fixed SCB addresses of the fault status and address registers
pub mod registers {
    /// Configurable Fault Status Register (MMFSR | BFSR | UFSR)
    pub const CFSR: usize = 0xE000_ED28;
    /// HardFault Status Register
    pub const HFSR: usize = 0xE000_ED2C;
    /// Debug Fault Status Register
    pub const DFSR: usize = 0xE000_ED30;
    /// MemManage Fault Address Register
    pub const MMFAR: usize = 0xE000_ED34;
    /// BusFault Address Register
    pub const BFAR: usize = 0xE000_ED38;
    /// Auxiliary Fault Status Register (implementation defined)
    pub const AFSR: usize = 0xE000_ED3C;
}

bitflags! {
    /// Configurable Fault Status Register bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Cfsr: u32 {
        // MemManage
        const IACCVIOL = 1 << 0;
        const DACCVIOL = 1 << 1;
        const MUNSTKERR = 1 << 3;
        const MSTKERR = 1 << 4;
        const MLSPERR = 1 << 5;
        const MMARVALID = 1 << 7;
        // BusFault
        const IBUSERR = 1 << 8;
        const PRECISERR = 1 << 9;
        const IMPRECISERR = 1 << 10;
        const UNSTKERR = 1 << 11;
        const STKERR = 1 << 12;
        const LSPERR = 1 << 13;
        const BFARVALID = 1 << 15;
        // UsageFault
        const UNDEFINSTR = 1 << 16;
        const INVSTATE = 1 << 17;
        const INVPC = 1 << 18;
        const NOCP = 1 << 19;
        const STKOF = 1 << 20;
        const UNALIGNED = 1 << 24;
        const DIVBYZERO = 1 << 25;
    }
}

bitflags! {
    /// HardFault Status Register bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Hfsr: u32 {
        /// Bus error on a vector table read
        const VECTTBL = 1 << 1;
        /// Configurable fault escalated to HardFault
        const FORCED = 1 << 30;
        /// Debug event while halting debug is disabled
        const DEBUGEVT = 1 << 31;
    }
}

bitflags! {
    /// Debug Fault Status Register bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Dfsr: u32 {
        const HALTED = 1 << 0;
        const BKPT = 1 << 1;
        const DWTTRAP = 1 << 2;
        const VCATCH = 1 << 3;
        const EXTERNAL = 1 << 4;
    }
}

const MMFSR_MASK: u32 = 0x0000_00FF;
const BFSR_MASK: u32 = 0x0000_FF00;
const UFSR_MASK: u32 = 0xFFFF_0000;

/// Broad fault category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    /// Vector table read failed
    VectorTable,
    /// Memory protection violation
    MemManage,
    /// Bus error on instruction fetch or data access
    Bus,
    /// Undefined instruction, invalid state, unaligned or divide-by-zero
    Usage,
    /// Debug event escalated
    Debug,
    /// No status bits set (cores without the configurable fault registers)
    Unknown,
}

/// Fault status snapshot read from the SCB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaultStatus {
    pub cfsr: u32,
    pub hfsr: u32,
    pub dfsr: u32,
    pub afsr: u32,
    /// Raw MMFAR; meaningful only when `MMARVALID` is set
    pub mmfar: u32,
    /// Raw BFAR; meaningful only when `BFARVALID` is set
    pub bfar: u32,
}

impl FaultStatus {
    pub fn cfsr_flags(&self) -> Cfsr {
        Cfsr::from_bits_retain(self.cfsr)
    }

    pub fn hfsr_flags(&self) -> Hfsr {
        Hfsr::from_bits_retain(self.hfsr)
    }

    pub fn dfsr_flags(&self) -> Dfsr {
        Dfsr::from_bits_retain(self.dfsr)
    }

    /// MemManage fault address, if the hardware marked it valid
    pub fn memmanage_address(&self) -> Option<u32> {
        self.cfsr_flags()
            .contains(Cfsr::MMARVALID)
            .then_some(self.mmfar)
    }

    /// BusFault address, if the hardware marked it valid
    pub fn bus_fault_address(&self) -> Option<u32> {
        self.cfsr_flags()
            .contains(Cfsr::BFARVALID)
            .then_some(self.bfar)
    }

    /// Escalated from a configurable fault
    pub fn forced(&self) -> bool {
        self.hfsr_flags().contains(Hfsr::FORCED)
    }

    /// Classify the fault from its status bits
    pub fn kind(&self) -> FaultKind {
        if self.hfsr_flags().contains(Hfsr::VECTTBL) {
            FaultKind::VectorTable
        } else if self.cfsr & MMFSR_MASK != 0 {
            FaultKind::MemManage
        } else if self.cfsr & BFSR_MASK != 0 {
            FaultKind::Bus
        } else if self.cfsr & UFSR_MASK != 0 {
            FaultKind::Usage
        } else if self.hfsr_flags().contains(Hfsr::DEBUGEVT) || self.dfsr != 0 {
            FaultKind::Debug
        } else {
            FaultKind::Unknown
        }
    }
}
