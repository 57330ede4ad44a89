//! Hardware-stacked exception frame

/// EXC_RETURN bit selecting the process stack pointer
pub const EXC_RETURN_SPSEL: u32 = 1 << 2;

/// Number of words the core pushes on exception entry
pub const FRAME_WORDS: usize = 8;

/// Stack the core pushed the frame onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StackSource {
    /// MSP: handler mode or thread mode without a process stack
    Main,
    /// PSP: thread mode on the process stack
    Process,
}

impl StackSource {
    /// Decode the stack source from the EXC_RETURN value found in LR
    pub const fn from_exc_return(exc_return: u32) -> Self {
        if exc_return & EXC_RETURN_SPSEL != 0 {
            StackSource::Process
        } else {
            StackSource::Main
        }
    }
}

/// Frame could not be built from the given words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Fewer than [`FRAME_WORDS`] words available
    Truncated { len: usize },
}

/// Registers the core saves on exception entry, in stacking order
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaultFrame {
    pub r0: u32,
    pub r1: u32,
    pub r2: u32,
    pub r3: u32,
    pub r12: u32,
    /// Link register at the time of the fault
    pub lr: u32,
    /// Address of the faulting (or next) instruction
    pub pc: u32,
    pub xpsr: u32,
}

impl FaultFrame {
    /// Build a frame from eight stacked words
    pub const fn from_words(words: [u32; FRAME_WORDS]) -> Self {
        Self {
            r0: words[0],
            r1: words[1],
            r2: words[2],
            r3: words[3],
            r12: words[4],
            lr: words[5],
            pc: words[6],
            xpsr: words[7],
        }
    }

    /// Build a frame from the start of `words`; extra words are ignored
    pub fn from_slice(words: &[u32]) -> Result<Self, FrameError> {
        let head: [u32; FRAME_WORDS] = words
            .get(..FRAME_WORDS)
            .and_then(|w| <[u32; FRAME_WORDS]>::try_from(w).ok())
            .ok_or(FrameError::Truncated { len: words.len() })?;
        Ok(Self::from_words(head))
    }

    /// Words in stacking order
    pub const fn to_words(&self) -> [u32; FRAME_WORDS] {
        [
            self.r0, self.r1, self.r2, self.r3, self.r12, self.lr, self.pc, self.xpsr,
        ]
    }

    /// Active exception number from IPSR bits of xPSR (0 = thread mode)
    pub const fn exception_number(&self) -> u16 {
        (self.xpsr & 0x1FF) as u16
    }

    /// Thumb state bit; a clear T bit means the fault was an invalid state
    pub const fn thumb(&self) -> bool {
        self.xpsr & (1 << 24) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_source_from_exc_return() {
        assert_eq!(StackSource::from_exc_return(0xFFFF_FFFD), StackSource::Process);
        assert_eq!(StackSource::from_exc_return(0xFFFF_FFF9), StackSource::Main);
        assert_eq!(StackSource::from_exc_return(0xFFFF_FFF1), StackSource::Main);
    }

    #[test]
    fn test_from_words_order() {
        let frame = FaultFrame::from_words([0, 1, 2, 3, 12, 0xAAAA, 0xBBBB, 0x0100_0000]);
        assert_eq!(frame.r0, 0);
        assert_eq!(frame.r1, 1);
        assert_eq!(frame.r2, 2);
        assert_eq!(frame.r3, 3);
        assert_eq!(frame.r12, 12);
        assert_eq!(frame.lr, 0xAAAA);
        assert_eq!(frame.pc, 0xBBBB);
        assert_eq!(frame.xpsr, 0x0100_0000);
        assert!(frame.thumb());
    }

    #[test]
    fn test_from_slice_truncated() {
        assert_eq!(
            FaultFrame::from_slice(&[1, 2, 3]),
            Err(FrameError::Truncated { len: 3 })
        );
        let long = [7u32; 12];
        assert_eq!(FaultFrame::from_slice(&long).map(|f| f.xpsr), Ok(7));
    }

    #[test]
    fn test_layout_matches_stacking() {
        assert_eq!(core::mem::size_of::<FaultFrame>(), FRAME_WORDS * 4);
    }

    #[test]
    fn test_exception_number() {
        let mut frame = FaultFrame::default();
        frame.xpsr = 0x0100_0003;
        assert_eq!(frame.exception_number(), 3);
    }
}
