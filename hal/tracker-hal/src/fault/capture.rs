//! Fault capture state machine
//!
//! `Running` moves to `Faulted` exactly once. Whatever happens afterwards
//! (a second capture attempt, repeated polling) leaves the first record
//! in place and reports nothing new.

use super::frame::{FaultFrame, StackSource, FRAME_WORDS};
use super::status::{FaultKind, FaultStatus};

/// Everything captured for one fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaultRecord {
    /// EXC_RETURN value found in LR on handler entry
    pub exc_return: u32,
    /// Stack the frame was read from
    pub source: StackSource,
    pub frame: FaultFrame,
    pub status: FaultStatus,
}

impl FaultRecord {
    pub const fn new(exc_return: u32, words: [u32; FRAME_WORDS], status: FaultStatus) -> Self {
        Self {
            exc_return,
            source: StackSource::from_exc_return(exc_return),
            frame: FaultFrame::from_words(words),
            status,
        }
    }

    pub fn kind(&self) -> FaultKind {
        self.status.kind()
    }
}

/// Receives the diagnostic report
///
/// Runs inside the fault handler, so implementations must not allocate,
/// block on interrupts or take locks an interrupted context might hold.
pub trait FaultSink {
    fn report(&mut self, record: &FaultRecord);
}

/// Handler state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultState {
    Running,
    /// Terminal; left only through reset
    Faulted,
}

/// What the handler does once the report is out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HaltPolicy {
    /// Hit a breakpoint first so an attached debugger stops at the fault
    Breakpoint,
    /// Go straight to the idle loop
    Spin,
}

impl HaltPolicy {
    /// Breakpoint in debug builds, spin in release builds
    pub const fn for_build() -> Self {
        if cfg!(debug_assertions) {
            HaltPolicy::Breakpoint
        } else {
            HaltPolicy::Spin
        }
    }
}

/// Single-shot fault capture
#[derive(Debug, Clone)]
pub struct FaultCapture {
    record: Option<FaultRecord>,
}

impl Default for FaultCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl FaultCapture {
    pub const fn new() -> Self {
        Self { record: None }
    }

    pub fn state(&self) -> FaultState {
        match self.record {
            None => FaultState::Running,
            Some(_) => FaultState::Faulted,
        }
    }

    /// Record of the fault that moved us to `Faulted`
    pub fn record(&self) -> Option<&FaultRecord> {
        self.record.as_ref()
    }

    /// Take the `Running -> Faulted` transition and report it
    ///
    /// The record is stored before the sink runs, so a sink that faults
    /// itself still leaves the machine in `Faulted` with the frame intact.
    /// Once faulted, later calls return the original record without
    /// touching the sink.
    pub fn capture<S: FaultSink>(&mut self, record: FaultRecord, sink: &mut S) -> &FaultRecord {
        let first = self.record.is_none();
        let stored = self.record.get_or_insert(record);
        if first {
            sink.report(stored);
        }
        stored
    }
}

/// Reports faults through defmt
///
/// One `error!` line carries the location; the full frame and status
/// follow at `debug!`.
#[cfg(feature = "defmt")]
pub struct DefmtSink;

#[cfg(feature = "defmt")]
impl FaultSink for DefmtSink {
    fn report(&mut self, record: &FaultRecord) {
        defmt::error!(
            "Hard fault at pc={=u32:#010x} lr={=u32:#010x} ({})",
            record.frame.pc,
            record.frame.lr,
            record.kind()
        );
        defmt::debug!(
            "fault frame {} from {} stack, status {}",
            record.frame,
            record.source,
            record.status
        );
        if let Some(addr) = record.status.bus_fault_address() {
            defmt::debug!("bus fault address {=u32:#010x}", addr);
        }
        if let Some(addr) = record.status.memmanage_address() {
            defmt::debug!("memmanage fault address {=u32:#010x}", addr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSink {
        reports: usize,
        last_pc: Option<u32>,
    }

    impl FaultSink for CountingSink {
        fn report(&mut self, record: &FaultRecord) {
            self.reports += 1;
            self.last_pc = Some(record.frame.pc);
        }
    }

    fn record(exc_return: u32, pc: u32) -> FaultRecord {
        FaultRecord::new(
            exc_return,
            [0, 1, 2, 3, 12, 0x0800_0101, pc, 0x0100_0000],
            FaultStatus::default(),
        )
    }

    #[test]
    fn test_starts_running() {
        let capture = FaultCapture::new();
        assert_eq!(capture.state(), FaultState::Running);
        assert!(capture.record().is_none());
    }

    #[test]
    fn test_capture_transitions_to_faulted() {
        let mut capture = FaultCapture::new();
        let mut sink = CountingSink::default();

        let captured = *capture.capture(record(0xFFFF_FFF9, 0x0800_1234), &mut sink);
        assert_eq!(captured.source, StackSource::Main);
        assert_eq!(captured.frame.pc, 0x0800_1234);
        assert_eq!(capture.state(), FaultState::Faulted);
        assert_eq!(sink.reports, 1);
    }

    #[test]
    fn test_faulted_is_terminal() {
        let mut capture = FaultCapture::new();
        let mut sink = CountingSink::default();

        capture.capture(record(0xFFFF_FFFD, 0x0800_1000), &mut sink);
        let again = *capture.capture(record(0xFFFF_FFF9, 0x0800_2000), &mut sink);

        assert_eq!(again.frame.pc, 0x0800_1000);
        assert_eq!(again.source, StackSource::Process);
        assert_eq!(sink.reports, 1);
        assert_eq!(sink.last_pc, Some(0x0800_1000));

        for _ in 0..3 {
            assert_eq!(capture.state(), FaultState::Faulted);
        }
        assert_eq!(sink.reports, 1);
    }

    #[test]
    fn test_halt_policy_for_build() {
        let expected = if cfg!(debug_assertions) {
            HaltPolicy::Breakpoint
        } else {
            HaltPolicy::Spin
        };
        assert_eq!(HaltPolicy::for_build(), expected);
    }
}
