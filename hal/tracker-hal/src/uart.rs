//! UART configuration and receive-overflow policy
//!
//! Besides the line settings, every UART entry declares what the receive
//! buffer does when it is full. The policy is part of the table entry so
//! the buffering layer reads it from the same descriptor as the baud rate.

/// UART init parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
    /// Enabled directions
    pub direction: Direction,
    /// RTS/CTS handshaking
    pub flow_control: FlowControl,
    /// Receiver oversampling
    pub oversampling: Oversampling,
    /// Receive buffer behavior when full
    pub rx_overflow: OverflowPolicy,
}

impl UartConfig {
    /// 115200 8N1, both directions, no flow control, safe overflow
    pub const DEFAULT: Self = Self {
        baudrate: 115_200,
        data_bits: DataBits::Eight,
        parity: Parity::None,
        stop_bits: StopBits::One,
        direction: Direction::TxRx,
        flow_control: FlowControl::None,
        oversampling: Oversampling::By16,
        rx_overflow: OverflowPolicy::Safe,
    };

    /// 8N1 at `baudrate` with the given overflow policy
    pub const fn new(baudrate: u32, rx_overflow: OverflowPolicy) -> Self {
        Self {
            baudrate,
            rx_overflow,
            ..Self::DEFAULT
        }
    }

    /// Bits on the wire per character, start bit included
    pub const fn frame_bits(&self) -> u32 {
        let data = match self.data_bits {
            DataBits::Seven => 7,
            DataBits::Eight => 8,
            DataBits::Nine => 9,
        };
        let parity = match self.parity {
            Parity::None => 0,
            Parity::Even | Parity::Odd => 1,
        };
        let stop = match self.stop_bits {
            StopBits::One => 1,
            StopBits::Two => 2,
        };
        1 + data + parity + stop
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

/// Enabled directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    TxRx,
    TxOnly,
    RxOnly,
}

impl Direction {
    pub const fn has_rx(self) -> bool {
        matches!(self, Direction::TxRx | Direction::RxOnly)
    }

    pub const fn has_tx(self) -> bool {
        matches!(self, Direction::TxRx | Direction::TxOnly)
    }
}

/// Hardware flow control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlowControl {
    None,
    Rts,
    Cts,
    RtsCts,
}

/// Receiver oversampling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Oversampling {
    By16,
    By8,
}

/// What the receive buffer does with a new byte once it is full
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OverflowPolicy {
    /// Newest data overwrites the oldest
    Destructive,
    /// Newest data is dropped, oldest preserved
    Safe,
}

/// Outcome for one received byte under an [`OverflowPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Admission {
    /// Buffer has room; append
    Store,
    /// Buffer full; discard the oldest byte, then append
    EvictOldest,
    /// Buffer full; discard the incoming byte
    Reject,
}

impl OverflowPolicy {
    /// Decide what to do with an incoming byte
    pub const fn admit(self, buffer_full: bool) -> Admission {
        match (buffer_full, self) {
            (false, _) => Admission::Store,
            (true, OverflowPolicy::Destructive) => Admission::EvictOldest,
            (true, OverflowPolicy::Safe) => Admission::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admission_with_room() {
        assert_eq!(OverflowPolicy::Destructive.admit(false), Admission::Store);
        assert_eq!(OverflowPolicy::Safe.admit(false), Admission::Store);
    }

    #[test]
    fn test_admission_when_full() {
        assert_eq!(
            OverflowPolicy::Destructive.admit(true),
            Admission::EvictOldest
        );
        assert_eq!(OverflowPolicy::Safe.admit(true), Admission::Reject);
    }

    #[test]
    fn test_frame_bits() {
        assert_eq!(UartConfig::DEFAULT.frame_bits(), 10);
        let config = UartConfig {
            parity: Parity::Even,
            stop_bits: StopBits::Two,
            ..UartConfig::DEFAULT
        };
        assert_eq!(config.frame_bits(), 12);
    }

    #[test]
    fn test_new_keeps_line_defaults() {
        let config = UartConfig::new(9600, OverflowPolicy::Destructive);
        assert_eq!(config.baudrate, 9600);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.rx_overflow, OverflowPolicy::Destructive);
    }

    #[test]
    fn test_direction() {
        assert!(Direction::TxOnly.has_tx());
        assert!(!Direction::TxOnly.has_rx());
        assert!(Direction::TxRx.has_rx());
    }
}
