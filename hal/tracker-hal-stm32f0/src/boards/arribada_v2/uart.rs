//! UART ports on the Arribada v2 tracker

use tracker_hal::registry::{Descriptor, DescriptorTable};
use tracker_hal::uart::{Direction, FlowControl, OverflowPolicy, UartConfig};

use crate::uart::UsartInstance;

tracker_hal::logical_ids! {
    /// Logical UART ports
    pub enum UartPort: Uart {
        Uart1,
        Uart2,
        Uart3,
    }
}

pub const UART_TOTAL_NUMBER: usize = UartPort::COUNT;

/// Default blocking timeout for UART transfers
pub const UART_TIMEOUT_MS: u32 = 1000;

/// Receive buffer size handed to the buffering layer
pub const UART_RX_BUF_SIZE: usize = 128;

pub type UartDescriptor = Descriptor<UsartInstance, UartConfig>;
pub type UartTable = DescriptorTable<UartPort, UsartInstance, UartConfig, UART_TOTAL_NUMBER>;

/// UART descriptors, one per [`UartPort`]
pub static UART_INITS: UartTable = tracker_hal::descriptor_table!(UartPort {
    // GPS receiver: keep the freshest NMEA data
    Uart1 => Descriptor::new(
        UsartInstance::Usart1,
        UartConfig::new(9600, OverflowPolicy::Destructive),
    ),
    // Debug console
    Uart2 => Descriptor::new(
        UsartInstance::Usart2,
        UartConfig {
            direction: Direction::TxOnly,
            ..UartConfig::new(115_200, OverflowPolicy::Safe)
        },
    ),
    Uart3 => Descriptor::new(
        UsartInstance::Usart3,
        UartConfig {
            flow_control: FlowControl::RtsCts,
            ..UartConfig::new(115_200, OverflowPolicy::Safe)
        },
    ),
});

/// Receive-overflow policy declared for `port`
pub fn overflow_policy(port: UartPort) -> OverflowPolicy {
    UART_INITS.resolve(port).init.rx_overflow
}
