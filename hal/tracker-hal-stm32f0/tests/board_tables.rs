//! Whole-board checks on the Arribada v2 descriptor tables

use proptest::prelude::*;
use tracker_hal::registry::{LogicalId, LookupError, PeripheralClass, PhysicalInstance};
use tracker_hal::uart::{Admission, OverflowPolicy};
use tracker_hal_stm32f0::boards::arribada_v2::{self as board, AnyDescriptor};
use tracker_hal_stm32f0::gpio::LineAllocator;
use tracker_hal_stm32f0::uart::brr_by16;

fn index_of(desc: AnyDescriptor) -> usize {
    match desc {
        AnyDescriptor::Gpio(d) => board::GPIO_INITS
            .iter()
            .position(|(_, other)| core::ptr::eq(other, d))
            .unwrap(),
        AnyDescriptor::Spi(d) => board::SPI_INITS
            .iter()
            .position(|(_, other)| core::ptr::eq(other, d))
            .unwrap(),
        AnyDescriptor::I2c(d) => board::I2C_INITS
            .iter()
            .position(|(_, other)| core::ptr::eq(other, d))
            .unwrap(),
        AnyDescriptor::Uart(d) => board::UART_INITS
            .iter()
            .position(|(_, other)| core::ptr::eq(other, d))
            .unwrap(),
    }
}

#[test]
fn every_role_has_exactly_one_entry() {
    for class in PeripheralClass::ALL {
        for index in 0..board::count(class) {
            let desc = board::resolve(class, index).unwrap();
            assert_eq!(desc.class(), class);
            assert_eq!(index_of(desc), index);
        }
    }
    assert_eq!(board::GPIO_INITS.len(), board::GpioPin::COUNT);
    assert_eq!(board::SPI_INITS.len(), board::SpiBus::COUNT);
    assert_eq!(board::I2C_INITS.len(), board::I2cBus::COUNT);
    assert_eq!(board::UART_INITS.len(), board::UartPort::COUNT);
}

#[test]
fn table_order_follows_role_order() {
    for (i, (pin, _)) in board::GPIO_INITS.iter().enumerate() {
        assert_eq!(pin.index(), i);
        assert_eq!(board::GpioPin::from_index(i), Some(pin));
    }
    for (i, (port, _)) in board::UART_INITS.iter().enumerate() {
        assert_eq!(port.index(), i);
    }
}

#[test]
fn gpio_lines_are_not_shared() {
    let mut lines = LineAllocator::new();
    for (pin, desc) in board::GPIO_INITS.iter() {
        assert!(lines.claim(desc.instance).is_ok(), "{:?} reuses a line", pin);
    }
}

#[test]
fn gpio_lines_sit_in_port_register_blocks() {
    for (_, desc) in board::GPIO_INITS.iter() {
        let base = desc.instance.base_address();
        assert!((0x4800_0000..=0x4800_1400).contains(&base));
        assert_eq!(base % 0x400, 0);
    }
}

#[test]
fn bus_roles_share_instances_only_through_aliases() {
    let i2c: Vec<_> = board::I2C_INITS.iter().map(|(_, d)| d.instance).collect();
    assert_ne!(i2c[0], i2c[1]);

    let axl = &board::I2C_INITS[board::I2C_AXL];
    let battery = &board::I2C_INITS[board::I2C_BATTERY];
    assert_eq!(axl.instance, battery.instance);
    assert_eq!(axl.init, battery.init);
}

#[test]
fn only_gps_port_evicts_on_overflow() {
    for (port, desc) in board::UART_INITS.iter() {
        let policy = board::overflow_policy(port);
        assert_eq!(policy, desc.init.rx_overflow);
        if port == board::GPS_UART {
            assert_eq!(policy.admit(true), Admission::EvictOldest);
        } else {
            assert_eq!(policy, OverflowPolicy::Safe);
            assert_eq!(policy.admit(true), Admission::Reject);
        }
        assert_eq!(policy.admit(false), Admission::Store);
    }
}

#[test]
fn uart_baudrates_reachable_from_core_clock() {
    for (port, desc) in board::UART_INITS.iter() {
        let baud = desc.init.baudrate;
        let brr = brr_by16(board::CORE_CLOCK_HZ, baud);
        let actual = board::CORE_CLOCK_HZ / brr;
        let error_permille = actual.abs_diff(baud) * 1000 / baud;
        assert!(error_permille < 30, "{:?}: {} permille", port, error_permille);
    }
}

#[test]
fn watchdog_timeout_in_range() {
    let timeout = board::IWDG_INIT
        .init
        .timeout_us(tracker_hal_stm32f0::iwdg::LSI_HZ)
        .unwrap();
    assert!((15_000_000..=30_000_000).contains(&timeout));
}

proptest! {
    #[test]
    fn resolve_bounds_match_count(class_idx in 0usize..4, index in 0usize..128) {
        let class = PeripheralClass::ALL[class_idx];
        let n = board::count(class);
        let result = board::resolve(class, index);
        if index < n {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(
                result,
                Err(LookupError::OutOfRange { class, index, count: n })
            );
        }
    }
}
