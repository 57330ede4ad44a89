//! Logical peripheral identifiers and their descriptor tables
//!
//! Every peripheral class (GPIO, SPI, I2C, UART) is addressed through a
//! dense, closed enumeration of logical roles. Boards map each role to a
//! [`Descriptor`] holding the physical instance and its init parameters.
//!
//! Tables are built once, in `static` items, through [`descriptor_table!`].
//! Construction is const-evaluated, so a table whose length or ordering
//! disagrees with its enumeration fails the build rather than misbehaving
//! on the bench.

use core::marker::PhantomData;
use core::ops::Index;

/// Peripheral class a logical identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralClass {
    Gpio,
    Spi,
    I2c,
    Uart,
}

impl PeripheralClass {
    /// All classes, in table order
    pub const ALL: [PeripheralClass; 4] = [
        PeripheralClass::Gpio,
        PeripheralClass::Spi,
        PeripheralClass::I2c,
        PeripheralClass::Uart,
    ];
}

/// Lookup failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LookupError {
    /// Raw index is at or beyond the class's identifier count
    OutOfRange {
        class: PeripheralClass,
        index: usize,
        count: usize,
    },
    /// Table length does not match the identifier count
    LengthMismatch {
        class: PeripheralClass,
        len: usize,
        count: usize,
    },
    /// An identifier does not round-trip through its own index
    Misordered { class: PeripheralClass, index: usize },
}

/// A dense, zero-based logical identifier
///
/// Implemented by the enums generated with [`logical_ids!`]. `COUNT` plays
/// the role of a "total number" sentinel: it sizes tables but is never a
/// value of the enum.
pub trait LogicalId: Copy + Eq + 'static {
    /// Class this identifier addresses
    const CLASS: PeripheralClass;

    /// Number of identifiers (one past the highest index)
    const COUNT: usize;

    /// Position of this identifier in its table
    fn index(self) -> usize;

    /// Identifier at `index`, or `None` when `index >= COUNT`
    fn from_index(index: usize) -> Option<Self>;

    /// Every identifier, in index order
    fn all() -> &'static [Self];
}

/// Memory-mapped hardware block a descriptor points at
pub trait PhysicalInstance: Copy + Eq {
    /// Base address of the block's register file
    fn base_address(&self) -> u32;
}

/// Physical instance paired with the parameters used to initialize it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Descriptor<I, P> {
    /// Hardware block (or pin) this role is wired to
    pub instance: I,
    /// Parameters the driver applies at setup
    pub init: P,
}

impl<I, P> Descriptor<I, P> {
    pub const fn new(instance: I, init: P) -> Self {
        Self { instance, init }
    }
}

/// Read-only table with exactly one descriptor per logical identifier
///
/// `N` must equal `Id::COUNT`; [`DescriptorTable::new`] rejects anything
/// else during const evaluation.
pub struct DescriptorTable<Id, I, P, const N: usize> {
    entries: [Descriptor<I, P>; N],
    _ids: PhantomData<fn() -> Id>,
}

impl<Id: LogicalId, I, P, const N: usize> DescriptorTable<Id, I, P, N> {
    /// Build a table from entries written in identifier order
    ///
    /// Entry `i` must belong to the identifier whose index is `i`. Only the
    /// length is checked here; board tables go through
    /// [`descriptor_table!`], which also checks the order.
    ///
    /// # Panics
    ///
    /// When `N != Id::COUNT`. Tables live in `static` items, so this panic
    /// happens at compile time:
    ///
    /// ```compile_fail
    /// use tracker_hal::registry::{Descriptor, DescriptorTable};
    ///
    /// tracker_hal::logical_ids! {
    ///     pub enum Bus: Spi {
    ///         Radio,
    ///         Flash,
    ///     }
    /// }
    ///
    /// static BUSES: DescriptorTable<Bus, u32, u8, 3> = DescriptorTable::new([
    ///     Descriptor::new(0x4001_3000, 0),
    ///     Descriptor::new(0x4000_3800, 0),
    ///     Descriptor::new(0x4000_3C00, 0),
    /// ]);
    /// ```
    pub const fn new(entries: [Descriptor<I, P>; N]) -> Self {
        assert!(
            N == Id::COUNT,
            "descriptor table length does not match its identifier count"
        );
        Self {
            entries,
            _ids: PhantomData,
        }
    }

    /// Descriptor for `id`
    pub fn resolve(&self, id: Id) -> &Descriptor<I, P> {
        &self.entries[id.index()]
    }

    /// Descriptor at a raw index, checked against the identifier count
    pub fn resolve_index(&self, index: usize) -> Result<&Descriptor<I, P>, LookupError> {
        if index >= Id::COUNT {
            return Err(LookupError::OutOfRange {
                class: Id::CLASS,
                index,
                count: Id::COUNT,
            });
        }
        self.entries.get(index).ok_or(LookupError::OutOfRange {
            class: Id::CLASS,
            index,
            count: N,
        })
    }

    /// Descriptor for `id`, alias of [`resolve`](Self::resolve)
    pub fn get(&self, id: Id) -> &Descriptor<I, P> {
        self.resolve(id)
    }

    /// Iterate `(identifier, descriptor)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (Id, &Descriptor<I, P>)> + '_ {
        Id::all().iter().copied().zip(self.entries.iter())
    }

    /// Number of entries (always `Id::COUNT`)
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub const fn class(&self) -> PeripheralClass {
        Id::CLASS
    }

    /// Re-check the table against its identifier enumeration
    ///
    /// The compile-time checks already cover this; boot code calls it once
    /// more so a corrupted image refuses to start.
    pub fn verify(&self) -> Result<(), LookupError> {
        if N != Id::COUNT || Id::all().len() != Id::COUNT {
            return Err(LookupError::LengthMismatch {
                class: Id::CLASS,
                len: N,
                count: Id::COUNT,
            });
        }
        for (index, id) in Id::all().iter().enumerate() {
            if id.index() != index || Id::from_index(index) != Some(*id) {
                return Err(LookupError::Misordered {
                    class: Id::CLASS,
                    index,
                });
            }
        }
        Ok(())
    }
}

impl<Id: LogicalId, I, P, const N: usize> Index<Id> for DescriptorTable<Id, I, P, N> {
    type Output = Descriptor<I, P>;

    fn index(&self, id: Id) -> &Self::Output {
        self.resolve(id)
    }
}

/// Declare a dense logical identifier enum for one peripheral class
///
/// Variants take implicit discriminants only, so indices run `0..COUNT`
/// with no gaps.
///
/// ```
/// use tracker_hal::registry::{LogicalId, PeripheralClass};
///
/// tracker_hal::logical_ids! {
///     /// UART ports
///     pub enum UartPort: Uart {
///         Uart1,
///         Uart2,
///     }
/// }
///
/// assert_eq!(UartPort::COUNT, 2);
/// assert_eq!(UartPort::Uart2.index(), 1);
/// assert_eq!(<UartPort as LogicalId>::CLASS, PeripheralClass::Uart);
/// ```
#[macro_export]
macro_rules! logical_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $class:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant
            ),+
        }

        impl $name {
            /// Every identifier, in index order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Number of identifiers
            pub const COUNT: usize = $name::ALL.len();
        }

        impl $crate::registry::LogicalId for $name {
            const CLASS: $crate::registry::PeripheralClass =
                $crate::registry::PeripheralClass::$class;
            const COUNT: usize = $name::COUNT;

            fn index(self) -> usize {
                self as usize
            }

            fn from_index(index: usize) -> Option<Self> {
                $name::ALL.get(index).copied()
            }

            fn all() -> &'static [Self] {
                $name::ALL
            }
        }
    };
}

/// Build a [`DescriptorTable`] keyed by identifier name
///
/// Entries must be listed in declaration order of the identifier enum;
/// a const assertion rejects the table otherwise. Combined with the length
/// check in [`DescriptorTable::new`] this makes every identifier map to
/// exactly one entry.
///
/// ```
/// use tracker_hal::registry::{Descriptor, DescriptorTable};
///
/// tracker_hal::logical_ids! {
///     pub enum Bus: Spi {
///         Radio,
///         Flash,
///     }
/// }
///
/// static BUSES: DescriptorTable<Bus, u32, u8, 2> = tracker_hal::descriptor_table!(Bus {
///     Radio => Descriptor::new(0x4001_3000, 8),
///     Flash => Descriptor::new(0x4000_3800, 2),
/// });
///
/// assert_eq!(BUSES[Bus::Flash].init, 2);
/// ```
///
/// Swapped entries do not build:
///
/// ```compile_fail
/// use tracker_hal::registry::{Descriptor, DescriptorTable};
///
/// tracker_hal::logical_ids! {
///     pub enum Bus: Spi {
///         Radio,
///         Flash,
///     }
/// }
///
/// static BUSES: DescriptorTable<Bus, u32, u8, 2> = tracker_hal::descriptor_table!(Bus {
///     Flash => Descriptor::new(0x4000_3800, 2),
///     Radio => Descriptor::new(0x4001_3000, 8),
/// });
/// ```
///
/// Neither does a role listed twice in place of another:
///
/// ```compile_fail
/// use tracker_hal::registry::{Descriptor, DescriptorTable};
///
/// tracker_hal::logical_ids! {
///     pub enum Bus: Spi {
///         Radio,
///         Flash,
///     }
/// }
///
/// static BUSES: DescriptorTable<Bus, u32, u8, 2> = tracker_hal::descriptor_table!(Bus {
///     Radio => Descriptor::new(0x4001_3000, 8),
///     Radio => Descriptor::new(0x4000_3800, 2),
/// });
/// ```
#[macro_export]
macro_rules! descriptor_table {
    ($id:ident { $($variant:ident => $desc:expr),+ $(,)? }) => {{
        const _: () = {
            let order = [$($id::$variant as usize),+];
            let mut slot = 0;
            while slot < order.len() {
                assert!(
                    order[slot] == slot,
                    "descriptor table entries are not in identifier order"
                );
                slot += 1;
            }
        };
        $crate::registry::DescriptorTable::new([$($desc),+])
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::logical_ids! {
        enum Bus: Spi {
            First,
            Second,
            Third,
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Block(u32);

    impl PhysicalInstance for Block {
        fn base_address(&self) -> u32 {
            self.0
        }
    }

    static TABLE: DescriptorTable<Bus, Block, u8, 3> = crate::descriptor_table!(Bus {
        First => Descriptor::new(Block(0x4000_0000), 1),
        Second => Descriptor::new(Block(0x4000_1000), 2),
        Third => Descriptor::new(Block(0x4000_1000), 3),
    });

    #[test]
    fn test_ids_are_dense() {
        assert_eq!(Bus::COUNT, 3);
        for (i, id) in Bus::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(Bus::from_index(i), Some(*id));
        }
        assert_eq!(Bus::from_index(3), None);
    }

    #[test]
    fn test_resolve_by_id() {
        assert_eq!(TABLE.resolve(Bus::First).init, 1);
        assert_eq!(TABLE[Bus::Third].init, 3);
        assert_eq!(TABLE.get(Bus::Second).instance.base_address(), 0x4000_1000);
    }

    #[test]
    fn test_sentinel_index_is_out_of_range() {
        assert_eq!(
            TABLE.resolve_index(Bus::COUNT),
            Err(LookupError::OutOfRange {
                class: PeripheralClass::Spi,
                index: 3,
                count: 3,
            })
        );
        assert!(TABLE.resolve_index(usize::MAX).is_err());
        assert_eq!(TABLE.resolve_index(1).map(|d| d.init), Ok(2));
    }

    #[test]
    fn test_iter_pairs_ids_with_entries() {
        let mut seen = 0;
        for (id, desc) in TABLE.iter() {
            assert_eq!(desc.init as usize, id.index() + 1);
            seen += 1;
        }
        assert_eq!(seen, TABLE.len());
        assert_eq!(TABLE.class(), PeripheralClass::Spi);
    }

    #[test]
    fn test_verify_passes() {
        assert_eq!(TABLE.verify(), Ok(()));
    }
}
