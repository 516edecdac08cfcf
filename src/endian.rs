#![deny(missing_docs)]

//! Byte order markers and the conversions between host order and them

use core::fmt::Debug;
use core::hash::Hash;

use crate::primitive::Primitive;

mod private {
    pub trait Sealed {}
}

/// Endianness contains the conversion between host order and a given byte order
///
/// Default is implemented for Native Endian, where both conversions are the identity.
pub trait Endianness:
    private::Sealed + Copy + Default + Debug + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Name used when debug printing values
    const NAME: &'static str;

    /// Whether values in this order must be byte swapped on the current host
    const NEEDS_SWAP: bool = false;

    /// Convert a host order value into this order
    #[inline]
    fn from_host<T: Primitive>(v: T) -> T {
        if Self::NEEDS_SWAP {
            v.swap_bytes()
        } else {
            v
        }
    }

    /// Convert a value stored in this order back into host order
    #[inline]
    fn to_host<T: Primitive>(v: T) -> T {
        // a byte swap is an involution
        Self::from_host(v)
    }
}

/// Native Endian, the order of the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NativeEndian;
impl private::Sealed for NativeEndian {}
impl Endianness for NativeEndian {
    const NAME: &'static str = "NativeEndian";
}

/// Little Endian, least significant byte first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LittleEndian;
impl private::Sealed for LittleEndian {}
impl Endianness for LittleEndian {
    const NAME: &'static str = "LittleEndian";
    const NEEDS_SWAP: bool = cfg!(target_endian = "big");
}

/// Big Endian, most significant byte first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BigEndian;
impl private::Sealed for BigEndian {}
impl Endianness for BigEndian {
    const NAME: &'static str = "BigEndian";
    const NEEDS_SWAP: bool = cfg!(target_endian = "little");
}

/// Convert a host order value to little endian
#[inline]
pub fn host_to_little<T: Primitive>(v: T) -> T {
    LittleEndian::from_host(v)
}

/// Convert a little endian value to host order
#[inline]
pub fn little_to_host<T: Primitive>(v: T) -> T {
    LittleEndian::to_host(v)
}

/// Convert a host order value to big endian
#[inline]
pub fn host_to_big<T: Primitive>(v: T) -> T {
    BigEndian::from_host(v)
}

/// Convert a big endian value to host order
#[inline]
pub fn big_to_host<T: Primitive>(v: T) -> T {
    BigEndian::to_host(v)
}
