#![deny(missing_docs)]

//! Primitive categories a value can be built from

use core::fmt;
use core::hash::Hash;
use core::str::FromStr;

use num_traits::float::FloatCore;
use num_traits::PrimInt;

mod private {
    pub trait Sealed {}
}

/// Any fixed width primitive that can be stored in an [`Endian`](crate::Endian)
///
/// The arithmetic methods are the kernels the operators run on raw storage.
/// Integer kernels wrap on overflow, float kernels are plain IEEE operations.
pub trait Primitive:
    private::Sealed
    + Copy
    + PartialEq
    + PartialOrd
    + Default
    + fmt::Debug
    + fmt::Display
    + FromStr
    + Send
    + Sync
    + 'static
{
    /// Byte array with the size of the primitive
    type Bytes: Copy + Default + AsRef<[u8]> + AsMut<[u8]> + fmt::Debug;

    /// Reverse the byte order
    fn swap_bytes(self) -> Self;
    /// Bytes as laid out in memory
    fn to_ne_bytes(self) -> Self::Bytes;
    /// Build from bytes as laid out in memory
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;

    /// self + rhs
    fn plus(self, rhs: Self) -> Self;
    /// self - rhs
    fn minus(self, rhs: Self) -> Self;
    /// self * rhs
    fn times(self, rhs: Self) -> Self;
    /// self / rhs, panics on integer division by zero
    fn quotient(self, rhs: Self) -> Self;
    /// self % rhs, panics on integer division by zero
    fn remainder(self, rhs: Self) -> Self;
    /// -self
    fn negate(self) -> Self;
    /// self + 1
    fn succ(self) -> Self;
    /// self - 1
    fn pred(self) -> Self;
}

/// Integral primitives, the only ones with bitwise and shift operators
pub trait Integer:
    Primitive
    + PrimInt
    + Eq
    + Ord
    + Hash
    + fmt::LowerHex
    + fmt::UpperHex
    + fmt::Octal
    + fmt::Binary
{
    /// self << n, n masked to the bit width
    fn shl_by(self, n: u32) -> Self;
    /// self >> n, n masked to the bit width
    fn shr_by(self, n: u32) -> Self;
    /// Shift amount encoded by this value
    fn as_shift(self) -> u32;
}

/// Floating point primitives
pub trait Float: Primitive + FloatCore + fmt::LowerExp + fmt::UpperExp {}

macro_rules! impl_integer {
    ($ty:ty, $size:expr) => {
        impl private::Sealed for $ty {}

        impl Primitive for $ty {
            type Bytes = [u8; $size];

            fn swap_bytes(self) -> Self {
                <$ty>::swap_bytes(self)
            }
            fn to_ne_bytes(self) -> [u8; $size] {
                <$ty>::to_ne_bytes(self)
            }
            fn from_ne_bytes(bytes: [u8; $size]) -> Self {
                <$ty>::from_ne_bytes(bytes)
            }

            fn plus(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }
            fn minus(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }
            fn times(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }
            fn quotient(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }
            fn remainder(self, rhs: Self) -> Self {
                self.wrapping_rem(rhs)
            }
            fn negate(self) -> Self {
                self.wrapping_neg()
            }
            fn succ(self) -> Self {
                self.wrapping_add(1)
            }
            fn pred(self) -> Self {
                self.wrapping_sub(1)
            }
        }

        impl Integer for $ty {
            fn shl_by(self, n: u32) -> Self {
                self.wrapping_shl(n)
            }
            fn shr_by(self, n: u32) -> Self {
                self.wrapping_shr(n)
            }
            fn as_shift(self) -> u32 {
                self as u32
            }
        }
    };
}

macro_rules! impl_float {
    ($ty:ty, $size:expr) => {
        impl private::Sealed for $ty {}

        impl Primitive for $ty {
            type Bytes = [u8; $size];

            // through the bit pattern, a swapped float is rarely a meaningful float
            fn swap_bytes(self) -> Self {
                <$ty>::from_bits(self.to_bits().swap_bytes())
            }
            fn to_ne_bytes(self) -> [u8; $size] {
                <$ty>::to_ne_bytes(self)
            }
            fn from_ne_bytes(bytes: [u8; $size]) -> Self {
                <$ty>::from_ne_bytes(bytes)
            }

            fn plus(self, rhs: Self) -> Self {
                self + rhs
            }
            fn minus(self, rhs: Self) -> Self {
                self - rhs
            }
            fn times(self, rhs: Self) -> Self {
                self * rhs
            }
            fn quotient(self, rhs: Self) -> Self {
                self / rhs
            }
            fn remainder(self, rhs: Self) -> Self {
                self % rhs
            }
            fn negate(self) -> Self {
                -self
            }
            fn succ(self) -> Self {
                self + 1.0
            }
            fn pred(self) -> Self {
                self - 1.0
            }
        }

        impl Float for $ty {}
    };
}

impl_float!(f64, 8);
impl_float!(f32, 4);

impl_integer!(u128, 16);
impl_integer!(u64, 8);
impl_integer!(u32, 4);
impl_integer!(u16, 2);
impl_integer!(u8, 1);
impl_integer!(usize, core::mem::size_of::<usize>());

impl_integer!(i128, 16);
impl_integer!(i64, 8);
impl_integer!(i32, 4);
impl_integer!(i16, 2);
impl_integer!(i8, 1);
impl_integer!(isize, core::mem::size_of::<isize>());
