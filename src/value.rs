#![deny(missing_docs)]

//! The byte order aware value holder

use core::marker::PhantomData;
use core::str::FromStr;

use num_traits::AsPrimitive;

use crate::endian::{BigEndian, Endianness, LittleEndian, NativeEndian};
use crate::error::Error;
use crate::primitive::{Float, Integer, Primitive};
use crate::Result;

/// A primitive `T` stored in the byte order `E`
///
/// The stored bits are always the value already converted to `E`: a
/// [`Big<u16>`] holding `0x1234` stores `0x3412` on a little endian host.
/// [`get`](Endian::get) converts back to host order, [`raw`](Endian::raw)
/// returns the stored bits untouched.
///
/// Operators work on the raw bits of both operands and return a [`Host`]
/// value. This is only meaningful when both operands share a representation
/// (same variant, or both host). For mixed orders go through
/// [`to_host`](Endian::to_host) first:
///
/// ```
/// use endian_num::{Big, Little};
///
/// let a = Big::<u32>::new(40);
/// let b = Little::<u32>::new(2);
/// assert_eq!((a.to_host() + b.to_host()).get(), 42);
/// ```
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct Endian<T, E> {
    data: T,
    order: PhantomData<E>,
}

/// Value stored in the host byte order
pub type Host<T> = Endian<T, NativeEndian>;
/// Value stored little endian
pub type Little<T> = Endian<T, LittleEndian>;
/// Value stored big endian
pub type Big<T> = Endian<T, BigEndian>;

impl<T: Primitive, E: Endianness> Endian<T, E> {
    /// Create from a host order value, converting it to `E`
    #[inline]
    pub fn new(v: T) -> Self {
        Self::from_raw(E::from_host(v))
    }

    /// Create from bits already in `E` order, without conversion
    #[inline]
    pub const fn from_raw(raw: T) -> Self {
        Endian {
            data: raw,
            order: PhantomData,
        }
    }

    /// The value in host order
    #[inline]
    pub fn get(&self) -> T {
        E::to_host(self.data)
    }

    /// The stored bits, without conversion
    #[inline]
    pub fn raw(&self) -> T {
        self.data
    }

    /// Mutable access to the stored bits
    #[inline]
    pub fn raw_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Copy the stored bits into another variant, without conversion
    ///
    /// Reinterpreting between two different byte orders does not preserve the
    /// value, use [`convert`](Endian::convert) for that.
    #[inline]
    pub fn reinterpret<F: Endianness>(self) -> Endian<T, F> {
        Endian::from_raw(self.data)
    }

    /// Re-encode the host value into another byte order
    #[inline]
    pub fn convert<F: Endianness>(self) -> Endian<T, F> {
        Endian::new(self.get())
    }

    /// Re-encode the host value into host order
    #[inline]
    pub fn to_host(self) -> Host<T> {
        self.convert()
    }

    /// Replace the stored bits with the ones of `other`, without conversion
    #[inline]
    pub fn assign<F: Endianness>(&mut self, other: &Endian<T, F>) -> &mut Self {
        self.data = other.data;
        self
    }

    /// Replace the stored bits with `v` verbatim
    ///
    /// Unlike [`new`](Endian::new) and [`set`](Endian::set) this does not
    /// convert `v` to `E`.
    #[inline]
    pub fn assign_raw(&mut self, v: T) -> &mut Self {
        self.data = v;
        self
    }

    /// Replace the value with host order `v`, converting it to `E`
    #[inline]
    pub fn set(&mut self, v: T) -> &mut Self {
        self.data = E::from_host(v);
        self
    }

    /// The stored bytes, which is the value encoded in `E`
    #[inline]
    pub fn to_bytes(&self) -> T::Bytes {
        self.data.to_ne_bytes()
    }

    /// Create from bytes encoded in `E`
    #[inline]
    pub fn from_bytes(bytes: T::Bytes) -> Self {
        Self::from_raw(T::from_ne_bytes(bytes))
    }

    /// Create from a slice of bytes encoded in `E`, the slice length must match
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let mut bytes = T::Bytes::default();
        let expected = bytes.as_ref().len();
        if slice.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: slice.len(),
            });
        }
        bytes.as_mut().copy_from_slice(slice);
        Ok(Self::from_bytes(bytes))
    }
}

impl<T: Integer, E: Endianness> Endian<T, E> {
    /// Numeric cast of the raw value into a float stored in order `F`
    #[inline]
    pub fn cast_float<U, F>(self) -> Endian<U, F>
    where
        U: Float,
        F: Endianness,
        T: AsPrimitive<U>,
    {
        Endian::new(self.data.as_())
    }
}

impl<T: Float, E: Endianness> Endian<T, E> {
    /// Numeric cast of the raw value into an integer stored in order `F`
    ///
    /// Truncates toward zero and saturates, like `as`.
    #[inline]
    pub fn cast_int<U, F>(self) -> Endian<U, F>
    where
        U: Integer,
        F: Endianness,
        T: AsPrimitive<U>,
    {
        Endian::new(self.data.as_())
    }
}

impl<T: Primitive, E: Endianness> From<T> for Endian<T, E> {
    fn from(v: T) -> Self {
        Self::new(v)
    }
}

macro_rules! impl_into_primitive {
    ($($ty:ty),*) => {
        $(
            impl<E: Endianness> From<Endian<$ty, E>> for $ty {
                fn from(v: Endian<$ty, E>) -> $ty {
                    v.get()
                }
            }
        )*
    };
}

impl_into_primitive!(f64, f32);
impl_into_primitive!(u128, u64, u32, u16, u8, usize);
impl_into_primitive!(i128, i64, i32, i16, i8, isize);

impl<T: Primitive, E: Endianness> FromStr for Endian<T, E> {
    type Err = <T as FromStr>::Err;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        s.parse::<T>().map(Self::new)
    }
}
