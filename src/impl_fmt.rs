//! Implementation of the formatting traits
//!
//! Display and the radix/exponent formats write the raw bits with the
//! formatter's own flags. Debug shows the host value and the byte order.

use core::fmt;

use crate::endian::Endianness;
use crate::primitive::{Float, Integer, Primitive};
use crate::value::Endian;

macro_rules! impl_fmt_raw {
    ($trait:ident for $bound:ident) => {
        impl<T: $bound, E: Endianness> fmt::$trait for Endian<T, E> {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::$trait::fmt(&self.raw(), f)
            }
        }
    };
}

impl_fmt_raw!(Display for Primitive);
impl_fmt_raw!(LowerHex for Integer);
impl_fmt_raw!(UpperHex for Integer);
impl_fmt_raw!(Octal for Integer);
impl_fmt_raw!(Binary for Integer);
impl_fmt_raw!(LowerExp for Float);
impl_fmt_raw!(UpperExp for Float);

impl<T: Primitive, E: Endianness> fmt::Debug for Endian<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(E::NAME).field(&self.get()).finish()
    }
}
