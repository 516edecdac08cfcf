//! Implementations of num_traits

use num_traits::{Bounded, One, Zero};

use crate::endian::{Endianness, NativeEndian};
use crate::primitive::Primitive;
use crate::value::Endian;

impl<T: Primitive + Bounded, E: Endianness> Bounded for Endian<T, E> {
    #[inline]
    fn min_value() -> Self {
        Self::new(T::min_value())
    }

    #[inline]
    fn max_value() -> Self {
        Self::new(T::max_value())
    }
}

// only host values add and multiply back into their own type
impl<T: Primitive + Zero> Zero for Endian<T, NativeEndian> {
    #[inline]
    fn zero() -> Self {
        Self::new(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.raw().is_zero()
    }
}

impl<T: Primitive + One> One for Endian<T, NativeEndian> {
    #[inline]
    fn one() -> Self {
        Self::new(T::one())
    }
}
