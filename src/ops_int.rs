//! Operators only integers have: bitwise, shifts and logical tests

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

use crate::endian::Endianness;
use crate::primitive::Integer;
use crate::value::{Endian, Host};

impl_binop!(impl BitAnd::bitand for Integer => |a, b| a & b);
impl_binop!(impl BitOr::bitor for Integer => |a, b| a | b);
impl_binop!(impl BitXor::bitxor for Integer => |a, b| a ^ b);
impl_binop!(impl Shl::shl for Integer => |a, b| a.shl_by(b.as_shift()));
impl_binop!(impl Shr::shr for Integer => |a, b| a.shr_by(b.as_shift()));

impl_assign_op!(impl BitAndAssign::bitand_assign for Integer => |a, b| a & b);
impl_assign_op!(impl BitOrAssign::bitor_assign for Integer => |a, b| a | b);
impl_assign_op!(impl BitXorAssign::bitxor_assign for Integer => |a, b| a ^ b);
impl_assign_op!(impl ShlAssign::shl_assign for Integer => |a, b| a.shl_by(b.as_shift()));
impl_assign_op!(impl ShrAssign::shr_assign for Integer => |a, b| a.shr_by(b.as_shift()));

// bitwise complement, the logical not is `logical_not`
impl_unop!(impl Not::not for Integer => |a| !a);

// shifts by a plain amount take `u32` like the primitive `wrapping_shl`,
// so an untyped literal amount resolves
impl<T: Integer, E: Endianness> Shl<u32> for Endian<T, E> {
    type Output = Host<T>;

    #[inline]
    fn shl(self, rhs: u32) -> Host<T> {
        Host::new(self.raw().shl_by(rhs))
    }
}

impl<T: Integer, E: Endianness> Shl<u32> for &Endian<T, E> {
    type Output = Host<T>;

    #[inline]
    fn shl(self, rhs: u32) -> Host<T> {
        *self << rhs
    }
}

impl<T: Integer, E: Endianness> Shr<u32> for Endian<T, E> {
    type Output = Host<T>;

    #[inline]
    fn shr(self, rhs: u32) -> Host<T> {
        Host::new(self.raw().shr_by(rhs))
    }
}

impl<T: Integer, E: Endianness> Shr<u32> for &Endian<T, E> {
    type Output = Host<T>;

    #[inline]
    fn shr(self, rhs: u32) -> Host<T> {
        *self >> rhs
    }
}

impl<T: Integer, E: Endianness> ShlAssign<u32> for Endian<T, E> {
    #[inline]
    fn shl_assign(&mut self, rhs: u32) {
        let v = self.raw().shl_by(rhs);
        self.assign_raw(v);
    }
}

impl<T: Integer, E: Endianness> ShrAssign<u32> for Endian<T, E> {
    #[inline]
    fn shr_assign(&mut self, rhs: u32) {
        let v = self.raw().shr_by(rhs);
        self.assign_raw(v);
    }
}

impl<T: Integer, E: Endianness> Endian<T, E> {
    /// `!value`, true when the raw bits are zero
    #[inline]
    pub fn logical_not(&self) -> bool {
        self.raw().is_zero()
    }

    /// `value && other` on the raw bits
    #[inline]
    pub fn logical_and<F: Endianness>(&self, other: &Endian<T, F>) -> bool {
        !self.raw().is_zero() && !other.raw().is_zero()
    }

    /// `value || other` on the raw bits
    #[inline]
    pub fn logical_or<F: Endianness>(&self, other: &Endian<T, F>) -> bool {
        !self.raw().is_zero() || !other.raw().is_zero()
    }
}

impl<T: Integer, E: Endianness> Eq for Endian<T, E> {}

impl<T: Integer, E: Endianness> Ord for Endian<T, E> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw().cmp(&other.raw())
    }
}

impl<T: Integer, E: Endianness> Hash for Endian<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw().hash(state);
    }
}
