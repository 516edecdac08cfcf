//! Operators shared by integers and floats: Add, Sub, etc...
//!
//! All of them compute on the raw bits of the operands and wrap the result in
//! a [`Host`] value.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use crate::endian::Endianness;
use crate::primitive::Primitive;
use crate::value::{Endian, Host};

impl_binop!(impl Add::add for Primitive => |a, b| a.plus(b));
impl_binop!(impl Sub::sub for Primitive => |a, b| a.minus(b));
impl_binop!(impl Mul::mul for Primitive => |a, b| a.times(b));
impl_binop!(impl Div::div for Primitive => |a, b| a.quotient(b));
impl_binop!(impl Rem::rem for Primitive => |a, b| a.remainder(b));

impl_assign_op!(impl AddAssign::add_assign for Primitive => |a, b| a.plus(b));
impl_assign_op!(impl SubAssign::sub_assign for Primitive => |a, b| a.minus(b));
impl_assign_op!(impl MulAssign::mul_assign for Primitive => |a, b| a.times(b));
impl_assign_op!(impl DivAssign::div_assign for Primitive => |a, b| a.quotient(b));
impl_assign_op!(impl RemAssign::rem_assign for Primitive => |a, b| a.remainder(b));

impl_unop!(impl Neg::neg for Primitive => |a| a.negate());

impl<T: Primitive, E: Endianness, F: Endianness> PartialEq<Endian<T, F>> for Endian<T, E> {
    #[inline]
    fn eq(&self, other: &Endian<T, F>) -> bool {
        self.raw() == other.raw()
    }
}

impl<T: Primitive, E: Endianness, F: Endianness> PartialOrd<Endian<T, F>> for Endian<T, E> {
    #[inline]
    fn partial_cmp(&self, other: &Endian<T, F>) -> Option<Ordering> {
        self.raw().partial_cmp(&other.raw())
    }
}

impl<T: Primitive, E: Endianness> Endian<T, E> {
    /// Unary plus, a host copy of the raw bits
    #[inline]
    pub fn pos(self) -> Host<T> {
        self.reinterpret()
    }

    /// Prefix increment of the raw storage
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        let v = self.raw().succ();
        self.assign_raw(v)
    }

    /// Prefix decrement of the raw storage
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        let v = self.raw().pred();
        self.assign_raw(v)
    }

    /// Postfix increment, returns the raw value from before the increment
    #[inline]
    pub fn post_increment(&mut self) -> Host<T> {
        let old = self.pos();
        self.increment();
        old
    }

    /// Postfix decrement, returns the raw value from before the decrement
    #[inline]
    pub fn post_decrement(&mut self) -> Host<T> {
        let old = self.pos();
        self.decrement();
        old
    }
}

#[cfg(test)]
mod tests {
    use crate::{Big, Host, Little};

    #[test]
    fn arithmetic_returns_host() {
        let sum: Host<i32> = Host::new(42) + Host::new(1);
        assert_eq!(sum.get(), 43);
        assert_eq!((Host::new(7u8) - Host::new(9u8)).get(), 254);
        assert_eq!((Host::new(6i64) * Host::new(-7i64)).get(), -42);
        assert_eq!((Host::new(-7i32) / Host::new(2i32)).get(), -3);
        assert_eq!((Host::new(-7i32) % Host::new(2i32)).get(), -1);
        assert_eq!((-Host::new(5i16)).get(), -5);
    }

    #[test]
    fn by_reference() {
        let a = Host::new(10u32);
        let b = Host::new(3u32);
        assert_eq!((&a + &b).get(), 13);
        assert_eq!((a - &b).get(), 7);
        assert_eq!((&a * b).get(), 30);
        assert_eq!((-&a).get(), 10u32.wrapping_neg());
    }

    #[test]
    fn same_variant_operands_use_raw_bits() {
        let a = Big::<u16>::new(0x0100);
        let b = Big::<u16>::new(0x0200);
        // the raw bits are added, the result is a host value holding them
        let sum = a + b;
        assert_eq!(sum.get(), a.raw().wrapping_add(b.raw()));
        assert_eq!(sum.reinterpret::<crate::BigEndian>().get(), 0x0300);
    }

    #[test]
    fn compound_assignment() {
        let mut v = Host::new(-8i32);
        v += Host::new(42);
        assert_eq!(v.get(), 34);
        v -= Host::new(84);
        assert_eq!(v.get(), -50);
        v *= &Host::new(2);
        assert_eq!(v.get(), -100);
        v /= Host::new(3);
        assert_eq!(v.get(), -33);
        v %= Host::new(10);
        assert_eq!(v.get(), -3);
    }

    #[test]
    fn compound_assignment_keeps_variant() {
        let mut v = Little::<u32>::new(1);
        v += Little::new(2);
        assert_eq!(v.get(), 3);
    }

    #[test]
    fn comparisons() {
        assert!(Host::new(1u8) == Host::new(1u8));
        assert!(Host::new(1u8) != Host::new(2u8));
        assert!(Host::new(1i8) < Host::new(2i8));
        assert!(Host::new(-1i8) <= Host::new(-1i8));
        assert!(Host::new(3.0f64) > Host::new(2.5f64));
        assert!(Host::new(3.0f32) >= Host::new(3.0f32));
        assert!(Host::new(f64::NAN) != Host::new(f64::NAN));
        assert!(!(Host::new(f32::NAN) < Host::new(0.0f32)));
    }

    #[test]
    fn comparisons_across_variants_use_raw_bits() {
        let big = Big::<u32>::new(7);
        assert!(big == Host::<u32>::from_raw(big.raw()));
        assert!(big == Little::<u32>::from_raw(big.raw()));
    }

    #[test]
    fn unary_plus_copies_raw() {
        let big = Big::<u16>::new(0x1234);
        assert_eq!(big.pos().raw(), big.raw());
    }

    #[test]
    fn prefix_increment_and_decrement() {
        let mut v = Host::new(41i32);
        assert_eq!(v.increment().get(), 42);
        assert_eq!(v.decrement().decrement().get(), 40);

        let mut m = Host::new(u8::MAX);
        m.increment();
        assert_eq!(m.get(), 0);
    }

    #[test]
    fn postfix_increment_really_increments() {
        let mut v = Host::new(41i32);
        let old = v.post_increment();
        assert_eq!(old.get(), 41);
        assert_eq!(v.get(), 42);

        let old = v.post_decrement();
        assert_eq!(old.get(), 42);
        assert_eq!(v.get(), 41);
    }

    #[test]
    fn float_increment() {
        let mut f = Host::new(0.5f64);
        assert_eq!(f.post_increment().get(), 0.5);
        assert_eq!(f.get(), 1.5);
        f.decrement();
        assert_eq!(f.get(), 0.5);
    }

    #[test]
    fn float_arithmetic() {
        let a = Host::new(100.0f32);
        let c = a / Host::new(42.375f32);
        assert_eq!(c.get().to_bits(), (100.0f32 / 42.375f32).to_bits());
        assert_eq!((Host::new(7.5f64) % Host::new(2.0f64)).get(), 1.5);

        let mut f = Host::new(1.0f64);
        f += Host::new(0.5);
        f *= Host::new(4.0);
        f -= Host::new(1.0);
        f /= Host::new(2.0);
        f %= Host::new(2.0);
        assert_eq!(f.get(), 0.5);
        assert_eq!((-f).get(), -0.5);
    }
}
