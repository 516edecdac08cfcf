// \file src/macros.rs
//! macros generating the operator impls
//!
//! Every operator reads the raw bits of its operands, so the same body serves
//! any pair of byte orders. By-reference forms forward to the by-value one.

macro_rules! impl_binop {
    (impl $imp:ident::$method:ident for $bound:ident => |$a:ident, $b:ident| $body:expr) => {
        impl<T: $bound, E: Endianness, F: Endianness> $imp<Endian<T, F>> for Endian<T, E> {
            type Output = Host<T>;

            #[inline]
            fn $method(self, rhs: Endian<T, F>) -> Host<T> {
                let $a = self.raw();
                let $b = rhs.raw();
                Host::new($body)
            }
        }

        impl<T: $bound, E: Endianness, F: Endianness> $imp<&Endian<T, F>> for Endian<T, E> {
            type Output = Host<T>;

            #[inline]
            fn $method(self, rhs: &Endian<T, F>) -> Host<T> {
                $imp::$method(self, *rhs)
            }
        }

        impl<T: $bound, E: Endianness, F: Endianness> $imp<Endian<T, F>> for &Endian<T, E> {
            type Output = Host<T>;

            #[inline]
            fn $method(self, rhs: Endian<T, F>) -> Host<T> {
                $imp::$method(*self, rhs)
            }
        }

        impl<T: $bound, E: Endianness, F: Endianness> $imp<&Endian<T, F>> for &Endian<T, E> {
            type Output = Host<T>;

            #[inline]
            fn $method(self, rhs: &Endian<T, F>) -> Host<T> {
                $imp::$method(*self, *rhs)
            }
        }
    };
}

macro_rules! impl_assign_op {
    (impl $imp:ident::$method:ident for $bound:ident => |$a:ident, $b:ident| $body:expr) => {
        impl<T: $bound, E: Endianness, F: Endianness> $imp<Endian<T, F>> for Endian<T, E> {
            #[inline]
            fn $method(&mut self, rhs: Endian<T, F>) {
                let $a = self.raw();
                let $b = rhs.raw();
                *self.raw_mut() = $body;
            }
        }

        impl<T: $bound, E: Endianness, F: Endianness> $imp<&Endian<T, F>> for Endian<T, E> {
            #[inline]
            fn $method(&mut self, rhs: &Endian<T, F>) {
                $imp::$method(self, *rhs)
            }
        }
    };
}

macro_rules! impl_unop {
    (impl $imp:ident::$method:ident for $bound:ident => |$a:ident| $body:expr) => {
        impl<T: $bound, E: Endianness> $imp for Endian<T, E> {
            type Output = Host<T>;

            #[inline]
            fn $method(self) -> Host<T> {
                let $a = self.raw();
                Host::new($body)
            }
        }

        impl<T: $bound, E: Endianness> $imp for &Endian<T, E> {
            type Output = Host<T>;

            #[inline]
            fn $method(self) -> Host<T> {
                $imp::$method(*self)
            }
        }
    };
}
