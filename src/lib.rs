//! # Endian num
//!
//! Numbers that know the byte order they are stored in.
//!
//! [`Endian<T, E>`] holds one primitive `T` (any fixed width integer, `f32` or
//! `f64`) already converted to the byte order `E`. The conversion happens once
//! when the value is built and once when it is read back with
//! [`get`](Endian::get), so it can neither be forgotten nor applied twice.
//!
//! ```
//! use endian_num::{Big, Host, Little};
//!
//! let header = Big::<u16>::new(0x1234);
//! assert_eq!(header.to_bytes(), [0x12, 0x34]);
//! assert_eq!(header.get(), 0x1234);
//!
//! let len = Little::<u32>::from_bytes([0x2a, 0, 0, 0]);
//! assert_eq!(len.get(), 42);
//!
//! // operators return host values
//! let sum = Host::new(42i32) + Host::new(1);
//! assert_eq!(sum.get(), 43);
//! ```
//!
//! Operators read the raw stored bits of both operands, see [`Endian`] for
//! what that means when the operands have different byte orders.

#![deny(missing_docs)]

#[macro_use]
mod macros;

mod endian;
mod error;
mod primitive;
mod value;

// Add<T>, Sub<T>, etc...
mod ops;
mod ops_int;

mod impl_fmt;
mod impl_num;
#[cfg(feature = "serde")]
mod impl_serde;

pub use endian::{
    big_to_host, host_to_big, host_to_little, little_to_host, BigEndian, Endianness,
    LittleEndian, NativeEndian,
};
pub use error::Error;
pub use primitive::{Float, Integer, Primitive};
pub use value::{Big, Endian, Host, Little};

/// Result of the fallible constructors
pub type Result<T> = std::result::Result<T, Error>;
