//!
//! Support for serde implementations
//!
//! Values go through serde as their host order primitive, whatever the
//! byte order they are stored in.
use serde::{de, ser, Deserialize, Serialize};

use crate::endian::Endianness;
use crate::primitive::Primitive;
use crate::value::Endian;

impl<T, E> ser::Serialize for Endian<T, E>
where
    T: Primitive + Serialize,
    E: Endianness,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        self.get().serialize(serializer)
    }
}

impl<'de, T, E> de::Deserialize<'de> for Endian<T, E>
where
    T: Primitive + Deserialize<'de>,
    E: Endianness,
{
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        T::deserialize(d).map(Self::new)
    }
}
