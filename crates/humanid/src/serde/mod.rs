//! Serde support for display identifiers.
//!
//! API payloads keep raw integer ids in memory and expose display
//! identifiers on the wire. The `with` modules here do that for plain integer
//! fields; [`crate::HumanId`] serializes the same way on its own.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Offer {
//!     #[serde(with = "humanid::serde::as_human")]
//!     id: u32,
//!     #[serde(with = "humanid::serde::as_human_opt")]
//!     last_provider_id: Option<u32>,
//! }
//! ```

use crate::{Codec, HumanId, RawId};
use ::serde::de::{self, Deserializer, Visitor};
use ::serde::ser::Serializer;
use ::serde::{Deserialize, Serialize};
use core::fmt;
use core::marker::PhantomData;

struct DisplayVisitor<T>(PhantomData<T>);

impl<T: RawId> Visitor<'_> for DisplayVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a display identifier string")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Codec::DEFAULT.decode(v).map_err(de::Error::custom)
    }
}

/// `#[serde(with = "humanid::serde::as_human")]` for raw integer fields.
pub mod as_human {
    use super::{DisplayVisitor, PhantomData, RawId};
    use super::{Deserializer, Serializer};
    use crate::Codec;

    /// Serialize a raw id as its display identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<T, S>(raw: &T, s: S) -> Result<S::Ok, S::Error>
    where
        T: RawId,
        S: Serializer,
    {
        s.serialize_str(Codec::DEFAULT.encode(*raw).as_str())
    }

    /// Deserialize a raw id from its display identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails or the string
    /// does not decode (see [`crate::Codec::decode`]).
    pub fn deserialize<'de, T, D>(d: D) -> Result<T, D::Error>
    where
        T: RawId,
        D: Deserializer<'de>,
    {
        d.deserialize_str(DisplayVisitor(PhantomData))
    }
}

/// `#[serde(with = "humanid::serde::as_human_opt")]` for optional raw
/// integer fields. `None` maps to `null` both ways.
pub mod as_human_opt {
    use super::{DisplayVisitor, PhantomData, RawId, de};
    use super::{Deserializer, Serializer, Visitor};
    use crate::Codec;
    use core::fmt;

    /// Serialize an optional raw id as an optional display identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<T, S>(raw: &Option<T>, s: S) -> Result<S::Ok, S::Error>
    where
        T: RawId,
        S: Serializer,
    {
        match raw {
            Some(raw) => s.serialize_some(Codec::DEFAULT.encode(*raw).as_str()),
            None => s.serialize_none(),
        }
    }

    /// Deserialize an optional raw id from an optional display identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails or a present
    /// string does not decode.
    pub fn deserialize<'de, T, D>(d: D) -> Result<Option<T>, D::Error>
    where
        T: RawId,
        D: Deserializer<'de>,
    {
        struct OptionVisitor<T>(PhantomData<T>);

        impl<'de, T: RawId> Visitor<'de> for OptionVisitor<T> {
            type Value = Option<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a display identifier string or null")
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_some<D>(self, d: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                d.deserialize_str(DisplayVisitor(PhantomData)).map(Some)
            }
        }

        d.deserialize_option(OptionVisitor(PhantomData))
    }
}

impl<T: RawId> Serialize for HumanId<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        as_human::serialize(&self.raw(), s)
    }
}

impl<'de, T: RawId> Deserialize<'de> for HumanId<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        as_human::deserialize(d).map(HumanId::new)
    }
}
