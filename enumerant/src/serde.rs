//! Name-based serde support.
//!
//! Human-readable formats use names; binary formats use the raw integers. When deserializing a
//! human-readable format, either form is accepted.

use core::fmt::{self, Display, Formatter, Write};
use core::marker::PhantomData;

use ::serde::de::{self, Deserialize, Deserializer, Visitor};
use ::serde::ser::{Serialize, Serializer};

use crate::bitset::{Dense, EnumBitset, ParseOptions};
use crate::catalog::Named;
use crate::traits::Enumerant;

/// Serializes an [`Enumerant`] field by name.
///
/// ```
/// use enumerant::Enumerant;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Enumerant)]
/// enum Level {
///     Low,
///     High,
/// }
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Reading {
///     #[serde(with = "enumerant::serde::by_name")]
///     level: Level,
/// }
///
/// let json = serde_json::to_string(&Reading { level: Level::High }).unwrap();
/// assert_eq!(json, r#"{"level":"Level::High"}"#);
/// ```
pub mod by_name {
    use ::serde::de::Error as _;
    use ::serde::{Deserialize, Deserializer, Serializer};

    use super::NamedOrRawVisitor;
    use crate::traits::Enumerant;

    /// Writes the name in human-readable formats, otherwise the raw integer.
    pub fn serialize<E, S>(value: &E, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: Enumerant,
        S: Serializer,
    {
        if serializer.is_human_readable() {
            // Every enumerator inside the bounds has a name; the rest fall back to the integer.
            match E::enum_to_string(*value) {
                Some(name) => serializer.serialize_str(name),
                None => serializer.serialize_i128(E::enum_to_int(*value)),
            }
        } else {
            serializer.serialize_i128(E::enum_to_int(*value))
        }
    }

    /// Reads a name or a raw integer in human-readable formats, otherwise the raw integer.
    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
    where
        E: Enumerant,
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            // Human-readable formats are assumed to be self-describing.
            deserializer.deserialize_any(NamedOrRawVisitor::new())
        } else {
            let raw = i128::deserialize(deserializer)?;
            E::int_to_enum(raw).ok_or_else(|| {
                D::Error::custom(format_args!(
                    "unknown value {raw} for type '{}'",
                    E::type_name()
                ))
            })
        }
    }
}

struct NamedOrRawVisitor<E> {
    _p: PhantomData<E>,
}

impl<E> NamedOrRawVisitor<E> {
    fn new() -> Self {
        Self { _p: PhantomData }
    }
}

impl<'de, E: Enumerant> Visitor<'de> for NamedOrRawVisitor<E> {
    type Value = E;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "name or integer value of {}", E::type_name())
    }

    fn visit_str<Er>(self, v: &str) -> Result<E, Er>
    where
        Er: de::Error,
    {
        E::string_to_enum(v).ok_or_else(|| {
            Er::custom(format_args!(
                "unknown variant '{v}' for type '{}'",
                E::type_name()
            ))
        })
    }

    fn visit_i64<Er>(self, v: i64) -> Result<E, Er>
    where
        Er: de::Error,
    {
        self.visit_i128(v.into())
    }

    fn visit_u64<Er>(self, v: u64) -> Result<E, Er>
    where
        Er: de::Error,
    {
        self.visit_i128(v.into())
    }

    fn visit_i128<Er>(self, v: i128) -> Result<E, Er>
    where
        Er: de::Error,
    {
        E::int_to_enum(v).ok_or_else(|| {
            Er::custom(format_args!(
                "unknown value {v} for type '{}'",
                E::type_name()
            ))
        })
    }
}

/// Displays the names in a set joined by `|`.
struct NameList<E: Dense>(EnumBitset<E>);

impl<E: Dense> Display for NameList<E> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char('|')?;
            }
            write!(f, "{}", Named(value))?;
        }
        Ok(())
    }
}

/// `|`-joined names in human-readable formats, the raw bits otherwise.
impl<E: Dense> Serialize for EnumBitset<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(&NameList(*self))
        } else {
            serializer.serialize_u64(self.to_u64())
        }
    }
}

struct BitsetVisitor<E> {
    _p: PhantomData<E>,
}

impl<'de, E: Dense> Visitor<'de> for BitsetVisitor<E> {
    type Value = EnumBitset<E>;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "`|`-separated names or raw bits of {}", E::type_name())
    }

    fn visit_str<Er>(self, v: &str) -> Result<Self::Value, Er>
    where
        Er: de::Error,
    {
        EnumBitset::parse(v, ParseOptions::strict()).map_err(|e| {
            Er::custom(format_args!(
                "unknown variant '{}' for type '{}'",
                e.name(),
                E::type_name()
            ))
        })
    }

    fn visit_u64<Er>(self, v: u64) -> Result<Self::Value, Er>
    where
        Er: de::Error,
    {
        EnumBitset::from_bits(v).map_err(Er::custom)
    }
}

/// Accepts `|`-joined names or raw bits in human-readable formats, the raw bits otherwise.
impl<'de, E: Dense> Deserialize<'de> for EnumBitset<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(BitsetVisitor { _p: PhantomData })
        } else {
            let bits = u64::deserialize(deserializer)?;
            EnumBitset::from_bits(bits).map_err(de::Error::custom)
        }
    }
}
