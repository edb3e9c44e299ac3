//! Two-field `{ data, error }` representation of an outcome.
//!
//! Inside Rust an outcome is a plain `Result`. At a serialization boundary,
//! consumers often expect an object with exactly one of `data` and `error`
//! set. [`Envelope`] is that object.
//!
//! # Examples
//!
//! ```
//! use catch_rail::Envelope;
//!
//! let ok: Envelope<&str, String> = Ok("Mock Data").into();
//! assert_eq!(
//!     serde_json::to_string(&ok).unwrap(),
//!     r#"{"data":"Mock Data","error":null}"#
//! );
//!
//! let err: Envelope<&str, String> = Err("failed".to_string()).into();
//! assert_eq!(err.into_result(), Err("failed".to_string()));
//!
//! // A success value that serializes to `null` survives the round trip.
//! let unit: Envelope<(), String> = serde_json::from_str(r#"{"data":null,"error":null}"#).unwrap();
//! assert_eq!(unit.into_result(), Ok(()));
//! ```
use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, IntoDeserializer, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::InternalError;

/// Serializable `{ data, error }` view of a `Result<T, E>`.
///
/// Built from a `Result`, exactly one field is `Some`. A deserialized value
/// may violate that; [`into_result`](Self::into_result) decides by `error`
/// first.
///
/// A `null` under `data` is read as `T` when `T` accepts a unit value
/// (`()`, `Option<_>`, unit structs), so `Ok(())` round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>, E: Deserialize<'de>"))]
pub struct Envelope<T, E> {
    #[serde(default, deserialize_with = "deserialize_data")]
    pub data: Option<T>,
    pub error: Option<E>,
}

impl<T, E> Envelope<T, E> {
    /// Returns `true` if no error is set and a value is present.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.data.is_some()
    }

    /// Returns `true` if an error is set, whatever `data` holds.
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// Converts back into a `Result`.
    ///
    /// A set `error` wins over `data`. An envelope with neither field set
    /// becomes an [`InternalError`] converted into `E`.
    pub fn into_result(self) -> Result<T, E>
    where
        E: From<InternalError>,
    {
        match (self.data, self.error) {
            (_, Some(error)) => Err(error),
            (Some(data), None) => Ok(data),
            (None, None) => Err(E::from(InternalError::new())),
        }
    }
}

impl<T, E> From<Result<T, E>> for Envelope<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self { data: Some(data), error: None },
            Err(error) => Self { data: None, error: Some(error) },
        }
    }
}

fn deserialize_data<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    deserializer.deserialize_option(DataVisitor(PhantomData))
}

struct DataVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for DataVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an envelope data value or null")
    }

    // `null` is a value for unit-like `T`, absence for everything else.
    fn visit_none<X: de::Error>(self) -> Result<Self::Value, X> {
        Ok(T::deserialize(<() as IntoDeserializer<'de, X>>::into_deserializer(())).ok())
    }

    fn visit_unit<X: de::Error>(self) -> Result<Self::Value, X> {
        self.visit_none()
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        T::deserialize(deserializer).map(Some)
    }
}
