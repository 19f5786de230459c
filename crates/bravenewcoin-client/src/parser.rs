/*
[INPUT]:  Decoded JSON envelope from a successful response
[OUTPUT]: Caller-facing value produced by the configured parser
[POS]:    Response layer - pluggable payload transformation
[UPDATE]: When adding built-in parsers or changing the parser contract
*/

use crate::http::{BraveError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// Turns the decoded response envelope into the value returned to callers.
///
/// The client hands over the whole envelope, `success` flag included, only
/// after the flag has been checked. Errors returned here reach the caller
/// untouched.
///
/// Any `Fn(Value) -> Result<T>` is a parser:
///
/// ```rust
/// use bravenewcoin_client::{BraveError, ResponseParser};
/// use serde_json::{json, Value};
///
/// let last_price = |raw: Value| {
///     raw.get("last_price")
///         .and_then(Value::as_f64)
///         .ok_or_else(|| BraveError::Parse("missing last_price".into()))
/// };
/// let price = last_price.parse(json!({"success": true, "last_price": 9.5})).unwrap();
/// assert_eq!(price, 9.5);
/// ```
pub trait ResponseParser: Send + Sync {
    type Output;

    fn parse(&self, raw: Value) -> Result<Self::Output>;
}

/// Default parser: returns the decoded JSON unchanged.
///
/// Only reached with a body that decoded as JSON; an empty or non-JSON body
/// fails earlier with [`BraveError::Serialization`]. A literal `null` body is
/// not an envelope and is rejected as a failed call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullableParser;

impl ResponseParser for NullableParser {
    type Output = Value;

    fn parse(&self, raw: Value) -> Result<Value> {
        Ok(raw)
    }
}

/// Deserializes the envelope into a caller-defined type
pub struct TypedParser<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedParser<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for TypedParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypedParser<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TypedParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedParser")
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: DeserializeOwned> ResponseParser for TypedParser<T> {
    type Output = T;

    fn parse(&self, raw: Value) -> Result<T> {
        serde_json::from_value(raw).map_err(BraveError::from)
    }
}

impl<F, T> ResponseParser for F
where
    F: Fn(Value) -> Result<T> + Send + Sync,
{
    type Output = T;

    fn parse(&self, raw: Value) -> Result<T> {
        self(raw)
    }
}
