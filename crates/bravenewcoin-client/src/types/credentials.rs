/*
[INPUT]:  Customer identifiers (string or numeric) and API key header pairs
[OUTPUT]: Customer and Credentials values embedded in every request
[POS]:    Data layer - caller identity
[UPDATE]: When the authentication scheme changes
*/

use std::fmt;

/// Account identifier embedded in the request path.
///
/// The API accepts both textual and numeric customer ids, so either converts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Customer(String);

impl Customer {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Customer {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Customer {
    fn from(value: String) -> Self {
        Self(value)
    }
}

macro_rules! customer_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Customer {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

customer_from_int!(u16, u32, u64, usize, i32, i64);

/// API key credential sent as a single request header
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub header_name: String,
    pub header_value: String,
}

impl Credentials {
    pub fn new(header_name: impl Into<String>, header_value: impl Into<String>) -> Self {
        Self {
            header_name: header_name.into(),
            header_value: header_value.into(),
        }
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Credentials {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

// The header value is a secret; keep it out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("header_name", &self.header_name)
            .field("header_value", &"<redacted>")
            .finish()
    }
}
