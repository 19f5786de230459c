/*
[INPUT]:  Scalar request values (symbols, currencies, instants, day counts)
[OUTPUT]: Ordered query parameters ready for reqwest
[POS]:    Data layer - per-call request parameters
[UPDATE]: When a resource needs a new parameter encoding
*/

use chrono::{DateTime, TimeZone};
use serde::{Serialize, Serializer};
use std::fmt;

/// Seconds since the UNIX epoch, with microsecond fraction.
///
/// Rendered with the shortest round-trip float form, so a whole-second
/// instant is sent as `1514808060.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct UnixTimestamp(pub f64);

impl UnixTimestamp {
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for UnixTimestamp {
    fn from(value: DateTime<Tz>) -> Self {
        let seconds = value.timestamp() as f64;
        let micros = f64::from(value.timestamp_subsec_micros()) / 1_000_000.0;
        Self(seconds + micros)
    }
}

impl fmt::Display for UnixTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Serialize for UnixTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Query parameters for a single request, kept in insertion order.
///
/// Built fresh for every call. Setting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &'static str, value: impl ToString) {
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.pairs.serialize(serializer)
    }
}
