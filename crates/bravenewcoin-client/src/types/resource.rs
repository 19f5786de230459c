/*
[INPUT]:  Resource variant selected by a client
[OUTPUT]: URL path segment for that resource
[POS]:    Data layer - endpoint catalogue
[UPDATE]: When the API exposes a new resource
*/

use std::fmt;

/// Market-data resources exposed under a customer's base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Spot price ticker
    SpotPrice,
    /// Historical market-weighted exchange data
    Exchange,
    /// Market table summary
    Market,
}

impl Resource {
    /// Path segment appended to `{base}/{customer}/`
    pub fn path(self) -> &'static str {
        match self {
            Resource::SpotPrice => "ticker",
            Resource::Exchange => "mwa-historic",
            Resource::Market => "market-table",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
