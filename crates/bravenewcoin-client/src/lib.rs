/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Brave New Coin client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Client for the Brave New Coin market-data API.
//!
//! Three resource clients share one request routine: [`SpotPriceClient`]
//! (`ticker`), [`ExchangeClient`] (`mwa-historic`) and [`MarketClient`]
//! (`market-table`). Every call is a single authenticated GET against
//! `{base}/{customer}/{path}/`; the JSON envelope's `success` flag is checked
//! and the decoded body is handed to a [`ResponseParser`].
//!
//! ```rust,no_run
//! use bravenewcoin_client::SpotPriceClient;
//!
//! # async fn run() -> bravenewcoin_client::Result<()> {
//! let client = SpotPriceClient::new("customer", ("X-Api-Key", "secret"))?;
//! let ticker = client.get("btc").await?;
//! println!("{ticker}");
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod http;
pub mod parser;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};

// Re-export commonly used types from http
pub use http::{
    BaseClient,
    BraveError,
    ClientConfig,
    DEFAULT_BASE_URL,
    ExchangeClient,
    MarketClient,
    Result,
    SpotPriceClient,
};
pub use http::exchange::ExchangeQuery;

pub use parser::{NullableParser, ResponseParser, TypedParser};

// Re-export all types
pub use types::*;
