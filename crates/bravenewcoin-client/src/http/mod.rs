/*
[INPUT]:  Client configuration, customer, credentials and per-call parameters
[OUTPUT]: Parsed API payloads or typed errors
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new resources or changing client behavior
*/

pub mod client;
pub mod error;
pub mod exchange;
pub mod market;
pub mod spot;

pub use error::{BraveError, Result};

pub use client::{BaseClient, ClientConfig, DEFAULT_BASE_URL};
pub use exchange::ExchangeClient;
pub use market::MarketClient;
pub use spot::SpotPriceClient;
