/*
[INPUT]:  Day count
[OUTPUT]: Market table payload
[POS]:    HTTP layer - market-table resource
[UPDATE]: When the market table query parameters change
*/

use crate::http::{BaseClient, ClientConfig, Result};
use crate::parser::{NullableParser, ResponseParser};
use crate::types::{Credentials, Customer, QueryParams, Resource};
use std::ops::Deref;

/// Client for the `market-table` resource
#[derive(Debug, Clone)]
pub struct MarketClient<P = NullableParser> {
    base: BaseClient<P>,
}

impl MarketClient {
    /// Create a client against the production API with the default parser
    pub fn new(customer: impl Into<Customer>, credentials: impl Into<Credentials>) -> Result<Self> {
        Self::with_parser(customer, credentials, NullableParser)
    }
}

impl<P: ResponseParser> MarketClient<P> {
    pub fn with_parser(
        customer: impl Into<Customer>,
        credentials: impl Into<Credentials>,
        parser: P,
    ) -> Result<Self> {
        Self::with_config(ClientConfig::default(), customer, credentials, parser)
    }

    pub fn with_config(
        config: ClientConfig,
        customer: impl Into<Customer>,
        credentials: impl Into<Credentials>,
        parser: P,
    ) -> Result<Self> {
        let base = BaseClient::new(config, Resource::Market, customer, credentials, parser)?;
        Ok(Self { base })
    }

    pub fn params(days: u32) -> QueryParams {
        QueryParams::new().with("days", days)
    }

    /// Market table for the last day
    ///
    /// GET /{customer}/market-table/?days=1
    pub async fn get(&self) -> Result<P::Output> {
        self.get_days(1).await
    }

    /// Market table covering `days` days
    ///
    /// GET /{customer}/market-table/?days={days}
    pub async fn get_days(&self, days: u32) -> Result<P::Output> {
        self.base.get(&Self::params(days)).await
    }
}

impl<P> Deref for MarketClient<P> {
    type Target = BaseClient<P>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
