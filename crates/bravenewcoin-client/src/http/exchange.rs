/*
[INPUT]:  Coin ticker, optional time window and market currency
[OUTPUT]: Historical market-weighted exchange payload
[POS]:    HTTP layer - mwa-historic resource
[UPDATE]: When the historic query parameters or time defaulting change
*/

use crate::clock::{Clock, SystemClock};
use crate::http::{BaseClient, ClientConfig, Result};
use crate::parser::{NullableParser, ResponseParser};
use crate::types::{Credentials, Customer, QueryParams, Resource, UnixTimestamp};
use chrono::{DateTime, Utc};
use std::ops::Deref;
use std::sync::Arc;

/// Window and market for a historical exchange lookup.
///
/// `start_at` falls back to the client's clock when unset; `to` is only sent
/// when `end_at` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeQuery {
    pub ticker: String,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub currency: String,
}

impl ExchangeQuery {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            start_at: None,
            end_at: None,
            currency: "usd".to_string(),
        }
    }

    #[must_use]
    pub fn start_at(mut self, start_at: DateTime<Utc>) -> Self {
        self.start_at = Some(start_at);
        self
    }

    #[must_use]
    pub fn end_at(mut self, end_at: DateTime<Utc>) -> Self {
        self.end_at = Some(end_at);
        self
    }

    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

/// Client for the `mwa-historic` resource
#[derive(Debug, Clone)]
pub struct ExchangeClient<P = NullableParser> {
    base: BaseClient<P>,
    clock: Arc<dyn Clock>,
}

impl ExchangeClient {
    /// Create a client against the production API with the default parser
    pub fn new(customer: impl Into<Customer>, credentials: impl Into<Credentials>) -> Result<Self> {
        Self::with_parser(customer, credentials, NullableParser)
    }
}

impl<P: ResponseParser> ExchangeClient<P> {
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
        let base = BaseClient::new(config, Resource::Exchange, customer, credentials, parser)?;
        Ok(Self {
            base,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the clock used when a query has no `start_at`
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Query parameters for `query`, resolving a missing start against the clock
    pub fn params(&self, query: &ExchangeQuery) -> QueryParams {
        let start_at = query.start_at.unwrap_or_else(|| self.clock.now());

        let mut params = QueryParams::new()
            .with("coin", &query.ticker)
            .with("from", UnixTimestamp::from(start_at))
            .with("market", &query.currency);
        if let Some(end_at) = query.end_at {
            params.insert("to", UnixTimestamp::from(end_at));
        }
        params
    }

    /// History of `ticker` in USD starting now
    ///
    /// GET /{customer}/mwa-historic/?coin={ticker}&from={now}&market=usd
    pub async fn get(&self, ticker: &str) -> Result<P::Output> {
        self.get_with(&ExchangeQuery::new(ticker)).await
    }

    /// History for an explicit window and market
    ///
    /// GET /{customer}/mwa-historic/?coin={ticker}&from={start}&market={currency}[&to={end}]
    pub async fn get_with(&self, query: &ExchangeQuery) -> Result<P::Output> {
        self.base.get(&self.params(query)).await
    }
}

impl<P> Deref for ExchangeClient<P> {
    type Target = BaseClient<P>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
