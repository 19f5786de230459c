/*
[INPUT]:  Coin ticker and quote currency
[OUTPUT]: Spot price payload
[POS]:    HTTP layer - ticker resource
[UPDATE]: When the ticker query parameters change
*/

use crate::http::{BaseClient, ClientConfig, Result};
use crate::parser::{NullableParser, ResponseParser};
use crate::types::{Credentials, Customer, QueryParams, Resource};
use std::ops::Deref;

/// Client for the `ticker` resource
#[derive(Debug, Clone)]
pub struct SpotPriceClient<P = NullableParser> {
    base: BaseClient<P>,
}

impl SpotPriceClient {
    /// Create a client against the production API with the default parser
    pub fn new(customer: impl Into<Customer>, credentials: impl Into<Credentials>) -> Result<Self> {
        Self::with_parser(customer, credentials, NullableParser)
    }
}

impl<P: ResponseParser> SpotPriceClient<P> {
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
        let base = BaseClient::new(config, Resource::SpotPrice, customer, credentials, parser)?;
        Ok(Self { base })
    }

    /// Query parameters for a spot price lookup
    pub fn params(ticker: &str, currency: &str) -> QueryParams {
        QueryParams::new()
            .with("coin", ticker)
            .with("show", currency)
    }

    /// Current price of `ticker` quoted in USD
    ///
    /// GET /{customer}/ticker/?coin={ticker}&show=usd
    pub async fn get(&self, ticker: &str) -> Result<P::Output> {
        self.get_in(ticker, "usd").await
    }

    /// Current price of `ticker` quoted in `currency`
    ///
    /// GET /{customer}/ticker/?coin={ticker}&show={currency}
    pub async fn get_in(&self, ticker: &str, currency: &str) -> Result<P::Output> {
        self.base.get(&Self::params(ticker, currency)).await
    }
}

impl<P> Deref for SpotPriceClient<P> {
    type Target = BaseClient<P>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_initializes_correctly() {
        let client = SpotPriceClient::new("customer", ("Key", "Token")).expect("client init");
        assert_eq!(client.customer().as_str(), "customer");
        assert_eq!(client.credentials().header_name, "Key");
        assert_eq!(client.credentials().header_value, "Token");
        assert_eq!(client.path(), "ticker");
        assert_eq!(
            client.url().as_str(),
            "https://api.bravenewcoin.com/customer/ticker/"
        );
    }

    #[test]
    fn test_params_default_currency() {
        let params = SpotPriceClient::<NullableParser>::params("btc", "usd");
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["coin", "show"]);
        assert_eq!(params.get("coin"), Some("btc"));
        assert_eq!(params.get("show"), Some("usd"));
    }

    #[tokio::test]
    async fn test_get_sends_coin_and_show() {
        let server = MockServer::start().await;
        let body = json!({"success": true, "coin_id": "BTC", "last_price": "13444.3"});

        let _mock = Mock::given(method("GET"))
            .and(path("/customer/ticker/"))
            .and(query_param("coin", "btc"))
            .and(query_param("show", "usd"))
            .and(header("Key", "Token"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = SpotPriceClient::with_config(
            ClientConfig::new(server.uri()),
            "customer",
            ("Key", "Token"),
            NullableParser,
        )
        .expect("client init");

        let data: Value = client.get("btc").await.expect("spot price");
        assert_eq!(data, body);
    }

    #[tokio::test]
    async fn test_get_in_other_currency() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/customer/ticker/"))
            .and(query_param("coin", "eth"))
            .and(query_param("show", "eur"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = SpotPriceClient::with_config(
            ClientConfig::new(server.uri()),
            "customer",
            ("Key", "Token"),
            NullableParser,
        )
        .expect("client init");

        client.get_in("eth", "eur").await.expect("spot price");
    }
}
