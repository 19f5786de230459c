/*
[INPUT]:  HTTP configuration (base URL, timeouts), customer, credentials, parser
[OUTPUT]: Validated, parsed API payloads from a single GET exchange
[POS]:    HTTP layer - core client implementation shared by every resource
[UPDATE]: When adding connection options or changing request/response handling
*/

use crate::http::{BraveError, Result};
use crate::parser::{NullableParser, ResponseParser};
use crate::types::{Credentials, Customer, QueryParams, Resource};
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.bravenewcoin.com/";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at another API root, e.g. a mock server
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or not http(s).
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(BraveError::Config("base_url cannot be empty".to_string()));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(BraveError::Config(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}

/// Shared request routine behind every resource client.
///
/// Holds the immutable per-client state: the resolved resource URL, the two
/// request headers and the parser. Each [`get`](BaseClient::get) performs
/// exactly one GET with no retry.
#[derive(Debug, Clone)]
pub struct BaseClient<P = NullableParser> {
    http_client: Client,
    resource: Resource,
    customer: Customer,
    credentials: Credentials,
    customer_base_url: Url,
    url: Url,
    headers: HeaderMap,
    parser: P,
}

impl<P: ResponseParser> BaseClient<P> {
    /// Create a client for `resource`.
    ///
    /// Fails before any network activity if the configuration, URL or
    /// credential header is invalid.
    pub fn new(
        config: ClientConfig,
        resource: Resource,
        customer: impl Into<Customer>,
        credentials: impl Into<Credentials>,
        parser: P,
    ) -> Result<Self> {
        config.validate()?;
        let customer = customer.into();
        let credentials = credentials.into();

        let root = Url::parse(config.base_url.trim_end_matches('/'))?;
        let customer_base_url = append_segment(&root, customer.as_str())?;
        let url = append_segment(&customer_base_url, resource.path())?;
        let headers = build_headers(&credentials)?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            resource,
            customer,
            credentials,
            customer_base_url,
            url,
            headers,
            parser,
        })
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Path segment of the resource
    pub fn path(&self) -> &'static str {
        self.resource.path()
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// `{base}/{customer}/`
    pub fn customer_base_url(&self) -> &Url {
        &self.customer_base_url
    }

    /// `{base}/{customer}/{path}/`
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Credential header plus `Accept: application/json`
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Issue the GET and hand the validated envelope to the parser.
    ///
    /// Non-2xx statuses come back as [`BraveError::Http`]; a falsy `success`
    /// flag comes back as [`BraveError::Connection`] carrying the `error` field.
    pub async fn get(&self, params: &QueryParams) -> Result<P::Output> {
        debug!(
            resource = %self.resource,
            url = %self.url,
            params = ?params.as_slice(),
            "sending request"
        );

        let response = self
            .http_client
            .get(self.url.clone())
            .query(params)
            .headers(self.headers.clone())
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let data: Value = serde_json::from_slice(&body)?;
        check_envelope(&data)?;

        debug!(resource = %self.resource, "request succeeded");
        self.parser.parse(data)
    }
}

/// Append `segment` as one percent-encoded path segment with a trailing slash.
///
/// `?`, `#` and `/` inside the segment stay part of it instead of ending the path.
fn append_segment(base: &Url, segment: &str) -> Result<Url> {
    if segment.is_empty() {
        return Err(BraveError::Config("path segment cannot be empty".to_string()));
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| BraveError::Config(format!("{} cannot be a base URL", base)))?
        .pop_if_empty()
        .push(segment)
        .push("");
    Ok(url)
}

fn build_headers(credentials: &Credentials) -> Result<HeaderMap> {
    let name = HeaderName::from_bytes(credentials.header_name.as_bytes()).map_err(|err| {
        BraveError::InvalidCredentials(format!(
            "header name {:?}: {}",
            credentials.header_name, err
        ))
    })?;
    let mut value = HeaderValue::from_str(&credentials.header_value)
        .map_err(|err| BraveError::InvalidCredentials(format!("header value: {}", err)))?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(name, value);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Reject envelopes whose `success` flag is missing or falsy
pub(crate) fn check_envelope(data: &Value) -> Result<()> {
    let success = data.get("success").is_some_and(is_truthy);
    if success {
        return Ok(());
    }

    let error = data.get("error").cloned().unwrap_or(Value::Null);
    warn!(error = %error, "API reported failure");
    Err(BraveError::Connection { error })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn client(base_url: &str, customer: impl Into<Customer>) -> BaseClient {
        BaseClient::new(
            ClientConfig::new(base_url),
            Resource::SpotPrice,
            customer,
            ("Key", "Token"),
            NullableParser,
        )
        .expect("client init")
    }

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("http://localhost:8080")
            .with_timeout(Duration::from_secs(5))
            .with_connect_timeout(Duration::from_secs(1));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
    }

    #[rstest]
    #[case("")]
    #[case("ftp://api.bravenewcoin.com")]
    fn test_config_validate_rejects(#[case] base_url: &str) {
        assert!(matches!(
            ClientConfig::new(base_url).validate(),
            Err(BraveError::Config(_))
        ));
    }

    #[test]
    fn test_urls_with_string_customer() {
        let client = client(DEFAULT_BASE_URL, "customer");
        assert_eq!(
            client.customer_base_url().as_str(),
            "https://api.bravenewcoin.com/customer/"
        );
        assert_eq!(
            client.url().as_str(),
            "https://api.bravenewcoin.com/customer/ticker/"
        );
    }

    #[rstest]
    #[case("https://api.bravenewcoin.com")]
    #[case("https://api.bravenewcoin.com/")]
    #[case("https://api.bravenewcoin.com//")]
    fn test_urls_with_numeric_customer(#[case] base_url: &str) {
        let client = client(base_url, 1u32);
        assert_eq!(client.url().as_str(), "https://api.bravenewcoin.com/1/ticker/");
    }

    #[test]
    fn test_url_keeps_base_path() {
        let client = client("https://proxy.example.com/bnc/", "customer");
        assert_eq!(
            client.url().as_str(),
            "https://proxy.example.com/bnc/customer/ticker/"
        );
    }

    #[rstest]
    #[case("a?b", "https://api.bravenewcoin.com/a%3Fb/ticker/")]
    #[case("a#b", "https://api.bravenewcoin.com/a%23b/ticker/")]
    #[case("a/b", "https://api.bravenewcoin.com/a%2Fb/ticker/")]
    fn test_customer_is_a_single_encoded_segment(#[case] customer: &str, #[case] expected: &str) {
        let client = client(DEFAULT_BASE_URL, customer);
        assert_eq!(client.url().as_str(), expected);
        assert_eq!(client.customer().as_str(), customer);
    }

    #[test]
    fn test_empty_customer_is_rejected() {
        let err = BaseClient::new(
            ClientConfig::default(),
            Resource::SpotPrice,
            "",
            ("Key", "Token"),
            NullableParser,
        )
        .unwrap_err();
        assert!(matches!(err, BraveError::Config(_)));
    }

    #[test]
    fn test_headers_are_credentials_plus_accept() {
        let client = client(DEFAULT_BASE_URL, "customer");
        let headers = client.headers();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("Key").unwrap(), "Token");
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_invalid_header_name_is_rejected() {
        let err = BaseClient::new(
            ClientConfig::default(),
            Resource::Market,
            "customer",
            ("bad header", "Token"),
            NullableParser,
        )
        .unwrap_err();
        assert!(matches!(err, BraveError::InvalidCredentials(_)));
    }

    #[rstest]
    #[case(json!({"success": true}), true)]
    #[case(json!({"success": 1}), true)]
    #[case(json!({"success": "yes"}), true)]
    #[case(json!({"success": false, "error": "bad request"}), false)]
    #[case(json!({"success": null}), false)]
    #[case(json!({"success": 0}), false)]
    #[case(json!({"success": ""}), false)]
    #[case(json!({"error": "no flag"}), false)]
    #[case(json!([]), false)]
    fn test_check_envelope(#[case] data: Value, #[case] ok: bool) {
        assert_eq!(check_envelope(&data).is_ok(), ok);
    }

    #[test]
    fn test_check_envelope_carries_error_detail() {
        let err = check_envelope(&json!({"success": false, "error": "bad request"})).unwrap_err();
        assert_eq!(err.detail(), Some(&json!("bad request")));

        let err = check_envelope(&json!({"success": false})).unwrap_err();
        assert_eq!(err.detail(), Some(&Value::Null));
    }
}
