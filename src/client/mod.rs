//! Async REST client for the tzKT API.
//!
//! Methods are grouped by resource family, one `impl TzktClient` block per module. Every
//! method issues exactly one `GET <domain>/v1/<path>`.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::query_helpers::{CompiledQuery, DOMAIN_FIELD, FilterValue, Filters, ParameterError};
use crate::types::{MichelineFormat, QuoteCurrency};

mod accounts;
mod balances;
mod bigmaps;
mod blocks;
mod commitments;
mod contracts;
mod cycles;
mod delegates;
mod head;
mod home;
mod operations;
mod protocols;
mod quotes;
mod rewards;
mod rights;
mod software;
mod statistics;
mod voting;

pub const MAINNET_URL: &str = "https://api.tzkt.io";
pub const GHOSTNET_URL: &str = "https://api.ghostnet.tzkt.io";
pub const LOCAL_URL: &str = "http://localhost:5000";

/// Client error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid parameters: {0}")]
    Parameter(#[from] ParameterError),
    #[error("expected an integer body, got {0:?}")]
    InvalidCount(String),
    #[error("invalid API root {0:?}")]
    InvalidUrl(String),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Settings for [`TzktClient::with_config`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API root, without the `/v1` prefix.
    pub base_url: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: MAINNET_URL.to_string(),
            timeout: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Parameters of one request: compiled filters plus the server they target.
#[derive(Debug, Default)]
pub(crate) struct Query {
    domain: Option<String>,
    params: CompiledQuery,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Compiles `filters` against `whitelist` and pulls out any `domain` override.
    ///
    /// No key based on `domain` is ever sent. Only the bare key selects the server; a
    /// suffixed one such as `domain__eq` is rejected.
    pub(crate) fn filtered(filters: &Filters, whitelist: &[&str]) -> Result<Self> {
        let mut params = crate::query_helpers::compile(filters, whitelist, &[])?;
        let mut domain = None;
        let mut suffixed = Vec::new();
        for (key, value) in params.take_base(DOMAIN_FIELD) {
            if key == DOMAIN_FIELD {
                domain = Some(value.to_string());
            } else {
                suffixed.push(key);
            }
        }
        if !suffixed.is_empty() {
            return Err(ParameterError::InvalidFields(suffixed).into());
        }
        Ok(Self { domain, params })
    }

    pub(crate) fn param(mut self, key: &str, value: impl Into<FilterValue>) -> Self {
        self.params.insert(key, value);
        self
    }

    pub(crate) fn param_opt(self, key: &str, value: Option<impl Into<FilterValue>>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Comma-joins collection values of `base`.
    pub(crate) fn join_lists(mut self, base: &str) -> Self {
        self.params.join_lists(base);
        self
    }

    pub(crate) fn quote(self, currencies: &[QuoteCurrency]) -> Self {
        self.param_opt("quote", QuoteCurrency::join(currencies))
    }

    pub(crate) fn micheline(self, format: MichelineFormat) -> Self {
        if format == MichelineFormat::Json {
            return self;
        }
        self.param("micheline", u32::from(format.as_param()))
    }

    pub(crate) fn pairs(&self) -> Vec<(String, String)> {
        self.params.to_query_pairs()
    }
}

/// Endpoint path below `/v1`.
///
/// Route text is split on `/`. Each argument is one segment and is percent-encoded when
/// the URL is built, so `?`, `#` and `/` inside it stay part of the segment.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Path(Vec<String>);

impl Path {
    pub(crate) fn new(route: &str) -> Self {
        Self(route.split('/').map(str::to_string).collect())
    }

    pub(crate) fn arg(mut self, value: impl std::fmt::Display) -> Self {
        self.0.push(value.to_string());
        self
    }

    pub(crate) fn then(mut self, route: &str) -> Self {
        self.0.extend(route.split('/').map(str::to_string));
        self
    }
}

impl From<&str> for Path {
    fn from(route: &str) -> Self {
        Self::new(route)
    }
}

/// Async client for the tzKT REST API.
///
/// Cloning is cheap: clones share the underlying connection handle.
///
/// # Example
///
/// ```no_run
/// use tzkt_client::TzktClient;
/// use tzkt_client::query_helpers::{Comparator, Filters};
///
/// #[tokio::main]
/// async fn main() -> tzkt_client::client::Result<()> {
///     let client = TzktClient::mainnet();
///     let head = client.head().await?;
///     println!("Head level: {}", head.level);
///
///     let filters = Filters::new()
///         .with_modifier("level", Comparator::Gt, head.level - 10)
///         .limit(5);
///     for block in client.blocks(&filters, &[]).await? {
///         println!("{} {}", block.level, block.hash);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TzktClient {
    client: Client,
    url: String,
}

impl TzktClient {
    /// Create a new client with a custom API root.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: normalize(url.into()),
        }
    }

    /// Create a client from explicit settings.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url: normalize(config.base_url),
        })
    }

    /// Create a client for Tezos mainnet.
    pub fn mainnet() -> Self {
        Self::new(MAINNET_URL)
    }

    /// Create a client for the Ghostnet test network.
    pub fn ghostnet() -> Self {
        Self::new(GHOSTNET_URL)
    }

    /// Create a client for a local tzKT instance (localhost:5000).
    pub fn local() -> Self {
        Self::new(LOCAL_URL)
    }

    /// Same connection, different API root. Covers endpoints that take no filters.
    pub fn with_domain(&self, url: impl Into<String>) -> Self {
        Self {
            client: self.client.clone(),
            url: normalize(url.into()),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn endpoint(&self, domain: Option<&str>, path: &Path) -> Result<Url> {
        let root = domain.map(|d| d.trim_end_matches('/')).unwrap_or(&self.url);
        let mut url = Url::parse(root).map_err(|_| Error::InvalidUrl(root.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(root.to_string()))?
            .pop_if_empty()
            .push("v1")
            .extend(&path.0);
        Ok(url)
    }

    async fn send(&self, path: Path, query: &Query) -> Result<reqwest::Response> {
        let url = self.endpoint(query.domain.as_deref(), &path)?;
        let pairs = query.pairs();
        debug!(%url, params = pairs.len(), "sending tzkt request");

        let response = self.client.get(url.clone()).query(&pairs).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    warn!(%url, error = %err, "failed to read error body");
                    String::new()
                }
            };
            warn!(%url, status = status.as_u16(), %message, "tzkt request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: impl Into<Path>,
        query: Query,
    ) -> Result<T> {
        let body = self.send(path.into(), &query).await?.bytes().await?;
        debug!(bytes = body.len(), "decoding tzkt response");
        Ok(serde_json::from_slice(&body)?)
    }

    pub(crate) async fn get_text(&self, path: impl Into<Path>, query: Query) -> Result<String> {
        Ok(self.send(path.into(), &query).await?.text().await?)
    }

    pub(crate) async fn get_bytes(&self, path: impl Into<Path>, query: Query) -> Result<Vec<u8>> {
        Ok(self.send(path.into(), &query).await?.bytes().await?.to_vec())
    }

    /// Fetches a bare integer body, as returned by `count` endpoints.
    pub(crate) async fn get_count(&self, path: impl Into<Path>, query: Query) -> Result<u64> {
        let body = self.get_text(path, query).await?;
        body.trim().parse().map_err(|_| Error::InvalidCount(body))
    }

    pub(crate) async fn get_integer(&self, path: impl Into<Path>, query: Query) -> Result<i64> {
        let body = self.get_text(path, query).await?;
        body.trim().parse().map_err(|_| Error::InvalidCount(body))
    }
}

fn normalize(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_helpers::Comparator;

    #[test]
    fn test_client_creation() {
        let client = TzktClient::mainnet();
        assert_eq!(client.url(), "https://api.tzkt.io");

        let client = TzktClient::ghostnet();
        assert_eq!(client.url(), "https://api.ghostnet.tzkt.io");

        let client = TzktClient::new("https://custom.tzkt.io/");
        assert_eq!(client.url(), "https://custom.tzkt.io");

        let other = client.with_domain("http://localhost:5000");
        assert_eq!(other.url(), LOCAL_URL);
    }

    #[test]
    fn config_defaults_to_mainnet() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, MAINNET_URL);
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("tzkt-client/"));

        let client = TzktClient::with_config(ClientConfig {
            base_url: "https://example.org/".into(),
            timeout: Some(Duration::from_secs(5)),
            ..ClientConfig::default()
        })
        .unwrap();
        assert_eq!(client.url(), "https://example.org");
    }

    #[test]
    fn endpoint_prefers_domain_override() {
        let client = TzktClient::mainnet();
        let head = Path::from("head");
        assert_eq!(
            client.endpoint(None, &head).unwrap().as_str(),
            "https://api.tzkt.io/v1/head"
        );
        assert_eq!(
            client
                .endpoint(Some("https://api.ghostnet.tzkt.io/"), &head)
                .unwrap()
                .as_str(),
            "https://api.ghostnet.tzkt.io/v1/head"
        );
    }

    #[test]
    fn endpoint_encodes_path_arguments() {
        let client = TzktClient::mainnet();
        let path = Path::new("bigmaps").arg(7).then("keys").arg("a/b?limit=1#x");
        let url = client.endpoint(None, &path).unwrap();
        assert_eq!(url.path(), "/v1/bigmaps/7/keys/a%2Fb%3Flimit=1%23x");
        assert_eq!(url.query(), None);

        let path = Path::new("accounts").arg("tz1/../../head").then("contracts");
        let url = client.endpoint(None, &path).unwrap();
        assert_eq!(url.path(), "/v1/accounts/tz1%2F..%2F..%2Fhead/contracts");
    }

    #[test]
    fn endpoint_keeps_root_path_prefix() {
        let client = TzktClient::new("http://localhost:5000/tzkt/");
        let url = client.endpoint(None, &Path::new("voting/periods/current")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/tzkt/v1/voting/periods/current");
    }

    #[test]
    fn endpoint_rejects_invalid_root() {
        let client = TzktClient::new("not a url");
        let err = client.endpoint(None, &Path::from("head")).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(ref root) if root == "not a url"));
    }

    #[test]
    fn query_takes_domain_out_of_params() {
        let filters = Filters::new()
            .with_modifier("level", Comparator::Gt, 10)
            .domain("https://api.ghostnet.tzkt.io");
        let query = Query::filtered(&filters, &["level"]).unwrap();
        assert_eq!(query.domain.as_deref(), Some("https://api.ghostnet.tzkt.io"));
        assert_eq!(query.pairs(), vec![("level.gt".to_string(), "10".to_string())]);
    }

    #[test]
    fn query_never_sends_suffixed_domain() {
        let filters = Filters::new()
            .with("domain__eq", "x")
            .with("snapshotIndex", 1);
        let err = Query::filtered(&filters, &["snapshotIndex"]).unwrap_err();
        assert!(matches!(
            err,
            Error::Parameter(ParameterError::InvalidFields(ref fields)) if fields == &["domain__eq"]
        ));
    }

    #[test]
    fn query_rejects_unknown_fields_before_sending() {
        let filters = Filters::new().with("bogus", 1).with("level", 2);
        let err = Query::filtered(&filters, &["level"]).unwrap_err();
        assert!(matches!(
            err,
            Error::Parameter(ParameterError::InvalidFields(ref fields)) if fields == &["bogus"]
        ));
    }

    #[test]
    fn optional_params() {
        let query = Query::new()
            .quote(&[QuoteCurrency::Usd, QuoteCurrency::Eur])
            .micheline(MichelineFormat::Json)
            .param_opt("metadata", None::<bool>);
        assert_eq!(query.pairs(), vec![("quote".to_string(), "usd,eur".to_string())]);

        let query = Query::new().quote(&[]).micheline(MichelineFormat::Raw);
        assert_eq!(query.pairs(), vec![("micheline".to_string(), "2".to_string())]);
    }
}
