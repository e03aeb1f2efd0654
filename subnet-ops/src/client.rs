use std::{
    io::{self, Error, ErrorKind},
    time::Duration,
};

use async_trait::async_trait;
use reqwest::{header, ClientBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::{
    manager::Manager,
    models::{ChainConfig, SubnetConfig},
};

pub const DEFAULT_BASE_URL: &str = "https://api.monad.network";
pub const DEFAULT_API_KEY: &str = "YOUR_API_KEY";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

pub const CREATE_SUBNET_PATH: &str = "v1/subnets";
pub const CREATE_CHAIN_PATH: &str = "v1/chains";

/// HTTP client for the subnet management API.
/// Every request carries the API key as a bearer credential.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    api_key: String,
    cli: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str, api_key: &str) -> io::Result<Self> {
        Self::new_with_timeout(
            base_url,
            api_key,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
        )
    }

    pub fn new_with_timeout(base_url: &str, api_key: &str, timeout: Duration) -> io::Result<Self> {
        let mut parsed = Url::parse(base_url).map_err(|e| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("failed to parse base URL '{}' ({})", base_url, e),
            )
        })?;
        if parsed.cannot_be_a_base() || !parsed.scheme().starts_with("http") {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("base URL '{}' is not a HTTP endpoint", base_url),
            ));
        }
        // relative joins must keep the base path (e.g., "https://host/api/")
        if !parsed.path().ends_with('/') {
            let p = format!("{}/", parsed.path());
            parsed.set_path(&p);
        }

        if api_key.trim().is_empty() {
            return Err(Error::new(ErrorKind::InvalidInput, "empty API key"));
        }

        let cli = ClientBuilder::new()
            .user_agent(env!("CARGO_PKG_NAME"))
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::new(
                    ErrorKind::Other,
                    format!("failed ClientBuilder build {}", e),
                )
            })?;

        log::info!("created client for '{}'", parsed);
        Ok(Self {
            base_url: parsed,
            api_key: api_key.to_string(),
            cli,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn join(&self, path: &str) -> io::Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| {
                Error::new(
                    ErrorKind::Other,
                    format!("failed to join parsed URL {}", e),
                )
            })
    }

    async fn post<T, R>(&self, path: &str, body: &T) -> io::Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let u = self.join(path)?;
        let d = serde_json::to_vec(body).map_err(|e| {
            Error::new(
                ErrorKind::Other,
                format!("failed to serialize to JSON {}", e),
            )
        })?;

        log::debug!("POST {} ({} bytes)", u, d.len());
        let resp = self
            .cli
            .post(u.as_str())
            .bearer_auth(&self.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .body(d)
            .send()
            .await
            .map_err(|e| Error::new(ErrorKind::Other, format!("failed POST {} ({})", u, e)))?;

        let status = resp.status();
        let out = resp.bytes().await.map_err(|e| {
            Error::new(
                ErrorKind::Other,
                format!("failed to read response {}", e),
            )
        })?;

        if !status.is_success() {
            let reason = match serde_json::from_slice::<ErrorResponse>(&out) {
                Ok(v) if !v.error.is_empty() => v.error,
                _ => String::from_utf8_lossy(&out).trim().to_string(),
            };
            return Err(Error::new(
                ErrorKind::Other,
                format!(
                    "unexpected HTTP response code {} from {} (server error {}, '{}')",
                    status,
                    u,
                    status.is_server_error(),
                    reason
                ),
            ));
        }

        serde_json::from_slice(&out).map_err(|e| {
            Error::new(
                ErrorKind::InvalidData,
                format!("failed to decode response from {} ({})", u, e),
            )
        })
    }

    /// Creates a subnet and returns its ID.
    pub async fn create_subnet(&self, cfg: SubnetConfig) -> io::Result<String> {
        log::info!(
            "creating subnet '{}' (chain id {}, token symbol {}, gas fee {})",
            cfg.name,
            cfg.chain_id,
            cfg.token_symbol,
            cfg.gas_fee
        );

        let resp: CreateSubnetResponse = self.post(CREATE_SUBNET_PATH, &cfg).await?;
        if resp.subnet_id.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidData,
                "empty subnet ID in create-subnet response",
            ));
        }

        log::info!("created subnet '{}'", resp.subnet_id);
        Ok(resp.subnet_id)
    }

    /// Creates a chain within an existing subnet and returns its ID.
    pub async fn create_chain(&self, cfg: ChainConfig) -> io::Result<String> {
        log::info!(
            "creating chain in subnet '{}' (vm id {}, genesis {})",
            cfg.subnet_id,
            cfg.vm_id,
            cfg.genesis
        );

        let resp: CreateChainResponse = self.post(CREATE_CHAIN_PATH, &cfg).await?;
        if resp.chain_id.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidData,
                "empty chain ID in create-chain response",
            ));
        }

        log::info!("created chain '{}'", resp.chain_id);
        Ok(resp.chain_id)
    }
}

#[async_trait]
impl Manager for Client {
    async fn create_subnet(&self, cfg: SubnetConfig) -> io::Result<String> {
        Client::create_subnet(self, cfg).await
    }

    async fn create_chain(&self, cfg: ChainConfig) -> io::Result<String> {
        Client::create_chain(self, cfg).await
    }
}

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubnetResponse {
    #[serde(default)]
    pub subnet_id: String,
}

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateChainResponse {
    #[serde(default)]
    pub chain_id: String,
}

/// e.g., {"error": "Missing required fields"}
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: String,
}

#[cfg(test)]
macro_rules! ab {
    ($e:expr) => {
        tokio_test::block_on($e)
    };
}

/// RUST_LOG=debug cargo test --package subnet-ops --lib -- client::test_new --exact --show-output
#[test]
fn test_new() {
    let _ = env_logger::builder().is_test(true).try_init();

    let cli = Client::new("http://localhost:9650", "key").unwrap();
    assert_eq!(cli.base_url().as_str(), "http://localhost:9650/");
    assert_eq!(
        cli.join(CREATE_SUBNET_PATH).unwrap().as_str(),
        "http://localhost:9650/v1/subnets"
    );

    // base path is kept
    let cli = Client::new("https://example.com/api", "key").unwrap();
    assert_eq!(
        cli.join(CREATE_CHAIN_PATH).unwrap().as_str(),
        "https://example.com/api/v1/chains"
    );

    let err = Client::new("not a url", "key").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let err = Client::new("mailto:a@b.c", "key").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let err = Client::new("http://localhost:9650", " ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

/// RUST_LOG=debug cargo test --package subnet-ops --lib -- client::test_create_subnet --exact --show-output
#[test]
fn test_create_subnet() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut server = mockito::Server::new();
    let m = server
        .mock("POST", "/v1/subnets")
        .match_header("authorization", "Bearer test-key")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "name": "MySubnet",
            "description": "This is an example subnet",
            "chainId": 12345,
            "tokenSymbol": "MYTOKEN",
            "gasFee": 0.0001,
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"subnetId":"sub-123"}"#)
        .create();

    let cli = Client::new(&server.url(), "test-key").unwrap();
    let subnet_id = ab!(cli.create_subnet(SubnetConfig::default())).unwrap();
    assert_eq!(subnet_id, "sub-123");
    m.assert();
}

/// RUST_LOG=debug cargo test --package subnet-ops --lib -- client::test_create_chain --exact --show-output
#[test]
fn test_create_chain() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut server = mockito::Server::new();
    let m = server
        .mock("POST", "/v1/chains")
        .match_header("authorization", "Bearer test-key")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "subnetId": "sub-123",
            "vmId": "SubnetEVM",
        })))
        .with_status(200)
        .with_body(r#"{"chainId":"chain-456"}"#)
        .create();

    let cli = Client::new(&server.url(), "test-key").unwrap();
    let cfg = ChainConfig::new("sub-123", &crate::models::ChainSpec::default());
    let chain_id = ab!(cli.create_chain(cfg)).unwrap();
    assert_eq!(chain_id, "chain-456");
    m.assert();
}

/// RUST_LOG=debug cargo test --package subnet-ops --lib -- client::test_create_subnet_errors --exact --show-output
#[test]
fn test_create_subnet_errors() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut server = mockito::Server::new();
    let cli = Client::new(&server.url(), "test-key").unwrap();

    let m = server
        .mock("POST", "/v1/subnets")
        .with_status(400)
        .with_body(r#"{"error":"Missing required fields"}"#)
        .create();
    let err = ab!(cli.create_subnet(SubnetConfig::default())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Other);
    assert!(err.to_string().contains("400"));
    assert!(err.to_string().contains("Missing required fields"));
    m.assert();
    m.remove();

    let m = server
        .mock("POST", "/v1/subnets")
        .with_status(200)
        .with_body("not json")
        .create();
    let err = ab!(cli.create_subnet(SubnetConfig::default())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
    m.assert();
    m.remove();

    let m = server
        .mock("POST", "/v1/subnets")
        .with_status(200)
        .with_body("{}")
        .create();
    let err = ab!(cli.create_subnet(SubnetConfig::default())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
    m.assert();
}
