use std::{
    env,
    fs::{self, File},
    io::{self, Error, ErrorKind, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    client,
    models::{ChainSpec, SubnetConfig},
};

pub const VERSION: usize = 1;

/// Environment variable to read the API key from
/// when "--api-key" is not given.
pub const API_KEY_ENV: &str = "SUBNET_API_KEY";

/// Represents the subnet and the chain to create, and where to create them.
/// The API key is never part of the spec file.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "snake_case")]
pub struct Spec {
    #[serde(default)]
    pub version: usize,

    /// Base URL of the subnet management API.
    #[serde(default)]
    pub base_url: String,
    /// Per-request timeout, covers connect and read.
    #[serde(default)]
    pub request_timeout_seconds: u64,

    pub subnet: SubnetConfig,
    pub chain: ChainSpec,
}

impl Default for Spec {
    fn default() -> Self {
        Self::default()
    }
}

impl Spec {
    pub fn default() -> Self {
        Self {
            version: VERSION,
            base_url: String::from(client::DEFAULT_BASE_URL),
            request_timeout_seconds: client::DEFAULT_REQUEST_TIMEOUT_SECONDS,
            subnet: SubnetConfig::default(),
            chain: ChainSpec::default(),
        }
    }

    /// Converts to string in YAML format.
    pub fn encode_yaml(&self) -> io::Result<String> {
        serde_yaml::to_string(&self).map_err(|e| {
            Error::new(
                ErrorKind::Other,
                format!("failed to serialize Spec to YAML {}", e),
            )
        })
    }

    /// Saves the current spec to disk
    /// and overwrites the file.
    pub fn sync(&self, file_path: &str) -> io::Result<()> {
        log::info!("syncing Spec to '{}'", file_path);

        let path = Path::new(file_path);
        if let Some(parent_dir) = path.parent() {
            if !parent_dir.as_os_str().is_empty() {
                log::info!("creating parent dir '{}'", parent_dir.display());
                fs::create_dir_all(parent_dir)?;
            }
        }

        let d = self.encode_yaml()?;
        let mut f = File::create(file_path)?;
        f.write_all(d.as_bytes())
    }

    pub fn load(file_path: &str) -> io::Result<Self> {
        log::info!("loading Spec from {}", file_path);

        if !Path::new(file_path).exists() {
            return Err(Error::new(
                ErrorKind::NotFound,
                format!("file {} does not exists", file_path),
            ));
        }

        let f = File::open(file_path).map_err(|e| {
            Error::new(
                ErrorKind::Other,
                format!("failed to open {} ({})", file_path, e),
            )
        })?;
        serde_yaml::from_reader(f)
            .map_err(|e| Error::new(ErrorKind::InvalidInput, format!("invalid YAML: {}", e)))
    }

    /// Validates the spec.
    /// Field values of the subnet and the chain are left to the remote service.
    pub fn validate(&self) -> io::Result<()> {
        log::info!("validating Spec");

        if self.version != VERSION {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("version unexpected {}, expected {}", self.version, VERSION),
            ));
        }

        if self.base_url.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "'base_url' cannot be empty",
            ));
        }

        if self.request_timeout_seconds == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "'request_timeout_seconds' must be >0",
            ));
        }

        Ok(())
    }
}

/// Picks the API key: the explicit value first, then "SUBNET_API_KEY",
/// then the placeholder key.
pub fn resolve_api_key(flag: Option<&str>) -> String {
    if let Some(v) = flag {
        if !v.is_empty() {
            return v.to_string();
        }
    }
    match env::var(API_KEY_ENV) {
        Ok(v) if !v.is_empty() => v,
        _ => String::from(client::DEFAULT_API_KEY),
    }
}

/// RUST_LOG=debug cargo test --package subnet-ops --lib -- spec::test_spec --exact --show-output
#[test]
fn test_spec() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .is_test(true)
        .try_init();

    let contents = r#"

version: 1

base_url: http://localhost:9650
request_timeout_seconds: 10

subnet:
  name: TestSubnet
  description: test subnet
  chainId: 99999
  tokenSymbol: TST
  gasFee: 0.5

chain:
  vm_id: srEXiWaHuhNyGwPUi444Tu47ZEDwxTWrbQiuD7FmgSAQ6X7Dy
  genesis: /tmp/genesis.json

"#;
    let mut f = tempfile::NamedTempFile::new().unwrap();
    let ret = f.write_all(contents.as_bytes());
    assert!(ret.is_ok());
    let p = f.path().to_str().unwrap();

    let spec = Spec::load(p).unwrap();
    spec.validate().unwrap();

    let expected = Spec {
        version: VERSION,
        base_url: String::from("http://localhost:9650"),
        request_timeout_seconds: 10,
        subnet: SubnetConfig {
            name: String::from("TestSubnet"),
            description: String::from("test subnet"),
            chain_id: 99999,
            token_symbol: String::from("TST"),
            gas_fee: 0.5,
        },
        chain: ChainSpec {
            vm_id: String::from("srEXiWaHuhNyGwPUi444Tu47ZEDwxTWrbQiuD7FmgSAQ6X7Dy"),
            genesis: String::from("/tmp/genesis.json"),
        },
    };
    assert_eq!(spec, expected);

    // written spec loads back the same
    let tmp_dir = tempfile::tempdir().unwrap();
    let synced = tmp_dir.path().join("nested").join("spec.yaml");
    let synced = synced.to_str().unwrap();
    spec.sync(synced).unwrap();
    assert_eq!(Spec::load(synced).unwrap(), expected);
}

/// RUST_LOG=debug cargo test --package subnet-ops --lib -- spec::test_spec_validate --exact --show-output
#[test]
fn test_spec_validate() {
    let _ = env_logger::builder().is_test(true).try_init();

    let spec = Spec::default();
    assert!(spec.validate().is_ok());
    assert_eq!(spec.subnet.name, "MySubnet");
    assert_eq!(spec.chain.genesis, "genesis.json");

    let mut s = spec.clone();
    s.version = VERSION + 1;
    assert!(s.validate().is_err());

    let mut s = spec.clone();
    s.base_url = String::new();
    assert!(s.validate().is_err());

    let mut s = spec;
    s.request_timeout_seconds = 0;
    assert!(s.validate().is_err());

    assert!(Spec::load("/tmp/does-not-exist-subnet-spec.yaml").is_err());
}

/// RUST_LOG=debug cargo test --package subnet-ops --lib -- spec::test_resolve_api_key --exact --show-output
#[test]
fn test_resolve_api_key() {
    assert_eq!(resolve_api_key(Some("abc")), "abc");
    if env::var(API_KEY_ENV).is_err() {
        assert_eq!(resolve_api_key(None), client::DEFAULT_API_KEY);
        assert_eq!(resolve_api_key(Some("")), client::DEFAULT_API_KEY);
    }
}
