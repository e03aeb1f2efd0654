use serde::{Deserialize, Serialize};

pub const DEFAULT_SUBNET_NAME: &str = "MySubnet";
pub const DEFAULT_SUBNET_DESCRIPTION: &str = "This is an example subnet";
pub const DEFAULT_CHAIN_ID: u64 = 12345;
pub const DEFAULT_TOKEN_SYMBOL: &str = "MYTOKEN";
pub const DEFAULT_GAS_FEE: f64 = 0.0001;

pub const DEFAULT_VM_ID: &str = "SubnetEVM";
pub const DEFAULT_GENESIS: &str = "genesis.json";

/// Represents the subnet to create on the remote management service.
/// Built once by the caller and passed by value to "create-subnet".
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubnetConfig {
    pub name: String,
    pub description: String,
    /// EVM chain ID of the subnet's primary chain.
    pub chain_id: u64,
    pub token_symbol: String,
    pub gas_fee: f64,
}

impl Default for SubnetConfig {
    fn default() -> Self {
        Self::default()
    }
}

impl SubnetConfig {
    pub fn default() -> Self {
        Self {
            name: String::from(DEFAULT_SUBNET_NAME),
            description: String::from(DEFAULT_SUBNET_DESCRIPTION),
            chain_id: DEFAULT_CHAIN_ID,
            token_symbol: String::from(DEFAULT_TOKEN_SYMBOL),
            gas_fee: DEFAULT_GAS_FEE,
        }
    }
}

/// Chain template without the subnet it lands in.
/// The subnet ID is only known after "create-subnet" returns.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
#[serde(rename_all = "snake_case")]
pub struct ChainSpec {
    /// VM identifier (e.g., "SubnetEVM" or a CB58-encoded VM ID).
    pub vm_id: String,
    /// Path to the genesis file of the new chain.
    pub genesis: String,
}

impl Default for ChainSpec {
    fn default() -> Self {
        Self::default()
    }
}

impl ChainSpec {
    pub fn default() -> Self {
        Self {
            vm_id: String::from(DEFAULT_VM_ID),
            genesis: String::from(DEFAULT_GENESIS),
        }
    }
}

/// Represents the chain to create within an existing subnet.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    pub subnet_id: String,
    pub vm_id: String,
    pub genesis: String,
}

impl ChainConfig {
    pub fn new(subnet_id: impl Into<String>, spec: &ChainSpec) -> Self {
        Self {
            subnet_id: subnet_id.into(),
            vm_id: spec.vm_id.clone(),
            genesis: spec.genesis.clone(),
        }
    }
}

/// RUST_LOG=debug cargo test --package subnet-ops --lib -- models::test_subnet_config_json --exact --show-output
#[test]
fn test_subnet_config_json() {
    let cfg = SubnetConfig::default();
    let d = serde_json::to_value(&cfg).unwrap();
    assert_eq!(
        d,
        serde_json::json!({
            "name": "MySubnet",
            "description": "This is an example subnet",
            "chainId": 12345,
            "tokenSymbol": "MYTOKEN",
            "gasFee": 0.0001,
        })
    );
}

/// RUST_LOG=debug cargo test --package subnet-ops --lib -- models::test_chain_config --exact --show-output
#[test]
fn test_chain_config() {
    let cfg = ChainConfig::new("sub-123", &ChainSpec::default());
    assert_eq!(cfg.subnet_id, "sub-123");
    assert_eq!(cfg.vm_id, "SubnetEVM");
    assert_eq!(cfg.genesis, "genesis.json");

    let d = serde_json::to_value(&cfg).unwrap();
    assert_eq!(
        d,
        serde_json::json!({
            "subnetId": "sub-123",
            "vmId": "SubnetEVM",
            "genesis": "genesis.json",
        })
    );
}
