use std::io;

use async_trait::async_trait;

use crate::models::{ChainConfig, SubnetConfig};

/// Remote operations on the subnet management service.
/// Implemented by "client::Client"; tests substitute in-process stubs.
#[async_trait]
pub trait Manager {
    /// Returns the ID of the newly created subnet.
    async fn create_subnet(&self, cfg: SubnetConfig) -> io::Result<String>;

    /// Returns the ID of the newly created chain.
    async fn create_chain(&self, cfg: ChainConfig) -> io::Result<String>;
}
