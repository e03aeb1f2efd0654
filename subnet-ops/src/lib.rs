//! Client and spec for the subnet management API.
//!
//! "bootstrap::run" creates a subnet and then a chain within it.
pub mod bootstrap;
pub mod client;
pub mod manager;
pub mod models;
pub mod spec;
pub mod vm;

pub use client::Client;
pub use manager::Manager;
pub use models::{ChainConfig, ChainSpec, SubnetConfig};
pub use spec::Spec;
