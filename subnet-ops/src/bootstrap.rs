use std::io::{self, Write};

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::{
    manager::Manager,
    models::{ChainConfig, ChainSpec, SubnetConfig},
};

/// IDs returned by the remote service.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Created {
    pub subnet_id: String,
    pub chain_id: String,
}

/// Connects to the service, creates a subnet, then creates a chain in it.
/// Stops at the first failure. A subnet created before a chain failure is left as-is.
pub async fn run<M, F, W>(
    connect: F,
    subnet_cfg: SubnetConfig,
    chain_spec: &ChainSpec,
    out: &mut W,
) -> io::Result<Created>
where
    M: Manager,
    F: FnOnce() -> io::Result<M>,
    W: Write,
{
    let manager = connect().map_err(|e| {
        log::error!("failed to create subnet client: {}", e);
        e
    })?;

    let subnet_id = manager.create_subnet(subnet_cfg).await.map_err(|e| {
        log::error!("failed to create subnet: {}", e);
        e
    })?;
    execute!(
        out,
        SetForegroundColor(Color::Green),
        Print(format!("Subnet created successfully with ID: {}\n", subnet_id)),
        ResetColor
    )?;

    let chain_cfg = ChainConfig::new(subnet_id.clone(), chain_spec);
    let chain_id = manager.create_chain(chain_cfg).await.map_err(|e| {
        log::error!("failed to create chain in subnet '{}': {}", subnet_id, e);
        e
    })?;
    execute!(
        out,
        SetForegroundColor(Color::Green),
        Print(format!("Chain created successfully with ID: {}\n", chain_id)),
        ResetColor
    )?;

    Ok(Created {
        subnet_id,
        chain_id,
    })
}

#[cfg(test)]
mod tests {
    use std::{
        io::{self, Error, ErrorKind},
        sync::Mutex,
    };

    use async_trait::async_trait;

    use super::*;

    macro_rules! ab {
        ($e:expr) => {
            tokio_test::block_on($e)
        };
    }

    /// Records every request and answers with fixed IDs.
    #[derive(Default)]
    struct Stub {
        fail_subnet: bool,
        fail_chain: bool,
        subnet_calls: Mutex<Vec<SubnetConfig>>,
        chain_calls: Mutex<Vec<ChainConfig>>,
    }

    #[async_trait]
    impl<'a> Manager for &'a Stub {
        async fn create_subnet(&self, cfg: SubnetConfig) -> io::Result<String> {
            self.subnet_calls.lock().unwrap().push(cfg);
            if self.fail_subnet {
                return Err(Error::new(ErrorKind::Other, "subnet quota exceeded"));
            }
            Ok(String::from("sub-123"))
        }

        async fn create_chain(&self, cfg: ChainConfig) -> io::Result<String> {
            self.chain_calls.lock().unwrap().push(cfg);
            if self.fail_chain {
                return Err(Error::new(ErrorKind::Other, "invalid genesis"));
            }
            Ok(String::from("chain-456"))
        }
    }

    fn output(buf: &[u8]) -> String {
        String::from_utf8(buf.to_vec()).unwrap()
    }

    #[test]
    fn creates_subnet_then_chain() {
        let _ = env_logger::builder().is_test(true).try_init();

        let stub = Stub::default();
        let mut buf = Vec::new();
        let created = ab!(run(
            || Ok(&stub),
            SubnetConfig::default(),
            &ChainSpec::default(),
            &mut buf
        ))
        .unwrap();
        assert_eq!(
            created,
            Created {
                subnet_id: String::from("sub-123"),
                chain_id: String::from("chain-456"),
            }
        );

        let out = output(&buf);
        assert!(out.contains("Subnet created successfully with ID: sub-123"));
        assert!(out.contains("Chain created successfully with ID: chain-456"));
        assert!(out.find("sub-123").unwrap() < out.find("chain-456").unwrap());

        assert_eq!(
            *stub.subnet_calls.lock().unwrap(),
            vec![SubnetConfig::default()]
        );
        let chain_calls = stub.chain_calls.lock().unwrap();
        assert_eq!(chain_calls.len(), 1);
        assert_eq!(chain_calls[0].subnet_id, "sub-123");
        assert_eq!(chain_calls[0].vm_id, "SubnetEVM");
        assert_eq!(chain_calls[0].genesis, "genesis.json");
    }

    #[test]
    fn connect_failure_skips_all_calls() {
        let _ = env_logger::builder().is_test(true).try_init();

        let stub = Stub::default();
        let mut buf = Vec::new();
        let ret = ab!(run(
            || Err::<&Stub, _>(Error::new(ErrorKind::InvalidInput, "empty API key")),
            SubnetConfig::default(),
            &ChainSpec::default(),
            &mut buf
        ));
        assert_eq!(ret.unwrap_err().kind(), ErrorKind::InvalidInput);
        assert!(stub.subnet_calls.lock().unwrap().is_empty());
        assert!(stub.chain_calls.lock().unwrap().is_empty());
        assert!(buf.is_empty());
    }

    #[test]
    fn subnet_failure_skips_chain() {
        let _ = env_logger::builder().is_test(true).try_init();

        let stub = Stub {
            fail_subnet: true,
            ..Default::default()
        };
        let mut buf = Vec::new();
        let err = ab!(run(
            || Ok(&stub),
            SubnetConfig::default(),
            &ChainSpec::default(),
            &mut buf
        ))
        .unwrap_err();
        assert!(err.to_string().contains("subnet quota exceeded"));
        assert_eq!(stub.subnet_calls.lock().unwrap().len(), 1);
        assert!(stub.chain_calls.lock().unwrap().is_empty());
        assert!(!output(&buf).contains("Subnet created"));
    }

    #[test]
    fn chain_failure_after_subnet_line() {
        let _ = env_logger::builder().is_test(true).try_init();

        let stub = Stub {
            fail_chain: true,
            ..Default::default()
        };
        let mut buf = Vec::new();
        let err = ab!(run(
            || Ok(&stub),
            SubnetConfig::default(),
            &ChainSpec::default(),
            &mut buf
        ))
        .unwrap_err();
        assert!(err.to_string().contains("invalid genesis"));

        let out = output(&buf);
        assert!(out.contains("Subnet created successfully with ID: sub-123"));
        assert!(!out.contains("Chain created"));
        assert_eq!(stub.chain_calls.lock().unwrap().len(), 1);
    }
}
