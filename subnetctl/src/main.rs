mod apply;
mod create;
mod default_spec;
mod vm_id;

use std::io;

use clap::{crate_version, Command};
use subnet_ops::{spec, ChainConfig, ChainSpec, SubnetConfig};

const APP_NAME: &str = "subnetctl";

/// Without a subcommand, creates the default subnet and its chain.
#[tokio::main]
async fn main() -> io::Result<()> {
    let matches = Command::new(APP_NAME)
        .version(crate_version!())
        .about("subnetctl (subnet/chain management API client)")
        .subcommands(vec![
            default_spec::command(),
            apply::command(),
            create::command(),
            vm_id::command(),
        ])
        .get_matches();

    match matches.subcommand() {
        Some((default_spec::NAME, sub_matches)) => {
            default_spec::execute(
                &sub_matches
                    .get_one::<String>("LOG_LEVEL")
                    .unwrap_or(&String::from("info"))
                    .clone(),
                &sub_matches
                    .get_one::<String>("BASE_URL")
                    .cloned()
                    .unwrap_or_default(),
                &sub_matches
                    .get_one::<String>("SPEC_FILE_PATH")
                    .cloned()
                    .unwrap_or_default(),
            )?;
        }

        Some((apply::NAME, sub_matches)) => {
            apply::execute(
                &sub_matches
                    .get_one::<String>("LOG_LEVEL")
                    .unwrap_or(&String::from("info"))
                    .clone(),
                sub_matches
                    .get_one::<String>("SPEC_FILE_PATH")
                    .map(String::as_str),
                sub_matches.get_one::<String>("API_KEY").map(String::as_str),
                sub_matches.get_flag("SKIP_PROMPT"),
            )
            .await?;
        }

        Some((create::NAME, sub_matches)) => match sub_matches.subcommand() {
            Some((create::subnet::NAME, sub_sub_matches)) => {
                let opts = create::subnet::Flags {
                    log_level: sub_sub_matches
                        .get_one::<String>("LOG_LEVEL")
                        .unwrap_or(&String::from("info"))
                        .clone(),
                    base_url: sub_sub_matches
                        .get_one::<String>("BASE_URL")
                        .cloned()
                        .unwrap_or_default(),
                    api_key: spec::resolve_api_key(
                        sub_sub_matches
                            .get_one::<String>("API_KEY")
                            .map(String::as_str),
                    ),
                    subnet: SubnetConfig {
                        name: sub_sub_matches
                            .get_one::<String>("NAME")
                            .cloned()
                            .unwrap_or_default(),
                        description: sub_sub_matches
                            .get_one::<String>("DESCRIPTION")
                            .cloned()
                            .unwrap_or_default(),
                        chain_id: *sub_sub_matches.get_one::<u64>("CHAIN_ID").unwrap_or(&0),
                        token_symbol: sub_sub_matches
                            .get_one::<String>("TOKEN_SYMBOL")
                            .cloned()
                            .unwrap_or_default(),
                        gas_fee: *sub_sub_matches.get_one::<f64>("GAS_FEE").unwrap_or(&0.0),
                    },
                };
                create::subnet::execute(opts).await?;
            }
            Some((create::chain::NAME, sub_sub_matches)) => {
                let subnet_id = sub_sub_matches
                    .get_one::<String>("SUBNET_ID")
                    .cloned()
                    .unwrap_or_default();
                let chain_spec = ChainSpec {
                    vm_id: sub_sub_matches
                        .get_one::<String>("VM_ID")
                        .cloned()
                        .unwrap_or_default(),
                    genesis: sub_sub_matches
                        .get_one::<String>("GENESIS")
                        .cloned()
                        .unwrap_or_default(),
                };
                let opts = create::chain::Flags {
                    log_level: sub_sub_matches
                        .get_one::<String>("LOG_LEVEL")
                        .unwrap_or(&String::from("info"))
                        .clone(),
                    base_url: sub_sub_matches
                        .get_one::<String>("BASE_URL")
                        .cloned()
                        .unwrap_or_default(),
                    api_key: spec::resolve_api_key(
                        sub_sub_matches
                            .get_one::<String>("API_KEY")
                            .map(String::as_str),
                    ),
                    chain: ChainConfig::new(subnet_id, &chain_spec),
                };
                create::chain::execute(opts).await?;
            }
            _ => unreachable!("unknown subcommand"),
        },

        Some((vm_id::NAME, sub_matches)) => {
            vm_id::execute(
                &sub_matches
                    .get_one::<String>("LOG_LEVEL")
                    .unwrap_or(&String::from("info"))
                    .clone(),
                &sub_matches
                    .get_one::<String>("NAME")
                    .cloned()
                    .unwrap_or_default(),
            )?;
        }

        None => {
            apply::execute("info", None, None, true).await?;
        }

        _ => unreachable!("unknown subcommand"),
    }

    Ok(())
}
