pub mod chain;
pub mod subnet;

use clap::{Arg, Command};
use subnet_ops::client;

pub const NAME: &str = "create";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Creates a subnet or a chain")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommands(vec![subnet::command(), chain::command()])
}

/// Flags shared by all "create" subcommands.
pub fn common_args() -> Vec<Arg> {
    vec![
        Arg::new("LOG_LEVEL")
            .long("log-level")
            .short('l')
            .help("Sets the log level")
            .required(false)
            .num_args(1)
            .value_parser(["debug", "info"])
            .default_value("info"),
        Arg::new("BASE_URL")
            .long("base-url")
            .short('e')
            .help("Base URL of the subnet management API")
            .required(false)
            .num_args(1)
            .default_value(client::DEFAULT_BASE_URL),
        Arg::new("API_KEY")
            .long("api-key")
            .help("API key (if empty, reads SUBNET_API_KEY)")
            .required(false)
            .num_args(1),
    ]
}

#[test]
fn test_command() {
    let cmd = command();
    cmd.clone().debug_assert();

    let matches = cmd
        .try_get_matches_from(vec![
            "create",
            "subnet",
            "--name",
            "TestSubnet",
            "--chain-id",
            "99999",
            "--gas-fee",
            "0.5",
        ])
        .unwrap();
    let (name, sub_matches) = matches.subcommand().unwrap();
    assert_eq!(name, subnet::NAME);
    assert_eq!(
        sub_matches.get_one::<String>("NAME").unwrap(),
        "TestSubnet"
    );
    assert_eq!(*sub_matches.get_one::<u64>("CHAIN_ID").unwrap(), 99999);
    assert_eq!(*sub_matches.get_one::<f64>("GAS_FEE").unwrap(), 0.5);
    assert_eq!(
        sub_matches.get_one::<String>("TOKEN_SYMBOL").unwrap(),
        "MYTOKEN"
    );
    assert_eq!(
        sub_matches.get_one::<String>("BASE_URL").unwrap(),
        client::DEFAULT_BASE_URL
    );
    assert!(sub_matches.get_one::<String>("API_KEY").is_none());

    // chain requires the subnet ID
    assert!(command()
        .try_get_matches_from(vec!["create", "chain"])
        .is_err());
    let matches = command()
        .try_get_matches_from(vec!["create", "chain", "--subnet-id", "sub-123"])
        .unwrap();
    let (name, sub_matches) = matches.subcommand().unwrap();
    assert_eq!(name, chain::NAME);
    assert_eq!(sub_matches.get_one::<String>("VM_ID").unwrap(), "SubnetEVM");
    assert_eq!(
        sub_matches.get_one::<String>("GENESIS").unwrap(),
        "genesis.json"
    );
}
