use std::io::{self, stdout};

use clap::{value_parser, Arg, Command};
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use subnet_ops::{models, Client, SubnetConfig};

pub const NAME: &str = "subnet";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Creates a subnet")
        .args(super::common_args())
        .arg(
            Arg::new("NAME")
                .long("name")
                .short('n')
                .help("Subnet name")
                .required(false)
                .num_args(1)
                .default_value(models::DEFAULT_SUBNET_NAME),
        )
        .arg(
            Arg::new("DESCRIPTION")
                .long("description")
                .short('d')
                .help("Subnet description")
                .required(false)
                .num_args(1)
                .default_value(models::DEFAULT_SUBNET_DESCRIPTION),
        )
        .arg(
            Arg::new("CHAIN_ID")
                .long("chain-id")
                .short('c')
                .help("EVM chain ID")
                .required(false)
                .num_args(1)
                .value_parser(value_parser!(u64))
                .default_value("12345"),
        )
        .arg(
            Arg::new("TOKEN_SYMBOL")
                .long("token-symbol")
                .short('t')
                .help("Native token symbol")
                .required(false)
                .num_args(1)
                .default_value(models::DEFAULT_TOKEN_SYMBOL),
        )
        .arg(
            Arg::new("GAS_FEE")
                .long("gas-fee")
                .short('g')
                .help("Gas fee")
                .required(false)
                .num_args(1)
                .value_parser(value_parser!(f64))
                .default_value("0.0001"),
        )
}

pub struct Flags {
    pub log_level: String,
    pub base_url: String,
    pub api_key: String,
    pub subnet: SubnetConfig,
}

pub async fn execute(opts: Flags) -> io::Result<()> {
    // ref. https://github.com/env-logger-rs/env_logger/issues/47
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, opts.log_level),
    );

    execute!(
        stdout(),
        SetForegroundColor(Color::Blue),
        Print(format!("Connecting to '{}'\n", opts.base_url)),
        ResetColor
    )?;

    let cli = Client::new(&opts.base_url, &opts.api_key)?;
    let subnet_id = cli.create_subnet(opts.subnet).await?;

    execute!(
        stdout(),
        SetForegroundColor(Color::Green),
        Print(format!("Subnet created successfully with ID: {}\n", subnet_id)),
        ResetColor
    )?;
    Ok(())
}
