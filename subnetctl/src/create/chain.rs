use std::io::{self, stdout};

use clap::{Arg, Command};
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use subnet_ops::{models, ChainConfig, Client};

pub const NAME: &str = "chain";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Creates a chain within an existing subnet")
        .args(super::common_args())
        .arg(
            Arg::new("SUBNET_ID")
                .long("subnet-id")
                .short('s')
                .help("ID of the subnet to create the chain in")
                .required(true)
                .num_args(1),
        )
        .arg(
            Arg::new("VM_ID")
                .long("vm-id")
                .short('i')
                .help("VM ID (or VM name the service recognizes)")
                .required(false)
                .num_args(1)
                .default_value(models::DEFAULT_VM_ID),
        )
        .arg(
            Arg::new("GENESIS")
                .long("genesis")
                .short('g')
                .help("Chain genesis file path")
                .required(false)
                .num_args(1)
                .default_value(models::DEFAULT_GENESIS),
        )
}

pub struct Flags {
    pub log_level: String,
    pub base_url: String,
    pub api_key: String,
    pub chain: ChainConfig,
}

pub async fn execute(opts: Flags) -> io::Result<()> {
    // ref. https://github.com/env-logger-rs/env_logger/issues/47
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, opts.log_level),
    );

    execute!(
        stdout(),
        SetForegroundColor(Color::Blue),
        Print(format!(
            "Connecting to '{}' (subnet '{}')\n",
            opts.base_url, opts.chain.subnet_id
        )),
        ResetColor
    )?;

    let cli = Client::new(&opts.base_url, &opts.api_key)?;
    let chain_id = cli.create_chain(opts.chain).await?;

    execute!(
        stdout(),
        SetForegroundColor(Color::Green),
        Print(format!("Chain created successfully with ID: {}\n", chain_id)),
        ResetColor
    )?;
    Ok(())
}
