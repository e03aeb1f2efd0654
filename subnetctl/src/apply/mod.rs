use std::{
    io::{self, stdout},
    time::Duration,
};

use clap::{Arg, ArgAction, Command};
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use dialoguer::{theme::ColorfulTheme, Select};
use subnet_ops::{bootstrap, spec, Client, Spec};

pub const NAME: &str = "apply";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Creates the subnet and then the chain based on the spec")
        .arg(
            Arg::new("LOG_LEVEL")
                .long("log-level")
                .short('l')
                .help("Sets the log level")
                .required(false)
                .num_args(1)
                .value_parser(["debug", "info"])
                .default_value("info"),
        )
        .arg(
            Arg::new("SPEC_FILE_PATH")
                .long("spec-file-path")
                .short('s')
                .help("The spec file to load")
                .required(true)
                .num_args(1),
        )
        .arg(
            Arg::new("API_KEY")
                .long("api-key")
                .help("API key (if empty, reads SUBNET_API_KEY)")
                .required(false)
                .num_args(1),
        )
        .arg(
            Arg::new("SKIP_PROMPT")
                .long("skip-prompt")
                .help("Skips prompt mode")
                .required(false)
                .num_args(0)
                .action(ArgAction::SetTrue),
        )
}

/// Runs the create-subnet/create-chain sequence.
/// Uses the built-in default spec when no spec file is given.
pub async fn execute(
    log_level: &str,
    spec_file_path: Option<&str>,
    api_key: Option<&str>,
    skip_prompt: bool,
) -> io::Result<()> {
    // ref. https://github.com/env-logger-rs/env_logger/issues/47
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    );

    let spec = match spec_file_path {
        Some(p) => Spec::load(p)?,
        None => Spec::default(),
    };
    spec.validate()?;
    let api_key = spec::resolve_api_key(api_key);

    if !skip_prompt {
        execute!(
            stdout(),
            SetForegroundColor(Color::Blue),
            Print(format!("\nLoaded spec:\n{}\n", spec.encode_yaml()?)),
            ResetColor
        )?;

        let options = &[
            "No, I am not ready to create the subnet.",
            "Yes, let's create the subnet and the chain.",
        ];
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select your 'apply' option")
            .items(&options[..])
            .default(0)
            .interact()?;
        if selected == 0 {
            return Ok(());
        }
    }

    let timeout = Duration::from_secs(spec.request_timeout_seconds);
    let created = bootstrap::run(
        || Client::new_with_timeout(&spec.base_url, &api_key, timeout),
        spec.subnet.clone(),
        &spec.chain,
        &mut stdout(),
    )
    .await?;
    log::info!(
        "created chain '{}' in subnet '{}'",
        created.chain_id,
        created.subnet_id
    );

    Ok(())
}
