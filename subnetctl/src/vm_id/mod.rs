use std::io::{self, stdout};

use clap::{Arg, Command};
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use subnet_ops::vm;

pub const NAME: &str = "vm-id";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Generates the VM ID based on its name")
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
            Arg::new("NAME")
                .long("name")
                .short('n')
                .help("Sets the VM name (up to 32 bytes)")
                .required(true)
                .num_args(1),
        )
}

pub fn execute(log_level: &str, name: &str) -> io::Result<()> {
    // ref. https://github.com/env-logger-rs/env_logger/issues/47
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    );

    execute!(
        stdout(),
        SetForegroundColor(Color::Blue),
        Print(format!("\nGenerating VM ID for: '{}'\n", name)),
        ResetColor
    )?;
    let vm_id = vm::id_from_name(name)?;
    println!("{}", vm_id);

    Ok(())
}
