//! Command-line parsing.

use std::path::PathBuf;

use crate::config::{ConfigError, OutputFormat};

pub const USAGE: &str = "\
Gilded Rose inventory simulator

Usage: rose-sim [DAYS] [OPTIONS]

Options:
  -d, --days <N>           Days to simulate after day 0 (default: 2)
  -f, --format <FORMAT>    Output format: text | json (default: text)
  -i, --inventory <PATH>   Stock file (TOML) instead of the built-in stock
  -c, --config <PATH>      Config file (default: platform config dir sim.toml)
      --lenient-legendary  Admit legendary items that are still for sale
  -h, --help               Show this help message";

/// Flags given on the command line. `None` means the flag was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub days: Option<u32>,
    pub format: Option<OutputFormat>,
    pub inventory: Option<PathBuf>,
    pub lenient_legendary: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(CliArgs),
    Help,
}

/// Parses arguments, excluding the program name.
///
/// A bare number is accepted as the day count, like the classic fixture.
pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Command, ConfigError> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-d" | "--days" => {
                let value = next_value(&mut args, &arg)?;
                parsed.days = Some(parse_days(&value)?);
            }
            "-f" | "--format" => {
                parsed.format = Some(next_value(&mut args, &arg)?.parse()?);
            }
            "-i" | "--inventory" => {
                parsed.inventory = Some(PathBuf::from(next_value(&mut args, &arg)?));
            }
            "-c" | "--config" => {
                parsed.config = Some(PathBuf::from(next_value(&mut args, &arg)?));
            }
            "--lenient-legendary" => parsed.lenient_legendary = true,
            "-h" | "--help" => return Ok(Command::Help),
            other if !other.starts_with('-') && parsed.days.is_none() => {
                parsed.days = Some(parse_days(other)?);
            }
            other => return Err(ConfigError::UnknownArgument(other.to_string())),
        }
    }

    Ok(Command::Run(parsed))
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, ConfigError> {
    args.next()
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn parse_days(value: &str) -> Result<u32, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: "days".to_string(),
        value: value.to_string(),
    })
}
