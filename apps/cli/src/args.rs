//! # Command-Line Arguments
//!
//! ```text
//! stockroom [--config <PATH>] [--write-config] [--help]
//! ```
//!
//! Parsed by hand, in the same style as the `seed` binary.

use std::path::PathBuf;

use crate::error::ApiError;

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Stockroom - local inventory tracker

Usage: stockroom [OPTIONS]

Options:
  -c, --config <PATH>   Read settings from this file instead of the platform default
      --write-config    Write the resolved settings to the config file and exit
  -h, --help            Show this help message

Commands are read from stdin; type `help` once running.";

/// Options given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Explicit config file.
    pub config: Option<PathBuf>,

    /// Save the resolved config and exit.
    pub write_config: bool,

    /// Print usage and exit.
    pub help: bool,
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, ApiError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args
                        .next()
                        .ok_or_else(|| ApiError::invalid_command("--config needs a file path"))?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "--write-config" => parsed.write_config = true,
                "--help" | "-h" => parsed.help = true,
                other => {
                    return Err(ApiError::invalid_command(format!(
                        "Unknown option: {} (try --help)",
                        other
                    )))
                }
            }
        }

        Ok(parsed)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn parse(args: &[&str]) -> Result<CliArgs, ApiError> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_config_path() {
        let args = parse(&["--config", "/tmp/stock.toml", "--write-config"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/stock.toml")));
        assert!(args.write_config);

        assert_eq!(
            parse(&["-c", "a.toml"]).unwrap().config,
            Some(PathBuf::from("a.toml"))
        );
    }

    #[test]
    fn test_config_without_path() {
        let err = parse(&["--config"]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCommand);
    }

    #[test]
    fn test_unknown_option() {
        let err = parse(&["--verbose"]).unwrap_err();
        assert!(err.message.contains("--verbose"));
    }
}
