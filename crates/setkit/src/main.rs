mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "setkit", version, about = "Offline Set Protocol input tooling")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", env = "SETKIT_FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        env = "SETKIT_LOG_LEVEL",
        default_value = "warn",
        global = true
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_logging(cli.log_format, cli.log_level) {
        eprintln!("warning: logging not initialized: {err}");
    }

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    match cmd::run(cli.command, format) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::CheckCommand;

    #[test]
    fn parses_validate_subcommand() {
        let cli = Cli::try_parse_from([
            "setkit", "validate", "/Address", "0x12", "--format", "json",
        ])
        .expect("validate args should parse");

        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.schema, "/Address");
                assert!(!args.decimal && !args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(matches!(cli.format, Some(OutputFormat::Json)));
    }

    #[test]
    fn rejects_conflicting_value_kinds() {
        let err = Cli::try_parse_from(["setkit", "validate", "number", "1", "--decimal", "--json"])
            .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn parses_check_multiple() {
        let cli = Cli::try_parse_from(["setkit", "check", "multiple", "30", "10"])
            .expect("check args should parse");
        assert!(matches!(
            cli.command,
            Command::Check(CheckCommand::Multiple { .. })
        ));
    }
}
