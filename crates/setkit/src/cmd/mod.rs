use clap::{Args, Subcommand};
use bigdecimal::BigDecimal;
use setkit_schema::{parse_quantity, SchemaRegistry};

use crate::exit::{schema_error, CliError, CliResult};
use crate::output::OutputFormat;

pub mod check;
pub mod schemas;
pub mod validate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a value against a built-in schema.
    Validate(ValidateArgs),
    /// List the built-in schemas.
    Schemas,
    /// Run a single precondition gate.
    #[command(subcommand)]
    Check(CheckCommand),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Validate(args) => validate::run(args, format),
        Command::Schemas => schemas::run(format),
        Command::Check(check) => check::run(check, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema id or name (`/Address`, `wholeNumber`).
    pub schema: String,
    /// Value to check. Taken as a string unless --decimal or --json is set.
    pub value: String,
    /// Parse VALUE as a decimal quantity.
    #[arg(long, conflicts_with = "json")]
    pub decimal: bool,
    /// Parse VALUE as a JSON document.
    #[arg(long, conflicts_with = "decimal")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Quantity must be greater than zero.
    Positive { quantity: String },
    /// Address must be well-formed and not the null address.
    NotNull { address: String },
    /// Quantity must be an exact multiple of BASE.
    Multiple { quantity: String, base: String },
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

fn registry() -> CliResult<SchemaRegistry> {
    SchemaRegistry::new().map_err(|err| schema_error("registry", err))
}

fn quantity_arg(name: &str, raw: &str) -> CliResult<BigDecimal> {
    parse_quantity(raw).ok_or_else(|| CliError::usage(format!("{name}: not a number: {raw}")))
}
