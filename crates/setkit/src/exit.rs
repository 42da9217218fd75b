use std::fmt;

use setkit_assert::AssertionError;
use setkit_schema::SchemaError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(USAGE, message)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn schema_error(context: &str, err: SchemaError) -> CliError {
    let code = match err {
        SchemaError::UnknownSchema(_) => USAGE,
        SchemaError::CompileFailed { .. } => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

/// Exit code for a rejected gate.
pub fn assertion_code(err: &AssertionError) -> i32 {
    match err {
        AssertionError::SchemaViolation { .. }
        | AssertionError::Precondition(_)
        | AssertionError::NotErc20 { .. } => DATA_INVALID,
        AssertionError::Provider(_) => FAILURE,
    }
}
