use std::sync::Arc;

use serde::Serialize;
use setkit_assert::{common, messages, AssertionError, Assertions};

use crate::cmd::{quantity_arg, registry, CheckCommand};
use crate::exit::{assertion_code, CliResult, SUCCESS};
use crate::output::{print_report, OutputFormat, Report};

#[derive(Serialize)]
struct CheckReport {
    check: &'static str,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Report for CheckReport {
    fn header(&self) -> Vec<&'static str> {
        vec!["CHECK", "PASSED", "MESSAGE"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.check.to_string(),
            self.passed.to_string(),
            self.message.clone().unwrap_or_default(),
        ]]
    }

    fn pretty(&self) -> String {
        match &self.message {
            Some(message) => format!("{}: failed: {message}", self.check),
            None => format!("{}: ok", self.check),
        }
    }
}

pub fn run(command: CheckCommand, format: OutputFormat) -> CliResult<i32> {
    let (check, outcome) = match command {
        CheckCommand::Positive { quantity } => {
            let quantity = quantity_arg("quantity", &quantity)?;
            (
                "positive",
                common::greater_than_zero(
                    &quantity,
                    messages::quantity_must_be_positive("quantity", &quantity),
                ),
            )
        }
        CheckCommand::NotNull { address } => {
            let assert = Assertions::new(Arc::new(registry()?));
            let outcome = assert
                .is_valid_address("address", address.as_str())
                .and_then(|()| common::not_null(&address, messages::null_address("address")));
            ("not-null", outcome)
        }
        CheckCommand::Multiple { quantity, base } => {
            let quantity = quantity_arg("quantity", &quantity)?;
            let base = quantity_arg("base", &base)?;
            (
                "multiple",
                common::is_multiple_of(
                    &quantity,
                    &base,
                    format!("Quantity {quantity} needs to be a multiple of {base}."),
                ),
            )
        }
    };

    let (report, code) = summarize(check, outcome);
    print_report(&report, format);
    Ok(code)
}

fn summarize(check: &'static str, outcome: Result<(), AssertionError>) -> (CheckReport, i32) {
    match outcome {
        Ok(()) => (
            CheckReport {
                check,
                passed: true,
                message: None,
            },
            SUCCESS,
        ),
        Err(err) => (
            CheckReport {
                check,
                passed: false,
                message: Some(err.to_string()),
            },
            assertion_code(&err),
        ),
    }
}
