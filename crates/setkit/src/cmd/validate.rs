use serde::Serialize;
use setkit_schema::{SchemaId, SchemaValue, ValidationResult};

use crate::cmd::{quantity_arg, registry, ValidateArgs};
use crate::exit::{schema_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_report, OutputFormat, Report};

#[derive(Serialize)]
struct ValidationReport {
    schema: SchemaId,
    value: String,
    valid: bool,
    errors: Vec<String>,
}

impl ValidationReport {
    fn new(schema: SchemaId, value: &SchemaValue, result: ValidationResult) -> Self {
        Self {
            schema,
            value: value.to_json_string(),
            valid: result.is_valid(),
            errors: result.errors,
        }
    }
}

impl Report for ValidationReport {
    fn header(&self) -> Vec<&'static str> {
        vec!["SCHEMA", "VALUE", "VALID", "ERRORS"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.schema.to_string(),
            self.value.clone(),
            self.valid.to_string(),
            self.errors.join("\n"),
        ]]
    }

    fn pretty(&self) -> String {
        if self.valid {
            format!("{} conforms to {}", self.value, self.schema)
        } else {
            format!("{} violates {}: {}", self.value, self.schema, self.errors.join(", "))
        }
    }
}

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    let id: SchemaId = args
        .schema
        .parse()
        .map_err(|err| schema_error("validate", err))?;
    let value = parse_value(&args)?;

    let result = registry()?.validate(&value, id);
    tracing::debug!(schema = %id, errors = result.errors().len(), "validated");

    let report = ValidationReport::new(id, &value, result);
    print_report(&report, format);
    Ok(if report.valid { SUCCESS } else { DATA_INVALID })
}

fn parse_value(args: &ValidateArgs) -> CliResult<SchemaValue> {
    if args.decimal {
        return quantity_arg("value", &args.value).map(SchemaValue::from);
    }
    if args.json {
        return serde_json::from_str::<serde_json::Value>(&args.value)
            .map(SchemaValue::from)
            .map_err(|err| CliError::usage(format!("value: invalid JSON: {err}")));
    }
    Ok(SchemaValue::from(args.value.as_str()))
}
