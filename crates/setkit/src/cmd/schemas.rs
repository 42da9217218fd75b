use serde::Serialize;
use setkit_schema::Schema;

use crate::cmd::registry;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_report, OutputFormat, Report};

#[derive(Serialize)]
struct SchemaListing {
    schemas: Vec<Schema>,
}

impl Report for SchemaListing {
    fn header(&self) -> Vec<&'static str> {
        vec!["ID", "TYPE", "PATTERN / FORMAT"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.schemas
            .iter()
            .map(|schema| {
                vec![
                    schema.id.to_string(),
                    schema.schema_type.as_str().to_string(),
                    schema.pattern_or_format().to_string(),
                ]
            })
            .collect()
    }

    fn pretty(&self) -> String {
        self.schemas
            .iter()
            .map(|schema| {
                format!(
                    "{} ({}) {}",
                    schema.id,
                    schema.schema_type.as_str(),
                    schema.pattern_or_format()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn run(format: OutputFormat) -> CliResult<i32> {
    let listing = SchemaListing {
        schemas: registry()?.schemas().copied().collect(),
    };
    print_report(&listing, format);
    Ok(SUCCESS)
}
