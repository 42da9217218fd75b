use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("setkit {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: setkit");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}-{}",
        std::env::consts::ARCH,
        std::env::consts::OS
    );
    println!("schemas: {}", setkit_schema::SchemaId::ALL.len());
    println!(
        "features: wrappers={}, testutils={}, cli=true",
        cfg!(feature = "wrappers"),
        cfg!(feature = "testutils")
    );

    Ok(SUCCESS)
}
