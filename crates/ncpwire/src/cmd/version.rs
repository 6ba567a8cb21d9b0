use ncpwire_catalog::Catalog;

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("ncpwire {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    let catalog = Catalog::builtin();
    println!("name: ncpwire");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("NCPWIRE_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!(
        "rustc: {}",
        option_env!("RUSTC_VERSION").unwrap_or("unknown")
    );
    println!("git_hash: {}", option_env!("GIT_HASH").unwrap_or("unknown"));
    println!(
        "features: host={}, async={}, cli=true",
        cfg!(feature = "host"),
        cfg!(feature = "async")
    );
    println!(
        "catalog: {} commands, {} events",
        catalog.commands().len(),
        catalog.events().len()
    );

    Ok(SUCCESS)
}
