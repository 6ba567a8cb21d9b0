use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::cmd::InfoArgs;
use crate::exit::{dispatch_error, CliResult, SUCCESS};
use crate::output::{print_json, OutputFormat};

#[derive(Serialize)]
struct InfoOutput {
    endpoint: String,
    firmware: String,
    build: u16,
    bootloader: u32,
    hash: String,
    address: String,
    address_type: &'static str,
    hello_latency_ms: f64,
}

pub fn run(args: InfoArgs, format: OutputFormat) -> CliResult<i32> {
    let ncp = args.connect.open(0)?;

    let start = Instant::now();
    ncp.system_hello()
        .map_err(|err| dispatch_error("system_hello failed", err))?;
    let hello_latency_ms = (start.elapsed().as_secs_f64() * 1000.0 * 100.0).round() / 100.0;

    let version = ncp
        .system_get_version()
        .map_err(|err| dispatch_error("system_get_version failed", err))?;
    let identity = ncp
        .system_get_identity_address()
        .map_err(|err| dispatch_error("system_get_identity_address failed", err))?;
    debug!(dropped = ncp.dropped_events(), "info complete");

    let out = InfoOutput {
        endpoint: args.connect.addr.to_string(),
        firmware: format!("{}.{}.{}", version.major, version.minor, version.patch),
        build: version.build,
        bootloader: version.bootloader,
        hash: format!("{:08x}", version.hash),
        address: format_address(&identity.address),
        address_type: address_type(identity.r#type),
        hello_latency_ms,
    };
    print_info(&out, format);
    Ok(SUCCESS)
}

/// Addresses travel least-significant byte first; print them the usual way.
fn format_address(address: &[u8; 6]) -> String {
    address
        .iter()
        .rev()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(":")
}

fn address_type(ty: u8) -> &'static str {
    match ty {
        0 => "public",
        1 => "static",
        _ => "unknown",
    }
}

fn print_info(out: &InfoOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(out),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("NCP Info:");
            println!("  Endpoint:   {}", out.endpoint);
            println!("  Firmware:   {} (build {})", out.firmware, out.build);
            println!("  Bootloader: {:#010x}", out.bootloader);
            println!("  Hash:       {}", out.hash);
            println!("  Address:    {} ({})", out.address, out.address_type);
            println!("  Hello:      {:.2}ms", out.hello_latency_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_is_printed_msb_first() {
        assert_eq!(
            format_address(&[0x66, 0x55, 0x44, 0x33, 0x22, 0x11]),
            "11:22:33:44:55:66"
        );
    }

    #[test]
    fn address_types() {
        assert_eq!(address_type(0), "public");
        assert_eq!(address_type(1), "static");
        assert_eq!(address_type(9), "unknown");
    }
}
