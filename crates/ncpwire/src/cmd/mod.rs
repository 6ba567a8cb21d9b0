use std::time::Duration;

use clap::{Args, Subcommand};
use ncpwire_host::{Dispatcher, DispatcherConfig};
use ncpwire_transport::{Endpoint, NcpStream, StreamTransport, TransportConfig};

use crate::exit::{transport_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod catalog;
pub mod decode;
pub mod info;
pub mod listen;
pub mod send;
pub mod version;

/// Transport read deadline; bounds how long a blocked read ignores Ctrl-C
/// or an expired response deadline.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub type Link = Dispatcher<StreamTransport<NcpStream>>;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show version information.
    Version(VersionArgs),
    /// List catalog commands or events.
    Catalog(CatalogArgs),
    /// Decode one hex-encoded frame.
    Decode(DecodeArgs),
    /// Query an NCP for its version and identity.
    Info(InfoArgs),
    /// Print events from an NCP.
    Listen(ListenArgs),
    /// Invoke a catalog command by name.
    Send(SendArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Version(args) => version::run(args),
        Command::Catalog(args) => catalog::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Info(args) => info::run(args, format),
        Command::Listen(args) => listen::run(args, format),
        Command::Send(args) => send::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// NCP address: tcp://host:port, unix:///path, or a socket path.
    #[arg(value_name = "ADDR")]
    pub addr: Endpoint,
    /// Response timeout (e.g. 5s, 500ms).
    #[arg(long, default_value = "5s")]
    pub timeout: String,
    /// Largest payload sent or accepted.
    #[arg(long, default_value_t = ncpwire_frame::DEFAULT_MAX_PAYLOAD, env = "NCPWIRE_MAX_PAYLOAD")]
    pub max_payload: usize,
}

impl ConnectArgs {
    /// Connect and wrap the link in a dispatcher. Reads poll at
    /// [`POLL_INTERVAL`]; the response deadline comes from `--timeout`.
    pub fn open(&self, event_queue_capacity: usize) -> CliResult<Link> {
        let timeout = parse_duration(&self.timeout)?;
        let transport_config = TransportConfig {
            read_timeout: Some(POLL_INTERVAL.min(timeout)),
            ..TransportConfig::default()
        };
        let transport = self
            .addr
            .connect(&transport_config)
            .map_err(|err| transport_error("connect failed", err))?;
        let config = DispatcherConfig {
            max_payload_size: self.max_payload,
            event_queue_capacity,
            response_timeout: Some(timeout),
        };
        Ok(Dispatcher::with_config(transport, config))
    }
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Only list this class (e.g. system, gatt_server).
    #[arg(long, value_name = "NAME")]
    pub class: Option<String>,
    /// List events instead of commands.
    #[arg(long)]
    pub events: bool,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Frame bytes in hex, header included. May be split across arguments.
    #[arg(required = true, num_args = 1..)]
    pub hex: Vec<String>,
    /// Largest payload accepted.
    #[arg(long, default_value_t = ncpwire_frame::MAX_LENGTH)]
    pub max_payload: usize,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
}

#[derive(Args, Debug)]
pub struct ListenArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
    /// Only print events of these classes (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub classes: Option<Vec<String>>,
    /// Exit after receiving N events.
    #[arg(long)]
    pub count: Option<usize>,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
    /// Command name (e.g. system_hello).
    pub command: String,
    /// Parameters as FIELD=VALUE. Integers in decimal or 0x hex; byte
    /// fields in hex.
    pub fields: Vec<String>,
}

pub fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    Ok(match unit {
        "ms" => Duration::from_millis(value),
        _ => Duration::from_secs(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration_seconds_and_millis() {
        assert_eq!(parse_duration("2s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_duration("150ms").unwrap(), Duration::from_millis(150));
        assert_eq!(parse_duration("3").unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn parse_duration_rejects_invalid_values() {
        assert!(parse_duration("0s").is_err());
        assert!(parse_duration("bad").is_err());
        assert!(parse_duration("").is_err());
    }
}
