use std::fmt;
use std::net::TcpStream;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::debug;

use crate::error::{Result, TransportError};
use crate::stream::{NcpStream, StreamTransport, DEFAULT_READ_CHUNK};

/// Connection settings applied to a freshly connected stream.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Read deadline per `receive`. `None` blocks indefinitely.
    pub read_timeout: Option<Duration>,
    /// Write deadline per `send`. `None` blocks indefinitely.
    pub write_timeout: Option<Duration>,
    /// Maximum bytes returned by a single `receive`.
    pub read_chunk: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            read_timeout: None,
            write_timeout: Some(Duration::from_secs(5)),
            read_chunk: DEFAULT_READ_CHUNK,
        }
    }
}

/// Where an NCP can be reached.
///
/// Parsed from `tcp://host:port`, `unix:///path/to.sock`, or a bare
/// filesystem path (Unix socket).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Tcp(String),
    Unix(PathBuf),
}

impl Endpoint {
    /// Connect and apply `config` to the resulting stream.
    pub fn connect(&self, config: &TransportConfig) -> Result<StreamTransport<NcpStream>> {
        let stream = match self {
            Endpoint::Tcp(addr) => {
                let tcp = TcpStream::connect(addr.as_str()).map_err(|e| {
                    TransportError::Connect {
                        addr: self.to_string(),
                        source: e,
                    }
                })?;
                tcp.set_nodelay(true)?;
                NcpStream::from_tcp(tcp)
            }
            #[cfg(unix)]
            Endpoint::Unix(path) => {
                let unix = std::os::unix::net::UnixStream::connect(path).map_err(|e| {
                    TransportError::Connect {
                        addr: self.to_string(),
                        source: e,
                    }
                })?;
                NcpStream::from_unix(unix)
            }
            #[cfg(not(unix))]
            Endpoint::Unix(_) => {
                return Err(TransportError::InvalidEndpoint {
                    addr: self.to_string(),
                    reason: "unix sockets are not supported on this platform",
                })
            }
        };
        stream.set_read_timeout(config.read_timeout)?;
        stream.set_write_timeout(config.write_timeout)?;
        debug!(endpoint = %self, "connected to ncp");
        Ok(StreamTransport::with_chunk_size(stream, config.read_chunk))
    }
}

impl FromStr for Endpoint {
    type Err = TransportError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason| TransportError::InvalidEndpoint {
            addr: s.to_string(),
            reason,
        };

        if let Some(rest) = s.strip_prefix("tcp://") {
            if rest.is_empty() {
                return Err(invalid("missing host:port"));
            }
            match rest.rsplit_once(':') {
                Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => {
                    Ok(Endpoint::Tcp(rest.to_string()))
                }
                _ => Err(invalid("expected tcp://host:port")),
            }
        } else if let Some(rest) = s.strip_prefix("unix://") {
            if rest.is_empty() {
                return Err(invalid("missing socket path"));
            }
            Ok(Endpoint::Unix(PathBuf::from(rest)))
        } else if s.contains("://") {
            Err(invalid("unsupported scheme"))
        } else if s.is_empty() {
            Err(invalid("empty address"))
        } else {
            Ok(Endpoint::Unix(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Tcp(addr) => write!(f, "tcp://{addr}"),
            Endpoint::Unix(path) => write!(f, "unix://{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Transport;

    #[test]
    fn test_parse_tcp() {
        let ep: Endpoint = "tcp://127.0.0.1:4901".parse().unwrap();
        assert_eq!(ep, Endpoint::Tcp("127.0.0.1:4901".to_string()));
        assert_eq!(ep.to_string(), "tcp://127.0.0.1:4901");
    }

    #[test]
    fn test_parse_unix_forms() {
        let ep: Endpoint = "unix:///tmp/ncp.sock".parse().unwrap();
        assert_eq!(ep, Endpoint::Unix(PathBuf::from("/tmp/ncp.sock")));

        let bare: Endpoint = "/tmp/ncp.sock".parse().unwrap();
        assert_eq!(bare, ep);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for addr in ["", "tcp://", "tcp://host", "tcp://host:notaport", "serial://x", "unix://"] {
            let result = addr.parse::<Endpoint>();
            assert!(
                matches!(result, Err(TransportError::InvalidEndpoint { .. })),
                "{addr:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_connect_tcp_roundtrip() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = std::thread::spawn(move || {
            use std::io::{Read, Write};
            let (mut peer, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4];
            peer.read_exact(&mut buf).unwrap();
            peer.write_all(&buf).unwrap();
        });

        let ep: Endpoint = format!("tcp://{addr}").parse().unwrap();
        let mut transport = ep.connect(&TransportConfig::default()).unwrap();
        transport.send(&[1, 2, 3, 4]).unwrap();
        let mut echoed = Vec::new();
        while echoed.len() < 4 {
            echoed.extend_from_slice(&transport.receive().unwrap());
        }
        assert_eq!(echoed, vec![1, 2, 3, 4]);
        handle.join().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_connect_missing_unix_socket_fails() {
        let path =
            std::env::temp_dir().join(format!("ncpwire-missing-{}.sock", std::process::id()));
        let ep = Endpoint::Unix(path);
        let result = ep.connect(&TransportConfig::default());
        assert!(matches!(result, Err(TransportError::Connect { .. })));
    }
}
