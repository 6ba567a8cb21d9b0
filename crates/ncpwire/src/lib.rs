//! Host-side protocol stack for Bluetooth NCP co-processors.
//!
//! ncpwire speaks the binary command/response/event protocol of a network
//! co-processor over any byte stream: header framing, a catalog-driven
//! payload codec, and a blocking dispatcher with event demultiplexing.
//!
//! # Crate Structure
//!
//! - [`transport`]: Byte-stream transport abstraction (TCP, Unix sockets)
//! - [`frame`]: 4-byte header codec and frame reassembly
//! - [`catalog`]: Message layouts, payload codec and the built-in command set
//! - [`host`]: Command dispatcher and typed events (behind `host` feature)

/// Re-export transport types.
pub mod transport {
    pub use ncpwire_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use ncpwire_frame::*;
}

/// Re-export catalog types.
pub mod catalog {
    pub use ncpwire_catalog::*;
}

/// Re-export host types (requires `host` feature).
#[cfg(feature = "host")]
pub mod host {
    pub use ncpwire_host::*;
}
