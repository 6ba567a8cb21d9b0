//! Host side of the NCP protocol.
//!
//! This is the "just works" layer. Open a transport, wrap it in a
//! [`Dispatcher`], and call typed command methods; events that arrive while
//! waiting are decoded and routed to subscribed sinks or queued.

pub mod api;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod response;
pub mod router;
pub mod status;

pub use config::{DispatcherConfig, DEFAULT_EVENT_QUEUE_CAPACITY};
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, Result};
pub use event::Event;
pub use response::Response;
pub use router::{EventRouter, EventSink};
pub use status::Status;

#[cfg(feature = "async")]
pub use ncpwire_frame::NcpCodec;
