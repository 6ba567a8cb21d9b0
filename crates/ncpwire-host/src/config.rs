use std::time::Duration;

use ncpwire_frame::{FrameConfig, DEFAULT_MAX_PAYLOAD};

/// Default capacity of the catch-all event queue.
pub const DEFAULT_EVENT_QUEUE_CAPACITY: usize = 64;

/// Dispatcher behavior.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Largest payload sent or accepted. Default: 256, capped at `0x7FF`.
    pub max_payload_size: usize,
    /// Events with no registered sink are queued up to this many; beyond
    /// that they are dropped and counted. `0` disables the queue.
    pub event_queue_capacity: usize,
    /// Give up waiting for a response after this long. `None` waits until
    /// the transport itself fails. Enforced between transport reads, so the
    /// transport needs a read timeout shorter than this for it to bite.
    pub response_timeout: Option<Duration>,
}

impl DispatcherConfig {
    pub fn frame_config(&self) -> FrameConfig {
        FrameConfig {
            max_payload_size: self.max_payload_size,
        }
    }

    /// The payload limit actually applied.
    pub fn effective_max_payload(&self) -> usize {
        self.frame_config().effective_max_payload()
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD,
            event_queue_capacity: DEFAULT_EVENT_QUEUE_CAPACITY,
            response_timeout: None,
        }
    }
}
