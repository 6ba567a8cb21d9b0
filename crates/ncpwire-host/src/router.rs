//! Event demultiplexing.
//!
//! Event frames are decoded against the catalog and handed to the sink
//! registered for their key. Unclaimed events go to a bounded catch-all
//! queue. Anything that cannot be decoded is logged, counted and dropped:
//! a bad event never fails a command that happens to be in flight.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::mpsc;
use std::sync::Arc;

use ncpwire_catalog::Catalog;
use ncpwire_frame::{Frame, MessageKey};
use tracing::{debug, warn};

use crate::event::Event;

/// Receives events for the keys it is subscribed to.
///
/// Sinks run on the dispatching thread while the session is locked; they
/// must not call back into the same dispatcher.
pub trait EventSink: Send {
    fn deliver(&mut self, event: &Event);
}

impl<F> EventSink for F
where
    F: FnMut(&Event) + Send,
{
    fn deliver(&mut self, event: &Event) {
        self(event)
    }
}

impl EventSink for mpsc::Sender<Event> {
    fn deliver(&mut self, event: &Event) {
        if self.send(event.clone()).is_err() {
            debug!(event = event.name(), "event receiver gone");
        }
    }
}

impl EventSink for mpsc::SyncSender<Event> {
    fn deliver(&mut self, event: &Event) {
        if self.send(event.clone()).is_err() {
            debug!(event = event.name(), "event receiver gone");
        }
    }
}

/// Per-key sinks plus the catch-all queue.
pub struct EventRouter {
    catalog: Arc<Catalog>,
    sinks: HashMap<MessageKey, Box<dyn EventSink>>,
    queue: VecDeque<Event>,
    capacity: usize,
    dropped: u64,
}

impl EventRouter {
    pub fn new(catalog: Arc<Catalog>, capacity: usize) -> Self {
        Self {
            catalog,
            sinks: HashMap::new(),
            queue: VecDeque::with_capacity(capacity.min(64)),
            capacity,
            dropped: 0,
        }
    }

    /// Register `sink` for `key`, returning the sink it replaces.
    pub fn subscribe(
        &mut self,
        key: MessageKey,
        sink: Box<dyn EventSink>,
    ) -> Option<Box<dyn EventSink>> {
        self.sinks.insert(key, sink)
    }

    /// Remove the sink for `key`. Returns whether one was registered.
    pub fn unsubscribe(&mut self, key: MessageKey) -> bool {
        self.sinks.remove(&key).is_some()
    }

    pub fn is_subscribed(&self, key: MessageKey) -> bool {
        self.sinks.contains_key(&key)
    }

    /// Decode an event frame and deliver it to its sink.
    ///
    /// Returns the event if no sink claimed it, or `None` if it was
    /// delivered or dropped.
    pub fn route(&mut self, frame: &Frame) -> Option<Event> {
        let event = match Event::decode(&self.catalog, frame) {
            Ok(event) => event,
            Err(err) => {
                self.dropped += 1;
                warn!(key = %frame.key(), error = %err, "dropping undecodable event");
                return None;
            }
        };
        match self.sinks.get_mut(&event.key()) {
            Some(sink) => {
                debug!(event = event.name(), "event delivered to sink");
                sink.deliver(&event);
                None
            }
            None => Some(event),
        }
    }

    /// Queue an unclaimed event, dropping it if the queue is full.
    pub fn enqueue(&mut self, event: Event) {
        if self.queue.len() >= self.capacity {
            self.dropped += 1;
            debug!(event = event.name(), capacity = self.capacity, "event queue full, dropping");
            return;
        }
        self.queue.push_back(event);
    }

    /// Route a frame, queueing it if unclaimed.
    pub fn dispatch(&mut self, frame: &Frame) {
        if let Some(event) = self.route(frame) {
            self.enqueue(event);
        }
    }

    /// Oldest queued event.
    pub fn pop(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Events dropped so far: undecodable, unknown, or over capacity.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.sinks.keys().copied().collect();
        keys.sort_unstable();
        f.debug_struct("EventRouter")
            .field("sinks", &keys)
            .field("queued", &self.queue.len())
            .field("capacity", &self.capacity)
            .field("dropped", &self.dropped)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use bytes::Bytes;
    use ncpwire_catalog::class;
    use ncpwire_frame::MessageKind;

    use super::*;
    use crate::event::{SystemExternalSignal, SystemSoftTimer};

    const SOFT_TIMER: MessageKey = MessageKey::new(class::SYSTEM, 0x07);
    const EXT_SIGNAL: MessageKey = MessageKey::new(class::SYSTEM, 0x03);

    fn timer_frame(handle: u8) -> Frame {
        Frame::new(MessageKind::Event, SOFT_TIMER, vec![handle])
    }

    fn signal_frame(bits: u32) -> Frame {
        Frame::new(MessageKind::Event, EXT_SIGNAL, bits.to_le_bytes().to_vec())
    }

    #[test]
    fn unclaimed_events_queue_in_order() {
        let mut router = EventRouter::new(Catalog::builtin(), 8);
        router.dispatch(&timer_frame(1));
        router.dispatch(&signal_frame(0x10));
        router.dispatch(&timer_frame(2));

        assert_eq!(router.queued(), 3);
        assert_eq!(
            router.pop(),
            Some(Event::SystemSoftTimer(SystemSoftTimer { handle: 1 }))
        );
        assert_eq!(
            router.pop(),
            Some(Event::SystemExternalSignal(SystemExternalSignal { extsignals: 0x10 }))
        );
        assert_eq!(
            router.pop(),
            Some(Event::SystemSoftTimer(SystemSoftTimer { handle: 2 }))
        );
        assert_eq!(router.pop(), None);
    }

    #[test]
    fn sink_claims_its_key_only() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut router = EventRouter::new(Catalog::builtin(), 8);
        let log = Arc::clone(&seen);
        router.subscribe(
            SOFT_TIMER,
            Box::new(move |event: &Event| log.lock().unwrap().push(event.clone())),
        );

        router.dispatch(&timer_frame(9));
        router.dispatch(&signal_frame(1));

        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(router.queued(), 1);
        assert!(router.unsubscribe(SOFT_TIMER));
        assert!(!router.unsubscribe(SOFT_TIMER));

        router.dispatch(&timer_frame(10));
        assert_eq!(router.queued(), 2);
    }

    #[test]
    fn channel_sink_receives_clones() {
        let (tx, rx) = mpsc::channel();
        let mut router = EventRouter::new(Catalog::builtin(), 0);
        router.subscribe(SOFT_TIMER, Box::new(tx));

        router.dispatch(&timer_frame(3));
        assert_eq!(
            rx.try_recv().unwrap(),
            Event::SystemSoftTimer(SystemSoftTimer { handle: 3 })
        );
    }

    #[test]
    fn full_queue_drops_and_counts() {
        let mut router = EventRouter::new(Catalog::builtin(), 1);
        router.dispatch(&timer_frame(1));
        router.dispatch(&timer_frame(2));

        assert_eq!(router.queued(), 1);
        assert_eq!(router.dropped(), 1);
        assert_eq!(
            router.pop(),
            Some(Event::SystemSoftTimer(SystemSoftTimer { handle: 1 }))
        );
    }

    #[test]
    fn undecodable_and_unknown_events_are_dropped() {
        let mut router = EventRouter::new(Catalog::builtin(), 8);
        router.dispatch(&Frame::new(MessageKind::Event, SOFT_TIMER, Bytes::new()));
        router.dispatch(&Frame::new(
            MessageKind::Event,
            MessageKey::new(0x7e, 0x01),
            Bytes::new(),
        ));

        assert_eq!(router.queued(), 0);
        assert_eq!(router.dropped(), 2);
    }
}
