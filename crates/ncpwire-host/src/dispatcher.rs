//! Synchronous command dispatch.
//!
//! One request is in flight per dispatcher. A call builds its request in the
//! session's own buffer, sends it, then reads frames until the response with
//! the same `(class_id, id)` arrives. Event frames read in the meantime go to
//! the [`EventRouter`] in arrival order. Any other frame fails the call with
//! [`DispatchError::ProtocolViolation`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};
use std::time::{Duration, Instant};

use bytes::BytesMut;
use ncpwire_catalog::{Catalog, CommandDescriptor, Value};
use ncpwire_frame::{
    encode_header, FrameError, FramedTransport, MessageKey, MessageKind, HEADER_SIZE,
};
use ncpwire_transport::{Transport, TransportError};
use tracing::{debug, trace};

use crate::config::DispatcherConfig;
use crate::error::{DispatchError, Result};
use crate::event::Event;
use crate::response::Response;
use crate::router::{EventRouter, EventSink};

/// Everything one dispatcher owns: the framed link, the request buffer and
/// the event router.
struct Session<T> {
    framed: FramedTransport<T>,
    request: BytesMut,
    router: EventRouter,
}

/// Host-side command dispatcher over one NCP link.
///
/// Safe to share between threads: concurrent `call`s are serialized on the
/// session lock, `try_call` reports [`DispatchError::Busy`] instead.
pub struct Dispatcher<T> {
    session: Mutex<Session<T>>,
    catalog: Arc<Catalog>,
    config: DispatcherConfig,
}

impl<T: Transport> Dispatcher<T> {
    /// Create a dispatcher with the built-in catalog and default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, DispatcherConfig::default())
    }

    /// Create a dispatcher with the built-in catalog.
    pub fn with_config(transport: T, config: DispatcherConfig) -> Self {
        Self::with_catalog(transport, Catalog::builtin(), config)
    }

    /// Create a dispatcher over an explicit catalog.
    pub fn with_catalog(transport: T, catalog: Arc<Catalog>, config: DispatcherConfig) -> Self {
        let session = Session {
            framed: FramedTransport::with_config(transport, config.frame_config()),
            request: BytesMut::with_capacity(HEADER_SIZE + config.effective_max_payload()),
            router: EventRouter::new(Arc::clone(&catalog), config.event_queue_capacity),
        };
        Self {
            session: Mutex::new(session),
            catalog,
            config,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Send a command and block for its response.
    pub fn call(&self, command: &'static CommandDescriptor, args: &[Value]) -> Result<Response> {
        if !command.has_response() {
            return Err(DispatchError::NoResponseExpected(command.name));
        }
        self.lock().transact(command, args, &self.config)
    }

    /// Like [`call`](Self::call), but fails with `Busy` instead of waiting
    /// for another in-flight call.
    pub fn try_call(
        &self,
        command: &'static CommandDescriptor,
        args: &[Value],
    ) -> Result<Response> {
        if !command.has_response() {
            return Err(DispatchError::NoResponseExpected(command.name));
        }
        let mut session = match self.session.try_lock() {
            Ok(session) => session,
            Err(TryLockError::WouldBlock) => return Err(DispatchError::Busy),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        };
        session.transact(command, args, &self.config)
    }

    /// Send a fire-and-forget command. Returns once the frame is written;
    /// never reads from the transport.
    pub fn notify(&self, command: &'static CommandDescriptor, args: &[Value]) -> Result<()> {
        if command.has_response() {
            return Err(DispatchError::ResponseExpected(command.name));
        }
        self.lock()
            .send_request(command, args, self.config.effective_max_payload())
    }

    /// `call` or `notify`, whichever the command's catalog entry calls for.
    pub fn dispatch(
        &self,
        command: &'static CommandDescriptor,
        args: &[Value],
    ) -> Result<Option<Response>> {
        if command.has_response() {
            self.call(command, args).map(Some)
        } else {
            self.notify(command, args).map(|()| None)
        }
    }

    /// Look a command up by name and [`dispatch`](Self::dispatch) it.
    pub fn call_by_name(&self, name: &str, args: &[Value]) -> Result<Option<Response>> {
        let command = self
            .catalog
            .command_by_name(name)
            .ok_or_else(|| DispatchError::UnknownCommand(name.to_string()))?;
        self.dispatch(command, args)
    }

    /// Register `sink` for events with `key`, replacing any previous sink.
    pub fn subscribe<S: EventSink + 'static>(&self, key: MessageKey, sink: S) {
        self.lock().router.subscribe(key, Box::new(sink));
    }

    /// Remove the sink for `key`. Returns whether one was registered.
    pub fn unsubscribe(&self, key: MessageKey) -> bool {
        self.lock().router.unsubscribe(key)
    }

    /// Oldest queued event, without touching the transport.
    pub fn pop_event(&self) -> Option<Event> {
        self.lock().router.pop()
    }

    /// Next unclaimed event: from the queue if one is waiting, otherwise
    /// blocks reading the transport.
    pub fn wait_event(&self) -> Result<Event> {
        self.lock().next_event()
    }

    /// Events dropped so far (undecodable, unknown, or queue full).
    pub fn dropped_events(&self) -> u64 {
        self.lock().router.dropped()
    }

    /// Tear down the dispatcher and return the transport.
    pub fn into_inner(self) -> T {
        self.session
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .framed
            .into_inner()
    }

    fn lock(&self) -> MutexGuard<'_, Session<T>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Transport> Session<T> {
    fn transact(
        &mut self,
        command: &'static CommandDescriptor,
        args: &[Value],
        config: &DispatcherConfig,
    ) -> Result<Response> {
        self.send_request(command, args, config.effective_max_payload())?;
        self.await_response(command, config.response_timeout)
    }

    /// Build the request in the session buffer and send it.
    ///
    /// Sizing runs first, so a `CommandTooLong` leaves the buffer as it was.
    fn send_request(
        &mut self,
        command: &'static CommandDescriptor,
        args: &[Value],
        max_payload: usize,
    ) -> Result<()> {
        let len = command.request_len(args, max_payload)?;
        let header = encode_header(MessageKind::Command, command.class_id, command.id, len)?;

        self.request.clear();
        self.request.extend_from_slice(&header);
        command.encode_request(args, max_payload, &mut self.request)?;

        debug!(command = command.name, key = %command.key(), len, "send command");
        self.framed.send_encoded(&self.request)?;
        Ok(())
    }

    fn await_response(
        &mut self,
        command: &'static CommandDescriptor,
        timeout: Option<Duration>,
    ) -> Result<Response> {
        let expected = command.key();
        let deadline = timeout.map(|t| (Instant::now() + t, t));
        loop {
            if let Some((deadline, timeout)) = deadline {
                if Instant::now() >= deadline {
                    return Err(DispatchError::Timeout(timeout));
                }
            }

            let frame = match self.framed.recv_frame() {
                Ok(frame) => frame,
                Err(FrameError::Transport(TransportError::Timeout)) if deadline.is_some() => {
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            match frame.kind {
                MessageKind::Event => {
                    trace!(key = %frame.key(), "event while awaiting {}", command.name);
                    self.router.dispatch(&frame);
                }
                MessageKind::Response if frame.key() == expected => {
                    let message = command.decode_response(frame.payload)?;
                    let response = Response::new(message)?;
                    debug!(command = command.name, status = %response.status(), "response");
                    return Ok(response);
                }
                kind => {
                    return Err(DispatchError::ProtocolViolation {
                        expected: Some(expected),
                        kind,
                        key: frame.key(),
                    });
                }
            }
        }
    }

    fn next_event(&mut self) -> Result<Event> {
        if let Some(event) = self.router.pop() {
            return Ok(event);
        }
        loop {
            let frame = self.framed.recv_frame()?;
            match frame.kind {
                MessageKind::Event => {
                    if let Some(event) = self.router.route(&frame) {
                        return Ok(event);
                    }
                }
                kind => {
                    return Err(DispatchError::ProtocolViolation {
                        expected: None,
                        kind,
                        key: frame.key(),
                    });
                }
            }
        }
    }
}

impl<T> std::fmt::Debug for Dispatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::mpsc;

    use bytes::{BufMut, Bytes};
    use ncpwire_catalog::table::cmd;
    use ncpwire_catalog::{class, CodecError};
    use ncpwire_frame::encode_frame;

    use super::*;
    use crate::api::SystemGetVersionResponse;
    use crate::event::SystemSoftTimer;
    use crate::status::Status;

    #[derive(Default)]
    struct Script {
        inbound: VecDeque<Bytes>,
        sent: Vec<Vec<u8>>,
        receives: usize,
        timeout_when_empty: bool,
    }

    /// In-memory transport replaying scripted inbound chunks.
    #[derive(Clone, Default)]
    struct Scripted(Arc<Mutex<Script>>);

    impl Scripted {
        fn push(&self, wire: Bytes) {
            self.0.lock().unwrap().inbound.push_back(wire);
        }

        fn sent(&self) -> Vec<Vec<u8>> {
            self.0.lock().unwrap().sent.clone()
        }

        fn receives(&self) -> usize {
            self.0.lock().unwrap().receives
        }

        fn timing_out(self) -> Self {
            self.0.lock().unwrap().timeout_when_empty = true;
            self
        }
    }

    impl Transport for Scripted {
        fn send(&mut self, bytes: &[u8]) -> ncpwire_transport::Result<()> {
            self.0.lock().unwrap().sent.push(bytes.to_vec());
            Ok(())
        }

        fn receive(&mut self) -> ncpwire_transport::Result<Bytes> {
            let mut script = self.0.lock().unwrap();
            script.receives += 1;
            match script.inbound.pop_front() {
                Some(chunk) => Ok(chunk),
                None if script.timeout_when_empty => {
                    drop(script);
                    std::thread::sleep(Duration::from_millis(1));
                    Err(TransportError::Timeout)
                }
                None => Err(TransportError::Closed),
            }
        }
    }

    fn wire(kind: MessageKind, key: MessageKey, payload: &[u8]) -> Bytes {
        let mut buf = BytesMut::new();
        encode_frame(kind, key, payload, &mut buf).unwrap();
        buf.freeze()
    }

    fn version_reply() -> Bytes {
        let mut payload = BytesMut::new();
        payload.put_u16_le(0);
        for v in [7u16, 2, 1, 312] {
            payload.put_u16_le(v);
        }
        payload.put_u32_le(0x0102_0304);
        payload.put_u32_le(0xCAFE_F00D);
        wire(
            MessageKind::Response,
            cmd::SYSTEM_GET_VERSION.key(),
            &payload,
        )
    }

    fn timer_event(handle: u8) -> Bytes {
        wire(
            MessageKind::Event,
            MessageKey::new(class::SYSTEM, 0x07),
            &[handle],
        )
    }

    fn ok_reply(command: &CommandDescriptor) -> Bytes {
        wire(MessageKind::Response, command.key(), &[0, 0])
    }

    #[test]
    fn get_version_scenario() {
        let link = Scripted::default();
        link.push(version_reply());
        let dispatcher = Dispatcher::new(link.clone());

        let version = dispatcher.system_get_version().unwrap();

        assert_eq!(link.sent(), vec![vec![0x00, 0x00, 0x01, 0x1B]]);
        assert_eq!(version.major, 7);
        assert_eq!(version.minor, 2);
        assert_eq!(version.patch, 1);
        assert_eq!(version.build, 312);
        assert_eq!(version.bootloader, 0x0102_0304);
        assert_eq!(version.hash, 0xCAFE_F00D);
    }

    #[test]
    fn version_response_is_reexported_from_api() {
        let link = Scripted::default();
        link.push(version_reply());
        let dispatcher = Dispatcher::new(link);

        let version: SystemGetVersionResponse = dispatcher.system_get_version().unwrap();
        assert_eq!(
            version,
            SystemGetVersionResponse {
                major: 7,
                minor: 2,
                patch: 1,
                build: 312,
                bootloader: 0x0102_0304,
                hash: 0xCAFE_F00D,
            }
        );
    }

    #[test]
    fn response_split_across_chunks() {
        let link = Scripted::default();
        let reply = version_reply();
        for chunk in reply.chunks(5) {
            link.push(Bytes::copy_from_slice(chunk));
        }
        let dispatcher = Dispatcher::new(link.clone());

        let response = dispatcher.call(&cmd::SYSTEM_GET_VERSION, &[]).unwrap();
        assert_eq!(response.status(), Status::SUCCESS);
        assert_eq!(response.u16(4).unwrap(), 312);
    }

    #[test]
    fn interleaved_events_are_queued_in_order() {
        let link = Scripted::default();
        link.push(timer_event(1));
        link.push(timer_event(2));
        link.push(ok_reply(&cmd::SYSTEM_HELLO));
        link.push(timer_event(3));
        let dispatcher = Dispatcher::new(link.clone());

        dispatcher.system_hello().unwrap();

        assert_eq!(
            dispatcher.pop_event(),
            Some(Event::SystemSoftTimer(SystemSoftTimer { handle: 1 }))
        );
        assert_eq!(
            dispatcher.pop_event(),
            Some(Event::SystemSoftTimer(SystemSoftTimer { handle: 2 }))
        );
        // The third event is after the response and has not been read yet.
        assert_eq!(dispatcher.pop_event(), None);
        assert_eq!(
            dispatcher.wait_event().unwrap(),
            Event::SystemSoftTimer(SystemSoftTimer { handle: 3 })
        );
    }

    #[test]
    fn events_and_response_in_one_chunk() {
        let link = Scripted::default();
        let mut chunk = BytesMut::new();
        chunk.extend_from_slice(&timer_event(4));
        chunk.extend_from_slice(&ok_reply(&cmd::SYSTEM_HELLO));
        chunk.extend_from_slice(&timer_event(5));
        link.push(chunk.freeze());
        let dispatcher = Dispatcher::new(link.clone());

        dispatcher.system_hello().unwrap();
        assert_eq!(link.receives(), 1);

        assert_eq!(
            dispatcher.wait_event().unwrap(),
            Event::SystemSoftTimer(SystemSoftTimer { handle: 4 })
        );
        // Already buffered; no further transport read needed.
        assert_eq!(
            dispatcher.wait_event().unwrap(),
            Event::SystemSoftTimer(SystemSoftTimer { handle: 5 })
        );
        assert_eq!(link.receives(), 1);
    }

    #[test]
    fn subscribed_sink_sees_events_during_call() {
        let link = Scripted::default();
        link.push(timer_event(8));
        link.push(ok_reply(&cmd::SYSTEM_HELLO));
        let dispatcher = Dispatcher::new(link.clone());
        let (tx, rx) = mpsc::channel();
        dispatcher.subscribe(MessageKey::new(class::SYSTEM, 0x07), tx);

        dispatcher.system_hello().unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            Event::SystemSoftTimer(SystemSoftTimer { handle: 8 })
        );
        assert_eq!(dispatcher.pop_event(), None);
        assert!(dispatcher.unsubscribe(MessageKey::new(class::SYSTEM, 0x07)));
    }

    #[test]
    fn mismatched_response_is_a_protocol_violation() {
        let link = Scripted::default();
        link.push(ok_reply(&cmd::SYSTEM_HELLO));
        let dispatcher = Dispatcher::new(link.clone());

        let err = dispatcher.system_get_version().unwrap_err();
        assert!(matches!(
            err,
            DispatchError::ProtocolViolation {
                expected: Some(key),
                kind: MessageKind::Response,
                ..
            } if key == cmd::SYSTEM_GET_VERSION.key()
        ));
    }

    #[test]
    fn inbound_command_is_a_protocol_violation() {
        let link = Scripted::default();
        link.push(wire(MessageKind::Command, cmd::SYSTEM_HELLO.key(), &[]));
        let dispatcher = Dispatcher::new(link.clone());

        let err = dispatcher.system_hello().unwrap_err();
        assert!(matches!(
            err,
            DispatchError::ProtocolViolation {
                kind: MessageKind::Command,
                ..
            }
        ));
    }

    #[test]
    fn fire_and_forget_never_receives() {
        let link = Scripted::default();
        let dispatcher = Dispatcher::new(link.clone());

        dispatcher.system_reset(0).unwrap();
        dispatcher.user_reset_to_dfu().unwrap();

        assert_eq!(link.receives(), 0);
        assert_eq!(
            link.sent(),
            vec![
                vec![0x00, 0x01, 0x01, 0x01, 0x00],
                vec![0x00, 0x00, 0xff, 0x02],
            ]
        );
    }

    #[test]
    fn dispatch_picks_mode_from_catalog() {
        let link = Scripted::default();
        link.push(ok_reply(&cmd::SYSTEM_HELLO));
        let dispatcher = Dispatcher::new(link.clone());

        assert!(dispatcher.dispatch(&cmd::SYSTEM_HELLO, &[]).unwrap().is_some());
        assert!(dispatcher
            .dispatch(&cmd::SYSTEM_RESET, &[Value::U8(0)])
            .unwrap()
            .is_none());
        assert_eq!(link.receives(), 1);
    }

    #[test]
    fn wrong_mode_is_rejected_before_sending() {
        let link = Scripted::default();
        let dispatcher = Dispatcher::new(link.clone());

        assert!(matches!(
            dispatcher.call(&cmd::SYSTEM_RESET, &[Value::U8(0)]),
            Err(DispatchError::NoResponseExpected("system_reset"))
        ));
        assert!(matches!(
            dispatcher.notify(&cmd::SYSTEM_HELLO, &[]),
            Err(DispatchError::ResponseExpected("system_hello"))
        ));
        assert!(link.sent().is_empty());
    }

    #[test]
    fn call_by_name() {
        let link = Scripted::default();
        link.push(version_reply());
        let dispatcher = Dispatcher::new(link.clone());

        let response = dispatcher
            .call_by_name("system_get_version", &[])
            .unwrap()
            .unwrap();
        assert_eq!(response.name(), "system_get_version");
        assert!(matches!(
            dispatcher.call_by_name("system_bogus", &[]),
            Err(DispatchError::UnknownCommand(name)) if name == "system_bogus"
        ));
    }

    #[test]
    fn command_too_long_leaves_request_buffer_untouched() {
        let link = Scripted::default();
        link.push(ok_reply(&cmd::SYSTEM_HELLO));
        let dispatcher = Dispatcher::new(link.clone());
        dispatcher.system_hello().unwrap();
        let before = dispatcher.lock().request.clone();
        let receives = link.receives();

        let err = dispatcher
            .system_data_buffer_write(&[0xAB; 256])
            .unwrap_err();

        assert!(matches!(
            err,
            DispatchError::Codec(CodecError::CommandTooLong {
                size: 257,
                max: 256
            })
        ));
        assert_eq!(dispatcher.lock().request, before);
        assert_eq!(link.sent().len(), 1);
        assert_eq!(link.receives(), receives);
    }

    #[test]
    fn nonzero_status_surfaces_as_status_error() {
        let link = Scripted::default();
        link.push(wire(
            MessageKind::Response,
            cmd::SYSTEM_GET_VERSION.key(),
            &[0x0c, 0x01],
        ));
        let dispatcher = Dispatcher::new(link.clone());

        let err = dispatcher.system_get_version().unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Status {
                command: "system_get_version",
                status: Status(0x010c)
            }
        ));
    }

    #[test]
    fn variable_output_is_truncated_with_true_length() {
        let link = Scripted::default();
        let mut payload = vec![0x00, 0x00, 10];
        payload.extend(0..10u8);
        link.push(wire(
            MessageKind::Response,
            cmd::GATT_SERVER_READ_ATTRIBUTE_VALUE.key(),
            &payload,
        ));
        link.push(wire(
            MessageKind::Response,
            cmd::GATT_SERVER_READ_ATTRIBUTE_VALUE.key(),
            &payload,
        ));
        let dispatcher = Dispatcher::new(link.clone());

        let mut small = [0u8; 4];
        let len = dispatcher
            .gatt_server_read_attribute_value(0x10, 0, &mut small)
            .unwrap();
        assert_eq!(len, 10);
        assert_eq!(small, [0, 1, 2, 3]);

        let mut large = [0xFFu8; 16];
        let len = dispatcher
            .gatt_server_read_attribute_value(0x10, 0, &mut large)
            .unwrap();
        assert_eq!(len, 10);
        assert_eq!(&large[..10], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(large[10], 0xFF);
    }

    #[test]
    fn transport_errors_stay_distinct() {
        let dispatcher = Dispatcher::new(Scripted::default());
        assert!(matches!(
            dispatcher.system_hello(),
            Err(DispatchError::Transport(TransportError::Closed))
        ));

        let dispatcher = Dispatcher::new(Scripted::default().timing_out());
        assert!(matches!(
            dispatcher.system_hello(),
            Err(DispatchError::Transport(TransportError::Timeout))
        ));
    }

    #[test]
    fn response_deadline() {
        let config = DispatcherConfig {
            response_timeout: Some(Duration::from_millis(30)),
            ..DispatcherConfig::default()
        };
        let dispatcher = Dispatcher::with_config(Scripted::default().timing_out(), config);

        let started = Instant::now();
        let err = dispatcher.system_hello().unwrap_err();
        assert!(matches!(err, DispatchError::Timeout(t) if t == Duration::from_millis(30)));
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn oversized_inbound_frame_is_a_frame_error() {
        let link = Scripted::default();
        link.push(wire(
            MessageKind::Event,
            MessageKey::new(class::SYSTEM, 0x06),
            &[0; 300],
        ));
        let dispatcher = Dispatcher::new(link.clone());

        assert!(matches!(
            dispatcher.system_hello(),
            Err(DispatchError::Frame(FrameError::PayloadTooLarge { .. }))
        ));
    }

    #[test]
    fn wait_event_rejects_unsolicited_response() {
        let link = Scripted::default();
        link.push(ok_reply(&cmd::SYSTEM_HELLO));
        let dispatcher = Dispatcher::new(link.clone());

        assert!(matches!(
            dispatcher.wait_event(),
            Err(DispatchError::ProtocolViolation { expected: None, .. })
        ));
    }

    #[test]
    fn bad_events_are_dropped_not_fatal() {
        let link = Scripted::default();
        link.push(wire(MessageKind::Event, MessageKey::new(0x7e, 0x00), &[1, 2, 3]));
        link.push(wire(
            MessageKind::Event,
            MessageKey::new(class::SYSTEM, 0x07),
            &[],
        ));
        link.push(ok_reply(&cmd::SYSTEM_HELLO));
        let dispatcher = Dispatcher::new(link.clone());

        dispatcher.system_hello().unwrap();
        assert_eq!(dispatcher.dropped_events(), 2);
        assert_eq!(dispatcher.pop_event(), None);
    }

    #[test]
    fn zero_capacity_queue_drops_unclaimed() {
        let link = Scripted::default();
        link.push(timer_event(1));
        link.push(ok_reply(&cmd::SYSTEM_HELLO));
        let config = DispatcherConfig {
            event_queue_capacity: 0,
            ..DispatcherConfig::default()
        };
        let dispatcher = Dispatcher::with_config(link.clone(), config);

        dispatcher.system_hello().unwrap();
        assert_eq!(dispatcher.pop_event(), None);
        assert_eq!(dispatcher.dropped_events(), 1);
    }

    #[test]
    fn larger_configured_payload_is_honoured() {
        let args = |value_len: usize| {
            vec![
                Value::U16(0),
                Value::U16(1),
                Value::U16(0x02),
                Value::U16(0),
                Value::U8(0),
                Value::Blob(Bytes::from_static(&[0x11; 16])),
                Value::U8(0),
                Value::U16(value_len as u16),
                Value::Array(Bytes::from(vec![0x5A; value_len])),
            ]
        };

        let dispatcher = Dispatcher::new(Scripted::default());
        assert!(matches!(
            dispatcher.call(&cmd::GATTDB_ADD_UUID128_CHARACTERISTIC, &args(300)),
            Err(DispatchError::Codec(CodecError::CommandTooLong { max: 256, .. }))
        ));

        let link = Scripted::default();
        link.push(wire(
            MessageKind::Response,
            cmd::GATTDB_ADD_UUID128_CHARACTERISTIC.key(),
            &[0, 0, 0x21, 0x00],
        ));
        let config = DispatcherConfig {
            max_payload_size: 0x7FF,
            ..DispatcherConfig::default()
        };
        let dispatcher = Dispatcher::with_config(link.clone(), config);
        let response = dispatcher
            .call(&cmd::GATTDB_ADD_UUID128_CHARACTERISTIC, &args(300))
            .unwrap();
        assert_eq!(response.u16(1).unwrap(), 0x21);
        // 28 fixed bytes + 2-byte prefix + 300 value bytes.
        let sent = link.sent();
        assert_eq!(sent[0].len(), HEADER_SIZE + 330);
        assert_eq!(&sent[0][..2], &[0x01, 0x4A]);
    }

    /// Minimal NCP on the far end of a socket pair: answers every command
    /// with a success status, preceded by one event.
    #[cfg(unix)]
    fn spawn_ncp(
        stream: std::os::unix::net::UnixStream,
        commands: usize,
    ) -> std::thread::JoinHandle<()> {
        use ncpwire_frame::Frame;
        use ncpwire_transport::StreamTransport;

        std::thread::spawn(move || {
            let mut ncp = FramedTransport::new(StreamTransport::new(stream));
            for i in 0..commands {
                let request = ncp.recv_frame().unwrap();
                assert_eq!(request.kind, MessageKind::Command);
                ncp.send_frame(&Frame::new(
                    MessageKind::Event,
                    MessageKey::new(class::SYSTEM, 0x07),
                    vec![i as u8],
                ))
                .unwrap();
                ncp.send_frame(&Frame::new(MessageKind::Response, request.key(), vec![0, 0]))
                    .unwrap();
            }
        })
    }

    #[test]
    #[cfg(unix)]
    fn concurrent_callers_are_serialized() {
        use ncpwire_transport::StreamTransport;

        let (host, device) = std::os::unix::net::UnixStream::pair().unwrap();
        let ncp = spawn_ncp(device, 4 * 25);
        let config = DispatcherConfig {
            event_queue_capacity: 1024,
            ..DispatcherConfig::default()
        };
        let dispatcher = Dispatcher::with_config(StreamTransport::new(host), config);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..25 {
                        dispatcher.system_hello().unwrap();
                    }
                });
            }
        });
        ncp.join().unwrap();

        let mut handles = Vec::new();
        while let Some(Event::SystemSoftTimer(timer)) = dispatcher.pop_event() {
            handles.push(timer.handle);
        }
        assert_eq!(handles, (0..100u8).collect::<Vec<_>>());
    }

    #[test]
    #[cfg(unix)]
    fn try_call_reports_busy_while_call_in_flight() {
        use ncpwire_frame::Frame;
        use ncpwire_transport::StreamTransport;

        let (host, device) = std::os::unix::net::UnixStream::pair().unwrap();
        let (seen_tx, seen_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let ncp = std::thread::spawn(move || {
            let mut ncp = FramedTransport::new(StreamTransport::new(device));
            let request = ncp.recv_frame().unwrap();
            seen_tx.send(()).unwrap();
            release_rx.recv().unwrap();
            ncp.send_frame(&Frame::new(MessageKind::Response, request.key(), vec![0, 0]))
                .unwrap();
        });
        let dispatcher = Dispatcher::new(StreamTransport::new(host));

        std::thread::scope(|scope| {
            let first = scope.spawn(|| dispatcher.system_hello());
            seen_rx.recv().unwrap();

            assert!(matches!(
                dispatcher.try_call(&cmd::SYSTEM_HELLO, &[]),
                Err(DispatchError::Busy)
            ));

            release_tx.send(()).unwrap();
            first.join().unwrap().unwrap();
        });
        ncp.join().unwrap();
    }
}
