#![cfg(all(unix, feature = "cli"))]

use std::os::unix::net::UnixListener;
use std::path::PathBuf;
use std::process::Command;
use std::thread::{self, JoinHandle};

use ncpwire_frame::{Frame, FramedTransport, MessageKey, MessageKind};
use ncpwire_transport::{StreamTransport, TransportError};

fn unique_socket(tag: &str) -> PathBuf {
    let dir = PathBuf::from(format!(
        "/tmp/ncpwire-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir.join("ncp.sock")
}

fn version_payload() -> Vec<u8> {
    let mut payload = vec![0x00, 0x00];
    for v in [7u16, 2, 1, 312] {
        payload.extend_from_slice(&v.to_le_bytes());
    }
    payload.extend_from_slice(&0x0102_0304u32.to_le_bytes());
    payload.extend_from_slice(&0xCAFE_F00Du32.to_le_bytes());
    payload
}

/// Fake NCP serving one connection. Sends `greeting` events first, then
/// answers commands it knows; unknown commands get status 0x0101.
fn spawn_ncp(path: &PathBuf, greeting: Vec<Frame>) -> JoinHandle<Vec<MessageKey>> {
    let listener = UnixListener::bind(path).expect("socket should bind");
    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("cli should connect");
        let mut ncp = FramedTransport::new(StreamTransport::new(stream));
        for event in &greeting {
            ncp.send_frame(event).expect("event should send");
        }

        let mut seen = Vec::new();
        loop {
            let request = match ncp.recv_frame() {
                Ok(frame) => frame,
                Err(ncpwire_frame::FrameError::Transport(TransportError::Closed)) => break,
                Err(err) => panic!("fake ncp read failed: {err}"),
            };
            let key = request.key();
            seen.push(key);
            let payload = match (key.class_id, key.id) {
                (0x01, 0x00) => vec![0x00, 0x00],
                (0x01, 0x1b) => version_payload(),
                (0x01, 0x15) => vec![0x00, 0x00, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11, 0x01],
                (0x01, 0x01) => continue,
                (0xff, 0x00) => {
                    let mut echoed = vec![0x00, 0x00];
                    echoed.extend_from_slice(&request.payload);
                    echoed
                }
                _ => vec![0x01, 0x01],
            };
            ncp.send_frame(&Frame::new(MessageKind::Response, key, payload))
                .expect("response should send");
        }
        seen
    })
}

fn ncpwire(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_ncpwire"))
        .arg("--log-level")
        .arg("error")
        .arg("--format")
        .arg("json")
        .args(args)
        .output()
        .expect("ncpwire should run")
}

#[test]
fn info_reports_version_and_address() {
    let path = unique_socket("info");
    let boot = Frame::new(MessageKind::Event, MessageKey::new(0x01, 0x07), vec![0x03]);
    let ncp = spawn_ncp(&path, vec![boot]);

    let output = ncpwire(&["info", path.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("info output should be json");
    assert_eq!(json["firmware"], "7.2.1");
    assert_eq!(json["build"], 312);
    assert_eq!(json["hash"], "cafef00d");
    assert_eq!(json["address"], "11:22:33:44:55:66");
    assert_eq!(json["address_type"], "static");

    let seen = ncp.join().expect("fake ncp should finish");
    assert_eq!(
        seen,
        vec![
            MessageKey::new(0x01, 0x00),
            MessageKey::new(0x01, 0x1b),
            MessageKey::new(0x01, 0x15),
        ]
    );
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn send_by_name_prints_response() {
    let path = unique_socket("send");
    let ncp = spawn_ncp(&path, Vec::new());

    let output = ncpwire(&[
        "send",
        path.to_str().unwrap(),
        "user_message_to_target",
        "data=c0ffee",
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("send output should be json");
    assert_eq!(json["kind"], "response");
    assert_eq!(json["name"], "user_message_to_target");
    assert_eq!(json["fields"][0]["value"], 0);
    // The fake NCP echoes the encoded request, prefix included.
    assert_eq!(json["fields"][1]["value"], "c0ffee");

    ncp.join().expect("fake ncp should finish");
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn send_nonzero_status_fails() {
    let path = unique_socket("status");
    let ncp = spawn_ncp(&path, Vec::new());

    let output = ncpwire(&["send", path.to_str().unwrap(), "system_start_bluetooth"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("0x0101"));

    ncp.join().expect("fake ncp should finish");
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn send_fire_and_forget_does_not_wait() {
    let path = unique_socket("reset");
    let ncp = spawn_ncp(&path, Vec::new());

    let output = ncpwire(&["send", path.to_str().unwrap(), "system_reset", "dfu=0"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let seen = ncp.join().expect("fake ncp should finish");
    assert_eq!(seen, vec![MessageKey::new(0x01, 0x01)]);
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn listen_prints_events_in_order() {
    let path = unique_socket("listen");
    let events = (1..=3u8)
        .map(|handle| {
            Frame::new(
                MessageKind::Event,
                MessageKey::new(0x01, 0x07),
                vec![handle],
            )
        })
        .collect();
    let ncp = spawn_ncp(&path, events);

    let output = ncpwire(&["listen", path.to_str().unwrap(), "--count", "3"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let lines: Vec<serde_json::Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line should be json"))
        .collect();
    assert_eq!(lines.len(), 3);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line["event"], "system_soft_timer");
        assert_eq!(line["class"], "system");
        assert_eq!(line["fields"][0]["name"], "handle");
        assert_eq!(line["fields"][0]["type"], "uint8");
        assert_eq!(line["fields"][0]["value"], i + 1);
    }

    ncp.join().expect("fake ncp should finish");
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
