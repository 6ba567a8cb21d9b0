use bytes::BytesMut;
use ncpwire_catalog::class::class_name;
use ncpwire_catalog::{Catalog, CodecError};
use ncpwire_frame::{decode_frame, Frame, HEADER_SIZE};
use serde::Serialize;

use crate::cmd::DecodeArgs;
use crate::exit::{codec_error, frame_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::hex::{parse_hex, to_hex};
use crate::output::{print_json, print_message, OutputFormat};

/// Frame whose header parsed but whose key is not in the catalog.
#[derive(Serialize)]
struct UnknownOutput {
    kind: &'static str,
    class: &'static str,
    class_id: u8,
    id: u8,
    payload: String,
}

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let bytes = parse_hex(&args.hex.concat())?;
    let frame = parse_frame(&bytes, args.max_payload)?;

    match Catalog::builtin().decode(&frame) {
        Ok(message) => print_message(&message, format),
        Err(CodecError::UnknownMessage { .. }) => {
            let out = UnknownOutput {
                kind: frame.kind.as_str(),
                class: class_name(frame.class_id),
                class_id: frame.class_id,
                id: frame.id,
                payload: to_hex(&frame.payload),
            };
            match format {
                OutputFormat::Json => print_json(&out),
                _ => println!(
                    "{} {} (unknown) payload={}",
                    out.kind,
                    frame.key(),
                    out.payload
                ),
            }
        }
        Err(err) => return Err(codec_error("decode failed", err)),
    }
    Ok(SUCCESS)
}

/// Exactly one frame: header, declared payload, nothing after.
fn parse_frame(bytes: &[u8], max_payload: usize) -> CliResult<Frame> {
    let mut buf = BytesMut::from(bytes);
    let frame = decode_frame(&mut buf, max_payload)
        .map_err(|err| frame_error("decode failed", err))?
        .ok_or_else(|| {
            CliError::new(
                DATA_INVALID,
                format!(
                    "incomplete frame: {} bytes, need {HEADER_SIZE} plus the declared length",
                    bytes.len()
                ),
            )
        })?;
    if !buf.is_empty() {
        return Err(CliError::new(
            DATA_INVALID,
            format!("{} bytes after the frame", buf.len()),
        ));
    }
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use ncpwire_frame::{MessageKey, MessageKind};

    use super::*;

    #[test]
    fn parses_get_version_command() {
        let frame = parse_frame(&[0x00, 0x00, 0x01, 0x1b], 256).unwrap();
        assert_eq!(frame.kind, MessageKind::Command);
        assert_eq!(frame.key(), MessageKey::new(0x01, 0x1b));
        let message = Catalog::builtin().decode(&frame).unwrap();
        assert_eq!(message.name(), "system_get_version");
    }

    #[test]
    fn rejects_short_and_long_input() {
        assert_eq!(
            parse_frame(&[0x00, 0x02, 0x01, 0x00, 0x00], 256)
                .unwrap_err()
                .code,
            DATA_INVALID
        );
        assert_eq!(
            parse_frame(&[0x00, 0x00, 0x01, 0x1b, 0xff], 256)
                .unwrap_err()
                .code,
            DATA_INVALID
        );
    }

    #[test]
    fn rejects_bad_header() {
        let err = parse_frame(&[0xc0, 0x00, 0x01, 0x00], 256).unwrap_err();
        assert_eq!(err.code, DATA_INVALID);
    }
}
