use bytes::Bytes;
use ncpwire_catalog::{Catalog, CommandDescriptor, Field, FieldType, Value};
use tracing::debug;

use crate::cmd::SendArgs;
use crate::exit::{dispatch_error, CliError, CliResult, FAILURE, SUCCESS, USAGE};
use crate::hex::parse_hex;
use crate::output::{print_message, OutputFormat};

pub fn run(args: SendArgs, format: OutputFormat) -> CliResult<i32> {
    let command = Catalog::builtin()
        .command_by_name(&args.command)
        .ok_or_else(|| CliError::new(USAGE, format!("unknown command: {}", args.command)))?;
    let values = parse_args(command, &args.fields)?;

    let ncp = args.connect.open(0)?;
    let response = ncp
        .dispatch(command, &values)
        .map_err(|err| dispatch_error(&format!("{} failed", command.name), err))?;

    let Some(response) = response else {
        debug!(command = command.name, "sent fire-and-forget command");
        return Ok(SUCCESS);
    };
    print_message(response.message(), format);
    if !response.status().is_success() {
        return Err(CliError::new(
            FAILURE,
            format!("{} returned status {}", command.name, response.status()),
        ));
    }
    Ok(SUCCESS)
}

/// Match `FIELD=VALUE` pairs to the command's parameters, in layout order.
fn parse_args(command: &CommandDescriptor, pairs: &[String]) -> CliResult<Vec<Value>> {
    let mut given: Vec<(&str, &str)> = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| CliError::new(USAGE, format!("expected FIELD=VALUE, got {pair:?}")))?;
        if !command.params.iter().any(|f| f.name == name) {
            return Err(CliError::new(
                USAGE,
                format!("{} has no parameter {name:?}", command.name),
            ));
        }
        if given.iter().any(|(seen, _)| *seen == name) {
            return Err(CliError::new(USAGE, format!("parameter {name:?} given twice")));
        }
        given.push((name, value));
    }

    command
        .params
        .iter()
        .map(|field| {
            let raw = given
                .iter()
                .find(|(name, _)| *name == field.name)
                .map(|(_, value)| *value)
                .ok_or_else(|| {
                    CliError::new(
                        USAGE,
                        format!("missing parameter {}: {}", field.name, field.ty),
                    )
                })?;
            parse_value(field, raw)
        })
        .collect()
}

fn parse_value(field: &Field, raw: &str) -> CliResult<Value> {
    let invalid = || {
        CliError::new(
            USAGE,
            format!("invalid {} value for {}: {raw:?}", field.ty, field.name),
        )
    };
    let value = match field.ty {
        FieldType::U8 => Value::U8(parse_int(raw).ok_or_else(invalid)?),
        FieldType::I8 => Value::I8(parse_int(raw).ok_or_else(invalid)?),
        FieldType::U16 => Value::U16(parse_int(raw).ok_or_else(invalid)?),
        FieldType::I16 => Value::I16(parse_int(raw).ok_or_else(invalid)?),
        FieldType::U32 => Value::U32(parse_int(raw).ok_or_else(invalid)?),
        FieldType::I32 => Value::I32(parse_int(raw).ok_or_else(invalid)?),
        FieldType::Blob(n) => {
            let bytes = parse_hex(raw)?;
            if bytes.len() != n {
                return Err(CliError::new(
                    USAGE,
                    format!("{} needs {n} bytes, got {}", field.name, bytes.len()),
                ));
            }
            Value::Blob(Bytes::from(bytes))
        }
        FieldType::Array(_) => Value::Array(Bytes::from(parse_hex(raw)?)),
    };
    Ok(value)
}

/// Decimal (optionally negative) or `0x` hex, range-checked into `T`.
fn parse_int<T: TryFrom<i64>>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    let n = match raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
    {
        Some(hex) => i64::from_str_radix(hex, 16).ok()?,
        None => raw.parse::<i64>().ok()?,
    };
    T::try_from(n).ok()
}

#[cfg(test)]
mod tests {
    use ncpwire_catalog::table::cmd;

    use super::*;

    fn pairs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_in_layout_order() {
        let values = parse_args(
            &cmd::GATT_SERVER_READ_ATTRIBUTE_VALUE,
            &pairs(&["offset=0x10", "attribute=12"]),
        )
        .unwrap();
        assert_eq!(values, vec![Value::U16(12), Value::U16(0x10)]);
    }

    #[test]
    fn byte_fields_take_hex() {
        let values =
            parse_args(&cmd::USER_MESSAGE_TO_TARGET, &pairs(&["data=0xdeadbeef"])).unwrap();
        assert_eq!(
            values,
            vec![Value::Array(Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef]))]
        );
    }

    #[test]
    fn rejects_missing_unknown_and_duplicate() {
        let command = &cmd::GATT_SERVER_READ_ATTRIBUTE_VALUE;
        assert!(parse_args(command, &pairs(&["attribute=1"])).is_err());
        assert!(parse_args(command, &pairs(&["attribute=1", "offset=0", "bogus=1"])).is_err());
        assert!(parse_args(command, &pairs(&["attribute=1", "attribute=2", "offset=0"])).is_err());
        assert!(parse_args(command, &pairs(&["attribute"])).is_err());
    }

    #[test]
    fn integers_are_range_checked() {
        assert_eq!(parse_int::<u8>("255"), Some(255));
        assert_eq!(parse_int::<u8>("256"), None);
        assert_eq!(parse_int::<i8>("-128"), Some(-128));
        assert_eq!(parse_int::<u16>("0xFFFF"), Some(0xFFFF));
        assert_eq!(parse_int::<u32>("-1"), None);
        assert_eq!(parse_int::<u16>("twelve"), None);
    }
}
