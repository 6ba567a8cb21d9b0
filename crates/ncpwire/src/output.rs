use std::io::IsTerminal;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use ncpwire_catalog::class::class_name;
use ncpwire_catalog::{Catalog, CodecError, Message, Value};
use ncpwire_host::Event;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
pub struct FieldOutput {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: String,
    pub value: serde_json::Value,
}

#[derive(Serialize)]
pub struct MessageOutput {
    pub kind: &'static str,
    pub class: &'static str,
    pub class_id: u8,
    pub id: u8,
    pub name: &'static str,
    pub fields: Vec<FieldOutput>,
}

impl MessageOutput {
    pub fn from_message(message: &Message) -> Self {
        let key = message.key();
        Self {
            kind: message.kind().as_str(),
            class: class_name(key.class_id),
            class_id: key.class_id,
            id: key.id,
            name: message.name(),
            fields: message
                .iter()
                .map(|(field, value)| FieldOutput {
                    name: field.name,
                    ty: field.ty.to_string(),
                    value: value_json(value),
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
pub struct EventOutput {
    pub event: &'static str,
    pub class: &'static str,
    pub class_id: u8,
    pub id: u8,
    pub fields: Vec<FieldOutput>,
    pub timestamp: String,
}

impl EventOutput {
    pub fn new(event: &Event, catalog: &Catalog) -> Result<Self, CodecError> {
        let message = MessageOutput::from_message(&event.to_message(catalog)?);
        Ok(Self {
            event: message.name,
            class: message.class,
            class_id: message.class_id,
            id: message.id,
            fields: message.fields,
            timestamp: now_unix_seconds(),
        })
    }
}

/// Integers as JSON numbers, byte fields as lowercase hex strings.
pub fn value_json(value: &Value) -> serde_json::Value {
    match value.as_i64() {
        Some(n) => serde_json::Value::from(n),
        None => serde_json::Value::from(value.to_string()),
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn print_message(message: &Message, format: OutputFormat) {
    let out = MessageOutput::from_message(message);
    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => {
            println!("{} {} ({}:{:#04x})", out.kind, out.name, out.class, out.id);
            if out.fields.is_empty() {
                return;
            }
            let mut table = new_table(vec!["FIELD", "TYPE", "VALUE"]);
            for field in &out.fields {
                table.add_row(vec![
                    field.name.to_string(),
                    field.ty.clone(),
                    display_json(&field.value),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("{} {} {}", out.kind, out.name, pretty_fields(&out.fields));
        }
    }
}

pub fn print_event(out: &EventOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(out),
        OutputFormat::Table => {
            let mut table = new_table(vec!["EVENT", "FIELD", "VALUE"]);
            for field in &out.fields {
                table.add_row(vec![
                    out.event.to_string(),
                    field.name.to_string(),
                    display_json(&field.value),
                ]);
            }
            if out.fields.is_empty() {
                table.add_row(vec![out.event.to_string(), String::new(), String::new()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "event {} ({}:{:#04x}) {}",
                out.event,
                out.class,
                out.id,
                pretty_fields(&out.fields)
            );
        }
    }
}

pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn pretty_fields(fields: &[FieldOutput]) -> String {
    fields
        .iter()
        .map(|f| format!("{}={}", f.name, display_json(&f.value)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn display_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn now_unix_seconds() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use ncpwire_catalog::table::cmd;

    use super::*;

    #[test]
    fn message_output_names_every_field() {
        let payload = Bytes::from_static(&[0x00, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x01]);
        let message = cmd::SYSTEM_GET_IDENTITY_ADDRESS
            .decode_response(payload)
            .unwrap();
        let out = MessageOutput::from_message(&message);

        assert_eq!(out.kind, "response");
        assert_eq!(out.class, "system");
        assert_eq!(out.name, "system_get_identity_address");
        let names: Vec<_> = out.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["result", "address", "type"]);
        assert_eq!(out.fields[1].value, serde_json::json!("112233445566"));
        assert_eq!(out.fields[2].value, serde_json::json!(1));
    }

    #[test]
    fn event_output_carries_structured_fields() {
        let catalog = Catalog::builtin();
        let event = Event::ConnectionRssi(ncpwire_host::event::ConnectionRssi {
            connection: 1,
            status: 0,
            rssi: -61,
        });
        let out = EventOutput::new(&event, &catalog).unwrap();
        let json = serde_json::to_value(&out).unwrap();

        assert_eq!(json["event"], "connection_rssi");
        assert_eq!(json["class"], "connection");
        assert_eq!(json["id"], 3);
        assert!(json.get("detail").is_none());
        let fields = json["fields"].as_array().unwrap();
        assert_eq!(fields[2]["name"], "rssi");
        assert_eq!(fields[2]["type"], "int8");
        assert_eq!(fields[2]["value"], -61);
    }

    #[test]
    fn signed_values_stay_numeric() {
        assert_eq!(value_json(&Value::I8(-40)), serde_json::json!(-40));
        assert_eq!(
            value_json(&Value::Array(Bytes::from_static(b"\x01\xff"))),
            serde_json::json!("01ff")
        );
    }
}
