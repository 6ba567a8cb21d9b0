use ncpwire_catalog::class::{class_by_name, class_name};
use ncpwire_catalog::{Catalog, Field};
use serde::Serialize;

use crate::cmd::CatalogArgs;
use crate::exit::{CliError, CliResult, SUCCESS, USAGE};
use crate::output::{new_table, print_json, OutputFormat};

#[derive(Serialize)]
struct FieldInfo {
    name: &'static str,
    #[serde(rename = "type")]
    ty: String,
}

#[derive(Serialize)]
struct EntryInfo {
    kind: &'static str,
    class: &'static str,
    class_id: u8,
    id: u8,
    name: &'static str,
    fields: Vec<FieldInfo>,
    /// `None` for events and fire-and-forget commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<Vec<FieldInfo>>,
    deprecated: bool,
}

pub fn run(args: CatalogArgs, format: OutputFormat) -> CliResult<i32> {
    let class_filter = match &args.class {
        Some(name) => Some(
            class_by_name(name)
                .ok_or_else(|| CliError::new(USAGE, format!("unknown class: {name}")))?,
        ),
        None => None,
    };

    let entries = collect(&Catalog::builtin(), args.events, class_filter);
    print_entries(&entries, format);
    Ok(SUCCESS)
}

fn collect(catalog: &Catalog, events: bool, class_filter: Option<u8>) -> Vec<EntryInfo> {
    let wanted = |class_id: u8| class_filter.is_none_or(|c| c == class_id);
    if events {
        catalog
            .events()
            .into_iter()
            .filter(|e| wanted(e.class_id))
            .map(|e| EntryInfo {
                kind: "event",
                class: class_name(e.class_id),
                class_id: e.class_id,
                id: e.id,
                name: e.name,
                fields: fields(e.fields),
                response: None,
                deprecated: false,
            })
            .collect()
    } else {
        catalog
            .commands()
            .into_iter()
            .filter(|c| wanted(c.class_id))
            .map(|c| EntryInfo {
                kind: "command",
                class: class_name(c.class_id),
                class_id: c.class_id,
                id: c.id,
                name: c.name,
                fields: fields(c.params),
                response: c.response.map(fields),
                deprecated: c.deprecated,
            })
            .collect()
    }
}

fn fields(layout: &'static [Field]) -> Vec<FieldInfo> {
    layout
        .iter()
        .map(|f| FieldInfo {
            name: f.name,
            ty: f.ty.to_string(),
        })
        .collect()
}

fn signature(fields: &[FieldInfo]) -> String {
    fields
        .iter()
        .map(|f| format!("{} {}", f.ty, f.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_entries(entries: &[EntryInfo], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Table => {
            let mut table = new_table(vec!["KEY", "NAME", "FIELDS", "RESPONSE"]);
            for entry in entries {
                table.add_row(vec![
                    format!("{:#04x}:{:#04x}", entry.class_id, entry.id),
                    entry.name.to_string(),
                    signature(&entry.fields),
                    match &entry.response {
                        Some(response) => signature(response),
                        None if entry.kind == "command" => "(no response)".to_string(),
                        None => String::new(),
                    },
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for entry in entries {
                let mut line = format!("{}({})", entry.name, signature(&entry.fields));
                if let Some(response) = &entry.response {
                    line.push_str(&format!(" -> ({})", signature(response)));
                }
                if entry.deprecated {
                    line.push_str(" [deprecated]");
                }
                println!("{line}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ncpwire_catalog::class;

    use super::*;

    #[test]
    fn filters_by_class() {
        let catalog = Catalog::builtin();
        let entries = collect(&catalog, false, Some(class::USER));
        let names: Vec<_> = entries.iter().map(|e| e.name).collect();
        assert!(names.contains(&"user_message_to_target"));
        assert!(entries.iter().all(|e| e.class == "user"));
    }

    #[test]
    fn fire_and_forget_has_no_response() {
        let catalog = Catalog::builtin();
        let entries = collect(&catalog, false, Some(class::SYSTEM));
        let reset = entries.iter().find(|e| e.name == "system_reset").unwrap();
        assert!(reset.response.is_none());
        let hello = entries.iter().find(|e| e.name == "system_hello").unwrap();
        assert_eq!(hello.response.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn events_listed_separately() {
        let catalog = Catalog::builtin();
        let entries = collect(&catalog, true, None);
        assert_eq!(entries.len(), catalog.events().len());
        assert!(entries.iter().all(|e| e.kind == "event"));
    }
}
