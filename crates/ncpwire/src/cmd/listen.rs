use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ncpwire_catalog::class::class_by_name;
use ncpwire_host::DispatchError;
use ncpwire_transport::TransportError;
use tracing::info;

use crate::cmd::ListenArgs;
use crate::exit::{dispatch_error, CliError, CliResult, INTERNAL, SUCCESS, USAGE};
use crate::output::{print_event, EventOutput, OutputFormat};

pub fn run(args: ListenArgs, format: OutputFormat) -> CliResult<i32> {
    let classes = resolve_classes(args.classes.as_deref())?;
    let ncp = args.connect.open(ncpwire_host::DEFAULT_EVENT_QUEUE_CAPACITY)?;

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;
    info!(endpoint = %args.connect.addr, "listening for events");

    let mut printed = 0usize;
    while running.load(Ordering::SeqCst) {
        let event = match ncp.wait_event() {
            Ok(event) => event,
            Err(DispatchError::Transport(TransportError::Timeout)) => continue,
            Err(err) => return Err(dispatch_error("receive failed", err)),
        };

        if let Some(classes) = &classes {
            if !classes.contains(&event.key().class_id) {
                continue;
            }
        }

        let out = EventOutput::new(&event, ncp.catalog())
            .map_err(|err| CliError::new(INTERNAL, format!("{}: {err}", event.name())))?;
        print_event(&out, format);
        printed = printed.saturating_add(1);

        if let Some(count) = args.count {
            if printed >= count {
                break;
            }
        }
    }

    let dropped = ncp.dropped_events();
    if dropped > 0 {
        info!(dropped, "events dropped");
    }
    Ok(SUCCESS)
}

fn resolve_classes(names: Option<&[String]>) -> CliResult<Option<Vec<u8>>> {
    names
        .map(|names| {
            names
                .iter()
                .map(|name| {
                    class_by_name(name)
                        .ok_or_else(|| CliError::new(USAGE, format!("unknown class: {name}")))
                })
                .collect::<CliResult<Vec<u8>>>()
        })
        .transpose()
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| CliError::new(INTERNAL, format!("signal handler setup failed: {err}")))
}

#[cfg(test)]
mod tests {
    use ncpwire_catalog::class;

    use super::*;

    #[test]
    fn resolves_class_filter() {
        let names = vec!["system".to_string(), "connection".to_string()];
        assert_eq!(
            resolve_classes(Some(names.as_slice())).unwrap(),
            Some(vec![class::SYSTEM, class::CONNECTION])
        );
        assert_eq!(resolve_classes(None).unwrap(), None);
        assert_eq!(
            resolve_classes(Some(&["nope".to_string()][..])).unwrap_err().code,
            USAGE
        );
    }
}
