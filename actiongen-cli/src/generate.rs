//! Batch generation driver.
//!
//! Walks the catalog in order, introspects every command in the selected
//! namespace, and writes one metadata document per command. One broken
//! command is reported and does not abort the batch.

use std::path::Path;

use actiongen::{CommandCatalog, MetadataSink, ParserIntrospector};

/// Namespace selector matching every registered command.
pub const ALL_NAMESPACES: &str = "*";

/// Whether `command` belongs to `namespace`.
///
/// Commands match by invocation-text prefix; `*` matches everything.
pub fn is_command_in_namespace(command: &str, namespace: &str) -> bool {
    namespace == ALL_NAMESPACES || command.starts_with(namespace)
}

/// Generate metadata for every catalog command in `namespace`, writing into
/// `base_path` (created if missing). Returns the number of commands that
/// failed.
pub fn run(catalog: &CommandCatalog, namespace: &str, base_path: &Path) -> anyhow::Result<usize> {
    std::fs::create_dir_all(base_path)?;
    let sink = MetadataSink::new(base_path);
    let mut failures = 0;

    for (command, handle) in catalog.iter() {
        if !is_command_in_namespace(command, namespace) {
            continue;
        }
        let written = ParserIntrospector::new(command, handle)
            .build()
            .and_then(|record| {
                let path = sink.write(&record)?;
                Ok((record, path))
            });
        match written {
            Ok((record, path)) => {
                tracing::info!("{} : {}", record.name, path.display());
            }
            Err(error) => {
                failures += 1;
                tracing::error!("{command}: {error}");
            }
        }
    }

    Ok(failures)
}
