//! Command definitions for the wrapped console suite.
//!
//! Each submodule registers its commands into the catalog under their
//! space-separated invocation text. The generator only ever reads parser
//! specs from these commands; it never executes them.

mod formatting;
mod server;
mod volume;

use actiongen::CommandCatalog;

/// The catalog of every command this build generates metadata for.
pub fn builtin_catalog() -> CommandCatalog {
    let mut catalog = CommandCatalog::new();
    server::register(&mut catalog);
    volume::register(&mut catalog);
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use actiongen::ParserIntrospector;

    #[test]
    fn catalog_covers_both_namespaces() {
        let catalog = builtin_catalog();
        assert!(catalog.get("server list").is_some());
        assert!(catalog.get("server create").is_some());
        assert!(catalog.get("volume list").is_some());
        assert!(catalog.get("volume create").is_some());
    }

    #[test]
    fn every_registered_command_introspects() {
        let catalog = builtin_catalog();
        for (command, handle) in catalog.iter() {
            let record = ParserIntrospector::new(command, handle)
                .build()
                .unwrap_or_else(|error| panic!("{command}: {error}"));
            assert!(record.parameters.contains_key("ep"));
            assert!(record.parameters.contains_key("base"));
        }
    }
}
