//! Support code for the `grammar-check` binary: configuration, logging and
//! the reports printed for each command.
//!
//! The grammar model and the closure checks live in the `grammar` crate, and
//! the modules being checked live in `surface`.

pub mod config;
pub mod logging;
pub mod report;

use grammar::Module;
use thiserror::Error;

/// Errors raised by the command line front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown module `{name}` (known modules: {known})")]
    UnknownModule { name: String, known: String },
}

/// Resolve module names against the catalog. No names means every module.
pub fn select_modules(names: &[String]) -> Result<Vec<Module>, CliError> {
    if names.is_empty() {
        return Ok(surface::modules());
    }
    names.iter().map(|name| find_module(name)).collect()
}

/// Look a single module up in the catalog.
pub fn find_module(name: &str) -> Result<Module, CliError> {
    surface::module(name).ok_or_else(|| CliError::UnknownModule {
        name: name.to_string(),
        known: surface::names().join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_selects_every_module_by_default() {
        let modules = select_modules(&[]).unwrap();
        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, surface::names());
    }

    #[test]
    fn it_rejects_unknown_modules() {
        let err = select_modules(&["tokens".into(), "nope".into()]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown module `nope` (known modules: tokens, syntax)"
        );
    }
}
