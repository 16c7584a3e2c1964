//! The surface grammar of the language, split into a lexical module and a
//! syntax module that imports identifiers, strings and numbers from it.
//!
//! Each module carries its declared interface. Nothing is checked when a
//! module is built; callers run [`Module::verify`] (the test suite and the
//! `grammar-check` binary both do).
//!
//! [`Module::verify`]: ../grammar/struct.Module.html#method.verify

use grammar::Module;

pub mod syntax;
pub mod tokens;

/// Every module in the catalog, in dependency order.
pub fn modules() -> Vec<Module> {
    vec![tokens::module(), syntax::module()]
}

/// Look a module up by name.
pub fn module(name: &str) -> Option<Module> {
    match name {
        tokens::NAME => Some(tokens::module()),
        syntax::NAME => Some(syntax::module()),
        _ => None,
    }
}

/// Names of the modules in the catalog.
pub fn names() -> Vec<&'static str> {
    vec![tokens::NAME, syntax::NAME]
}
