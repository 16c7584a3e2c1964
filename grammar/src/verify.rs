//! Module interface verification.
//!
//! A grammar module declares the non-terminals it imports from other modules
//! and the ones it exports to them. The declaration is consistent when it is
//! exactly what the productions need and provide:
//!
//! * imports are the referenced names that are not defined locally, and
//! * exports are the defined names that are not referenced locally.
//!
//! [`verify`] checks this in a fixed order and reports the first mismatch,
//! with every offending name for that check.
//!
//! [`verify`]: fn.verify.html

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{VerifyError, ViolationKind};
use crate::symbols::{defined, referenced_in_grammar};
use crate::Grammar;

/// Fail with `kind` when `names` is not empty.
fn check<'a, I>(kind: ViolationKind, names: I) -> Result<(), VerifyError>
where
    I: IntoIterator<Item = &'a str>,
{
    let names: BTreeSet<&str> = names.into_iter().collect();
    if names.is_empty() {
        Ok(())
    } else {
        let err = VerifyError::new(kind, names);
        warn!(kind = %err.kind, names = ?err.names, "grammar module check failed");
        Err(err)
    }
}

/// Production names that are defined more than once. Each is listed once.
fn redefined(grammar: &Grammar) -> Vec<&str> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for production in grammar {
        *counts.entry(production.name.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect()
}

/// Verify that `imported` and `exported` are exactly the interface of
/// `grammar`, returning the grammar unchanged when they are.
///
/// The checks run in this order and stop at the first failure:
///
/// 1. no production name is defined twice;
/// 2. every referenced name is defined or imported;
/// 3. no import is defined locally, and every import is referenced;
/// 4. every defined name is referenced locally or exported;
/// 5. no export is referenced locally, and every export is defined.
pub fn verify<'g>(
    imported: &BTreeSet<String>,
    exported: &BTreeSet<String>,
    grammar: &'g Grammar,
) -> Result<&'g Grammar, VerifyError> {
    check(ViolationKind::Redefinition, redefined(grammar))?;

    let defined = defined(grammar);
    let referenced = referenced_in_grammar(grammar);
    let imported: BTreeSet<&str> = imported.iter().map(String::as_str).collect();
    let exported: BTreeSet<&str> = exported.iter().map(String::as_str).collect();
    debug!(
        defined = defined.len(),
        referenced = referenced.len(),
        imported = imported.len(),
        exported = exported.len(),
        "verifying grammar module"
    );

    check(
        ViolationKind::MissingImport,
        referenced
            .iter()
            .filter(|name| !imported.contains(*name) && !defined.contains(*name))
            .cloned(),
    )?;

    check(
        ViolationKind::UselessImport,
        imported
            .iter()
            .filter(|name| defined.contains(*name) || !referenced.contains(*name))
            .cloned(),
    )?;

    check(
        ViolationKind::MissingExport,
        defined
            .iter()
            .filter(|name| !referenced.contains(*name) && !exported.contains(*name))
            .cloned(),
    )?;

    check(
        ViolationKind::UselessExport,
        exported
            .iter()
            .filter(|name| referenced.contains(*name) || !defined.contains(*name))
            .cloned(),
    )?;

    Ok(grammar)
}

/// The declared imports and exports of a grammar module.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Interface {
    pub imports: BTreeSet<String>,
    pub exports: BTreeSet<String>,
}

impl Interface {
    pub fn new<I, E, S, T>(imports: I, exports: E) -> Interface
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Interface {
            imports: imports.into_iter().map(Into::into).collect(),
            exports: exports.into_iter().map(Into::into).collect(),
        }
    }

    /// The only interface that `grammar` verifies against, assuming its
    /// production names are unique: imports are the referenced names that
    /// are not defined, exports are the defined names that are not
    /// referenced.
    pub fn infer(grammar: &Grammar) -> Interface {
        let defined = defined(grammar);
        let referenced = referenced_in_grammar(grammar);
        Interface::new(
            referenced.difference(&defined).cloned(),
            defined.difference(&referenced).cloned(),
        )
    }
}

/// A named grammar together with its declared interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    pub name: String,
    pub grammar: Grammar,
    pub interface: Interface,
}

impl Module {
    pub fn new(
        name: impl Into<String>,
        grammar: Grammar,
        interface: Interface,
    ) -> Module {
        Module {
            name: name.into(),
            grammar,
            interface,
        }
    }

    /// Verify the grammar against the module's own interface.
    pub fn verify(&self) -> Result<&Grammar, VerifyError> {
        debug!(module = %self.name, "verifying module");
        verify(
            &self.interface.imports,
            &self.interface.exports,
            &self.grammar,
        )
    }
}
