use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The closure check that a module failed. Checks run in the order the
/// variants are declared, and only the first failure is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// A production name is defined more than once.
    Redefinition,
    /// A referenced non-terminal is neither defined nor imported.
    MissingImport,
    /// An import shadows a local definition or is never referenced.
    UselessImport,
    /// A production is neither referenced locally nor exported.
    MissingExport,
    /// An export is referenced locally or names nothing defined.
    UselessExport,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ViolationKind::Redefinition => write!(f, "redefinition"),
            ViolationKind::MissingImport => write!(f, "missing import"),
            ViolationKind::UselessImport => write!(f, "useless import"),
            ViolationKind::MissingExport => write!(f, "missing export"),
            ViolationKind::UselessExport => write!(f, "useless export"),
        }
    }
}

/// An error raised when a module's interface does not match its grammar.
///
/// `names` holds every offending symbol for `kind`, sorted and without
/// duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[error("{kind}: {}", .names.join(", "))]
pub struct VerifyError {
    pub kind: ViolationKind,
    pub names: Vec<String>,
}

impl VerifyError {
    pub fn new<I, S>(kind: ViolationKind, names: I) -> VerifyError
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        VerifyError { kind, names }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_sorts_names() {
        let err = VerifyError::new(ViolationKind::MissingImport, vec!["b", "a", "b"]);
        assert_eq!(err.names, vec!["a", "b"]);
        assert_eq!(err.to_string(), "missing import: a, b");
    }

    #[test]
    fn it_serializes_kinds() {
        let err = VerifyError::new(ViolationKind::UselessExport, vec!["x"]);
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"kind":"useless-export","names":["x"]}"#);
    }
}
