//! Reports printed by `grammar-check`, as plain text or JSON.

use std::collections::BTreeSet;
use std::fmt::Write;

use grammar::{terminals, Interface, Module, VerifyError};
use serde::Serialize;

use crate::config::Format;

/// The result of verifying one module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub module: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<VerifyError>,
}

impl CheckOutcome {
    pub fn from_module(module: &Module) -> CheckOutcome {
        let error = module.verify().err();
        CheckOutcome {
            module: module.name.clone(),
            ok: error.is_none(),
            error,
        }
    }
}

/// Verify every module. All modules are checked even after a failure.
pub fn check(modules: &[Module]) -> Vec<CheckOutcome> {
    modules.iter().map(CheckOutcome::from_module).collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TerminalsReport {
    pub module: String,
    pub terminals: Vec<String>,
}

impl TerminalsReport {
    pub fn from_module(module: &Module) -> TerminalsReport {
        TerminalsReport {
            module: module.name.clone(),
            terminals: terminals(&module.grammar)
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Declared interface next to the one the grammar actually needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InterfaceReport {
    pub module: String,
    pub declared: Interface,
    pub inferred: Interface,
}

impl InterfaceReport {
    pub fn from_module(module: &Module) -> InterfaceReport {
        InterfaceReport {
            module: module.name.clone(),
            declared: module.interface.clone(),
            inferred: Interface::infer(&module.grammar),
        }
    }

    pub fn matches(&self) -> bool {
        self.declared == self.inferred
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModuleSummary {
    pub module: String,
    pub productions: usize,
    pub imports: usize,
    pub exports: usize,
}

impl ModuleSummary {
    pub fn from_module(module: &Module) -> ModuleSummary {
        ModuleSummary {
            module: module.name.clone(),
            productions: module.grammar.len(),
            imports: module.interface.imports.len(),
            exports: module.interface.exports.len(),
        }
    }
}

/// A report that knows how to print itself as text.
pub trait Render: Serialize {
    fn render_text(&self, out: &mut String);

    fn render(&self, format: Format) -> anyhow::Result<String> {
        match format {
            Format::Text => {
                let mut out = String::new();
                self.render_text(&mut out);
                Ok(out)
            }
            Format::Json => {
                let mut out = serde_json::to_string_pretty(self)?;
                out.push('\n');
                Ok(out)
            }
        }
    }
}

impl<T: Render> Render for Vec<T> {
    fn render_text(&self, out: &mut String) {
        for item in self {
            item.render_text(out);
        }
    }
}

impl Render for CheckOutcome {
    fn render_text(&self, out: &mut String) {
        match &self.error {
            None => {
                let _ = writeln!(out, "{}: ok", self.module);
            }
            Some(err) => {
                let _ = writeln!(out, "{}: {}", self.module, err);
            }
        }
    }
}

impl Render for TerminalsReport {
    fn render_text(&self, out: &mut String) {
        for terminal in &self.terminals {
            let _ = writeln!(out, "{}", terminal);
        }
    }
}

fn join(names: &BTreeSet<String>) -> String {
    names.iter().cloned().collect::<Vec<_>>().join(", ")
}

impl Render for InterfaceReport {
    fn render_text(&self, out: &mut String) {
        let _ = writeln!(out, "module {}", self.module);
        let _ = writeln!(out, "  declared imports: {}", join(&self.declared.imports));
        let _ = writeln!(out, "  inferred imports: {}", join(&self.inferred.imports));
        let _ = writeln!(out, "  declared exports: {}", join(&self.declared.exports));
        let _ = writeln!(out, "  inferred exports: {}", join(&self.inferred.exports));
    }
}

impl Render for ModuleSummary {
    fn render_text(&self, out: &mut String) {
        let _ = writeln!(
            out,
            "{}\t{} productions\t{} imports\t{} exports",
            self.module, self.productions, self.imports, self.exports
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grammar::{n, t, Grammar, Production};

    fn broken() -> Module {
        Module::new(
            "broken",
            Grammar::new(vec![Production::new("a", vec![n("b"), t("x")])]),
            Interface::new(Vec::<&str>::new(), vec!["a"]),
        )
    }

    #[test]
    fn it_checks_every_module() {
        let outcomes = check(&[broken(), surface::tokens::module()]);
        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].ok);
        assert!(outcomes[1].ok);

        let text = outcomes.render(Format::Text).unwrap();
        assert_eq!(text, "broken: missing import: b\ntokens: ok\n");
    }

    #[test]
    fn it_renders_check_outcomes_as_json() {
        let outcomes = check(&[broken()]);
        let json: serde_json::Value =
            serde_json::from_str(&outcomes.render(Format::Json).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "module": "broken",
                "ok": false,
                "error": { "kind": "missing-import", "names": ["b"] }
            }])
        );
    }

    #[test]
    fn it_reports_interface_drift() {
        let report = InterfaceReport::from_module(&broken());
        assert!(!report.matches());
        assert_eq!(report.inferred, Interface::new(vec!["b"], vec!["a"]));

        let report = InterfaceReport::from_module(&surface::syntax::module());
        assert!(report.matches());
    }

    #[test]
    fn it_lists_terminals() {
        let report = TerminalsReport::from_module(&broken());
        assert_eq!(report.render(Format::Text).unwrap(), "x\n");
    }
}
