//! Symbol collection over alternative trees.
//!
//! Every function here borrows from the grammar it is given and returns a
//! sorted set, so callers never depend on traversal order.

use std::collections::BTreeSet;

use tracing::debug;

use crate::{Alternative, Grammar, Production};

/// Walk an alternative tree depth first, calling `visit` on every leaf.
fn walk<'a, F>(alt: &'a Alternative, visit: &mut F)
where
    F: FnMut(&'a Alternative),
{
    match alt {
        Alternative::Sequence(items) => {
            for item in items {
                walk(item, visit);
            }
        }
        Alternative::Empty
        | Alternative::Comment(_)
        | Alternative::Terminal(_)
        | Alternative::NonTerminal(_) => visit(alt),
    }
}

/// Terminal literals appearing anywhere in one production.
pub fn terminals_of(production: &Production) -> BTreeSet<&str> {
    let mut out = BTreeSet::new();
    for alt in &production.alternatives {
        walk(alt, &mut |leaf| match leaf {
            Alternative::Terminal(literal) => {
                out.insert(literal.as_str());
            }
            Alternative::Empty
            | Alternative::Comment(_)
            | Alternative::NonTerminal(_)
            | Alternative::Sequence(_) => (),
        });
    }
    out
}

/// Terminal literals appearing anywhere in the grammar.
pub fn terminals(grammar: &Grammar) -> BTreeSet<&str> {
    grammar.productions().iter().flat_map(terminals_of).collect()
}

/// Non-terminals referenced by a production, excluding the production's own
/// name. Direct self-recursion does not make a production reachable from
/// anywhere else, so it is not counted as a reference.
pub fn referenced_non_terminals(production: &Production) -> BTreeSet<&str> {
    let mut out = BTreeSet::new();
    for alt in &production.alternatives {
        walk(alt, &mut |leaf| match leaf {
            Alternative::NonTerminal(name) => {
                out.insert(name.as_str());
            }
            Alternative::Empty
            | Alternative::Comment(_)
            | Alternative::Terminal(_)
            | Alternative::Sequence(_) => (),
        });
    }
    out.remove(production.name.as_str());
    out
}

/// Union of [`referenced_non_terminals`] over every production.
///
/// Only literal self-reference is filtered. If `a` refers to `b` and `b`
/// refers to `a`, both names are in the result.
///
/// [`referenced_non_terminals`]: fn.referenced_non_terminals.html
pub fn referenced_in_grammar(grammar: &Grammar) -> BTreeSet<&str> {
    let referenced: BTreeSet<&str> = grammar
        .productions()
        .iter()
        .flat_map(referenced_non_terminals)
        .collect();
    debug!(
        productions = grammar.len(),
        referenced = referenced.len(),
        "collected referenced non-terminals"
    );
    referenced
}

/// Names of the productions defined in the grammar.
pub fn defined(grammar: &Grammar) -> BTreeSet<&str> {
    grammar.names()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{comment, empty, n, seq, t};

    fn set<'a>(names: &[&'a str]) -> BTreeSet<&'a str> {
        names.iter().cloned().collect()
    }

    #[test]
    fn it_collects_nested_terminals() {
        let grammar = Grammar::new(vec![Production::new(
            "deep",
            vec![
                seq(vec![
                    t("a"),
                    seq(vec![seq(vec![t("b"), n("other"), t("a")])]),
                ]),
                t("b"),
                empty(),
            ],
        )]);

        assert_eq!(terminals(&grammar), set(&["a", "b"]));
    }

    #[test]
    fn it_ignores_comments() {
        let production = Production::new(
            "upper",
            vec![t("A"), t("B"), comment("..."), t("Z")],
        );

        assert_eq!(terminals_of(&production), set(&["A", "B", "Z"]));
        assert!(referenced_non_terminals(&production).is_empty());
    }

    #[test]
    fn it_filters_self_reference() {
        let production = Production::new(
            "ident-tail",
            vec![empty(), seq(vec![n("ident-tail-one"), n("ident-tail")])],
        );

        assert_eq!(
            referenced_non_terminals(&production),
            set(&["ident-tail-one"])
        );
    }

    #[test]
    fn it_counts_mutual_recursion() {
        let grammar = Grammar::new(vec![
            Production::new("a", vec![n("b"), n("a")]),
            Production::new("b", vec![seq(vec![t("("), n("a"), t(")")])]),
        ]);

        assert_eq!(referenced_in_grammar(&grammar), set(&["a", "b"]));
        assert_eq!(defined(&grammar), set(&["a", "b"]));
    }

    #[test]
    fn it_collects_nothing_from_an_empty_grammar() {
        let grammar = Grammar::default();
        assert!(terminals(&grammar).is_empty());
        assert!(referenced_in_grammar(&grammar).is_empty());
    }
}
