//! Grammars as data.
//!
//! A [`Grammar`] is an ordered list of named [`Production`]s, and each
//! production is an alternation of [`Alternative`] trees built from
//! terminals, non-terminals, sequences, empty markers and comments.
//!
//! Grammars are split into modules (e.g. lexical tokens and syntax rules)
//! which refer to each other's non-terminals by name. A module declares what
//! it imports and what it exports, and [`verify`] checks that the declared
//! interface is exactly what the module's productions need and provide.
//!
//! Grammars are authored with the short constructor functions in this crate:
//!
//! ```
//! use grammar::{empty, n, seq, t, Grammar, Production};
//!
//! let grammar: Grammar = vec![
//!     Production::new("list", vec![empty(), seq(vec![n("item"), n("list")])]),
//!     Production::new("item", vec![t("x"), t("y")]),
//! ]
//! .into_iter()
//! .collect();
//! assert_eq!(grammar.len(), 2);
//! ```
//!
//! [`verify`]: fn.verify.html

pub mod error;
pub mod symbols;
pub mod verify;

use std::collections::BTreeSet;
use std::slice;

pub use error::{VerifyError, ViolationKind};
pub use symbols::{referenced_in_grammar, referenced_non_terminals, terminals};
pub use verify::{verify, Interface, Module};

/// One branch of a production.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Alternative {
    /// Matches the empty string.
    Empty,
    /// Documentation only, it has no grammatical meaning.
    Comment(String),
    /// A literal token.
    Terminal(String),
    /// A reference to a production by name.
    NonTerminal(String),
    /// Concatenation of the items, in order.
    Sequence(Vec<Alternative>),
}

impl Alternative {
    pub fn empty() -> Alternative {
        Alternative::Empty
    }

    pub fn comment(text: impl Into<String>) -> Alternative {
        Alternative::Comment(text.into())
    }

    pub fn terminal(literal: impl Into<String>) -> Alternative {
        Alternative::Terminal(literal.into())
    }

    pub fn non_terminal(name: impl Into<String>) -> Alternative {
        Alternative::NonTerminal(name.into())
    }

    pub fn sequence<I>(items: I) -> Alternative
    where
        I: IntoIterator<Item = Alternative>,
    {
        Alternative::Sequence(items.into_iter().collect())
    }
}

/// Shorthand for [`Alternative::Empty`].
pub fn empty() -> Alternative {
    Alternative::empty()
}

/// Shorthand for [`Alternative::Comment`].
pub fn comment(text: impl Into<String>) -> Alternative {
    Alternative::comment(text)
}

/// Shorthand for [`Alternative::Terminal`].
pub fn t(literal: impl Into<String>) -> Alternative {
    Alternative::terminal(literal)
}

/// Shorthand for [`Alternative::NonTerminal`].
pub fn n(name: impl Into<String>) -> Alternative {
    Alternative::non_terminal(name)
}

/// Shorthand for [`Alternative::Sequence`].
pub fn seq<I>(items: I) -> Alternative
where
    I: IntoIterator<Item = Alternative>,
{
    Alternative::sequence(items)
}

/// A named grammar rule. The alternatives are a disjunction: the production
/// matches whatever any one of them matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Production {
    pub name: String,
    pub alternatives: Vec<Alternative>,
}

impl Production {
    pub fn new<I>(name: impl Into<String>, alternatives: I) -> Production
    where
        I: IntoIterator<Item = Alternative>,
    {
        Production {
            name: name.into(),
            alternatives: alternatives.into_iter().collect(),
        }
    }
}

/// An ordered list of productions making up one module.
///
/// Production names are expected to be unique. This is not enforced when the
/// grammar is built; a repeated name is reported by [`verify`].
///
/// [`verify`]: fn.verify.html
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grammar {
    productions: Vec<Production>,
}

impl Grammar {
    pub fn new(productions: Vec<Production>) -> Grammar {
        Grammar { productions }
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    /// The first production with the given name.
    pub fn get(&self, name: &str) -> Option<&Production> {
        self.productions.iter().find(|p| p.name == name)
    }

    /// Names of every production defined in the grammar.
    pub fn names(&self) -> BTreeSet<&str> {
        self.productions.iter().map(|p| p.name.as_str()).collect()
    }
}

impl std::iter::FromIterator<Production> for Grammar {
    fn from_iter<I: IntoIterator<Item = Production>>(iter: I) -> Grammar {
        Grammar::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Grammar {
    type Item = &'a Production;
    type IntoIter = slice::Iter<'a, Production>;

    fn into_iter(self) -> Self::IntoIter {
        self.productions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_alternatives() {
        assert_eq!(empty(), Alternative::Empty);
        assert_eq!(comment("any"), Alternative::Comment("any".into()));
        assert_eq!(t("fn"), Alternative::Terminal("fn".into()));
        assert_eq!(n("expr"), Alternative::NonTerminal("expr".into()));
        assert_eq!(
            seq(vec![t("("), n("expr"), t(")")]),
            Alternative::Sequence(vec![
                Alternative::Terminal("(".into()),
                Alternative::NonTerminal("expr".into()),
                Alternative::Terminal(")".into()),
            ])
        );
    }

    #[test]
    fn it_looks_up_productions() {
        let grammar: Grammar = vec![
            Production::new("a", vec![n("b")]),
            Production::new("b", vec![t("x")]),
        ]
        .into_iter()
        .collect();

        assert_eq!(grammar.len(), 2);
        assert_eq!(grammar.get("b"), Some(&grammar.productions()[1]));
        assert_eq!(grammar.get("c"), None);
        assert_eq!(grammar.names().into_iter().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(grammar.into_iter().count(), 2);
    }
}
