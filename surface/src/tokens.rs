//! Lexical tokens: comments, identifiers, strings and numbers.

use grammar::{comment, empty, n, seq, t, Grammar, Interface, Module, Production};

pub const NAME: &str = "tokens";

pub fn grammar() -> Grammar {
    Grammar::new(vec![
        Production::new("comment", vec![seq(vec![t("//"), n("comment-tail")])]),
        Production::new(
            "comment-tail",
            vec![comment("any character except newline")],
        ),
        Production::new(
            "big-ident",
            vec![seq(vec![n("upper"), n("big-ident-tail")])],
        ),
        Production::new(
            "big-ident-tail",
            vec![empty(), seq(vec![n("big-ident-tail-one"), n("big-ident-tail")])],
        ),
        Production::new(
            "big-ident-tail-one",
            vec![n("upper"), n("lower"), n("digit")],
        ),
        Production::new("ident", vec![seq(vec![n("lower"), n("ident-tail")])]),
        Production::new(
            "ident-tail",
            vec![empty(), seq(vec![n("ident-tail-one"), n("ident-tail")])],
        ),
        Production::new("ident-tail-one", vec![n("lower"), n("number"), t("_")]),
        Production::new(
            "string",
            vec![seq(vec![t("\""), n("string-inner"), t("\"")])],
        ),
        Production::new(
            "string-inner",
            vec![empty(), seq(vec![n("string-inner-one"), n("string-inner")])],
        ),
        Production::new(
            "string-inner-one",
            vec![seq(vec![comment("any character except"), t("\"")])],
        ),
        Production::new("number", vec![seq(vec![n("digit"), n("number-tail")])]),
        Production::new(
            "number-tail",
            vec![empty(), seq(vec![n("number-tail-one"), n("number-tail")])],
        ),
        Production::new("number-tail-one", vec![n("digit"), t("_")]),
        Production::new(
            "upper",
            vec![t("A"), t("B"), comment("..."), t("Z")],
        ),
        Production::new(
            "lower",
            vec![t("a"), t("b"), comment("..."), t("z")],
        ),
        Production::new(
            "digit",
            vec![t("0"), t("1"), comment("..."), t("9")],
        ),
    ])
}

/// Tokens are self-contained. `number` is used by `ident-tail-one`, so it is
/// not an export even though the syntax rules need it too.
pub fn interface() -> Interface {
    Interface::new(
        Vec::<&str>::new(),
        vec!["big-ident", "comment", "ident", "string"],
    )
}

pub fn module() -> Module {
    Module::new(NAME, grammar(), interface())
}
