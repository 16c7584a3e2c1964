//! Syntax rules: definitions, kinds, types, patterns and expressions.
//!
//! Identifiers, strings and numbers come from the [`tokens`] module.
//!
//! [`tokens`]: ../tokens/index.html

use grammar::{empty, n, seq, t, Alternative, Grammar, Interface, Module, Production};

pub const NAME: &str = "syntax";

/// `empty | item | item "," name`, the shape of every comma separated list.
fn comma_list(name: &str, item: &str) -> Production {
    Production::new(
        name,
        vec![empty(), n(item), seq(vec![n(item), t(","), n(name)])],
    )
}

/// `empty | "[" inner "]"`
fn bracketed_opt(name: &str, inner: &str) -> Production {
    Production::new(name, vec![empty(), seq(vec![t("["), n(inner), t("]")])])
}

fn keyword_clause(name: &str, keyword: &str) -> Production {
    Production::new(name, vec![empty(), seq(vec![t(keyword), n("expr")])])
}

/// `keyword big-ident big-param-list-opt "{" list "}"`
fn braced_defn(keyword: &str, list: &str) -> Alternative {
    seq(vec![
        t(keyword),
        n("big-ident"),
        n("big-param-list-opt"),
        t("{"),
        n(list),
        t("}"),
    ])
}

pub fn grammar() -> Grammar {
    Grammar::new(vec![
        Production::new("program", vec![empty(), seq(vec![n("top-defn"), n("program")])]),
        Production::new(
            "top-defn",
            vec![n("type-defn"), n("struct-defn"), n("enum-defn"), n("fn-defn")],
        ),
        Production::new(
            "type-defn",
            vec![seq(vec![
                t("type"),
                n("big-ident"),
                n("big-param-list-opt"),
                t("="),
                n("type"),
            ])],
        ),
        Production::new("struct-defn", vec![braced_defn("struct", "field-list")]),
        Production::new("enum-defn", vec![braced_defn("enum", "ctor-list")]),
        Production::new(
            "fn-defn",
            vec![seq(vec![
                t("fn"),
                n("ident"),
                n("big-param-list-opt"),
                t("("),
                n("param-list"),
                t(")"),
                t(":"),
                n("type"),
                n("requires-clause"),
                n("ensures-clause"),
                n("block"),
            ])],
        ),
        bracketed_opt("big-param-list-opt", "big-param-list"),
        comma_list("big-param-list", "big-param"),
        Production::new(
            "big-param",
            vec![seq(vec![n("big-ident"), t(":"), n("kind")])],
        ),
        Production::new("kind", vec![seq(vec![n("kind-hd"), n("kind-tl")])]),
        Production::new(
            "kind-hd",
            vec![n("big-ident"), seq(vec![t("("), n("kind-list"), t(")")])],
        ),
        Production::new("kind-tl", vec![empty(), seq(vec![t("->"), n("kind")])]),
        comma_list("kind-list", "kind"),
        Production::new("type", vec![seq(vec![n("type-hd"), n("type-tl")])]),
        Production::new(
            "type-hd",
            vec![n("big-ident"), seq(vec![t("("), n("type-list"), t(")")])],
        ),
        Production::new(
            "type-tl",
            vec![
                empty(),
                seq(vec![t("->"), n("type")]),
                seq(vec![t("affects"), n("effect")]),
            ],
        ),
        comma_list("type-list", "type"),
        Production::new(
            "field-list",
            vec![
                empty(),
                seq(vec![n("ident"), t(":"), n("type")]),
                seq(vec![n("ident"), t(":"), n("type"), t(","), n("field-list")]),
            ],
        ),
        comma_list("ctor-list", "ctor"),
        Production::new(
            "ctor",
            vec![seq(vec![n("ident"), t("("), n("type"), t(")")])],
        ),
        Production::new("effect", vec![seq(vec![t("{"), n("effect-list"), t("}")])]),
        comma_list("effect-list", "big-ident"),
        comma_list("param-list", "param"),
        Production::new("param", vec![seq(vec![n("ident"), t(":"), n("type")])]),
        keyword_clause("requires-clause", "requires"),
        keyword_clause("ensures-clause", "ensures"),
        Production::new("block", vec![seq(vec![t("{"), n("block-inner"), t("}")])]),
        Production::new(
            "block-inner",
            vec![empty(), n("expr"), seq(vec![n("stmt"), n("block-inner")])],
        ),
        Production::new(
            "stmt",
            vec![seq(vec![t("let"), n("pat"), t("="), n("expr")])],
        ),
        Production::new("pat", vec![seq(vec![n("pat-hd"), n("pat-tl")])]),
        Production::new(
            "pat-hd",
            vec![
                t("_"),
                n("string"),
                n("number"),
                seq(vec![t("("), n("pat-list"), t(")")]),
                seq(vec![n("big-ident"), t("{"), n("field-pat-list"), t("}")]),
                seq(vec![n("qual-ident"), t("("), n("pat"), t(")")]),
                n("ident"),
            ],
        ),
        comma_list("pat-list", "pat"),
        Production::new(
            "pat-tl",
            vec![
                empty(),
                seq(vec![t("|"), n("pat")]),
                seq(vec![t(":"), n("type")]),
            ],
        ),
        comma_list("field-pat-list", "field-pat"),
        Production::new(
            "field-pat",
            vec![n("ident"), seq(vec![n("ident"), t(":"), n("pat")])],
        ),
        Production::new("expr", vec![seq(vec![n("expr-hd"), n("expr-tl-list")])]),
        Production::new(
            "expr-hd",
            vec![
                n("string"),
                n("number"),
                seq(vec![t("("), n("expr-list"), t(")")]),
                seq(vec![
                    n("big-ident"),
                    n("type-effect-args-opt"),
                    t("{"),
                    n("field-expr-list"),
                    t("}"),
                ]),
                seq(vec![n("qual-ident"), n("call-opt")]),
                seq(vec![t("return"), n("expr")]),
                seq(vec![t("match"), n("expr"), t("{"), n("arm-list"), t("}")]),
                n("block"),
            ],
        ),
        Production::new(
            "expr-tl-list",
            vec![
                empty(),
                seq(vec![t("."), n("ident"), n("call-opt"), n("expr-tl-list")]),
            ],
        ),
        Production::new(
            "qual-ident",
            vec![n("ident"), seq(vec![n("big-ident"), t("::"), n("ident")])],
        ),
        Production::new(
            "call-opt",
            vec![
                empty(),
                seq(vec![
                    n("type-effect-args-opt"),
                    t("("),
                    n("expr-list"),
                    t(")"),
                ]),
            ],
        ),
        bracketed_opt("type-effect-args-opt", "type-effect-list"),
        comma_list("type-effect-list", "type-effect"),
        Production::new("type-effect", vec![n("type"), n("effect")]),
        comma_list("expr-list", "expr"),
        comma_list("field-expr-list", "field-expr"),
        Production::new(
            "field-expr",
            vec![n("ident"), seq(vec![n("ident"), t(":"), n("expr")])],
        ),
        Production::new("arm-list", vec![empty(), seq(vec![n("arm"), n("arm-list")])]),
        Production::new("arm", vec![seq(vec![n("pat"), n("block")])]),
    ])
}

pub fn interface() -> Interface {
    Interface::new(vec!["big-ident", "ident", "number", "string"], vec!["program"])
}

pub fn module() -> Module {
    Module::new(NAME, grammar(), interface())
}
