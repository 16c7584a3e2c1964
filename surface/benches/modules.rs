#[macro_use]
extern crate criterion;

use criterion::Criterion;
use grammar::{referenced_in_grammar, terminals};
use surface::{modules, syntax};

fn bench_symbols(b: &mut Criterion) {
    b.bench_function("collect_syntax_terminals", |b| {
        let grammar = syntax::grammar();
        b.iter(|| terminals(&grammar).len())
    });
    b.bench_function("collect_syntax_references", |b| {
        let grammar = syntax::grammar();
        b.iter(|| referenced_in_grammar(&grammar).len())
    });
}

fn bench_verify(b: &mut Criterion) {
    b.bench_function("verify_catalog", |b| {
        let modules = modules();
        b.iter(|| modules.iter().filter(|m| m.verify().is_ok()).count())
    });
}

criterion_group!(benches, bench_symbols, bench_verify);
criterion_main!(benches);
