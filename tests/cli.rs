use assert_cmd::Command;
use predicates::prelude::*;

fn grammar_check() -> Command {
    let mut cmd = Command::cargo_bin("grammar-check").unwrap();
    cmd.env_remove("GRAMMAR_CHECK_FORMAT")
        .env_remove("GRAMMAR_CHECK_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn it_checks_the_catalog() {
    grammar_check()
        .arg("check")
        .assert()
        .success()
        .stdout("tokens: ok\nsyntax: ok\n");
}

#[test]
fn it_checks_as_json() {
    grammar_check()
        .args(["--format", "json", "check", "syntax"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"module\": \"syntax\""))
        .stdout(predicate::str::contains("\"ok\": true"));
}

#[test]
fn it_reads_the_format_from_the_environment() {
    grammar_check()
        .env("GRAMMAR_CHECK_FORMAT", "json")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"productions\""));
}

#[test]
fn it_lists_syntax_terminals() {
    grammar_check()
        .args(["terminals", "syntax"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\nmatch\n"))
        .stdout(predicate::str::contains("\n::\n"));
}

#[test]
fn it_prints_interfaces() {
    grammar_check()
        .args(["interface", "syntax"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "declared imports: big-ident, ident, number, string",
        ))
        .stdout(predicate::str::contains("inferred exports: program"));
}

#[test]
fn it_rejects_unknown_modules() {
    grammar_check()
        .args(["check", "judgements"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown module `judgements`"));
}
