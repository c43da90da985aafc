//! End-to-end CLI scenarios, driven through the actual `loxi` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn loxi() -> Command {
    Command::cargo_bin("loxi").unwrap()
}

fn script_file(source: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".lox").tempfile().unwrap();
    write!(file, "{source}").unwrap();
    file
}

#[test]
fn prints_sum() {
    let file = script_file("print 1 + 2;");
    loxi()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3"));
}

#[test]
fn concatenates_strings() {
    let file = script_file("print \"foo\" + \"bar\";");
    loxi()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("foobar"));
}

#[test]
fn boolean_precedence_chain() {
    let file = script_file("print !(5 - 4 > 3 * 2 == !nil);");
    loxi()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}

#[test]
fn interned_string_equality() {
    let file = script_file("print \"a\" == \"a\";");
    loxi()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}

#[test]
fn double_negation() {
    let file = script_file("print -(-3);");
    loxi()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3"));
}

#[test]
fn division_by_zero_prints_infinity() {
    let file = script_file("print 1 / 0;");
    loxi()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("inf"));
}

#[test]
fn negating_a_string_is_a_runtime_error() {
    let file = script_file("print -\"x\";");
    loxi()
        .arg(file.path())
        .assert()
        .code(70)
        .stderr(predicate::str::contains("Operand must be a number."))
        .stderr(predicate::str::contains("in script"));
}

#[test]
fn missing_operand_is_a_compile_error() {
    let file = script_file("print 1 +;");
    loxi()
        .arg(file.path())
        .assert()
        .code(65)
        .stderr(predicate::str::contains("Expect expression."));
}

#[test]
fn too_many_arguments_is_a_usage_error() {
    loxi().arg("a.lox").arg("b.lox").assert().code(64);
}

#[test]
fn nonexistent_file_is_an_io_error() {
    loxi().arg("/no/such/file.lox").assert().code(74);
}

#[test]
fn exactly_256_constants_compiles_and_257th_is_a_compile_error() {
    let mut source = String::new();
    for i in 0..256 {
        source.push_str(&format!("print {i};\n"));
    }
    let file = script_file(&source);
    loxi().arg(file.path()).assert().success();

    source.push_str("print 256;\n");
    let file = script_file(&source);
    loxi()
        .arg(file.path())
        .assert()
        .code(65)
        .stderr(predicate::str::contains("Too many constants in one chunk."));
}
