use anyhow::Result;
use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

mod common;

#[test]
fn cli_generates_from_explicit_spec() -> Result<()> {
    let temp = TempDir::new()?;

    Command::cargo_bin("astgen")?
        .arg(common::spec_path("expression.txt"))
        .arg("--output")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"));

    temp.child("expression/Expression.java")
        .assert(predicate::path::exists());
    temp.child("expression/ExpressionVisitor.java")
        .assert(predicate::path::exists());

    Ok(())
}

#[test]
fn cli_discovers_specs_in_conventional_directory() -> Result<()> {
    let temp = TempDir::new()?;
    temp.child("specs/expr.txt")
        .write_str("Expr\nUnary Token operator\n")?;

    Command::cargo_bin("astgen")?
        .arg("--output")
        .arg(temp.path())
        .assert()
        .success();

    temp.child("expr/Unary.java").assert(predicate::path::exists());

    Ok(())
}

#[test]
fn cli_fails_without_specs() -> Result<()> {
    let temp = TempDir::new()?;

    Command::cargo_bin("astgen")?
        .arg("--output")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No spec files found"));

    Ok(())
}

#[test]
fn cli_strict_flag_rejects_duplicates() -> Result<()> {
    let temp = TempDir::new()?;
    let spec = temp.child("expr.txt");
    spec.write_str("Expr\nUnary Token operator\nUnary Expr operand\n")?;

    Command::cargo_bin("astgen")?
        .arg(spec.path())
        .arg("--output")
        .arg(temp.path())
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already defined"));

    Ok(())
}
