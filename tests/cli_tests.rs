//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn dna_bin() -> Command {
    Command::cargo_bin("dna").unwrap()
}

#[test]
fn help_output() {
    dna_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--silent"))
        .stdout(predicate::str::contains("--output-dir"))
        .stdout(predicate::str::contains("--settle-delay-ms"))
        .stdout(predicate::str::contains("--no-export"))
        .stdout(predicate::str::contains("prompts"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_output() {
    dna_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn prompts_command_lists_catalog() {
    dna_bin()
        .arg("prompts")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Autenticidade]"))
        .stdout(predicate::str::contains("[Valores]"))
        .stdout(predicate::str::contains("[Motivação]"))
        .stdout(predicate::str::contains("[Relacionamentos]"))
        .stdout(predicate::str::contains("[Conflitos Internos]"));
}

#[test]
fn config_path_command() {
    dna_bin()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dna-session"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_help() {
    dna_bin()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn unknown_subcommand_fails() {
    dna_bin().arg("unknown").assert().failure();
}
