//! Integration tests for the command-line binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

const DEMO_OUTPUT: &str = "\
Executing Order Processing Workflow:
Validating Order...
Processing Payment...
Shipping Order...

Executing Invoice Processing Workflow:
Generating Invoice...
Sending Invoice to Customer...

Executing Custom Workflow:
Preparing Special Order...
Notifying Customer...
";

fn bin() -> Command {
    let mut cmd = Command::new(cargo_bin("workflow-factory"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_no_args_prints_demo() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .assert()
        .success()
        .stdout(DEMO_OUTPUT)
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_run_matches_no_args() -> Result<(), Box<dyn std::error::Error>> {
    bin().arg("run").assert().success().stdout(DEMO_OUTPUT);
    Ok(())
}

#[test]
fn cli_run_single_workflow() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .args(["run", "--workflow", "invoice"])
        .assert()
        .success()
        .stdout(
            "Executing Invoice Processing Workflow:\n\
             Generating Invoice...\n\
             Sending Invoice to Customer...\n",
        );
    Ok(())
}

#[test]
fn cli_run_custom_then_order() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .args(["run", "-w", "custom,order"])
        .assert()
        .success()
        .stdout(
            "Executing Custom Workflow:\n\
             Preparing Special Order...\n\
             Notifying Customer...\n\
             \n\
             Executing Order Processing Workflow:\n\
             Validating Order...\n\
             Processing Payment...\n\
             Shipping Order...\n",
        );
    Ok(())
}

#[test]
fn cli_rejects_unknown_workflow() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .args(["run", "--workflow", "refunds"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("refunds"));
    Ok(())
}

#[test]
fn cli_quiet_suppresses_output() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_verbose_adds_counts() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .args(["--verbose", "run", "-w", "order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 steps, 0 failed"));
    Ok(())
}

#[test]
fn cli_list_shows_workflows() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workflows:"))
        .stdout(predicate::str::contains(
            "validate_order → process_payment → ship_order",
        ))
        .stdout(predicate::str::contains("Custom"));
    Ok(())
}

#[test]
fn cli_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = bin().args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let names: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["order", "invoice", "custom"]);
    Ok(())
}

#[test]
fn cli_quiet_list_json_still_prints() -> Result<(), Box<dyn std::error::Error>> {
    let output = bin().args(["--quiet", "list", "--json"]).output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value.as_array().map(Vec::len), Some(3));
    Ok(())
}

#[test]
fn cli_debug_logs_to_stderr_only() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .args(["--debug", "--no-color"])
        .assert()
        .success()
        .stdout(DEMO_OUTPUT)
        .stderr(predicate::str::contains("Executing workflow"));
    Ok(())
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Abstract-factory workflow runner"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}
