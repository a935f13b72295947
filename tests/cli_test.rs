use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn test_cli_score_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("receipt-points"));
    cmd.arg("score").arg("tests/fixtures/target.json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("receipt,points"))
        .stdout(predicate::str::contains("1,28"));

    Ok(())
}

#[test]
fn test_cli_score_explain() {
    let mut cmd = Command::new(cargo_bin!("receipt-points"));
    cmd.arg("score")
        .arg("tests/fixtures/corner_market.json")
        .arg("--explain");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "receipt,retailer_name,round_total,quarter_total,item_pairs,item_descriptions,odd_day,afternoon,points",
        ))
        .stdout(predicate::str::contains("1,14,50,25,10,0,0,10,109"));
}

#[test]
fn test_cli_score_multiple_receipts() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", include_str!("fixtures/target.json")).unwrap();
    write!(file, "{}", include_str!("fixtures/corner_market.json")).unwrap();

    let mut cmd = Command::new(cargo_bin!("receipt-points"));
    cmd.arg("score").arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,28"))
        .stdout(predicate::str::contains("2,109"));
}

#[test]
fn test_cli_reports_malformed_receipt() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", include_str!("fixtures/target.json")).unwrap();
    writeln!(file, r#"{{"retailer": "Target", "total": 12}}"#).unwrap();

    let mut cmd = Command::new(cargo_bin!("receipt-points"));
    cmd.arg("score").arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading receipt 2"))
        .stderr(predicate::str::contains("The receipt is invalid"))
        .stderr(predicate::str::contains("invalid type"))
        .stdout(predicate::str::contains("1,28"));
}

#[test]
fn test_cli_missing_input_file_fails() {
    let mut cmd = Command::new(cargo_bin!("receipt-points"));
    cmd.arg("score").arg("tests/fixtures/no_such_file.json");

    cmd.assert().failure();
}

#[test]
fn test_cli_requires_subcommand() {
    let mut cmd = Command::new(cargo_bin!("receipt-points"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
