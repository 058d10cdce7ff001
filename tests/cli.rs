use assert_cmd::Command;

fn loan_payments() -> (Command, tempfile::TempDir) {
    // empty working directory so no stray .env is picked up
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("loan-payments").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("LOAN_PAYMENTS_DECIMALS")
        .env_remove("LOAN_PAYMENTS_LOG")
        .env_remove("RUST_LOG");
    (cmd, dir)
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_interest_only_command() {
    let (mut cmd, _dir) = loan_payments();
    cmd.args(["interest-only", "--principal", "30000", "--rate", "5"]);
    assert_eq!(stdout_of(&mut cmd).trim(), "The interest only loan payment is 125.00");
}

#[test]
fn test_conventional_command() {
    let (mut cmd, _dir) = loan_payments();
    cmd.args(["conventional", "--principal", "30000", "--rate", "5", "--months", "180"]);
    assert_eq!(stdout_of(&mut cmd).trim(), "The conventional loan payment is 237.24");
}

#[test]
fn test_display_decimals_from_environment() {
    let (mut cmd, _dir) = loan_payments();
    cmd.env("LOAN_PAYMENTS_DECIMALS", "4")
        .args(["conventional", "-p", "30000", "-r", "5", "-m", "180"]);
    assert_eq!(stdout_of(&mut cmd).trim(), "The conventional loan payment is 237.2381");
}

#[test]
fn test_display_decimals_from_dotenv_file() {
    let (mut cmd, dir) = loan_payments();
    std::fs::write(dir.path().join(".env"), "LOAN_PAYMENTS_DECIMALS=3\n").unwrap();
    cmd.args(["interest-only", "-p", "30000", "-r", "5"]);
    assert_eq!(stdout_of(&mut cmd).trim(), "The interest only loan payment is 125.000");
}

#[test]
fn test_json_output() {
    let (mut cmd, _dir) = loan_payments();
    cmd.args(["--json", "conventional", "-p", "30000", "-r", "5", "-m", "180"]);
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&mut cmd)).unwrap();
    assert_eq!(value["program"], "conventional");
    assert_eq!(value["terms"]["months"], 180);
    assert!(value["payment"].as_str().unwrap().starts_with("237.238"));
}

#[test]
fn test_schedule_command() {
    let (mut cmd, _dir) = loan_payments();
    cmd.args([
        "schedule", "-p", "1200", "-r", "0", "-m", "3", "--start", "2024-01-31",
    ]);
    let out = stdout_of(&mut cmd);
    assert!(out.contains("2024-02-29"));
    assert!(out.contains("2024-04-30"));
    assert!(out.contains("total paid:     1200.00"));
}

#[test]
fn test_rejects_zero_term() {
    let (mut cmd, _dir) = loan_payments();
    cmd.args(["conventional", "-p", "30000", "-r", "5", "-m", "0"]);
    let output = cmd.output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid term"));
}
