//! CLI REPL integration tests
//!
//! Drive the built binary through piped stdin inside a temporary data
//! directory and check both the console output and the JSON snapshots.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_cli(data_dir: &Path, input: &str) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_moneygowhere");

    let mut child = Command::new(cli_bin)
        .current_dir(data_dir)
        .args(["--no-banner"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start CLI");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for CLI")
}

fn read_json(path: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(path).expect("snapshot should exist");
    serde_json::from_str(&raw).expect("snapshot should be valid JSON")
}

#[test]
fn test_cli_additem_writes_menu_json() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_cli(
        temp_dir.path(),
        "/additem -n Chicken Rice -p 2.50\nadditem --name \"Bubble Tea\" --price 5.00\nexit\n",
    );

    assert!(
        output.status.success(),
        "CLI should exit cleanly. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Item 0 added: Chicken Rice ($2.50)."));
    assert!(stdout.contains("Goodbye!"));

    let menu = read_json(&temp_dir.path().join("menu.json"));
    assert_eq!(
        menu,
        serde_json::json!([
            { "name": "Chicken Rice", "price": 2.5 },
            { "name": "Bubble Tea", "price": 5.0 }
        ])
    );
}

#[test]
fn test_cli_order_and_refund_write_transactions_json() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_cli(
        temp_dir.path(),
        "/additem -n Chicken Rice -p 2.00\n\
         /additem -n Bubble Tea -p 5.00\n\
         /addorder -i 0 -q 10 -i bubble -q 10\n\
         /refundorder -i 1\n\
         listorder\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Subtotal: $70.00"));
    assert!(stdout.contains("Status: REFUNDED"));

    let ledger = read_json(&temp_dir.path().join("transactions.json"));
    let orders = ledger.as_array().expect("ledger should be an array");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["status"], "REFUNDED");
    assert_eq!(orders[0]["entries"][1]["name"], "Bubble Tea");
    assert_eq!(orders[0]["entries"][1]["quantity"], 10);
}

#[test]
fn test_cli_state_persists_between_runs() {
    let temp_dir = TempDir::new().unwrap();

    run_cli(temp_dir.path(), "/additem -n Laksa -p 4.50\nexit\n");
    let output = run_cli(temp_dir.path(), "listitem\nexit\n");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("| 0     | Laksa                     | 4.50  |"));
}

#[test]
fn test_cli_reports_errors_and_keeps_going() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_cli(
        temp_dir.path(),
        "/additem -n Tea -p 5.1\nfly\n/deleteitem -i 0\n3\nexit\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Price must have exactly 2 decimal places"));
    assert!(stdout.contains("The command: fly is not a valid command."));
    assert!(stdout.contains("The menu is empty."));
    assert!(!temp_dir.path().join("menu.json").exists());
}

#[test]
fn test_cli_corrupt_menu_starts_empty_with_warning() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("menu.json"), "{ not json").unwrap();

    let output = run_cli(temp_dir.path(), "listitem\nexit\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Warning:"));
    assert!(stdout.contains("The menu is empty."));
}

#[test]
fn test_cli_data_dir_flag() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("shop");
    fs::create_dir_all(&data_dir).unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_moneygowhere"))
        .current_dir(temp_dir.path())
        .args(["--no-banner", "--data-dir", data_dir.to_str().unwrap()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to start CLI");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"/additem -n Kopi -p 1.20\nexit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert!(data_dir.join("menu.json").exists());
    assert!(!temp_dir.path().join("menu.json").exists());
}
